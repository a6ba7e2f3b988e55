//! Documentation tag extraction.
//!
//! Tags are literal markers (`[component]`, `[property]{required}`, ...)
//! that the documentation tool leaves in paragraph text. Extraction is a
//! pure function of the paragraphs; the structural fallback for classes
//! without a role tag lives in the classifier.

use crate::config::TagSettings;
use crate::model::{Property, Role};

/// Class-level tags found in a compound's descriptions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassTags {
    pub role: Option<Role>,
    pub encodable: bool,
}

/// Scan paragraphs in order; the first role marker wins.
pub fn class_tags<'a, I>(paragraphs: I, tags: &TagSettings) -> ClassTags
where
    I: IntoIterator<Item = &'a str>,
{
    let mut found = ClassTags::default();
    for paragraph in paragraphs {
        if found.role.is_none() {
            found.role = Role::STRUCTURAL.into_iter().find(|&role| {
                tags.role_markers(role)
                    .iter()
                    .any(|marker| paragraph.contains(marker.as_str()))
            });
        }
        if tags
            .encodable
            .iter()
            .any(|marker| paragraph.contains(marker.as_str()))
        {
            found.encodable = true;
        }
    }
    found
}

/// Build a property from the first paragraph carrying the property marker.
///
/// Qualifiers only count when they appear in that same paragraph.
pub fn property_tag<'a, I>(name: &str, paragraphs: I, tags: &TagSettings) -> Option<Property>
where
    I: IntoIterator<Item = &'a str>,
{
    let paragraph = paragraphs
        .into_iter()
        .find(|paragraph| paragraph.contains(tags.property.as_str()))?;

    let mut property = Property::new(name);
    property.is_required = paragraph.contains(tags.required.as_str());
    property.is_enum = paragraph.contains(tags.enumeration.as_str());
    property.is_vector = paragraph.contains(tags.vector.as_str());
    Some(property)
}
