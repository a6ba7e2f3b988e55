use super::tags::{class_tags, property_tag};
use super::IngestError;
use crate::config::TagSettings;
use crate::model::{BaseReference, ClassType, EnumType, Type};
use roxmltree::{Document, Node};
use std::path::PathBuf;

/// Parse one AST document into the types it declares.
///
/// An unparseable document is an error; a malformed compound inside an
/// otherwise valid document is logged and skipped.
pub fn parse_document(text: &str, tags: &TagSettings) -> Result<Vec<Type>, IngestError> {
    let document = Document::parse(text)?;
    let mut types = Vec::new();

    for compound in document
        .descendants()
        .filter(|node| node.has_tag_name("compounddef"))
    {
        match parse_compound(compound, tags) {
            Ok(found) => types.extend(found),
            Err(err) => tracing::warn!("skipping compound: {err}"),
        }
    }

    Ok(types)
}

fn parse_compound(compound: Node<'_, '_>, tags: &TagSettings) -> Result<Vec<Type>, IngestError> {
    let kind = compound.attribute("kind").ok_or(IngestError::MissingField {
        kind: "unnamed".to_string(),
        field: "kind",
    })?;

    match kind {
        "namespace" => parse_namespace(compound),
        "class" | "struct" => Ok(parse_class(compound, kind, tags)?
            .map(Type::Class)
            .into_iter()
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn parse_namespace(compound: Node<'_, '_>) -> Result<Vec<Type>, IngestError> {
    let namespace = child_text(compound, "compoundname").ok_or(IngestError::MissingField {
        kind: "namespace".to_string(),
        field: "compoundname",
    })?;

    let enums = compound
        .descendants()
        .filter(|node| node.has_tag_name("memberdef") && node.attribute("kind") == Some("enum"))
        .filter_map(|member| {
            let name = child_text(member, "name")?;
            let mut ty = EnumType::new(format!("{namespace}::{name}"));
            ty.identifier = member.attribute("id").map(str::to_string);
            ty.header = location(member);
            ty.scoped = member.attribute("strong") == Some("yes");
            ty.values = member
                .children()
                .filter(|node| node.has_tag_name("enumvalue"))
                .filter_map(|value| child_text(value, "name"))
                .collect();
            Some(Type::Enum(ty))
        })
        .collect();

    Ok(enums)
}

fn parse_class(
    compound: Node<'_, '_>,
    kind: &str,
    tags: &TagSettings,
) -> Result<Option<ClassType>, IngestError> {
    let missing = |field| IngestError::MissingField {
        kind: kind.to_string(),
        field,
    };

    if compound.attribute("prot").ok_or_else(|| missing("prot"))? != "public" {
        return Ok(None);
    }
    let identifier = compound.attribute("id").ok_or_else(|| missing("id"))?;
    let name = child_text(compound, "compoundname").ok_or_else(|| missing("compoundname"))?;

    let mut class = ClassType::new(name).with_identifier(identifier);
    class.header = location(compound);
    class.is_template = child(compound, "templateparamlist").is_some();
    class.base = base_reference(compound);
    class.inner_classes = compound
        .children()
        .filter(|node| node.has_tag_name("innerclass"))
        .filter_map(|node| node.attribute("refid").map(str::to_string))
        .collect();

    let found = class_tags(paragraphs(compound).iter().map(String::as_str), tags);
    class.role = found.role.unwrap_or_default();
    class.encodable = found.encodable;

    for member in compound
        .children()
        .filter(|node| node.has_tag_name("sectiondef"))
        .flat_map(|section| section.children())
        .filter(|node| node.has_tag_name("memberdef"))
    {
        if member.attribute("prot") == Some("private") {
            continue;
        }
        let Some(member_name) = child_text(member, "name") else {
            continue;
        };
        let texts = paragraphs(member);
        let Some(mut property) = property_tag(&member_name, texts.iter().map(String::as_str), tags)
        else {
            continue;
        };

        if let Some(ty) = child(member, "type") {
            if text_of(ty).trim_start().starts_with("std::vector") {
                property.is_vector = true;
            }
            property.type_ref = ty
                .children()
                .find(|node| node.has_tag_name("ref"))
                .and_then(|node| node.attribute("refid"))
                .map(str::to_string);
        }
        class.properties.push(property);
    }

    Ok(Some(class))
}

fn base_reference(compound: Node<'_, '_>) -> BaseReference {
    let Some(base) = child(compound, "basecompoundref") else {
        return BaseReference::Unresolved;
    };
    let name = Some(text_of(base).trim().to_string()).filter(|name| !name.is_empty());

    match (base.attribute("refid"), name) {
        (Some(id), name) => BaseReference::ByStableId {
            id: id.to_string(),
            name,
        },
        (None, Some(name)) => BaseReference::ByName(name),
        (None, None) => BaseReference::Unresolved,
    }
}

/// Paragraph texts of the detailed then brief description.
fn paragraphs(node: Node<'_, '_>) -> Vec<String> {
    ["detaileddescription", "briefdescription"]
        .into_iter()
        .filter_map(|name| child(node, name))
        .flat_map(|description| description.children())
        .filter(|node| node.has_tag_name("para"))
        .map(text_of)
        .collect()
}

fn location(node: Node<'_, '_>) -> Option<PathBuf> {
    child(node, "location")?
        .attribute("file")
        .map(PathBuf::from)
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| child.has_tag_name(name))
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    let text = text_of(child(node, name)?);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// All text beneath `node`, in document order.
fn text_of(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|node| node.is_text())
        .filter_map(|node| node.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use std::path::Path;

    fn parse(xml: &str) -> Vec<Type> {
        parse_document(xml, &TagSettings::default()).unwrap()
    }

    #[test]
    fn namespace_enums_keep_declaration_order() {
        let types = parse(
            r#"<doxygen>
              <compounddef kind="namespace" id="namespacehect">
                <compoundname>hect</compoundname>
                <sectiondef kind="enum">
                  <memberdef kind="enum" id="namespacehect_1a1" prot="public" strong="no">
                    <name>Position</name>
                    <enumvalue id="v1"><name>Position_Z</name></enumvalue>
                    <enumvalue id="v2"><name>Position_X</name></enumvalue>
                    <location file="/src/Hect/Position.h" line="3"/>
                  </memberdef>
                  <memberdef kind="function" id="f1" prot="public"><name>helper</name></memberdef>
                </sectiondef>
              </compounddef>
            </doxygen>"#,
        );

        assert_eq!(types.len(), 1);
        let ty = types[0].as_enum().unwrap();
        assert_eq!(ty.qualified_name, "hect::Position");
        assert_eq!(ty.values, ["Position_Z", "Position_X"]);
        assert_eq!(ty.identifier.as_deref(), Some("namespacehect_1a1"));
        assert_eq!(ty.header.as_deref(), Some(Path::new("/src/Hect/Position.h")));
        assert!(!ty.scoped);
    }

    #[test]
    fn class_tags_properties_and_base() {
        let types = parse(
            r#"<doxygen>
              <compounddef kind="class" id="classhect_1_1Transform" prot="public">
                <compoundname>hect::Transform</compoundname>
                <basecompoundref refid="classhect_1_1Component" prot="public">hect::Component&lt; Transform &gt;</basecompoundref>
                <briefdescription><para>A transform.</para></briefdescription>
                <detaileddescription><para>[component]</para></detaileddescription>
                <sectiondef kind="public-attrib">
                  <memberdef kind="variable" id="m1" prot="public">
                    <type><ref refid="classhect_1_1Vector3">Vector3</ref></type>
                    <name>position</name>
                    <detaileddescription><para>[property]{required}</para></detaileddescription>
                  </memberdef>
                  <memberdef kind="variable" id="m2" prot="public">
                    <type>std::vector&lt; Mesh &gt;</type>
                    <name>meshes</name>
                    <briefdescription><para>[property]</para></briefdescription>
                  </memberdef>
                  <memberdef kind="variable" id="m3" prot="private">
                    <type>int</type>
                    <name>secret</name>
                    <briefdescription><para>[property]</para></briefdescription>
                  </memberdef>
                  <memberdef kind="variable" id="m4" prot="public">
                    <type>int</type>
                    <name>untagged</name>
                  </memberdef>
                </sectiondef>
                <location file="/src/Hect/Transform.h"/>
              </compounddef>
            </doxygen>"#,
        );

        let class = types[0].as_class().unwrap();
        assert_eq!(class.qualified_name, "hect::Transform");
        assert_eq!(class.simple_name(), "Transform");
        assert_eq!(class.role, Role::Component);
        assert_eq!(
            class.base,
            BaseReference::ByStableId {
                id: "classhect_1_1Component".to_string(),
                name: Some("hect::Component< Transform >".to_string()),
            }
        );

        let names: Vec<_> = class.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["position", "meshes"]);
        assert!(class.properties[0].is_required);
        assert_eq!(
            class.properties[0].type_ref.as_deref(),
            Some("classhect_1_1Vector3")
        );
        assert!(class.properties[1].is_vector);
        assert!(!class.properties[1].is_required);
    }

    #[test]
    fn template_and_name_only_base() {
        let types = parse(
            r#"<doxygen>
              <compounddef kind="class" id="c1" prot="public">
                <compoundname>hect::Pool</compoundname>
                <templateparamlist><param><type>typename T</type></param></templateparamlist>
                <basecompoundref prot="public">Uncopyable</basecompoundref>
                <innerclass refid="c1_iter" prot="public">hect::Pool::Iterator</innerclass>
              </compounddef>
            </doxygen>"#,
        );

        let class = types[0].as_class().unwrap();
        assert!(class.is_template);
        assert_eq!(class.base, BaseReference::ByName("Uncopyable".to_string()));
        assert_eq!(class.inner_classes, ["c1_iter"]);
        assert!(class.header.is_none());
    }

    #[test]
    fn non_public_and_malformed_compounds_are_skipped() {
        let types = parse(
            r#"<doxygen>
              <compounddef kind="class" id="c1" prot="private">
                <compoundname>hect::Hidden</compoundname>
              </compounddef>
              <compounddef kind="class" prot="public">
                <compoundname>hect::NoId</compoundname>
              </compounddef>
              <compounddef kind="file" id="f1"><compoundname>Foo.h</compoundname></compounddef>
              <compounddef kind="struct" id="s1" prot="public">
                <compoundname>hect::Plain</compoundname>
              </compounddef>
            </doxygen>"#,
        );

        assert_eq!(types.len(), 1);
        assert_eq!(types[0].qualified_name(), "hect::Plain");
    }

    #[test]
    fn unparseable_document_is_an_error() {
        let err = parse_document("<doxygen>", &TagSettings::default()).unwrap_err();
        assert!(matches!(err, IngestError::Xml(_)));
    }
}
