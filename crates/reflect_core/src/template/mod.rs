//! Text templates with `$(name)` placeholders.
//!
//! Rendering is a pure string operation: each placeholder is replaced by
//! its value in a single left-to-right pass, so substituted text is never
//! re-scanned.

mod builtin;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{0}' does not exist")]
    Unknown(String),

    #[error("template '{template}' has no value for '$({key})'")]
    MissingValue { template: String, key: String },

    #[error("failed to read template '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Placeholder values for one instantiation.
#[derive(Clone, Debug, Default)]
pub struct Values<'a> {
    map: BTreeMap<&'a str, String>,
}

impl<'a> Values<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'a str, value: impl Into<String>) -> Self {
        self.map.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }
}

/// A named piece of parameterized text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    name: String,
    text: String,
}

impl Template {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, values: &Values<'_>) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(start) = rest.find("$(") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let key = after.find(')').map(|end| &after[..end]).filter(|key| is_key(key));
            let Some(key) = key else {
                // Not a placeholder; keep the text as written.
                out.push_str("$(");
                rest = after;
                continue;
            };

            let value = values.get(key).ok_or_else(|| TemplateError::MissingValue {
                template: self.name.clone(),
                key: key.to_string(),
            })?;
            out.push_str(value);
            rest = &after[key.len() + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn is_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The templates available to one generation run.
#[derive(Clone, Debug)]
pub struct TemplateSet {
    templates: HashMap<String, Template>,
}

impl TemplateSet {
    /// Templates targeting the engine's registration API.
    pub fn builtin() -> Self {
        let templates = builtin::BUILTIN
            .iter()
            .map(|&(name, text)| (name.to_string(), Template::new(name, text)))
            .collect();
        Self { templates }
    }

    /// Built-in templates, overridden by any `<Name>.template` file in `dir`.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let mut set = Self::builtin();
        for template in set.templates.values_mut() {
            let path = dir.join(format!("{}.template", template.name));
            if !path.is_file() {
                continue;
            }
            let text = std::fs::read_to_string(&path)
                .map_err(|source| TemplateError::Read { path: path.clone(), source })?;
            tracing::debug!("using template override '{}'", path.display());
            template.text = text;
        }
        Ok(set)
    }

    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, name: &str) -> Result<&Template, TemplateError> {
        self.templates
            .get(name)
            .ok_or_else(|| TemplateError::Unknown(name.to_string()))
    }

    pub fn render(&self, name: &str, values: &Values<'_>) -> Result<String, TemplateError> {
        self.get(name)?.render(values)
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Join fragments with newline separators.
pub fn join_lines<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (index, fragment) in fragments.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(fragment.as_ref());
    }
    out
}

/// Drop empty lines.
pub fn remove_blank_lines(text: &str) -> String {
    join_lines(text.lines().filter(|line| !line.is_empty()))
}
