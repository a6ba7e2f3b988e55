//! Generator settings

use crate::model::Role;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for one generation run.
///
/// Every field has a default matching the engine's conventions, so a config
/// file only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Header patterns scanned for staleness and handed to the AST producer.
    pub file_patterns: Vec<String>,
    pub output_file_name: String,
    /// Subdirectory of the output directory holding intermediate AST files.
    pub scratch_dir_name: String,
    /// Directory of `<Name>.template` files overriding the built-in templates.
    pub template_dir: Option<PathBuf>,
    /// Classes whose simple name contains this are never registered.
    pub iterator_marker: String,
    pub doxygen_executable: String,
    pub tags: TagSettings,
    pub bases: BaseSettings,
}

/// Documentation markers recognised in brief/detailed descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    pub component: Vec<String>,
    pub system: Vec<String>,
    pub scene: Vec<String>,
    pub encodable: Vec<String>,
    pub property: String,
    pub required: String,
    #[serde(rename = "enum")]
    pub enumeration: String,
    pub vector: String,
}

/// Base class names that give a class its role when it has no role tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSettings {
    pub component: Vec<String>,
    pub system: Vec<String>,
    pub scene: Vec<String>,
}

impl GeneratorConfig {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl TagSettings {
    pub fn role_markers(&self, role: Role) -> &[String] {
        match role {
            Role::Component => &self.component,
            Role::System => &self.system,
            Role::Scene => &self.scene,
            Role::None => &[],
        }
    }
}

impl BaseSettings {
    pub fn targets(&self, role: Role) -> &[String] {
        match role {
            Role::Component => &self.component,
            Role::System => &self.system,
            Role::Scene => &self.scene,
            Role::None => &[],
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            file_patterns: vec!["*.h".to_string()],
            output_file_name: "RegisterTypes.h".to_string(),
            scratch_dir_name: "xml".to_string(),
            template_dir: None,
            iterator_marker: "Iterator".to_string(),
            doxygen_executable: "doxygen".to_string(),
            tags: TagSettings::default(),
            bases: BaseSettings::default(),
        }
    }
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            component: vec!["[component]".to_string()],
            system: vec!["[system]".to_string()],
            scene: vec!["[scene]".to_string(), "[gamemode]".to_string()],
            encodable: vec!["[encodable]".to_string()],
            property: "[property]".to_string(),
            required: "{required}".to_string(),
            enumeration: "{enum}".to_string(),
            vector: "{vector}".to_string(),
        }
    }
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            component: vec!["hect::Component".to_string(), "Component".to_string()],
            system: vec!["hect::System".to_string(), "System".to_string()],
            scene: vec!["hect::Scene".to_string(), "Scene".to_string()],
        }
    }
}
