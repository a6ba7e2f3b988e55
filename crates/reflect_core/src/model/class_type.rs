use super::{BaseReference, Property, Role, TypeId};
use std::path::PathBuf;

/// A public class (or struct) compound.
///
/// Built once by ingestion, completed by the linking pass (`resolved_base`,
/// `effective_base_name`, `is_derived_from`, `within_template`) and the
/// classifier (`role`), then only read by the emitter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassType {
    pub header: Option<PathBuf>,
    pub identifier: Option<String>,
    pub qualified_name: String,
    pub is_template: bool,
    pub is_derived_from: bool,
    pub within_template: bool,
    pub base: BaseReference,
    pub resolved_base: Option<TypeId>,
    pub effective_base_name: Option<String>,
    pub role: Role,
    pub encodable: bool,
    pub properties: Vec<Property>,
    /// Identifiers of compounds nested in this class.
    pub inner_classes: Vec<String>,
}

impl ClassType {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Self::default()
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_header(mut self, header: impl Into<PathBuf>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_base(mut self, base: BaseReference) -> Self {
        self.base = base;
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn simple_name(&self) -> &str {
        super::simple_name(&self.qualified_name)
    }

    /// Whether the class gets generated encode/decode functions.
    pub fn is_serializable(&self) -> bool {
        self.encodable || matches!(self.role, Role::Component | Role::System)
    }
}
