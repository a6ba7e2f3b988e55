use super::{ClassType, EnumType};
use std::path::Path;

/// A discovered type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Enum(EnumType),
    Class(ClassType),
}

impl Type {
    pub fn header(&self) -> Option<&Path> {
        match self {
            Type::Enum(ty) => ty.header.as_deref(),
            Type::Class(ty) => ty.header.as_deref(),
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Type::Enum(ty) => ty.identifier.as_deref(),
            Type::Class(ty) => ty.identifier.as_deref(),
        }
    }

    pub fn qualified_name(&self) -> &str {
        match self {
            Type::Enum(ty) => &ty.qualified_name,
            Type::Class(ty) => &ty.qualified_name,
        }
    }

    pub fn simple_name(&self) -> &str {
        simple_name(self.qualified_name())
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            Type::Class(ty) => Some(ty),
            Type::Enum(_) => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Type::Enum(ty) => Some(ty),
            Type::Class(_) => None,
        }
    }
}

impl From<EnumType> for Type {
    fn from(ty: EnumType) -> Self {
        Type::Enum(ty)
    }
}

impl From<ClassType> for Type {
    fn from(ty: ClassType) -> Self {
        Type::Class(ty)
    }
}

/// Strip the leading namespace segment: `hect::Transform` becomes `Transform`.
pub fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .split_once("::")
        .map_or(qualified_name, |(_, rest)| rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_strips_first_segment_only() {
        assert_eq!(simple_name("hect::Transform"), "Transform");
        assert_eq!(simple_name("hect::Mesh::Handle"), "Mesh::Handle");
        assert_eq!(simple_name("Global"), "Global");
    }
}
