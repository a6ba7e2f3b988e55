use std::path::PathBuf;

/// An enumeration declared at namespace scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumType {
    pub header: Option<PathBuf>,
    pub identifier: Option<String>,
    pub qualified_name: String,
    /// Enumerator names in declaration order.
    pub values: Vec<String>,
    /// `enum class`: enumerators live inside the enum's own scope.
    pub scoped: bool,
}

impl EnumType {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Self::default()
        }
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_header(mut self, header: impl Into<PathBuf>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Spelling of an enumerator usable from outside the enum's namespace.
    pub fn qualified_value(&self, value: &str) -> String {
        let scope = if self.scoped {
            Some(self.qualified_name.as_str())
        } else {
            self.qualified_name.rsplit_once("::").map(|(scope, _)| scope)
        };
        match scope {
            Some(scope) => format!("{scope}::{value}"),
            None => value.to_string(),
        }
    }
}

/// Registered string name of an enumerator: `Position_X` becomes `X`.
pub fn enum_value_name(value: &str) -> &str {
    value.split_once('_').map_or(value, |(_, rest)| rest)
}
