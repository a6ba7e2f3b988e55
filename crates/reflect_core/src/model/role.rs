use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry a class is registered into.
///
/// Roles are mutually exclusive: the first documentation tag wins, and the
/// base-chain fallback only runs for classes without a tagged role.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    None,
    Component,
    System,
    Scene,
}

impl Role {
    /// Roles that are checked against the inheritance chain, in precedence order.
    pub const STRUCTURAL: [Role; 3] = [Role::Component, Role::System, Role::Scene];

    pub fn is_none(self) -> bool {
        self == Role::None
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::None => "none",
            Role::Component => "component",
            Role::System => "system",
            Role::Scene => "scene",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
