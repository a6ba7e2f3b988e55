/// How a class names its (first) base class in the documentation AST.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BaseReference {
    /// Linked by the AST producer. `name` is the literal spelling, used when
    /// the identifier does not belong to any ingested compound.
    ByStableId { id: String, name: Option<String> },
    /// Only the literal spelling is known (templates, external types).
    ByName(String),
    #[default]
    Unresolved,
}

impl BaseReference {
    pub fn identifier(&self) -> Option<&str> {
        match self {
            BaseReference::ByStableId { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Literal spelling of the base, if the AST recorded one.
    pub fn name(&self) -> Option<&str> {
        match self {
            BaseReference::ByStableId { name, .. } => name.as_deref(),
            BaseReference::ByName(name) => Some(name),
            BaseReference::Unresolved => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, BaseReference::Unresolved)
    }
}
