/// A documented data member exposed to the encoder/decoder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub is_required: bool,
    /// Encoded element-wise.
    pub is_vector: bool,
    /// Encoded through the enum's string names.
    pub is_enum: bool,
    /// Identifier of the member's declared type, when the AST links it.
    pub type_ref: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn vector(mut self) -> Self {
        self.is_vector = true;
        self
    }

    pub fn enumeration(mut self) -> Self {
        self.is_enum = true;
        self
    }
}
