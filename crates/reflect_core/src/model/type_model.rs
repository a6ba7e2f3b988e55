use super::{ClassType, EnumType, Type, TypeId};
use std::collections::HashMap;

/// Every type found in one generation run, in ingestion order.
///
/// Lookups by identifier and by name are built as types are pushed; the
/// first type to claim a name keeps it.
#[derive(Clone, Debug, Default)]
pub struct TypeModel {
    types: Vec<Type>,
    id_lookup: HashMap<String, TypeId>,
    name_lookup: HashMap<String, TypeId>,
    simple_name_lookup: HashMap<String, TypeId>,
}

impl TypeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ty: impl Into<Type>) -> TypeId {
        let ty = ty.into();
        let handle = TypeId::new(self.types.len());

        if let Some(identifier) = ty.identifier() {
            self.id_lookup
                .entry(identifier.to_string())
                .or_insert(handle);
        }
        self.name_lookup
            .entry(ty.qualified_name().to_string())
            .or_insert(handle);
        self.simple_name_lookup
            .entry(ty.simple_name().to_string())
            .or_insert(handle);

        self.types.push(ty);
        handle
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, handle: TypeId) -> Option<&Type> {
        self.types.get(handle.index())
    }

    pub fn class(&self, handle: TypeId) -> Option<&ClassType> {
        self.get(handle).and_then(Type::as_class)
    }

    pub(crate) fn class_mut(&mut self, handle: TypeId) -> Option<&mut ClassType> {
        match self.types.get_mut(handle.index()) {
            Some(Type::Class(ty)) => Some(ty),
            _ => None,
        }
    }

    pub fn by_identifier(&self, identifier: &str) -> Option<TypeId> {
        self.id_lookup.get(identifier).copied()
    }

    /// Look up by fully qualified name, falling back to a name written
    /// without its leading namespace (`Entity` or `Mesh::Handle` for
    /// `hect::Mesh::Handle`). A name in another namespace never matches.
    pub fn by_name(&self, name: &str) -> Option<TypeId> {
        let name = name.trim();
        self.name_lookup
            .get(name)
            .or_else(|| self.simple_name_lookup.get(name))
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &Type)> {
        self.types
            .iter()
            .enumerate()
            .map(|(index, ty)| (TypeId::new(index), ty))
    }

    pub fn enums(&self) -> impl Iterator<Item = (TypeId, &EnumType)> {
        self.iter()
            .filter_map(|(handle, ty)| ty.as_enum().map(|ty| (handle, ty)))
    }

    pub fn classes(&self) -> impl Iterator<Item = (TypeId, &ClassType)> {
        self.iter()
            .filter_map(|(handle, ty)| ty.as_class().map(|ty| (handle, ty)))
    }

    pub fn class_handles(&self) -> Vec<TypeId> {
        self.classes().map(|(handle, _)| handle).collect()
    }
}

impl FromIterator<Type> for TypeModel {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        let mut model = TypeModel::new();
        for ty in iter {
            model.push(ty);
        }
        model
    }
}
