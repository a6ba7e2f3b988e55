//! In-memory model of the types described by the documentation AST.

mod base_reference;
mod class_type;
mod enum_type;
mod property;
mod role;
mod type_id;
mod type_model;
mod types;

pub use base_reference::BaseReference;
pub use class_type::ClassType;
pub use enum_type::{enum_value_name, EnumType};
pub use property::Property;
pub use role::Role;
pub use type_id::TypeId;
pub use type_model::TypeModel;
pub use types::{simple_name, Type};
