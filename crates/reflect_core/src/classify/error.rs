use crate::model::TypeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("base chain of '{name}' is cyclic")]
    BaseCycle { name: String },

    #[error("type {0} is not a class")]
    NotAClass(TypeId),
}
