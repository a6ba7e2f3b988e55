//! Inheritance-chain queries over a linked model.

use super::ClassifyError;
use crate::model::{TypeId, TypeModel};

/// Whether any class on `handle`'s base chain is named by one of `targets`.
///
/// Walks the links produced by [`link`](super::link). The walk stops at the
/// first base that cannot be resolved to an ingested class. A chain longer
/// than the model is a cycle and is reported as an error.
pub fn has_base_of(
    model: &TypeModel,
    handle: TypeId,
    targets: &[String],
) -> Result<bool, ClassifyError> {
    let mut current = handle;

    for _ in 0..model.len() {
        let class = model
            .class(current)
            .ok_or(ClassifyError::NotAClass(current))?;

        if let Some(base_name) = class.effective_base_name.as_deref() {
            if targets
                .iter()
                .any(|target| base_name_matches(base_name, target))
            {
                return Ok(true);
            }
        }

        match class.resolved_base {
            Some(base) => current = base,
            None => return Ok(false),
        }
    }

    Err(ClassifyError::BaseCycle {
        name: model
            .get(handle)
            .map(|ty| ty.qualified_name().to_string())
            .unwrap_or_default(),
    })
}

/// Exact match, or an instantiation of a target given without arguments:
/// `System< Render >` matches `System`.
pub fn base_name_matches(base_name: &str, target: &str) -> bool {
    let base_name = base_name.trim();
    if base_name == target {
        return true;
    }
    !target.contains('<')
        && base_name
            .strip_prefix(target)
            .is_some_and(|rest| rest.trim_start().starts_with('<'))
}
