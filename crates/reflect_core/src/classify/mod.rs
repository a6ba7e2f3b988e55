//! Role classification.
//!
//! Roles come from documentation tags first (set during ingestion). Classes
//! without a tagged role are then classified by walking their base chain
//! against the configured base names for each role, in precedence order
//! component, system, scene.

mod base_chain;
mod error;
mod link;

pub use base_chain::{base_name_matches, has_base_of};
pub use error::ClassifyError;
pub use link::{link, resolve_base};

use crate::config::{BaseSettings, GeneratorConfig};
use crate::model::{ClassType, Role, TypeId, TypeModel};

/// Assign structural roles to every untagged class of a linked model.
pub fn classify(model: &mut TypeModel, bases: &BaseSettings) -> Result<(), ClassifyError> {
    for handle in model.class_handles() {
        if model.class(handle).is_some_and(|class| !class.role.is_none()) {
            continue;
        }
        if let Some(role) = structural_role(model, handle, bases)? {
            if let Some(class) = model.class_mut(handle) {
                tracing::debug!("'{}' classified as {role} by inheritance", class.qualified_name);
                class.role = role;
            }
        }
    }
    Ok(())
}

/// First role whose base names appear on the class's base chain.
pub fn structural_role(
    model: &TypeModel,
    handle: TypeId,
    bases: &BaseSettings,
) -> Result<Option<Role>, ClassifyError> {
    for role in Role::STRUCTURAL {
        if has_base_of(model, handle, bases.targets(role))? {
            return Ok(Some(role));
        }
    }
    Ok(None)
}

/// Whether a class names a concrete type that can be registered.
pub fn is_registrable(class: &ClassType, config: &GeneratorConfig) -> bool {
    !class.is_template
        && !class.within_template
        && (config.iterator_marker.is_empty()
            || !class.simple_name().contains(config.iterator_marker.as_str()))
}

/// Types to register, grouped by registry and sorted by qualified name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationPlan {
    pub enums: Vec<TypeId>,
    pub classes: Vec<TypeId>,
    pub components: Vec<TypeId>,
    pub systems: Vec<TypeId>,
    pub scenes: Vec<TypeId>,
}

impl RegistrationPlan {
    /// Select what a classified model registers.
    ///
    /// Systems are only registered when no other class derives from them;
    /// components and scenes are registered regardless.
    pub fn new(model: &TypeModel, config: &GeneratorConfig) -> Self {
        let mut plan = Self {
            enums: model.enums().map(|(handle, _)| handle).collect(),
            ..Self::default()
        };

        for (handle, class) in model.classes() {
            if !is_registrable(class, config) {
                continue;
            }
            plan.classes.push(handle);
            match class.role {
                Role::Component => plan.components.push(handle),
                Role::System if !class.is_derived_from => plan.systems.push(handle),
                Role::System => {
                    tracing::debug!("'{}' is a base system, not registered", class.qualified_name)
                }
                Role::Scene => plan.scenes.push(handle),
                Role::None => {}
            }
        }

        for list in [
            &mut plan.enums,
            &mut plan.classes,
            &mut plan.components,
            &mut plan.systems,
            &mut plan.scenes,
        ] {
            list.sort_by(|a, b| qualified_name(model, *a).cmp(qualified_name(model, *b)));
        }

        plan
    }

    pub fn role_handles(&self, role: Role) -> &[TypeId] {
        match role {
            Role::Component => &self.components,
            Role::System => &self.systems,
            Role::Scene => &self.scenes,
            Role::None => &[],
        }
    }
}

fn qualified_name(model: &TypeModel, handle: TypeId) -> &str {
    model.get(handle).map_or("", |ty| ty.qualified_name())
}
