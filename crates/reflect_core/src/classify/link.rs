//! Linking pass: turns base and type references into handles.

use crate::model::{BaseReference, Type, TypeId, TypeModel};

/// Resolve every class's base reference, mark classes used as bases, infer
/// enum-valued properties, and flag classes nested in templates.
///
/// Runs once, after ingestion has seen the whole AST.
pub fn link(model: &mut TypeModel) {
    resolve_bases(model);
    infer_enum_properties(model);
    mark_template_members(model);
}

/// Identifier lookup first, then name lookup. Only classes qualify.
pub fn resolve_base(model: &TypeModel, base: &BaseReference) -> Option<TypeId> {
    let is_class = |handle: &TypeId| model.class(*handle).is_some();

    base.identifier()
        .and_then(|id| model.by_identifier(id))
        .filter(is_class)
        .or_else(|| base.name().and_then(|name| model.by_name(name)).filter(is_class))
}

fn resolve_bases(model: &mut TypeModel) {
    let links: Vec<_> = model
        .classes()
        .map(|(handle, class)| {
            let resolved = resolve_base(model, &class.base).filter(|&base| base != handle);
            let effective = match resolved {
                Some(base) => model.get(base).map(|ty| ty.qualified_name().to_string()),
                None => class.base.name().map(str::to_string),
            };
            (handle, resolved, effective)
        })
        .collect();

    for (handle, resolved, effective) in links {
        if let Some(class) = model.class_mut(handle) {
            class.resolved_base = resolved;
            class.effective_base_name = effective;
        }
        if let Some(base) = resolved.and_then(|base| model.class_mut(base)) {
            base.is_derived_from = true;
        }
    }
}

fn infer_enum_properties(model: &mut TypeModel) {
    let mut enum_properties = Vec::new();
    for (handle, class) in model.classes() {
        for (index, property) in class.properties.iter().enumerate() {
            let is_enum = property
                .type_ref
                .as_deref()
                .and_then(|id| model.by_identifier(id))
                .and_then(|ty| model.get(ty))
                .is_some_and(|ty| matches!(ty, Type::Enum(_)));
            if is_enum && !property.is_enum {
                enum_properties.push((handle, index));
            }
        }
    }

    for (handle, index) in enum_properties {
        if let Some(property) = model
            .class_mut(handle)
            .and_then(|class| class.properties.get_mut(index))
        {
            property.is_enum = true;
        }
    }
}

fn mark_template_members(model: &mut TypeModel) {
    let mut pending: Vec<TypeId> = model
        .classes()
        .filter(|(_, class)| class.is_template)
        .flat_map(|(_, class)| class.inner_classes.iter())
        .filter_map(|id| model.by_identifier(id))
        .collect();

    while let Some(handle) = pending.pop() {
        let Some(class) = model.class_mut(handle) else {
            continue;
        };
        if class.within_template {
            continue;
        }
        class.within_template = true;
        let inner = class.inner_classes.clone();
        pending.extend(inner.iter().filter_map(|id| model.by_identifier(id)));
    }
}
