//! Registration source emission.
//!
//! Turns a classified model and its [`RegistrationPlan`] into one C++
//! translation unit: sorted includes, enum registrations, class
//! registrations with encode/decode functions, then one registry call per
//! component, system and scene.

use crate::classify::RegistrationPlan;
use crate::model::{enum_value_name, simple_name, ClassType, EnumType, Property, Role, TypeModel};
use crate::paths::{include_spelling, relative_to};
use crate::template::{join_lines, remove_blank_lines, TemplateError, TemplateSet, Values};
use std::collections::BTreeSet;
use std::path::Path;

/// Everything emission needs besides the model.
pub struct Emitter<'a> {
    pub templates: &'a TemplateSet,
    /// Directory the generated file lives in; includes are relative to it.
    pub output_dir: &'a Path,
    /// Namespace enclosing the generated `registerTypes` function.
    pub namespace: &'a str,
}

impl Emitter<'_> {
    pub fn emit(&self, model: &TypeModel, plan: &RegistrationPlan) -> Result<String, TemplateError> {
        let includes = self.includes(model, plan)?;

        let register_enums = plan
            .enums
            .iter()
            .filter_map(|&handle| model.get(handle).and_then(|ty| ty.as_enum()))
            .map(|ty| self.register_enum(ty))
            .collect::<Result<Vec<_>, _>>()?;

        let register_classes = plan
            .classes
            .iter()
            .filter_map(|&handle| model.class(handle))
            .map(|class| self.register_class(class))
            .collect::<Result<Vec<_>, _>>()?;

        let values = Values::new()
            .with("includes", includes)
            .with("namespace", self.namespace)
            .with("register_enums", remove_blank_lines(&join_lines(register_enums)))
            .with("register_classes", remove_blank_lines(&join_lines(register_classes)))
            .with("register_components", self.register_role(model, plan, Role::Component)?)
            .with("register_systems", self.register_role(model, plan, Role::System)?)
            .with("register_scenes", self.register_role(model, plan, Role::Scene)?);

        let mut code = self.templates.render("Layout", &values)?;
        if !code.ends_with('\n') {
            code.push('\n');
        }
        Ok(code)
    }

    /// One `#include` per distinct header, sorted. Types without a header
    /// are left out.
    fn includes(&self, model: &TypeModel, plan: &RegistrationPlan) -> Result<String, TemplateError> {
        let headers: BTreeSet<String> = plan
            .enums
            .iter()
            .chain(&plan.classes)
            .filter_map(|&handle| model.get(handle)?.header())
            .map(|header| include_spelling(&relative_to(header, self.output_dir)))
            .collect();

        let includes = headers
            .iter()
            .map(|header| {
                self.templates
                    .render("Include", &Values::new().with("file_name", header.as_str()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(join_lines(includes))
    }

    fn register_enum(&self, ty: &EnumType) -> Result<String, TemplateError> {
        let add_values = ty
            .values
            .iter()
            .map(|value| {
                let values = Values::new()
                    .with("type_name", ty.qualified_name.as_str())
                    .with("value", ty.qualified_value(value))
                    .with("value_name", enum_value_name(value));
                self.templates.render("AddEnumValue", &values)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let values = Values::new()
            .with("type_name", ty.qualified_name.as_str())
            .with("registered_name", simple_name(&ty.qualified_name))
            .with("add_enum_values", join_lines(add_values));
        self.templates.render("RegisterEnum", &values)
    }

    fn register_class(&self, class: &ClassType) -> Result<String, TemplateError> {
        let (encode, decode) = if !class.properties.is_empty() && class.is_serializable() {
            (self.encode_function(class)?, self.decode_function(class)?)
        } else {
            (String::new(), String::new())
        };

        let values = Values::new()
            .with("type_name", class.qualified_name.as_str())
            .with("registered_name", class.simple_name())
            .with("set_encode_function", encode)
            .with("set_decode_function", decode);
        self.templates.render("RegisterClass", &values)
    }

    fn encode_function(&self, class: &ClassType) -> Result<String, TemplateError> {
        let statements = class
            .properties
            .iter()
            .map(|property| {
                let values = Values::new().with("property_name", property.name.as_str());
                self.templates.render(encode_template(property), &values)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let values = Values::new()
            .with("type_name", class.qualified_name.as_str())
            .with("encode_properties", join_lines(statements));
        self.templates.render("SetEncodeFunction", &values)
    }

    fn decode_function(&self, class: &ClassType) -> Result<String, TemplateError> {
        let statements = class
            .properties
            .iter()
            .map(|property| {
                let values = Values::new()
                    .with("property_name", property.name.as_str())
                    .with("is_required", property.is_required.to_string());
                self.templates.render(decode_template(property), &values)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let values = Values::new()
            .with("type_name", class.qualified_name.as_str())
            .with("decode_properties", join_lines(statements));
        self.templates.render("SetDecodeFunction", &values)
    }

    fn register_role(
        &self,
        model: &TypeModel,
        plan: &RegistrationPlan,
        role: Role,
    ) -> Result<String, TemplateError> {
        let template = match role {
            Role::Component => "RegisterComponent",
            Role::System => "RegisterSystem",
            Role::Scene => "RegisterScene",
            Role::None => return Ok(String::new()),
        };

        let calls = plan
            .role_handles(role)
            .iter()
            .filter_map(|&handle| model.class(handle))
            .map(|class| {
                tracing::info!("Found {role} '{}'", class.qualified_name);
                self.templates.render(
                    template,
                    &Values::new().with("type_name", class.qualified_name.as_str()),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(join_lines(calls))
    }
}

fn encode_template(property: &Property) -> &'static str {
    if property.is_vector {
        "EncodePropertyVector"
    } else if property.is_enum {
        "EncodePropertyEnum"
    } else {
        "EncodePropertyValue"
    }
}

fn decode_template(property: &Property) -> &'static str {
    if property.is_vector {
        "DecodePropertyVector"
    } else if property.is_enum {
        "DecodePropertyEnum"
    } else {
        "DecodePropertyValue"
    }
}
