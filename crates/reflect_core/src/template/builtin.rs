//! Built-in C++ templates for the engine's registration API.

pub(super) const BUILTIN: &[(&str, &str)] = &[
    ("Layout", LAYOUT),
    ("Include", "#include \"$(file_name)\""),
    ("RegisterEnum", REGISTER_ENUM),
    (
        "AddEnumValue",
        "        enumType.addValue($(value), \"$(value_name)\");",
    ),
    ("RegisterClass", REGISTER_CLASS),
    ("SetEncodeFunction", SET_ENCODE_FUNCTION),
    ("SetDecodeFunction", SET_DECODE_FUNCTION),
    (
        "EncodePropertyValue",
        "            encoder << hect::encodeValue(\"$(property_name)\", typedValue.$(property_name));",
    ),
    (
        "EncodePropertyVector",
        "            encoder << hect::encodeVector(\"$(property_name)\", typedValue.$(property_name));",
    ),
    (
        "EncodePropertyEnum",
        "            encoder << hect::encodeEnum(\"$(property_name)\", typedValue.$(property_name));",
    ),
    (
        "DecodePropertyValue",
        "            decoder >> hect::decodeValue(\"$(property_name)\", typedValue.$(property_name), $(is_required));",
    ),
    (
        "DecodePropertyVector",
        "            decoder >> hect::decodeVector(\"$(property_name)\", typedValue.$(property_name), $(is_required));",
    ),
    (
        "DecodePropertyEnum",
        "            decoder >> hect::decodeEnum(\"$(property_name)\", typedValue.$(property_name), $(is_required));",
    ),
    (
        "RegisterComponent",
        "    hect::ComponentRegistry::registerType<$(type_name)>();",
    ),
    (
        "RegisterSystem",
        "    hect::SystemRegistry::registerType<$(type_name)>();",
    ),
    (
        "RegisterScene",
        "    hect::SceneRegistry::registerType<$(type_name)>();",
    ),
];

const LAYOUT: &str = "\
// Generated by reflect; do not edit.
#pragma once

#include <Hect/Logic/ComponentRegistry.h>
#include <Hect/Logic/SceneRegistry.h>
#include <Hect/Logic/SystemRegistry.h>
#include <Hect/Reflection/Type.h>

$(includes)

namespace $(namespace)
{

inline void registerTypes()
{
    // Enums
$(register_enums)

    // Classes
$(register_classes)

    // Components
$(register_components)

    // Systems
$(register_systems)

    // Scenes
$(register_scenes)
}

}
";

const REGISTER_ENUM: &str = "\
    {
        hect::Type& type = hect::Type::registerType<$(type_name)>(hect::Kind_Enum, \"$(registered_name)\");
        hect::Enum& enumType = type.asEnum();
$(add_enum_values)
    }";

const REGISTER_CLASS: &str = "\
    {
        hect::Type& type = hect::Type::registerType<$(type_name)>(hect::Kind_Class, \"$(registered_name)\");
$(set_encode_function)
$(set_decode_function)
        (void)type;
    }";

const SET_ENCODE_FUNCTION: &str = "\
        type.setEncodeFunction([](const void* value, hect::Encoder& encoder)
        {
            const $(type_name)& typedValue = *reinterpret_cast<const $(type_name)*>(value);
$(encode_properties)
        });";

const SET_DECODE_FUNCTION: &str = "\
        type.setDecodeFunction([](void* value, hect::Decoder& decoder)
        {
            $(type_name)& typedValue = *reinterpret_cast<$(type_name)*>(value);
$(decode_properties)
        });";
