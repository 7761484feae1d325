//! A small simulated assembly in the `Sample` namespace, shared by the unit tests.

use crate::typesystem::{
    MemberRef, MemberRefRc, ParameterRef, PrimitiveKind, TypeRef, TypeRefRc,
};

pub fn int32() -> TypeRefRc {
    TypeRef::primitive(PrimitiveKind::I4).into_rc()
}

pub fn string() -> TypeRefRc {
    TypeRef::primitive(PrimitiveKind::String).into_rc()
}

// Sample.Widget
pub fn widget() -> TypeRefRc {
    TypeRef::named("Sample", "Widget").into_rc()
}

// Sample.Box`1<T>
pub fn box_definition() -> TypeRefRc {
    TypeRef::named("Sample", "Box`1")
        .with_generic_parameters(["T"])
        .into_rc()
}

// System.Collections.Generic.List`1<arg>
pub fn list_of(argument: TypeRefRc) -> TypeRefRc {
    TypeRef::named("System.Collections.Generic", "List`1")
        .with_generic_arguments([argument])
        .into_rc()
}

pub fn type_param(name: &str, position: u32) -> TypeRefRc {
    TypeRef::generic_parameter(name, position).into_rc()
}

// int this[int index] { get; set; } on Sample.Widget
pub fn widget_indexer() -> MemberRef {
    let widget = widget();
    MemberRef::property(&widget, "Item")
        .with_getter(
            MemberRef::method(&widget, "get_Item")
                .special_name()
                .with_parameter(int32())
                .returns(string()),
        )
        .with_setter(
            MemberRef::method(&widget, "set_Item")
                .special_name()
                .with_parameter(int32())
                .with_parameter(string()),
        )
}

/// Every member of the simulated assembly, all structurally distinct and none of them
/// an accessor.
pub fn sample_members() -> Vec<MemberRefRc> {
    let widget = widget();
    let boxed = box_definition();
    let t = type_param("T", 0);
    let u = type_param("U", 0);

    vec![
        MemberRef::method(&widget, "Run"),
        MemberRef::method(&widget, "Add")
            .with_parameter(int32())
            .with_parameter(int32()),
        MemberRef::method(&widget, "Add").with_parameter(string()),
        MemberRef::method(&widget, "TryParse")
            .with_parameter(string())
            .with_parameter_ref(ParameterRef::new(int32()).named("result").out()),
        MemberRef::method(&widget, "Convert")
            .with_generic_parameters(["U"])
            .with_parameter(u.clone()),
        MemberRef::method(&widget, "Convert").with_parameter(int32()),
        MemberRef::method(&widget, "Fill").with_parameter(TypeRef::array(int32(), 2).into_rc()),
        MemberRef::method(&widget, "Fill").with_parameter(TypeRef::array(int32(), 1).into_rc()),
        MemberRef::method(&widget, "Sum").with_parameter(list_of(int32())),
        MemberRef::method(&widget, "op_Explicit")
            .special_name()
            .with_parameter(widget.clone())
            .returns(string()),
        MemberRef::method(&widget, "op_Explicit")
            .special_name()
            .with_parameter(widget.clone())
            .returns(int32()),
        MemberRef::constructor(&widget),
        MemberRef::constructor(&widget).with_parameter(string()),
        MemberRef::static_constructor(&widget),
        MemberRef::field(&widget, "Count"),
        MemberRef::property(&widget, "Name")
            .with_getter(MemberRef::method(&widget, "get_Name").special_name()),
        widget_indexer(),
        MemberRef::property(&widget, "Item").with_getter(
            MemberRef::method(&widget, "get_Item")
                .special_name()
                .with_parameter(string()),
        ),
        MemberRef::event(&widget, "Changed"),
        MemberRef::nested_type(&widget, "Part"),
        MemberRef::field(&boxed, "Value"),
        MemberRef::method(&boxed, "Set").with_parameter(t.clone()),
        MemberRef::method(&boxed, "Map")
            .with_generic_parameters(["U"])
            .with_parameter(t)
            .with_parameter(u),
    ]
    .into_iter()
    .map(MemberRef::into_rc)
    .collect()
}
