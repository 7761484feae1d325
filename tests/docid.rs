//! Integration tests for documentation id computation.
//!
//! Builds a small simulated assembly through the public descriptor model and checks the ids
//! against the strings a .NET compiler writes into its XML documentation files.

use cildocid::prelude::*;
use std::{collections::HashSet, sync::Arc, thread};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn int() -> TypeRefRc {
    TypeRef::primitive(PrimitiveKind::I4).into_rc()
}

fn string() -> TypeRefRc {
    TypeRef::primitive(PrimitiveKind::String).into_rc()
}

fn widget() -> TypeRefRc {
    TypeRef::named("Sample", "Widget").into_rc()
}

/// public class Widget { ... } with one member per supported construct
fn widget_members() -> Vec<MemberRefRc> {
    let widget = widget();
    let grid = TypeRef::array(int(), 2).into_rc();

    vec![
        MemberRef::method(&widget, "Run"),
        MemberRef::method(&widget, "Add")
            .with_parameter(int())
            .with_parameter(int()),
        MemberRef::method(&widget, "Add")
            .with_parameter(int())
            .with_parameter(int())
            .with_parameter(int()),
        MemberRef::constructor(&widget).with_parameter(string()),
        MemberRef::constructor(&widget),
        MemberRef::field(&widget, "Cells").returns(grid.clone()),
        MemberRef::method(&widget, "Fill").with_parameter(grid),
        MemberRef::method(&widget, "op_Explicit")
            .special_name()
            .with_parameter(widget.clone())
            .returns(string()),
        MemberRef::method(&widget, "op_Implicit")
            .special_name()
            .with_parameter(string())
            .returns(widget.clone()),
        MemberRef::property(&widget, "Item").with_getter(
            MemberRef::method(&widget, "get_Item")
                .special_name()
                .with_parameter(int())
                .returns(string()),
        ),
        MemberRef::event(&widget, "Changed"),
        MemberRef::nested_type(&widget, "Part"),
        MemberRef::method(&widget, "Echo")
            .with_generic_parameters(["T"])
            .with_parameter(TypeRef::generic_parameter("T", 0).into_rc()),
        MemberRef::method(&widget, "Echo")
            .with_generic_parameters(["T", "U"])
            .with_parameter(TypeRef::generic_parameter("T", 0).into_rc()),
    ]
    .into_iter()
    .map(MemberRef::into_rc)
    .collect()
}

#[test]
fn test_non_generic_type() -> Result<()> {
    assert_eq!(type_id(&widget())?, "T:Sample.Widget");
    Ok(())
}

#[test]
fn test_methods() -> Result<()> {
    let widget = widget();

    let run = MemberRef::method(&widget, "Run");
    assert_eq!(member_id(&run)?, "M:Sample.Widget.Run");

    let add = MemberRef::method(&widget, "Add")
        .with_parameter(int())
        .with_parameter(int());
    assert_eq!(
        member_id(&add)?,
        "M:Sample.Widget.Add(System.Int32,System.Int32)"
    );
    Ok(())
}

#[test]
fn test_generic_type_field() -> Result<()> {
    let boxed = TypeRef::named("Sample", "Box`1")
        .with_generic_parameters(["T"])
        .into_rc();
    let value = MemberRef::field(&boxed, "Value")
        .returns(TypeRef::generic_parameter("T", 0).into_rc());

    assert_eq!(type_id(&boxed)?, "T:Sample.Box`1");
    assert_eq!(field_id(&value)?, "F:Sample.Box`1.Value");
    Ok(())
}

#[test]
fn test_indexer_getter() -> Result<()> {
    let getter = MemberRef::method(&widget(), "get_Item")
        .special_name()
        .with_parameter(int());

    let id = member_id(&getter)?;
    assert_eq!(id, "P:Sample.Widget.Item(System.Int32)");
    assert_eq!(DocId::parse(&id)?.prefix, IdPrefix::Property);
    Ok(())
}

#[test]
fn test_constructor() -> Result<()> {
    let ctor = MemberRef::constructor(&widget()).with_parameter(string());
    assert_eq!(method_id(&ctor)?, "M:Sample.Widget.#ctor(System.String)");
    Ok(())
}

#[test]
fn test_two_dimensional_array() -> Result<()> {
    let grid = TypeRef::array(int(), 2);
    assert_eq!(type_id(&grid)?, "T:System.Int32[0:,0:]");

    let cells = MemberRef::field(&widget(), "Cells").returns(grid.into_rc());
    assert_eq!(field_id(&cells)?, "F:Sample.Widget.Cells");
    Ok(())
}

#[test]
fn test_explicit_conversion_operator() -> Result<()> {
    let widget = widget();
    let explicit = MemberRef::method(&widget, "op_Explicit")
        .special_name()
        .with_parameter(widget.clone())
        .returns(string());

    let id = member_id(&explicit)?;
    assert!(id.ends_with(")~System.String"));
    assert_eq!(id, "M:Sample.Widget.op_Explicit(Sample.Widget)~System.String");
    Ok(())
}

#[test]
fn test_errors() {
    let widget = widget();
    let run = MemberRef::method(&widget, "Run");

    let err = field_id(&run).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(err.to_string().contains("Run"));

    assert!(matches!(
        member_id(&MemberRef::new(MemberKind::Unknown, &widget, "Other")),
        Err(Error::Unsupported(_))
    ));
    assert!(matches!(
        IdPrefix::from_char('Q'),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_assembly_ids_are_unique() -> Result<()> {
    init_tracing();

    let members = widget_members();
    let ids = encode_all(&DocIdEncoder::new(), &members)
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    let distinct: HashSet<&String> = ids.iter().collect();
    assert_eq!(distinct.len(), members.len(), "{ids:#?}");

    let index = DocIdIndex::build(&members)?;
    assert!(index.collisions().is_empty());
    assert_eq!(index.len(), members.len());
    assert!(index.contains("M:Sample.Widget.Echo``2(``0)"));
    assert!(index.contains("M:Sample.Widget.op_Implicit(System.String)~Sample.Widget"));
    Ok(())
}

#[test]
fn test_dispatch_matches_dedicated() -> Result<()> {
    let encoder = DocIdEncoder::new();

    for member in widget_members() {
        let dedicated = match member.kind {
            MemberKind::Method | MemberKind::Constructor => encoder.method_id(&member)?,
            MemberKind::Field => encoder.field_id(&member)?,
            MemberKind::Property => encoder.property_id(&member)?,
            MemberKind::Event => encoder.event_id(&member)?,
            MemberKind::NestedType => encoder.nested_type_id(&member)?,
            MemberKind::Unknown => continue,
        };
        assert_eq!(dedicated, encoder.member_id(&member)?);
    }
    Ok(())
}

#[test]
fn test_shared_encoder_across_threads() -> Result<()> {
    init_tracing();

    let encoder = Arc::new(DocIdEncoder::new());
    let members = Arc::new(widget_members());
    let expected = encode_all(&encoder, &members)
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let encoder = Arc::clone(&encoder);
            let members = Arc::clone(&members);
            thread::spawn(move || {
                members
                    .iter()
                    .map(|member| encoder.member_id(member))
                    .collect::<Result<Vec<_>>>()
            })
        })
        .collect();

    for handle in handles {
        let ids = handle.join().expect("encoder thread panicked")?;
        assert_eq!(ids, expected);
    }
    Ok(())
}

#[test]
fn test_strict_configuration() -> Result<()> {
    let boxed = TypeRef::named("Sample", "Box`1")
        .with_generic_parameters(["T"])
        .into_rc();
    let shadow = MemberRef::method(&boxed, "Shadow")
        .with_generic_parameters(["T"])
        .with_parameter(TypeRef::generic_parameter("T", 0).into_rc());

    assert_eq!(
        DocIdEncoder::new().method_id(&shadow)?,
        "M:Sample.Box`1.Shadow``1(`0)"
    );

    let strict = DocIdEncoder::with_config(EncoderConfig::strict());
    assert_eq!(strict.config().generic_scope, GenericScope::Strict);
    assert!(strict.method_id(&shadow).is_err());
    Ok(())
}
