use super::*;
use crate::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn raw_display_spells_out_names() {
    let interner = StringInterner::new();
    let node = interner.intern("Node");
    let long = interner.intern("long");

    let ty = RawType::Union(vec![
        RawType::sequence(RawType::named(node)).nullable(),
        RawType::record(RawType::named(interner.intern("DOMString")), RawType::named(long)),
        RawType::promise(RawType::named(interner.intern("undefined"))),
    ]);

    assert_eq!(
        ty.display(&interner),
        "(sequence<Node>? or record<DOMString, long> or Promise<undefined>)"
    );
}

#[test]
fn resolved_references_are_collected_in_order() {
    let interner = StringInterner::new();
    let a = TypeHandle::new(interner.intern("A"), DefId::from_raw(0));
    let b = TypeHandle::new(interner.intern("B"), DefId::from_raw(1));

    let ty = IdlType::Record {
        key: Box::new(IdlType::Builtin(BuiltinType::UsvString)),
        value: Box::new(IdlType::Union(vec![
            IdlType::Reference(b),
            IdlType::Nullable(Box::new(IdlType::Reference(a))),
        ])),
    };

    assert_eq!(ty.references(), vec![b, a]);
    assert_eq!(ty.display(&interner), "record<USVString, (B or A?)>");
}

#[test]
fn bare_accessors() {
    let handle = TypeHandle::new(Identifier::new(1, 7), DefId::from_raw(3));
    assert_eq!(IdlType::from(BuiltinType::Long).as_builtin(), Some(BuiltinType::Long));
    assert_eq!(IdlType::Reference(handle).as_reference(), Some(handle));
    assert_eq!(IdlType::Reference(handle).as_builtin(), None);

    let nullable = IdlType::Nullable(Box::new(IdlType::Builtin(BuiltinType::Double)));
    assert!(nullable.is_nullable());
    assert_eq!(nullable.without_nullable().as_builtin(), Some(BuiltinType::Double));
    assert_eq!(handle.def_id().index(), 3);
}
