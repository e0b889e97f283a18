use super::*;
use pretty_assertions::assert_eq;
use webidl_ir::{
    Argument, BuiltinType, FragmentBody, Kind, RawType, SharedInterner, StringInterner,
};

fn enumeration(interner: &StringInterner, name: &str, value: &str, order: u32) -> Fragment {
    Fragment::new(
        interner.intern(name),
        FragmentBody::Enumeration {
            values: vec![value.to_string()],
        },
    )
    .with_source_order(order)
}

fn values(fragments: &[Fragment]) -> Vec<String> {
    fragments
        .iter()
        .flat_map(|fragment| match fragment.body() {
            FragmentBody::Enumeration { values } => values.clone(),
            _ => Vec::new(),
        })
        .collect()
}

#[test]
fn empty_registry() {
    let registry = IdentifierIrMap::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert_eq!(registry.fragment_count(), 0);
    assert!(registry.all_identifiers().is_empty());
    assert!(registry.into_fragments().is_empty());
}

#[test]
fn register_accepts_duplicates() {
    let interner = SharedInterner::new();
    let registry = IdentifierIrMap::new();
    registry.register(enumeration(&interner, "Mode", "a", 0));
    registry.register(enumeration(&interner, "Mode", "a", 0));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.fragment_count(), 2);
    assert_eq!(registry.fragments_for(interner.intern("Mode")).len(), 2);
}

#[test]
fn fragments_for_orders_by_source_order() {
    let interner = SharedInterner::new();
    let registry = IdentifierIrMap::new();
    registry.register(enumeration(&interner, "Mode", "late", 2));
    registry.register(enumeration(&interner, "Mode", "early", 0));
    registry.register(enumeration(&interner, "Mode", "middle", 1));

    let fragments = registry.fragments_for(interner.intern("Mode"));
    assert_eq!(values(&fragments), vec!["early", "middle", "late"]);
}

#[test]
fn equal_source_orders_keep_arrival_order() {
    let interner = SharedInterner::new();
    let registry = IdentifierIrMap::new();
    registry.register(enumeration(&interner, "Mode", "first", 1));
    registry.register(enumeration(&interner, "Mode", "second", 1));
    registry.register(enumeration(&interner, "Mode", "zeroth", 0));

    let fragments = registry.fragments_for(interner.intern("Mode"));
    assert_eq!(values(&fragments), vec!["zeroth", "first", "second"]);
}

#[test]
fn fragments_for_unknown_identifier_is_empty() {
    let interner = SharedInterner::new();
    let registry = IdentifierIrMap::new();
    assert!(registry.fragments_for(interner.intern("Nothing")).is_empty());
}

#[test]
fn all_identifiers_deduplicates() {
    let interner = SharedInterner::new();
    let registry = IdentifierIrMap::new();
    registry.register(enumeration(&interner, "A", "x", 0));
    registry.register(enumeration(&interner, "B", "x", 0));
    registry.register(enumeration(&interner, "A", "y", 1));

    let mut names: Vec<&str> = registry
        .all_identifiers()
        .into_iter()
        .map(|id| interner.lookup(id))
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn into_fragments_groups_and_sorts() {
    let interner = SharedInterner::new();
    let registry = IdentifierIrMap::new();
    let callback = Fragment::new(
        interner.intern("Handler"),
        FragmentBody::callback_function(
            RawType::named(interner.intern(BuiltinType::Undefined.name())),
            vec![Argument::new(
                interner.intern("event"),
                RawType::named(interner.intern("Event")),
            )],
        ),
    );
    registry.register(callback);
    registry.register(enumeration(&interner, "Mode", "b", 1));
    registry.register(enumeration(&interner, "Mode", "a", 0));

    let all = registry.into_fragments();
    assert_eq!(all.len(), 2);
    for (identifier, fragments) in &all {
        match interner.lookup(*identifier) {
            "Mode" => assert_eq!(values(fragments), vec!["a", "b"]),
            "Handler" => {
                assert_eq!(fragments.len(), 1);
                assert_eq!(fragments[0].kind(), Kind::CallbackFunction);
            }
            other => panic!("unexpected identifier {other}"),
        }
    }
}

#[test]
fn concurrent_registration_is_deterministic() {
    let interner = SharedInterner::new();
    let registry = IdentifierIrMap::new();

    std::thread::scope(|scope| {
        for worker in 0..8u32 {
            let interner = interner.clone();
            let registry = &registry;
            scope.spawn(move || {
                for n in 0..50u32 {
                    let name = format!("Def{}", n % 10);
                    let order = worker * 50 + n;
                    registry.register(enumeration(&interner, &name, &order.to_string(), order));
                }
            });
        }
    });

    assert_eq!(registry.fragment_count(), 400);
    assert_eq!(registry.len(), 10);
    for (_, fragments) in registry.into_fragments() {
        let orders: Vec<u32> = fragments.iter().map(Fragment::source_order).collect();
        let mut sorted = orders.clone();
        sorted.sort_unstable();
        assert_eq!(orders, sorted);
    }
}
