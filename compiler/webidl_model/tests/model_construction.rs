//! End-to-end model construction: fragments in, frozen model or error report out.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use webidl_diagnostic::ErrorCode;
use webidl_ir::{
    Argument, Attribute, BuiltinType, CodeGeneratorInfo, ComponentTag, DebugInfo,
    ExtendedAttribute, ExtendedAttributes, Fragment, FragmentBody, Identifier, IdlType, Kind,
    Member, Operation, Origin, RawType, SharedInterner, WithCodeGeneratorInfo, WithComponent,
    WithDebugInfo, WithExtendedAttributes, WithIdentifier,
};
use webidl_model::{
    build_model, init_tracing, ErrorReport, FrozenModel, IdentifierIrMap, IdlError, ModelConfig,
};

struct Corpus {
    interner: SharedInterner,
    registry: IdentifierIrMap,
}

impl Corpus {
    fn new() -> Self {
        init_tracing();
        Corpus {
            interner: SharedInterner::new(),
            registry: IdentifierIrMap::new(),
        }
    }

    fn id(&self, name: &str) -> Identifier {
        self.interner.intern(name)
    }

    fn ty(&self, name: &str) -> RawType {
        RawType::named(self.id(name))
    }

    fn register(&self, fragment: Fragment) {
        self.registry.register(fragment);
    }

    fn build(self) -> Result<FrozenModel, ErrorReport> {
        build_model(self.registry, &self.interner, &ModelConfig::default())
    }
}

#[test]
fn callback_function_end_to_end() {
    let corpus = Corpus::new();
    corpus.register(Fragment::new(
        corpus.id("Foo"),
        FragmentBody::callback_function(
            corpus.ty("boolean"),
            vec![Argument::new(corpus.id("x"), corpus.ty("long"))],
        ),
    ));

    let model = corpus.build().expect("no errors");
    assert_eq!(model.len(), 1);
    let foo = model.get_by_name("Foo").expect("Foo is defined");
    assert!(foo.is_callback_function());
    assert!(!foo.is_interface());

    let callback = foo.as_callback_function();
    assert_eq!(callback.return_type(), &IdlType::Builtin(BuiltinType::Boolean));
    assert_eq!(callback.arguments().len(), 1);
    assert_eq!(model.name(callback.arguments()[0].identifier), "x");
    assert_eq!(
        callback.arguments()[0].idl_type,
        IdlType::Builtin(BuiltinType::Long)
    );
}

#[test]
fn interface_and_dictionary_with_same_name_is_one_kind_mismatch() {
    let corpus = Corpus::new();
    corpus.register(
        Fragment::new(corpus.id("X"), FragmentBody::interface(Vec::new()))
            .with_debug_info(DebugInfo::at("x_interface.idl", 1, 3)),
    );
    corpus.register(
        Fragment::new(corpus.id("X"), FragmentBody::dictionary(Vec::new()))
            .with_source_order(1)
            .with_debug_info(DebugInfo::at("x_dictionary.idl", 1, 3)),
    );

    let report = corpus.build().unwrap_err();
    assert_eq!(report.len(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.code(), ErrorCode::E1001);
    assert_eq!(error.name(), "X");
    let IdlError::KindMismatch { declarations, .. } = error else {
        panic!("expected KindMismatch, got {error}");
    };
    let kinds: Vec<Kind> = declarations.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, vec![Kind::Interface, Kind::Dictionary]);
    assert!(report.guarantee().is_some());
}

#[test]
fn circular_references_resolve() {
    let corpus = Corpus::new();
    corpus.register(Fragment::new(
        corpus.id("A"),
        FragmentBody::callback_function(
            corpus.ty("undefined"),
            vec![Argument::new(corpus.id("b"), corpus.ty("B"))],
        ),
    ));
    corpus.register(Fragment::new(
        corpus.id("B"),
        FragmentBody::interface(vec![Operation::new(
            corpus.id("listen"),
            corpus.ty("undefined"),
            vec![Argument::new(corpus.id("callback"), corpus.ty("A"))],
        )
        .into()]),
    ));

    let model = corpus.build().expect("no errors");
    let a = model.get_by_name("A").unwrap().as_callback_function();
    let b_handle = a.arguments()[0].idl_type.as_reference().unwrap();
    let b = model.resolve(b_handle);
    assert_eq!(model.name(b.identifier()), "B");

    let listen = b.as_interface().operations().next().unwrap();
    let a_handle = listen.arguments[0].idl_type.as_reference().unwrap();
    assert_eq!(model.name(model.resolve(a_handle).identifier()), "A");
    assert!(model.resolve(a_handle).is_callback_function());
}

#[test]
fn unresolved_references_are_aggregated() {
    let corpus = Corpus::new();
    corpus.register(
        Fragment::new(
            corpus.id("C"),
            FragmentBody::interface(vec![
                Attribute::new(corpus.id("ghost"), corpus.ty("Ghost")).into()
            ]),
        )
        .with_debug_info(DebugInfo::at("c.idl", 3, 7)),
    );
    corpus.register(
        Fragment::new(
            corpus.id("D"),
            FragmentBody::Typedef {
                idl_type: RawType::sequence(corpus.ty("Phantom")),
            },
        )
        .with_debug_info(DebugInfo::at("d.idl", 1, 1)),
    );

    let report = corpus.build().unwrap_err();
    assert_eq!(report.len(), 2);
    let summary: Vec<(&str, String)> = report
        .iter()
        .map(|error| match error {
            IdlError::UnresolvedReference {
                name, referenced, ..
            } => (name.as_str(), referenced.clone()),
            other => panic!("unexpected error {other}"),
        })
        .collect();
    assert_eq!(
        summary,
        vec![("C", "Ghost".to_string()), ("D", "Phantom".to_string())]
    );
    assert_eq!(
        report.errors()[0].debug_info(),
        Some(&DebugInfo::at("c.idl", 3, 7))
    );
    assert!(report
        .diagnostics()
        .iter()
        .all(|diagnostic| diagnostic.code == ErrorCode::E2001));
}

#[test]
fn merge_and_resolution_errors_reported_together() {
    let corpus = Corpus::new();
    corpus.register(Fragment::new(corpus.id("Lonely"), FragmentBody::interface(Vec::new())).partial());
    corpus.register(Fragment::new(
        corpus.id("Alias"),
        FragmentBody::Typedef {
            idl_type: corpus.ty("Missing"),
        },
    ));

    let report = corpus.build().unwrap_err();
    let codes: Vec<ErrorCode> = report.iter().map(IdlError::code).collect();
    assert_eq!(codes, vec![ErrorCode::E2001, ErrorCode::E1004]);
}

#[test]
fn partial_interfaces_keep_member_origin() {
    let corpus = Corpus::new();
    let core = ComponentTag::new(corpus.id("core"));
    let modules = ComponentTag::new(corpus.id("modules"));
    corpus.register(
        Fragment::new(
            corpus.id("Navigator"),
            FragmentBody::interface(vec![
                Attribute::new(corpus.id("userAgent"), corpus.ty("DOMString")).into()
            ]),
        )
        .with_component(core)
        .with_debug_info(DebugInfo::at("core/navigator.idl", 1, 10)),
    );
    corpus.register(
        Fragment::new(
            corpus.id("Navigator"),
            FragmentBody::interface(vec![
                Attribute::new(corpus.id("geolocation"), corpus.ty("Geolocation")).into()
            ]),
        )
        .partial()
        .with_source_order(5)
        .with_component(modules)
        .with_debug_info(DebugInfo::at("modules/geolocation/navigator.idl", 1, 4)),
    );
    corpus.register(Fragment::new(
        corpus.id("Geolocation"),
        FragmentBody::interface(Vec::new()),
    ));

    let model = corpus.build().expect("no errors");
    let navigator = model.get_by_name("Navigator").unwrap();
    let origins: Vec<Origin> = navigator
        .as_interface()
        .members()
        .iter()
        .map(Member::origin)
        .collect();
    assert_eq!(
        origins,
        vec![
            Origin {
                component: core,
                is_partial: false
            },
            Origin {
                component: modules,
                is_partial: true
            },
        ]
    );
    assert_eq!(navigator.components(), &[core, modules]);
    assert_eq!(navigator.debug_info().locations().len(), 2);
}

#[test]
fn generator_overrides_survive_freezing() {
    let corpus = Corpus::new();
    corpus.register(
        Fragment::new(corpus.id("Storage"), FragmentBody::interface(Vec::new()))
            .with_code_generator_info(CodeGeneratorInfo::new().with_name_override("StorageArea")),
    );
    corpus.register(
        Fragment::new(corpus.id("Storage"), FragmentBody::interface(Vec::new()))
            .partial()
            .with_source_order(1)
            .with_debug_info(DebugInfo::at("modules/storage.idl", 2, 2))
            .with_code_generator_info(
                CodeGeneratorInfo::new()
                    .with_name_override("DomStorage")
                    .with_skip_emission(true),
            ),
    );

    let model = corpus.build().expect("no errors");
    let storage = model.get_by_name("Storage").unwrap();
    assert_eq!(
        storage.code_generator_info().name_override(),
        Some("DomStorage")
    );
    assert!(storage.code_generator_info().skip_emission());
    let overrides = storage.declaration().overrides();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].previous, "StorageArea");
    assert_eq!(
        overrides[0].location,
        DebugInfo::at("modules/storage.idl", 2, 2)
    );
}

#[test]
fn extended_attributes_union_and_conflict() {
    let attributes = |entries: Vec<ExtendedAttribute>| ExtendedAttributes::new(entries);

    let corpus = Corpus::new();
    corpus.register(
        Fragment::new(corpus.id("Console"), FragmentBody::Namespace { members: Vec::new() })
            .with_extended_attributes(attributes(vec![
                ExtendedAttribute::ident("Exposed", "Window"),
                ExtendedAttribute::flag("SecureContext"),
            ])),
    );
    corpus.register(
        Fragment::new(corpus.id("Console"), FragmentBody::Namespace { members: Vec::new() })
            .partial()
            .with_source_order(1)
            .with_extended_attributes(attributes(vec![
                ExtendedAttribute::ident("Exposed", "Worker"),
                ExtendedAttribute::flag("SecureContext"),
            ])),
    );
    let model = corpus.build().expect("no errors");
    let console = model.get_by_name("Console").unwrap();
    assert_eq!(console.extended_attributes().values_of("Exposed").count(), 2);
    assert_eq!(
        console.extended_attributes().values_of("SecureContext").count(),
        1
    );

    let corpus = Corpus::new();
    for (order, flag) in ["A", "B"].into_iter().enumerate() {
        corpus.register(
            Fragment::new(corpus.id("Console"), FragmentBody::Namespace { members: Vec::new() })
                .with_source_order(u32::try_from(order).unwrap())
                .with_extended_attributes(attributes(vec![ExtendedAttribute::ident(
                    "RuntimeEnabled",
                    flag,
                )])),
        );
    }
    let report = corpus.build().unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.errors()[0].code(), ErrorCode::E1003);
}

#[test]
fn structural_reference_errors() {
    let corpus = Corpus::new();
    corpus.register(Fragment::new(
        corpus.id("Window"),
        FragmentBody::Interface {
            inherited: Some(corpus.id("EventTarget")),
            members: Vec::new(),
            includes: vec![corpus.id("EventTarget")],
        },
    ));
    corpus.register(Fragment::new(
        corpus.id("EventTarget"),
        FragmentBody::interface(Vec::new()),
    ));
    for (name, parent) in [("First", "Second"), ("Second", "First")] {
        corpus.register(Fragment::new(
            corpus.id(name),
            FragmentBody::Dictionary {
                inherited: Some(corpus.id(parent)),
                members: Vec::new(),
            },
        ));
    }

    let report = corpus.build().unwrap_err();
    let summary: Vec<(&str, ErrorCode)> = report
        .iter()
        .map(|error| (error.name(), error.code()))
        .collect();
    assert_eq!(
        summary,
        vec![("First", ErrorCode::E2003), ("Window", ErrorCode::E2002)]
    );
    assert_eq!(
        report.errors()[0].to_string(),
        "inheritance cycle: First -> Second -> First"
    );
}

#[test]
fn empty_registry_builds_empty_model() {
    let model = Corpus::new().build().expect("no errors");
    assert!(model.is_empty());
    assert!(model.get_by_name("Anything").is_none());
}

#[test]
fn every_kind_freezes() {
    let corpus = Corpus::new();
    let bodies = [
        ("Iface", FragmentBody::interface(Vec::new())),
        ("Mixin", FragmentBody::InterfaceMixin { members: Vec::new() }),
        ("Space", FragmentBody::Namespace { members: Vec::new() }),
        (
            "Listener",
            FragmentBody::CallbackInterface {
                members: vec![Operation::new(
                    corpus.id("handleEvent"),
                    corpus.ty("undefined"),
                    Vec::new(),
                )
                .into()],
            },
        ),
        (
            "Callback",
            FragmentBody::callback_function(corpus.ty("any"), Vec::new()),
        ),
        ("Dict", FragmentBody::dictionary(Vec::new())),
        (
            "Enum",
            FragmentBody::Enumeration {
                values: vec!["a".to_string()],
            },
        ),
        (
            "Alias",
            FragmentBody::Typedef {
                idl_type: corpus.ty("Iface"),
            },
        ),
    ];
    for (name, body) in bodies {
        corpus.register(Fragment::new(corpus.id(name), body));
    }

    let model = corpus.build().expect("no errors");
    for kind in Kind::ALL {
        assert_eq!(model.of_kind(kind).count(), 1, "{kind}");
    }
    let listener = model.get_by_name("Listener").unwrap();
    assert_eq!(listener.as_callback_interface().operations().count(), 1);
    let alias = model.get_by_name("Alias").unwrap().as_typedef();
    assert_eq!(alias.idl_type().display(&model), "Iface");
}
