use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unset_fields_do_not_override() {
    let base = CodeGeneratorInfo::new().with_name_override("NodeImpl");
    let (merged, overrides) = base.overlay(&CodeGeneratorInfo::new(), &DebugInfo::default());
    assert_eq!(merged.name_override(), Some("NodeImpl"));
    assert!(overrides.is_empty());
}

#[test]
fn later_value_wins_and_is_recorded() {
    let later_location = DebugInfo::at("modules/node_ext.idl", 3, 3);
    let base = CodeGeneratorInfo::new()
        .with_name_override("NodeImpl")
        .with_header_path("core/node.h");
    let later = CodeGeneratorInfo::new().with_name_override("NodeExt");

    let (merged, overrides) = base.overlay(&later, &later_location);

    assert_eq!(merged.name_override(), Some("NodeExt"));
    assert_eq!(merged.header_path(), Some("core/node.h"));
    assert_eq!(
        overrides,
        vec![GeneratorOverride {
            field: "name_override",
            previous: "NodeImpl".into(),
            current: "NodeExt".into(),
            location: later_location,
        }]
    );
}

#[test]
fn identical_value_is_not_an_override() {
    let info = CodeGeneratorInfo::new().with_skip_emission(true);
    let (merged, overrides) = info.clone().overlay(&info, &DebugInfo::default());
    assert!(merged.skip_emission());
    assert!(overrides.is_empty());
}

#[test]
fn skip_emission_defaults_to_false() {
    assert!(!CodeGeneratorInfo::new().skip_emission());
    assert!(CodeGeneratorInfo::new().is_empty());
}
