use super::*;
use pretty_assertions::assert_eq;

fn sample() -> ExtendedAttributes {
    ExtendedAttributes::new(vec![
        ExtendedAttribute::ident("Exposed", "Window"),
        ExtendedAttribute::flag("LegacyUnenumerableNamedProperties"),
        ExtendedAttribute::new(
            "Exposed",
            ExtendedAttributeValue::IdentList(vec!["Worker".into(), "Worklet".into()]),
        ),
    ])
}

#[test]
fn get_returns_first_entry() {
    let attrs = sample();
    assert_eq!(
        attrs.get("Exposed").map(ExtendedAttribute::value),
        Some(&ExtendedAttributeValue::Ident("Window".into()))
    );
    assert!(attrs.get("SecureContext").is_none());
}

#[test]
fn values_of_returns_all_entries_in_order() {
    let attrs = sample();
    let values: Vec<String> = attrs.values_of("Exposed").map(ToString::to_string).collect();
    assert_eq!(values, vec!["=Window".to_string(), "=(Worker,Worklet)".to_string()]);
}

#[test]
fn contains_and_len() {
    let attrs = sample();
    assert!(attrs.contains("LegacyUnenumerableNamedProperties"));
    assert_eq!(attrs.len(), 3);
    assert!(ExtendedAttributes::default().is_empty());
}

#[test]
fn display_matches_source_shape() {
    let attrs: ExtendedAttributes = [
        ExtendedAttribute::flag("Replaceable"),
        ExtendedAttribute::new(
            "LegacyFactoryFunction",
            ExtendedAttributeValue::NamedArguments {
                name: "Image".into(),
                arguments: vec!["unsigned long width".into()],
            },
        ),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        attrs.to_string(),
        "[Replaceable, LegacyFactoryFunction=Image(unsigned long width)]"
    );
}
