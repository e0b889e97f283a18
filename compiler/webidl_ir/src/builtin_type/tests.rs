use super::*;

#[test]
fn test_from_name() {
    assert_eq!(BuiltinType::from_name("boolean"), Some(BuiltinType::Boolean));
    assert_eq!(BuiltinType::from_name("long"), Some(BuiltinType::Long));
    assert_eq!(
        BuiltinType::from_name("unsigned long long"),
        Some(BuiltinType::UnsignedLongLong)
    );
    assert_eq!(BuiltinType::from_name("DOMString"), Some(BuiltinType::DomString));
    assert_eq!(BuiltinType::from_name("Node"), None);
    assert_eq!(BuiltinType::from_name("domstring"), None);
}

#[test]
fn test_names_are_unique_and_found() {
    for builtin in BuiltinType::ALL {
        assert_eq!(BuiltinType::from_name(builtin.name()), Some(builtin));
    }
}

#[test]
fn test_categories() {
    assert!(BuiltinType::Octet.is_integer());
    assert!(!BuiltinType::Double.is_integer());
    assert!(BuiltinType::Double.is_numeric());
    assert!(BuiltinType::Bigint.is_numeric());
    assert!(!BuiltinType::Boolean.is_numeric());
    assert!(BuiltinType::UsvString.is_string());
    assert!(BuiltinType::Uint8ClampedArray.is_buffer_source());
    assert!(!BuiltinType::Object.is_buffer_source());
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", BuiltinType::UnrestrictedDouble), "unrestricted double");
    assert_eq!(format!("{}", BuiltinType::Any), "any");
}
