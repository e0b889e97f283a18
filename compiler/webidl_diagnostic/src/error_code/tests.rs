use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2001.as_str(), "E2001");
}

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        assert!(
            code.is_merge_error() ^ code.is_resolution_error(),
            "{code} must belong to exactly one phase"
        );
        assert!(!code.description().is_empty());
    }
}

#[test]
fn test_phase_prefix_matches_predicate() {
    for code in ErrorCode::ALL {
        let merge_prefix = code.as_str().starts_with("E1");
        assert_eq!(merge_prefix, code.is_merge_error(), "{code}");
    }
}

#[test]
fn test_from_str() {
    assert_eq!("E1003".parse::<ErrorCode>(), Ok(ErrorCode::E1003));
    assert_eq!("e2002".parse::<ErrorCode>(), Ok(ErrorCode::E2002));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}
