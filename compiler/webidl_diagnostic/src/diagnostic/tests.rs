use super::*;
use pretty_assertions::assert_eq;
use webidl_ir::LineRange;

fn location(file: &str, start: u32, end: u32) -> SourceLocation {
    SourceLocation::new(file, LineRange { start, end })
}

#[test]
fn builder_collects_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("conflicting inheritance for `Node`")
        .with_label(location("core/node.idl", 3, 9), "declared here")
        .with_secondary_label(location("modules/node.idl", 1, 4), "conflicts with this")
        .with_note("fragments must agree on inheritance");

    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(
        diag.primary_location(),
        Some(&location("core/node.idl", 3, 9))
    );
    assert_eq!(diag.notes, vec!["fragments must agree on inheritance".to_string()]);
}

#[test]
fn primary_location_skips_secondary_labels() {
    let diag = Diagnostic::warning(ErrorCode::E2001)
        .with_secondary_label(location("a.idl", 1, 1), "context")
        .with_label(location("b.idl", 2, 2), "here");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_location(), Some(&location("b.idl", 2, 2)));
}

#[test]
fn display_format() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("unresolved reference to `Ghost`")
        .with_label(location("c.idl", 4, 6), "referenced here")
        .with_note("referenced by attribute `haunt`");

    assert_eq!(
        diag.to_string(),
        "error [E2001]: unresolved reference to `Ghost`\n  \
         --> c.idl:4-6: referenced here\n  \
         = note: referenced by attribute `haunt`"
    );
}
