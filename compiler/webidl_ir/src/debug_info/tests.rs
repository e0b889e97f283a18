use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_line_range_validation() {
    assert_eq!(LineRange::try_new(3, 7), Ok(LineRange { start: 3, end: 7 }));
    assert_eq!(
        LineRange::try_new(7, 3),
        Err(LineRangeError { start: 7, end: 3 })
    );
}

#[test]
fn test_line_range_len_and_contains() {
    let range = LineRange { start: 10, end: 12 };
    assert_eq!(range.len(), 3);
    assert!(range.contains(10));
    assert!(range.contains(12));
    assert!(!range.contains(13));
    assert_eq!(LineRange::line(4).len(), 1);
}

#[test]
fn test_line_range_merge() {
    let a = LineRange { start: 5, end: 8 };
    let b = LineRange { start: 2, end: 6 };
    assert_eq!(a.merge(b), LineRange { start: 2, end: 8 });
}

#[test]
fn test_display() {
    let info = DebugInfo::at("core/node.idl", 4, 9);
    assert_eq!(info.to_string(), "core/node.idl:4-9");
    assert_eq!(DebugInfo::at("a.idl", 2, 2).to_string(), "a.idl:2");
    assert_eq!(DebugInfo::default().to_string(), "<unknown location>");
}

#[test]
fn test_at_normalizes_reversed_range() {
    let info = DebugInfo::at("x.idl", 9, 4);
    assert_eq!(
        info.primary().map(|loc| loc.lines),
        Some(LineRange { start: 4, end: 9 })
    );
}

#[test]
fn test_absorb_keeps_order_and_skips_duplicates() {
    let mut info = DebugInfo::at("a.idl", 1, 3);
    info.absorb(&DebugInfo::at("b.idl", 5, 6));
    info.absorb(&DebugInfo::at("a.idl", 1, 3));

    let files: Vec<&str> = info.locations().iter().map(|l| l.file.as_str()).collect();
    assert_eq!(files, vec!["a.idl", "b.idl"]);
    assert_eq!(info.to_string(), "a.idl:1-3, b.idl:5-6");
}
