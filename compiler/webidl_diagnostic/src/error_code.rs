//! Error codes for model construction diagnostics.
//!
//! The first digit indicates the phase that found the problem.

use std::fmt;

/// Error codes for all model construction diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Merge errors (fragments of one identifier disagree)
/// - E2xxx: Resolution errors (references between definitions)
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorCode {
    // Merge Errors (E1xxx)
    /// Fragments of one identifier declare different kinds
    E1001,
    /// Fragments disagree on a field that cannot be merged
    E1002,
    /// Non-repeatable extended attribute given conflicting values
    E1003,
    /// Only partial definitions exist for an identifier
    E1004,

    // Resolution Errors (E2xxx)
    /// Type name matches neither a builtin nor a definition
    E2001,
    /// Reference names a definition of the wrong kind
    E2002,
    /// Inheritance chain loops back on itself
    E2003,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        // Merge
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        // Resolution
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }

    /// One-line description, suitable for `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "kind mismatch between fragments",
            ErrorCode::E1002 => "conflicting declaration",
            ErrorCode::E1003 => "duplicate extended attribute",
            ErrorCode::E1004 => "partial definition without a definition",
            ErrorCode::E2001 => "unresolved reference",
            ErrorCode::E2002 => "reference to a definition of the wrong kind",
            ErrorCode::E2003 => "inheritance cycle",
        }
    }

    /// Check if this error is found while merging fragments.
    pub fn is_merge_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    /// Check if this error is found while resolving references.
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
