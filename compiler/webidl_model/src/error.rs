//! IDL authoring errors and the aggregated error report.
//!
//! Merge and resolution never stop at the first problem. Every error found
//! across the whole corpus is collected into an [`ErrorReport`]; a non-empty
//! report means no model is built.

use std::fmt;

use thiserror::Error;
use webidl_diagnostic::{Diagnostic, ErrorCode, ErrorGuaranteed};
use webidl_ir::{DebugInfo, Identifier, Kind};

/// One problem in the IDL sources.
///
/// `name` is always the spelling of the identifier the error is reported
/// under, so errors render without access to the interner.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IdlError {
    #[error("`{name}` is declared as {}", describe_kinds(.declarations))]
    KindMismatch {
        identifier: Identifier,
        name: String,
        /// Every fragment's kind and location, in fragment order.
        declarations: Vec<(Kind, DebugInfo)>,
    },

    #[error("conflicting {field} for `{name}`")]
    ConflictingDeclaration {
        identifier: Identifier,
        name: String,
        field: &'static str,
        first: DebugInfo,
        second: DebugInfo,
    },

    #[error("extended attribute `{attribute}` on `{name}` is given conflicting values")]
    DuplicateExtendedAttribute {
        identifier: Identifier,
        name: String,
        attribute: String,
        first: DebugInfo,
        second: DebugInfo,
    },

    #[error("{kind} `{name}` only has partial definitions")]
    PartialWithoutDefinition {
        identifier: Identifier,
        name: String,
        kind: Kind,
        debug_info: DebugInfo,
    },

    #[error("unresolved reference to `{referenced}` in {context} of `{name}`")]
    UnresolvedReference {
        identifier: Identifier,
        name: String,
        referenced: String,
        context: String,
        debug_info: DebugInfo,
    },

    #[error("{context} of `{name}` names {found} `{referenced}`, but must name {expected}")]
    InvalidReference {
        identifier: Identifier,
        name: String,
        referenced: String,
        context: String,
        expected: Kind,
        found: Kind,
        debug_info: DebugInfo,
    },

    #[error("inheritance cycle: {}", .cycle.join(" -> "))]
    InheritanceCycle {
        identifier: Identifier,
        name: String,
        /// The definitions on the cycle, starting and ending with `name`.
        cycle: Vec<String>,
        debug_info: DebugInfo,
    },
}

impl IdlError {
    /// The identifier the error is reported under.
    pub fn identifier(&self) -> Identifier {
        match self {
            IdlError::KindMismatch { identifier, .. }
            | IdlError::ConflictingDeclaration { identifier, .. }
            | IdlError::DuplicateExtendedAttribute { identifier, .. }
            | IdlError::PartialWithoutDefinition { identifier, .. }
            | IdlError::UnresolvedReference { identifier, .. }
            | IdlError::InvalidReference { identifier, .. }
            | IdlError::InheritanceCycle { identifier, .. } => *identifier,
        }
    }

    /// Spelling of [`identifier`](Self::identifier).
    pub fn name(&self) -> &str {
        match self {
            IdlError::KindMismatch { name, .. }
            | IdlError::ConflictingDeclaration { name, .. }
            | IdlError::DuplicateExtendedAttribute { name, .. }
            | IdlError::PartialWithoutDefinition { name, .. }
            | IdlError::UnresolvedReference { name, .. }
            | IdlError::InvalidReference { name, .. }
            | IdlError::InheritanceCycle { name, .. } => name,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            IdlError::KindMismatch { .. } => ErrorCode::E1001,
            IdlError::ConflictingDeclaration { .. } => ErrorCode::E1002,
            IdlError::DuplicateExtendedAttribute { .. } => ErrorCode::E1003,
            IdlError::PartialWithoutDefinition { .. } => ErrorCode::E1004,
            IdlError::UnresolvedReference { .. } => ErrorCode::E2001,
            IdlError::InvalidReference { .. } => ErrorCode::E2002,
            IdlError::InheritanceCycle { .. } => ErrorCode::E2003,
        }
    }

    /// Where the problem is, for errors that point at a single place.
    ///
    /// For two-sided errors this is the later of the two locations.
    pub fn debug_info(&self) -> Option<&DebugInfo> {
        match self {
            IdlError::KindMismatch { declarations, .. } => {
                declarations.last().map(|(_, debug_info)| debug_info)
            }
            IdlError::ConflictingDeclaration { second, .. }
            | IdlError::DuplicateExtendedAttribute { second, .. } => Some(second),
            IdlError::PartialWithoutDefinition { debug_info, .. }
            | IdlError::UnresolvedReference { debug_info, .. }
            | IdlError::InvalidReference { debug_info, .. }
            | IdlError::InheritanceCycle { debug_info, .. } => Some(debug_info),
        }
    }

    /// Convert to a structured diagnostic for the build orchestrator to render.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            IdlError::KindMismatch { declarations, .. } => {
                let mut diagnostic = diagnostic;
                for (i, (kind, debug_info)) in declarations.iter().enumerate() {
                    diagnostic = label_locations(
                        diagnostic,
                        debug_info,
                        &format!("declared as {kind} here"),
                        i == 0,
                    );
                }
                diagnostic
            }
            IdlError::ConflictingDeclaration {
                field,
                first,
                second,
                ..
            } => {
                let diagnostic = label_locations(
                    diagnostic,
                    second,
                    &format!("this {field} conflicts"),
                    true,
                );
                label_locations(diagnostic, first, "with the one declared here", false)
            }
            IdlError::DuplicateExtendedAttribute {
                attribute,
                first,
                second,
                ..
            } => {
                let diagnostic =
                    label_locations(diagnostic, second, "given a different value here", true);
                label_locations(diagnostic, first, "first given here", false).with_note(format!(
                    "`{attribute}` is not repeatable; fragments must agree on its value"
                ))
            }
            IdlError::PartialWithoutDefinition {
                name, debug_info, ..
            } => label_locations(diagnostic, debug_info, "partial definition here", true)
                .with_note(format!("add a non-partial definition of `{name}`")),
            IdlError::UnresolvedReference {
                referenced,
                debug_info,
                ..
            } => label_locations(diagnostic, debug_info, "referenced from here", true).with_note(
                format!("`{referenced}` is neither a builtin type nor a known definition"),
            ),
            IdlError::InvalidReference { debug_info, .. } => {
                label_locations(diagnostic, debug_info, "referenced from here", true)
            }
            IdlError::InheritanceCycle { debug_info, .. } => {
                label_locations(diagnostic, debug_info, "cycle starts here", true)
            }
        }
    }
}

/// Label every location of `debug_info`; the first is primary when `primary`.
fn label_locations(
    mut diagnostic: Diagnostic,
    debug_info: &DebugInfo,
    message: &str,
    primary: bool,
) -> Diagnostic {
    for (i, location) in debug_info.locations().iter().enumerate() {
        diagnostic = if primary && i == 0 {
            diagnostic.with_label(location.clone(), message)
        } else {
            diagnostic.with_secondary_label(location.clone(), message)
        };
    }
    diagnostic
}

/// "interface and dictionary", "interface, dictionary and typedef".
fn describe_kinds(declarations: &[(Kind, DebugInfo)]) -> String {
    let mut kinds: Vec<Kind> = Vec::new();
    for (kind, _) in declarations {
        if !kinds.contains(kind) {
            kinds.push(*kind);
        }
    }
    let names: Vec<String> = kinds
        .iter()
        .map(|kind| format!("{} {kind}", article(*kind)))
        .collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

fn article(kind: Kind) -> &'static str {
    match kind {
        Kind::Interface | Kind::InterfaceMixin | Kind::Enumeration => "an",
        _ => "a",
    }
}

/// Every error from one model construction run.
///
/// Sorted by identifier spelling, then error code; errors with equal keys keep
/// the order they were found in, which is itself deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    errors: Vec<IdlError>,
}

impl ErrorReport {
    pub fn new(mut errors: Vec<IdlError>) -> Self {
        errors.sort_by(|a, b| a.name().cmp(b.name()).then(a.code().cmp(&b.code())));
        ErrorReport { errors }
    }

    pub fn errors(&self) -> &[IdlError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IdlError> {
        self.errors.iter()
    }

    /// Errors with the given code, in report order.
    pub fn with_code(&self, code: ErrorCode) -> impl Iterator<Item = &IdlError> + '_ {
        self.errors.iter().filter(move |error| error.code() == code)
    }

    /// Errors reported under `name`, in report order.
    pub fn for_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a IdlError> + 'a {
        self.errors.iter().filter(move |error| error.name() == name)
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(IdlError::to_diagnostic).collect()
    }

    /// Proof that errors were reported; `None` for an empty report.
    pub fn guarantee(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.errors.len())
    }

    pub fn into_errors(self) -> Vec<IdlError> {
        self.errors
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s) in IDL definitions", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
            if let Some(debug_info) = error.debug_info() {
                write!(f, " ({debug_info})")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = &'a IdlError;
    type IntoIter = std::slice::Iter<'a, IdlError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
