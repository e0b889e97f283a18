//! Proof that at least one error was reported.

use std::fmt;

/// Type-level proof that at least one error was reported.
///
/// Returning `Result<T, ErrorGuaranteed>` makes it impossible to fail without
/// having produced a diagnostic first.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    /// Proof from an error count; `None` when nothing was reported.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then_some(ErrorGuaranteed(()))
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}

#[cfg(test)]
mod tests;
