//! Diagnostic types for Web IDL model construction.
//!
//! Every problem found while merging and resolving definitions is reported as
//! a [`Diagnostic`]:
//! - Error code for searchability
//! - Clear message (what went wrong)
//! - Primary location (where it went wrong)
//! - Secondary locations (the other side of a conflict)
//! - Notes (context)
//!
//! Rendering is left to the build orchestrator.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one error was
//! reported. It can only be obtained from a non-zero error count.

mod diagnostic;
mod error_code;
mod guarantee;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
