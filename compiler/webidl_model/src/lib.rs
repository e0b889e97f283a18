//! Web IDL model construction: registry, merge, resolution and the frozen model.
//!
//! ```text
//! parser workers ──register──▶ IdentifierIrMap
//!                                   │ into_fragments (barrier)
//!                                   ▼
//!                              merge_all ──▶ MergedRecord per identifier
//!                                   │
//!                                   ▼
//!                             resolve_all ──▶ FrozenModel (read-only)
//! ```
//!
//! Errors from every stage are aggregated into one [`ErrorReport`]. A
//! non-empty report means no model is built, so the code generator never
//! sees a partially resolved corpus.
//!
//! # Immutability
//!
//! Frozen definitions expose no way to change them:
//!
//! ```compile_fail
//! fn rename(definition: &mut webidl_model::Enumeration) {
//!     definition.values.push("extra".to_string());
//! }
//! ```
//!
//! # Tracing
//!
//! Set `RUST_LOG=webidl_model=debug` and call [`init_tracing`] to see per-pass
//! spans and summaries; `trace` adds one event per identifier.

mod config;
mod error;
mod merge;
mod model;
mod registry;
mod resolve;
mod stack;

use std::sync::Once;

use webidl_ir::SharedInterner;

pub use config::{ExtendedAttributePolicy, ModelConfig};
pub use error::{ErrorReport, IdlError};
pub use merge::{merge_all, merge_identifier, MergeOutput, MergedRecord};
pub use model::{
    CallbackFunction, CallbackInterface, Declaration, Dictionary, Enumeration, FrozenModel,
    Interface, InterfaceMixin, Namespace, Typedef, UserDefinedType,
};
pub use registry::{FragmentsByIdentifier, IdentifierIrMap};
pub use resolve::{resolve_all, ResolveOutput};

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Only installs a subscriber if `RUST_LOG` is set. Output is a hierarchical
/// tree so nested pass spans stay readable. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Merge and resolve everything registered, producing the frozen model.
///
/// Consumes the registry: registration must be complete. Merge errors do not
/// stop resolution of cleanly merged definitions, so one run reports every
/// problem in the corpus.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(identifiers = registry.len(), fragments = registry.fragment_count())
)]
pub fn build_model(
    registry: IdentifierIrMap,
    interner: &SharedInterner,
    config: &ModelConfig,
) -> Result<FrozenModel, ErrorReport> {
    let merged = merge_all(registry.into_fragments(), interner, config);
    let resolved = resolve_all(merged.records, &merged.failed, interner, config);

    let mut errors = merged.errors;
    errors.extend(resolved.errors);
    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "model not built");
        return Err(ErrorReport::new(errors));
    }

    let model = FrozenModel::new(resolved.definitions, interner.clone());
    tracing::debug!(definitions = model.len(), "model frozen");
    Ok(model)
}
