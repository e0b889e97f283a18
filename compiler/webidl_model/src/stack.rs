//! Stack safety for recursion over nested type expressions.
//!
//! Type expressions nest without limit (`sequence<sequence<...>>`), and the
//! resolver recurses once per level. The stack grows on demand instead.

/// Red zone: minimum stack space to keep available (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Stack to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
