//! Stack safety for deep recursion.
//!
//! Slang programs recurse through `self` and nested blocks, and the parser
//! recurses through nested expressions. Both wrap their recursive entry
//! points in [`ensure_sufficient_stack`], which grows the native stack on
//! demand instead of overflowing.
//!
//! - **Red zone**: 128KB. If less than this remains, the stack is grown.
//! - **Growth size**: 2MB per growth.

const RED_ZONE: usize = 128 * 1024;

const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
