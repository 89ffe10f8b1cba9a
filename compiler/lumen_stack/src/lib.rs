//! Stack growth for the recursive descent parser and the tree-walking
//! evaluator.
//!
//! Both `parse_expression` and `Interpreter::eval` recurse once per nesting
//! level of the source program, so a file with thousands of nested
//! parentheses or blocks would otherwise exhaust the main thread's stack.
//! Every recursive entry point wraps its body in [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On WASM
//! the closure runs directly.

/// Grow the stack when less than this much remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red
/// zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
