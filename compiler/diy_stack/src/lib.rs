//! Stack growth for the recursive reader and evaluator.
//!
//! Both `diy_parse` and `diy_eval` recurse once per nesting level of the
//! program they process, and user-written recursive functions add one
//! evaluator frame per call. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves that recursion onto freshly allocated
//! stack segments instead of overflowing the thread's native stack.
//!
//! This is not tail-call elimination: memory still grows with recursion
//! depth, it just comes from the heap once the thread's own stack is used up.
//!
//! # Usage
//!
//! ```text
//! fn parse_expr(&mut self) -> LispResult<Value> {
//!     ensure_sufficient_stack(|| self.parse_expr_inner())
//! }
//! ```
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a new segment when the red zone
//!   is reached.
//! - **`wasm32`**: the guard is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
///
/// One evaluator step for a special form with several operands uses a few
/// kilobytes, so this leaves room for a handful of nested steps between
/// checks.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
