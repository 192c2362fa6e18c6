//! Closure application.

use diy_value::errors::wrong_arg_count;
use diy_value::{Closure, LispResult, Value};

use crate::evaluate;

/// Call `closure` with already-evaluated `args`.
///
/// The body runs in a fresh frame binding each parameter to its argument,
/// parented to the closure's own environment rather than the caller's.
pub fn apply_closure(closure: &Closure, args: Vec<Value>) -> LispResult {
    if args.len() != closure.arity() {
        return Err(wrong_arg_count(closure.arity(), args.len()));
    }
    tracing::debug!(params = ?closure.params(), "apply closure");
    let scope = closure
        .env()
        .extend(closure.params().iter().cloned().zip(args));
    evaluate(closure.body(), &scope)
}
