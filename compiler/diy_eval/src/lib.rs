#![deny(clippy::arithmetic_side_effects)]
//! DIY Lisp evaluator.
//!
//! Reduces a [`Value`] syntax tree to a value in an [`Environment`]. The
//! evaluator is a direct recursive walk over the tree:
//!
//! - literals evaluate to themselves, symbols are looked up
//! - [`SpecialForm`]s receive their operands unevaluated
//! - [`MathOp`]s evaluate two integer operands
//! - anything else in head position is evaluated to a closure and applied
//!
//! There is no tail-call elimination. Recursion grows the native stack through
//! [`diy_stack::ensure_sufficient_stack`], so deep recursion is bounded by
//! memory rather than by the main thread's stack size.

mod apply;
mod operators;
mod prelude;
mod special_forms;

use diy_parse::{parse, parse_multiple};
use diy_stack::ensure_sufficient_stack;
use diy_value::errors::{empty_list_call, not_a_function};

pub use apply::apply_closure;
pub use diy_value::{Closure, Environment, LispError, LispResult, Symbol, Value};
pub use operators::MathOp;
pub use prelude::{load_prelude, prelude_environment, PRELUDE_SOURCE};
pub use special_forms::SpecialForm;

/// Evaluate `node` in `env`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn evaluate(node: &Value, env: &Environment) -> LispResult {
    ensure_sufficient_stack(|| eval_node(node, env))
}

fn eval_node(node: &Value, env: &Environment) -> LispResult {
    match node {
        Value::Int(_) | Value::Bool(_) | Value::Str(_) | Value::Closure(_) => Ok(node.clone()),
        Value::Symbol(symbol) => env.lookup(symbol),
        Value::List(items) => eval_list(items, env),
    }
}

/// Dispatch a call on its head.
///
/// A symbol or list head that is not a keyword is evaluated and the call is
/// dispatched again with the result in head position, so a head may reduce
/// to a closure, to an operator or keyword symbol, or to a `lambda` list that
/// in turn reduces to a closure. Operands stay unevaluated until the final
/// dispatch. A head that reduces to one it has already produced is not a
/// function, which stops symbol cycles such as `(define a 'a) (a)`.
fn eval_list(items: &[Value], env: &Environment) -> LispResult {
    let Some((head, operands)) = items.split_first() else {
        return Err(empty_list_call());
    };

    let mut head = head.clone();
    let mut seen: Vec<Value> = Vec::new();
    loop {
        if let Value::Symbol(symbol) = &head {
            if let Some(form) = SpecialForm::from_name(symbol.as_str()) {
                return form.evaluate(operands, env);
            }
            if let Some(op) = MathOp::from_name(symbol.as_str()) {
                return op.evaluate(operands, env);
            }
        }

        let reduced = match &head {
            Value::Closure(closure) => return apply_closure(closure, eval_args(operands, env)?),
            Value::Symbol(_) | Value::List(_) => evaluate(&head, env)?,
            other => return Err(not_a_function(other)),
        };
        tracing::trace!(head = %head, reduced = %reduced, "re-dispatch call");
        seen.push(std::mem::replace(&mut head, reduced));
        if seen.contains(&head) {
            return Err(not_a_function(&head));
        }
    }
}

/// Evaluate call arguments left to right.
fn eval_args(operands: &[Value], env: &Environment) -> LispResult<Vec<Value>> {
    operands.iter().map(|arg| evaluate(arg, env)).collect()
}

/// Parse one expression, evaluate it, and print the result.
pub fn interpret(source: &str, env: &Environment) -> LispResult<String> {
    let expr = parse(source)?;
    Ok(evaluate(&expr, env)?.to_string())
}

/// Evaluate every top-level expression in `source` in order and return the
/// last result, or `()` when there are none.
pub fn interpret_all(source: &str, env: &Environment) -> LispResult {
    let mut last = Value::nil();
    for expr in parse_multiple(source)? {
        last = evaluate(&expr, env)?;
    }
    Ok(last)
}

#[cfg(test)]
mod tests;
