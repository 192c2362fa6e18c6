//! Evaluator tests, grouped by area.
#![allow(clippy::arithmetic_side_effects)]

mod operators_tests;

use diy_parse::parse;
use diy_value::{Environment, LispResult, Value};

use crate::evaluate;

/// Parse and evaluate one expression.
fn eval(source: &str, env: &Environment) -> LispResult {
    evaluate(&parse(source).unwrap(), env)
}

/// Evaluate and print the result.
fn eval_print(source: &str, env: &Environment) -> String {
    eval(source, env).unwrap().to_string()
}

/// Evaluate, expecting failure, and return the message.
fn eval_err(source: &str, env: &Environment) -> String {
    eval(source, env).unwrap_err().message().to_owned()
}

fn int(n: i64) -> Value {
    Value::int(n)
}
