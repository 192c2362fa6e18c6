//! The single error type of the reader and evaluator, and the functions that
//! build every message it carries.
//!
//! Callers never format error text themselves; they call one of the factory
//! functions below so that all wording lives in one place.

use thiserror::Error;

use crate::{Symbol, Value};

/// A failed read or evaluation, carrying a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LispError {
    message: String,
}

impl LispError {
    pub fn new(message: impl Into<String>) -> Self {
        LispError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of evaluation.
pub type LispResult<T = Value> = Result<T, LispError>;

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

// Names and calls

pub fn undefined_name(symbol: &Symbol) -> LispError {
    LispError::new(format!("name '{symbol}' is not defined"))
}

pub fn empty_list_call() -> LispError {
    LispError::new("call to an empty list")
}

pub fn not_a_function(head: &Value) -> LispError {
    LispError::new(format!("not a function: {head} ({})", head.type_name()))
}

pub fn wrong_arg_count(expected: usize, got: usize) -> LispError {
    LispError::new(format!(
        "wrong number of arguments, expected {expected} got {got}"
    ))
}

// Special forms

pub fn wrong_operand_count(form: &str, expected: usize, got: usize) -> LispError {
    LispError::new(format!(
        "malformed {form}: expected {}, got {got}",
        plural(expected, "argument")
    ))
}

pub fn non_symbol_define(target: &Value) -> LispError {
    LispError::new(format!(
        "non-symbol as first argument to define: {target}"
    ))
}

pub fn lambda_params_not_list(params: &Value) -> LispError {
    LispError::new(format!(
        "lambda parameters must be a list, got {params}"
    ))
}

pub fn param_not_symbol(param: &Value) -> LispError {
    LispError::new(format!("lambda parameter must be a symbol, got {param}"))
}

pub fn malformed_let_bindings(bindings: &Value) -> LispError {
    LispError::new(format!(
        "malformed let: bindings must be a list of (symbol expression) pairs, got {bindings}"
    ))
}

pub fn malformed_cond(clauses: &Value) -> LispError {
    LispError::new(format!(
        "malformed cond: expected a list of (condition result) pairs, got {clauses}"
    ))
}

// Arithmetic

pub fn non_numeric_operands(op: &str, left: &Value, right: &Value) -> LispError {
    LispError::new(format!(
        "operands must be numeric: ({op} {left} {right})"
    ))
}

pub fn division_by_zero() -> LispError {
    LispError::new("division by zero")
}

pub fn modulo_by_zero() -> LispError {
    LispError::new("modulo by zero")
}

pub fn integer_overflow(operation: &str) -> LispError {
    LispError::new(format!("integer overflow in {operation}"))
}

// Lists and strings

pub fn empty_list(form: &str) -> LispError {
    LispError::new(format!("{form} of an empty list"))
}

pub fn empty_string(form: &str) -> LispError {
    LispError::new(format!("{form} of an empty string"))
}

pub fn not_a_list(form: &str, operand: &Value) -> LispError {
    LispError::new(format!(
        "not a list: {form} expects a list or string, got {operand}"
    ))
}

pub fn cons_onto_non_list(tail: &Value) -> LispError {
    LispError::new(format!(
        "not a list: cannot cons onto {tail} ({})",
        tail.type_name()
    ))
}

// Reader

pub fn incomplete_expression() -> LispError {
    LispError::new("incomplete expression: unclosed '('")
}

pub fn expected_eof(offset: usize) -> LispError {
    LispError::new(format!("expected EOF at offset {offset}"))
}

pub fn empty_input() -> LispError {
    LispError::new("expected an expression, found end of input")
}

pub fn unterminated_string(offset: usize) -> LispError {
    LispError::new(format!("unterminated string starting at offset {offset}"))
}

pub fn invalid_integer(text: &str, offset: usize) -> LispError {
    LispError::new(format!(
        "integer literal {text} at offset {offset} does not fit in 64 bits"
    ))
}

pub fn unexpected_input(text: &str, offset: usize) -> LispError {
    LispError::new(format!("unexpected input {text:?} at offset {offset}"))
}

#[cfg(test)]
mod tests;
