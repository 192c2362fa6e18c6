//! Integer arithmetic and comparison.
//!
//! The operator set is closed, so dispatch is a plain `match` on [`MathOp`].
//! Every operation is checked: overflow and division by zero become errors
//! instead of panics or wrapped results.

use diy_value::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, non_numeric_operands,
    wrong_operand_count,
};
use diy_value::{Environment, LispResult, Value};

use crate::evaluate;

/// A binary integer operator in head position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    /// Floor division.
    Div,
    /// Floor modulo; the result has the sign of the divisor.
    Mod,
    Gt,
}

impl MathOp {
    /// Resolve an operator from its symbol text.
    ///
    /// Returns `None` for anything else, including the comparison helpers
    /// (`<`, `>=`, `=`) that the prelude defines as ordinary functions.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "+" => Some(MathOp::Add),
            "-" => Some(MathOp::Sub),
            "*" => Some(MathOp::Mul),
            "/" => Some(MathOp::Div),
            "mod" => Some(MathOp::Mod),
            ">" => Some(MathOp::Gt),
            _ => None,
        }
    }

    /// The symbol that names this operator in source and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "*",
            MathOp::Div => "/",
            MathOp::Mod => "mod",
            MathOp::Gt => ">",
        }
    }

    /// Evaluate both operands left to right and apply the operator.
    pub(crate) fn evaluate(self, operands: &[Value], env: &Environment) -> LispResult {
        let [left, right] = operands else {
            return Err(wrong_operand_count(self.name(), 2, operands.len()));
        };
        let left = evaluate(left, env)?;
        let right = evaluate(right, env)?;
        match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => self.apply(*a, *b),
            _ => Err(non_numeric_operands(self.name(), &left, &right)),
        }
    }

    /// Apply the operator to two integers.
    pub fn apply(self, a: i64, b: i64) -> LispResult {
        match self {
            MathOp::Add => checked_arith(a.checked_add(b), "addition"),
            MathOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
            MathOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
            MathOp::Div if b == 0 => Err(division_by_zero()),
            MathOp::Div => checked_arith(floor_div(a, b), "division"),
            MathOp::Mod if b == 0 => Err(modulo_by_zero()),
            MathOp::Mod => checked_arith(floor_mod(a, b), "modulo"),
            MathOp::Gt => Ok(Value::Bool(a > b)),
        }
    }
}

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> LispResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Division rounding towards negative infinity. `None` on overflow.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let div = a.checked_div(b)?;
    let rem = a.checked_rem(b)?;
    if rem != 0 && (rem < 0) != (b < 0) {
        div.checked_sub(1)
    } else {
        Some(div)
    }
}

/// Remainder of [`floor_div`]. Only `None` when `b` is zero.
fn floor_mod(a: i64, b: i64) -> Option<i64> {
    // `i64::MIN % -1` is mathematically 0; checked_rem reports it as overflow.
    let rem = if b == -1 { 0 } else { a.checked_rem(b)? };
    if rem != 0 && (rem < 0) != (b < 0) {
        rem.checked_add(b)
    } else {
        Some(rem)
    }
}
