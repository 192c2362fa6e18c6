//! Special forms: operators that receive their operands unevaluated.
//!
//! Each form checks its operand count before touching any operand, so a
//! malformed form fails with a message naming the form instead of reading
//! past the end of the list.

use diy_value::errors::{
    cons_onto_non_list, empty_list, empty_string, lambda_params_not_list, malformed_cond,
    malformed_let_bindings, non_symbol_define, not_a_list, param_not_symbol, wrong_operand_count,
};
use diy_value::{Closure, Environment, LispResult, Symbol, Value};

use crate::evaluate;

/// A keyword that is handled by the evaluator itself instead of being called.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpecialForm {
    Quote,
    Atom,
    Eq,
    If,
    Define,
    Lambda,
    Defn,
    Let,
    Cons,
    Head,
    Tail,
    Empty,
    Cond,
}

impl SpecialForm {
    /// Every special form, in declaration order.
    pub const ALL: [SpecialForm; 13] = [
        SpecialForm::Quote,
        SpecialForm::Atom,
        SpecialForm::Eq,
        SpecialForm::If,
        SpecialForm::Define,
        SpecialForm::Lambda,
        SpecialForm::Defn,
        SpecialForm::Let,
        SpecialForm::Cons,
        SpecialForm::Head,
        SpecialForm::Tail,
        SpecialForm::Empty,
        SpecialForm::Cond,
    ];

    /// Resolve a keyword from its symbol text.
    ///
    /// # Shadowing
    ///
    /// Keywords are resolved before environment lookup, so binding a symbol
    /// such as `if` with `define` never changes what `(if ...)` means.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quote" => Some(SpecialForm::Quote),
            "atom" => Some(SpecialForm::Atom),
            "eq" => Some(SpecialForm::Eq),
            "if" => Some(SpecialForm::If),
            "define" => Some(SpecialForm::Define),
            "lambda" => Some(SpecialForm::Lambda),
            "defn" => Some(SpecialForm::Defn),
            "let" => Some(SpecialForm::Let),
            "cons" => Some(SpecialForm::Cons),
            "head" => Some(SpecialForm::Head),
            "tail" => Some(SpecialForm::Tail),
            "empty" => Some(SpecialForm::Empty),
            "cond" => Some(SpecialForm::Cond),
            _ => None,
        }
    }

    /// The keyword as written in source.
    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Quote => "quote",
            SpecialForm::Atom => "atom",
            SpecialForm::Eq => "eq",
            SpecialForm::If => "if",
            SpecialForm::Define => "define",
            SpecialForm::Lambda => "lambda",
            SpecialForm::Defn => "defn",
            SpecialForm::Let => "let",
            SpecialForm::Cons => "cons",
            SpecialForm::Head => "head",
            SpecialForm::Tail => "tail",
            SpecialForm::Empty => "empty",
            SpecialForm::Cond => "cond",
        }
    }

    /// Number of operands the form takes.
    pub fn arity(self) -> usize {
        match self {
            SpecialForm::Quote
            | SpecialForm::Atom
            | SpecialForm::Head
            | SpecialForm::Tail
            | SpecialForm::Empty
            | SpecialForm::Cond => 1,
            SpecialForm::Eq | SpecialForm::Define | SpecialForm::Lambda | SpecialForm::Let
            | SpecialForm::Cons => 2,
            SpecialForm::If | SpecialForm::Defn => 3,
        }
    }

    /// Evaluate the form with its unevaluated `operands`.
    pub(crate) fn evaluate(self, operands: &[Value], env: &Environment) -> LispResult {
        if operands.len() != self.arity() {
            return Err(wrong_operand_count(self.name(), self.arity(), operands.len()));
        }
        match (self, operands) {
            (SpecialForm::Quote, [quoted]) => Ok(quoted.clone()),
            (SpecialForm::Atom, [expr]) => Ok(Value::Bool(evaluate(expr, env)?.is_atom())),
            (SpecialForm::Eq, [left, right]) => eval_eq(left, right, env),
            (SpecialForm::If, [cond, then, otherwise]) => {
                if evaluate(cond, env)?.is_truthy() {
                    evaluate(then, env)
                } else {
                    evaluate(otherwise, env)
                }
            }
            (SpecialForm::Define, [target, expr]) => eval_define(target, expr, env),
            (SpecialForm::Lambda, [params, body]) => make_closure(params, body, env),
            (SpecialForm::Defn, [name, params, body]) => eval_defn(name, params, body, env),
            (SpecialForm::Let, [bindings, body]) => eval_let(bindings, body, env),
            (SpecialForm::Cons, [first, rest]) => eval_cons(first, rest, env),
            (SpecialForm::Head, [expr]) => eval_head(expr, env),
            (SpecialForm::Tail, [expr]) => eval_tail(expr, env),
            (SpecialForm::Empty, [expr]) => eval_empty(expr, env),
            (SpecialForm::Cond, [clauses]) => eval_cond(clauses, env),
            // Operand count was checked above.
            _ => Err(wrong_operand_count(self.name(), self.arity(), operands.len())),
        }
    }
}

fn eval_eq(left: &Value, right: &Value, env: &Environment) -> LispResult {
    let left = evaluate(left, env)?;
    let right = evaluate(right, env)?;
    Ok(Value::Bool(left.is_atom() && right.is_atom() && left == right))
}

fn define_target(target: &Value) -> LispResult<&Symbol> {
    target.as_symbol().ok_or_else(|| non_symbol_define(target))
}

/// Bind in the current frame and return the bound name.
fn eval_define(target: &Value, expr: &Value, env: &Environment) -> LispResult {
    let name = define_target(target)?;
    let value = evaluate(expr, env)?;
    tracing::debug!(%name, value = %value, "define");
    env.set(name.clone(), value);
    Ok(Value::Symbol(name.clone()))
}

fn eval_defn(name: &Value, params: &Value, body: &Value, env: &Environment) -> LispResult {
    let name = define_target(name)?;
    let closure = make_closure(params, body, env)?;
    tracing::debug!(%name, value = %closure, "defn");
    env.set(name.clone(), closure);
    Ok(Value::Symbol(name.clone()))
}

fn make_closure(params: &Value, body: &Value, env: &Environment) -> LispResult {
    let params = params
        .as_list()
        .ok_or_else(|| lambda_params_not_list(params))?
        .iter()
        .map(|param| param.as_symbol().cloned().ok_or_else(|| param_not_symbol(param)))
        .collect::<LispResult<Vec<Symbol>>>()?;
    Ok(Value::closure(Closure::new(env.clone(), params, body.clone())))
}

/// `let*` semantics: each binding gets its own frame, visible to the next.
fn eval_let(bindings: &Value, body: &Value, env: &Environment) -> LispResult {
    let pairs = bindings
        .as_list()
        .ok_or_else(|| malformed_let_bindings(bindings))?;
    let mut scope = env.clone();
    for pair in pairs {
        let Some([Value::Symbol(name), expr]) = pair.as_list() else {
            return Err(malformed_let_bindings(bindings));
        };
        let value = evaluate(expr, &scope)?;
        scope = scope.extend([(name.clone(), value)]);
    }
    evaluate(body, &scope)
}

fn eval_cons(first: &Value, rest: &Value, env: &Environment) -> LispResult {
    let first = evaluate(first, env)?;
    let rest = evaluate(rest, env)?;
    match (&first, &rest) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::string(format!("{}{}", &**a, &**b))),
        (_, Value::List(items)) => {
            let mut out = Vec::with_capacity(items.len().saturating_add(1));
            out.push(first.clone());
            out.extend(items.iter().cloned());
            Ok(Value::list(out))
        }
        _ => Err(cons_onto_non_list(&rest)),
    }
}

fn eval_head(expr: &Value, env: &Environment) -> LispResult {
    match evaluate(expr, env)? {
        Value::Str(s) => s
            .chars()
            .next()
            .map(|c| Value::string(c.to_string()))
            .ok_or_else(|| empty_string("head")),
        Value::List(items) => items.first().cloned().ok_or_else(|| empty_list("head")),
        other => Err(not_a_list("head", &other)),
    }
}

fn eval_tail(expr: &Value, env: &Environment) -> LispResult {
    match evaluate(expr, env)? {
        Value::Str(s) => {
            let mut chars = s.chars();
            match chars.next() {
                Some(_) => Ok(Value::string(chars.as_str())),
                None => Err(empty_string("tail")),
            }
        }
        Value::List(items) => match items.split_first() {
            Some((_, rest)) => Ok(Value::list(rest.to_vec())),
            None => Err(empty_list("tail")),
        },
        other => Err(not_a_list("tail", &other)),
    }
}

fn eval_empty(expr: &Value, env: &Environment) -> LispResult {
    match evaluate(expr, env)? {
        Value::Str(s) => Ok(Value::Bool(s.is_empty())),
        Value::List(items) => Ok(Value::Bool(items.is_empty())),
        other => Err(not_a_list("empty", &other)),
    }
}

/// Evaluate the result of the first clause whose condition is truthy.
///
/// Clauses after the chosen one are never evaluated.
fn eval_cond(clauses: &Value, env: &Environment) -> LispResult {
    let list = clauses.as_list().ok_or_else(|| malformed_cond(clauses))?;
    for clause in list {
        let Some([cond, result]) = clause.as_list() else {
            return Err(malformed_cond(clauses));
        };
        if evaluate(cond, env)?.is_truthy() {
            return evaluate(result, env);
        }
    }
    Ok(Value::Bool(false))
}
