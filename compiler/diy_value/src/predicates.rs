//! Node-shape predicates.
//!
//! Free-function spelling of the tag checks, for call sites that classify a
//! node without caring about its payload.

use crate::Value;

pub fn is_boolean(node: &Value) -> bool {
    matches!(node, Value::Bool(_))
}

pub fn is_integer(node: &Value) -> bool {
    matches!(node, Value::Int(_))
}

pub fn is_string(node: &Value) -> bool {
    matches!(node, Value::Str(_))
}

pub fn is_symbol(node: &Value) -> bool {
    matches!(node, Value::Symbol(_))
}

pub fn is_list(node: &Value) -> bool {
    matches!(node, Value::List(_))
}

pub fn is_closure(node: &Value) -> bool {
    matches!(node, Value::Closure(_))
}

/// See [`Value::is_atom`].
pub fn is_atom(node: &Value) -> bool {
    node.is_atom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Closure, Environment};

    #[test]
    fn classifies_each_variant() {
        let closure = Value::closure(Closure::new(Environment::new(), vec![], Value::nil()));
        let cases = [
            (Value::Bool(false), "boolean"),
            (Value::int(3), "integer"),
            (Value::string("s"), "string"),
            (Value::symbol("s"), "symbol"),
            (Value::nil(), "list"),
            (closure, "closure"),
        ];
        for (node, kind) in &cases {
            assert_eq!(is_boolean(node), *kind == "boolean");
            assert_eq!(is_integer(node), *kind == "integer");
            assert_eq!(is_string(node), *kind == "string");
            assert_eq!(is_symbol(node), *kind == "symbol");
            assert_eq!(is_list(node), *kind == "list");
            assert_eq!(is_closure(node), *kind == "closure");
            assert_eq!(is_atom(node), !matches!(*kind, "list" | "closure"));
        }
    }
}
