use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_is_the_message() {
    let err = LispError::new("something broke");
    assert_eq!(err.to_string(), "something broke");
    assert_eq!(err.message(), "something broke");
}

#[test]
fn arity_messages_state_expected_and_actual() {
    assert_eq!(
        wrong_arg_count(2, 1).message(),
        "wrong number of arguments, expected 2 got 1"
    );
    assert_eq!(
        wrong_operand_count("define", 2, 3).message(),
        "malformed define: expected 2 arguments, got 3"
    );
    assert_eq!(
        wrong_operand_count("quote", 1, 0).message(),
        "malformed quote: expected 1 argument, got 0"
    );
}

#[test]
fn messages_render_values_as_source() {
    let err = non_numeric_operands("+", &Value::int(1), &Value::string("a"));
    assert_eq!(err.message(), "operands must be numeric: (+ 1 \"a\")");

    let err = not_a_function(&Value::int(3));
    assert_eq!(err.message(), "not a function: 3 (integer)");
}

#[test]
fn list_errors_mention_the_violation() {
    assert!(empty_list("head").message().contains("empty list"));
    assert!(not_a_list("tail", &Value::int(1)).message().starts_with("not a list"));
    assert!(cons_onto_non_list(&Value::Bool(true)).message().starts_with("not a list"));
}
