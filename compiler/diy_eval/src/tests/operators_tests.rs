use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{eval, eval_err, int};
use crate::MathOp;
use diy_value::{Environment, Value};

fn math(source: &str) -> Value {
    eval(source, &Environment::new()).unwrap()
}

#[test]
fn operator_lookup() {
    for name in ["+", "-", "*", "/", "mod", ">"] {
        assert_eq!(MathOp::from_name(name).map(MathOp::name), Some(name));
    }
    assert_eq!(MathOp::from_name("<"), None);
    assert_eq!(MathOp::from_name("%"), None);
}

#[test]
fn basic_arithmetic() {
    assert_eq!(math("(+ 1 2)"), int(3));
    assert_eq!(math("(- 2 1)"), int(1));
    assert_eq!(math("(* 2 3)"), int(6));
    assert_eq!(math("(/ 6 2)"), int(3));
    assert_eq!(math("(mod 7 2)"), int(1));
    assert_eq!(math("(> 1 2)"), Value::Bool(false));
    assert_eq!(math("(> 2 1)"), Value::Bool(true));
    assert_eq!(math("(> 2 2)"), Value::Bool(false));
}

#[test]
fn operands_are_evaluated() {
    assert_eq!(math("(+ (* 2 3) (- 10 4))"), int(12));
    let env = Environment::new();
    eval("(define x 5)", &env).unwrap();
    assert_eq!(eval("(* x x)", &env).unwrap(), int(25));
}

#[test]
fn division_rounds_towards_negative_infinity() {
    assert_eq!(math("(/ 7 2)"), int(3));
    assert_eq!(math("(/ -7 2)"), int(-4));
    assert_eq!(math("(/ 7 -2)"), int(-4));
    assert_eq!(math("(/ -7 -2)"), int(3));
    assert_eq!(math("(/ -6 2)"), int(-3));
}

#[test]
fn modulo_takes_the_sign_of_the_divisor() {
    assert_eq!(math("(mod -7 2)"), int(1));
    assert_eq!(math("(mod 7 -2)"), int(-1));
    assert_eq!(math("(mod -7 -2)"), int(-1));
    assert_eq!(math("(mod -6 3)"), int(0));
}

#[test]
fn operands_must_be_integers() {
    let env = Environment::new();
    assert_eq!(
        eval_err("(+ 1 #t)", &env),
        "operands must be numeric: (+ 1 #t)"
    );
    assert_eq!(
        eval_err("(> \"a\" 1)", &env),
        "operands must be numeric: (> \"a\" 1)"
    );
    assert_eq!(
        eval_err("(mod '(1) 2)", &env),
        "operands must be numeric: (mod (1) 2)"
    );
}

#[test]
fn operators_take_exactly_two_operands() {
    let env = Environment::new();
    assert_eq!(
        eval_err("(+ 1)", &env),
        "malformed +: expected 2 arguments, got 1"
    );
    assert_eq!(
        eval_err("(* 1 2 3)", &env),
        "malformed *: expected 2 arguments, got 3"
    );
}

#[test]
fn division_by_zero_is_an_error() {
    let env = Environment::new();
    assert_eq!(eval_err("(/ 1 0)", &env), "division by zero");
    assert_eq!(eval_err("(mod 1 0)", &env), "modulo by zero");
}

#[test]
fn overflow_is_an_error() {
    assert_eq!(
        MathOp::Add.apply(i64::MAX, 1).unwrap_err().message(),
        "integer overflow in addition"
    );
    assert_eq!(
        MathOp::Sub.apply(i64::MIN, 1).unwrap_err().message(),
        "integer overflow in subtraction"
    );
    assert_eq!(
        MathOp::Mul.apply(i64::MAX, 2).unwrap_err().message(),
        "integer overflow in multiplication"
    );
    assert_eq!(
        MathOp::Div.apply(i64::MIN, -1).unwrap_err().message(),
        "integer overflow in division"
    );
    assert_eq!(MathOp::Mod.apply(i64::MIN, -1).unwrap(), int(0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn add_sub_mul_match_host(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        prop_assert_eq!(MathOp::Add.apply(a, b).unwrap(), int(a + b));
        prop_assert_eq!(MathOp::Sub.apply(a, b).unwrap(), int(a - b));
        prop_assert_eq!(MathOp::Mul.apply(a, b).unwrap(), int(a * b));
        prop_assert_eq!(MathOp::Gt.apply(a, b).unwrap(), Value::Bool(a > b));
    }

    #[test]
    fn floor_division_law(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        let env = Environment::new();
        let source = format!("(+ (* (/ {a} {b}) {b}) (mod {a} {b}))");
        prop_assert_eq!(eval(&source, &env).unwrap(), int(i64::from(a)));
    }

    #[test]
    fn floor_division_matches_float_floor(a in -100_000i64..100_000, b in -1000i64..1000) {
        prop_assume!(b != 0);
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let expected = (a as f64 / b as f64).floor() as i64;
        prop_assert_eq!(MathOp::Div.apply(a, b).unwrap(), int(expected));
    }

    #[test]
    fn modulo_is_bounded_by_the_divisor(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let Value::Int(m) = MathOp::Mod.apply(a, b).unwrap() else {
            panic!("mod returned a non-integer");
        };
        prop_assert!(m.unsigned_abs() < b.unsigned_abs());
        prop_assert!(m == 0 || (m < 0) == (b < 0));
    }
}
