use pretty_assertions::assert_eq;
use std::io::Cursor;

use super::*;
use diy_value::Symbol;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn parse_args_defaults_to_prelude() {
    let (config, positional) = RunConfig::parse_args(&args(&["main.diy"])).unwrap();
    assert_eq!(config, RunConfig { prelude: true });
    assert_eq!(positional, vec!["main.diy".to_owned()]);
}

#[test]
fn parse_args_no_prelude_anywhere() {
    let (config, positional) =
        RunConfig::parse_args(&args(&["--no-prelude", "(+ 1 2)"])).unwrap();
    assert!(!config.prelude);
    assert_eq!(positional, vec!["(+ 1 2)".to_owned()]);

    let (config, _) = RunConfig::parse_args(&args(&["x.diy", "--no-prelude"])).unwrap();
    assert!(!config.prelude);
}

#[test]
fn parse_args_rejects_unknown_options() {
    let err = RunConfig::parse_args(&args(&["--fast"])).unwrap_err();
    assert_eq!(err.to_string(), "unknown option '--fast'");
}

#[test]
fn negative_numbers_are_positional() {
    let (_, positional) = RunConfig::parse_args(&args(&["-5"])).unwrap();
    assert_eq!(positional, vec!["-5".to_owned()]);
}

#[test]
fn environment_follows_config() {
    let with = RunConfig { prelude: true }.environment().unwrap();
    let without = RunConfig { prelude: false }.environment().unwrap();
    assert!(with.is_defined(&Symbol::new("map")));
    assert!(!without.is_defined(&Symbol::new("map")));
}

#[test]
fn eval_expression_prints_the_value() {
    let config = RunConfig::default();
    assert_eq!(eval_expression("(reverse '(1 2 3))", &config).unwrap(), "(3 2 1)");
    let err = eval_expression("(reverse '(1 2 3))", &RunConfig { prelude: false }).unwrap_err();
    assert_eq!(err.to_string(), "name 'reverse' is not defined");
}

#[test]
fn run_file_reports_missing_files() {
    let err = run_file(Path::new("/nonexistent/program.diy"), &RunConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read /nonexistent/program.diy"));
}

#[test]
fn repl_evaluates_line_by_line() {
    let mut repl = Repl::new(&RunConfig { prelude: false }).unwrap();
    assert_eq!(repl.feed_line("(define x 5)"), Some(vec!["x".to_owned()]));
    assert_eq!(repl.feed_line("(* x 2) 'done"), Some(vec!["10".to_owned(), "done".to_owned()]));
    assert!(repl.env().is_defined(&Symbol::new("x")));
}

#[test]
fn repl_buffers_until_balanced() {
    let mut repl = Repl::new(&RunConfig { prelude: false }).unwrap();
    assert_eq!(repl.feed_line("(defn add (a b)\n"), None);
    assert!(repl.is_pending());
    assert_eq!(repl.feed_line("  (+ a b))\n"), Some(vec!["add".to_owned()]));
    assert!(!repl.is_pending());
    assert_eq!(repl.feed_line("(add 1 2)\n"), Some(vec!["3".to_owned()]));
}

#[test]
fn repl_reports_errors_and_keeps_going() {
    let mut repl = Repl::new(&RunConfig { prelude: false }).unwrap();
    assert_eq!(
        repl.feed_line("(define y 1) (head '()) (define z 2)"),
        Some(vec!["y".to_owned(), "error: head of an empty list".to_owned()])
    );
    assert!(!repl.env().is_defined(&Symbol::new("z")));
    assert_eq!(repl.feed_line(")"), Some(vec!["error: expected EOF at offset 0".to_owned()]));
    assert_eq!(repl.feed_line("y"), Some(vec!["1".to_owned()]));
}

#[test]
fn repl_ignores_blank_lines() {
    let mut repl = Repl::new(&RunConfig { prelude: false }).unwrap();
    assert_eq!(repl.feed_line("\n"), Some(vec![]));
    assert_eq!(repl.feed_line("; just a comment\n"), Some(vec![]));
}

#[test]
fn repl_session_transcript() {
    let mut repl = Repl::new(&RunConfig { prelude: false }).unwrap();
    let input = Cursor::new("(+ 1 2)\n(define x\n  5)\nx\n");
    let mut output = Vec::new();
    repl.run(input, &mut output).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "diy> 3\ndiy> ...> x\ndiy> 5\ndiy> \n"
    );
}

#[test]
fn repl_reports_unfinished_input_at_eof() {
    let mut repl = Repl::new(&RunConfig { prelude: false }).unwrap();
    let mut output = Vec::new();
    repl.run(Cursor::new("(+ 1\n"), &mut output).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "diy> ...> \nerror: incomplete expression: unclosed '('\n"
    );
}
