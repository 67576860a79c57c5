use simplecount::{
    apply_special, evaluate, evaluate_value, normalize, tokenize, EvalError, Formatter,
    FunctionKind, Token,
};

fn assert_result(expression: &str, expected: &str) {
    match evaluate(expression) {
        Ok(result) => assert_eq!(result, expected, "wrong result for '{expression}'"),
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_rejected(expression: &str) {
    if evaluate(expression).is_ok() {
        panic!("'{expression}' succeeded but was expected to fail")
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9,
            "expected {expected}, found {actual}");
}

#[test]
fn digit_only_inputs_round_trip() {
    assert_result("5", "5");
    assert_result("42", "42");
    assert_result("007", "7");
    assert_result("3.5", "3.5");
    assert_result("0", "0");
}

#[test]
fn multiplication_binds_before_addition() {
    assert_result("1+2*3", "7");
    assert_result("2*3+4*5", "26");
    assert_result("10-2*3", "4");
    assert_result("1+9/3", "4");
}

#[test]
fn same_tier_reduces_left_to_right() {
    assert_result("1+2+3+4", "10");
    assert_result("100/10/5", "2");
    assert_result("10-3-4", "3");
    assert_result("2*3%4", "2");
    assert_result("7%4*2", "6");
}

#[test]
fn division_honors_display_precision() {
    assert_result("10/3", "3.3");
    assert_result("9/2", "4.5");
    assert_result("1/3", "0.3");
    assert_result("1/4000", "0.00025");
}

#[test]
fn unary_minus_folds_after_operator() {
    assert_result("5*-3", "-15");
    assert_result("5--3", "8");
    assert_result("5*--3", "15");
    assert_result("10/-4", "-2.5");
    assert_result("2+-3", "-1");
}

#[test]
fn binary_minus_is_not_folded() {
    assert_result("5-3", "2");
    assert_result("3-5", "-2");
}

#[test]
fn leading_minus_signs_the_first_operand() {
    assert_result("-1", "-1");
    assert_result("-5+3", "-2");
    assert_result("-2*4", "-8");
}

#[test]
fn remainder_keeps_dividend_sign() {
    assert_result("7%2", "1");
    assert_result("-7%2", "-1");
    assert_result("7%-2", "1");
    assert_result("7.5%2", "1.5");
}

#[test]
fn empty_and_lone_operator_are_the_zero_path() {
    assert_result("", "0");
    assert!(matches!(evaluate("+"), Err(EvalError::EmptyExpression)));
    assert!(matches!(evaluate("*"), Err(EvalError::EmptyExpression)));
}

#[test]
fn trailing_operator_is_trimmed() {
    assert_result("4+5+", "9");
    assert_result("4+5*", "9");
    assert_result("10/", "10");
}

#[test]
fn zero_division_passes_through_as_text() {
    assert_result("5/0", "Infinity");
    assert_result("-5/0", "-Infinity");
    assert_result("0/0", "NaN");
    assert_result("5%0", "NaN");
}

#[test]
fn parentheses_are_rejected_not_grouped() {
    assert_rejected("(5+3)");
    assert_rejected("2*(3+4)");
    assert_rejected("(");
    assert_rejected(")");
}

#[test]
fn malformed_expressions_are_rejected() {
    assert_rejected("abc");
    assert_rejected("1.2.3");
    assert_rejected("5++3");
    assert_rejected("4+*");
    assert_rejected("*5");
    assert!(matches!(evaluate("5++3"),
                     Err(EvalError::MalformedOperand { position: 2 })));
    assert!(matches!(evaluate("abc"), Err(EvalError::Tokenize(_))));
}

#[test]
fn raw_values_are_exact() {
    assert_close(evaluate_value("10/3").unwrap(), 10.0 / 3.0);
    assert_close(evaluate_value("10/3+1").unwrap(), 10.0 / 3.0 + 1.0);
    assert_close(evaluate_value("").unwrap(), 0.0);
}

#[test]
fn formatted_results_retokenize_as_one_operand() {
    for value in [7.0, -15.0, 10.0 / 3.0, 0.5, 1e6] {
        let text = Formatter::display().format(value);
        let mut tokens = tokenize(&text).unwrap();
        normalize(&mut tokens);

        assert_eq!(tokens.len(), 1, "'{text}' did not stay a single operand");
        let Token::Operand(number) = &tokens[0] else {
            panic!("'{text}' did not tokenize as an operand");
        };
        assert!((number.value - value).abs() <= 0.05);
    }
}

#[test]
fn special_operations_apply_to_a_single_operand() {
    let result = apply_special(FunctionKind::Sqrt, "16").unwrap().unwrap();
    assert_eq!(result.label, "sqrt(16)");
    assert_eq!(result.text, "4");

    let result = apply_special(FunctionKind::Square, "3").unwrap().unwrap();
    assert_eq!(result.label, "square(3)");
    assert_eq!(result.text, "9");

    let result = apply_special(FunctionKind::Exp, "0").unwrap().unwrap();
    assert_eq!(result.text, "1");
    let result = apply_special(FunctionKind::Cos, "0").unwrap().unwrap();
    assert_eq!(result.text, "1");
    let result = apply_special(FunctionKind::Sin, "0").unwrap().unwrap();
    assert_eq!(result.text, "0");
    let result = apply_special(FunctionKind::Tan, "0").unwrap().unwrap();
    assert_eq!(result.text, "0");
}

#[test]
fn special_operations_pass_domain_failures_through() {
    let result = apply_special(FunctionKind::Log, "-1").unwrap().unwrap();
    assert_eq!(result.label, "log(-1)");
    assert_eq!(result.text, "NaN");

    let result = apply_special(FunctionKind::Sqrt, "-4").unwrap().unwrap();
    assert_eq!(result.text, "NaN");
}

#[test]
fn special_operations_collapse_pending_expressions() {
    let result = apply_special(FunctionKind::Square, "2+3").unwrap().unwrap();
    assert_eq!(result.label, "square(2+3)");
    assert_eq!(result.text, "25");
}

#[test]
fn special_operations_treat_empty_display_as_zero() {
    let result = apply_special(FunctionKind::Sqrt, "").unwrap().unwrap();
    assert_eq!(result.label, "sqrt()");
    assert_eq!(result.text, "0");
}

#[test]
fn special_operand_failure_is_a_silent_no_op() {
    assert!(apply_special(FunctionKind::Sqrt, "+").unwrap().is_none());
    assert!(apply_special(FunctionKind::Sqrt, "abc").unwrap().is_none());
    assert!(apply_special(FunctionKind::Sqrt, "5+").unwrap().is_none());
}

#[test]
fn special_evaluation_failure_is_surfaced() {
    assert!(apply_special(FunctionKind::Sqrt, "(1)+2").is_err());
}

#[test]
fn infinity_results_chain_through_the_tokenizer() {
    assert_result("5/0+1", "Infinity");
    assert_result("Infinity+1", "Infinity");
    assert_result("NaN*2", "NaN");
    let result = apply_special(FunctionKind::Exp, "5/0*-1").unwrap().unwrap();
    assert_eq!(result.text, "0");
}
