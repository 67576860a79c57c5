use simplecount::{
    session::{append_input, append_operator, backspace, shape_input, MAX_INPUT_LEN},
    FunctionKind, Session,
};

fn press_line(session: &mut Session, keys: &str) {
    for key in keys.chars() {
        if key == '=' {
            let _ = session.press_equals();
        } else if matches!(key, '+' | '-' | '*' | '/' | '%') {
            session.press_operator(key);
        } else {
            session.press_digit(key);
        }
    }
}

#[test]
fn digits_build_the_display() {
    let mut session = Session::new();
    press_line(&mut session, "12.5");
    assert_eq!(session.display(), "12.5");
}

#[test]
fn second_decimal_point_in_a_run_is_rejected() {
    let mut session = Session::new();
    press_line(&mut session, "3.1");
    session.press_digit('.');
    assert_eq!(session.display(), "3.1");

    // A new numeric run after an operator takes its own decimal point.
    session.press_operator('+');
    session.press_digit('.');
    assert_eq!(session.display(), "3.1+.");
}

#[test]
fn commas_become_periods() {
    let mut session = Session::new();
    session.press_digit('3');
    session.press_digit(',');
    session.press_digit('5');
    assert_eq!(session.display(), "3.5");
}

#[test]
fn display_is_capped_at_max_input_len() {
    let mut session = Session::new();
    for _ in 0..30 {
        session.press_digit('1');
    }
    assert_eq!(session.display().len(), MAX_INPUT_LEN);
}

#[test]
fn operator_on_empty_display_is_ignored() {
    let mut session = Session::new();
    session.press_operator('+');
    assert_eq!(session.display(), "");
}

#[test]
fn trailing_operator_is_replaced_not_stacked() {
    let mut session = Session::new();
    press_line(&mut session, "5+");
    session.press_operator('-');
    assert_eq!(session.display(), "5-");
    session.press_operator('*');
    assert_eq!(session.display(), "5*");
}

#[test]
fn equals_shows_the_result_and_keeps_the_equation() {
    let mut session = Session::new();
    press_line(&mut session, "1+2*3=");
    assert_eq!(session.display(), "7");
    assert_eq!(session.last_equation(), "1+2*3");
}

#[test]
fn digit_after_a_result_starts_fresh() {
    let mut session = Session::new();
    press_line(&mut session, "1+2=");
    assert_eq!(session.display(), "3");
    session.press_digit('5');
    assert_eq!(session.display(), "5");
}

#[test]
fn operator_after_a_result_chains_onto_it() {
    let mut session = Session::new();
    press_line(&mut session, "1+2=");
    press_line(&mut session, "+3=");
    assert_eq!(session.display(), "6");
    assert_eq!(session.last_equation(), "3+3");
}

#[test]
fn evaluation_failure_clears_the_display() {
    let mut session = Session::new();
    session.press_digit('x');
    assert!(session.press_equals().is_err());
    assert_eq!(session.display(), "");
}

#[test]
fn function_key_updates_display_and_label() {
    let mut session = Session::new();
    press_line(&mut session, "16");
    session.press_function(FunctionKind::Sqrt).unwrap();
    assert_eq!(session.display(), "4");
    assert_eq!(session.last_equation(), "sqrt(16)");

    // Result state: the next digit starts a fresh expression.
    session.press_digit('2');
    assert_eq!(session.display(), "2");
}

#[test]
fn function_key_collapses_a_pending_expression() {
    let mut session = Session::new();
    press_line(&mut session, "2+3");
    session.press_function(FunctionKind::Square).unwrap();
    assert_eq!(session.display(), "25");
    assert_eq!(session.last_equation(), "square(2+3)");
}

#[test]
fn function_key_operand_failure_changes_nothing() {
    let mut session = Session::new();
    session.press_digit('x');
    session.press_function(FunctionKind::Sqrt).unwrap();
    assert_eq!(session.display(), "x");
    assert_eq!(session.last_equation(), "");
}

#[test]
fn clear_backspace_and_reset() {
    let mut session = Session::new();
    press_line(&mut session, "12");
    session.press_backspace();
    assert_eq!(session.display(), "1");
    session.press_backspace();
    session.press_backspace();
    assert_eq!(session.display(), "");

    press_line(&mut session, "1+1=");
    session.press_clear();
    assert_eq!(session.display(), "");
    assert_eq!(session.last_equation(), "1+1");

    session.reset();
    assert_eq!(session.last_equation(), "");
}

#[test]
fn stateless_shapes_match_the_handlers() {
    assert_eq!(shape_input("2,5"), "2.5");
    assert_eq!(append_input("3.1", '.'), "3.1");
    assert_eq!(append_input("3", '.'), "3.");
    assert_eq!(append_operator("5+", '-'), "5-");
    assert_eq!(append_operator("", '+'), "");
    assert_eq!(append_operator("5", '('), "5");
    assert_eq!(backspace("12"), "1");
    assert_eq!(backspace(""), "");
}
