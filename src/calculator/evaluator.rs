use crate::{
    calculator::{
        format::Formatter,
        token::{BinaryOp, Number, Token},
        tokenizer::{normalize, tokenize},
    },
    error::EvalError,
};

/// Evaluates an expression and formats the result for the interactive
/// display.
///
/// Idempotent and free of side effects: every call receives the full current
/// text and returns a complete result, with no state kept between calls.
///
/// # Errors
/// Returns `EvalError::Tokenize` if the input does not tokenize,
/// `EvalError::EmptyExpression` if nothing remains after trimming a trailing
/// operator, and `EvalError::MalformedOperand` if a reduction step finds no
/// numeric operand where it expects one (which includes any parenthesized
/// input). All of these are recoverable by clearing the display.
///
/// # Example
/// ```
/// use simplecount::evaluate;
///
/// assert_eq!(evaluate("1+2*3").unwrap(), "7");
/// assert_eq!(evaluate("10/3").unwrap(), "3.3");
/// assert_eq!(evaluate("4+5+").unwrap(), "9");
/// assert!(evaluate("(1+2)*3").is_err());
/// ```
pub fn evaluate(text: &str) -> Result<String, EvalError> {
    evaluate_with(text, &Formatter::display())
}

/// Evaluates an expression and formats the result with the given formatter.
///
/// # Errors
/// Same failure modes as [`evaluate`].
pub fn evaluate_with(text: &str, formatter: &Formatter) -> Result<String, EvalError> {
    let value = evaluate_value(text)?;
    Ok(formatter.format(value))
}

/// Evaluates an expression down to its raw numeric value.
///
/// Empty input behaves as the single operand `0`. Otherwise the text is
/// tokenized, sign-folded, trimmed of one trailing operator and repeatedly
/// reduced until a single operand remains.
///
/// # Errors
/// Same failure modes as [`evaluate`].
///
/// # Example
/// ```
/// use simplecount::evaluate_value;
///
/// assert_eq!(evaluate_value("").unwrap(), 0.0);
/// assert_eq!(evaluate_value("5*-3").unwrap(), -15.0);
/// assert!(evaluate_value("7%2").unwrap() == 1.0);
/// ```
pub fn evaluate_value(text: &str) -> Result<f64, EvalError> {
    let mut tokens = tokenize(text)?;
    if tokens.is_empty() {
        tokens.push(Token::Operand(Number::zero()));
    }

    normalize(&mut tokens);
    trim_trailing_operator(&mut tokens);
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    reduce(&mut tokens)
}

/// Drops the final token when the user left a trailing operator.
fn trim_trailing_operator(tokens: &mut Vec<Token>) {
    if tokens.last().is_some_and(|token| token.operator().is_some()) {
        tokens.pop();
    }
}

/// Finds the next reduction site: the leftmost occurrence among `*`, `/` and
/// `%` (three independent leftmost searches, minimum of the three). When none
/// of the three exists the index defaults to `1`, the first operator position
/// of a well-formed sequence, which makes pure add/subtract expressions
/// reduce strictly left-to-right.
fn priority_index(tokens: &[Token]) -> usize {
    let leftmost = |op: BinaryOp| {
        tokens.iter()
              .position(|token| token.operator() == Some(op))
    };

    [BinaryOp::Mul, BinaryOp::Div, BinaryOp::Rem].into_iter()
                                                 .filter_map(leftmost)
                                                 .min()
                                                 .unwrap_or(1)
}

/// Reads the operand value at a position, or fails the whole evaluation.
fn operand_value(tokens: &[Token], position: usize) -> Result<f64, EvalError> {
    tokens.get(position)
          .and_then(Token::operand)
          .map(|number| number.value)
          .ok_or(EvalError::MalformedOperand { position })
}

/// Repeatedly reduces the token sequence until one operand remains.
///
/// Each step picks the reduction site, reads the operand on either side of
/// it, applies the operator and splices the three tokens into one new operand
/// carrying both the value and its canonical text. A non-operand token at
/// either side (a stray operator, or a parenthesis, which is never reduced)
/// fails the whole evaluation. Terminates because every step removes two
/// tokens.
fn reduce(tokens: &mut Vec<Token>) -> Result<f64, EvalError> {
    while tokens.len() > 1 {
        let index = priority_index(tokens);
        let left_at = index.checked_sub(1)
                           .ok_or(EvalError::MalformedOperand { position: 0 })?;

        let left = operand_value(tokens, left_at)?;
        let op = tokens.get(index)
                       .and_then(Token::operator)
                       .ok_or(EvalError::MalformedOperand { position: index })?;
        let right = operand_value(tokens, index + 1)?;

        let result = op.apply(left, right);
        tokens.drain(left_at..=index + 1);
        tokens.insert(left_at, Token::Operand(Number::from_value(result)));
    }

    operand_value(tokens, 0)
}
