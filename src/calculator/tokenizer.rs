use logos::Logos;

use crate::{
    calculator::token::{BinaryOp, Token},
    error::TokenizeError,
};

/// Splits raw input into an ordered token sequence.
///
/// Split points sit immediately before and after every operator or
/// parenthesis character; the operators themselves are kept as tokens, and
/// consecutive operators stay separate (sign folding resolves them later).
/// Every remaining substring must parse as a decimal number, with literal
/// commas treated as decimal points.
///
/// Empty input tokenizes to an empty sequence; the evaluator treats that as
/// the single operand `0`.
///
/// # Errors
/// Returns `TokenizeError::InvalidOperand` if a substring between operator
/// boundaries is not a valid decimal literal.
///
/// # Example
/// ```
/// use simplecount::{tokenize, Token};
///
/// let tokens = tokenize("1+2*3").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert!(matches!(tokens[0], Token::Operand(_)));
/// assert!(matches!(tokens[1], Token::Operator(_)));
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(TokenizeError::InvalidOperand { text: lexer.slice().to_owned() });
        }
    }

    Ok(tokens)
}

/// Folds unary-minus operators into the operand that follows them.
///
/// A `-` token acts as a sign rather than a subtraction when the token before
/// it is itself an operator (so no left operand exists), or when it opens the
/// sequence. In both cases the following operand is rewritten with a flipped
/// sign and the `-` token is removed. The scan restarts from the start after
/// every fold: a structural edit shifts all later indices, and restarting is
/// safer than proving a single pass never skips an adjacent candidate.
/// Terminates because each fold strictly shortens the sequence.
///
/// This is a heuristic, not a grammar: it distinguishes `5-3` (left operand
/// present, binary subtraction) from `5*-3` (preceding token is an operator,
/// sign) without building any expression tree. A parenthesis before the `-`
/// does not count as an operator, so `(-5` stays unfolded and is rejected at
/// reduction time like any other parenthesized input.
///
/// # Example
/// ```
/// use simplecount::{normalize, tokenize, Token};
///
/// let mut tokens = tokenize("5*-3").unwrap();
/// normalize(&mut tokens);
/// assert_eq!(tokens.len(), 3);
/// let Token::Operand(number) = &tokens[2] else {
///     panic!("expected an operand");
/// };
/// assert_eq!(number.value, -3.0);
/// assert_eq!(number.text, "-3");
/// ```
pub fn normalize(tokens: &mut Vec<Token>) {
    let mut i = 0;

    while i < tokens.len() {
        let signed = match (tokens.get(i), tokens.get(i + 1)) {
            (Some(Token::Operator(BinaryOp::Sub)), Some(Token::Operand(number)))
                if i == 0 || matches!(tokens[i - 1], Token::Operator(_)) =>
            {
                number.negated()
            },
            _ => {
                i += 1;
                continue;
            },
        };

        tokens[i + 1] = Token::Operand(signed);
        tokens.remove(i);
        i = 0;
    }
}
