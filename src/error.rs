/// Tokenization errors.
///
/// Defines all error types that can occur while splitting raw input into
/// tokens. Tokenize errors cover substrings between operator boundaries that
/// do not parse as decimal literals.
pub mod tokenize_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a token
/// sequence to a result: empty expressions and malformed operand positions,
/// plus a wrapper for tokenization failures so both phases compose with `?`.
pub mod eval_error;

pub use eval_error::EvalError;
pub use tokenize_error::TokenizeError;
