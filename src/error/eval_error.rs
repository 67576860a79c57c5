use crate::error::TokenizeError;

#[derive(Debug, Clone)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant is a local, recoverable condition: the presentation layer
/// reacts by clearing its display (or treating the call as a no-op) and the
/// user re-enters input. Division by zero and out-of-domain transcendentals
/// are deliberately *not* errors; they pass through as `Infinity`/`NaN`
/// formatted text.
pub enum EvalError {
    /// The raw input could not be split into tokens.
    Tokenize(TokenizeError),
    /// Nothing was left to evaluate after trimming a trailing operator.
    EmptyExpression,
    /// A reduction step expected a numeric operand and found none.
    MalformedOperand {
        /// The token position where the operand was expected.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize(e) => write!(f, "{e}"),

            Self::EmptyExpression => write!(f, "Nothing to evaluate."),

            Self::MalformedOperand { position } => {
                write!(f, "Expected a number at position {position}.")
            },
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tokenize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TokenizeError> for EvalError {
    fn from(e: TokenizeError) -> Self {
        Self::Tokenize(e)
    }
}
