#[derive(Debug, Clone)]
/// Represents all errors that can occur while splitting raw input into tokens.
pub enum TokenizeError {
    /// A substring between operator boundaries is not a valid decimal literal.
    InvalidOperand {
        /// The text that failed to parse as a number.
        text: String,
    },
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { text } => {
                write!(f, "Not a valid number: '{text}'.")
            },
        }
    }
}

impl std::error::Error for TokenizeError {}
