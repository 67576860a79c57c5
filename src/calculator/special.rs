use crate::{
    calculator::{
        evaluator::evaluate_value,
        format::Formatter,
        token::Token,
        tokenizer::{normalize, tokenize},
    },
    error::EvalError,
};

/// The unary transcendental functions offered next to the binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Natural logarithm.
    Log,
    /// `e` raised to the operand.
    Exp,
    /// Cosine of the operand in radians.
    Cos,
    /// Tangent of the operand in radians.
    Tan,
    /// Sine of the operand in radians.
    Sin,
    /// Square root.
    Sqrt,
    /// The operand times itself.
    Square,
}

impl FunctionKind {
    /// Applies the function using standard floating math. There is no
    /// domain-error recovery: the logarithm or square root of a negative
    /// number yields `NaN`, which passes through formatting.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Log => value.ln(),
            Self::Exp => value.exp(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Sin => value.sin(),
            Self::Sqrt => value.sqrt(),
            Self::Square => value * value,
        }
    }

    /// The name used in equation labels and in the interactive session.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sin => "sin",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
        }
    }

    /// Looks a function up by its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "log" => Some(Self::Log),
            "exp" => Some(Self::Exp),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "sin" => Some(Self::Sin),
            "sqrt" => Some(Self::Sqrt),
            "square" => Some(Self::Square),
            _ => None,
        }
    }
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a successful special operation hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialResult {
    /// The equation label, shaped as `<function>(<original text>)`.
    pub label: String,
    /// The formatted numeric result, under the value-path precision cap.
    pub text:  String,
}

/// Applies a unary transcendental function to the current display text.
///
/// A display holding a pending binary expression (more than one operand) is
/// first collapsed through the evaluator; otherwise the last/only token is
/// taken as-is, and an empty display behaves as the operand `0`.
///
/// An operand that fails to parse — including input that does not tokenize
/// at all — aborts the whole operation as `Ok(None)`, with no visible
/// change. This silent no-op is deliberate and differs from the
/// clear-on-error policy of the other failure paths; the two must not be
/// unified.
///
/// # Errors
/// Returns the underlying `EvalError` when collapsing a pending expression
/// fails; the caller reacts by clearing, exactly as it would for `=`.
///
/// # Example
/// ```
/// use simplecount::{apply_special, FunctionKind};
///
/// let result = apply_special(FunctionKind::Sqrt, "16").unwrap().unwrap();
/// assert_eq!(result.label, "sqrt(16)");
/// assert_eq!(result.text, "4");
///
/// // No real-valued logarithm here: NaN text, not an error.
/// let result = apply_special(FunctionKind::Log, "-1").unwrap().unwrap();
/// assert_eq!(result.text, "NaN");
/// ```
pub fn apply_special(kind: FunctionKind,
                     display_text: &str)
                     -> Result<Option<SpecialResult>, EvalError> {
    let Ok(mut tokens) = tokenize(display_text) else {
        return Ok(None);
    };
    normalize(&mut tokens);

    let operands = tokens.iter().filter(|token| token.operand().is_some()).count();
    let value = if operands > 1 {
        evaluate_value(display_text)?
    } else {
        match tokens.last() {
            None => 0.0,
            Some(Token::Operand(number)) => number.value,
            Some(_) => return Ok(None),
        }
    };

    let result = kind.apply(value);
    Ok(Some(SpecialResult { label: format!("{kind}({display_text})"),
                            text:  Formatter::value().format(result), }))
}
