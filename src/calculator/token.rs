use logos::Logos;

use crate::calculator::format::Formatter;

/// Represents a lexical token in the expression input.
/// A token is either a numeric operand or one of the five arithmetic
/// operators; parentheses are recognized as themselves but carry no grouping
/// semantics anywhere in the pipeline.
///
/// Anything between two operator boundaries that is not itself an operator
/// must parse as a decimal number (after comma normalization), so consecutive
/// operators survive tokenization as separate tokens and are resolved later
/// by sign folding.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Operator tokens: `+`, `-`, `*`, `/` and `%`.
    #[token("+", |_| BinaryOp::Add)]
    #[token("-", |_| BinaryOp::Sub)]
    #[token("*", |_| BinaryOp::Mul)]
    #[token("/", |_| BinaryOp::Div)]
    #[token("%", |_| BinaryOp::Rem)]
    Operator(BinaryOp),
    /// `(` — lexed but rejected downstream, never reduced.
    #[token("(")]
    LParen,
    /// `)` — lexed but rejected downstream, never reduced.
    #[token(")")]
    RParen,
    /// Numeric literal tokens, such as `42`, `3.14` or `2,5`.
    #[regex(r"[^+\-*/%()]+", parse_operand)]
    Operand(Number),
}

impl Token {
    /// Returns the operand carried by this token, or `None` for operators and
    /// parentheses.
    #[must_use]
    pub const fn operand(&self) -> Option<&Number> {
        match self {
            Self::Operand(number) => Some(number),
            _ => None,
        }
    }

    /// Returns the operator carried by this token, or `None` for operands and
    /// parentheses.
    #[must_use]
    pub const fn operator(&self) -> Option<BinaryOp> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

/// The five binary operators of the input grammar.
///
/// `Mul`, `Div` and `Rem` form the high-priority tier and reduce before `Add`
/// and `Sub`; within a tier reduction is strictly left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}

impl BinaryOp {
    /// Maps an operator character to its operator, if it is one.
    ///
    /// # Example
    /// ```
    /// use simplecount::BinaryOp;
    ///
    /// assert_eq!(BinaryOp::from_char('*'), Some(BinaryOp::Mul));
    /// assert_eq!(BinaryOp::from_char('('), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Rem),
            _ => None,
        }
    }

    /// The character this operator was lexed from.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
        }
    }

    /// Applies the operator to two values using native `f64` semantics.
    ///
    /// Division and remainder by zero follow floating-point rules and produce
    /// an infinity or `NaN` value rather than an error; the remainder keeps
    /// the sign of the dividend.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Rem => left % right,
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A numeric operand, stored both as its parsed value and its normalized
/// source text.
///
/// The value drives arithmetic; the text is what the session layer inspects
/// and what intermediate results re-stringify to, so a formatted result fed
/// back through the tokenizer parses to the same operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    /// The parsed floating-point value.
    pub value: f64,
    /// The normalized source text the value was parsed from.
    pub text:  String,
}

impl Number {
    /// Parses an operand from a raw input substring.
    ///
    /// Literal commas are treated as decimal points and surrounding
    /// whitespace is trimmed before parsing.
    ///
    /// # Returns
    /// - `Some(Number)`: The parsed operand if the text is a valid decimal
    ///   literal.
    /// - `None`: If the text is not a valid number.
    ///
    /// # Example
    /// ```
    /// use simplecount::Number;
    ///
    /// let n = Number::parse("2,5").unwrap();
    /// assert_eq!(n.value, 2.5);
    /// assert_eq!(n.text, "2.5");
    ///
    /// assert!(Number::parse("2.5.1").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.replace(',', ".");
        let trimmed = normalized.trim();
        trimmed.parse::<f64>()
               .ok()
               .map(|value| Self { value,
                                   text: trimmed.to_owned() })
    }

    /// Builds an operand from a computed value; the text is the value-path
    /// canonical form.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self { value,
               text: Formatter::value().format(value) }
    }

    /// The operand `0`, used when an empty input needs a value.
    #[must_use]
    pub fn zero() -> Self {
        Self { value: 0.0,
               text:  "0".to_owned(), }
    }

    /// Returns this operand with its sign flipped, as produced by unary-minus
    /// folding.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self { value: -self.value,
               text:  format!("-{}", self.text), }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Parses an operand from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Number)`: The parsed operand if successful.
/// - `None`: If the slice is not a valid decimal literal, which surfaces as a
///   lexing error on the whole call.
fn parse_operand(lex: &logos::Lexer<Token>) -> Option<Number> {
    Number::parse(lex.slice())
}
