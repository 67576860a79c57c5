//! The thin presentation-facing layer: input shaping and keypad state.
//!
//! The core pipeline is stateless per call; everything with a lifecycle (the
//! displayed text, the last computed equation, the clear-on-next-keystroke
//! flag) lives in [`Session`]. The free functions carry the stateless call
//! shapes so an embedding presentation layer can drive the core directly.

use crate::{
    calculator::{
        evaluator::evaluate,
        special::{apply_special, FunctionKind},
        token::BinaryOp,
    },
    error::EvalError,
};

/// Longest display text accepted from input shaping.
pub const MAX_INPUT_LEN: usize = 20;

/// Normalizes text before it becomes the current display text.
///
/// Truncates to [`MAX_INPUT_LEN`] characters and rewrites every literal
/// comma to a period. Every handler routes its new display text through
/// here, so this is the single normalization choke point ahead of the
/// tokenizer.
///
/// # Example
/// ```
/// use simplecount::session::shape_input;
///
/// assert_eq!(shape_input("3,14"), "3.14");
/// assert_eq!(shape_input("123456789012345678901234").len(), 20);
/// ```
#[must_use]
pub fn shape_input(text: &str) -> String {
    let shaped: String = text.chars().take(MAX_INPUT_LEN).collect();
    shaped.replace(',', ".")
}

/// Appends a digit or decimal point to the display text.
///
/// A second decimal point within the trailing numeric run is rejected and
/// the text comes back unchanged; anything else is appended and shaped.
#[must_use]
pub fn append_input(current: &str, input: char) -> String {
    if input == '.' && trailing_run(current).contains('.') {
        return current.to_owned();
    }
    shape_input(&format!("{current}{input}"))
}

/// Appends a binary operator to the display text.
///
/// An empty display, or a character that is not one of the five operators,
/// leaves the text unchanged. A trailing operator is replaced rather than
/// stacked, so pressing `+` then `-` edits the pending operator instead of
/// producing `+-`.
#[must_use]
pub fn append_operator(current: &str, op: char) -> String {
    if current.is_empty() || BinaryOp::from_char(op).is_none() {
        return current.to_owned();
    }

    let kept = current.strip_suffix(|c| BinaryOp::from_char(c).is_some())
                      .unwrap_or(current);
    shape_input(&format!("{kept}{op}"))
}

/// Removes the last character of the display text, if any.
#[must_use]
pub fn backspace(current: &str) -> String {
    let mut text = current.to_owned();
    text.pop();
    text
}

/// The numeric run after the last operator or parenthesis character.
fn trailing_run(text: &str) -> &str {
    text.rsplit(|c: char| BinaryOp::from_char(c).is_some() || c == '(' || c == ')')
        .next()
        .unwrap_or(text)
}

/// Keypad state for one interactive evaluation session.
///
/// Holds the displayed text, the previous computed equation for label
/// display, and the flag that makes the next digit keystroke start a fresh
/// expression after a result was produced. One key press is processed at a
/// time; the core is invoked synchronously and keeps no state of its own.
///
/// # Example
/// ```
/// use simplecount::Session;
///
/// let mut session = Session::new();
/// for key in "1+2*3".chars() {
///     if key.is_ascii_digit() {
///         session.press_digit(key);
///     } else {
///         session.press_operator(key);
///     }
/// }
/// session.press_equals().unwrap();
/// assert_eq!(session.display(), "7");
/// assert_eq!(session.last_equation(), "1+2*3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    display:       String,
    last_equation: String,
    should_clear:  bool,
}

impl Session {
    /// Creates a session with an empty display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The equation label of the last computed result.
    #[must_use]
    pub fn last_equation(&self) -> &str {
        &self.last_equation
    }

    /// Handles a digit or decimal-point key.
    ///
    /// Starts a fresh expression when the previous keystroke produced a
    /// result; otherwise appends, subject to the decimal-point rejection of
    /// [`append_input`].
    pub fn press_digit(&mut self, input: char) {
        if self.should_clear {
            self.display.clear();
        }
        self.display = append_input(&self.display, input);
        self.should_clear = false;
    }

    /// Handles an operator key.
    ///
    /// Keeps the current result on screen so the user can chain operations
    /// onto it; an empty display ignores the key.
    pub fn press_operator(&mut self, op: char) {
        if self.display.is_empty() {
            return;
        }
        self.display = append_operator(&self.display, op);
        self.should_clear = false;
    }

    /// Handles the `=` key: evaluates the display text.
    ///
    /// On success the old text becomes the last-equation label, the result
    /// becomes the display, and the next digit starts fresh.
    ///
    /// # Errors
    /// Any `EvalError` clears the display and is handed back so an embedding
    /// layer can report it.
    pub fn press_equals(&mut self) -> Result<(), EvalError> {
        match evaluate(&self.display) {
            Ok(result) => {
                self.last_equation = std::mem::take(&mut self.display);
                self.display = shape_input(&result);
                self.should_clear = true;
                Ok(())
            },
            Err(e) => {
                self.display.clear();
                Err(e)
            },
        }
    }

    /// Handles a function key (`sqrt`, `log`, ...).
    ///
    /// A silent no-op operand failure leaves everything untouched, matching
    /// [`apply_special`].
    ///
    /// # Errors
    /// An `EvalError` from collapsing a pending expression clears the
    /// display, exactly like [`Session::press_equals`].
    pub fn press_function(&mut self, kind: FunctionKind) -> Result<(), EvalError> {
        match apply_special(kind, &self.display) {
            Ok(Some(result)) => {
                self.last_equation = result.label;
                self.display = shape_input(&result.text);
                self.should_clear = true;
                Ok(())
            },
            Ok(None) => Ok(()),
            Err(e) => {
                self.display.clear();
                Err(e)
            },
        }
    }

    /// Handles the clear key: empties the display text.
    pub fn press_clear(&mut self) {
        self.display.clear();
    }

    /// Handles the backspace key.
    pub fn press_backspace(&mut self) {
        self.display = backspace(&self.display);
    }

    /// Resets the whole session, equation label included.
    pub fn reset(&mut self) {
        self.display.clear();
        self.last_equation.clear();
        self.should_clear = false;
    }
}
