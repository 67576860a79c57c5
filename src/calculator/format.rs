/// Maximum fraction digits for the interactive display path.
pub const DISPLAY_FRACTION_DIGITS: usize = 5;
/// Maximum fraction digits for the value path feeding chained operations.
pub const VALUE_FRACTION_DIGITS: usize = 8;

/// Renders computed values as decimal display text.
///
/// Finite values round to one fractional digit by default, with trailing
/// zeros (and a bare decimal point) trimmed, so integers render without any
/// fractional part. When one-digit rounding would collapse a nonzero value
/// to zero, the full configured cap is used instead, so small magnitudes
/// stay visible. Non-finite values render as literal `NaN`,
/// `Infinity` or `-Infinity` text; these are pass-through results, not
/// errors, and the text re-parses as an operand when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    max_fraction_digits: usize,
}

impl Formatter {
    /// Creates a formatter with the given fraction-digit cap.
    #[must_use]
    pub const fn new(max_fraction_digits: usize) -> Self {
        Self { max_fraction_digits }
    }

    /// The formatter used for final interactive results (cap 5).
    #[must_use]
    pub const fn display() -> Self {
        Self::new(DISPLAY_FRACTION_DIGITS)
    }

    /// The formatter used for intermediate re-stringified operands and
    /// special-operation results (cap 8).
    #[must_use]
    pub const fn value() -> Self {
        Self::new(VALUE_FRACTION_DIGITS)
    }

    /// Formats a value as display text.
    ///
    /// # Example
    /// ```
    /// use simplecount::Formatter;
    ///
    /// let display = Formatter::display();
    /// assert_eq!(display.format(7.0), "7");
    /// assert_eq!(display.format(10.0 / 3.0), "3.3");
    /// assert_eq!(display.format(-2.5), "-2.5");
    /// assert_eq!(display.format(0.0004), "0.0004");
    /// assert_eq!(display.format(f64::NAN), "NaN");
    /// assert_eq!(display.format(f64::INFINITY), "Infinity");
    /// ```
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_owned();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
        }

        let digits = if value != 0.0 && round_to(value, 1) == 0.0 {
            self.max_fraction_digits
        } else {
            1
        };

        let rounded = round_to(value, digits);
        trim_fraction(&format!("{rounded:.digits$}"))
    }
}

/// Rounds a value to the given number of fraction digits, half away from
/// zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn round_to(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// Drops trailing fractional zeros, and the decimal point itself when
/// nothing remains behind it.
fn trim_fraction(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        text.to_owned()
    }
}
