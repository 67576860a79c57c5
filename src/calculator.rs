/// Token definitions for the expression grammar.
///
/// Declares the `Token` enum the lexer produces, the `BinaryOp` operator set
/// with its native floating-point semantics, and the `Number` operand type
/// that carries both a parsed value and its normalized source text.
pub mod token;

/// The tokenizer splits raw input and folds unary-minus signs.
///
/// Splits the display text on operator boundaries without discarding the
/// operators themselves, classifies every substring, and rewrites
/// operator-preceded `-` tokens into signed operands. This is the first
/// stage of the pipeline.
pub mod tokenizer;

/// The evaluator reduces a token sequence to a single result.
///
/// Trims a trailing operator, then repeatedly picks the next reduction site
/// by operator priority (multiplication, division and remainder before
/// addition and subtraction, left-to-right within a tier) and splices three
/// tokens into one until a single operand remains.
pub mod evaluator;

/// Decimal formatting of computed values.
///
/// Renders results with the interactive display cap or the wider value-path
/// cap, trimming trailing zeros and passing `NaN`/`Infinity` through as
/// literal text.
pub mod format;

/// The unary transcendental functions and their display-text entry point.
///
/// Collapses a pending expression if needed, applies the function with
/// standard floating math, and yields an equation label plus the formatted
/// result.
pub mod special;
