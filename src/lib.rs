//! # simplecount
//!
//! simplecount is a small keypad-style arithmetic evaluator written in Rust.
//! It splits a left-to-right typed expression into tokens, folds unary-minus
//! signs, reduces the sequence under a fixed two-tier operator priority
//! (multiplication, division and remainder before addition and subtraction)
//! and renders a rounded decimal result after each completed operation.
//!
//! ```
//! use simplecount::evaluate;
//!
//! assert_eq!(evaluate("1+2*3").unwrap(), "7");
//! assert_eq!(evaluate("5*-3").unwrap(), "-15");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// The tokenizer + evaluator pipeline.
///
/// This module ties together tokenization, unary-minus normalization,
/// priority-ordered reduction, decimal formatting and the transcendental
/// function operations. It holds no state across calls: every entry point
/// takes the full current text and returns a complete result.
///
/// # Responsibilities
/// - Splits raw display text into classified tokens.
/// - Reduces well-formed token sequences to a single formatted result.
/// - Applies the unary transcendental functions to a collapsed operand.
pub mod calculator;
/// Provides unified error types for tokenization and evaluation.
///
/// This module defines all errors that can be raised while splitting input
/// or reducing a token sequence. Every error is a local, recoverable
/// condition the presentation layer answers by clearing its display; none is
/// fatal to the process.
///
/// # Responsibilities
/// - Defines error enums for both pipeline phases.
/// - Distinguishes surfaced errors from silent `NaN`/`Infinity` results.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Input shaping and keypad session state.
///
/// This module carries everything the presentation layer needs: the single
/// normalization choke point for new display text, stateless append/edit
/// call shapes, and the `Session` type holding the display text, the last
/// computed equation and the clear-on-next-keystroke flag.
///
/// # Responsibilities
/// - Shapes raw input (length cap, comma normalization) before tokenizing.
/// - Implements the keypad handlers over the stateless core.
/// - Owns the per-session lifecycle; the core never keeps state.
pub mod session;

pub use calculator::{
    evaluator::{evaluate, evaluate_value, evaluate_with},
    format::Formatter,
    special::{apply_special, FunctionKind, SpecialResult},
    token::{BinaryOp, Number, Token},
    tokenizer::{normalize, tokenize},
};
pub use error::{EvalError, TokenizeError};
pub use session::Session;
