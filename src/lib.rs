//! # Classical numerals
//!
//! Validation, conversion and text scanning for numerals written with the
//! seven Latin symbols `I V X L C D M`.
//!
//! ## Validation
//!
//! [`validate`] never fails: it classifies its input into exactly one
//! [`ValidationStatus`] and attaches either a value (when valid) or a reason
//! (otherwise). Checks run in this order and stop at the first failure:
//!
//! 1. **Empty**: nothing left after trimming.
//! 2. **Alphabet**: every character must be one of the seven symbols
//!    (case-insensitive).
//! 3. **Forbidden combinations**: `IIII`, `VV`, `IC`, `IIV`, ... anywhere.
//! 4. **Repetition**: at most 3 consecutive `I X C M`, at most 1 `V L D`.
//! 5. **Pairs**: a smaller symbol before a larger one must be a legal
//!    subtractive pair (`IV IX XL XC CD CM`), and composite values must not
//!    increase left to right.
//! 6. **Grammar**: `M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})`.
//!
//! ## Conversion
//! - [`to_arabic`]: lenient right-to-left sum, no grammar checks.
//! - [`to_roman`]: canonical spelling for `1..=3999`, otherwise
//!   [`ConversionError::OutOfRange`].
//! - [`Numeral`]: a validated numeral (`FromStr`, `TryFrom<i64>`, `Display`).
//!
//! ## Scanning
//! - [`scan`] with [`ScanMode::Strict`] finds grammatical whole words only.
//! - [`scan`] with [`ScanMode::Loose`] finds every word made of numeral
//!   letters and validates each one.
//! - [`context_window`] renders the text around a match.
//!
//! Spans count characters, not bytes. Scanning is case-insensitive, so
//! ordinary words such as "mix" or "did" are found too.
//!
//! ## Example
//! ```rust
//! use roman_numerals::{scan, to_roman, validate, ScanMode, ValidationStatus};
//!
//! assert_eq!(validate("XLII").value(), Some(42));
//! assert_eq!(validate("IC").status(), ValidationStatus::InvalidSubtraction);
//! assert_eq!(to_roman(2024).unwrap(), "MMXXIV");
//!
//! let found = scan("Chapter IV, section IX", ScanMode::Strict);
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[1].value(), Some(9));
//! ```

pub mod converter;
pub mod grammar;
pub mod report;
pub mod samples;
pub mod scanner;
pub mod symbol;
pub mod validator;

pub use converter::{to_arabic, to_roman, ConversionError, Numeral, MAX_VALUE, MIN_VALUE};
pub use report::{analyze_text, find_and_convert, line_of, ConvertedMatch, TextAnalysis};
pub use scanner::{
    context_window, scan, scan_with, CandidateAcceptance, ContextStyle, ScanMode, Span,
};
pub use symbol::Symbol;
pub use validator::{validate, ValidationResult, ValidationStatus};
