//! Rule validator.
//!
//! Classification runs in a fixed order and stops at the first failure:
//!
//! 1. empty after trimming → [`ValidationStatus::Empty`]
//! 2. characters outside the alphabet → [`ValidationStatus::InvalidFormat`]
//! 3. forbidden combinations → [`ValidationStatus::InvalidSubtraction`]
//! 4. over-long runs → [`ValidationStatus::InvalidRepetition`]
//! 5. pairwise subtraction and ordering scan →
//!    [`ValidationStatus::InvalidSubtraction`] / [`ValidationStatus::InvalidOrder`]
//! 6. the four-group grammar → [`ValidationStatus::InvalidFormat`]
//!
//! Only a numeral that clears every stage gets a value.

use crate::converter;
use crate::grammar;
use crate::scanner::Span;
use crate::symbol::{Symbol, FORBIDDEN_COMBINATIONS};
use core::fmt;
use serde::Serialize;
use tracing::debug;

/// Outcome category of a validation. Exactly one applies to any input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Valid,
    InvalidFormat,
    InvalidOrder,
    InvalidRepetition,
    InvalidSubtraction,
    Empty,
}

impl ValidationStatus {
    pub const ALL: [ValidationStatus; 6] = [
        ValidationStatus::Valid,
        ValidationStatus::InvalidFormat,
        ValidationStatus::InvalidOrder,
        ValidationStatus::InvalidRepetition,
        ValidationStatus::InvalidSubtraction,
        ValidationStatus::Empty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Valid => "VALID",
            ValidationStatus::Empty => "EMPTY",
            ValidationStatus::InvalidFormat => "INVALID_FORMAT",
            ValidationStatus::InvalidOrder => "INVALID_ORDER",
            ValidationStatus::InvalidRepetition => "INVALID_REPETITION",
            ValidationStatus::InvalidSubtraction => "INVALID_SUBTRACTION",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of validating one numeral.
///
/// `value` is present only for [`ValidationStatus::Valid`], `detail` only
/// for every other status. `span` is set when the numeral came from a scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    numeral: String,
    value: Option<u32>,
    status: ValidationStatus,
    span: Option<Span>,
    detail: Option<String>,
}

impl ValidationResult {
    pub(crate) fn valid(numeral: impl Into<String>, value: u32) -> Self {
        Self {
            numeral: numeral.into(),
            value: Some(value),
            status: ValidationStatus::Valid,
            span: None,
            detail: None,
        }
    }

    fn rejected(numeral: impl Into<String>, rejection: Rejection) -> Self {
        Self {
            numeral: numeral.into(),
            value: None,
            status: rejection.status,
            span: None,
            detail: Some(rejection.detail),
        }
    }

    pub(crate) fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// The normalised (trimmed, uppercased) numeral text.
    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Valid
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value, &self.detail) {
            (Some(value), _) => write!(f, "{} = {value}", self.numeral),
            (None, Some(detail)) => write!(f, "{}: {} ({detail})", self.numeral, self.status),
            (None, None) => write!(f, "{}: {}", self.numeral, self.status),
        }
    }
}

/// A failed stage: its category and a human readable reason.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Rejection {
    status: ValidationStatus,
    detail: String,
}

impl Rejection {
    fn new(status: ValidationStatus, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

/// Validates a single numeral. Surrounding whitespace and case are ignored.
pub fn validate(input: &str) -> ValidationResult {
    let numeral = input.trim().to_ascii_uppercase();

    match classify(&numeral) {
        Ok(value) => ValidationResult::valid(numeral, value),
        Err(rejection) => {
            debug!(
                numeral = %numeral,
                status = %rejection.status,
                detail = %rejection.detail,
                "numeral rejected"
            );
            ValidationResult::rejected(numeral, rejection)
        }
    }
}

fn classify(numeral: &str) -> Result<u32, Rejection> {
    if numeral.is_empty() {
        return Err(Rejection::new(ValidationStatus::Empty, "empty input"));
    }

    let symbols = parse_symbols(numeral)?;

    check_forbidden(numeral)?;
    check_repetition(&symbols)?;
    check_pairs(&symbols)?;

    if !grammar::is_well_formed(numeral) {
        return Err(Rejection::new(
            ValidationStatus::InvalidFormat,
            "does not follow the classical numeral structure",
        ));
    }

    converter::to_arabic(numeral)
        .map_err(|e| Rejection::new(ValidationStatus::InvalidFormat, e.to_string()))
}

fn parse_symbols(numeral: &str) -> Result<Vec<Symbol>, Rejection> {
    let mut symbols = Vec::with_capacity(numeral.len());
    let mut invalid: Vec<char> = Vec::new();

    for c in numeral.chars() {
        match Symbol::from_char(c) {
            Some(s) => symbols.push(s),
            None if !invalid.contains(&c) => invalid.push(c),
            None => {}
        }
    }

    if invalid.is_empty() {
        Ok(symbols)
    } else {
        let listed = invalid
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(Rejection::new(
            ValidationStatus::InvalidFormat,
            format!("invalid characters: {listed}"),
        ))
    }
}

fn check_forbidden(numeral: &str) -> Result<(), Rejection> {
    match FORBIDDEN_COMBINATIONS
        .iter()
        .find(|combo| numeral.contains(combo.as_str()))
    {
        Some(combo) => Err(Rejection::new(
            ValidationStatus::InvalidSubtraction,
            format!("forbidden combination: {combo}"),
        )),
        None => Ok(()),
    }
}

fn check_repetition(symbols: &[Symbol]) -> Result<(), Rejection> {
    for run in symbols.chunk_by(|a, b| a == b) {
        let symbol = run[0];
        let limit = symbol.max_repetitions();
        if run.len() > limit {
            let detail = if limit == 1 {
                format!("symbol '{symbol}' cannot repeat")
            } else {
                format!("symbol '{symbol}' repeats more than {limit} times")
            };
            return Err(Rejection::new(ValidationStatus::InvalidRepetition, detail));
        }
    }

    Ok(())
}

/// Left-to-right scan pairing each symbol with its right neighbour.
///
/// Each step yields a composite value (a lone symbol or a subtractive pair)
/// which must not exceed the composite before it.
fn check_pairs(symbols: &[Symbol]) -> Result<(), Rejection> {
    let mut prev = u32::MAX;
    let mut i = 0;

    while i < symbols.len() {
        let current = symbols[i];

        let composite = match symbols.get(i + 1) {
            Some(&next) if current.value() < next.value() => {
                check_subtraction(current, next, symbols.get(i + 2).copied())?;
                i += 2;
                next.value() - current.value()
            }
            _ => {
                i += 1;
                current.value()
            }
        };

        if composite > prev {
            return Err(Rejection::new(
                ValidationStatus::InvalidOrder,
                format!("value {composite} follows smaller value {prev}"),
            ));
        }

        prev = composite;
    }

    Ok(())
}

fn check_subtraction(
    small: Symbol,
    large: Symbol,
    after: Option<Symbol>,
) -> Result<(), Rejection> {
    if !small.can_subtract_from(large) {
        return Err(Rejection::new(
            ValidationStatus::InvalidSubtraction,
            format!("invalid subtraction: {small}{large}"),
        ));
    }

    if after == Some(small) {
        return Err(Rejection::new(
            ValidationStatus::InvalidSubtraction,
            format!("subtracted symbol '{small}' cannot repeat after {small}{large}"),
        ));
    }

    check_ratio(small, large)
}

/// Defensive: every pair in the subtraction table is within 10x, so this only
/// fires if the table grows a wider pair.
fn check_ratio(small: Symbol, large: Symbol) -> Result<(), Rejection> {
    if large.value() > small.value() * 10 {
        return Err(Rejection::new(
            ValidationStatus::InvalidSubtraction,
            format!("subtracted value too small for {small}{large}"),
        ));
    }

    Ok(())
}
