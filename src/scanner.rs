//! Finding numerals in free text.
//!
//! A single traversal walks the matches of a candidate pattern and hands each
//! one to a [`CandidateAcceptance`] strategy, which decides what the match is
//! worth. The two built-in strategies are [`Strict`] (grammar matches only,
//! always valid) and [`Loose`] (any word made of numeral letters, validated
//! individually).
//!
//! Offsets in [`Span`] count characters, not bytes.

use crate::converter;
use crate::grammar::GRAMMAR;
use crate::symbol::ALPHABET;
use crate::validator::{self, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

static STRICT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{GRAMMAR})\b")).expect("strict scan pattern is valid")
});

static LOOSE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b[{ALPHABET}]+\b")).expect("loose scan pattern is valid")
});

/// Half-open character range `[start, end)` within the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Only grammatically well-formed numerals.
    #[default]
    Strict,
    /// Every word made of numeral letters, whatever its validity.
    Loose,
}

/// Decides which regions of text are candidates and what each one is worth.
pub trait CandidateAcceptance {
    /// Pattern whose non-empty matches are the candidates.
    fn pattern(&self) -> &Regex;

    /// Classifies one candidate. The span is attached by the caller.
    fn accept(&self, candidate: &str) -> ValidationResult;
}

/// Grammar matches, valid by construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct Strict;

impl CandidateAcceptance for Strict {
    fn pattern(&self) -> &Regex {
        &STRICT_PATTERN
    }

    fn accept(&self, candidate: &str) -> ValidationResult {
        let numeral = candidate.to_ascii_uppercase();
        match converter::to_arabic(&numeral) {
            Ok(value) => ValidationResult::valid(numeral, value),
            // Grammar matches only contain numeral symbols, so this is unreachable
            // unless the pattern and the alphabet drift apart.
            Err(e) => {
                debug!(candidate, error = %e, "strict match failed to convert");
                validator::validate(candidate)
            }
        }
    }
}

/// Runs of numeral letters, each sent through the full validator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Loose;

impl CandidateAcceptance for Loose {
    fn pattern(&self) -> &Regex {
        &LOOSE_PATTERN
    }

    fn accept(&self, candidate: &str) -> ValidationResult {
        validator::validate(candidate)
    }
}

/// Scans `text` with one of the built-in strategies.
pub fn scan(text: &str, mode: ScanMode) -> Vec<ValidationResult> {
    match mode {
        ScanMode::Strict => scan_with(text, &Strict),
        ScanMode::Loose => scan_with(text, &Loose),
    }
}

/// Scans `text` with a custom strategy. Results are in text order and each
/// carries its character span.
pub fn scan_with<A: CandidateAcceptance + ?Sized>(
    text: &str,
    acceptance: &A,
) -> Vec<ValidationResult> {
    let mut results = Vec::new();

    // Running byte -> char offset translation; matches arrive in order.
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for m in acceptance.pattern().find_iter(text) {
        if m.as_str().is_empty() {
            continue;
        }

        char_cursor += text[byte_cursor..m.start()].chars().count();
        let start = char_cursor;
        char_cursor += m.as_str().chars().count();
        byte_cursor = m.end();

        let span = Span::new(start, char_cursor);
        trace!(candidate = m.as_str(), start, end = char_cursor, "scan candidate");

        results.push(acceptance.accept(m.as_str()).with_span(span));
    }

    debug!(
        candidates = results.len(),
        valid = results.iter().filter(|r| r.is_valid()).count(),
        "scan finished"
    );

    results
}

/// Rendering options for [`context_window`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextStyle {
    /// Characters kept on each side of the match.
    pub width: usize,
    pub open: String,
    pub close: String,
    /// Marks a side where the window was cut short of the text boundary.
    pub ellipsis: String,
}

impl Default for ContextStyle {
    fn default() -> Self {
        Self {
            width: 20,
            open: ">>>".to_string(),
            close: "<<<".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

impl ContextStyle {
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

/// Renders the text around `span` with the match delimited by markers.
///
/// Spans past the end of the text are clamped.
pub fn context_window(text: &str, span: Span, style: &ContextStyle) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let start = span.start.min(len);
    let end = span.end.clamp(start, len);
    let ctx_start = start.saturating_sub(style.width);
    let ctx_end = end.saturating_add(style.width).min(len);

    let mut out = String::new();
    if ctx_start > 0 {
        out.push_str(&style.ellipsis);
    }

    out.extend(&chars[ctx_start..start]);
    out.push_str(&style.open);
    out.extend(&chars[start..end]);
    out.push_str(&style.close);
    out.extend(&chars[end..ctx_end]);

    if ctx_end < len {
        out.push_str(&style.ellipsis);
    }

    out
}
