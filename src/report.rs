//! Whole-text summaries built on top of the scanner.

use crate::scanner::{self, context_window, ContextStyle, ScanMode, Span};
use crate::validator::ValidationStatus;
use serde::Serialize;
use std::collections::BTreeMap;

/// A valid numeral found in text, with its rendered surroundings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConvertedMatch {
    pub roman: String,
    pub arabic: u32,
    pub span: Span,
    pub context: String,
}

/// A valid numeral located by line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NumeralOccurrence {
    pub roman: String,
    pub arabic: u32,
    /// 1-based.
    pub line: usize,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextAnalysis {
    pub total_characters: usize,
    pub total_lines: usize,
    pub candidates_found: usize,
    pub valid_numerals: usize,
    pub numerals: Vec<NumeralOccurrence>,
    /// Candidate count per status; every status is present.
    pub validation_stats: BTreeMap<ValidationStatus, usize>,
}

/// Strict scan of `text`, each hit rendered with its context window.
pub fn find_and_convert(text: &str, style: &ContextStyle) -> Vec<ConvertedMatch> {
    scanner::scan(text, ScanMode::Strict)
        .into_iter()
        .filter_map(|r| {
            let arabic = r.value()?;
            let span = r.span()?;
            Some(ConvertedMatch {
                roman: r.numeral().to_string(),
                arabic,
                span,
                context: context_window(text, span, style),
            })
        })
        .collect()
}

/// Loose scan of `text` with per-status counts and line numbers for the
/// valid numerals.
pub fn analyze_text(text: &str) -> TextAnalysis {
    let candidates = scanner::scan(text, ScanMode::Loose);

    let mut validation_stats: BTreeMap<ValidationStatus, usize> =
        ValidationStatus::ALL.iter().map(|&s| (s, 0)).collect();
    for c in &candidates {
        *validation_stats.entry(c.status()).or_default() += 1;
    }

    let mut lines = LineCounter::new(text);
    let numerals: Vec<NumeralOccurrence> = candidates
        .iter()
        .filter_map(|r| {
            let arabic = r.value()?;
            let span = r.span()?;
            Some(NumeralOccurrence {
                roman: r.numeral().to_string(),
                arabic,
                line: lines.line_at(span.start),
                span,
            })
        })
        .collect();

    TextAnalysis {
        total_characters: text.chars().count(),
        total_lines: text.matches('\n').count() + 1,
        candidates_found: candidates.len(),
        valid_numerals: numerals.len(),
        numerals,
        validation_stats,
    }
}

/// 1-based line number of the character at `char_offset`.
pub fn line_of(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).filter(|&c| c == '\n').count() + 1
}

/// Incremental [`line_of`] for ascending offsets.
struct LineCounter<'a> {
    chars: std::str::Chars<'a>,
    offset: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            offset: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, char_offset: usize) -> usize {
        while self.offset < char_offset {
            match self.chars.next() {
                Some('\n') => self.line += 1,
                Some(_) => {}
                None => break,
            }
            self.offset += 1;
        }

        self.line
    }
}
