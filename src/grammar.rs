//! Structural matcher for the four-group classical grammar.
//!
//! ```text
//! M{0,3} (CM|CD|D?C{0,3}) (XC|XL|L?X{0,3}) (IX|IV|V?I{0,3})
//! thousands  hundreds          tens              units
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar body without anchors, shared with the strict scanner.
pub(crate) const GRAMMAR: &str = r"M{0,3}(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})";

static ANCHORED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{GRAMMAR}$")).expect("numeral grammar is a valid pattern")
});

/// Returns `true` if `numeral` (uppercase, trimmed) follows the grammar in
/// full. The empty string matches; callers reject it beforehand.
pub fn is_well_formed(numeral: &str) -> bool {
    ANCHORED.is_match(numeral)
}
