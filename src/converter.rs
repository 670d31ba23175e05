use crate::symbol::Symbol;
use crate::validator::{self, ValidationStatus};
use core::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest value with a classical spelling.
pub const MIN_VALUE: i64 = 1;

/// Largest value with a classical spelling.
pub const MAX_VALUE: i64 = 3999;

/// Greedy conversion table, descending, subtractive shorthands interleaved.
const CONVERSIONS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("value {value} is outside the representable range 1..=3999")]
    OutOfRange { value: i64 },

    #[error("'{symbol}' is not a numeral symbol")]
    UnknownSymbol { symbol: char },

    #[error("numeral value does not fit in 32 bits")]
    Overflow,

    #[error("{status}: {detail}")]
    Invalid {
        status: ValidationStatus,
        detail: String,
    },
}

/// Converts a numeral to its integer value.
///
/// Reads right to left: a symbol subtracts when it is strictly smaller than
/// its right neighbour, otherwise it adds. No grammar checks are made, so
/// `IIX` yields 10 and `IC` yields 99; use [`validate`](crate::validate)
/// first when the input is untrusted. The empty string yields 0.
pub fn to_arabic(numeral: &str) -> Result<u32, ConversionError> {
    let mut total: i64 = 0;
    let mut prev: u32 = 0;

    for c in numeral.trim().chars().rev() {
        let value = Symbol::from_char(c)
            .ok_or(ConversionError::UnknownSymbol { symbol: c })?
            .value();

        if value < prev {
            total -= i64::from(value);
        } else {
            total += i64::from(value);
        }

        prev = value;
    }

    u32::try_from(total).map_err(|_| ConversionError::Overflow)
}

/// Builds the canonical numeral for `value`, which must be in
/// `MIN_VALUE..=MAX_VALUE`.
pub fn to_roman(value: i64) -> Result<String, ConversionError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(ConversionError::OutOfRange { value });
    }

    // In range, so the cast is lossless.
    let mut remaining = value as u32;
    let mut out = String::new();

    for (step, group) in CONVERSIONS {
        while remaining >= step {
            out.push_str(group);
            remaining -= step;
        }
    }

    Ok(out)
}

/// A numeral that passed validation, held in canonical uppercase form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral {
    value: u32,
    text: String,
}

impl Numeral {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Numeral {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let result = validator::validate(s);
        match result.value() {
            Some(value) => Ok(Numeral {
                value,
                text: result.numeral().to_string(),
            }),
            None => Err(ConversionError::Invalid {
                status: result.status(),
                detail: result.detail().unwrap_or_default().to_string(),
            }),
        }
    }
}

impl TryFrom<i64> for Numeral {
    type Error = ConversionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let text = to_roman(value)?;
        Ok(Numeral {
            value: value as u32,
            text,
        })
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct TestEntry {
        value: i64,
        numeral: &'static str,
    }

    const KNOWN: &[TestEntry] = &[
        TestEntry { value: 1, numeral: "I" },
        TestEntry { value: 4, numeral: "IV" },
        TestEntry { value: 9, numeral: "IX" },
        TestEntry { value: 14, numeral: "XIV" },
        TestEntry { value: 40, numeral: "XL" },
        TestEntry { value: 42, numeral: "XLII" },
        TestEntry { value: 99, numeral: "XCIX" },
        TestEntry { value: 444, numeral: "CDXLIV" },
        TestEntry { value: 1984, numeral: "MCMLXXXIV" },
        TestEntry { value: 2024, numeral: "MMXXIV" },
        TestEntry { value: 3999, numeral: "MMMCMXCIX" },
    ];

    #[test]
    fn known_values_both_ways() {
        for (i, test) in KNOWN.iter().enumerate() {
            assert_eq!(
                to_roman(test.value).as_deref(),
                Ok(test.numeral),
                "Test case {i} failed"
            );
            assert_eq!(
                to_arabic(test.numeral),
                Ok(test.value as u32),
                "Test case {i} failed"
            );
        }
    }

    #[test]
    fn out_of_range() {
        for value in [0, -1, 4000, i64::MAX, i64::MIN] {
            assert_eq!(to_roman(value), Err(ConversionError::OutOfRange { value }));
        }
    }

    #[test]
    fn to_arabic_is_lenient_and_case_insensitive() {
        assert_eq!(to_arabic("mmxxiv"), Ok(2024));
        assert_eq!(to_arabic("  XLII "), Ok(42));
        assert_eq!(to_arabic("IIII"), Ok(4));
        assert_eq!(to_arabic("IC"), Ok(99));
        assert_eq!(to_arabic(""), Ok(0));
    }

    #[test]
    fn to_arabic_rejects_foreign_symbols() {
        assert_eq!(
            to_arabic("XIZ"),
            Err(ConversionError::UnknownSymbol { symbol: 'Z' })
        );
    }

    #[test]
    fn to_arabic_overflow() {
        let huge = "M".repeat(5_000_000);
        assert_eq!(to_arabic(&huge), Err(ConversionError::Overflow));
    }

    #[test]
    fn numeral_parses_and_displays_canonically() {
        let n: Numeral = "mcmlxxxiv".parse().expect("should parse");
        assert_eq!(n.value(), 1984);
        assert_eq!(n.to_string(), "MCMLXXXIV");
        assert_eq!(n.as_str(), "MCMLXXXIV");

        let m = Numeral::try_from(1984).expect("in range");
        assert_eq!(n, m);
    }

    #[test]
    fn numeral_parse_reports_status() {
        match "VX".parse::<Numeral>() {
            Err(ConversionError::Invalid { status, detail }) => {
                assert_eq!(status, ValidationStatus::InvalidSubtraction);
                assert!(detail.contains("VX"));
            }
            other => panic!("expected invalid numeral, got {other:?}"),
        }

        assert_eq!(
            Numeral::try_from(0),
            Err(ConversionError::OutOfRange { value: 0 })
        );
    }
}
