//! Reference numerals, used by the `samples` command and in tests.

/// Well-formed numerals.
pub const CORRECT: &[&str] = &[
    "I", "IV", "V", "IX", "X", "XL", "L", "XC", "C", "CD", "D", "CM", "M", "III", "VIII", "XIV",
    "XIX", "XXIV", "XLII", "XCVI", "CCLVI", "MMXXIV",
];

/// Malformed numerals and why each one is wrong.
pub const INCORRECT: &[(&str, &str)] = &[
    ("IIII", "too many I (4 is IV)"),
    ("VV", "V cannot repeat"),
    ("XXXX", "too many X (40 is XL)"),
    ("IC", "I cannot be subtracted from C (99 is XCIX)"),
    ("VX", "V is never subtracted (5 is V)"),
    ("IIV", "doubled subtrahend (3 is III)"),
    ("XM", "X cannot be subtracted from M (990 is CMXC)"),
    ("", "empty input"),
    ("ABC", "not numeral symbols"),
    ("IXIX", "subtracted I repeats after IX"),
    ("VIX", "values increase left to right"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{to_roman, validate};

    #[test]
    fn correct_samples_are_valid_and_canonical() {
        for numeral in CORRECT {
            let result = validate(numeral);
            assert!(result.is_valid(), "{numeral}: {result}");

            let value = result.value().expect("valid");
            assert_eq!(
                to_roman(i64::from(value)).as_deref(),
                Ok(*numeral),
                "{numeral}"
            );
        }
    }

    #[test]
    fn incorrect_samples_are_rejected() {
        for (numeral, reason) in INCORRECT {
            let result = validate(numeral);
            assert!(!result.is_valid(), "{numeral} ({reason}) was accepted");
        }
    }
}
