use pretty_assertions::assert_eq;
use roman_numerals::{
    scan, to_arabic, to_roman, validate, ConversionError, Numeral, ScanMode, Span,
    ValidationStatus, MAX_VALUE, MIN_VALUE,
};

#[test]
fn round_trip_over_the_whole_range() {
    for n in MIN_VALUE..=MAX_VALUE {
        let numeral = to_roman(n).expect("in range");
        assert_eq!(to_arabic(&numeral), Ok(n as u32), "{numeral}");
    }
}

#[test]
fn valid_results_reserialise_to_their_input() {
    for n in MIN_VALUE..=MAX_VALUE {
        let numeral = to_roman(n).expect("in range");
        let result = validate(&numeral.to_lowercase());
        let value = result.value().expect("canonical numerals validate");
        assert_eq!(to_roman(i64::from(value)).as_deref(), Ok(result.numeral()));
    }
}

#[test]
fn foreign_characters_are_format_errors() {
    for s in ["A", "XIIZ", "12", "X-I", "X I", "ⅫI", "Ⅻ", "MCMLXXXIV!"] {
        assert_eq!(validate(s).status(), ValidationStatus::InvalidFormat, "{s}");
    }
}

#[test]
fn empty_inputs() {
    for s in ["", " ", "\t\n", "   "] {
        let result = validate(s);
        assert_eq!(result.status(), ValidationStatus::Empty);
        assert_eq!(result.value(), None);
        assert!(result.detail().is_some());
    }
}

#[test]
fn one_over_the_repetition_limit() {
    for s in ["IIII", "VV", "XXXX", "LL", "CCCC", "DD"] {
        let first = validate(s).status();
        assert!(
            matches!(
                first,
                ValidationStatus::InvalidRepetition | ValidationStatus::InvalidSubtraction
            ),
            "{s}: {first}"
        );
        assert_eq!(validate(s).status(), first);
    }
}

#[test]
fn illegal_subtractive_pairs() {
    for s in ["IC", "VX", "XM"] {
        assert_eq!(
            validate(s).status(),
            ValidationStatus::InvalidSubtraction,
            "{s}"
        );
    }
}

#[test]
fn concrete_scenarios() {
    let r = validate("XLII");
    assert_eq!((r.status(), r.value()), (ValidationStatus::Valid, Some(42)));

    let r = validate("MCMLXXXIV");
    assert_eq!((r.status(), r.value()), (ValidationStatus::Valid, Some(1984)));

    assert!(!validate("IIII").is_valid());

    assert_eq!(to_roman(2024).as_deref(), Ok("MMXXIV"));
    assert_eq!(to_arabic("MMXXIV"), Ok(2024));

    assert_eq!(
        to_roman(4000),
        Err(ConversionError::OutOfRange { value: 4000 })
    );
}

#[test]
fn scan_chapter_and_section() {
    let found = scan("Chapter IV, section IX", ScanMode::Strict);
    let summary: Vec<(&str, Option<u32>, Option<Span>)> = found
        .iter()
        .map(|r| (r.numeral(), r.value(), r.span()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("IV", Some(4), Some(Span::new(8, 10))),
            ("IX", Some(9), Some(Span::new(20, 22))),
        ]
    );
}

#[test]
fn numeral_type_round_trip() {
    let parsed: Numeral = "MMXXIV".parse().expect("valid");
    let built = Numeral::try_from(2024).expect("in range");
    assert_eq!(parsed, built);
    assert_eq!(built.to_string(), "MMXXIV");
}

#[test]
fn safe_to_share_between_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                (1..=100)
                    .map(|n| validate(&to_roman(n * 10 + t).expect("in range")).value())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let values = handle.join().expect("thread finished");
        let expected: Vec<Option<u32>> = (1..=100).map(|n| Some(n * 10 + t as u32)).collect();
        assert_eq!(values, expected);
    }
}
