//! The seven classical symbols and the static rule tables built on them.

use core::fmt;
use once_cell::sync::Lazy;

/// A single numeral symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

/// All symbols in ascending value order.
pub const ALL_SYMBOLS: [Symbol; 7] = [
    Symbol::I,
    Symbol::V,
    Symbol::X,
    Symbol::L,
    Symbol::C,
    Symbol::D,
    Symbol::M,
];

/// The alphabet as a character class body, usable inside a regex `[...]`.
pub const ALPHABET: &str = "MDCLXVI";

impl Symbol {
    /// Parses a symbol, ignoring ASCII case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    pub const fn value(self) -> u32 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// Maximum number of consecutive occurrences.
    pub const fn max_repetitions(self) -> usize {
        match self {
            Symbol::I | Symbol::X | Symbol::C | Symbol::M => 3,
            Symbol::V | Symbol::L | Symbol::D => 1,
        }
    }

    /// Symbols this one may directly precede to form a subtractive pair.
    pub const fn subtracts_from(self) -> &'static [Symbol] {
        match self {
            Symbol::I => &[Symbol::V, Symbol::X],
            Symbol::X => &[Symbol::L, Symbol::C],
            Symbol::C => &[Symbol::D, Symbol::M],
            Symbol::V | Symbol::L | Symbol::D | Symbol::M => &[],
        }
    }

    pub fn can_subtract_from(self, larger: Symbol) -> bool {
        self.subtracts_from().contains(&larger)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_char().encode_utf8(&mut [0; 4]))
    }
}

/// Substrings that are never legal, whatever the surrounding symbols.
///
/// Built from the tables above so the fast path can never disagree with the
/// pairwise scan. Order is fixed: over-repetition runs, then illegal
/// ascending pairs, then doubled subtrahends (`IIV`, `XXC`, ...).
pub static FORBIDDEN_COMBINATIONS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut out = Vec::new();

    for s in ALL_SYMBOLS {
        out.push(s.as_char().to_string().repeat(s.max_repetitions() + 1));
    }

    for small in ALL_SYMBOLS {
        for large in ALL_SYMBOLS {
            if small.value() < large.value() && !small.can_subtract_from(large) {
                out.push(format!("{small}{large}"));
            }
        }
    }

    for small in ALL_SYMBOLS {
        if small.max_repetitions() < 2 {
            continue;
        }

        for &large in small.subtracts_from() {
            out.push(format!("{small}{small}{large}"));
        }
    }

    out
});

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_both_cases() {
        assert_eq!(Symbol::from_char('m'), Some(Symbol::M));
        assert_eq!(Symbol::from_char('X'), Some(Symbol::X));
        assert_eq!(Symbol::from_char('A'), None);
        assert_eq!(Symbol::from_char('ⅰ'), None);
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(Symbol::X.to_string(), "X");
        assert_eq!(format!("[{:<3}]", Symbol::L), "[L  ]");
        assert_eq!(format!("[{:^3}]", Symbol::M), "[ M ]");
    }

    #[test]
    fn values_ascend_with_declaration_order() {
        let values: Vec<u32> = ALL_SYMBOLS.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![1, 5, 10, 50, 100, 500, 1000]);
        assert!(ALL_SYMBOLS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn alphabet_matches_symbols() {
        for c in ALPHABET.chars() {
            assert!(Symbol::from_char(c).is_some());
        }
        assert_eq!(ALPHABET.len(), ALL_SYMBOLS.len());
    }

    #[test]
    fn subtraction_table() {
        assert!(Symbol::I.can_subtract_from(Symbol::V));
        assert!(Symbol::I.can_subtract_from(Symbol::X));
        assert!(!Symbol::I.can_subtract_from(Symbol::L));
        assert!(Symbol::C.can_subtract_from(Symbol::M));
        assert!(Symbol::V.subtracts_from().is_empty());
        assert!(Symbol::M.subtracts_from().is_empty());
    }

    #[test]
    fn forbidden_set_contents() {
        let expected = [
            "IIII", "VV", "XXXX", "LL", "CCCC", "DD", "MMMM", // runs
            "IL", "IC", "ID", "IM", "VX", "VL", "VC", "VD", "VM", "XD", "XM", "LC", "LD", "LM",
            "DM", // pairs
            "IIV", "IIX", "XXL", "XXC", "CCD", "CCM", // composites
        ];

        let actual: Vec<&str> = FORBIDDEN_COMBINATIONS.iter().map(String::as_str).collect();
        assert_eq!(actual, expected);
    }
}
