use std::fmt::Display;

/// The canonical encodings of 1 through 10. A token only counts as a
/// Roman operand if it appears here verbatim.
const VALID_ROMANS: [&'static str; 10] =
    ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RomanDigit {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl RomanDigit {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'I' => Some(RomanDigit::I),
            'V' => Some(RomanDigit::V),
            'X' => Some(RomanDigit::X),
            'L' => Some(RomanDigit::L),
            'C' => Some(RomanDigit::C),
            'D' => Some(RomanDigit::D),
            'M' => Some(RomanDigit::M),
            _ => None,
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            RomanDigit::I => 1,
            RomanDigit::V => 5,
            RomanDigit::X => 10,
            RomanDigit::L => 50,
            RomanDigit::C => 100,
            RomanDigit::D => 500,
            RomanDigit::M => 1000,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NumeralSystem {
    Roman,
    Arabic,
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumeralSystem::Roman => write!(f, "roman"),
            NumeralSystem::Arabic => write!(f, "arabic"),
        }
    }
}

/// Returns whether the given token is one of the canonical Roman numerals
/// for 1 through 10.
///
/// Strings made entirely of Roman symbols that aren't canonical forms in
/// that range (e.g. `IIII` or `XI`) are *not* Roman as far as this is
/// concerned, so callers end up treating them as Arabic candidates.
pub fn is_roman_numeral<T: AsRef<str>>(token: T) -> bool {
    let token = token.as_ref();
    if !token.chars().all(|ch| RomanDigit::from_char(ch).is_some()) {
        return false;
    }
    VALID_ROMANS.contains(&token)
}

pub fn classify<T: AsRef<str>>(token: T) -> NumeralSystem {
    if is_roman_numeral(token) {
        NumeralSystem::Roman
    } else {
        NumeralSystem::Arabic
    }
}
