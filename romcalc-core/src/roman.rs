use crate::numeral::RomanDigit;

/// Denominations used when rendering an integer, largest first. The greedy
/// conversion in `int_to_roman` depends on this ordering.
const SUBTRACTIVE_PAIRS: [(i64, &'static str); 13] = [
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

/// Converts a string of Roman symbols to an integer using the subtractive
/// rule: a symbol worth less than its successor is subtracted, otherwise
/// it's added.
///
/// No attempt is made to reject malformed combinations like `IIX`; they
/// just get whatever value the rule gives them. Returns `None` only if the
/// string contains something that isn't a Roman symbol.
pub fn roman_to_int<T: AsRef<str>>(value: T) -> Option<i64> {
    let digits = value
        .as_ref()
        .chars()
        .map(RomanDigit::from_char)
        .collect::<Option<Vec<_>>>()?;

    let mut total = 0;
    for (i, digit) in digits.iter().enumerate() {
        match digits.get(i + 1) {
            Some(next) if digit.value() < next.value() => total -= digit.value(),
            _ => total += digit.value(),
        }
    }
    Some(total)
}

/// Renders the given number as a Roman numeral.
///
/// Zero and negative numbers render as an empty string, so callers that
/// care need to range-check first.
pub fn int_to_roman(mut number: i64) -> String {
    let mut result = String::new();
    for (value, symbol) in SUBTRACTIVE_PAIRS {
        while number >= value {
            result.push_str(symbol);
            number -= value;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::roman::{int_to_roman, roman_to_int, SUBTRACTIVE_PAIRS};

    const CANONICAL: [&'static str; 10] =
        ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

    #[test]
    fn it_converts_canonical_numerals_both_ways() {
        for (i, roman) in CANONICAL.iter().enumerate() {
            let number = i as i64 + 1;
            assert_eq!(roman_to_int(roman), Some(number));
            assert_eq!(int_to_roman(number), *roman);
        }
    }

    #[test]
    fn it_renders_results_beyond_ten() {
        assert_eq!(int_to_roman(12), "XII");
        assert_eq!(int_to_roman(40), "XL");
        assert_eq!(int_to_roman(49), "XLIX");
        assert_eq!(int_to_roman(100), "C");
        assert_eq!(int_to_roman(1994), "MCMXCIV");
    }

    #[test]
    fn it_renders_non_positive_numbers_as_empty() {
        assert_eq!(int_to_roman(0), "");
        assert_eq!(int_to_roman(-3), "");
    }

    #[test]
    fn it_applies_subtractive_rule_to_malformed_numerals() {
        assert_eq!(roman_to_int("IIX"), Some(10));
        assert_eq!(roman_to_int("IIII"), Some(4));
        assert_eq!(roman_to_int("VX"), Some(5));
        assert_eq!(roman_to_int("MCMXCIV"), Some(1994));
        assert_eq!(roman_to_int(""), Some(0));
    }

    #[test]
    fn it_returns_none_for_non_roman_symbols() {
        assert_eq!(roman_to_int("X1"), None);
        assert_eq!(roman_to_int("iv"), None);
    }

    #[test]
    fn subtractive_pairs_are_descending() {
        for pair in SUBTRACTIVE_PAIRS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }
}
