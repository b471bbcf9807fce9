//! Amount extraction: "25k", "2.5K", "30000", "50k đồng".

use std::sync::LazyLock;

use ghiso_core::Money;
use regex::{Match, Regex};

use crate::types::AmountMode;

/// Number with optional decimal part and optional thousands suffix.
/// Capture 1 is the number, capture 2 the suffix letter.
pub(crate) static RE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*([kK])?").unwrap());

/// Loose check used by the classifier: a number, maybe a suffix, maybe a currency word.
static RE_AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+(?:\.[0-9]+)?\s*[k]?(?:\s*(?:đồng|vnd|vnđ))?").unwrap()
});

const THOUSAND: f64 = 1000.0;

/// True when the text contains anything that looks like an amount.
pub fn has_amount_pattern(text: &str) -> bool {
    RE_AMOUNT_PATTERN.is_match(text)
}

/// First amount in `text`, read the legacy way. Returns 0 when there is none.
pub fn extract_amount(text: &str) -> Money {
    extract_amount_with(text, AmountMode::Legacy)
}

/// First amount in `text`. Returns 0 when there is none.
pub fn extract_amount_with(text: &str, mode: AmountMode) -> Money {
    let Some(caps) = RE_AMOUNT.captures(text) else {
        return 0.0;
    };

    let value = parse_number(&caps[1]);
    let thousands = match mode {
        AmountMode::Legacy => contains_k(text),
        AmountMode::Strict => has_adjacent_suffix(text, caps.get(2)),
    };

    scale(value, thousands)
}

pub(crate) fn parse_number(raw: &str) -> Money {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

pub(crate) fn scale(value: Money, thousands: bool) -> Money {
    let amount = if thousands { value * THOUSAND } else { value };
    if amount.is_finite() { amount } else { 0.0 }
}

pub(crate) fn contains_k(text: &str) -> bool {
    text.contains(['k', 'K'])
}

/// The suffix matched and the letter after it does not start another word.
pub(crate) fn has_adjacent_suffix(haystack: &str, suffix: Option<Match<'_>>) -> bool {
    let Some(suffix) = suffix else {
        return false;
    };
    !haystack[suffix.end()..]
        .chars()
        .next()
        .is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_suffix_multiplies() {
        assert_eq!(extract_amount("ăn bánh 10k"), 10000.0);
        assert_eq!(extract_amount("trà sữa 25K"), 25000.0);
        assert_eq!(extract_amount("2.5k"), 2500.0);
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(extract_amount("ăn phở 30000"), 30000.0);
        assert_eq!(extract_amount("ngày 2.6"), 2.6);
    }

    #[test]
    fn test_no_number_is_zero() {
        assert_eq!(extract_amount("ăn bánh"), 0.0);
        assert_eq!(extract_amount(""), 0.0);
        assert_eq!(extract_amount("🧋🧋🧋"), 0.0);
    }

    #[test]
    fn test_round_trip_generated_amounts() {
        for n in (1..2000u32).step_by(7) {
            assert_eq!(extract_amount(&format!("{n}k")), n as f64 * 1000.0);
            assert_eq!(extract_amount(&format!("{n}")), n as f64);
            assert_eq!(extract_amount_with(&format!("{n}k"), AmountMode::Strict), n as f64 * 1000.0);
            assert_eq!(extract_amount_with(&format!("{n}"), AmountMode::Strict), n as f64);
        }
    }

    #[test]
    fn test_legacy_scans_whole_text_for_k() {
        // "kem" carries the k, the number has no suffix
        assert_eq!(extract_amount("đi ăn kem 5"), 5000.0);
        assert_eq!(extract_amount_with("đi ăn kem 5", AmountMode::Legacy), 5000.0);
    }

    #[test]
    fn test_strict_needs_adjacent_suffix() {
        assert_eq!(extract_amount_with("đi ăn kem 5", AmountMode::Strict), 5.0);
        assert_eq!(extract_amount_with("5 kem", AmountMode::Strict), 5.0);
        assert_eq!(extract_amount_with("kem 5 k", AmountMode::Strict), 5000.0);
        assert_eq!(extract_amount_with("kem 5k, ngon", AmountMode::Strict), 5000.0);
    }

    #[test]
    fn test_first_number_wins() {
        assert_eq!(extract_amount("10k rồi 20k"), 10000.0);
    }

    #[test]
    fn test_huge_number_does_not_blow_up() {
        let digits = "9".repeat(400);
        assert_eq!(extract_amount(&digits), 0.0);
    }

    #[test]
    fn test_amount_pattern() {
        assert!(has_amount_pattern("50k đồng"));
        assert!(has_amount_pattern("30000 vnd"));
        assert!(has_amount_pattern("3"));
        assert!(!has_amount_pattern("kiểm tra số dư"));
    }
}
