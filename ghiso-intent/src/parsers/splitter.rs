//! Multi-transaction splitting: "sáng ăn phở 30k chiều ăn bún 25k" is two expenses.
//!
//! Three shapes are tried in order. The first shape that matches more than
//! once across the message decides the outcome, even if filtering later
//! leaves fewer than two usable fragments.

use std::sync::LazyLock;

use ghiso_core::{ExpenseFragment, PaymentSource};
use regex::{Captures, Regex};

use super::amount::{contains_k, has_adjacent_suffix, parse_number, scale};
use super::payment_source::extract_payment_source;
use crate::types::AmountMode;

/// `<time of day> <text> <amount>`
static RE_TIME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:sáng|chiều|tối|trưa|đêm)\s+([^0-9]+?)([0-9]+(?:\.[0-9]+)?)\s*([kK])?").unwrap()
});

/// `<text> <amount> <time of day>`
static RE_TIME_LAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^0-9]+?)([0-9]+(?:\.[0-9]+)?)\s*([kK])?\s*(?:sáng|chiều|tối|trưa|đêm)").unwrap()
});

/// `<text> <amount>`, no anchor
static RE_PLAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^0-9]+?)([0-9]+(?:\.[0-9]+)?)\s*([kK])?").unwrap()
});

/// Fragments whose text mentions a date are date clauses, not purchases.
const DATE_WORD: &str = "ngày";

/// One way of cutting a message into fragments.
struct SplitShape {
    name: &'static str,
    re: &'static LazyLock<Regex>,
}

fn shapes() -> [SplitShape; 3] {
    [
        SplitShape { name: "time_first", re: &RE_TIME_FIRST },
        SplitShape { name: "time_last", re: &RE_TIME_LAST },
        SplitShape { name: "plain", re: &RE_PLAIN },
    ]
}

impl SplitShape {
    /// `None` when the shape matches at most once; otherwise the filtered fragments.
    fn try_split(
        &self,
        text: &str,
        mode: AmountMode,
        source: PaymentSource,
    ) -> Option<Vec<ExpenseFragment>> {
        let matches: Vec<Captures<'_>> = self.re.captures_iter(text).collect();
        if matches.len() <= 1 {
            return None;
        }

        let fragments = matches
            .iter()
            .filter_map(|caps| fragment_from(text, caps, mode, source))
            .collect();
        Some(fragments)
    }
}

fn fragment_from(
    text: &str,
    caps: &Captures<'_>,
    mode: AmountMode,
    source: PaymentSource,
) -> Option<ExpenseFragment> {
    let description = caps[1].trim();
    let thousands = match mode {
        AmountMode::Legacy => contains_k(&caps[0]),
        AmountMode::Strict => has_adjacent_suffix(text, caps.get(3)),
    };
    let amount = scale(parse_number(&caps[2]), thousands);

    if amount <= 0.0 || description.is_empty() || description.contains(DATE_WORD) {
        return None;
    }

    Some(ExpenseFragment {
        amount,
        description: description.to_string(),
        payment_source: source,
    })
}

/// Split a message into several expenses, reading amounts the legacy way.
/// Empty unless at least two fragments survive.
pub fn split_multiple(text: &str) -> Vec<ExpenseFragment> {
    split_multiple_with(text, AmountMode::Legacy)
}

/// Split a message into several expenses. Empty unless at least two fragments survive.
/// Every fragment shares the payment source read from the whole message.
pub fn split_multiple_with(text: &str, mode: AmountMode) -> Vec<ExpenseFragment> {
    let text = text.to_lowercase();
    let source = extract_payment_source(&text);

    for shape in shapes() {
        if let Some(fragments) = shape.try_split(&text, mode, source) {
            tracing::debug!(
                shape = shape.name,
                fragments = fragments.len(),
                "multi-transaction shape matched"
            );
            if fragments.len() >= 2 {
                return fragments;
            }
            return Vec::new();
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_first() {
        let items = split_multiple("sáng ăn phở 30k chiều ăn bún 25k");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "ăn phở");
        assert_eq!(items[0].amount, 30000.0);
        assert_eq!(items[1].description, "ăn bún");
        assert_eq!(items[1].amount, 25000.0);
        assert!(items.iter().all(|f| f.payment_source == PaymentSource::Cash));
    }

    #[test]
    fn test_time_of_day_last() {
        let items = split_multiple("ăn phở 30k sáng uống cafe 20k trưa");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "ăn phở");
        assert_eq!(items[1].description, "uống cafe");
        assert_eq!(items[1].amount, 20000.0);
    }

    #[test]
    fn test_plain_fallback() {
        let items = split_multiple("ăn bánh 10k uống trà 20k mua rau 15k");
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].description, "mua rau");
        assert_eq!(items[2].amount, 15000.0);
    }

    #[test]
    fn test_single_amount_is_not_multi() {
        assert!(split_multiple("ăn bánh 10k").is_empty());
        assert!(split_multiple("sáng ăn phở 30k").is_empty());
        assert!(split_multiple("").is_empty());
        assert!(split_multiple("kiểm tra số dư").is_empty());
    }

    #[test]
    fn test_date_clause_is_dropped() {
        // "ngày 2.6" yields a fragment containing the date word, leaving one
        assert!(split_multiple("ăn bánh 10k ngày 2.6").is_empty());
    }

    #[test]
    fn test_shared_payment_source() {
        let items = split_multiple("sáng ăn phở 30k chiều ăn bún 25k chuyển khoản");
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|f| f.payment_source == PaymentSource::Bank));
    }

    #[test]
    fn test_two_time_anchors_give_two_fragments() {
        let times = ["sáng", "chiều", "tối", "trưa", "đêm"];
        let words = ["phở", "bún", "xôi", "cơm"];
        for (i, a) in times.iter().enumerate() {
            for b in times.iter().skip(i + 1) {
                for w in words {
                    let msg = format!("{a} {w} 12k {b} {w} 34k");
                    let items = split_multiple(&msg);
                    assert_eq!(items.len(), 2, "{msg}");
                    assert_eq!(items[0].amount, 12000.0);
                    assert_eq!(items[1].amount, 34000.0);
                }
            }
        }
    }

    #[test]
    fn test_strict_mode_scopes_suffix() {
        let legacy = split_multiple("ăn kem 5 uống trà 20");
        assert_eq!(legacy.len(), 2);
        assert_eq!(legacy[0].amount, 5000.0);
        assert_eq!(legacy[1].amount, 20.0);

        let strict = split_multiple_with("ăn kem 5 uống trà 20", AmountMode::Strict);
        assert_eq!(strict.len(), 2);
        assert_eq!(strict[0].amount, 5.0);
        assert_eq!(strict[1].amount, 20.0);
    }

    #[test]
    fn test_strict_mode_reads_adjacent_k() {
        let amounts = |text: &str| -> Vec<f64> {
            split_multiple_with(text, AmountMode::Strict)
                .iter()
                .map(|f| f.amount)
                .collect()
        };
        assert_eq!(amounts("sáng ăn phở 30k chiều ăn bún 25k"), vec![30000.0, 25000.0]);
        assert_eq!(amounts("ăn phở 30k sáng uống cafe 20k trưa"), vec![30000.0, 20000.0]);
        assert_eq!(amounts("ăn bánh 10k uống trà 20 mua rau 15k"), vec![10000.0, 20.0, 15000.0]);
        // "k" opening the next word is not a suffix
        assert_eq!(amounts("bánh 5 kem 7k"), vec![5.0, 7000.0]);
    }
}
