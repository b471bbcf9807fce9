//! Intent classification for household ledger chat messages.
//!
//! Rules are checked in a fixed order and the first one that fires wins:
//! multi-transaction split, expense, income, balance, summary, greeting,
//! pushback, otherwise unclassified. Every keyword match is a plain
//! lowercase substring test on the NFC-normalized message.

use chrono::{DateTime, TimeZone};
use ghiso_core::ParsedIntent;
use unicode_normalization::UnicodeNormalization;

use crate::parsers::{
    extract_amount_with, extract_date, extract_description, extract_payment_source,
    has_amount_pattern, split_multiple_with,
};
use crate::types::{AmountMode, ParserOptions};

const EXPENSE_KEYWORDS: &[&str] = &[
    "thêm chi",
    "chi tiêu",
    "mua",
    "tiêu",
    "ăn",
    "uống",
    "cafe",
    "trà sữa",
    "shopping",
    "grab",
    "gojek",
];

/// Command words removed from an expense description
const EXPENSE_COMMAND_WORDS: &[&str] = &["thêm", "chi", "tiêu", "mua"];

const INCOME_KEYWORDS: &[&str] = &["thêm thu", "thu nhập", "lương", "thưởng"];

const INCOME_COMMAND_WORDS: &[&str] = &["thêm", "thu", "nhập", "lương", "thưởng"];

const BALANCE_KEYWORDS: &[&str] = &["kiểm tra", "số dư", "còn bao nhiêu", "tình hình"];

const SUMMARY_KEYWORDS: &[&str] = &["tóm tắt", "báo cáo", "thống kê"];

const GREETING_KEYWORDS: &[&str] = &["chào", "hello", "hi", "xin chào"];

/// "why", "not right", "object", "not so", "joking"
const DISAGREEMENT_KEYWORDS: &[&str] = &[
    "sao",
    "tại sao",
    "không đúng",
    "phản đối",
    "không phải",
    "đùa",
];

/// Ways the user addresses the bot
const BOT_REFERENCES: &[&str] = &["anh", "bot"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// NFC, trimmed, lowercase. Keyword tables are written in the same form.
pub fn normalize_message(message: &str) -> String {
    message.nfc().collect::<String>().trim().to_lowercase()
}

/// Classifies chat messages. Stateless apart from its options, so one
/// instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentParser {
    options: ParserOptions,
}

impl IntentParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn amount_mode(&self) -> AmountMode {
        self.options.amount_mode
    }

    /// Classify `message`, resolving relative dates against `now`'s calendar date.
    /// Never fails: unreadable input comes back as [`ParsedIntent::Unclassified`].
    pub fn classify<Tz: TimeZone>(&self, message: &str, now: &DateTime<Tz>) -> ParsedIntent {
        let text = normalize_message(message);
        let intent = self.classify_normalized(&text, now.date_naive());
        tracing::debug!(intent = intent.kind(), "classified message");
        intent
    }

    fn classify_normalized(&self, text: &str, today: chrono::NaiveDate) -> ParsedIntent {
        let mode = self.options.amount_mode;
        let date = extract_date(text, today);

        let items = split_multiple_with(text, mode);
        if items.len() >= 2 {
            return ParsedIntent::MultiExpense { items, date };
        }

        if contains_any(text, EXPENSE_KEYWORDS) || has_amount_pattern(text) {
            return ParsedIntent::SingleExpense {
                amount: extract_amount_with(text, mode),
                description: extract_description(text, EXPENSE_COMMAND_WORDS),
                date,
                payment_source: extract_payment_source(text),
            };
        }

        if contains_any(text, INCOME_KEYWORDS) {
            return ParsedIntent::SingleIncome {
                amount: extract_amount_with(text, mode),
                description: extract_description(text, INCOME_COMMAND_WORDS),
                date,
            };
        }

        if contains_any(text, BALANCE_KEYWORDS) {
            return ParsedIntent::BalanceInquiry;
        }

        if contains_any(text, SUMMARY_KEYWORDS) {
            return ParsedIntent::SummaryRequest;
        }

        if contains_any(text, GREETING_KEYWORDS) {
            return ParsedIntent::Greeting;
        }

        if is_pushback(text) {
            return ParsedIntent::Pushback;
        }

        ParsedIntent::Unclassified
    }
}

/// A disagreement word on its own, or a question aimed at the bot.
fn is_pushback(text: &str) -> bool {
    contains_any(text, DISAGREEMENT_KEYWORDS)
        || (text.contains('?') && contains_any(text, BOT_REFERENCES))
}

/// Classify with the default (legacy amount) options.
pub fn classify<Tz: TimeZone>(message: &str, now: &DateTime<Tz>) -> ParsedIntent {
    IntentParser::default().classify(message, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use ghiso_core::{ExpenseFragment, PaymentSource};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 21, 9, 0, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_expense() {
        assert_eq!(
            classify("ăn bánh 10k", &now()),
            ParsedIntent::SingleExpense {
                amount: 10000.0,
                description: "ăn bánh".to_string(),
                date: ymd(2024, 6, 21),
                payment_source: PaymentSource::Cash,
            }
        );
    }

    #[test]
    fn test_bank_expense_keeps_keyword_in_description() {
        assert_eq!(
            classify("trà sữa bank 25k", &now()),
            ParsedIntent::SingleExpense {
                amount: 25000.0,
                description: "trà sữa bank".to_string(),
                date: ymd(2024, 6, 21),
                payment_source: PaymentSource::Bank,
            }
        );
    }

    #[test]
    fn test_multi_expense() {
        assert_eq!(
            classify("sáng ăn phở 30k chiều ăn bún 25k", &now()),
            ParsedIntent::MultiExpense {
                items: vec![
                    ExpenseFragment {
                        amount: 30000.0,
                        description: "ăn phở".to_string(),
                        payment_source: PaymentSource::Cash,
                    },
                    ExpenseFragment {
                        amount: 25000.0,
                        description: "ăn bún".to_string(),
                        payment_source: PaymentSource::Cash,
                    },
                ],
                date: ymd(2024, 6, 21),
            }
        );
    }

    #[test]
    fn test_balance_inquiry() {
        assert_eq!(classify("kiểm tra số dư", &now()), ParsedIntent::BalanceInquiry);
        assert_eq!(classify("tháng này còn bao nhiêu", &now()), ParsedIntent::BalanceInquiry);
    }

    #[test]
    fn test_dated_expense() {
        match classify("ăn bánh ngày 2.6", &now()) {
            ParsedIntent::SingleExpense { date, description, .. } => {
                assert_eq!(date, ymd(2024, 6, 2));
                assert_eq!(description, "ăn bánh ngày");
            }
            other => panic!("expected single expense, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_is_unclassified() {
        assert_eq!(classify("", &now()), ParsedIntent::Unclassified);
        assert_eq!(classify("   ", &now()), ParsedIntent::Unclassified);
        assert_eq!(classify("🧋🍜🎉", &now()), ParsedIntent::Unclassified);
    }

    #[test]
    fn test_very_long_input_terminates() {
        let long = "ăn phở 30k ".repeat(2000);
        assert_eq!(classify(&long, &now()).kind(), "multi_expense");
        let noise = "xyz ".repeat(5000);
        assert_eq!(classify(&noise, &now()), ParsedIntent::Unclassified);
    }

    #[test]
    fn test_missing_amount_expense() {
        let intent = classify("mua áo", &now());
        assert!(intent.is_missing_amount());
        assert_eq!(intent.kind(), "single_expense");
    }

    #[test]
    fn test_income() {
        assert_eq!(
            classify("thu nhập bán hàng", &now()),
            ParsedIntent::SingleIncome {
                amount: 0.0,
                description: "bán hàng".to_string(),
                date: ymd(2024, 6, 21),
            }
        );
        assert_eq!(classify("nhận lương", &now()).kind(), "single_income");
    }

    #[test]
    fn test_income_with_amount_goes_expense_first() {
        // a bare number is a stronger signal than the income keywords
        assert_eq!(classify("lương 5000k", &now()).kind(), "single_expense");
    }

    #[test]
    fn test_summary_and_greeting() {
        assert_eq!(classify("báo cáo tháng này", &now()), ParsedIntent::SummaryRequest);
        assert_eq!(classify("Thống kê", &now()), ParsedIntent::SummaryRequest);
        assert_eq!(classify("xin chào", &now()), ParsedIntent::Greeting);
        assert_eq!(classify("Hello bot", &now()), ParsedIntent::Greeting);
    }

    #[test]
    fn test_pushback() {
        assert_eq!(classify("tại sao lại thế", &now()), ParsedIntent::Pushback);
        assert_eq!(classify("anh đùa à?", &now()), ParsedIntent::Pushback);
        assert_eq!(classify("bot nói gì vậy?", &now()), ParsedIntent::Pushback);
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(classify("trời đẹp quá", &now()), ParsedIntent::Unclassified);
    }

    #[test]
    fn test_relative_date_flows_into_expense() {
        match classify("hôm qua uống cafe 30k", &now()) {
            ParsedIntent::SingleExpense { date, amount, .. } => {
                assert_eq!(date, ymd(2024, 6, 20));
                assert_eq!(amount, 30000.0);
            }
            other => panic!("expected single expense, got {other:?}"),
        }
    }

    #[test]
    fn test_no_date_phrase_uses_now() {
        for msg in ["ăn phở 30k", "mua áo 200k", "cafe 25k", "grab 40k"] {
            match classify(msg, &now()) {
                ParsedIntent::SingleExpense { date, .. } => assert_eq!(date, ymd(2024, 6, 21)),
                other => panic!("expected single expense for {msg}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_one_amount_never_multi() {
        for msg in [
            "ăn bánh 10k",
            "sáng ăn phở 30k",
            "trà sữa bank 25k",
            "mua giày 500k chuyển khoản",
            "hôm qua đi grab 40k",
        ] {
            assert_ne!(classify(msg, &now()).kind(), "multi_expense", "{msg}");
        }
    }

    #[test]
    fn test_decomposed_input_is_normalized() {
        let decomposed: String = "ăn bánh 10k".nfd().collect();
        assert_eq!(classify(&decomposed, &now()), classify("ăn bánh 10k", &now()));
    }

    #[test]
    fn test_uses_local_date_of_now() {
        let tz = ghiso_core::parse_timezone("Asia/Ho_Chi_Minh").unwrap();
        // 20 June 18:30 UTC is already 21 June in Saigon
        let late = tz.from_utc_datetime(&ymd(2024, 6, 20).and_hms_opt(18, 30, 0).unwrap());
        match classify("ăn bánh 10k", &late) {
            ParsedIntent::SingleExpense { date, .. } => assert_eq!(date, ymd(2024, 6, 21)),
            other => panic!("expected single expense, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_parser() {
        let strict = IntentParser::new(ParserOptions { amount_mode: AmountMode::Strict });
        assert_eq!(strict.amount_mode(), AmountMode::Strict);
        match strict.classify("đi ăn kem 5", &now()) {
            ParsedIntent::SingleExpense { amount, .. } => assert_eq!(amount, 5.0),
            other => panic!("expected single expense, got {other:?}"),
        }
        match classify("đi ăn kem 5", &now()) {
            ParsedIntent::SingleExpense { amount, .. } => assert_eq!(amount, 5000.0),
            other => panic!("expected single expense, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_parser_multi_expense() {
        let strict = IntentParser::new(ParserOptions { amount_mode: AmountMode::Strict });
        match strict.classify("sáng ăn phở 30k chiều ăn bún 25k", &now()) {
            ParsedIntent::MultiExpense { items, .. } => {
                let amounts: Vec<f64> = items.iter().map(|i| i.amount).collect();
                assert_eq!(amounts, vec![30000.0, 25000.0]);
            }
            other => panic!("expected multi expense, got {other:?}"),
        }
    }
}
