//! Payment source extraction: bank-linked instruments vs cash on hand.

use ghiso_core::PaymentSource;

/// Bank, card, transfer, e-wallet and bank brand keywords, with and without diacritics.
const BANK_KEYWORDS: &[&str] = &[
    "ngân hàng",
    "ngan hang",
    "bank",
    "atm",
    "thẻ",
    "the",
    "chuyển khoản",
    "chuyen khoan",
    "internet banking",
    "ib",
    "ví điện tử",
    "vi dien tu",
    "momo",
    "zalopay",
    "vietcombank",
    "vcb",
    "techcombank",
    "tcb",
    "bidv",
    "vietinbank",
];

const CASH_KEYWORDS: &[&str] = &[
    "tiền mặt",
    "tien mat",
    "cash",
    "trả tiền mặt",
    "tra tien mat",
];

/// Bank keywords are checked first, so a message naming both is `Bank`.
/// Plain substring matching: short keywords like "the" and "ib" also hit
/// inside longer words ("theo").
pub fn extract_payment_source(text: &str) -> PaymentSource {
    let text = text.to_lowercase();

    if BANK_KEYWORDS.iter().any(|k| text.contains(k)) {
        return PaymentSource::Bank;
    }
    if CASH_KEYWORDS.iter().any(|k| text.contains(k)) {
        return PaymentSource::Cash;
    }
    PaymentSource::Cash
}
