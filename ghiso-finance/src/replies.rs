//! Reply texts. The bot teases the household about every đồng spent, so most
//! replies are a fixed confirmation line followed by a random jab.
//!
//! Randomness always comes from a caller-supplied [`Rng`]; seed it in tests.

use ghiso_core::{Money, PaymentSource};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::records::TransactionDraft;
use crate::reports::{BalanceReport, BalanceStanding, SpendingLevel, SummaryReport};

pub const GREETINGS: &[&str] = &[
    "Chào chị vợ! Hôm nay định tiêu bao nhiêu nữa đây? 🤑",
    "Ê ê ê, lại đến khai báo chi tiêu rồi à? Anh ghi sổ đây! 😏",
    "Chào em! Anh đang canh gác ví nhà nè, cần gì cứ nói 😎",
    "Xin chào! Anh là Bot quản gia, chuyên theo dõi đồng tiền của anh chồng! 🤭",
];

pub const PUSHBACK_REPLIES: &[&str] = &[
    "Chồng đâu dám nói gì đâu, chỉ là ghi chú lại để sau này kể khổ thôi mà 😇",
    "Số tiền này, chồng chỉ ghi nhận thôi, không dám ý kiến gì đâu 😅",
    "Anh chỉ là bot thôi, đừng giận anh! Giận chồng đi! 🤖",
    "Em đúng hết, anh sai hết! Nhưng tiền vẫn bay đấy! 💸😂",
    "Anh im đây, im như hũ nước mắm! 🤐",
    "Được được, em là boss, anh chỉ là kế toán! 👩‍💼📊",
];

pub const CLARIFICATIONS: &[&str] = &[
    "Hỏi lại: Anh không hiểu rõ ý em 🤔\n\nEm có thể nói:\n• 'ăn bánh 10k' để ghi chi tiêu\n• 'cafe bank 30k' để ghi theo nguồn tiền\n• 'sáng ăn 10k chiều uống 20k' cho nhiều giao dịch\n• 'kiểm tra số dư' để xem tình hình tiền",
    "Anh không hiểu em muốn gì? 🤷‍♂️\n\nCó thể em muốn:\n📝 Ghi chi tiêu: 'trà sữa 25k'\n💳 Ghi theo nguồn: 'cafe bank 30k'\n📊 Xem báo cáo: 'tóm tắt tháng này'\n💰 Kiểm tra: 'số dư còn bao nhiêu?'",
    "Ủa ủa, anh nghe không rõ 👂\n\nEm thử nói:\n• Chi tiêu: 'shopee 100k'\n• Nhiều giao dịch: 'sáng ăn 15k tối ăn 30k'\n• Theo ngày: 'ăn bánh ngày 2.6'\n• Kiểm tra: 'kiểm tra tiền'",
    "Anh chưa hiểu ý em! 😅\n\nGợi ý cho em:\n🧋 'trà sữa 20k' để ghi trà sữa\n💄 'son môi bank 150k' khi mua son bằng thẻ\n🍜 'sáng phở 30k chiều bún 25k' cho nhiều món\n📈 'báo cáo chi tiêu' để xem thống kê",
];

const DRINKS: &[&str] = &[
    "Trà sữa lại nữa hả? Chồng chắc khóc trong góc rồi! 🧋😭",
    "Uống hoài vậy, chồng chuyển qua uống nước lã để tiết kiệm! 💧",
    "Cafe mỗi ngày, chồng chuẩn bị bán thận rồi! ☕😵",
    "Nước uống đắt hơn xăng rồi, chồng biết chắc ngất! 🤯",
    "Thêm trà sữa nữa, chồng chắc đi vay ngân hàng! 🏦💸",
];

const BEAUTY: &[&str] = &[
    "Mỹ phẩm mua tiếp nữa hả? Chồng chuẩn bị ăn mì gói rồi nè! 🍜",
    "Làm đẹp hoài, chồng xấu đi vì lo tiền! 💄😰",
    "Son phấn thêm nữa, chồng chắc phải bán đồ cũ! 💋📦",
    "Skincare tốn kém vậy, chồng da khô cả lên vì stress! 🧴😅",
    "Mua cream thêm, chồng chắc phải dưỡng da bằng nước mắt! 😢",
];

const DINING: &[&str] = &[
    "Ăn ngoài hoài, ví chồng khóc thét luôn! 🍽️😭",
    "Nhà hàng sang trọng nha, chồng ăn cơm muối thôi! 🍚🧂",
    "Ăn ngon quá, chồng nuốt nước bọt ở nhà! 🤤",
    "Ship đồ ăn nữa, chồng chắc ship luôn tâm hồn! 🛵💔",
    "Gọi đồ ăn hoài, chồng sắp gọi luôn cảnh sát! 🚨",
];

const SHOPPING: &[&str] = &[
    "Shopee gì mà mỗi ngày cũng nhận hàng, chồng chuyển qua ngủ gầm cầu luôn cho rộng nhà à? 📦🌉",
    "Mua online hoài, shipper quen hơn chồng rồi! 🛒😂",
    "Lazada thêm nữa, chồng lười ada cả lên! 🛍️😴",
    "Flash sale nữa hả? Chồng flash luôn tiền trong ví! ⚡💸",
    "Thêm đồ vào giỏ, chồng bớt cơm trong bát! 🛒🍚",
];

const FASHION: &[&str] = &[
    "Quần áo mới nữa? Tủ đồ chật rồi, ví chồng cũng chật! 👗💸",
    "Túi xách thêm, chồng xách luôn gánh nợ! 👜😰",
    "Giày dép mua hoài, chồng chạy bộ chân trần tiết kiệm! 👠🦶",
    "Phụ kiện lung linh, chồng lụng liên luôn! ✨😵",
    "Váy áo xinh quá, chồng xinh xắn luôn vì lo tiền! 👚😅",
];

const GENERAL: &[&str] = &[
    "Tiêu hoài vậy, chồng chắc nghĩ đến việc bán nhà rồi! 🏠💸",
    "Chi tiêu giỏi quá, chồng phải học Excel để theo kịp! 📊😂",
    "Tiền bay nhanh vậy, chồng tưởng có phép thuật! ✨💨",
    "Số tiền này chắc chồng phải làm thêm ca đêm! 🌙💼",
    "Chi tiêu siêu tốc, chồng siêu buồn! 🚄😢",
];

const PRAISE: &[&str] = &[
    "Giỏi quá! Còn hơn nửa thu nhập, chồng mừng rớt nước mắt! 🥹",
    "Tháng này quản lý tiền đỉnh thật, anh xin bái phục! 🙇",
    "Ví nhà béo tốt ghê, cứ thế mà phát huy nhé! 💰",
];

const DEFICIT: &[&str] = &[
    "Tiêu lố rồi kìa! Chồng chuẩn bị đi làm thêm ca đêm thôi! 🌙😵",
    "Âm tiền rồi em ơi, chồng ăn mì gói cả tháng nhé! 🍜",
    "Thâm hụt thế này, ví chồng đang khóc thành tiếng! 😭💸",
];

const DRINK_WORDS: &[&str] = &[
    "trà sữa", "tra sua", "bubble", "cafe", "cà phê", "coffee", "cappuccino",
];
const BEAUTY_WORDS: &[&str] = &[
    "mỹ phẩm", "my pham", "son", "phấn", "kem", "serum", "makeup", "skincare", "toner",
];
const DINING_WORDS: &[&str] = &[
    "ăn ngoài", "nhà hàng", "quán", "ship", "gọi món", "delivery", "grab food", "bún", "phở",
    "cơm", "bánh", "pizza",
];
const SHOPPING_WORDS: &[&str] = &[
    "shopee", "lazada", "tiki", "sendo", "online", "mua sắm", "shopping", "flash sale", "deal",
];
const FASHION_WORDS: &[&str] = &[
    "quần", "áo", "váy", "giày", "túi", "balo", "phụ kiện", "trang sức", "đồng hồ", "kính", "mũ",
];

const BIG_SPEND: Money = 500_000.0;
const NOTABLE_SPEND: Money = 200_000.0;

/// Pick one line from `pool`. Empty pools give an empty string.
pub fn pick_response<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or("")
}

/// Vietnamese currency formatting: `10000` → `10.000đ`, `2500.5` → `2.500,5đ`.
pub fn format_vnd(amount: Money) -> String {
    if !amount.is_finite() {
        return "0đ".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let milli = (amount.abs() * 1000.0).round() as u64;
    let whole = (milli / 1000).to_string();
    let frac = milli % 1000;

    let mut out = String::with_capacity(whole.len() + 8);
    out.push_str(sign);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if frac > 0 {
        out.push(',');
        out.push_str(format!("{frac:03}").trim_end_matches('0'));
    }
    out.push('đ');
    out
}

fn mentions(desc: &str, words: &[&str]) -> bool {
    words.iter().any(|w| desc.contains(w))
}

/// Jab for a single expense: by what was bought first, then by how much.
pub fn expense_teasing<R: Rng + ?Sized>(description: &str, amount: Money, rng: &mut R) -> String {
    let desc = description.to_lowercase();
    let pool = if mentions(&desc, DRINK_WORDS) {
        DRINKS
    } else if mentions(&desc, BEAUTY_WORDS) {
        BEAUTY
    } else if mentions(&desc, DINING_WORDS) {
        DINING
    } else if mentions(&desc, SHOPPING_WORDS) {
        SHOPPING
    } else if mentions(&desc, FASHION_WORDS) {
        FASHION
    } else if amount >= BIG_SPEND {
        return "Số tiền khủng vậy? Chồng chắc phải đi vay ngân hàng rồi! 🏦💸😱".to_string();
    } else if amount >= NOTABLE_SPEND {
        return "Tiền này chồng phải làm thêm mấy ngày đấy! 💼😰".to_string();
    } else {
        GENERAL
    };
    pick_response(pool, rng).to_string()
}

pub fn expense_reply<R: Rng + ?Sized>(
    amount: Money,
    source: PaymentSource,
    description: &str,
    rng: &mut R,
) -> String {
    format!(
        "Đã ghi nhận chi tiêu {} ({}) cho \"{}\" ✅\n\n{}",
        format_vnd(amount),
        source.label(),
        description,
        expense_teasing(description, amount, rng)
    )
}

/// The expense was understood but the ledger did not confirm the write.
pub fn expense_unsaved_reply<R: Rng + ?Sized>(
    amount: Money,
    source: PaymentSource,
    description: &str,
    rng: &mut R,
) -> String {
    format!(
        "⚠️ Anh ghi nhận chi tiêu {} ({}) cho \"{}\" rồi!\n\n{}\n\n⚠️ Lưu ý: Sổ đang lag, giao dịch có thể chưa được lưu. Em thử lại sau nhé! 😅",
        format_vnd(amount),
        source.label(),
        description,
        expense_teasing(description, amount, rng)
    )
}

fn multi_teasing<R: Rng + ?Sized>(total: Money, count: usize, rng: &mut R) -> String {
    if total >= NOTABLE_SPEND {
        return "Số tiền khủng + nhiều giao dịch = Chồng ngất luôn! 😵💫".to_string();
    }
    let lines = [
        format!("{count} giao dịch một lúc? Chồng chắc phải ngồi tính bằng máy tính rồi! 🧮😰"),
        format!("Tiêu {count} lần trong ngày, chồng hoa mắt chưa? 🌀💸"),
        format!("Liên tiếp {count} giao dịch vậy, chồng chắc phải uống thuốc tim! 💊❤️"),
        format!("{count} lần chi tiêu, ví chồng run bần bật! 💼😵"),
        format!("Combo {count} món như thế này, chồng combo luôn suy nghĩ! 🤯"),
    ];
    lines.choose(rng).cloned().unwrap_or_default()
}

pub fn multi_expense_reply<R: Rng + ?Sized>(records: &[TransactionDraft], rng: &mut R) -> String {
    let total: Money = records.iter().map(|r| r.amount).sum();
    let mut out = format!(
        "Ơ la la! {} giao dịch một lúc á? Tổng cộng {}! 😱\n\n",
        records.len(),
        format_vnd(total)
    );
    for (i, r) in records.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}: {} ({})\n",
            i + 1,
            r.description,
            format_vnd(r.amount),
            r.payment_source.short_tag()
        ));
    }
    out.push('\n');
    out.push_str(&multi_teasing(total, records.len(), rng));
    out
}

pub fn income_reply<R: Rng + ?Sized>(amount: Money, description: &str, rng: &mut R) -> String {
    let amount = format_vnd(amount);
    let lines = [
        format!(
            "Wow! Thu nhập {amount} đã được ghi nhận! 💰\n\n{}",
            pick_response(PRAISE, rng)
        ),
        format!(
            "Tuyệt vời! Anh đã ghi {amount} vào thu nhập rồi! 🎉\n\nTiền về như nước! Giữ form em nhé! 💪"
        ),
        format!(
            "Oke! Thu nhập {amount} cho \"{description}\" đã vào sổ ✅\n\nTiền nhiều quá làm anh hoa mắt luôn! 🤑"
        ),
    ];
    lines.choose(rng).cloned().unwrap_or_default()
}

pub const MISSING_EXPENSE_AMOUNT: &str =
    "Chị vợ ơi, chưa nói số tiền kìa! Ví dụ: 'ăn bánh 10k' hoặc 'trà sữa 25k' nhé 😊";

pub const MISSING_INCOME_AMOUNT: &str =
    "Em ơi, em chưa nói số tiền thu nhập á! Ví dụ: 'thêm thu nhập 5000k lương' nhé 😊";

pub const NO_FRAGMENTS: &str =
    "Hỏi lại: Anh không hiểu rõ em muốn ghi những giao dịch nào? 🤔\n\nVí dụ: 'sáng ăn bánh 10k chiều ăn 20k' nhé!";

pub const EXPENSE_FAILED: &str = "Oops! Anh bị choáng vì số tiền rồi 😅 Em thử lại sau nhé!";

pub const MULTI_FAILED: &str =
    "Ối giời! Quá nhiều giao dịch làm anh choáng rồi 😵 Em thử từng cái một nhé!";

pub const INCOME_FAILED: &str = "Oops! Anh bị lỗi khi ghi thu nhập rồi 😅 Em thử lại sau nhé!";

pub const BALANCE_FAILED: &str = "Anh không lấy được dữ liệu tài chính 😅 Có thể sổ đang ngủ!";

pub const SUMMARY_FAILED: &str = "Anh không tạo được báo cáo 😅 Có thể sổ đang bận!";

pub fn balance_reply<R: Rng + ?Sized>(report: &BalanceReport, rng: &mut R) -> String {
    let mut out = String::from("📊 **Tình hình tài chính tháng này:**\n\n");
    out.push_str(&format!("💰 Thu nhập: {}\n", format_vnd(report.income)));
    out.push_str(&format!("💸 Chi tiêu: {}\n", format_vnd(report.expense)));

    let left = format_vnd(report.balance.abs());
    match report.standing() {
        BalanceStanding::Comfortable => {
            out.push_str(&format!("✅ Còn lại: +{left}\n\n"));
            out.push_str(pick_response(PRAISE, rng));
        }
        BalanceStanding::Positive => {
            out.push_str(&format!("✅ Còn lại: +{left}\n\n"));
            out.push_str("Không tệ lắm đấy! Tiếp tục giữ form nhé! 💪");
        }
        BalanceStanding::Deficit => {
            out.push_str(&format!("❌ Thâm hụt: -{left}\n\n"));
            out.push_str(pick_response(DEFICIT, rng));
        }
    }
    out
}

pub fn summary_reply(report: &SummaryReport) -> String {
    const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

    let mut out = format!("📈 **Báo cáo tháng {}:**\n\n", report.month);

    if !report.top_expenses.is_empty() {
        out.push_str("🔥 **Top chi tiêu:**\n");
        for (medal, total) in MEDALS.iter().zip(&report.top_expenses) {
            out.push_str(&format!("{medal} {}: {}\n", total.name, format_vnd(total.amount)));
        }
        out.push('\n');
    }

    out.push_str(&format!("📝 Tổng số giao dịch: {}\n", report.transaction_count));
    out.push_str(&format!("💸 Chi tiêu: {} lần\n", report.expense_count));
    out.push_str(&format!("💰 Thu nhập: {} lần\n\n", report.income_count));

    out.push_str(match report.level() {
        SpendingLevel::High => {
            "Tháng này em chi khá nhiều đấy! Có khi nên hạn chế shopping một chút 😅"
        }
        SpendingLevel::Saving => "Tháng này em tiết kiệm quá! Anh tự hào về em 🥰",
        SpendingLevel::Reasonable => "Chi tiêu ở mức hợp lý! Giữ vững form này nhé! 💪",
    });
    out
}
