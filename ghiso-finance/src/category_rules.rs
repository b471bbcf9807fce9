//! Deterministic category rules mapping chat descriptions to ledger categories.
//!
//! Keyword tables are checked top to bottom and the first hit wins, so a
//! description like "ăn ở nhà" lands in food, not housing.

use ghiso_core::CategoryId;

/// Guess the expense category for a description.
pub fn guess_expense_category(description: &str) -> CategoryId {
    let desc = description.to_lowercase();

    // Food & drink
    if desc.contains("cafe") || desc.contains("cà phê")
        || desc.contains("ăn") || desc.contains("uống")
        || desc.contains("nhà hàng") || desc.contains("quán")
        || desc.contains("trà sữa") || desc.contains("phở")
        || desc.contains("bún") || desc.contains("cơm")
        || desc.contains("bánh")
    {
        return CategoryId::FoodAndDrink;
    }

    // Shopping
    if desc.contains("mua") || desc.contains("shopping")
        || desc.contains("quần áo") || desc.contains("đồ")
        || desc.contains("shopee") || desc.contains("lazada")
    {
        return CategoryId::Shopping;
    }

    // Transport
    if desc.contains("grab") || desc.contains("taxi")
        || desc.contains("xe") || desc.contains("xăng")
        || desc.contains("di chuyển")
    {
        return CategoryId::Transport;
    }

    // Bills
    if desc.contains("điện") || desc.contains("nước")
        || desc.contains("hóa đơn") || desc.contains("bill")
    {
        return CategoryId::Utilities;
    }

    // Entertainment
    if desc.contains("phim") || desc.contains("game") || desc.contains("giải trí") {
        return CategoryId::Entertainment;
    }

    // Health
    if desc.contains("thuốc") || desc.contains("bệnh viện") || desc.contains("khám") {
        return CategoryId::Health;
    }

    // Housing
    if desc.contains("nhà") || desc.contains("thuê") || desc.contains("sửa chữa") {
        return CategoryId::Housing;
    }

    CategoryId::OtherExpense
}

/// Guess the income category for a description.
pub fn guess_income_category(description: &str) -> CategoryId {
    let desc = description.to_lowercase();

    if desc.contains("lương") || desc.contains("salary") {
        return CategoryId::Salary;
    }
    if desc.contains("thưởng") || desc.contains("bonus") {
        return CategoryId::Bonus;
    }

    CategoryId::OtherIncome
}
