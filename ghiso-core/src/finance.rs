//! Finance vocabulary shared by the parser and the ledger: payment sources,
//! transaction types and the household category table.

use serde::{Deserialize, Serialize};

/// Amounts are whole VND, kept as `f64` because chat input may carry decimals ("2.5k").
pub type Money = f64;

/// Where the money came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PaymentSource {
    #[default]
    #[serde(rename = "cash")]
    Cash,
    #[serde(rename = "bank")]
    Bank,
}

impl PaymentSource {
    /// Label used in chat replies
    pub fn label(&self) -> &'static str {
        match self {
            PaymentSource::Cash => "Tiền mặt",
            PaymentSource::Bank => "Ngân hàng",
        }
    }

    /// Two-letter tag used in enumerated lists
    pub fn short_tag(&self) -> &'static str {
        match self {
            PaymentSource::Cash => "TM",
            PaymentSource::Bank => "NH",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "expense")]
    Expense,
    #[serde(rename = "income")]
    Income,
}

/// Household categories. The serialized ids are the ones the ledger stores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryId {
    #[serde(rename = "an_uong")]
    FoodAndDrink,
    #[serde(rename = "mua_sam")]
    Shopping,
    #[serde(rename = "di_chuyen")]
    Transport,
    #[serde(rename = "nha_cua")]
    Housing,
    #[serde(rename = "hoa_don")]
    Utilities,
    #[serde(rename = "giai_tri")]
    Entertainment,
    #[serde(rename = "suc_khoe")]
    Health,
    #[serde(rename = "giao_duc")]
    Education,
    #[serde(rename = "chi_phi_khac")]
    OtherExpense,
    #[serde(rename = "rut_tien_mat")]
    CashWithdrawal,
    #[serde(rename = "cho_muon_tien")]
    Lending,
    #[serde(rename = "thu_nhap_luong")]
    Salary,
    #[serde(rename = "thu_nhap_thuong")]
    Bonus,
    #[serde(rename = "thu_nhap_khac")]
    OtherIncome,
    #[serde(rename = "nap_tien_mat_tu_nh")]
    CashDeposit,
    #[serde(rename = "thu_no")]
    DebtCollection,
}

impl CategoryId {
    pub const ALL: [CategoryId; 16] = [
        CategoryId::FoodAndDrink,
        CategoryId::Shopping,
        CategoryId::Transport,
        CategoryId::Housing,
        CategoryId::Utilities,
        CategoryId::Entertainment,
        CategoryId::Health,
        CategoryId::Education,
        CategoryId::OtherExpense,
        CategoryId::CashWithdrawal,
        CategoryId::Lending,
        CategoryId::Salary,
        CategoryId::Bonus,
        CategoryId::OtherIncome,
        CategoryId::CashDeposit,
        CategoryId::DebtCollection,
    ];

    /// Stable string id, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::FoodAndDrink => "an_uong",
            CategoryId::Shopping => "mua_sam",
            CategoryId::Transport => "di_chuyen",
            CategoryId::Housing => "nha_cua",
            CategoryId::Utilities => "hoa_don",
            CategoryId::Entertainment => "giai_tri",
            CategoryId::Health => "suc_khoe",
            CategoryId::Education => "giao_duc",
            CategoryId::OtherExpense => "chi_phi_khac",
            CategoryId::CashWithdrawal => "rut_tien_mat",
            CategoryId::Lending => "cho_muon_tien",
            CategoryId::Salary => "thu_nhap_luong",
            CategoryId::Bonus => "thu_nhap_thuong",
            CategoryId::OtherIncome => "thu_nhap_khac",
            CategoryId::CashDeposit => "nap_tien_mat_tu_nh",
            CategoryId::DebtCollection => "thu_no",
        }
    }

    /// Display name shown in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryId::FoodAndDrink => "Ăn uống",
            CategoryId::Shopping => "Mua sắm",
            CategoryId::Transport => "Di chuyển",
            CategoryId::Housing => "Nhà cửa",
            CategoryId::Utilities => "Hóa đơn",
            CategoryId::Entertainment => "Giải trí",
            CategoryId::Health => "Sức khỏe",
            CategoryId::Education => "Giáo dục",
            CategoryId::OtherExpense => "Chi phí khác",
            CategoryId::CashWithdrawal => "Rút tiền mặt (NH)",
            CategoryId::Lending => "Cho mượn tiền",
            CategoryId::Salary => "Lương",
            CategoryId::Bonus => "Thưởng",
            CategoryId::OtherIncome => "Thu nhập khác",
            CategoryId::CashDeposit => "Nạp tiền mặt (từ NH)",
            CategoryId::DebtCollection => "Thu nợ",
        }
    }

    /// Which side of the ledger the category belongs to
    pub fn kind(&self) -> TransactionType {
        match self {
            CategoryId::Salary
            | CategoryId::Bonus
            | CategoryId::OtherIncome
            | CategoryId::CashDeposit
            | CategoryId::DebtCollection => TransactionType::Income,
            _ => TransactionType::Expense,
        }
    }

    pub fn from_id(id: &str) -> Option<CategoryId> {
        CategoryId::ALL.into_iter().find(|c| c.as_str() == id)
    }
}
