use serde::{Deserialize, Serialize};

/// How the thousands suffix ("10k") is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AmountMode {
    /// Any `k`/`K` anywhere in the scanned text multiplies by 1000.
    /// This is how amounts have always been read, so "ăn kem 5" is 5000.
    #[default]
    Legacy,
    /// Only a `k`/`K` right after the number counts, and only when it is not
    /// the first letter of another word ("5 kem" stays 5).
    Strict,
}

/// Knobs for [`crate::IntentParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParserOptions {
    #[serde(default)]
    pub amount_mode: AmountMode,
}
