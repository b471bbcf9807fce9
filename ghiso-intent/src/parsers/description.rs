//! Description extraction: whatever is left once command words and amounts are gone.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::amount::RE_AMOUNT;

/// Placeholder when nothing meaningful survives stripping.
pub const FALLBACK_DESCRIPTION: &str = "Giao dịch";

/// Anything that is not ASCII alphanumeric, whitespace or a Vietnamese letter.
static RE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)[^0-9a-z_\s",
        "áàảãạăắằẳẵặâấầẩẫậéèẻẽẹêếềểễệíìỉĩịóòỏõọôốồổỗộơớờởỡợúùủũụưứừửữựýỳỷỹỵđ",
        "]"
    ))
    .unwrap()
});

static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip `exclude_words` (case-insensitive, anywhere in the text), amounts and
/// symbols, then collapse whitespace.
///
/// Stripping repeats until nothing changes, so feeding the output back in
/// with the same `exclude_words` returns it unchanged.
pub fn extract_description(text: &str, exclude_words: &[&str]) -> String {
    let excluded: Vec<Regex> = exclude_words
        .iter()
        .filter(|w| !w.is_empty())
        .filter_map(|w| {
            RegexBuilder::new(&regex::escape(w))
                .case_insensitive(true)
                .build()
                .ok()
        })
        .collect();

    let mut current = text.to_string();
    loop {
        let next = strip_once(&current, &excluded);
        if next == current {
            break;
        }
        current = next;
    }

    if current.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        current
    }
}

fn strip_once(text: &str, excluded: &[Regex]) -> String {
    let mut out = text.to_string();
    for re in excluded {
        out = re.replace_all(&out, "").into_owned();
    }
    out = RE_AMOUNT.replace_all(&out, "").into_owned();
    out = RE_NOISE.replace_all(&out, "").into_owned();
    RE_SPACES.replace_all(out.trim(), " ").into_owned()
}
