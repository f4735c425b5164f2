//! Manager/Clientフィールドのノイズ除去
//!
//! 抽出バックエンドはLLM回答をそのまま返すことがあり、
//! ラベル前置き・マークダウン・引用符・敬称が混ざる。
//! 素の表示名まで削ぎ落とす。

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::raw_text;

lazy_static! {
    // "Client: Acme" / "The client name is Acme" 形式の前置き
    static ref CLIENT_LABEL_RE: Regex =
        Regex::new(r"(?i)^(?:the\s+)?client(?:\s+name)?(?:\s+is)?\s*[:\-]?\s+").unwrap();
    // "Manager: John" / "The project manager is John" 形式の前置き
    static ref MANAGER_LABEL_RE: Regex =
        Regex::new(r"(?i)^(?:the\s+)?(?:project\s+)?manager(?:\s+name)?(?:\s+is)?\s*[:\-]?\s+")
            .unwrap();
    // 敬称
    static ref HONORIFIC_RE: Regex =
        Regex::new(r"(?i)^(?:mr|mrs|ms|dr)\.?\s+").unwrap();
    static ref MARKUP_RE: Regex = Regex::new(r"[*_`]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Clientフィールドの正規化。欠損は空文字。
pub fn clean_string(value: Option<&Value>) -> String {
    let raw = raw_text(value);
    if raw.is_empty() {
        return String::new();
    }
    let cleaned = strip_markup(&raw);
    let cleaned = CLIENT_LABEL_RE.replace(&cleaned, "");
    cleaned.trim().trim_end_matches('.').trim().to_string()
}

/// Managerフィールドの正規化。ラベルと敬称も除去する。
pub fn clean_manager(value: Option<&Value>) -> String {
    let raw = raw_text(value);
    if raw.is_empty() {
        return String::new();
    }
    let cleaned = strip_markup(&raw);
    let cleaned = MANAGER_LABEL_RE.replace(&cleaned, "");
    let cleaned = HONORIFIC_RE.replace(cleaned.trim(), "");
    cleaned.trim().trim_end_matches('.').trim().to_string()
}

/// マークダウン記号・引用符を落とし、空白を1つに潰す
fn strip_markup(raw: &str) -> String {
    let no_markup = MARKUP_RE.replace_all(raw, "");
    let collapsed = WHITESPACE_RE.replace_all(no_markup.trim(), " ");
    collapsed.trim_matches(|c| c == '"' || c == '\'').to_string()
}
