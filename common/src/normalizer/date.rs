//! 日付の正規化
//!
//! 抽出サービスが返す日付表記はページ由来で揺れる
//! （`01/15/2024` `2024-01-15` `January 15th, 2024` など）。
//! date input が要求する `YYYY-MM-DD` へ揃える。

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::raw_text;

/// 試行順。月先行(US)をバックエンドの正規表現順に合わせて優先し、
/// 日先行は月位置が範囲外のときだけ届く。
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// 日付入力用の`YYYY-MM-DD`へ正規化する。解釈不能なら空文字。
pub fn format_date_for_input(value: Option<&Value>) -> String {
    let raw = raw_text(value);
    if raw.is_empty() {
        return String::new();
    }

    let cleaned = strip_ordinal_suffixes(&raw);

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(&cleaned, format) {
            return datetime.date().format("%Y-%m-%d").to_string();
        }
    }

    String::new()
}

/// `15th` → `15`
fn strip_ordinal_suffixes(raw: &str) -> String {
    lazy_static! {
        static ref ORDINAL_RE: Regex = Regex::new(r"(\d+)(?:st|nd|rd|th)\b").unwrap();
    }
    ORDINAL_RE.replace_all(raw.trim(), "$1").to_string()
}
