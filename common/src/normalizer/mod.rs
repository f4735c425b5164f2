//! 抽出フィールドの正規化
//!
//! 抽出サービスの生の値を表示用文字列へ揃える純関数群:
//! - date: 日付表記ゆれ → `YYYY-MM-DD`
//! - text: Manager/Clientのノイズ除去
//! - hours: 工数表記 → 数値トークン
//!
//! どの関数も失敗しない。解釈できない入力は空文字へ縮退する。

pub mod date;
pub mod hours;
pub mod text;

pub use date::format_date_for_input;
pub use hours::clean_budgeted_hours;
pub use text::{clean_manager, clean_string};

use serde_json::Value;

/// JSON値を生テキストへ落とす（null/欠損は空文字）
pub(crate) fn raw_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
