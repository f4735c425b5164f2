//! 予算工数の正規化
//!
//! 抽出値は数値のことも注記付き文字列（"250 hours per month"）のこともある。
//! 最初の数値トークンだけを表示用に残す。

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref NUMBER_RE: Regex = Regex::new(r"\d[\d,]*(?:\.\d+)?").unwrap();
}

/// 工数表示文字列へ正規化する。数値を含まない入力は空文字。
pub fn clean_budgeted_hours(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => {
            // 250.0のような整数値は小数点なしで表示
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            } else {
                n.to_string()
            }
        }
        Some(Value::String(s)) => first_number(s),
        _ => String::new(),
    }
}

/// 最初の数値トークンを桁区切りなしで返す
fn first_number(raw: &str) -> String {
    NUMBER_RE
        .find(raw)
        .map(|m| m.as_str().replace(',', ""))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_number() {
        let value = json!(250);
        assert_eq!(clean_budgeted_hours(Some(&value)), "250");
    }

    #[test]
    fn test_float_without_fraction() {
        let value = json!(250.0);
        assert_eq!(clean_budgeted_hours(Some(&value)), "250");
    }

    #[test]
    fn test_float_with_fraction() {
        let value = json!(37.5);
        assert_eq!(clean_budgeted_hours(Some(&value)), "37.5");
    }

    #[test]
    fn test_annotated_string() {
        let value = json!("250 hours per month");
        assert_eq!(clean_budgeted_hours(Some(&value)), "250");
    }

    #[test]
    fn test_thousands_separator_removed() {
        let value = json!("~1,200 hrs");
        assert_eq!(clean_budgeted_hours(Some(&value)), "1200");
    }

    #[test]
    fn test_decimal_in_string() {
        let value = json!("approx. 37.5 hours/week");
        assert_eq!(clean_budgeted_hours(Some(&value)), "37.5");
    }

    #[test]
    fn test_no_digits_degrades_to_empty() {
        let value = json!("to be determined");
        assert_eq!(clean_budgeted_hours(Some(&value)), "");
    }

    #[test]
    fn test_absent_input() {
        assert_eq!(clean_budgeted_hours(None), "");
        assert_eq!(clean_budgeted_hours(Some(&Value::Null)), "");
        let array = json!([250]);
        assert_eq!(clean_budgeted_hours(Some(&array)), "");
    }
}
