//! 抽出レスポンス → フォームの導出
//!
//! Upload→Form遷移で一度だけ適用される。キー名は抽出サービスの契約
//! （"Project Name"等の表示名キー）に合わせる。

use serde_json::{Map, Value};

use crate::normalizer::{clean_budgeted_hours, clean_manager, clean_string, format_date_for_input};
use crate::types::ProjectForm;

/// 抽出レスポンスからフォームを導出する
///
/// 欠損・nullのスカラーは空文字。Technologyは配列でなければ空リスト。
/// keepResourcesAvailableは抽出からは取らず、常にfalse初期値。
pub fn form_from_extraction(data: &Map<String, Value>) -> ProjectForm {
    ProjectForm {
        name: get_string(data, "Project Name"),
        practice: get_string(data, "Practice"),
        technology: get_string_array(data, "Technology"),
        category: get_string(data, "Category"),
        manager: clean_manager(data.get("Manager")),
        client: clean_string(data.get("Client")),
        partner: get_string(data, "Partner"),
        billing_type: get_string(data, "Billing Type"),
        status: get_string(data, "Status"),
        budgeted_hours: clean_budgeted_hours(data.get("Budgeted Hours")),
        start_date: format_date_for_input(data.get("Start date")),
        end_date: format_date_for_input(data.get("End Date")),
        keep_resources_available: Some(false),
    }
}

fn get_string(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn get_string_array(map: &Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extraction(value: Value) -> Map<String, Value> {
        value.as_object().expect("not an object").clone()
    }

    #[test]
    fn test_full_mapping() {
        let data = extraction(json!({
            "Project Name": "Alpha",
            "Practice": "Custom Dev",
            "Technology": ["React", "Rust"],
            "Category": "Project",
            "Manager": "Manager: John Doe",
            "Client": "Client: Acme Corp",
            "Partner": "Globex",
            "Billing Type": "Fixed Price",
            "Status": "Active",
            "Budgeted Hours": "250 hours per month",
            "Start date": "01/15/2024",
            "End Date": "December 31st, 2024",
        }));

        let form = form_from_extraction(&data);
        assert_eq!(form.name, "Alpha");
        assert_eq!(form.practice, "Custom Dev");
        assert_eq!(form.technology, vec!["React", "Rust"]);
        assert_eq!(form.category, "Project");
        assert_eq!(form.manager, "John Doe");
        assert_eq!(form.client, "Acme Corp");
        assert_eq!(form.partner, "Globex");
        assert_eq!(form.billing_type, "Fixed Price");
        assert_eq!(form.status, "Active");
        assert_eq!(form.budgeted_hours, "250");
        assert_eq!(form.start_date, "2024-01-15");
        assert_eq!(form.end_date, "2024-12-31");
        assert_eq!(form.keep_resources_available, Some(false));
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let data = extraction(json!({ "Project Name": "Beta" }));
        let form = form_from_extraction(&data);

        assert_eq!(form.name, "Beta");
        assert_eq!(form.practice, "");
        assert!(form.technology.is_empty());
        assert_eq!(form.start_date, "");
        assert_eq!(form.keep_resources_available, Some(false));
    }

    #[test]
    fn test_technology_non_array_becomes_empty() {
        let data = extraction(json!({ "Technology": "React" }));
        assert!(form_from_extraction(&data).technology.is_empty());

        let data = extraction(json!({ "Technology": null }));
        assert!(form_from_extraction(&data).technology.is_empty());
    }

    #[test]
    fn test_null_scalars_become_empty() {
        let data = extraction(json!({ "Project Name": null, "Manager": null }));
        let form = form_from_extraction(&data);
        assert_eq!(form.name, "");
        assert_eq!(form.manager, "");
    }

    #[test]
    fn test_mapping_matches_normalizers_on_malformed_input() {
        // マッピングの読み出し結果は、対応する正規化関数の出力とぴったり一致する
        let malformed = json!({
            "Start date": "not a date",
            "Budgeted Hours": {"nested": true},
            "Manager": 42,
        });
        let data = extraction(malformed.clone());
        let form = form_from_extraction(&data);

        assert_eq!(
            form.start_date,
            format_date_for_input(malformed.get("Start date"))
        );
        assert_eq!(
            form.budgeted_hours,
            clean_budgeted_hours(malformed.get("Budgeted Hours"))
        );
        assert_eq!(form.manager, clean_manager(malformed.get("Manager")));
        assert_eq!(form.start_date, "");
        assert_eq!(form.budgeted_hours, "");
        assert_eq!(form.manager, "42");
    }
}
