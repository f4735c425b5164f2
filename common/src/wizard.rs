//! ステップオーケストレーター
//!
//! ウィザード状態の唯一の所有者。3ステップ
//! （アップロード→フォーム→推薦）の遷移と、API呼び出し前後の
//! 状態更新をすべてここで行う。
//!
//! I/Oは持たない。非同期呼び出しは `begin_*` / `apply_*` の対に分割され、
//! 呼び出し側（WASMアプリ）がその間のfetchを担う。`begin_*` が発行する
//! [`RequestTicket`] は世代カウンターを写し取り、`reset`後に届いた
//! 古いレスポンスを `apply_*` が黙って捨てられるようにする。

use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::mapping::form_from_extraction;
use crate::types::{FieldEdit, ProjectForm, Stage, PDF_MIME_TYPE, PDF_REQUIRED_MESSAGE};
use crate::validator::validate;

/// 未完了リクエストの識別子
///
/// `begin_*`時点の世代を保持する。`reset`は世代を進めるので、
/// リセット前に発行されたチケットでの`apply_*`は無効になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// ウィザード状態機械
///
/// `F`はファイルハンドル型。ブラウザでは`web_sys::File`、
/// テストでは任意のダミー型を使う。
#[derive(Debug, Clone)]
pub struct Wizard<F> {
    stage: Stage,
    selected_file: Option<F>,
    extracted_data: Option<Map<String, Value>>,
    form: ProjectForm,
    recommendations: Option<Value>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<F> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Wizard<F> {
    pub fn new() -> Self {
        Self {
            stage: Stage::Upload,
            selected_file: None,
            extracted_data: None,
            form: ProjectForm::default(),
            recommendations: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    /// 抽出サービスの生レスポンス（トレーサビリティ用に保持、以後不変）
    pub fn extracted_data(&self) -> Option<&Map<String, Value>> {
        self.extracted_data.as_ref()
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn recommendations(&self) -> Option<&Value> {
        self.recommendations.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// ファイル選択
    ///
    /// PDF以外は拒否し、前回の選択はそのまま残す。ステップは変わらない。
    pub fn select_file(&mut self, file: F, mime_type: &str) {
        if mime_type == PDF_MIME_TYPE {
            self.selected_file = Some(file);
            self.error = None;
        } else {
            self.error = Some(PDF_REQUIRED_MESSAGE.to_string());
        }
    }

    /// 抽出リクエストの開始
    ///
    /// ファイル未選択、またはリクエスト進行中なら何もしない（Noneを返す）。
    pub fn begin_extraction(&mut self) -> Option<RequestTicket> {
        if self.selected_file.is_none() || self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(RequestTicket {
            generation: self.generation,
        })
    }

    /// 抽出レスポンスの適用
    ///
    /// チケットの世代が現在と一致しなければ捨てる（リセット後の残響）。
    /// 成功時は生レスポンスを保存し、フォームを導出してFormへ進む。
    pub fn apply_extraction(
        &mut self,
        ticket: RequestTicket,
        result: Result<Map<String, Value>, ApiError>,
    ) {
        if ticket.generation != self.generation {
            return;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.form = form_from_extraction(&data);
                self.extracted_data = Some(data);
                self.stage = Stage::Form;
            }
            Err(error) => {
                self.error = Some(format!("Error extracting SOW data: {}", error));
            }
        }
    }

    /// フォーム1項目の更新。表示中の検証エラーも消す。
    pub fn update_field(&mut self, edit: FieldEdit) {
        self.form.apply(edit);
        self.error = None;
    }

    /// 推薦リクエストの開始
    ///
    /// まずフォームを検証し、不備があればエラーを立てて終わる
    /// （ネットワーク呼び出しは発生しない）。進行中の再入はno-op。
    pub fn begin_recommendation(&mut self) -> Option<RequestTicket> {
        if self.loading {
            return None;
        }
        if let Err(error) = validate(&self.form) {
            self.error = Some(error.to_string());
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(RequestTicket {
            generation: self.generation,
        })
    }

    /// 推薦レスポンスの適用。ペイロードは解釈せずそのまま保持する。
    pub fn apply_recommendation(&mut self, ticket: RequestTicket, result: Result<Value, ApiError>) {
        if ticket.generation != self.generation {
            return;
        }
        self.loading = false;
        match result {
            Ok(payload) => {
                self.recommendations = Some(payload);
                self.stage = Stage::Recommendations;
            }
            Err(error) => {
                self.error = Some(format!("Error getting recommendations: {}", error));
            }
        }
    }

    /// 全状態を初期値へ戻す
    ///
    /// ローディング中でも即座に効く。世代を進めるので、
    /// 未完了リクエストの結果が後から届いても無視される。
    pub fn reset(&mut self) {
        self.stage = Stage::Upload;
        self.selected_file = None;
        self.extracted_data = None;
        self.form = ProjectForm::default();
        self.recommendations = None;
        self.loading = false;
        self.error = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type TestWizard = Wizard<String>;

    fn extraction(value: Value) -> Map<String, Value> {
        value.as_object().expect("not an object").clone()
    }

    fn wizard_with_pdf() -> TestWizard {
        let mut wizard = TestWizard::new();
        wizard.select_file("sow.pdf".to_string(), PDF_MIME_TYPE);
        wizard
    }

    #[test]
    fn test_initial_state() {
        let wizard = TestWizard::new();
        assert_eq!(wizard.stage(), Stage::Upload);
        assert!(wizard.selected_file().is_none());
        assert!(!wizard.is_loading());
        assert!(wizard.error().is_none());
    }

    #[test]
    fn test_select_non_pdf_rejected() {
        let mut wizard = TestWizard::new();
        wizard.select_file("invoice.txt".to_string(), "text/plain");

        assert_eq!(wizard.error(), Some(PDF_REQUIRED_MESSAGE));
        assert!(wizard.selected_file().is_none());
        assert_eq!(wizard.stage(), Stage::Upload);
    }

    #[test]
    fn test_select_non_pdf_keeps_previous_selection() {
        let mut wizard = wizard_with_pdf();
        wizard.select_file("notes.docx".to_string(), "application/msword");

        assert_eq!(wizard.selected_file().map(String::as_str), Some("sow.pdf"));
        assert_eq!(wizard.error(), Some(PDF_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_select_pdf_clears_error() {
        let mut wizard = TestWizard::new();
        wizard.select_file("invoice.txt".to_string(), "text/plain");
        wizard.select_file("sow.pdf".to_string(), PDF_MIME_TYPE);

        assert!(wizard.error().is_none());
        assert_eq!(wizard.selected_file().map(String::as_str), Some("sow.pdf"));
        assert_eq!(wizard.stage(), Stage::Upload);
    }

    #[test]
    fn test_begin_extraction_without_file_is_noop() {
        let mut wizard = TestWizard::new();
        assert!(wizard.begin_extraction().is_none());
        assert!(!wizard.is_loading());
        assert!(wizard.error().is_none());
    }

    #[test]
    fn test_begin_extraction_while_loading_is_noop() {
        let mut wizard = wizard_with_pdf();
        let first = wizard.begin_extraction();
        assert!(first.is_some());
        // ダブルクリック相当。二重リクエストは発行されない
        assert!(wizard.begin_extraction().is_none());
    }

    #[test]
    fn test_extraction_success_advances_to_form() {
        let mut wizard = wizard_with_pdf();
        let ticket = wizard.begin_extraction().expect("ticket expected");
        assert!(wizard.is_loading());

        let data = extraction(json!({
            "Project Name": "Alpha",
            "Technology": ["React"],
        }));
        wizard.apply_extraction(ticket, Ok(data));

        assert_eq!(wizard.stage(), Stage::Form);
        assert!(!wizard.is_loading());
        assert_eq!(wizard.form().name, "Alpha");
        assert_eq!(wizard.form().technology, vec!["React"]);
        assert_eq!(wizard.form().keep_resources_available, Some(false));
        assert!(wizard.extracted_data().is_some());
    }

    #[test]
    fn test_extraction_failure_sets_prefixed_error() {
        let mut wizard = wizard_with_pdf();
        let ticket = wizard.begin_extraction().expect("ticket expected");

        wizard.apply_extraction(
            ticket,
            Err(ApiError::service(500, "Failed to extract SOW data")),
        );

        assert_eq!(wizard.stage(), Stage::Upload);
        assert!(!wizard.is_loading());
        assert_eq!(
            wizard.error(),
            Some("Error extracting SOW data: Failed to extract SOW data")
        );
    }

    #[test]
    fn test_update_field_clears_error() {
        let mut wizard = wizard_with_pdf();
        wizard.select_file("x.txt".to_string(), "text/plain");
        assert!(wizard.error().is_some());

        wizard.update_field(FieldEdit::Name("Alpha".to_string()));
        assert!(wizard.error().is_none());
        assert_eq!(wizard.form().name, "Alpha");
    }

    #[test]
    fn test_recommendation_blocked_by_validation() {
        let mut wizard = TestWizard::new();
        assert!(wizard.begin_recommendation().is_none());
        assert_eq!(
            wizard.error(),
            Some("Please fill out the \"name\" field.")
        );
        assert!(!wizard.is_loading());
    }

    #[test]
    fn test_recommendation_success_advances() {
        let mut wizard = wizard_with_pdf();
        let ticket = wizard.begin_extraction().expect("ticket expected");
        wizard.apply_extraction(ticket, Ok(full_extraction()));

        let ticket = wizard.begin_recommendation().expect("validation should pass");
        let payload = json!({"recommendations": [{"rank": 1, "name": "Jane"}]});
        wizard.apply_recommendation(ticket, Ok(payload.clone()));

        assert_eq!(wizard.stage(), Stage::Recommendations);
        assert_eq!(wizard.recommendations(), Some(&payload));
        assert!(!wizard.is_loading());
    }

    #[test]
    fn test_recommendation_failure_sets_prefixed_error() {
        let mut wizard = wizard_with_pdf();
        let ticket = wizard.begin_extraction().expect("ticket expected");
        wizard.apply_extraction(ticket, Ok(full_extraction()));

        let ticket = wizard.begin_recommendation().expect("validation should pass");
        wizard.apply_recommendation(ticket, Err(ApiError::Transport("Failed to fetch".into())));

        assert_eq!(wizard.stage(), Stage::Form);
        assert_eq!(
            wizard.error(),
            Some("Error getting recommendations: Failed to fetch")
        );
    }

    #[test]
    fn test_reset_during_loading_drops_late_response() {
        let mut wizard = wizard_with_pdf();
        let ticket = wizard.begin_extraction().expect("ticket expected");
        assert!(wizard.is_loading());

        wizard.reset();
        assert_eq!(wizard.stage(), Stage::Upload);
        assert!(!wizard.is_loading());

        // リセット後に元のレスポンスが遅れて届いても状態は変わらない
        let snapshot = format!("{:?}", wizard);
        wizard.apply_extraction(ticket, Ok(full_extraction()));
        assert_eq!(format!("{:?}", wizard), snapshot);
    }

    #[test]
    fn test_reset_then_retry_uses_new_generation() {
        let mut wizard = wizard_with_pdf();
        let stale = wizard.begin_extraction().expect("ticket expected");
        wizard.reset();

        wizard.select_file("sow.pdf".to_string(), PDF_MIME_TYPE);
        let fresh = wizard.begin_extraction().expect("ticket expected");
        assert_ne!(stale, fresh);

        // 古いチケットは効かず、新しいチケットだけが状態を進める
        wizard.apply_extraction(stale, Ok(extraction(json!({"Project Name": "Stale"}))));
        assert_eq!(wizard.stage(), Stage::Upload);
        assert!(wizard.is_loading());

        wizard.apply_extraction(fresh, Ok(extraction(json!({"Project Name": "Fresh"}))));
        assert_eq!(wizard.stage(), Stage::Form);
        assert_eq!(wizard.form().name, "Fresh");
    }

    fn full_extraction() -> Map<String, Value> {
        extraction(json!({
            "Project Name": "Alpha",
            "Practice": "Custom Dev",
            "Technology": ["React"],
            "Category": "Project",
            "Manager": "John Doe",
            "Client": "Acme Corp",
            "Partner": "Globex",
            "Billing Type": "Fixed Price",
            "Status": "Active",
            "Budgeted Hours": "250 hours",
            "Start date": "2024-01-15",
            "End Date": "2024-12-31",
        }))
    }
}
