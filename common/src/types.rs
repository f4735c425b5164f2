//! ウィザードの型定義
//!
//! CLIを持たないWeb専用プロジェクトだが、コアの型はWASMに依存しない:
//! - Stage: ウィザードの現在ステップ
//! - ProjectForm: 編集可能なプロジェクトレコード（推薦APIへの送信ペイロード）
//! - FieldEdit: フォーム1項目の置き換えパッチ

use serde::{Deserialize, Serialize};

/// PDFのみ受け付ける
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// PDF以外を選択したときのメッセージ
pub const PDF_REQUIRED_MESSAGE: &str = "Please upload a PDF file";

/// ウィザードのステップ
///
/// 同時に有効なステップは常に1つ。前進のみで、`reset`だけがUploadへ戻す。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Upload,
    Form,
    Recommendations,
}

/// 編集可能なプロジェクトレコード
///
/// 抽出レスポンスから導出され、Formステップでユーザーが編集する。
/// シリアライズ形はバックエンドの契約に合わせてcamelCase。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectForm {
    pub name: String,
    pub practice: String,
    pub technology: Vec<String>,
    pub category: String,
    pub manager: String,
    pub client: String,
    pub partner: String,
    pub billing_type: String,
    pub status: String,
    pub budgeted_hours: String,
    pub start_date: String,
    pub end_date: String,
    /// `Some(false)`は有効な回答、`None`は未回答
    pub keep_resources_available: Option<bool>,
}

/// フォーム1項目の置き換え
///
/// ちょうど1キーを置き換える。同じ値の再適用は冪等。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Practice(String),
    Technology(Vec<String>),
    Category(String),
    Manager(String),
    Client(String),
    Partner(String),
    BillingType(String),
    Status(String),
    BudgetedHours(String),
    StartDate(String),
    EndDate(String),
    KeepResourcesAvailable(bool),
}

impl ProjectForm {
    /// パッチを適用する
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(v) => self.name = v,
            FieldEdit::Practice(v) => self.practice = v,
            FieldEdit::Technology(v) => self.technology = v,
            FieldEdit::Category(v) => self.category = v,
            FieldEdit::Manager(v) => self.manager = v,
            FieldEdit::Client(v) => self.client = v,
            FieldEdit::Partner(v) => self.partner = v,
            FieldEdit::BillingType(v) => self.billing_type = v,
            FieldEdit::Status(v) => self.status = v,
            FieldEdit::BudgetedHours(v) => self.budgeted_hours = v,
            FieldEdit::StartDate(v) => self.start_date = v,
            FieldEdit::EndDate(v) => self.end_date = v,
            FieldEdit::KeepResourcesAvailable(v) => self.keep_resources_available = Some(v),
        }
    }
}
