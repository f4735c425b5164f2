//! SOW Analyzer Common Library
//!
//! Web(WASM)フロントエンドと共有されるコア:
//! - wizard: ステップオーケストレーター（状態機械）
//! - validator: 必須フィールド検証
//! - mapping: 抽出レスポンス→フォーム導出
//! - normalizer: フィールド正規化

pub mod error;
pub mod mapping;
pub mod normalizer;
pub mod types;
pub mod validator;
pub mod wizard;

pub use error::ApiError;
pub use mapping::form_from_extraction;
pub use types::{FieldEdit, ProjectForm, Stage, PDF_MIME_TYPE, PDF_REQUIRED_MESSAGE};
pub use validator::{validate, ValidationError};
pub use wizard::{RequestTicket, Wizard};
