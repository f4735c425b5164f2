//! バックエンドAPIゲートウェイ

pub mod sow;

pub use sow::{extract_sow, recommend_employees};
