//! エラー型定義

use thiserror::Error;

/// APIゲートウェイのエラー
///
/// トランスポート失敗とサービス拒否はゲートウェイ内部でのみ区別され、
/// オーケストレーター側では同じエラー文字列チャネルに畳み込まれる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// fetch自体が失敗（ネットワーク到達不能・中断など）
    #[error("{0}")]
    Transport(String),

    /// サービスが非成功ステータスを返した（メッセージはエンドポイント固定）
    #[error("{message}")]
    Service { status: u16, message: String },

    /// レスポンスボディをJSONとして解釈できない
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// 非成功ステータス用のエラーを作る
    pub fn service(status: u16, message: &str) -> Self {
        ApiError::Service {
            status,
            message: message.to_string(),
        }
    }
}
