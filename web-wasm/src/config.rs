//! API設定
//!
//! ベースURLとBearerトークンは起動時に一度だけ解決し、以後は読み取り専用。
//! ホストページが `window.SOW_API_BASE_URL` / `window.SOW_API_TOKEN` に
//! 注入する想定。

use wasm_bindgen::JsValue;

/// 読み取り専用のAPI設定
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// 未設定なら同一オリジン配信とみなす
    pub base_url: Option<String>,
    pub token: String,
}

impl ApiConfig {
    /// windowグローバルから読み込む
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        Self {
            base_url: read_global(&window, "SOW_API_BASE_URL"),
            token: read_global(&window, "SOW_API_TOKEN").unwrap_or_default(),
        }
    }

    /// エンドポイントの完全URLを組み立てる
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        build_api_url(self.base_url.as_deref(), endpoint)
    }
}

/// ベースURLとエンドポイントパスを連結する。ベース未設定ならパスのまま
pub fn build_api_url(base_url: Option<&str>, endpoint: &str) -> String {
    match base_url {
        Some(base) => format!("{}{}", base, endpoint),
        None => endpoint.to_string(),
    }
}

fn read_global(window: &web_sys::Window, name: &str) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(name)).ok()?;
    normalize_setting(value.as_string()?)
}

/// 空文字・"null"・"undefined"はいずれも未設定扱い
fn normalize_setting(value: String) -> Option<String> {
    match value.as_str() {
        "" | "null" | "undefined" => None,
        _ => Some(value),
    }
}
