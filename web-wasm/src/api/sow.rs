//! SOW抽出・社員推薦API呼び出し
//!
//! - extract_sow: PDFをmultipartで送り、抽出結果のJSONマップを受け取る
//! - recommend_employees: フォーム全体をJSONで送り、推薦ペイロードを受け取る
//!
//! どちらもBearer認証付き。トランスポート失敗と非成功ステータスは
//! [`ApiError`]で区別して返す（上流では同じエラー欄に畳まれる）。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use serde_json::{Map, Value};
use sow_analyzer_common::{ApiError, ProjectForm};

use crate::config::ApiConfig;

const EXTRACT_ENDPOINT: &str = "/extract_sow";
const RECOMMEND_ENDPOINT: &str = "/recommend_employees_clean";

const EXTRACT_REJECTED: &str = "Failed to extract SOW data";
const RECOMMEND_REJECTED: &str = "Failed to get recommendations";

/// SOW抽出の実行
///
/// Content-Typeは設定しない（multipart境界はブラウザが付与する）。
pub async fn extract_sow(config: &ApiConfig, file: &File) -> Result<Map<String, Value>, ApiError> {
    let form = FormData::new().map_err(transport)?;
    form.append_with_blob("file", file).map_err(transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&config.endpoint_url(EXTRACT_ENDPOINT), &opts)
        .map_err(transport)?;
    set_bearer(&request, &config.token)?;

    let body = send(request, EXTRACT_REJECTED).await?;
    match body {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::Decode(format!(
            "expected JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// 社員推薦の実行。フォームレコード全体がペイロード。
pub async fn recommend_employees(
    config: &ApiConfig,
    form_data: &ProjectForm,
) -> Result<Value, ApiError> {
    let body = serde_json::to_string(form_data).map_err(|e| ApiError::Decode(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&config.endpoint_url(RECOMMEND_ENDPOINT), &opts)
        .map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;
    set_bearer(&request, &config.token)?;

    send(request, RECOMMEND_REJECTED).await
}

/// リクエスト送信の共通処理
///
/// fetch拒否→Transport、非成功ステータス→Service（固定メッセージ）、
/// ボディのJSON解釈失敗→Decode。
async fn send(request: Request, rejection_message: &str) -> Result<Value, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Transport("window unavailable".to_string()))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("unexpected fetch result".to_string()))?;

    if !response.ok() {
        return Err(ApiError::service(response.status(), rejection_message));
    }

    let json_promise = response.json().map_err(transport)?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

fn set_bearer(request: &Request, token: &str) -> Result<(), ApiError> {
    request
        .headers()
        .set("Authorization", &format!("Bearer {}", token))
        .map_err(transport)
}

fn transport(error: JsValue) -> ApiError {
    ApiError::Transport(js_message(&error))
}

/// JsValueからエラーメッセージを取り出す
pub fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
