//! 必須フィールド検証
//!
//! 推薦リクエスト前に固定順で検査する。最初の不備で打ち切り（fail-fast）。
//! keepResourcesAvailableはbool型なので、falseは「未回答」ではない。

use thiserror::Error;

use crate::types::ProjectForm;

/// 検証エラー。Displayがそのままユーザー向けメッセージになる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out the \"{0}\" field.")]
    MissingField(&'static str),

    #[error("Please add at least one technology.")]
    EmptyTechnology,
}

/// フォームを固定順で検証する
pub fn validate(form: &ProjectForm) -> Result<(), ValidationError> {
    let scalar_fields: [(&'static str, &str); 11] = [
        ("name", &form.name),
        ("manager", &form.manager),
        ("client", &form.client),
        ("partner", &form.partner),
        ("status", &form.status),
        ("practice", &form.practice),
        ("category", &form.category),
        ("billingType", &form.billing_type),
        ("budgetedHours", &form.budgeted_hours),
        ("startDate", &form.start_date),
        ("endDate", &form.end_date),
    ];

    for (key, value) in scalar_fields {
        if value.is_empty() {
            return Err(ValidationError::MissingField(key));
        }
    }

    if form.keep_resources_available.is_none() {
        return Err(ValidationError::MissingField("keepResourcesAvailable"));
    }

    if form.technology.is_empty() {
        return Err(ValidationError::EmptyTechnology);
    }

    Ok(())
}
