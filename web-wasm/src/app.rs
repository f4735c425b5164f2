//! SOWアナライザー メインコンポーネント
//!
//! ウィザード状態（[`Wizard`]）のシグナルを唯一の真実として所有し、
//! 各ステップビューへ必要なデータとコールバックだけを渡す。
//! ネットワーク呼び出しは begin→spawn→apply の三拍子:
//! 同期的にチケットとペイロードを確保し、fetch完了時に一度だけ適用する。

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use sow_analyzer_common::{FieldEdit, Stage, Wizard};

use crate::api;
use crate::components::{FormStep, LoaderOverlay, RecommendationsStep, UploadStep};
use crate::config::ApiConfig;

/// アプリケーションルート
#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(ApiConfig::from_window());
    // web_sys::Fileを含むためローカル（スレッド固定）ストレージに置く
    let wizard = RwSignal::new_local(Wizard::<File>::new());

    // 各ビューへ渡す読み取り専用の派生シグナル
    let stage = Memo::new(move |_| wizard.with(|w| w.stage()));
    let loading = Memo::new(move |_| wizard.with(|w| w.is_loading()));
    let error = Memo::new(move |_| wizard.with(|w| w.error().map(str::to_string)));
    let file_name = Memo::new(move |_| wizard.with(|w| w.selected_file().map(|f| f.name())));
    let form = Memo::new(move |_| wizard.with(|w| w.form().clone()));
    let recommendations = Memo::new(move |_| wizard.with(|w| w.recommendations().cloned()));

    let on_file_selected = move |file: File| {
        let mime_type = file.type_();
        wizard.update(|w| w.select_file(file, &mime_type));
    };

    let on_analyze = move |_: ()| {
        // チケットが取れないときはファイル未選択か進行中
        let pending = wizard
            .try_update(|w| {
                let ticket = w.begin_extraction()?;
                let file = w.selected_file().cloned()?;
                Some((ticket, file))
            })
            .flatten();
        let Some((ticket, file)) = pending else {
            return;
        };

        spawn_local(async move {
            let result = api::extract_sow(&config.get_value(), &file).await;
            if let Err(error) = &result {
                gloo::console::error!(format!("extract_sow failed: {}", error));
            }
            wizard.update(|w| w.apply_extraction(ticket, result));
        });
    };

    let on_edit = move |edit: FieldEdit| {
        wizard.update(|w| w.update_field(edit));
    };

    let on_submit = move |_: ()| {
        // 検証はbegin_recommendation内。失敗時はエラーが立ち、送信しない
        let pending = wizard
            .try_update(|w| {
                let ticket = w.begin_recommendation()?;
                Some((ticket, w.form().clone()))
            })
            .flatten();
        let Some((ticket, payload)) = pending else {
            return;
        };

        spawn_local(async move {
            let result = api::recommend_employees(&config.get_value(), &payload).await;
            if let Err(error) = &result {
                gloo::console::error!(format!("recommend_employees failed: {}", error));
            }
            wizard.update(|w| w.apply_recommendation(ticket, result));
        });
    };

    let on_reset = move |_: ()| {
        wizard.update(|w| w.reset());
    };

    let loader_message = Signal::derive(move || {
        match stage.get() {
            Stage::Upload => "Analyzing SOW...",
            _ => "Fetching Recommendations...",
        }
        .to_string()
    });

    view! {
        <div class="container">
            {move || match stage.get() {
                Stage::Upload => view! {
                    <UploadStep
                        file_name=file_name
                        error=error
                        loading=loading
                        on_file_selected=on_file_selected
                        on_analyze=on_analyze
                    />
                }.into_any(),
                Stage::Form => view! {
                    <FormStep
                        form=form
                        loading=loading
                        error=error
                        on_edit=on_edit
                        on_submit=on_submit
                        on_cancel=on_reset
                    />
                }.into_any(),
                Stage::Recommendations => view! {
                    <RecommendationsStep
                        recommendations=recommendations
                        on_reset=on_reset
                    />
                }.into_any(),
            }}

            <Show when=move || loading.get()>
                <LoaderOverlay message=loader_message />
            </Show>
        </div>
    }
}
