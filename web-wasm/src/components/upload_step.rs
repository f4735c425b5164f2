//! アップロードステップ

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn UploadStep<FS, FA>(
    file_name: Memo<Option<String>>,
    error: Memo<Option<String>>,
    loading: Memo<bool>,
    on_file_selected: FS,
    on_analyze: FA,
) -> impl IntoView
where
    FS: Fn(File) + Clone + Send + Sync + 'static,
    FA: Fn(()) + Clone + Send + Sync + 'static,
{
    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                on_file_selected(file);
            }
        }
    };

    view! {
        <div class="upload-step">
            <h1>"SOW Analyzer"</h1>
            <p class="text-muted">"Upload a Statement of Work to build a project record"</p>

            <div class="upload-area">
                <input
                    type="file"
                    id="sow-file"
                    accept="application/pdf"
                    on:change=on_change
                />
                <Show when=move || file_name.get().is_some()>
                    <p class="file-name">{move || file_name.get().unwrap_or_default()}</p>
                </Show>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-box">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <button
                class="btn btn-primary"
                disabled=move || file_name.get().is_none() || loading.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if loading.get() { "Analyzing..." } else { "Analyze SOW" }}
            </button>
        </div>
    }
}
