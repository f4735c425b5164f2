//! ローディングオーバーレイ

use leptos::prelude::*;

#[component]
pub fn LoaderOverlay(message: Signal<String>) -> impl IntoView {
    view! {
        <div class="loader-overlay">
            <div class="loader-spinner"></div>
            <p class="loader-message">{move || message.get()}</p>
        </div>
    }
}
