//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Manga Translator"</h1>
            <p class="text-muted">"Upload manga pages and get them translated in one batch"</p>
        </header>
    }
}
