//! プログレスバーコンポーネント

use leptos::prelude::*;
use manga_translate_common::Phase;

use crate::app::SharedState;

#[component]
pub fn ProgressBar(state: SharedState) -> impl IntoView {
    let counts = move || {
        state.with(|s| match s.phase() {
            Phase::Loading { current, total } => (current, total),
            _ => (0, 0),
        })
    };
    let ratio = move || {
        let (current, total) = counts();
        if total == 0 {
            0.0
        } else {
            current as f32 / total as f32
        }
    };

    view! {
        <div class="progress-container" id="spinner">
            <div class="spinner" />
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", ratio() * 100.0)
                />
            </div>
            <p class="progress-text">
                "Processing image "
                <span id="currentImage">{move || counts().0}</span>
                " of "
                <span id="totalImages">{move || counts().1}</span>
            </p>
        </div>
    }
}
