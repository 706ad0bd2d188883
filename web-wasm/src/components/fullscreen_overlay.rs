//! 全画面表示オーバーレイ
//!
//! 最初に画像をクリックした時に1度だけ描画し、以後は表示/非表示を切り替える。
//! 開いている間はbodyのスクロールを止め、閉じたら元のoverflowに戻す。

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::app::SharedState;

fn body_style() -> Option<web_sys::CssStyleDeclaration> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|b| b.style())
}

fn body_overflow() -> String {
    body_style()
        .and_then(|s| s.get_property_value("overflow").ok())
        .unwrap_or_default()
}

fn set_body_overflow(value: &str) {
    if let Some(style) = body_style() {
        let _ = style.set_property("overflow", value);
    }
}

pub fn open_fullscreen(state: SharedState, src: String) {
    let current = body_overflow();
    state.update(|s| {
        s.open_fullscreen(src, current);
    });
    set_body_overflow("hidden");
}

/// 状態側で閉じた後にbodyのoverflowを戻す
pub fn restore_body_overflow(saved: &str) {
    set_body_overflow(saved);
}

pub fn close_fullscreen(state: SharedState) {
    let is_open = state.with_untracked(|s| s.overlay().is_some_and(|o| o.is_open()));
    if !is_open {
        return;
    }
    if let Some(saved) = state.try_update(|s| s.close_fullscreen()).flatten() {
        set_body_overflow(&saved);
    }
}

#[component]
pub fn FullscreenOverlay(state: SharedState) -> impl IntoView {
    let created = move || state.with(|s| s.overlay().is_some());
    let is_open = move || state.with(|s| s.overlay().is_some_and(|o| o.is_open()));
    let image_src = move || {
        state.with(|s| {
            s.overlay()
                .and_then(|o| o.image_src())
                .map(str::to_string)
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=created>
            <div
                class="fullscreen-overlay"
                style:display=move || if is_open() { "flex" } else { "none" }
                on:click=move |_| close_fullscreen(state)
            >
                <button
                    class="fullscreen-close"
                    aria-label="Close"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        close_fullscreen(state);
                    }
                >
                    "×"
                </button>
                <img
                    class="fullscreen-image"
                    src=image_src
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}
