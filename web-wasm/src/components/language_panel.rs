//! 言語選択パネル

use leptos::prelude::*;
use manga_translate_common::{Language, SOURCE_LANGUAGES, TARGET_LANGUAGES};

use crate::app::SharedState;

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Source,
    Target,
}

#[component]
pub fn LanguagePanel(state: SharedState) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <LanguageSelect state=state side=Side::Source label="Source language" table=SOURCE_LANGUAGES />
                <LanguageSelect state=state side=Side::Target label="Target language" table=TARGET_LANGUAGES />
            </div>
        </div>
    }
}

#[component]
fn LanguageSelect(
    state: SharedState,
    side: Side,
    label: &'static str,
    table: &'static [Language],
) -> impl IntoView {
    let id = match side {
        Side::Source => "source-lang",
        Side::Target => "target-lang",
    };
    let current = move || {
        state.with(|s| match side {
            Side::Source => s.languages.source.clone(),
            Side::Target => s.languages.target.clone(),
        })
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                disabled=move || !state.with(|s| s.submit_visible())
                on:change=move |ev| {
                    let code = event_target_value(&ev);
                    state.update(|s| match side {
                        Side::Source => s.languages.source = code,
                        Side::Target => s.languages.target = code,
                    });
                }
            >
                {table
                    .iter()
                    .map(|lang| {
                        let code = lang.code;
                        view! {
                            <option value=code selected=move || current() == code>
                                {lang.name}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
