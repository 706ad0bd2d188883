//! 翻訳/一括ダウンロードボタン

use leptos::prelude::*;

use crate::app::SharedState;

#[component]
pub fn ExportButtons<FS, FD>(
    state: SharedState,
    on_submit: FS,
    on_download: FD,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="export-buttons">
            <Show when=move || state.with(|s| s.submit_visible())>
                <button
                    id="translateButton"
                    class="btn btn-primary"
                    disabled=move || !state.with(|s| s.submit_enabled())
                    on:click={
                        let on_submit = on_submit.clone();
                        move |_| on_submit(())
                    }
                >
                    "Translate"
                </button>
            </Show>

            <Show when=move || state.with(|s| s.results_visible())>
                <button
                    id="downloadAllButton"
                    class="btn btn-secondary"
                    on:click={
                        let on_download = on_download.clone();
                        move |_| on_download(())
                    }
                >
                    "Download all (ZIP)"
                </button>
            </Show>
        </div>
    }
}
