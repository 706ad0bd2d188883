//! メインアプリケーションコンポーネント
//!
//! 状態は `AppState<File>` 1つにまとめ、ローカルシグナルで持つ
//! （`web_sys::File` は `Send` でないため）。

use gloo::console;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use manga_translate_common::{download_all, run_batch, AppState, Error, NavKey, ZIP_FILE_NAME};
use web_sys::{File, Url};

use crate::api::{FetchBackend, FileEncoder};
use crate::components::{
    carousel::Carousel,
    export_buttons::ExportButtons,
    fullscreen_overlay::{close_fullscreen, restore_body_overflow, FullscreenOverlay},
    header::Header,
    language_panel::LanguagePanel,
    progress_bar::ProgressBar,
    upload_area::UploadArea,
};
use crate::export::{download::ZIP_MIME, save_bytes};

/// 画面全体で共有する状態
pub type SharedState = RwSignal<AppState<File>, LocalStorage>;

/// 溜まっている通知を alert で表示する
pub fn flush_alert(state: SharedState) {
    if let Some(message) = state.try_update(|s| s.take_alert()).flatten() {
        gloo::dialogs::alert(&message);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state: SharedState = RwSignal::new_local(AppState::default());
    let (preview_url, set_preview_url) = signal(None::<String>);

    // 矢印キーはResults表示中のみ、Escapeは全画面を閉じる
    let _keys = window_event_listener(ev::keydown, move |ev| {
        match NavKey::from_key_name(&ev.key()) {
            NavKey::Escape => close_fullscreen(state),
            key @ (NavKey::Left | NavKey::Right) => {
                if state.with_untracked(|s| s.results_visible()) {
                    state.update(|s| {
                        s.on_key(key);
                    });
                }
            }
            NavKey::Other => {}
        }
    });

    // ファイル選択ハンドラ（空の選択では何も変えない）
    let on_files_selected = move |files: Vec<File>| {
        let selected = state.try_update(|s| {
            let saved = s.overlay().and_then(|o| o.saved_scroll()).map(str::to_string);
            s.on_file_selection_changed(files)
                .map(|first| (first.cloned(), saved))
        });
        flush_alert(state);

        let Some(Ok((first, saved))) = selected else {
            return;
        };
        if let Some(saved) = saved {
            restore_body_overflow(&saved);
        }

        if let Some(file) = first {
            if let Some(old) = preview_url.get_untracked() {
                let _ = Url::revoke_object_url(&old);
            }
            set_preview_url.set(Url::create_object_url_with_blob(&file).ok());
        }
    };

    // 翻訳ハンドラ
    let on_submit = move |_| {
        close_fullscreen(state);
        let Some(ticket) = state.try_update(|s| s.begin_submit().ok()).flatten() else {
            flush_alert(state);
            return;
        };
        let (files, languages) =
            state.with_untracked(|s| (s.selection().files().to_vec(), s.languages.clone()));

        spawn_local(async move {
            let backend = FetchBackend::same_origin();
            let outcome = run_batch(&files, &languages, &FileEncoder, &backend, |current, _| {
                state.update(|s| {
                    s.record_progress(&ticket, current);
                });
            })
            .await;

            state.update(|s| match outcome {
                Ok(batch) => {
                    if let Err(e) = s.finish_submit(&ticket, batch.originals, batch.results) {
                        console::warn!(format!("results discarded: {}", e));
                    }
                }
                Err(e) => {
                    console::error!(format!("translation failed: {}", e));
                    s.fail_submit(&ticket, &e);
                }
            });
            flush_alert(state);
        });
    };

    // 一括ダウンロードハンドラ
    let on_download = move |_| {
        let Some(carousel) = state.with_untracked(|s| s.carousel().cloned()) else {
            return;
        };

        spawn_local(async move {
            let backend = FetchBackend::same_origin();
            let saved = match download_all(&backend, &carousel).await {
                Ok(bytes) => save_bytes(&bytes, ZIP_FILE_NAME, ZIP_MIME)
                    .map_err(|e| Error::Export(format!("{:?}", e))),
                Err(e) => Err(e),
            };

            if let Err(e) = saved {
                console::error!(format!("download failed: {}", e));
                state.update(|s| s.export_failed(&e));
                flush_alert(state);
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <LanguagePanel state=state />

            <UploadArea
                state=state
                preview_url=preview_url
                on_files_selected=on_files_selected
            />

            <Show when=move || state.with(|s| s.progress_visible())>
                <ProgressBar state=state />
            </Show>

            <ExportButtons
                state=state
                on_submit=on_submit
                on_download=on_download
            />

            <Show when=move || state.with(|s| s.results_visible())>
                <Carousel state=state />
            </Show>

            <FullscreenOverlay state=state />
        </div>
    }
}
