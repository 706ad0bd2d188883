//! アップロードエリアコンポーネント
//!
//! ファイル選択ダイアログまたはドラッグ&ドロップで画像を選ぶ。
//! 選び直すたびに選択は丸ごと置き換わる。

use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

use crate::app::SharedState;

fn files_from_list(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn UploadArea<F>(
    state: SharedState,
    preview_url: ReadSignal<Option<String>>,
    on_files_selected: F,
) -> impl IntoView
where
    F: Fn(Vec<File>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let is_enabled = move || state.with(|s| s.submit_visible());

    let on_drop = {
        let on_files_selected = on_files_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !is_enabled() {
                return;
            }

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                on_files_selected(files_from_list(files));
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if is_enabled() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            on_files_selected(files_from_list(files));
        }
    };

    let selected_label = move || {
        state.with(|s| match s.selection().len() {
            0 => "No file selected".to_string(),
            1 => "1 image selected".to_string(),
            n => format!("{} images selected", n),
        })
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if !is_enabled() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <label class="upload-label">
                <div class="upload-icon">"📖"</div>
                <p>"Drop manga pages here or click to choose"</p>
                <p class="text-muted">"JPEG, PNG, WebP"</p>
                <input
                    id="fileInput"
                    type="file"
                    accept="image/*"
                    multiple=true
                    disabled=move || !is_enabled()
                    on:change=on_change
                />
            </label>
            <p class="selection-count">{selected_label}</p>

            <Show when=move || preview_url.get().is_some()>
                <img
                    class="input-preview"
                    alt="Selected image preview"
                    src=move || preview_url.get().unwrap_or_default()
                />
            </Show>
        </div>
    }
}
