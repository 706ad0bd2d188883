//! 翻訳結果カルーセル
//!
//! 元画像と翻訳後画像のペアを1組ずつ表示する。前へ/次へは端で止まる。

use gloo::console;
use leptos::prelude::*;
use manga_translate_common::{CarouselItem, Error};

use crate::app::{flush_alert, SharedState};
use crate::components::fullscreen_overlay::open_fullscreen;
use crate::export::save_bytes;

/// 翻訳後画像を1枚だけ保存する
fn save_translated(state: SharedState, item: &CarouselItem) {
    let image = &item.translated.image;
    let saved = image.decode().and_then(|bytes| {
        save_bytes(&bytes, &item.download_name(), image.mime_type())
            .map_err(|e| Error::Export(format!("{:?}", e)))
    });

    if let Err(e) = saved {
        console::error!(format!("download failed: {}", e));
        state.update(|s| s.export_failed(&e));
        flush_alert(state);
    }
}

#[component]
pub fn Carousel(state: SharedState) -> impl IntoView {
    let items = move || {
        state.with(|s| {
            s.carousel()
                .map(|c| c.items().iter().cloned().enumerate().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let previous_disabled = move || state.with(|s| s.carousel().map_or(true, |c| c.previous_disabled()));
    let next_disabled = move || state.with(|s| s.carousel().map_or(true, |c| c.next_disabled()));
    let position = move || state.with(|s| s.carousel().map(|c| c.position_label()).unwrap_or_default());

    view! {
        <div class="carousel">
            <div class="carousel-items">
                <For
                    each=items
                    key=|(index, _)| *index
                    children=move |(index, item)| {
                        view! { <CarouselSlide state=state index=index item=item /> }
                    }
                />
            </div>

            <div class="carousel-controls">
                <button
                    id="prevButton"
                    class="btn btn-small btn-secondary"
                    disabled=previous_disabled
                    on:click=move |_| {
                        state.update(|s| {
                            s.previous();
                        });
                    }
                >
                    "← Previous"
                </button>
                <span class="carousel-position">{position}</span>
                <button
                    id="nextButton"
                    class="btn btn-small btn-secondary"
                    disabled=next_disabled
                    on:click=move |_| {
                        state.update(|s| {
                            s.next();
                        });
                    }
                >
                    "Next →"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CarouselSlide(state: SharedState, index: usize, item: CarouselItem) -> impl IntoView {
    let is_visible = move || state.with(|s| s.carousel().is_some_and(|c| c.is_visible(index)));
    let original_src = item.original.to_data_url();
    let translated_src = item.translated.image.to_data_url();
    let original_full = original_src.clone();
    let translated_full = translated_src.clone();
    let caption = item.info_caption();
    let download_label = format!("Download {}", item.download_name());

    view! {
        <div
            class="carousel-item"
            class:active=is_visible
            style:display=move || if is_visible() { "flex" } else { "none" }
        >
            <figure>
                <img
                    src=original_src
                    alt=format!("Original image {}", index + 1)
                    on:click=move |_| open_fullscreen(state, original_full.clone())
                />
                <figcaption>"Original"</figcaption>
            </figure>
            <figure>
                <img
                    src=translated_src
                    alt=format!("Translated image {}", index + 1)
                    on:click=move |_| open_fullscreen(state, translated_full.clone())
                />
                <figcaption>"Translated"</figcaption>
                {caption.map(|text| view! { <p class="image-info">{text}</p> })}
                <button
                    class="btn btn-small btn-secondary download-one"
                    title=download_label
                    on:click=move |_| save_translated(state, &item)
                >
                    "Download this image"
                </button>
            </figure>
        </div>
    }
}
