//! カルーセル（1枚ずつ表示するページング）
//!
//! 元画像と翻訳結果のペアを保持し、現在位置を端で止める（ループしない）。

use crate::error::{Error, Result};
use crate::types::{EncodedImage, TranslationResult};

/// 元画像と翻訳結果のペア
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselItem {
    pub original: EncodedImage,
    pub translated: TranslationResult,
}

impl CarouselItem {
    /// 1枚ずつ保存する時のファイル名（例: `translated_001.png`）
    pub fn download_name(&self) -> String {
        format!(
            "translated_{:03}.{}",
            self.translated.index + 1,
            self.translated.image.extension()
        )
    }

    /// `image_info` の表示用テキスト
    ///
    /// オブジェクトは `key: value` をカンマ区切り、文字列はそのまま。
    pub fn info_caption(&self) -> Option<String> {
        let info = self.translated.image_info.as_ref()?;
        let caption = match info {
            serde_json::Value::Null => return None,
            serde_json::Value::String(text) => text.clone(),
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(key, value)| match value {
                    serde_json::Value::String(text) => format!("{}: {}", key, text),
                    other => format!("{}: {}", key, other),
                })
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        };
        (!caption.is_empty()).then_some(caption)
    }
}

/// カルーセルの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Carousel {
    items: Vec<CarouselItem>,
    current: usize,
}

/// 矢印キー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Escape,
    Other,
}

impl NavKey {
    /// `KeyboardEvent.key` の値から変換
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "ArrowLeft" => NavKey::Left,
            "ArrowRight" => NavKey::Right,
            "Escape" | "Esc" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

impl Carousel {
    /// 送信順の元画像と翻訳結果をindexで突き合わせる
    ///
    /// 件数が合わない、またはindexが `0..N` をちょうど1回ずつ
    /// 覆っていない場合はバッチ全体を失敗扱いにする。
    pub fn from_results(
        originals: Vec<EncodedImage>,
        mut results: Vec<TranslationResult>,
    ) -> Result<Self> {
        let expected = originals.len();
        if results.len() != expected {
            return Err(Error::ResultMismatch { expected, got: results.len() });
        }

        results.sort_by_key(|r| r.index);
        if results.iter().enumerate().any(|(i, r)| r.index != i) {
            return Err(Error::ResultMismatch { expected, got: results.len() });
        }

        let items = originals
            .into_iter()
            .zip(results)
            .map(|(original, translated)| CarouselItem { original, translated })
            .collect();

        Ok(Self::display(items))
    }

    /// 表示内容を置き換え、先頭を表示する
    pub fn display(items: Vec<CarouselItem>) -> Self {
        Self { items, current: 0 }
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&CarouselItem> {
        self.items.get(self.current)
    }

    /// 表示中の1枚だけがtrue
    pub fn is_visible(&self, index: usize) -> bool {
        !self.items.is_empty() && index == self.current
    }

    /// 次へ。末尾では何もしない。移動したらtrue
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.items.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// 前へ。先頭では何もしない。移動したらtrue
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn previous_disabled(&self) -> bool {
        self.current == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.items.is_empty() || self.current == self.items.len() - 1
    }

    /// 位置表示（例: "1 / 3"）
    pub fn position_label(&self) -> String {
        if self.items.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current + 1, self.items.len())
    }

    /// 翻訳済み画像をindex順に取り出す
    pub fn translated_images(&self) -> Vec<EncodedImage> {
        self.items.iter().map(|item| item.translated.image.clone()).collect()
    }
}
