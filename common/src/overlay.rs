//! 全画面表示オーバーレイ
//!
//! ページ内に1つだけ存在し、最初に開いた時に作られて以後使い回す。
//! 開く時にページのスクロール状態（bodyのoverflow）を退避し、閉じる時に戻す。

/// 全画面オーバーレイ
#[derive(Debug, Clone, PartialEq)]
pub struct FullscreenOverlay {
    id: u32,
    image_src: Option<String>,
    saved_scroll: Option<String>,
}

impl FullscreenOverlay {
    pub(crate) fn new(id: u32) -> Self {
        Self { id, image_src: None, saved_scroll: None }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.image_src.is_some()
    }

    pub fn image_src(&self) -> Option<&str> {
        self.image_src.as_deref()
    }

    /// 開いている間の退避済みスクロール状態
    pub fn saved_scroll(&self) -> Option<&str> {
        self.saved_scroll.as_deref()
    }

    /// 画像を表示する
    ///
    /// `current_scroll` は開く直前のスクロール状態。
    /// 開いたまま別画像に切り替えた場合は最初の退避値を保持する。
    pub fn open(&mut self, src: impl Into<String>, current_scroll: impl Into<String>) {
        if self.saved_scroll.is_none() {
            self.saved_scroll = Some(current_scroll.into());
        }
        self.image_src = Some(src.into());
    }

    /// 閉じて、戻すべきスクロール状態を返す（開いていなければNone）
    pub fn close(&mut self) -> Option<String> {
        if self.image_src.take().is_none() {
            return None;
        }
        self.saved_scroll.take()
    }
}
