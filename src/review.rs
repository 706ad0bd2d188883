//! 対話式の結果確認（カルーセル）
//!
//! 1枚ずつ表示し、前へ/次へで移動する。端では該当する操作を出さない。

use crate::error::{Result, TranslateError};
use crate::scanner::ImageFile;
use dialoguer::Select;
use manga_translate_common::{AppState, Carousel, NavKey};
use std::path::PathBuf;

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    /// 前の画像へ
    Previous,
    /// 次の画像へ
    Next,
    /// 終了
    Quit,
}

impl ReviewAction {
    fn label(&self) -> &'static str {
        match self {
            ReviewAction::Previous => "← 前へ",
            ReviewAction::Next => "次へ →",
            ReviewAction::Quit => "終了",
        }
    }

    fn key(&self) -> NavKey {
        match self {
            ReviewAction::Previous => NavKey::Left,
            ReviewAction::Next => NavKey::Right,
            ReviewAction::Quit => NavKey::Other,
        }
    }
}

/// 現在位置で選べる操作
pub fn available_actions(carousel: &Carousel) -> Vec<ReviewAction> {
    let mut actions = Vec::new();
    if !carousel.next_disabled() {
        actions.push(ReviewAction::Next);
    }
    if !carousel.previous_disabled() {
        actions.push(ReviewAction::Previous);
    }
    actions.push(ReviewAction::Quit);
    actions
}

pub fn run_review(state: &mut AppState<ImageFile>, written: &[PathBuf]) -> Result<()> {
    loop {
        let Some(carousel) = state.carousel() else {
            println!("表示できる結果がありません");
            return Ok(());
        };

        let index = carousel.current_index();
        let source = state
            .selection()
            .files()
            .get(index)
            .map(|f| f.path.display().to_string())
            .unwrap_or_default();
        let translated = written
            .get(index)
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        println!("\n[{}]", carousel.position_label());
        println!("  元画像: {}", source);
        println!("  翻訳後: {}", translated);
        if let Some(info) = carousel.current().and_then(|item| item.info_caption()) {
            println!("  情報:   {}", info);
        }

        let actions = available_actions(carousel);
        let labels: Vec<_> = actions.iter().map(ReviewAction::label).collect();
        let choice = Select::new()
            .with_prompt("操作")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| TranslateError::Prompt(e.to_string()))?;

        match actions[choice] {
            ReviewAction::Quit => return Ok(()),
            action => {
                state.on_key(action.key());
            }
        }
    }
}
