//! アプリケーション状態
//!
//! 画面状態は `Idle → Loading → Results` の3段階。
//! 送信のたびに世代番号を進め、古い世代の応答は捨てる。

use log::{debug, info};

use crate::carousel::{Carousel, NavKey};
use crate::error::{Error, Result};
use crate::language::LanguagePair;
use crate::overlay::FullscreenOverlay;
use crate::selection::SelectionSet;
use crate::types::{EncodedImage, TranslationResult};

/// 画面状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading { current: usize, total: usize },
    Results,
}

/// 送信1回分の引換券
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    total: usize,
}

/// アプリケーションの状態
#[derive(Debug, Clone)]
pub struct AppState<F> {
    selection: SelectionSet<F>,
    pub languages: LanguagePair,
    phase: Phase,
    carousel: Option<Carousel>,
    overlay: Option<FullscreenOverlay>,
    overlays_created: u32,
    generation: u64,
    alert: Option<String>,
}

impl<F> Default for AppState<F> {
    fn default() -> Self {
        Self {
            selection: SelectionSet::default(),
            languages: LanguagePair::default(),
            phase: Phase::Idle,
            carousel: None,
            overlay: None,
            overlays_created: 0,
            generation: 0,
            alert: None,
        }
    }
}

impl<F> AppState<F> {
    pub fn new(languages: LanguagePair) -> Self {
        Self { languages, ..Self::default() }
    }

    pub fn selection(&self) -> &SelectionSet<F> {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn overlay(&self) -> Option<&FullscreenOverlay> {
        self.overlay.as_ref()
    }

    pub fn overlays_created(&self) -> u32 {
        self.overlays_created
    }

    /// 未表示の通知を取り出す
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    // ============================================
    // ボタン等の表示状態
    // ============================================

    pub fn submit_visible(&self) -> bool {
        !matches!(self.phase, Phase::Loading { .. })
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_visible() && !self.selection.is_empty()
    }

    pub fn progress_visible(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn results_visible(&self) -> bool {
        self.phase == Phase::Results
    }

    /// 進捗表示（例: "2/3"）
    pub fn progress_label(&self) -> Option<String> {
        match self.phase {
            Phase::Loading { current, total } => Some(format!("{}/{}", current, total)),
            _ => None,
        }
    }

    // ============================================
    // UploadController
    // ============================================

    /// ファイル選択の変更
    ///
    /// 選択を丸ごと置き換え、結果をクリアする。進行中の送信は古い世代になる。
    /// 空の選択は通知のみで状態は変えない。成功時はプレビュー用に先頭を返す。
    pub fn on_file_selection_changed(&mut self, files: Vec<F>) -> Result<Option<&F>> {
        if files.is_empty() {
            self.alert = Some(Error::NoSelection.user_message());
            return Err(Error::NoSelection);
        }

        debug!("selection changed: {} files", files.len());
        self.generation += 1;
        self.selection = SelectionSet::new(files);
        self.carousel = None;
        self.close_fullscreen();
        self.phase = Phase::Idle;
        Ok(self.selection.first())
    }

    /// 送信開始（Loadingへ）
    pub fn begin_submit(&mut self) -> Result<SubmitTicket> {
        if self.selection.is_empty() {
            self.alert = Some(Error::NoSelection.user_message());
            return Err(Error::NoSelection);
        }
        if !self.languages.is_complete() {
            self.languages = LanguagePair::default();
        }

        self.generation += 1;
        let total = self.selection.len();
        self.carousel = None;
        self.close_fullscreen();
        self.phase = Phase::Loading { current: 0, total };
        info!("submit: generation {} with {} images", self.generation, total);

        Ok(SubmitTicket { generation: self.generation, total })
    }

    fn is_current(&self, ticket: &SubmitTicket) -> bool {
        ticket.generation == self.generation && matches!(self.phase, Phase::Loading { .. })
    }

    /// エンコード進捗の更新（古い世代は無視）
    pub fn record_progress(&mut self, ticket: &SubmitTicket, current: usize) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = Phase::Loading { current: current.min(ticket.total), total: ticket.total };
        true
    }

    /// 成功応答の反映（Resultsへ）
    ///
    /// 結果の件数やindexが合わない場合は失敗と同じ扱いでIdleへ戻す。
    pub fn finish_submit(
        &mut self,
        ticket: &SubmitTicket,
        originals: Vec<EncodedImage>,
        results: Vec<TranslationResult>,
    ) -> Result<()> {
        if !self.is_current(ticket) {
            debug!("discarding stale response for generation {}", ticket.generation);
            return Err(Error::StaleSubmission);
        }

        match Carousel::from_results(originals, results) {
            Ok(carousel) => {
                info!("submit: {} results ready", carousel.len());
                self.carousel = Some(carousel);
                self.phase = Phase::Results;
                Ok(())
            }
            Err(e) => {
                self.fail_submit(ticket, &e);
                Err(e)
            }
        }
    }

    /// 失敗の反映（通知してIdleへ、選択は保持）
    pub fn fail_submit(&mut self, ticket: &SubmitTicket, error: &Error) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        info!("submit failed: {}", error);
        self.alert = Some(error.user_message());
        self.carousel = None;
        self.phase = Phase::Idle;
        true
    }

    // ============================================
    // CarouselViewer
    // ============================================

    pub fn next(&mut self) -> bool {
        match (&self.phase, self.carousel.as_mut()) {
            (Phase::Results, Some(carousel)) => carousel.next(),
            _ => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match (&self.phase, self.carousel.as_mut()) {
            (Phase::Results, Some(carousel)) => carousel.previous(),
            _ => false,
        }
    }

    /// キー入力。矢印はResults表示中のみ、Escapeは全画面を閉じる
    pub fn on_key(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::Left => self.previous(),
            NavKey::Right => self.next(),
            NavKey::Escape => self.close_fullscreen().is_some(),
            NavKey::Other => false,
        }
    }

    /// 全画面表示を開く（オーバーレイは最初の1回だけ作る）
    pub fn open_fullscreen(&mut self, src: impl Into<String>, current_scroll: impl Into<String>) -> u32 {
        let created = &mut self.overlays_created;
        let overlay = self.overlay.get_or_insert_with(|| {
            *created += 1;
            FullscreenOverlay::new(*created)
        });
        overlay.open(src, current_scroll);
        overlay.id()
    }

    /// 全画面表示を閉じ、戻すべきスクロール状態を返す
    pub fn close_fullscreen(&mut self) -> Option<String> {
        self.overlay.as_mut().and_then(FullscreenOverlay::close)
    }

    // ============================================
    // ExportAgent
    // ============================================

    /// ダウンロード失敗の通知（Resultsのまま）
    pub fn export_failed(&mut self, error: &Error) {
        self.alert = Some(Error::Export(error.to_string()).user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(n: usize) -> Vec<TranslationResult> {
        (0..n)
            .map(|i| TranslationResult {
                index: i,
                image: EncodedImage::new(format!("translated{}", i)),
                image_info: None,
            })
            .collect()
    }

    fn originals(n: usize) -> Vec<EncodedImage> {
        (0..n).map(|i| EncodedImage::new(format!("original{}", i))).collect()
    }

    fn state_with(files: &[&'static str]) -> AppState<&'static str> {
        let mut state = AppState::default();
        state.on_file_selection_changed(files.to_vec()).unwrap();
        state
    }

    #[test]
    fn test_initial_state_disables_submit() {
        let state: AppState<&str> = AppState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.submit_visible());
        assert!(!state.submit_enabled());
        assert!(!state.progress_visible());
    }

    #[test]
    fn test_empty_selection_alerts_without_change() {
        let mut state = state_with(&["a.jpg"]);
        let err = state.on_file_selection_changed(Vec::new()).unwrap_err();

        assert!(matches!(err, Error::NoSelection));
        assert_eq!(state.selection().files(), &["a.jpg"]);
        assert_eq!(state.take_alert().as_deref(), Some(crate::error::NO_SELECTION_MESSAGE));
    }

    #[test]
    fn test_empty_selection_keeps_fullscreen_open() {
        let mut state = state_with(&["a.jpg"]);
        state.open_fullscreen("img-a", "auto");

        assert!(state.on_file_selection_changed(Vec::new()).is_err());
        let overlay = state.overlay().unwrap();
        assert!(overlay.is_open());
        assert_eq!(overlay.saved_scroll(), Some("auto"));
    }

    #[test]
    fn test_selection_returns_first_for_preview() {
        let mut state = AppState::default();
        let first = state.on_file_selection_changed(vec!["p1.png", "p2.png"]).unwrap();
        assert_eq!(first, Some(&"p1.png"));
        assert!(state.submit_enabled());
    }

    #[test]
    fn test_begin_submit_enters_loading() {
        let mut state = state_with(&["a", "b", "c"]);
        let ticket = state.begin_submit().unwrap();

        assert_eq!(ticket, SubmitTicket { generation: state.generation, total: 3 });
        assert!(!state.submit_visible());
        assert!(state.progress_visible());
        assert_eq!(state.progress_label().as_deref(), Some("0/3"));

        assert!(state.record_progress(&ticket, 2));
        assert_eq!(state.progress_label().as_deref(), Some("2/3"));
    }

    #[test]
    fn test_begin_submit_empty_selection() {
        let mut state: AppState<&str> = AppState::default();
        assert!(matches!(state.begin_submit(), Err(Error::NoSelection)));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.take_alert().is_some());
    }

    #[test]
    fn test_finish_submit_builds_carousel() {
        let mut state = state_with(&["a", "b", "c"]);
        let ticket = state.begin_submit().unwrap();
        state.finish_submit(&ticket, originals(3), results(3)).unwrap();

        assert_eq!(state.phase(), Phase::Results);
        assert!(state.results_visible());
        let carousel = state.carousel().unwrap();
        assert_eq!(carousel.len(), 3);
        assert_eq!(carousel.position_label(), "1 / 3");
    }

    #[test]
    fn test_failed_submit_keeps_selection() {
        let mut state = state_with(&["a", "b", "c"]);
        let ticket = state.begin_submit().unwrap();
        let error = Error::Server { status: 500, message: Some("translation failed".into()) };

        assert!(state.fail_submit(&ticket, &error));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.submit_visible());
        assert!(!state.progress_visible());
        assert_eq!(state.selection().files(), &["a", "b", "c"]);
        assert_eq!(state.take_alert().as_deref(), Some("translation failed"));
    }

    #[test]
    fn test_mismatched_results_fail_whole_batch() {
        let mut state = state_with(&["a", "b"]);
        let ticket = state.begin_submit().unwrap();
        let err = state.finish_submit(&ticket, originals(2), results(1)).unwrap_err();

        assert!(matches!(err, Error::ResultMismatch { .. }));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.carousel().is_none());
        assert_eq!(state.take_alert().as_deref(), Some(crate::error::GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = state_with(&["old1", "old2"]);
        let stale = state.begin_submit().unwrap();

        // 送信中に選択し直す
        state.on_file_selection_changed(vec!["new"]).unwrap();

        assert!(!state.record_progress(&stale, 1));
        let err = state.finish_submit(&stale, originals(2), results(2)).unwrap_err();
        assert!(matches!(err, Error::StaleSubmission));
        assert!(!state.fail_submit(&stale, &Error::Transport("late".into())));

        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.carousel().is_none());
        assert_eq!(state.selection().files(), &["new"]);
        assert!(state.take_alert().is_none());
    }

    #[test]
    fn test_second_submit_supersedes_first() {
        let mut state = state_with(&["a"]);
        let first = state.begin_submit().unwrap();
        let second = state.begin_submit().unwrap();

        assert!(state.finish_submit(&first, originals(1), results(1)).is_err());
        assert!(state.finish_submit(&second, originals(1), results(1)).is_ok());
    }

    #[test]
    fn test_new_selection_clears_results() {
        let mut state = state_with(&["a"]);
        let ticket = state.begin_submit().unwrap();
        state.finish_submit(&ticket, originals(1), results(1)).unwrap();

        state.on_file_selection_changed(vec!["b", "c"]).unwrap();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.carousel().is_none());
    }

    #[test]
    fn test_arrow_keys_only_in_results() {
        let mut state = state_with(&["a", "b"]);
        assert!(!state.on_key(NavKey::Right));

        let ticket = state.begin_submit().unwrap();
        assert!(!state.on_key(NavKey::Right));

        state.finish_submit(&ticket, originals(2), results(2)).unwrap();
        assert!(state.on_key(NavKey::Right));
        assert_eq!(state.carousel().unwrap().current_index(), 1);
        assert!(!state.on_key(NavKey::Right));
        assert!(state.on_key(NavKey::Left));
        assert!(!state.on_key(NavKey::Other));
    }

    #[test]
    fn test_overlay_created_once_and_reused() {
        let mut state = state_with(&["a"]);
        let first = state.open_fullscreen("img-a", "auto");
        assert_eq!(state.close_fullscreen(), Some("auto".to_string()));
        assert!(!state.overlay().unwrap().is_open());

        let second = state.open_fullscreen("img-b", "scroll");
        assert_eq!(first, second);
        assert_eq!(state.overlays_created(), 1);

        assert!(state.on_key(NavKey::Escape));
        assert!(!state.overlay().unwrap().is_open());
        assert!(!state.on_key(NavKey::Escape));
    }

    #[test]
    fn test_export_failure_keeps_results() {
        let mut state = state_with(&["a"]);
        let ticket = state.begin_submit().unwrap();
        state.finish_submit(&ticket, originals(1), results(1)).unwrap();

        state.export_failed(&Error::Transport("offline".into()));
        assert_eq!(state.phase(), Phase::Results);
        assert!(state.carousel().is_some());
        assert_eq!(state.take_alert().as_deref(), Some(crate::error::EXPORT_FAILURE_MESSAGE));
    }
}
