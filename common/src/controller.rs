//! UploadController
//!
//! `AppState` とエンコーダ・バックエンドをまとめ、送信からカルーセル表示、
//! 一括ダウンロードまでを1つの流れとして実行する。
//! 状態を `&mut` で持ち続けられる呼び出し側（CLIなど）向け。

use crate::error::{Error, Result};
use crate::export;
use crate::pipeline::{run_batch, ImageEncoder, TranslationBackend};
use crate::state::AppState;

pub struct UploadController<F, E, B> {
    state: AppState<F>,
    encoder: E,
    backend: B,
}

impl<F, E, B> UploadController<F, E, B>
where
    F: Clone,
    E: ImageEncoder<F>,
    B: TranslationBackend,
{
    pub fn new(state: AppState<F>, encoder: E, backend: B) -> Self {
        Self { state, encoder, backend }
    }

    pub fn state(&self) -> &AppState<F> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState<F> {
        &mut self.state
    }

    pub fn into_state(self) -> AppState<F> {
        self.state
    }

    /// 選択を差し替える
    pub fn select(&mut self, files: Vec<F>) -> Result<Option<&F>> {
        self.state.on_file_selection_changed(files)
    }

    /// 送信（進捗通知なし）
    pub async fn submit(&mut self) -> Result<()> {
        self.submit_with_progress(|_, _| {}).await
    }

    /// 送信
    ///
    /// エンコード・通信・結果検証のどこで失敗しても、通知を1つ立てて
    /// Idleに戻す。選択はそのまま残る。
    pub async fn submit_with_progress<P>(&mut self, mut on_progress: P) -> Result<()>
    where
        P: FnMut(usize, usize),
    {
        let ticket = self.state.begin_submit()?;
        let files = self.state.selection().files().to_vec();
        let languages = self.state.languages.clone();

        let state = &mut self.state;
        let outcome = run_batch(&files, &languages, &self.encoder, &self.backend, |current, total| {
            state.record_progress(&ticket, current);
            on_progress(current, total);
        })
        .await;

        match outcome {
            Ok(batch) => self.state.finish_submit(&ticket, batch.originals, batch.results),
            Err(e) => {
                self.state.fail_submit(&ticket, &e);
                Err(e)
            }
        }
    }

    /// 翻訳結果をまとめてZIPで受け取る
    ///
    /// 失敗してもResultsのまま（再送信せずにやり直せる）。
    pub async fn download_all(&mut self) -> Result<Vec<u8>> {
        let Some(carousel) = self.state.carousel() else {
            return Err(Error::NothingToExport);
        };

        match export::download_all(&self.backend, carousel).await {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                self.state.export_failed(&e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::NavKey;
    use crate::error::GENERIC_FAILURE_MESSAGE;
    use crate::language::LanguagePair;
    use crate::state::Phase;
    use crate::types::{EncodedImage, PredictRequest, TranslationResult, ZipRequest};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// ファイル名をそのままBase64の中身とみなすエンコーダ
    struct NameEncoder {
        fail_on: Option<&'static str>,
    }

    impl ImageEncoder<&'static str> for NameEncoder {
        async fn encode(&self, file: &&'static str) -> Result<EncodedImage> {
            if self.fail_on == Some(*file) {
                return Err(Error::Encode(format!("cannot read {}", file)));
            }
            Ok(EncodedImage::new(format!("b64:{}", file)))
        }
    }

    enum Reply {
        Ok,
        Reversed,
        Short,
        Status(u16, Option<&'static str>),
    }

    struct FakeBackend {
        reply: Reply,
        zip_ok: bool,
        predict_calls: RefCell<Vec<PredictRequest>>,
        zip_calls: RefCell<Vec<ZipRequest>>,
    }

    impl FakeBackend {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                zip_ok: true,
                predict_calls: RefCell::new(Vec::new()),
                zip_calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TranslationBackend for FakeBackend {
        async fn predict(&self, request: &PredictRequest) -> Result<Vec<TranslationResult>> {
            self.predict_calls.borrow_mut().push(request.clone());
            let mut results: Vec<TranslationResult> = request
                .images
                .iter()
                .enumerate()
                .map(|(index, image)| TranslationResult {
                    index,
                    image: EncodedImage::new(format!("{}:{}", request.target_lang, image.as_str())),
                    image_info: None,
                })
                .collect();

            match self.reply {
                Reply::Ok => Ok(results),
                Reply::Reversed => {
                    results.reverse();
                    Ok(results)
                }
                Reply::Short => {
                    results.pop();
                    Ok(results)
                }
                Reply::Status(status, message) => Err(Error::Server {
                    status,
                    message: message.map(str::to_string),
                }),
            }
        }

        async fn download_zip(&self, request: &ZipRequest) -> Result<Vec<u8>> {
            self.zip_calls.borrow_mut().push(request.clone());
            if self.zip_ok {
                Ok(b"PK\x03\x04".to_vec())
            } else {
                Err(Error::Server { status: 500, message: None })
            }
        }
    }

    fn controller(reply: Reply) -> UploadController<&'static str, NameEncoder, FakeBackend> {
        UploadController::new(
            AppState::new(LanguagePair::new("ja-JP", "en-US")),
            NameEncoder { fail_on: None },
            FakeBackend::new(reply),
        )
    }

    #[test]
    fn test_three_files_scenario() {
        let mut ctrl = controller(Reply::Ok);
        ctrl.select(vec!["p1.jpg", "p2.jpg", "p3.jpg"]).unwrap();

        let mut progress = Vec::new();
        block_on(ctrl.submit_with_progress(|current, total| progress.push((current, total)))).unwrap();
        assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);

        let calls = ctrl.backend.predict_calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].source_lang, "ja-JP");
        assert_eq!(calls[0].target_lang, "en-US");
        assert_eq!(calls[0].images[0].as_str(), "b64:p1.jpg");
        drop(calls);

        let carousel = ctrl.state().carousel().unwrap();
        assert_eq!(carousel.position_label(), "1 / 3");
        assert!(carousel.previous_disabled());
        assert!(!carousel.next_disabled());

        let state = ctrl.state_mut();
        state.on_key(NavKey::Right);
        state.on_key(NavKey::Right);
        let carousel = state.carousel().unwrap();
        assert_eq!(carousel.position_label(), "3 / 3");
        assert!(carousel.next_disabled());
    }

    #[test]
    fn test_results_match_selection_order() {
        let mut ctrl = controller(Reply::Reversed);
        ctrl.select(vec!["a.png", "b.png", "c.png"]).unwrap();
        block_on(ctrl.submit()).unwrap();

        let carousel = ctrl.state().carousel().unwrap();
        assert_eq!(carousel.len(), 3);
        for (item, name) in carousel.items().iter().zip(["a.png", "b.png", "c.png"]) {
            assert_eq!(item.original.as_str(), format!("b64:{}", name));
            assert_eq!(item.translated.image.as_str(), format!("en-US:b64:{}", name));
        }
    }

    #[test]
    fn test_empty_selection_never_calls_backend() {
        let mut ctrl = controller(Reply::Ok);
        let err = block_on(ctrl.submit()).unwrap_err();

        assert!(matches!(err, Error::NoSelection));
        assert!(ctrl.backend.predict_calls.borrow().is_empty());
        assert_eq!(ctrl.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_server_error_scenario() {
        let mut ctrl = controller(Reply::Status(500, Some("translation failed")));
        ctrl.select(vec!["p1.jpg", "p2.jpg", "p3.jpg"]).unwrap();

        let err = block_on(ctrl.submit()).unwrap_err();
        assert!(matches!(err, Error::Server { status: 500, .. }));

        let state = ctrl.state_mut();
        assert_eq!(state.take_alert().as_deref(), Some("translation failed"));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.submit_visible());
        assert!(!state.progress_visible());
        assert_eq!(state.selection().files(), &["p1.jpg", "p2.jpg", "p3.jpg"]);
    }

    #[test]
    fn test_server_error_without_message_is_generic() {
        let mut ctrl = controller(Reply::Status(503, None));
        ctrl.select(vec!["p1.jpg"]).unwrap();
        assert!(block_on(ctrl.submit()).is_err());
        assert_eq!(ctrl.state_mut().take_alert().as_deref(), Some(GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn test_encode_failure_skips_network() {
        let mut ctrl = UploadController::new(
            AppState::default(),
            NameEncoder { fail_on: Some("bad.jpg") },
            FakeBackend::new(Reply::Ok),
        );
        ctrl.select(vec!["ok.jpg", "bad.jpg"]).unwrap();

        let err = block_on(ctrl.submit()).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
        assert!(ctrl.backend.predict_calls.borrow().is_empty());
        assert_eq!(ctrl.state_mut().take_alert().as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(ctrl.state().selection().len(), 2);
    }

    #[test]
    fn test_short_response_fails_batch() {
        let mut ctrl = controller(Reply::Short);
        ctrl.select(vec!["a", "b"]).unwrap();

        let err = block_on(ctrl.submit()).unwrap_err();
        assert!(matches!(err, Error::ResultMismatch { expected: 2, got: 1 }));
        assert_eq!(ctrl.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_download_all_in_index_order() {
        let mut ctrl = controller(Reply::Reversed);
        ctrl.select(vec!["a", "b"]).unwrap();
        block_on(ctrl.submit()).unwrap();

        let bytes = block_on(ctrl.download_all()).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let zips = ctrl.backend.zip_calls.borrow();
        assert_eq!(zips.len(), 1);
        let images: Vec<_> = zips[0].images.iter().map(|i| i.as_str().to_string()).collect();
        assert_eq!(images, vec!["en-US:b64:a", "en-US:b64:b"]);
    }

    #[test]
    fn test_download_all_failure_keeps_results() {
        let mut ctrl = controller(Reply::Ok);
        ctrl.backend.zip_ok = false;
        ctrl.select(vec!["a"]).unwrap();
        block_on(ctrl.submit()).unwrap();

        let err = block_on(ctrl.download_all()).unwrap_err();
        assert!(matches!(err, Error::Export(_)));
        assert_eq!(ctrl.state().phase(), Phase::Results);
        assert!(ctrl.state_mut().take_alert().is_some());
    }

    #[test]
    fn test_download_all_without_results() {
        let mut ctrl = controller(Reply::Ok);
        let err = block_on(ctrl.download_all()).unwrap_err();
        assert!(matches!(err, Error::NothingToExport));
        assert!(ctrl.backend.zip_calls.borrow().is_empty());
    }
}
