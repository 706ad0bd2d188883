//! Manga Translate Common Library
//!
//! CLIとWeb(WASM)で共有される翻訳ワークフロー:
//! - UploadController: 選択 → エンコード → `/predict` へ一括送信
//! - CarouselViewer: 元画像/翻訳結果を1枚ずつ表示
//! - ExportAgent: `/download-zip` で一括ダウンロード

pub mod carousel;
pub mod controller;
pub mod error;
pub mod export;
pub mod language;
pub mod overlay;
pub mod pipeline;
pub mod selection;
pub mod state;
pub mod types;

pub use carousel::{Carousel, CarouselItem, NavKey};
pub use controller::UploadController;
pub use error::{Error, Result};
pub use export::{build_zip_request, download_all, ZIP_FILE_NAME};
pub use language::{Language, LanguagePair, SOURCE_LANGUAGES, TARGET_LANGUAGES};
pub use overlay::FullscreenOverlay;
pub use pipeline::{encode_all, run_batch, BatchOutcome, ImageEncoder, TranslationBackend};
pub use selection::SelectionSet;
pub use state::{AppState, Phase, SubmitTicket};
pub use types::{EncodedImage, ErrorBody, PredictRequest, PredictResponse, TranslationResult, ZipRequest};
