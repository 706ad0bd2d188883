//! エラー型定義

use thiserror::Error;

/// サーバーがメッセージを返さなかった場合の汎用通知
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while translating the images.";

/// 画像未選択時の通知
pub const NO_SELECTION_MESSAGE: &str = "Please select at least one image.";

/// ZIPダウンロード失敗時の通知
pub const EXPORT_FAILURE_MESSAGE: &str = "Failed to download the archive.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no image selected")]
    NoSelection,

    #[error("encode error: {0}")]
    Encode(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    #[error("result mismatch: expected {expected} results, got {got}")]
    ResultMismatch { expected: usize, got: usize },

    #[error("submission superseded by a newer selection")]
    StaleSubmission,

    #[error("nothing to export")]
    NothingToExport,

    #[error("export error: {0}")]
    Export(String),

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}

impl Error {
    /// ユーザー向け通知文
    ///
    /// サーバーのメッセージはそのまま表示し、それ以外は汎用文にまとめる。
    pub fn user_message(&self) -> String {
        match self {
            Error::Server { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            Error::NoSelection => NO_SELECTION_MESSAGE.to_string(),
            Error::NothingToExport | Error::Export(_) => EXPORT_FAILURE_MESSAGE.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
