use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("出力エラー: {0}")]
    Output(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("{}", .0.user_message())]
    Workflow(#[from] manga_translate_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TranslateError>;
