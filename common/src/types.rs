//! 翻訳リクエスト/レスポンスの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - EncodedImage: Base64化した画像
//! - TranslationResult: `/predict` が返す1枚分の結果
//! - PredictRequest / PredictResponse / ZipRequest: バックエンドとのJSON

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::language::LanguagePair;

/// Base64エンコード済み画像（JSON転送用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn new(base64: impl Into<String>) -> Self {
        Self(base64.into())
    }

    /// 生バイトからエンコード
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.0.as_bytes())
            .map_err(|e| Error::Encode(e.to_string()))
    }

    /// 先頭バイトのシグネチャからMIMEタイプを推定（不明ならJPEG）
    pub fn mime_type(&self) -> &'static str {
        let s = self.0.as_str();
        if s.starts_with("iVBOR") {
            "image/png"
        } else if s.starts_with("UklGR") {
            "image/webp"
        } else if s.starts_with("R0lGOD") {
            "image/gif"
        } else {
            "image/jpeg"
        }
    }

    /// 保存時の拡張子
    pub fn extension(&self) -> &'static str {
        match self.mime_type() {
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "jpg",
        }
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.0)
    }
}

/// `/predict` が返す1枚分の翻訳結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub index: usize,
    pub image: EncodedImage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_info: Option<serde_json::Value>,
}

/// `POST /predict` のリクエストボディ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub images: Vec<EncodedImage>,
    pub source_lang: String,
    pub target_lang: String,
}

impl PredictRequest {
    pub fn new(images: Vec<EncodedImage>, languages: &LanguagePair) -> Self {
        Self {
            images,
            source_lang: languages.source.clone(),
            target_lang: languages.target.clone(),
        }
    }
}

/// `POST /predict` の成功レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub results: Vec<TranslationResult>,
}

/// 非2xxレスポンスのボディ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// 非2xxレスポンスのボディから `Error::Server` を作る
    ///
    /// ボディがJSONでない場合もメッセージなしとして扱う。
    pub fn into_error(status: u16, body: &str) -> Error {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        Error::Server { status, message }
    }
}

/// `POST /download-zip` のリクエストボディ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipRequest {
    pub images: Vec<EncodedImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_sniffing() {
        assert_eq!(EncodedImage::new("/9j/4AAQ").mime_type(), "image/jpeg");
        assert_eq!(EncodedImage::new("iVBORw0K").mime_type(), "image/png");
        assert_eq!(EncodedImage::new("UklGRiQA").mime_type(), "image/webp");
        assert_eq!(EncodedImage::new("something").mime_type(), "image/jpeg");
    }

    #[test]
    fn test_extension_follows_mime() {
        assert_eq!(EncodedImage::new("iVBORw0K").extension(), "png");
        assert_eq!(EncodedImage::new("R0lGODlh").extension(), "gif");
        assert_eq!(EncodedImage::new("/9j/4AAQ").extension(), "jpg");
    }

    #[test]
    fn test_decode_bytes() {
        let image = EncodedImage::from_bytes(b"\x89PNG\r\n");
        assert!(image.as_str().starts_with("iVBOR"));
        assert_eq!(image.decode().unwrap(), b"\x89PNG\r\n");

        let broken = EncodedImage::new("***");
        assert!(matches!(broken.decode(), Err(Error::Encode(_))));
    }

    #[test]
    fn test_predict_request_shape() {
        let languages = LanguagePair::new("ja-JP", "en-US");
        let request = PredictRequest::new(vec![EncodedImage::new("aaa"), EncodedImage::new("bbb")], &languages);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["images"], serde_json::json!(["aaa", "bbb"]));
        assert_eq!(json["source_lang"], "ja-JP");
        assert_eq!(json["target_lang"], "en-US");
    }

    #[test]
    fn test_predict_response_with_optional_info() {
        let body = r#"{"results":[
            {"index":0,"image":"aaa"},
            {"index":1,"image":"bbb","image_info":{"bubbles":4}}
        ]}"#;
        let response: PredictResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.results.len(), 2);
        assert!(response.results[0].image_info.is_none());
        assert_eq!(response.results[1].image_info.as_ref().unwrap()["bubbles"], 4);
    }

    #[test]
    fn test_error_body_into_error() {
        let error = ErrorBody::into_error(500, r#"{"message":"translation failed"}"#);
        assert!(matches!(
            error,
            Error::Server { status: 500, message: Some(ref m) } if m == "translation failed"
        ));

        let error = ErrorBody::into_error(502, "<html>Bad Gateway</html>");
        assert!(matches!(error, Error::Server { status: 502, message: None }));
    }
}
