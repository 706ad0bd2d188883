//! 翻訳バックエンドHTTPクライアント
//!
//! `POST /predict` と `POST /download-zip` を reqwest で呼ぶ。

use std::time::Duration;

use log::debug;
use manga_translate_common::{
    Error, ErrorBody, PredictRequest, PredictResponse, TranslationBackend, TranslationResult,
    ZipRequest,
};

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| crate::error::TranslateError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}

impl TranslationBackend for HttpBackend {
    async fn predict(&self, request: &PredictRequest) -> manga_translate_common::Result<Vec<TranslationResult>> {
        let url = self.endpoint("/predict");
        debug!("POST {} ({} images)", url, request.images.len());

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(ErrorBody::into_error(status.as_u16(), &body));
        }

        let parsed: PredictResponse = serde_json::from_str(&body)?;
        Ok(parsed.results)
    }

    async fn download_zip(&self, request: &ZipRequest) -> manga_translate_common::Result<Vec<u8>> {
        let url = self.endpoint("/download-zip");
        debug!("POST {} ({} images)", url, request.images.len());

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Export(format!("HTTP {}", status.as_u16())));
        }

        let bytes = response.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }
}
