//! 翻訳バックエンド連携（fetch）
//!
//! 同一オリジンの `/predict` と `/download-zip` をJSONで呼ぶ。

use manga_translate_common::{
    Error, ErrorBody, PredictRequest, PredictResponse, TranslationBackend, TranslationResult,
    ZipRequest,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub struct FetchBackend {
    base_url: String,
}

impl FetchBackend {
    /// ページと同じオリジンのエンドポイントを使う
    pub fn same_origin() -> Self {
        Self { base_url: String::new() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn js_error(e: JsValue) -> Error {
    Error::Transport(format!("{:?}", e))
}

/// JSONボディでPOSTする（共通処理）
async fn post_json<T: Serialize>(url: &str, payload: &T) -> Result<Response, Error> {
    let body = serde_json::to_string(payload)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    resp_value.dyn_into::<Response>().map_err(js_error)
}

async fn response_text(resp: &Response) -> String {
    let Ok(promise) = resp.text() else {
        return String::new();
    };
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

impl TranslationBackend for FetchBackend {
    async fn predict(&self, request: &PredictRequest) -> manga_translate_common::Result<Vec<TranslationResult>> {
        let resp = post_json(&self.endpoint("/predict"), request).await?;

        if !resp.ok() {
            let body = response_text(&resp).await;
            return Err(ErrorBody::into_error(resp.status(), &body));
        }

        let json = JsFuture::from(resp.json().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let response: PredictResponse = serde_wasm_bindgen::from_value(json)
            .map_err(|e| Error::Transport(format!("invalid response: {}", e)))?;

        Ok(response.results)
    }

    async fn download_zip(&self, request: &ZipRequest) -> manga_translate_common::Result<Vec<u8>> {
        let resp = post_json(&self.endpoint("/download-zip"), request).await?;

        if !resp.ok() {
            return Err(Error::Export(format!("HTTP {}", resp.status())));
        }

        let buffer = JsFuture::from(resp.array_buffer().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}
