//! 翻訳結果の一括ダウンロード

use log::{debug, warn};

use crate::carousel::Carousel;
use crate::error::{Error, Result};
use crate::pipeline::TranslationBackend;
use crate::types::ZipRequest;

/// 保存時のファイル名（固定）
pub const ZIP_FILE_NAME: &str = "translated_images.zip";

/// カルーセルの翻訳済み画像をindex順に詰める
pub fn build_zip_request(carousel: &Carousel) -> Result<ZipRequest> {
    if carousel.is_empty() {
        return Err(Error::NothingToExport);
    }
    Ok(ZipRequest { images: carousel.translated_images() })
}

/// `/download-zip` を1回だけ呼んでアーカイブを受け取る
///
/// 失敗はすべて `Error::Export` にまとめる（リトライなし）。
pub async fn download_all<B: TranslationBackend>(backend: &B, carousel: &Carousel) -> Result<Vec<u8>> {
    let request = build_zip_request(carousel)?;
    debug!("download-zip: {} images", request.images.len());

    backend.download_zip(&request).await.map_err(|e| {
        warn!("download-zip failed: {}", e);
        match e {
            Error::Export(_) => e,
            other => Error::Export(other.to_string()),
        }
    })
}
