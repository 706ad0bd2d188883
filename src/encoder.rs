use manga_translate_common::{EncodedImage, Error, ImageEncoder};

use crate::scanner::ImageFile;

/// ディスク上の画像を読み込んでBase64化する
pub struct FsEncoder;

impl ImageEncoder<ImageFile> for FsEncoder {
    async fn encode(&self, file: &ImageFile) -> manga_translate_common::Result<EncodedImage> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| Error::Encode(format!("{}: {}", file.path.display(), e)))?;
        Ok(EncodedImage::from_bytes(&bytes))
    }
}
