//! ブラウザのFileをBase64化する

use gloo::file::futures::read_as_bytes;
use manga_translate_common::{EncodedImage, Error, ImageEncoder};
use web_sys::File;

pub struct FileEncoder;

impl ImageEncoder<File> for FileEncoder {
    async fn encode(&self, file: &File) -> manga_translate_common::Result<EncodedImage> {
        let blob = gloo::file::File::from(file.clone());
        let bytes = read_as_bytes(&blob)
            .await
            .map_err(|e| Error::Encode(format!("{}: {}", file.name(), e)))?;
        Ok(EncodedImage::from_bytes(&bytes))
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn encodes_file_contents() {
        let bytes = js_sys::Uint8Array::from(&b"\x89PNG\r\n"[..]);
        let parts = js_sys::Array::of1(&JsValue::from(bytes));
        let file = File::new_with_u8_array_sequence(&parts, "page.png").unwrap();

        let encoded = FileEncoder.encode(&file).await.unwrap();
        assert_eq!(encoded.as_str(), "iVBORw0K");
        assert_eq!(encoded.mime_type(), "image/png");
    }
}
