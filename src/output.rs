//! 翻訳結果の書き出し

use crate::error::{Result, TranslateError};
use crate::scanner::ImageFile;
use manga_translate_common::Carousel;
use std::path::{Path, PathBuf};

/// デコード後のバイト列から拡張子を決める（判定できなければjpg）
pub fn extension_for(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or("jpg")
}

pub fn translated_file_name(index: usize, source: &ImageFile, bytes: &[u8]) -> String {
    format!("{:03}_{}_translated.{}", index + 1, source.stem(), extension_for(bytes))
}

/// カルーセルの翻訳画像を選択順にファイルへ書き出す
pub fn write_results(carousel: &Carousel, sources: &[ImageFile], output_dir: &Path) -> Result<Vec<PathBuf>> {
    if sources.len() != carousel.len() {
        return Err(TranslateError::Output(format!(
            "結果数 {} と入力数 {} が一致しません",
            carousel.len(),
            sources.len()
        )));
    }

    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(sources.len());
    for (item, source) in carousel.items().iter().zip(sources) {
        let bytes = item.translated.image.decode()?;
        let path = output_dir.join(translated_file_name(item.translated.index, source, &bytes));
        std::fs::write(&path, &bytes)?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

pub fn write_archive(bytes: &[u8], output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}
