use crate::error::{Result, TranslateError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 送信対象の画像ファイル
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl ImageFile {
    pub fn new(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, file_name }
    }

    /// 拡張子を除いたファイル名
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string())
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| is_image_extension(&ext.to_string_lossy()))
        .unwrap_or(false)
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageFile>> {
    if !folder.exists() {
        return Err(TranslateError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images: Vec<ImageFile> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_image_path(e.path()))
        .map(|e| ImageFile::new(e.path().to_path_buf()))
        .collect();

    // ファイル名でソート
    images.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(images)
}

/// 引数（ファイル/フォルダ混在）から選択順の一覧を作る
///
/// ファイルは指定順、フォルダは中身をソートして展開する。
pub fn collect_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<ImageFile>> {
    let mut images = Vec::new();

    for input in inputs {
        if input.is_dir() {
            images.extend(scan_folder(input, recursive)?);
        } else if input.is_file() {
            if !is_image_path(input) {
                log::warn!("画像以外のファイルをスキップ: {}", input.display());
                continue;
            }
            images.push(ImageFile::new(input.clone()));
        } else {
            return Err(TranslateError::FileNotFound(input.display().to_string()));
        }
    }

    Ok(images)
}
