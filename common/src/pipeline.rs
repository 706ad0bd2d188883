//! 送信パイプライン
//!
//! ファイルを選択順に1枚ずつエンコードし、まとめて1回だけ `/predict` へ送る。
//! 並列化はしない（順序保証のため）。

use std::future::Future;

use log::debug;

use crate::error::{Error, Result};
use crate::language::LanguagePair;
use crate::types::{EncodedImage, PredictRequest, TranslationResult, ZipRequest};

/// ファイルハンドルをBase64化する
pub trait ImageEncoder<F> {
    fn encode(&self, file: &F) -> impl Future<Output = Result<EncodedImage>>;
}

/// 翻訳バックエンド（`/predict` と `/download-zip`）
pub trait TranslationBackend {
    /// 2xxなら結果配列、非2xxなら `Error::Server`
    fn predict(&self, request: &PredictRequest) -> impl Future<Output = Result<Vec<TranslationResult>>>;

    /// 2xxならアーカイブのバイト列
    fn download_zip(&self, request: &ZipRequest) -> impl Future<Output = Result<Vec<u8>>>;
}

/// 1バッチ分の送信結果
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub originals: Vec<EncodedImage>,
    pub results: Vec<TranslationResult>,
}

/// 選択順にエンコードする
///
/// `on_progress(current, total)` は各ファイルのエンコード前に
/// `current = 1..=total` で呼ばれる。
pub async fn encode_all<F, E, P>(files: &[F], encoder: &E, mut on_progress: P) -> Result<Vec<EncodedImage>>
where
    E: ImageEncoder<F>,
    P: FnMut(usize, usize),
{
    let total = files.len();
    let mut encoded = Vec::with_capacity(total);

    for (i, file) in files.iter().enumerate() {
        on_progress(i + 1, total);
        encoded.push(encoder.encode(file).await?);
    }

    Ok(encoded)
}

/// エンコードしてから1回だけバッチ送信する
///
/// 空の選択ではネットワークに触れずに `Error::NoSelection` を返す。
pub async fn run_batch<F, E, B, P>(
    files: &[F],
    languages: &LanguagePair,
    encoder: &E,
    backend: &B,
    on_progress: P,
) -> Result<BatchOutcome>
where
    E: ImageEncoder<F>,
    B: TranslationBackend,
    P: FnMut(usize, usize),
{
    if files.is_empty() {
        return Err(Error::NoSelection);
    }

    let originals = encode_all(files, encoder, on_progress).await?;
    debug!(
        "predict: {} images {} -> {}",
        originals.len(),
        languages.source,
        languages.target
    );

    let request = PredictRequest::new(originals.clone(), languages);
    let results = backend.predict(&request).await?;
    debug!("predict: received {} results", results.len());

    Ok(BatchOutcome { originals, results })
}
