//! translate サブコマンド本体
//!
//! 選択 → 1枚ずつエンコード（進捗表示）→ 一括送信 → 書き出し → ZIP（任意）

use crate::encoder::FsEncoder;
use crate::error::{Result, TranslateError};
use crate::output;
use crate::scanner::{self, ImageFile};
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use manga_translate_common::{
    AppState, Language, LanguagePair, TranslationBackend, UploadController, SOURCE_LANGUAGES,
    TARGET_LANGUAGES,
};
use std::path::PathBuf;

pub struct TranslateOptions {
    pub inputs: Vec<PathBuf>,
    pub languages: LanguagePair,
    pub output: PathBuf,
    pub zip: bool,
    pub zip_file_name: String,
    pub recursive: bool,
}

#[derive(Debug)]
pub struct TranslateOutcome {
    pub state: AppState<ImageFile>,
    pub written: Vec<PathBuf>,
    pub archive: Option<PathBuf>,
}

fn progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}") {
        bar.set_style(style.progress_chars("##-"));
    }
    bar
}

pub async fn run_translate<B: TranslationBackend>(backend: B, options: &TranslateOptions) -> Result<TranslateOutcome> {
    // 1. 画像の選択
    println!("[1/3] 画像を収集中...");
    let images = scanner::collect_inputs(&options.inputs, options.recursive)?;
    if images.is_empty() {
        let joined = options
            .inputs
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(TranslateError::NoImagesFound(joined));
    }
    println!("✔ {}枚の画像を検出\n", images.len());

    let mut controller = UploadController::new(AppState::new(options.languages.clone()), FsEncoder, backend);
    controller.select(images)?;

    // 2. エンコードと送信
    println!(
        "[2/3] 翻訳中... ({} → {})",
        options.languages.source, options.languages.target
    );
    let bar = progress_bar(controller.state().selection().len());
    let submitted = controller
        .submit_with_progress(|current, _total| {
            bar.set_position(current as u64);
            bar.set_message(format!("{}枚目をエンコード", current));
        })
        .await;
    bar.finish_and_clear();

    if let Err(e) = submitted {
        if let Some(alert) = controller.state_mut().take_alert() {
            eprintln!("✖ {}", alert);
        }
        return Err(e.into());
    }
    println!("✔ 翻訳完了\n");

    // 3. 書き出し
    println!("[3/3] 結果を保存中...");
    let written = match controller.state().carousel() {
        Some(carousel) => output::write_results(carousel, controller.state().selection().files(), &options.output)?,
        None => Vec::new(),
    };
    println!("✔ {}枚を保存: {}", written.len(), options.output.display());

    let mut archive = None;
    if options.zip {
        println!("- ZIPを取得中...");
        match controller.download_all().await {
            Ok(bytes) => {
                let path = output::write_archive(&bytes, &options.output, &options.zip_file_name)?;
                println!("✔ ZIP出力: {}", path.display());
                archive = Some(path);
            }
            Err(e) => {
                log::warn!("download-zip: {}", e);
                if let Some(alert) = controller.state_mut().take_alert() {
                    eprintln!("⚠ {}", alert);
                }
            }
        }
    }

    Ok(TranslateOutcome {
        state: controller.into_state(),
        written,
        archive,
    })
}

fn pick_language(prompt: &str, table: &[Language], current: &str) -> Result<String> {
    let labels: Vec<String> = table
        .iter()
        .map(|l| format!("{} ({})", l.name, l.code))
        .collect();
    let default = table.iter().position(|l| l.code == current).unwrap_or(0);

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()
        .map_err(|e| TranslateError::Prompt(e.to_string()))?;

    Ok(table[choice].code.to_string())
}

/// 翻訳元/翻訳先をテーブルから選ぶ
pub fn pick_languages(current: &LanguagePair) -> Result<LanguagePair> {
    let source = pick_language("翻訳元", SOURCE_LANGUAGES, &current.source)?;
    let target = pick_language("翻訳先", TARGET_LANGUAGES, &current.target)?;
    Ok(LanguagePair::new(source, target))
}
