use clap::Parser;
use manga_translate::{cli, client, config, error, review, translate};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use manga_translate_common::{LanguagePair, SOURCE_LANGUAGES, TARGET_LANGUAGES};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = Config::load()?;
    if let Some(url) = cli.url.clone() {
        config.set_base_url(url)?;
    }

    match cli.command {
        Commands::Translate { inputs, source, target, output, zip, review, pick_languages, recursive } => {
            println!("🈂 manga-translate - 一括翻訳\n");

            let mut languages = LanguagePair::checked(
                source.as_deref().unwrap_or(&config.source_lang),
                target.as_deref().unwrap_or(&config.target_lang),
            )?;
            if pick_languages {
                languages = translate::pick_languages(&languages)?;
            }

            let base_url = config.base_url();
            log::info!("backend: {}", base_url);
            let backend = client::HttpBackend::new(base_url, Duration::from_secs(config.timeout_seconds))?;

            let options = translate::TranslateOptions {
                inputs,
                languages,
                output,
                zip,
                zip_file_name: config.zip_file_name.clone(),
                recursive,
            };
            let mut outcome = translate::run_translate(backend, &options).await?;

            if review {
                review::run_review(&mut outcome.state, &outcome.written)?;
            }

            println!("\n✅ 完了");
        }

        Commands::Languages => {
            println!("翻訳元:");
            for lang in SOURCE_LANGUAGES {
                println!("  {:<8} {}", lang.code, lang.name);
            }
            println!("\n翻訳先:");
            for lang in TARGET_LANGUAGES {
                println!("  {:<8} {}", lang.code, lang.name);
            }
        }

        Commands::Config { set_url, set_source, set_target, show } => {
            // --url と環境変数は一時的な上書きなので、ファイルの内容だけを読み直す
            let mut config = Config::load_from(&Config::config_path()?)?;

            if let Some(url) = set_url {
                config.set_base_url(url)?;
                config.save()?;
                println!("✔ バックエンドURLを設定しました");
            }

            if set_source.is_some() || set_target.is_some() {
                config.set_languages(set_source, set_target)?;
                config.save()?;
                println!("✔ 既定の言語を設定しました");
            }

            if show {
                println!("設定:");
                println!("  URL: {}", config.base_url());
                println!("  翻訳元: {}", config.source_lang);
                println!("  翻訳先: {}", config.target_lang);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  ZIPファイル名: {}", config.zip_file_name);
            }
        }
    }

    Ok(())
}
