use crate::error::{Result, TranslateError};
use manga_translate_common::{language, LanguagePair, ZIP_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const URL_ENV: &str = "MANGA_TRANSLATE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub source_lang: String,
    pub target_lang: String,
    pub timeout_seconds: u64,
    pub zip_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            source_lang: language::DEFAULT_SOURCE.into(),
            target_lang: language::DEFAULT_TARGET.into(),
            timeout_seconds: 120,
            zip_file_name: ZIP_FILE_NAME.into(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み、環境変数 `MANGA_TRANSLATE_URL` があればURLを上書きする
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_url_override(std::env::var(URL_ENV).ok());
        Ok(config)
    }

    /// 空白だけの値は無視する
    pub fn apply_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TranslateError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("manga-translate").join("config.json"))
    }

    /// 接続先URL（末尾の `/` は除く）
    pub fn base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    /// テーブルにある言語コードだけ保存する
    pub fn set_languages(&mut self, source: Option<String>, target: Option<String>) -> Result<()> {
        let source = source.unwrap_or_else(|| self.source_lang.clone());
        let target = target.unwrap_or_else(|| self.target_lang.clone());
        let pair = LanguagePair::checked(&source, &target)?;
        self.source_lang = pair.source;
        self.target_lang = pair.target;
        Ok(())
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(TranslateError::Config(format!("URLはhttp(s)で始めてください: {}", url)));
        }
        self.base_url = url;
        Ok(())
    }
}
