//! 翻訳元/翻訳先の言語テーブル

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 言語（表示名, コード）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub code: &'static str,
}

const fn lang(name: &'static str, code: &'static str) -> Language {
    Language { name, code }
}

pub const DEFAULT_SOURCE: &str = "ja-JP";
pub const DEFAULT_TARGET: &str = "en-US";

/// 翻訳元として選べる言語
pub const SOURCE_LANGUAGES: &[Language] = &[
    lang("Japanese", "ja-JP"),
    lang("Chinese (Simplified)", "zh-CN"),
    lang("Chinese (Traditional)", "zh-TW"),
    lang("Korean", "ko-KR"),
    lang("English", "en-US"),
];

/// 翻訳先として選べる言語
pub const TARGET_LANGUAGES: &[Language] = &[
    lang("English", "en-US"),
    lang("Spanish", "es-ES"),
    lang("French", "fr-FR"),
    lang("German", "de-DE"),
    lang("Italian", "it-IT"),
    lang("Portuguese (Brazil)", "pt-BR"),
    lang("Russian", "ru-RU"),
    lang("Polish", "pl-PL"),
    lang("Turkish", "tr-TR"),
    lang("Greek", "el-GR"),
    lang("Arabic", "ar-SA"),
    lang("Hebrew", "he-IL"),
    lang("Hindi", "hi-IN"),
    lang("Indonesian", "id-ID"),
    lang("Vietnamese", "vi-VN"),
    lang("Thai", "th-TH"),
    lang("Japanese", "ja-JP"),
    lang("Korean", "ko-KR"),
    lang("Chinese (Simplified)", "zh-CN"),
];

pub fn find(table: &[Language], code: &str) -> Option<Language> {
    table.iter().copied().find(|l| l.code == code)
}

/// 翻訳元/翻訳先のペア
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// テーブルに存在するコードだけ受け付ける
    pub fn checked(source: &str, target: &str) -> Result<Self> {
        if find(SOURCE_LANGUAGES, source).is_none() {
            return Err(Error::UnknownLanguage(source.to_string()));
        }
        if find(TARGET_LANGUAGES, target).is_none() {
            return Err(Error::UnknownLanguage(target.to_string()));
        }
        Ok(Self::new(source, target))
    }

    pub fn is_complete(&self) -> bool {
        !self.source.is_empty() && !self.target.is_empty()
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_TARGET)
    }
}
