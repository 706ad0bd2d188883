use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "manga-translate")]
#[command(about = "漫画画像の一括翻訳クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をまとめて翻訳
    Translate {
        /// 画像ファイルまたはフォルダ（指定順に送信）
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// 翻訳元の言語コード（例: ja-JP）
        #[arg(short, long)]
        source: Option<String>,

        /// 翻訳先の言語コード（例: en-US）
        #[arg(short, long)]
        target: Option<String>,

        /// 出力フォルダ
        #[arg(short, long, default_value = "translated")]
        output: PathBuf,

        /// 翻訳結果をZIPでも受け取る
        #[arg(long)]
        zip: bool,

        /// 翻訳後に1枚ずつ確認する
        #[arg(long)]
        review: bool,

        /// 言語を一覧から選ぶ
        #[arg(long)]
        pick_languages: bool,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 選べる言語の一覧
    Languages,

    /// 設定
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// 既定の翻訳元言語を設定
        #[arg(long)]
        set_source: Option<String>,

        /// 既定の翻訳先言語を設定
        #[arg(long)]
        set_target: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
