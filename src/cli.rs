use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inventory-reclass")]
#[command(about = "在庫台帳のカテゴリ再分類ツール（Taxonomy v5b）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// シートを再分類してサマリー付きのワークブックを出力
    Reclassify {
        /// 入力ワークブック
        #[arg(short, long, required = true)]
        input: PathBuf,

        /// 処理するシート名
        #[arg(short, long, required = true)]
        sheet: String,

        /// 出力ワークブック（デフォルト: <入力名>_v5b_<シート名>.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力ファイルのZIPも作成
        #[arg(long)]
        zip: bool,
    },

    /// ワークブックのシート名一覧を表示
    Sheets {
        /// 入力ワークブック
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 1件だけ分類して結果をJSONで表示
    Classify {
        /// 既存のカテゴリ（New Category）
        #[arg(short, long)]
        category: String,

        /// 既存のサブカテゴリ（New Sub-Category）
        #[arg(long, default_value = "Other Spare Parts")]
        sub_category: String,

        /// 既存のサブサブカテゴリ（New Sub-Sub-Category）
        #[arg(long, default_value = "")]
        sub_sub_category: String,

        /// 品目・説明などの検索用テキスト
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 検索用フィールドを設定（カンマ区切り）
        #[arg(long)]
        set_fields: Option<String>,

        /// ZIPを常に作成するか
        #[arg(long)]
        zip_by_default: Option<bool>,

        /// 既定値に戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
