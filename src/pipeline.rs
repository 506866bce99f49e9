//! 再分類の一括処理
//!
//! 入力確認 → シート読み込み → 再分類 → ワークブック出力（→ ZIP）

use crate::config::Config;
use crate::error::{ReclassError, Result};
use crate::export;
use crate::loader;
use inventory_reclass_common::{reclassify, ChangeSummary, ReclassifyOptions};
use std::path::{Path, PathBuf};
use tracing::info;

/// 実行パラメータ
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub sheet: String,
    /// 省略時は `<入力ファイル名>_v5b_<シート名>.xlsx`
    pub output: Option<PathBuf>,
    pub zip: bool,
    pub reclassify: ReclassifyOptions,
}

/// 実行結果
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output: PathBuf,
    pub archive: Option<PathBuf>,
    pub summary: ChangeSummary,
    pub shift_groups: usize,
}

/// 既定の出力パス
pub fn default_output_path(input: &Path, sheet: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    let file_name = format!("{}_v5b_{}.xlsx", stem, sanitize(sheet));
    input
        .parent()
        .map(|p| p.join(&file_name))
        .unwrap_or_else(|| PathBuf::from(&file_name))
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// 設定ファイルを反映して `run` を実行する
///
/// 入力ファイルの確認を設定の読み込みより先に行う。
pub fn run_with_config(
    input: PathBuf,
    sheet: String,
    output: Option<PathBuf>,
    zip: bool,
    config_path: &Path,
) -> Result<RunReport> {
    ensure_input(&input)?;
    let config = Config::load_from(config_path)?;

    run(&RunOptions {
        input,
        sheet,
        output,
        zip: zip || config.zip_by_default,
        reclassify: config.reclassify_options(),
    })
}

fn ensure_input(input: &Path) -> Result<()> {
    if input.exists() {
        Ok(())
    } else {
        Err(ReclassError::FileNotFound(input.display().to_string()))
    }
}

/// 1シートを再分類してワークブックを出力する
///
/// 入力ファイルが無ければ何も出力せずにエラーを返す。
pub fn run(options: &RunOptions) -> Result<RunReport> {
    ensure_input(&options.input)?;

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&options.input, &options.sheet));

    println!("[1/3] シート「{}」を読み込み中...", options.sheet);
    let table = loader::load_sheet(&options.input, &options.sheet)?;
    println!("✔ {}行を読み込み\n", table.len());

    println!("[2/3] 再分類中...");
    let output = reclassify(table, &options.reclassify)?;
    println!(
        "✔ 変更 {}/{}行 ({}%)\n",
        output.summary.changed_rows, output.summary.total_rows, output.summary.changed_percent
    );

    println!("[3/3] 結果を保存中...");
    export::write_workbook(&output, &options.sheet, &output_path)?;
    info!(path = %output_path.display(), "ワークブック出力");
    println!("✔ 結果を保存: {}", output_path.display());

    let archive = if options.zip {
        let zip_path = export::create_archive(&output_path)?;
        println!("✔ ZIPを作成: {}", zip_path.display());
        Some(zip_path)
    } else {
        None
    };

    Ok(RunReport {
        output: output_path,
        archive,
        summary: output.summary,
        shift_groups: output.shifts.len(),
    })
}
