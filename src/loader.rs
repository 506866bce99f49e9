//! ワークブック読み込み（calamine）
//!
//! 指定シートの1行目をヘッダーとして `Table` に変換する。
//! - 空のヘッダーセルは `Unnamed: <列番号>`
//! - 重複したヘッダーは `.1`, `.2` … を付けて一意化

use crate::error::{ReclassError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use inventory_reclass_common::{CellValue, Table};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// シート名一覧を取得
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    ensure_exists(path)?;
    let workbook = open_workbook_auto(path)
        .map_err(|e| ReclassError::WorkbookRead(format!("{}: {}", path.display(), e)))?;
    Ok(workbook.sheet_names().to_vec())
}

/// 指定シートを表として読み込む
pub fn load_sheet(path: &Path, sheet: &str) -> Result<Table> {
    ensure_exists(path)?;

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ReclassError::WorkbookRead(format!("{}: {}", path.display(), e)))?;

    let names = workbook.sheet_names().to_vec();
    if !names.iter().any(|n| n == sheet) {
        return Err(ReclassError::SheetNotFound {
            sheet: sheet.to_string(),
            available: names.join(", "),
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| ReclassError::WorkbookRead(format!("シート「{}」: {}", sheet, e)))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        info!(sheet, "空のシート");
        return Ok(Table::default());
    };

    let columns = header_names(header);
    let body: Vec<Vec<CellValue>> = rows.map(|row| row.iter().map(to_cell).collect()).collect();
    info!(sheet, rows = body.len(), columns = columns.len(), "シート読み込み");

    Ok(Table::new(columns, body)?)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReclassError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// ヘッダー行から一意な列名を作る
fn header_names(header: &[Data]) -> Vec<String> {
    let mut seen = HashSet::new();
    header
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let base = match to_cell(cell).as_text() {
                Some(name) if !name.trim().is_empty() => name,
                _ => format!("Unnamed: {}", index),
            };
            let mut name = base.clone();
            let mut suffix = 1;
            while !seen.insert(name.clone()) {
                name = format!("{}.{}", base, suffix);
                suffix += 1;
            }
            name
        })
        .collect()
}

fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(d) => CellValue::DateTime(d.as_f64()),
        other => CellValue::Text(other.to_string()),
    }
}
