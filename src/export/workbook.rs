//! 出力ワークブック生成（rust_xlsxwriter）
//!
//! 再分類後のシート、Summary1、Summary2 の3シートを書き出す。

use crate::error::{ReclassError, Result};
use inventory_reclass_common::{CategoryShift, CellValue, ReclassifyOutput, Table};
use rust_xlsxwriter::*;
use std::path::Path;

pub const SUMMARY_SHEET: &str = "v5b_Summary1";
pub const SHIFT_SHEET: &str = "v5b_Summary2";

/// 出力ワークブックを保存
///
/// # Arguments
/// * `output` - 再分類結果
/// * `sheet_name` - メインシート名（入力シート名をそのまま使う）
/// * `path` - 保存先
pub fn write_workbook(output: &ReclassifyOutput, sheet_name: &str, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    write_sheet(&mut workbook, sheet_name, &output.table, &header_format, false)?;
    write_sheet(&mut workbook, SUMMARY_SHEET, &output.summary.to_table(), &header_format, true)?;
    write_sheet(
        &mut workbook,
        SHIFT_SHEET,
        &CategoryShift::to_table(&output.shifts),
        &header_format,
        true,
    )?;

    workbook
        .save(path)
        .map_err(|e| ReclassError::ExcelGeneration(format!("保存エラー: {}", e)))?;

    Ok(())
}

fn write_sheet(
    workbook: &mut Workbook,
    name: &str,
    table: &Table,
    header_format: &Format,
    autofit: bool,
) -> Result<()> {
    let date_formats = DateFormats::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(name)
        .map_err(|e| ReclassError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    for (col, column) in table.columns().iter().enumerate() {
        let col = column_number(col)?;
        worksheet
            .write_string_with_format(0, col, column, header_format)
            .map_err(|e| ReclassError::ExcelGeneration(format!("ヘッダー書き込みエラー: {}", e)))?;
    }

    for (index, row) in table.rows().iter().enumerate() {
        let row_number = u32::try_from(index + 1)
            .map_err(|_| ReclassError::ExcelGeneration("行数が上限を超えています".into()))?;
        for (col, cell) in row.iter().enumerate() {
            write_cell(worksheet, row_number, column_number(col)?, cell, &date_formats)?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| ReclassError::ExcelGeneration(format!("ウィンドウ枠固定エラー: {}", e)))?;

    if autofit {
        worksheet.autofit();
    }

    Ok(())
}

/// 日付セル用の表示形式
struct DateFormats {
    date: Format,
    datetime: Format,
}

impl DateFormats {
    fn new() -> Self {
        Self {
            date: Format::new().set_num_format("yyyy-mm-dd"),
            datetime: Format::new().set_num_format("yyyy-mm-dd hh:mm:ss"),
        }
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    date_formats: &DateFormats,
) -> Result<()> {
    let result = match cell {
        // 空セルは書き込まない
        CellValue::Empty => return Ok(()),
        CellValue::Text(s) => worksheet.write_string(row, col, s),
        CellValue::Number(n) => worksheet.write_number(row, col, *n),
        CellValue::Bool(b) => worksheet.write_boolean(row, col, *b),
        // シリアル値のまま書き、表示形式で日付として扱わせる
        CellValue::DateTime(serial) => {
            let format = if serial.fract() == 0.0 {
                &date_formats.date
            } else {
                &date_formats.datetime
            };
            worksheet.write_number_with_format(row, col, *serial, format)
        }
    };
    result
        .map(|_| ())
        .map_err(|e| ReclassError::ExcelGeneration(format!("セル書き込みエラー({}, {}): {}", row, col, e)))
}

fn column_number(index: usize) -> Result<u16> {
    u16::try_from(index)
        .map_err(|_| ReclassError::ExcelGeneration("列数が上限を超えています".into()))
}
