//! 表形式データモジュール
//!
//! ワークシート1枚分のデータを列名付きの行として保持する。
//! 読み書き（Excel）は呼び出し側の責務で、ここではメモリ上の操作のみ扱う。

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// セルの値
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// 空セル（null）
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// 日付・日時（Excel シリアル値のまま保持）
    DateTime(f64),
}

impl CellValue {
    /// 文字列セルを作成
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// テキスト表現を取得（空セルは None）
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            other => Some(other.to_string()),
        }
    }

    /// テキスト表現を取得（空セルは空文字列）
    pub fn text_or_empty(&self) -> String {
        self.as_text().unwrap_or_default()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            // 整数値は小数点なしで表示
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(serial) => match serial_to_datetime(*serial) {
                Some(dt) if dt.time() == NaiveTime::MIN => write!(f, "{}", dt.format("%Y-%m-%d")),
                Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
                None => write!(f, "{}", serial),
            },
        }
    }
}

/// Excel シリアル値（1900年方式）を日時に変換
fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);
    let seconds = TimeDelta::try_seconds((serial * 86_400.0).round() as i64)?;
    epoch.checked_add_signed(seconds)
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// 列名付きの表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// 列名と行から表を作成
    ///
    /// 列数に満たない行は空セルで埋める。列数を超える行と重複した列名はエラー。
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(Error::Table(format!("列名が重複しています: {}", column)));
            }
        }

        let width = columns.len();
        let mut padded = Vec::with_capacity(rows.len());
        for (index, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(Error::Table(format!(
                    "{}行目のセル数({})が列数({})を超えています",
                    index + 1,
                    row.len(),
                    width
                )));
            }
            row.resize(width, CellValue::Empty);
            padded.push(row);
        }

        Ok(Self { columns, rows: padded })
    }

    /// 列名が一意で行幅が揃っていることが分かっている場合の構築
    pub(crate) fn from_trusted(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// 行をレコードとして参照
    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.rows.get(index).map(|cells| Record {
            columns: &self.columns,
            cells,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|cells| Record {
            columns: &self.columns,
            cells,
        })
    }

    /// 列が無ければ末尾に追加し、全行を既定値で埋める
    ///
    /// 追加した場合は true を返す。
    pub fn ensure_column(&mut self, name: &str, default: CellValue) -> bool {
        if self.has_column(name) {
            return false;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(default.clone());
        }
        true
    }

    /// 列を削除（存在した場合は true）
    pub fn remove_column(&mut self, name: &str) -> bool {
        let Some(index) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
        true
    }

    /// `anchor` 列の直後に列を挿入する（`anchor` が無ければ末尾に追加）
    ///
    /// `values` は行ごとの挿入値で、各要素の長さは `names` と一致していること。
    pub fn insert_columns_after(
        &mut self,
        anchor: &str,
        names: &[&str],
        values: Vec<Vec<CellValue>>,
    ) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(Error::Table(format!(
                "挿入行数({})が表の行数({})と一致しません",
                values.len(),
                self.rows.len()
            )));
        }
        if let Some(name) = names.iter().find(|n| self.has_column(n)) {
            return Err(Error::Table(format!("列名が重複しています: {}", name)));
        }

        if let Some((index, inserted)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| v.len() != names.len())
        {
            return Err(Error::Table(format!(
                "{}行目の挿入セル数({})が列数({})と一致しません",
                index + 1,
                inserted.len(),
                names.len()
            )));
        }

        let at = self
            .column_index(anchor)
            .map(|i| i + 1)
            .unwrap_or(self.columns.len());

        self.columns
            .splice(at..at, names.iter().map(|n| n.to_string()));
        for (row, inserted) in self.rows.iter_mut().zip(values) {
            row.splice(at..at, inserted);
        }

        Ok(())
    }
}

/// 表の1行への参照
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    cells: &'a [CellValue],
}

impl<'a> Record<'a> {
    /// 列名でセルを取得（列が無ければ None）
    pub fn get(&self, name: &str) -> Option<&'a CellValue> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|i| self.cells.get(i))
    }

    /// 列の値を文字列で取得（列が無い・空セルは空文字列）
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(CellValue::text_or_empty).unwrap_or_default()
    }
}
