//! シート単位の再分類
//!
//! 全行に分類ルールを適用し、派生列（v5b_*）を `New Sub-Sub-Category` の直後に挿入する。
//! あわせて変更統計（Summary1）と、キャッチオール行の移動先集計（Summary2）を作成する。

use crate::describe::{build_description, DEFAULT_DESCRIPTION_FIELDS};
use crate::error::Result;
use crate::table::{CellValue, Table};
use crate::taxonomy::{classify, Classification, CATCH_ALL};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

pub const NEW_CATEGORY: &str = "New Category";
pub const NEW_SUB_CATEGORY: &str = "New Sub-Category";
pub const NEW_SUB_SUB_CATEGORY: &str = "New Sub-Sub-Category";

pub const V5B_CATEGORY: &str = "v5b_Category";
pub const V5B_SUB_CATEGORY: &str = "v5b_SubCategory";
pub const V5B_SUB_SUB_CATEGORY: &str = "v5b_Sub-SubCategory";

/// 分類前に必ず存在させる列
pub const REQUIRED_COLUMNS: [&str; 3] = [NEW_CATEGORY, NEW_SUB_CATEGORY, NEW_SUB_SUB_CATEGORY];

/// 派生列（挿入順）
pub const DERIVED_COLUMNS: [&str; 3] = [V5B_CATEGORY, V5B_SUB_CATEGORY, V5B_SUB_SUB_CATEGORY];

/// 再分類オプション
#[derive(Debug, Clone)]
pub struct ReclassifyOptions {
    /// 検索用テキストに使うフィールド（この順で連結）
    pub description_fields: Vec<String>,
}

impl Default for ReclassifyOptions {
    fn default() -> Self {
        Self {
            description_fields: DEFAULT_DESCRIPTION_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// 変更統計（Summary1）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeSummary {
    pub total_rows: usize,
    pub changed_rows: usize,
    /// 変更率（%、小数2桁に丸め）
    pub changed_percent: f64,
    pub blank_sub_categories: usize,
    pub categories_used: usize,
}

impl ChangeSummary {
    pub const HEADERS: [&'static str; 5] = [
        "Total Rows",
        "Changed Rows",
        "Changed %",
        "Blank v5b Sub-Categories",
        "v5b Categories Used",
    ];

    /// 1行の表に変換
    pub fn to_table(&self) -> Table {
        Table::from_trusted(
            Self::HEADERS.iter().map(|h| h.to_string()).collect(),
            vec![vec![
                CellValue::Number(self.total_rows as f64),
                CellValue::Number(self.changed_rows as f64),
                CellValue::Number(self.changed_percent),
                CellValue::Number(self.blank_sub_categories as f64),
                CellValue::Number(self.categories_used as f64),
            ]],
        )
    }
}

/// キャッチオール行の移動先集計（Summary2 の1行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShift {
    pub prior_category: String,
    pub v5b_category: String,
    pub count: usize,
}

impl CategoryShift {
    pub const HEADERS: [&'static str; 3] = [NEW_CATEGORY, V5B_CATEGORY, "Count"];

    pub fn to_table(shifts: &[CategoryShift]) -> Table {
        Table::from_trusted(
            Self::HEADERS.iter().map(|h| h.to_string()).collect(),
            shifts
                .iter()
                .map(|s| {
                    vec![
                        CellValue::text(s.prior_category.as_str()),
                        CellValue::text(s.v5b_category.as_str()),
                        CellValue::Number(s.count as f64),
                    ]
                })
                .collect(),
        )
    }
}

/// 再分類の結果
#[derive(Debug, Clone)]
pub struct ReclassifyOutput {
    /// 派生列を挿入した表
    pub table: Table,
    /// 行ごとの分類結果（行順）
    pub classifications: Vec<Classification>,
    pub summary: ChangeSummary,
    pub shifts: Vec<CategoryShift>,
}

/// 表全体を再分類する
///
/// # Arguments
/// * `table` - 入力シート
/// * `options` - 再分類オプション
pub fn reclassify(mut table: Table, options: &ReclassifyOptions) -> Result<ReclassifyOutput> {
    for column in REQUIRED_COLUMNS {
        if table.ensure_column(column, CellValue::text("")) {
            warn!(column, "列が無いため空列を追加しました");
        }
    }

    // 再実行時は既存の派生列を置き換える
    for column in DERIVED_COLUMNS {
        if table.remove_column(column) {
            warn!(column, "既存の派生列を置き換えます");
        }
    }

    let classifications: Vec<Classification> = table
        .records()
        .enumerate()
        .map(|(index, record)| {
            let description = build_description(&record, &options.description_fields);
            let classification = classify(
                &record.text(NEW_CATEGORY),
                &record.text(NEW_SUB_CATEGORY),
                &description,
                &record.text(NEW_SUB_SUB_CATEGORY),
            );
            debug!(
                row = index + 1,
                category = %classification.category,
                sub_category = %classification.sub_category,
                resolution = ?classification.resolution,
                "分類"
            );
            classification
        })
        .collect();

    let summary = summarize_changes(&table, &classifications);
    let shifts = summarize_shifts(&table, &classifications);

    let values = classifications
        .iter()
        .map(|c| {
            vec![
                CellValue::text(c.category.as_str()),
                CellValue::text(c.sub_category.as_str()),
                CellValue::text(c.sub_sub_category.as_str()),
            ]
        })
        .collect();
    table.insert_columns_after(NEW_SUB_SUB_CATEGORY, &DERIVED_COLUMNS, values)?;

    Ok(ReclassifyOutput {
        table,
        classifications,
        summary,
        shifts,
    })
}

/// 変更統計を計算
fn summarize_changes(table: &Table, classifications: &[Classification]) -> ChangeSummary {
    let total_rows = classifications.len();

    let changed_rows = table
        .records()
        .zip(classifications)
        .filter(|(record, c)| {
            c.differs_from(&record.text(NEW_CATEGORY), &record.text(NEW_SUB_CATEGORY))
        })
        .count();

    let blank_sub_categories = classifications
        .iter()
        .filter(|c| c.sub_category.trim().is_empty())
        .count();

    let categories_used = classifications
        .iter()
        .map(|c| c.category.as_str())
        .filter(|c| !c.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .len();

    ChangeSummary {
        total_rows,
        changed_rows,
        changed_percent: round2(100.0 * changed_rows as f64 / total_rows.max(1) as f64),
        blank_sub_categories,
        categories_used,
    }
}

/// キャッチオール行を (既存カテゴリ, 新カテゴリ) で集計（0件の組は出力しない）
fn summarize_shifts(table: &Table, classifications: &[Classification]) -> Vec<CategoryShift> {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();

    for (record, c) in table.records().zip(classifications) {
        if record.text(NEW_SUB_CATEGORY) != CATCH_ALL {
            continue;
        }
        *counts
            .entry((record.text(NEW_CATEGORY), c.category.clone()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((prior_category, v5b_category), count)| CategoryShift {
            prior_category,
            v5b_category,
            count,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(item: &str, category: &str, sub_category: &str) -> Vec<CellValue> {
        vec![
            item.into(),
            category.into(),
            sub_category.into(),
            "SubSub".into(),
            "tail".into(),
        ]
    }

    fn inventory(rows: Vec<Vec<CellValue>>) -> Table {
        Table::new(
            vec![
                "Item".into(),
                NEW_CATEGORY.into(),
                NEW_SUB_CATEGORY.into(),
                NEW_SUB_SUB_CATEGORY.into(),
                "Qty".into(),
            ],
            rows,
        )
        .unwrap()
    }

    #[test]
    fn test_inserts_derived_columns_after_sub_sub_category() {
        let table = inventory(vec![row("brass ring terminal", "Electrical", CATCH_ALL)]);
        let output = reclassify(table, &ReclassifyOptions::default()).unwrap();

        assert_eq!(
            output.table.columns(),
            &[
                "Item",
                NEW_CATEGORY,
                NEW_SUB_CATEGORY,
                NEW_SUB_SUB_CATEGORY,
                V5B_CATEGORY,
                V5B_SUB_CATEGORY,
                V5B_SUB_SUB_CATEGORY,
                "Qty",
            ]
        );
        let record = output.table.record(0).unwrap();
        assert_eq!(record.text(V5B_CATEGORY), "Electrical");
        assert_eq!(record.text(V5B_SUB_CATEGORY), "Electrical Consumables");
        assert_eq!(record.text(V5B_SUB_SUB_CATEGORY), "SubSub");
        assert_eq!(record.text("Qty"), "tail");
    }

    #[test]
    fn test_missing_columns_are_created_and_appended() {
        let table = Table::new(
            vec!["Item".into(), "Description".into()],
            vec![vec!["Widget".into(), "blue".into()]],
        )
        .unwrap();
        let output = reclassify(table, &ReclassifyOptions::default()).unwrap();

        assert_eq!(
            output.table.columns(),
            &[
                "Item",
                "Description",
                NEW_CATEGORY,
                NEW_SUB_CATEGORY,
                NEW_SUB_SUB_CATEGORY,
                V5B_CATEGORY,
                V5B_SUB_CATEGORY,
                V5B_SUB_SUB_CATEGORY,
            ]
        );
        let record = output.table.record(0).unwrap();
        assert_eq!(record.get(NEW_CATEGORY), Some(&CellValue::text("")));
        assert_eq!(output.summary.changed_rows, 0);
        assert_eq!(output.summary.blank_sub_categories, 1);
        assert_eq!(output.summary.categories_used, 0);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let table = inventory(vec![
            row("fuse", "Electrical", CATCH_ALL),
            row("pump", "Plumbing", CATCH_ALL),
            row("halyard", "Sailing", CATCH_ALL),
        ]);
        let output = reclassify(table, &ReclassifyOptions::default()).unwrap();
        let subs: Vec<String> = output
            .table
            .records()
            .map(|r| r.text(V5B_SUB_CATEGORY))
            .collect();
        assert_eq!(subs, vec!["Electrical Consumables", CATCH_ALL, "Running Rigging"]);
    }

    #[test]
    fn test_change_summary() {
        let table = inventory(vec![
            row("fuse", "Electrical", CATCH_ALL),
            row("pump", "Plumbing", CATCH_ALL),
            row("chair", "Recreational", "Furniture"),
        ]);
        let output = reclassify(table, &ReclassifyOptions::default()).unwrap();

        assert_eq!(
            output.summary,
            ChangeSummary {
                total_rows: 3,
                changed_rows: 1,
                changed_percent: 33.33,
                blank_sub_categories: 0,
                categories_used: 3,
            }
        );
    }

    #[test]
    fn test_change_summary_empty_table() {
        let output = reclassify(inventory(vec![]), &ReclassifyOptions::default()).unwrap();
        assert_eq!(output.summary.total_rows, 0);
        assert_eq!(output.summary.changed_percent, 0.0);
        assert!(output.shifts.is_empty());
        assert_eq!(output.table.columns().len(), 8);
    }

    #[test]
    fn test_null_prior_values_compare_as_empty() {
        let table = inventory(vec![vec![
            "thing".into(),
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
        ]]);
        let output = reclassify(table, &ReclassifyOptions::default()).unwrap();
        assert_eq!(output.summary.changed_rows, 0);
        assert_eq!(output.summary.blank_sub_categories, 1);
    }

    #[test]
    fn test_category_shifts_only_catch_all_rows() {
        let table = inventory(vec![
            row("halon bottle", "Hull", CATCH_ALL),
            row("smoke detector", "Hull", CATCH_ALL),
            row("anchor", "Hull", CATCH_ALL),
            row("dog food", "Recreational", CATCH_ALL),
            row("fire extinguisher", "Hull", "Deck Hardware"),
        ]);
        let output = reclassify(table, &ReclassifyOptions::default()).unwrap();

        let shifts: Vec<(&str, &str, usize)> = output
            .shifts
            .iter()
            .map(|s| (s.prior_category.as_str(), s.v5b_category.as_str(), s.count))
            .collect();
        assert_eq!(
            shifts,
            vec![
                ("Hull", "Hull", 1),
                ("Hull", "Safety", 2),
                ("Recreational", "Recreational", 1),
            ]
        );
    }

    #[test]
    fn test_custom_description_fields() {
        let table = Table::new(
            vec!["Item".into(), "Notes".into(), NEW_CATEGORY.into(), NEW_SUB_CATEGORY.into()],
            vec![vec!["Spare".into(), "winch handle".into(), "Sailing".into(), CATCH_ALL.into()]],
        )
        .unwrap();

        let default = reclassify(table.clone(), &ReclassifyOptions::default()).unwrap();
        assert_eq!(default.classifications[0].sub_category, "Sailing Consumables");

        let options = ReclassifyOptions {
            description_fields: vec!["Notes".into()],
        };
        let custom = reclassify(table, &options).unwrap();
        assert_eq!(custom.classifications[0].sub_category, "Winches & Deck Hardware");
    }

    #[test]
    fn test_rerun_replaces_derived_columns() {
        let table = inventory(vec![row("bandages", "Safety", CATCH_ALL)]);
        let first = reclassify(table, &ReclassifyOptions::default()).unwrap();
        let second = reclassify(first.table.clone(), &ReclassifyOptions::default()).unwrap();

        assert_eq!(second.table.columns(), first.table.columns());
        assert_eq!(second.table, first.table);
    }

    #[test]
    fn test_fallback_rows_reach_fixed_point() {
        let table = inventory(vec![
            row("bandages", "Safety", CATCH_ALL),
            row("", "Electrical", CATCH_ALL),
        ]);
        let first = reclassify(table, &ReclassifyOptions::default()).unwrap();

        // 派生列を既存列として再分類
        let promoted_rows = first
            .classifications
            .iter()
            .map(|c| {
                vec![
                    "".into(),
                    c.category.as_str().into(),
                    c.sub_category.as_str().into(),
                    c.sub_sub_category.as_str().into(),
                    CellValue::Empty,
                ]
            })
            .collect();
        let second = reclassify(inventory(promoted_rows), &ReclassifyOptions::default()).unwrap();

        for (a, b) in first.classifications.iter().zip(&second.classifications) {
            assert_eq!(a.category, b.category);
            assert_eq!(a.sub_category, b.sub_category);
        }
        assert_eq!(second.summary.changed_rows, 0);
    }

    #[test]
    fn test_summary_tables() {
        let table = inventory(vec![row("fuse", "Electrical", CATCH_ALL)]);
        let output = reclassify(table, &ReclassifyOptions::default()).unwrap();

        let summary = output.summary.to_table();
        assert_eq!(summary.columns(), &ChangeSummary::HEADERS);
        assert_eq!(summary.rows()[0][2], CellValue::Number(100.0));

        let shifts = CategoryShift::to_table(&output.shifts);
        assert_eq!(shifts.columns(), &CategoryShift::HEADERS);
        assert_eq!(shifts.rows()[0][2], CellValue::Number(1.0));
    }
}
