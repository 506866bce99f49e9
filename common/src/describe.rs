//! 検索用テキストの組み立て
//!
//! レコードの自由記述フィールドを小文字化して1つの文字列に連結する。
//! キーワード照合はこの文字列に対する部分一致で行う。

use crate::table::Record;

/// 既定の検索対象フィールド
pub const DEFAULT_DESCRIPTION_FIELDS: &[&str] = &["Item", "Description", "Subcategory"];

/// 指定フィールドを小文字化して半角スペースで連結する
///
/// 列が無い・空セルのフィールドは読み飛ばす（空文字列で埋めない）。
pub fn build_description<S: AsRef<str>>(record: &Record<'_>, fields: &[S]) -> String {
    fields
        .iter()
        .filter_map(|field| record.get(field.as_ref()))
        .filter_map(|cell| cell.as_text())
        .map(|text| text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellValue, Table};

    fn table(columns: &[&str], row: Vec<CellValue>) -> Table {
        Table::new(columns.iter().map(|c| c.to_string()).collect(), vec![row]).unwrap()
    }

    #[test]
    fn test_lowercases_and_joins_in_field_order() {
        let t = table(
            &["Description", "Item", "Subcategory"],
            vec!["Brass RING".into(), "Terminal".into(), "Wiring".into()],
        );
        let record = t.record(0).unwrap();
        assert_eq!(
            build_description(&record, DEFAULT_DESCRIPTION_FIELDS),
            "terminal brass ring wiring"
        );
    }

    #[test]
    fn test_skips_missing_and_null_fields() {
        let t = table(&["Item", "Subcategory"], vec![CellValue::Empty, "Fuse".into()]);
        let record = t.record(0).unwrap();
        // 余計な空白が入らないこと
        assert_eq!(build_description(&record, DEFAULT_DESCRIPTION_FIELDS), "fuse");
    }

    #[test]
    fn test_numbers_are_converted_to_text() {
        let t = table(&["Item", "Description"], vec![CellValue::Number(12.0), "Volt".into()]);
        let record = t.record(0).unwrap();
        assert_eq!(build_description(&record, &["Item", "Description"]), "12 volt");
    }

    #[test]
    fn test_no_fields_gives_empty_string() {
        let t = table(&["Other"], vec!["anything".into()]);
        let record = t.record(0).unwrap();
        assert_eq!(build_description(&record, DEFAULT_DESCRIPTION_FIELDS), "");
        assert_eq!(build_description::<&str>(&record, &[]), "");
    }
}
