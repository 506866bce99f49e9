//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use inventory_reclass::error::ReclassError;
use inventory_reclass::loader;
use inventory_reclass::pipeline::{self, RunOptions};
use inventory_reclass_common::ReclassifyOptions;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない入力ファイル
#[test]
fn test_missing_input_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("out.xlsx");

    let result = pipeline::run(&RunOptions {
        input: dir.path().join("nope.xlsx"),
        sheet: "Salon".to_string(),
        output: Some(output.clone()),
        zip: true,
        reclassify: ReclassifyOptions::default(),
    });

    assert!(matches!(result, Err(ReclassError::FileNotFound(_))));
    // 出力は作成されない
    assert!(!output.exists());
    assert!(!dir.path().join("out.zip").exists());
}

#[test]
fn test_sheet_names_missing_file() {
    let result = loader::sheet_names(Path::new("/nonexistent/path/12345.xlsx"));
    assert!(matches!(result, Err(ReclassError::FileNotFound(_))));
}

/// ワークブックではないファイル
#[test]
fn test_not_a_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fake.xlsx");
    std::fs::write(&path, "not a workbook").unwrap();

    let result = loader::load_sheet(&path, "Salon");
    assert!(matches!(result, Err(ReclassError::WorkbookRead(_))));
}

/// ReclassErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ReclassError::Config("テスト設定エラー".to_string()),
        ReclassError::FileNotFound("book.xlsx".to_string()),
        ReclassError::SheetNotFound {
            sheet: "Galley".to_string(),
            available: "Salon".to_string(),
        },
        ReclassError::WorkbookRead("壊れたファイル".to_string()),
        ReclassError::ExcelGeneration("Excel生成エラー".to_string()),
        ReclassError::Archive("ZIPエラー".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_sheet_not_found_message() {
    let err = ReclassError::SheetNotFound {
        sheet: "Galley".to_string(),
        available: "Salon, Notes".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Galley"));
    assert!(display.contains("Salon, Notes"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ReclassError = io_err.into();

    assert!(matches!(err, ReclassError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ReclassError = json_err.into();

    assert!(matches!(err, ReclassError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = inventory_reclass_common::Error::Table("列名が重複しています".to_string());
    let err: ReclassError = common_err.into();

    assert!(matches!(err, ReclassError::Common(_)));
    assert!(format!("{}", err).contains("列名が重複しています"));
}
