use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReclassError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("シートが見つかりません: {sheet}（存在するシート: {available}）")]
    SheetNotFound { sheet: String, available: String },

    #[error("ワークブック読み込みエラー: {0}")]
    WorkbookRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("ZIP作成エラー: {0}")]
    Archive(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] inventory_reclass_common::Error),
}

pub type Result<T> = std::result::Result<T, ReclassError>;
