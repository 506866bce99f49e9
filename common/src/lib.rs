//! Inventory Reclass Common Library
//!
//! 分類ルールエンジンと表データ操作（I/Oを含まないコア部分）

pub mod describe;
pub mod error;
pub mod reclassify;
pub mod table;
pub mod taxonomy;

pub use describe::{build_description, DEFAULT_DESCRIPTION_FIELDS};
pub use error::{Error, Result};
pub use reclassify::{reclassify, CategoryShift, ChangeSummary, ReclassifyOptions, ReclassifyOutput};
pub use table::{CellValue, Record, Table};
pub use taxonomy::{classify, Classification, Resolution, CATCH_ALL};
