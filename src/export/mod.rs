pub mod archive;
pub mod workbook;

pub use archive::create_archive;
pub use workbook::{write_workbook, SHIFT_SHEET, SUMMARY_SHEET};
