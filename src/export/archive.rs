//! 出力ファイルのZIP圧縮

use crate::error::{ReclassError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// `<出力ファイル名>.zip` のパス
pub fn archive_path(output: &Path) -> PathBuf {
    output.with_extension("zip")
}

/// 出力ファイルを1エントリだけ含むZIPを作成し、そのパスを返す
pub fn create_archive(output: &Path) -> Result<PathBuf> {
    let entry_name = output
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| ReclassError::Archive(format!("ファイル名が不正: {}", output.display())))?;

    let zip_path = archive_path(output);
    let mut source = File::open(output)?;
    let mut zip = ZipWriter::new(File::create(&zip_path)?);

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(entry_name, options)
        .map_err(|e| ReclassError::Archive(e.to_string()))?;
    std::io::copy(&mut source, &mut zip)?;
    zip.finish().map_err(|e| ReclassError::Archive(e.to_string()))?;

    Ok(zip_path)
}
