//! # PDF Export
//!
//! Writes rendered reports to disk. Writes are atomic: bytes go to a `.tmp`
//! sibling, are synced, then renamed over the target, so an interrupted
//! export never leaves a truncated PDF behind. An existing file at the target
//! path is overwritten.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pv_core::export::{export_purchase_list, DEFAULT_PDF_FILE_NAME};
//! use pv_core::params::InstallationParameters;
//! use std::path::Path;
//!
//! let bom = export_purchase_list(&InstallationParameters::default(), Path::new(DEFAULT_PDF_FILE_NAME))?;
//! println!("{} lines exported", bom.len());
//! # Ok::<(), pv_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::bom::{build_purchase_list, BillOfMaterials};
use crate::errors::{CalcError, CalcResult};
use crate::params::InstallationParameters;
use crate::pdf::render_bom_pdf;

/// File name offered when the user does not pick one
pub const DEFAULT_PDF_FILE_NAME: &str = "purchase_list.pdf";

/// Temporary path used while writing `path`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Write PDF bytes to `path` with atomic write semantics.
///
/// The write process:
/// 1. Write to a temporary file (`<path>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over `path` (atomic on most filesystems)
pub fn write_pdf(bytes: &[u8], path: &Path) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote purchase list PDF");
    Ok(())
}

/// Validate, compute, render and write in one step.
///
/// Returns the list that was exported so callers can also display it.
pub fn export_purchase_list(params: &InstallationParameters, path: &Path) -> CalcResult<BillOfMaterials> {
    let bom = build_purchase_list(params)?;
    let bytes = render_bom_pdf(&bom, params)?;
    write_pdf(&bytes, path)?;
    Ok(bom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_pdf_path(name: &str) -> PathBuf {
        temp_dir().join(format!("cubica_test_{}.pdf", name))
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/list.pdf"));
        assert_eq!(tmp, Path::new("/path/to/list.pdf.tmp"));
    }

    #[test]
    fn test_atomic_write_creates_no_tmp_file() {
        let path = temp_pdf_path("atomic");
        write_pdf(b"%PDF-1.7 test", &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.7 test");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let path = temp_pdf_path("overwrite");
        write_pdf(b"first version, longer", &path).unwrap();
        write_pdf(b"second", &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let path = temp_dir()
            .join("cubica_missing_dir_for_test")
            .join("list.pdf");
        let err = write_pdf(b"%PDF", &path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_export_defaults_end_to_end() {
        crate::logging::init_test();
        let path = temp_pdf_path("end_to_end");
        let bom = export_purchase_list(&InstallationParameters::default(), &path).unwrap();

        assert_eq!(bom.len(), 47);
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_export_rejects_invalid_parameters_before_writing() {
        let path = temp_pdf_path("invalid");
        let _ = fs::remove_file(&path);

        let params = InstallationParameters {
            mounting_rail_length_m: 0.0,
            ..Default::default()
        };
        let err = export_purchase_list(&params, &path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert!(!path.exists());
    }
}
