//! Download of the published call-set table.
//!
//! The canonical source is the supplementary table of the article; a
//! deployment normally points `--source-url` at a mirror serving a delimited
//! export, or bypasses the download entirely with `--data`. A failed download
//! is not a data error: the pipeline halts gracefully with the empty final
//! list already on disk.

use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Published location of the fusion call-set table
pub const DEFAULT_SOURCE_URL: &str =
    "http://www.cell.com/cms/attachment/2119154477/2089888842/mmc2.xlsx";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Download `url` to `dest`.
///
/// # Errors
///
/// Returns `FetchError::Http` on a transport failure, `FetchError::Status`
/// on a non-success response, or `FetchError::Io` if the body cannot be
/// written to `dest`.
pub fn download(url: &str, dest: &Path) -> Result<(), FetchError> {
    info!("downloading {url}");

    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.bytes()?;
    std::fs::write(dest, &body)?;
    info!("saved {} bytes to {}", body.len(), dest.display());
    Ok(())
}
