//! The rename pipeline: ISBN extraction, catalog lookup, candidate selection,
//! and the final filesystem rename.

use crate::catalog::CatalogClient;
use crate::error::RenameError;
use crate::naming::build_candidates;
use crate::prompt::{CandidateSelector, choose};
use std::fs;
use std::path::{Path, PathBuf};

/// Extract the candidate ISBN from the file's base name. A stem without a
/// single digit is rejected before any network call is made.
pub fn isbn_from_path(path: &Path) -> Result<String, RenameError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    if !stem.chars().any(|c| c.is_ascii_digit()) {
        return Err(RenameError::InvalidIsbn(stem.to_string()));
    }

    Ok(stem.to_string())
}

/// Resolve the new file name for `path`: look the ISBN up in the catalog,
/// build candidates from the usable records, let the selector disambiguate,
/// and re-attach the original extension. Any stage failure propagates
/// unchanged. Never touches the filesystem.
pub fn resolve_new_name(
    path: &Path,
    catalog: &CatalogClient,
    selector: &mut dyn CandidateSelector,
) -> Result<String, RenameError> {
    let isbn = isbn_from_path(path)?;
    let volumes = catalog.lookup(&isbn)?;

    let candidates = build_candidates(&volumes, &isbn);
    if candidates.is_empty() {
        return Err(RenameError::NoValidRecords(isbn));
    }
    tracing::debug!(isbn, count = candidates.len(), "built filename candidates");

    let stem = choose(candidates, selector)?;
    Ok(format!("{stem}{}", extension_of(path)))
}

/// The original extension with its leading dot, or empty when there is none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

/// Rename `path` to `new_name` inside its own directory. An existing
/// destination is refused rather than overwritten.
pub fn rename_in_place(path: &Path, new_name: &str) -> Result<PathBuf, RenameError> {
    let target = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(new_name),
        _ => PathBuf::from(new_name),
    };

    if target.exists() {
        return Err(RenameError::Provider {
            path: target,
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "destination already exists",
            ),
        });
    }

    fs::rename(path, &target).map_err(|source| RenameError::Provider {
        path: target.clone(),
        source,
    })?;

    Ok(target)
}
