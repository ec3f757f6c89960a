//! Descriptor file discovery

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The root of a scan cannot be walked.
#[derive(Error, Debug)]
pub enum TraversalError {
    #[error("cannot access {path}: {source}")]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },
}

/// Find every regular file under `root` whose file name is `descriptor_name`.
///
/// Hidden directories and ignore files get no special treatment and symlinks
/// are not followed. Entries are visited in file-name order, so the result
/// is stable across runs. Entries that cannot be read are skipped.
pub fn discover(root: &Path, descriptor_name: &str) -> Result<Vec<PathBuf>, TraversalError> {
    let inaccessible = |source| TraversalError::Inaccessible {
        path: root.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(root).map_err(inaccessible)?;
    if !metadata.is_dir() {
        return Err(TraversalError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    // The walker reports an unreadable root like any other entry
    std::fs::read_dir(root).map_err(inaccessible)?;

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut found = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Cannot read entry: {}", e);
                continue;
            }
        };

        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        if is_file && entry.path().ends_with(descriptor_name) {
            tracing::debug!("Found descriptor: {}", entry.path().display());
            found.push(entry.into_path());
        }
    }

    Ok(found)
}
