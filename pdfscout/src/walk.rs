use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::errors::{SearchError, SearchResult};
use crate::filters::should_include_file;

/// Lists every regular file under `root` whose name ends with `.pdf`
/// (case-insensitive), minus anything matching `ignore_patterns`.
///
/// Hidden and VCS-ignored files are included, as are symlinks to regular
/// files. Entries that cannot be read
/// are logged and skipped; only a missing or non-directory root is an error.
pub fn find_pdfs(root: &Path, ignore_patterns: &[String]) -> SearchResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(SearchError::directory_not_found(root));
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    debug!("Scanning directory: {}", root.display());
    let mut files = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                // Symlinked files count, symlinked directories are not descended
                let is_file = entry.file_type().is_some_and(|ft| {
                    ft.is_file() || (ft.is_symlink() && entry.path().is_file())
                });
                if is_file && should_include_file(entry.path(), ignore_patterns) {
                    trace!("Adding file: {}", entry.path().display());
                    files.push(entry.into_path());
                }
            }
            Err(e) => warn!("Skipping unreadable entry: {}", e),
        }
    }

    debug!("Found {} PDF files under {}", files.len(), root.display());
    Ok(files)
}
