//! File discovery and writing utilities.
//!
//! - [`find_index_files`]: locate every `index.md` under the category
//!   directories of a documentation tree
//! - [`write_atomic`]: write a file via a temp file and rename

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::{Error, Result};

/// Name of the documents the pipeline consumes.
pub const INDEX_FILE_NAME: &str = "index.md";

/// Find all `index.md` files (case-insensitive) under `root/<category>`.
///
/// Categories whose directory does not exist are skipped. The result is
/// sorted so repeated runs visit documents in the same order.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use skillgen_core::util::files::find_index_files;
///
/// let files = find_index_files(Path::new("docs"), &["patterns", "build"]).unwrap();
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
pub fn find_index_files<S: AsRef<str>>(root: &Path, categories: &[S]) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();

    for category in categories {
        let category_dir = root.join(category.as_ref());
        if !category_dir.is_dir() {
            log::debug!("category directory missing, skipping: {}", category_dir.display());
            continue;
        }

        let pattern = format!(
            "{}/**/{}",
            Pattern::escape(&category_dir.to_string_lossy()),
            INDEX_FILE_NAME
        );
        let paths = glob::glob_with(&pattern, options)
            .map_err(|e| Error::config(format!("Invalid discovery pattern {pattern}: {e}")))?;

        for entry in paths {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                Error::io_with_path(std::io::Error::from(e), &path)
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Write `contents` to `path` atomically.
///
/// Parent directories are created as needed. Data goes to a sibling
/// `.tmp` file first and is renamed into place, so readers never observe a
/// partially written file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = PathBuf::from(temp);

    fs::write(&temp, contents).map_err(|e| Error::io_with_path(e, &temp))?;

    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(Error::io_with_path(e, path));
    }

    Ok(())
}
