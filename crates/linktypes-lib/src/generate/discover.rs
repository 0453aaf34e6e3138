use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// Directories never searched for manifests.
const IGNORED_DIRS: &[&str] = &["node_modules"];

/// Find every file named `file_name` below `root`.
///
/// Hidden directories and `node_modules` are not descended into. Results come
/// in depth-first order, siblings sorted by name. An unreadable root is an
/// error; unreadable entries deeper down are logged and skipped.
pub fn find_manifests(root: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry));

    let mut manifests = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(Error::Walk {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                warn!(%err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() && entry.file_name() == file_name {
            manifests.push(entry.into_path());
        }
    }

    Ok(manifests)
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let Some(name) = entry.file_name().to_str() else {
        return false;
    };
    name.starts_with('.') || IGNORED_DIRS.contains(&name)
}
