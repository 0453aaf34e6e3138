//! Writes a declaration file next to every package manifest below a root.
//!
//! Failures for a single manifest (unreadable, invalid JSON, output not
//! writable) are recorded in the [`Report`] and generation moves on. Only
//! malformed link data, an invalid root, or properties nested too deeply
//! abort the run, and they do so before any file is written. Output files
//! are replaced atomically.

mod discover;


use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

pub use discover::find_manifests;

use crate::typegen::{Config, Emitter};
use crate::{Links, PackageJson, Result};

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct Report {
    /// Declaration files written, in manifest discovery order.
    pub written: Vec<PathBuf>,
    pub skipped: Vec<Skipped>,
}

#[derive(Debug)]
pub struct Skipped {
    pub manifest: PathBuf,
    pub reason: SkipReason,
}

/// Why a manifest produced no declaration file.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("failed to read manifest: {0}")]
    Read(#[source] std::io::Error),

    #[error("invalid manifest: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Generate declarations for every manifest below `root`.
///
/// Every declaration file is rendered before the first one is written, so
/// link data that cannot be rendered aborts the run with nothing on disk.
pub fn generate(root: &Path, links: &Links, config: &Config) -> Result<Report> {
    let emitter = Emitter::new(links, config.clone().colored(false))?;
    let manifests = find_manifests(root, &config.manifest_name)?;
    debug!(root = %root.display(), count = manifests.len(), "discovered manifests");

    let mut rendered = Vec::with_capacity(manifests.len());
    for manifest in manifests {
        let text = match read_manifest(&manifest, config) {
            Ok(uses_platform) => Ok(emitter.emit(uses_platform)?),
            Err(reason) => Err(reason),
        };
        rendered.push((manifest, text));
    }

    let mut report = Report::default();
    for (manifest, text) in rendered {
        match text.and_then(|text| write_declarations(&manifest, &text, config)) {
            Ok(path) => {
                info!(path = %path.display(), "wrote declarations");
                report.written.push(path);
            }
            Err(reason) => {
                warn!(manifest = %manifest.display(), %reason, "skipping manifest");
                report.skipped.push(Skipped { manifest, reason });
            }
        }
    }

    Ok(report)
}

/// Whether the package at `manifest` depends on the platform type library.
fn read_manifest(manifest: &Path, config: &Config) -> std::result::Result<bool, SkipReason> {
    let source = fs::read_to_string(manifest).map_err(SkipReason::Read)?;
    let package = PackageJson::from_json(&source).map_err(SkipReason::Parse)?;
    Ok(package.depends_on(config.types_package()))
}

/// Write `text` next to `manifest` through a sibling temporary file, so the
/// previous declaration file survives a failed write.
fn write_declarations(
    manifest: &Path,
    text: &str,
    config: &Config,
) -> std::result::Result<PathBuf, SkipReason> {
    let dir = manifest
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let path = dir.join(&config.output_file);
    let write_err = |source: std::io::Error| SkipReason::Write {
        path: path.clone(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.persist(&path).map_err(|e| write_err(e.error))?;
    Ok(path)
}
