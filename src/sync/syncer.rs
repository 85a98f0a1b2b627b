//! The version sync operation

use super::document::PluginPattern;
use super::error::{SyncError, SyncResult};
use super::manifest::Manifest;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_MANIFEST: &str = "package.json";
pub const DEFAULT_DOCUMENT: &str = "plugin.xml";

/// Which manifest feeds which document, and the plugin id to rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    pub manifest: PathBuf,
    pub document: PathBuf,
    pub plugin_id: String,
}

impl Default for SyncTarget {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            document: PathBuf::from(DEFAULT_DOCUMENT),
            plugin_id: crate::core::version::DEFAULT_PLUGIN_ID.to_string(),
        }
    }
}

impl SyncTarget {
    pub fn new(
        manifest: impl Into<PathBuf>,
        document: impl Into<PathBuf>,
        plugin_id: impl Into<String>,
    ) -> Self {
        Self {
            manifest: manifest.into(),
            document: document.into(),
            plugin_id: plugin_id.into(),
        }
    }
}

/// What a successful sync did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub version: String,
    pub replacements: usize,
    /// False when the document already carried the version (or had no match)
    pub changed: bool,
}

/// Sync `target`, echoing the version to stdout
pub fn sync(target: &SyncTarget) -> SyncResult<SyncReport> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    sync_with_output(target, &mut out)
}

/// Sync `target`, echoing the version to `out`
///
/// The manifest is fully resolved before the document is opened, so a bad
/// manifest never touches the document. The document is always written back,
/// even when nothing matched.
pub fn sync_with_output<W: Write>(target: &SyncTarget, out: &mut W) -> SyncResult<SyncReport> {
    let pattern = PluginPattern::new(&target.plugin_id)?;

    let manifest = Manifest::load(&target.manifest)?;
    log::info!(
        "Manifest {} declares version {}",
        target.manifest.display(),
        manifest.version
    );
    writeln!(out, "{}", manifest.version).map_err(|e| SyncError::io("<stdout>", e))?;

    let document = &target.document;
    let original =
        std::fs::read_to_string(document).map_err(|e| SyncError::io(document, e))?;
    let patched = pattern.apply(&original, &manifest.version);

    if patched.replacements == 0 {
        log::debug!(
            "No plugin id=\"{}\" version attribute in {}",
            pattern.plugin_id(),
            document.display()
        );
    }

    let changed = patched.text != original.as_str();
    std::fs::write(document, patched.text.as_bytes()).map_err(|e| SyncError::io(document, e))?;

    log::info!(
        "Wrote {} ({} occurrence(s), {})",
        document.display(),
        patched.replacements,
        if changed { "updated" } else { "unchanged" }
    );

    Ok(SyncReport {
        version: manifest.version,
        replacements: patched.replacements,
        changed,
    })
}
