//! Package manifest loading
//!
//! Only the `version` field of the manifest is consulted; every other key is
//! ignored. The value is taken as-is, no semver validation is applied.

use super::error::{SyncError, SyncResult};
use serde::Deserialize;
use std::path::Path;

/// The subset of a package manifest the syncer cares about
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    pub version: String,
}

// Shadow of `Manifest` used to tell a missing field apart from a malformed one
#[derive(Deserialize)]
struct RawManifest {
    version: Option<String>,
}

impl Manifest {
    /// Parse manifest text; `path` is only used for error reporting
    ///
    /// A leading byte order mark is skipped and a repeated key keeps its last
    /// value, as Node's `require` of a JSON file does.
    pub fn parse(contents: &str, path: &Path) -> SyncResult<Self> {
        let parse_error = |source: serde_json::Error| SyncError::ManifestParse {
            path: path.to_path_buf(),
            source,
        };

        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
        let value: serde_json::Value = serde_json::from_str(contents).map_err(parse_error)?;
        if !value.is_object() {
            return Err(parse_error(serde::de::Error::custom(
                "manifest must be a JSON object",
            )));
        }
        let raw: RawManifest = serde_json::from_value(value).map_err(parse_error)?;

        match raw.version {
            Some(version) => Ok(Manifest { version }),
            None => Err(SyncError::MissingVersion {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Read and parse the manifest at `path`
    pub fn load(path: &Path) -> SyncResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
        log::debug!("Read {} bytes from manifest {}", contents.len(), path.display());
        Self::parse(&contents, path)
    }
}
