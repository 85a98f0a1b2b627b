//! Version sync between a package manifest and a plugin descriptor
//!
//! Reads `version` from the manifest and rewrites the matching
//! `plugin id="..." version="..."` assignment in the descriptor, in place.

pub mod document;
pub mod error;
pub mod manifest;
pub mod syncer;

pub use document::PluginPattern;
pub use error::{SyncError, SyncResult};
pub use manifest::Manifest;
pub use syncer::{sync, sync_with_output, SyncReport, SyncTarget};
