//! Textual patching of the plugin descriptor
//!
//! The descriptor is never parsed as XML. A single pattern of the shape
//! `plugin id="<id>" version="<non-quote chars>"` is located and rewritten,
//! and every byte outside the matched spans is left untouched.

use super::error::{SyncError, SyncResult};
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// Compiled matcher for one plugin id literal
#[derive(Debug, Clone)]
pub struct PluginPattern {
    plugin_id: String,
    regex: Regex,
}

/// Outcome of patching a document in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched<'a> {
    pub text: Cow<'a, str>,
    pub replacements: usize,
}

impl PluginPattern {
    /// Build the matcher; the id is matched literally
    pub fn new(plugin_id: &str) -> SyncResult<Self> {
        let source = format!(
            r#"plugin id="{}" version="[^"]+""#,
            regex::escape(plugin_id)
        );
        let regex = Regex::new(&source).map_err(|source| SyncError::Pattern { source })?;
        Ok(Self {
            plugin_id: plugin_id.to_string(),
            regex,
        })
    }

    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// Number of occurrences in `text`
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// The attribute assignment the document should contain for `version`
    pub fn assignment(&self, version: &str) -> String {
        format!(r#"plugin id="{}" version="{}""#, self.plugin_id, version)
    }

    /// Rewrite every occurrence to carry `version`
    ///
    /// Borrowed text is returned when nothing matched.
    pub fn apply<'a>(&self, text: &'a str, version: &str) -> Patched<'a> {
        let replacements = self.count(text);
        let assignment = self.assignment(version);
        let text = self.regex.replace_all(text, NoExpand(&assignment));
        Patched { text, replacements }
    }
}
