//! TOML configuration file loading
//!
//! A plugin variant is described by a small TOML file naming its manifest,
//! its descriptor and its plugin id. Resolution order is built-in defaults,
//! then the config file, then command-line flags.

use super::args::Args;
use crate::sync::{SyncError, SyncResult, SyncTarget};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "plugin-version-sync.toml";

/// Field type for determining how a TOML value is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// File paths
    PathField,
    /// Plain strings
    StringField,
    /// Booleans
    BoolField,
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub target: SyncTarget,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    /// None means decide from the terminal
    pub color: Option<bool>,
}

/// Keys understood in the configuration file
pub const CONFIG_FIELDS: &[(&str, FieldType)] = &[
    ("manifest", FieldType::PathField),
    ("document", FieldType::PathField),
    ("plugin-id", FieldType::StringField),
    ("log-level", FieldType::StringField),
    ("log-format", FieldType::StringField),
    ("log-file", FieldType::PathField),
    ("color", FieldType::BoolField),
];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
const LOG_FORMATS: &[&str] = &["text", "ext", "json"];

impl Settings {
    /// Resolve settings from defaults, the config file and `args`
    pub fn resolve(args: &Args) -> SyncResult<Self> {
        let mut settings = Settings::default();
        if let Some(config) = load_config_file(args.config_file.as_deref())? {
            settings.apply_toml_values(&config)?;
        }
        settings.apply_args(args);
        Ok(settings)
    }

    /// Apply TOML configuration values; unknown keys are ignored
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> SyncResult<()> {
        for (key, field_type) in CONFIG_FIELDS {
            let Some(value) = config.get(*key) else {
                continue;
            };
            let type_ok = match field_type {
                FieldType::PathField | FieldType::StringField => value.is_str(),
                FieldType::BoolField => value.is_bool(),
            };
            if !type_ok {
                let expected = match field_type {
                    FieldType::BoolField => "a boolean",
                    _ => "a string",
                };
                return Err(type_error(key, expected));
            }

            match *key {
                "manifest" => self.target.manifest = expect_path(key, value)?,
                "document" => self.target.document = expect_path(key, value)?,
                "plugin-id" => {
                    let plugin_id = expect_str(key, value)?;
                    if plugin_id.is_empty() {
                        return Err(SyncError::config("'plugin-id' cannot be empty"));
                    }
                    self.target.plugin_id = plugin_id.to_string();
                }
                "log-level" => self.log_level = Some(expect_choice(key, value, LOG_LEVELS)?),
                "log-format" => self.log_format = Some(expect_choice(key, value, LOG_FORMATS)?),
                "log-file" => self.log_file = Some(expect_path(key, value)?),
                "color" => self.color = value.as_bool(),
                _ => {}
            }
        }

        for key in config.keys() {
            if !CONFIG_FIELDS.iter().any(|(known, _)| *known == key.as_str()) {
                log::debug!("Ignoring unknown configuration key '{}'", key);
            }
        }
        Ok(())
    }

    /// Command-line flags take precedence over everything else
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(level) = &args.log_level {
            self.log_level = Some(level.clone());
        }
        if let Some(format) = &args.log_format {
            self.log_format = Some(format.clone());
        }
        if let Some(file) = &args.log_file {
            self.log_file = Some(file.clone());
        }
        if let Some(color) = args.color_choice() {
            self.color = Some(color);
        }
    }

    /// Resolve the colour setting, auto-detecting a terminal on stderr
    pub fn use_color(&self) -> bool {
        self.color
            .unwrap_or_else(|| std::io::IsTerminal::is_terminal(&std::io::stderr()))
    }
}

/// Load the configuration table
///
/// An explicitly named file must exist. Without one, the default file in the
/// working directory is used if present.
pub fn load_config_file(config_file: Option<&Path>) -> SyncResult<Option<toml::Table>> {
    let path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(SyncError::config(format!(
                    "The specified configuration file does not exist: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default_path.exists() {
                return Ok(None);
            }
            default_path
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| SyncError::io(&path, e))?;
    parse_config(&contents, &path).map(Some)
}

/// Parse configuration text; `path` is only used for error reporting
pub fn parse_config(contents: &str, path: &Path) -> SyncResult<toml::Table> {
    toml::from_str::<toml::Table>(contents).map_err(|e| {
        SyncError::config(format!(
            "Error parsing configuration file {}: {}",
            path.display(),
            e
        ))
    })
}

fn type_error(key: &str, expected: &str) -> SyncError {
    SyncError::config(format!("'{}' must be {}", key, expected))
}

fn expect_str<'a>(key: &str, value: &'a toml::Value) -> SyncResult<&'a str> {
    value.as_str().ok_or_else(|| type_error(key, "a string"))
}

fn expect_path(key: &str, value: &toml::Value) -> SyncResult<PathBuf> {
    let path = expect_str(key, value)?;
    if path.is_empty() {
        return Err(SyncError::config(format!("'{}' cannot be an empty path", key)));
    }
    Ok(PathBuf::from(path))
}

fn expect_choice(key: &str, value: &toml::Value, choices: &[&str]) -> SyncResult<String> {
    let choice = expect_str(key, value)?.to_lowercase();
    if choices.contains(&choice.as_str()) {
        Ok(choice)
    } else {
        Err(SyncError::config(format!(
            "'{}' must be one of {}, got '{}'",
            key,
            choices.join(", "),
            choice
        )))
    }
}
