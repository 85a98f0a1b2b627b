//! CLI Integration Test Modules

pub mod config_file;
pub mod failures;
