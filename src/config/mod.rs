//! Configuration module for certinfo
//!
//! Handles loading settings from TOML files.

pub mod settings;

pub use settings::{LogSettings, OutputSettings, Settings, DEFAULT_CONFIG_PATH};
