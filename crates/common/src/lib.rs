//! Shared configuration for the a2i tool.
//!
//! This crate owns the `a2i.config.json` model used by the CLI to talk to
//! Apifox, together with loading, validation and persistence helpers.

pub mod config;

// Re-export commonly used types
pub use config::{
    A2iConfig, CONFIG_FILENAME, ConfigDraft, ConfigError, DEFAULT_API_VERSION, DEFAULT_APIFOX_HOST,
    ExportFormat, ExportOptions, ExportRequest, ExportScope, OasVersion, ScopeType, config_path,
    load_config, load_draft, save_config,
};
