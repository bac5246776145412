//! `a2i.config.json` model and persistence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config filename, resolved against the working directory.
pub const CONFIG_FILENAME: &str = "a2i.config.json";

/// Default Apifox Open API host.
pub const DEFAULT_APIFOX_HOST: &str = "https://api.apifox.com";

/// Default value for the `X-Apifox-Api-Version` header.
pub const DEFAULT_API_VERSION: &str = "2024-03-28";

/// Errors raised while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config is missing required fields: {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write config file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Complete, validated configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct A2iConfig {
    pub apifox_host: String,
    pub project_id: String,
    pub access_token: String,
    pub version: String,
    #[serde(default)]
    pub request_body: ExportRequest,
}

impl fmt::Debug for A2iConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("A2iConfig")
            .field("apifox_host", &self.apifox_host)
            .field("project_id", &self.project_id)
            .field("access_token", &"<redacted>")
            .field("version", &self.version)
            .field("request_body", &self.request_body)
            .finish()
    }
}

/// Body of the Apifox `export-openapi` request. Absent keys take the
/// template defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportRequest {
    pub scope: ExportScope,
    pub options: ExportOptions,
    pub oas_version: OasVersion,
    pub export_format: ExportFormat,
}

/// Which endpoints are exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportScope {
    #[serde(rename = "type")]
    pub scope_type: ScopeType,
    pub excluded_by_tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScopeType {
    #[default]
    All,
    SelectedEndpoints,
    SelectedTags,
    SelectedFolders,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    #[serde(default)]
    pub include_apifox_extension_properties: bool,
    #[serde(default)]
    pub add_folders_to_tags: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OasVersion {
    #[default]
    #[serde(rename = "3.1")]
    V3_1,
    #[serde(rename = "3.0")]
    V3_0,
    #[serde(rename = "2.0")]
    V2_0,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

/// Partially filled configuration.
///
/// Used both for reading the config file (where any field may be missing)
/// and for collecting answers during `a2i config`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDraft {
    pub apifox_host: Option<String>,
    pub project_id: Option<String>,
    pub access_token: Option<String>,
    pub version: Option<String>,
    #[serde(default)]
    pub request_body: Option<ExportRequest>,
}

impl ConfigDraft {
    /// Names of the required fields that are absent or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("apifoxHost", &self.apifox_host),
            ("projectId", &self.project_id),
            ("accessToken", &self.access_token),
            ("version", &self.version),
        ]
        .into_iter()
        .filter(|(_, value)| !is_present(value.as_deref()))
        .map(|(name, _)| name)
        .collect()
    }

    /// Validate the draft and turn it into a complete config.
    ///
    /// A missing `requestBody` falls back to the default export template.
    pub fn into_config(self) -> Result<A2iConfig, ConfigError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ConfigError::Incomplete { missing });
        }

        let (Some(apifox_host), Some(project_id), Some(access_token), Some(version)) =
            (self.apifox_host, self.project_id, self.access_token, self.version)
        else {
            return Err(ConfigError::Incomplete {
                missing: vec!["apifoxHost", "projectId", "accessToken", "version"],
            });
        };

        Ok(A2iConfig {
            apifox_host: apifox_host.trim().to_string(),
            project_id: project_id.trim().to_string(),
            access_token: access_token.trim().to_string(),
            version: version.trim().to_string(),
            request_body: self.request_body.unwrap_or_default(),
        })
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Get the config file path inside `dir`.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

/// Read the config file if it exists, without checking required fields.
pub fn load_draft(path: &Path) -> Result<Option<ConfigDraft>, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file not found.");
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Read the config file if it exists.
///
/// Returns `Ok(None)` when there is no file, and `ConfigError::Incomplete`
/// when the file exists but lacks one of the required fields.
pub fn load_config(path: &Path) -> Result<Option<A2iConfig>, ConfigError> {
    load_draft(path)?.map(ConfigDraft::into_config).transpose()
}

/// Write the config file as pretty-printed JSON, replacing any existing file.
pub fn save_config(path: &Path, config: &A2iConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    fs::write(path, contents).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Config file written.");
    Ok(())
}
