use std::path::{Path, PathBuf};

use a2i_common::{
    A2iConfig, ConfigDraft, DEFAULT_API_VERSION, DEFAULT_APIFOX_HOST, config_path, load_draft,
    save_config,
};
use clap::Args;
use console::style;
use dialoguer::{Input, Password};
use tracing::debug;

use crate::commands::{current_dir, run_cli_async};

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    #[arg(long, value_name = "PATH", help = "Config file [default: ./a2i.config.json]")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Apifox Open API host")]
    pub host: Option<String>,

    #[arg(long = "project-id", help = "Apifox project id")]
    pub project_id: Option<String>,

    #[arg(long, help = "Apifox access token")]
    pub token: Option<String>,

    #[arg(long = "api-version", help = "Apifox Open API version")]
    pub api_version: Option<String>,
}

pub async fn run(args: ConfigArgs) -> i32 {
    run_cli_async(|| async move {
        let cwd = current_dir()?;
        let path = resolve_config_path(args.config.as_deref(), &cwd);
        let existing = match load_draft(&path) {
            Ok(draft) => draft.unwrap_or_default(),
            Err(err) => {
                eprintln!(
                    "{} {err}. Starting from a blank config.",
                    style("!").yellow().bold()
                );
                ConfigDraft::default()
            }
        };
        let config = initialize(&args, existing, &path)?;
        debug!(host = %config.apifox_host, project_id = %config.project_id, "Config saved.");
        Ok(())
    })
    .await
}

/// `--config` relative to `cwd`, or `a2i.config.json` inside it.
pub fn resolve_config_path(flag: Option<&Path>, cwd: &Path) -> PathBuf {
    flag.map_or_else(|| config_path(cwd), |path| cwd.join(path))
}

impl ConfigArgs {
    /// Pre-answers taken from a partially filled config file.
    pub fn prefilled(draft: &ConfigDraft) -> Self {
        Self {
            config: None,
            host: draft.apifox_host.clone(),
            project_id: draft.project_id.clone(),
            token: draft.access_token.clone(),
            api_version: draft.version.clone(),
        }
    }
}

/// Collect the four answers, validate and save them.
///
/// Flags answer without prompting. Values already in `existing` become the
/// prompt defaults, and its `requestBody` is kept as is.
pub fn initialize(
    args: &ConfigArgs,
    existing: ConfigDraft,
    path: &Path,
) -> Result<A2iConfig, String> {
    let draft = ConfigDraft {
        apifox_host: Some(answer(args.host.as_deref(), || {
            prompt_text(
                "Apifox host",
                present(existing.apifox_host.as_deref()).or(Some(DEFAULT_APIFOX_HOST)),
            )
        })?),
        project_id: Some(answer(args.project_id.as_deref(), || {
            prompt_text("Apifox project id", present(existing.project_id.as_deref()))
        })?),
        access_token: Some(answer(args.token.as_deref(), || {
            prompt_token(present(existing.access_token.as_deref()))
        })?),
        version: Some(answer(args.api_version.as_deref(), || {
            prompt_text(
                "Apifox API version",
                present(existing.version.as_deref()).or(Some(DEFAULT_API_VERSION)),
            )
        })?),
        request_body: existing.request_body,
    };

    let config = draft.into_config().map_err(|err| err.to_string())?;
    save_config(path, &config).map_err(|err| err.to_string())?;

    println!(
        "{} Saved {}",
        style("✓").green().bold(),
        style(path.display()).cyan()
    );
    Ok(config)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A non-blank flag value wins; otherwise ask.
fn answer<F>(flag: Option<&str>, prompt: F) -> Result<String, String>
where
    F: FnOnce() -> Result<String, String>,
{
    match flag.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => prompt(),
    }
}

fn not_blank(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("A value is required")
    } else {
        Ok(())
    }
}

fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String, String> {
    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| not_blank(input));
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    input
        .interact_text()
        .map_err(|err| format!("Failed to read {}: {err}", prompt.to_lowercase()))
}

/// An empty answer keeps `existing` when there is one.
fn prompt_token(existing: Option<&str>) -> Result<String, String> {
    let has_existing = existing.is_some();
    let prompt = if has_existing {
        "Apifox access token (leave empty to keep the current one)"
    } else {
        "Apifox access token"
    };
    let token = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(has_existing)
        .validate_with(move |input: &String| {
            if has_existing {
                Ok(())
            } else {
                not_blank(input)
            }
        })
        .interact()
        .map_err(|err| format!("Failed to read access token: {err}"))?;

    Ok(keep_or_replace(existing, token))
}

fn keep_or_replace(existing: Option<&str>, answer: String) -> String {
    match existing {
        Some(current) if answer.trim().is_empty() => current.to_string(),
        _ => answer,
    }
}
