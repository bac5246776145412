//! Default command: fetch from Apifox, generate and write.

use std::path::{Path, PathBuf};

use a2i_common::{A2iConfig, ConfigDraft, load_draft};
use a2i_core::pipeline;
use console::style;

use crate::commands::config::{ConfigArgs, initialize, resolve_config_path};
use crate::commands::{GenerationArgs, current_dir, print_report, run_cli_async};
use crate::common::with_spinner;

pub async fn run(config: Option<PathBuf>, generation: GenerationArgs) -> i32 {
    run_cli_async(|| async move {
        let cwd = current_dir()?;
        let config_path = resolve_config_path(config.as_deref(), &cwd);
        let config = load_or_initialize(&config_path)?;

        let output = generation.output_path(&cwd);
        let options = generation.options();
        let (result, start) = with_spinner("Fetching OpenAPI document from Apifox...", || {
            pipeline::run(&config, &output, &options)
        })
        .await;
        let report = result.map_err(|err| err.to_string())?;

        print_report(&report, start);
        Ok(())
    })
    .await
}

/// A complete config file is used as is. A missing one runs the prompts; an
/// incomplete one only asks for the missing fields and keeps the rest.
fn load_or_initialize(path: &Path) -> Result<A2iConfig, String> {
    let Some(draft) = load_draft(path).map_err(|err| err.to_string())? else {
        eprintln!(
            "{} No config found at {}. Let's create one.",
            style("!").yellow().bold(),
            path.display()
        );
        return initialize(&ConfigArgs::default(), ConfigDraft::default(), path);
    };

    let missing = draft.missing_fields();
    if missing.is_empty() {
        return draft.into_config().map_err(|err| err.to_string());
    }

    eprintln!(
        "{} Config is missing {}. Let's fill it in.",
        style("!").yellow().bold(),
        missing.join(", ")
    );
    initialize(&ConfigArgs::prefilled(&draft), draft, path)
}
