use std::path::PathBuf;

use a2i_core::pipeline;
use clap::Args;
use tracing::debug;

use crate::commands::{GenerationArgs, current_dir, print_report, run_cli_async};
use crate::common::with_spinner;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(short, long, value_name = "FILE", help = "OpenAPI JSON document to read")]
    pub input: PathBuf,

    #[command(flatten)]
    pub generation: GenerationArgs,
}

pub async fn run(args: GenerateArgs) -> i32 {
    run_cli_async(|| async move {
        let cwd = current_dir()?;
        let input = cwd.join(&args.input);
        debug!(input = %input.display(), "Reading OpenAPI document.");
        let openapi_json = tokio::fs::read_to_string(&input)
            .await
            .map_err(|err| format!("Failed to read {}: {err}", input.display()))?;

        let output = args.generation.output_path(&cwd);
        let options = args.generation.options();
        let (result, start) = with_spinner("Generating TypeScript client...", || {
            pipeline::run_offline(&openapi_json, &output, &options)
        })
        .await;
        let report = result.map_err(|err| err.to_string())?;

        print_report(&report, start);
        Ok(())
    })
    .await
}
