pub mod config;
pub mod fetch;
pub mod generate;

use std::path::{Path, PathBuf};
use std::time::Instant;

use a2i_core::pipeline::GenerationReport;
use a2i_core::{
    DEFAULT_BASE_PATH, GeneratorOptions, NamingStyle, ParamsEncoding, default_output_path,
};
use clap::Args;
use console::style;

use crate::common::format_elapsed_ms;

/// Run a command body and map its outcome to an exit code.
pub async fn run_cli_async<F, Fut>(f: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<(), String>>,
{
    match f().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{} {err}", style("error:").red().bold());
            1
        }
    }
}

/// Flags shared by every command that produces a client.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerationArgs {
    #[arg(short, long, value_name = "FILE", help = "Output file [default: services/api.ts]")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Strip braces and separators from derived names and make schema names valid identifiers")]
    pub sanitize_names: bool,

    #[arg(long, help = "Send GET/DELETE params as a JSON string")]
    pub json_string_params: bool,

    #[arg(long, value_name = "PATH", default_value = DEFAULT_BASE_PATH, help = "Prefix for every request URL")]
    pub base_path: String,
}

impl GenerationArgs {
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            naming: if self.sanitize_names {
                NamingStyle::Sanitized
            } else {
                NamingStyle::Preserve
            },
            params_encoding: if self.json_string_params {
                ParamsEncoding::JsonString
            } else {
                ParamsEncoding::Structured
            },
            base_path: self.base_path.clone(),
            ..GeneratorOptions::default()
        }
    }

    /// `--output` relative to `cwd`, or the default location under it.
    pub fn output_path(&self, cwd: &Path) -> PathBuf {
        self.output
            .as_ref()
            .map_or_else(|| default_output_path(cwd), |path| cwd.join(path))
    }
}

fn current_dir() -> Result<PathBuf, String> {
    std::env::current_dir().map_err(|err| format!("Failed to resolve working directory: {err}"))
}

fn print_report(report: &GenerationReport, start: Instant) {
    println!(
        "{} Generated {} operation(s) into {} ({})",
        style("✓").green().bold(),
        report.operations,
        style(report.output.display()).cyan(),
        format_elapsed_ms(start)
    );
}
