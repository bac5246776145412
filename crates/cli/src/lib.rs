//! Command-line interface for a2i.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod commands;
mod common;

/// Crates whose logs `A2I_LOG` controls.
const LOG_TARGETS: [&str; 3] = ["a2i_cli", "a2i_core", "a2i_common"];

#[derive(Parser, Debug)]
#[command(
    name = "a2i",
    version,
    about = "Generate a typed TypeScript API client from an Apifox project",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file [default: ./a2i.config.json]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    generation: commands::GenerationArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set up Apifox access and write a2i.config.json
    Config(commands::config::ConfigArgs),
    /// Generate the client from a local OpenAPI JSON file
    Generate(commands::generate::GenerateArgs),
}

/// Parse `args` (including the program name) and run the selected command.
/// Returns the process exit code.
pub async fn run(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Config(args)) => commands::config::run(args).await,
            Some(Commands::Generate(args)) => commands::generate::run(args).await,
            None => commands::fetch::run(cli.config, cli.generation).await,
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

/// Install the stderr tracing subscriber.
///
/// `A2I_LOG` takes a plain level ("debug") applied to the a2i crates, or a
/// full filter spec ("a2i_core=trace,reqwest=debug"). Defaults to `warn`.
pub fn init_tracing() {
    let filter = filter_spec(std::env::var("A2I_LOG").ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn filter_spec(env: Option<&str>) -> String {
    let scoped = |level: &str| {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    };

    match env.map(str::trim) {
        Some(level) if is_plain_level(level) => scoped(&level.to_ascii_lowercase()),
        Some(spec) if !spec.is_empty() => spec.to_string(),
        _ => scoped("warn"),
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use a2i_core::{NamingStyle, ParamsEncoding};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_subcommand_uses_defaults() {
        let cli = parse(&["a2i"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());

        let options = cli.generation.options();
        assert_eq!(options.naming, NamingStyle::Preserve);
        assert_eq!(options.params_encoding, ParamsEncoding::Structured);
        assert_eq!(options.base_path, "/api");
    }

    #[test]
    fn test_root_generation_flags() {
        let cli = parse(&[
            "a2i",
            "--config",
            "conf/a2i.json",
            "--output",
            "src/api/client.ts",
            "--sanitize-names",
            "--json-string-params",
            "--base-path",
            "/gateway",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("conf/a2i.json")));
        assert_eq!(cli.generation.output, Some(PathBuf::from("src/api/client.ts")));

        let options = cli.generation.options();
        assert_eq!(options.naming, NamingStyle::Sanitized);
        assert_eq!(options.params_encoding, ParamsEncoding::JsonString);
        assert_eq!(options.base_path, "/gateway");
    }

    #[test]
    fn test_config_subcommand_flags() {
        let cli = parse(&[
            "a2i",
            "config",
            "--host",
            "https://apifox.example.com",
            "--project-id",
            "99",
            "--token",
            "abc",
            "--api-version",
            "2025-01-01",
        ]);
        let Some(Commands::Config(args)) = cli.command else {
            panic!("expected config subcommand");
        };
        assert_eq!(args.host.as_deref(), Some("https://apifox.example.com"));
        assert_eq!(args.project_id.as_deref(), Some("99"));
        assert_eq!(args.token.as_deref(), Some("abc"));
        assert_eq!(args.api_version.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn test_generate_requires_input() {
        assert!(Cli::try_parse_from(["a2i", "generate"]).is_err());

        let cli = parse(&["a2i", "generate", "--input", "openapi.json", "-o", "out.ts"]);
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate subcommand");
        };
        assert_eq!(args.input, PathBuf::from("openapi.json"));
        assert_eq!(args.generation.output, Some(PathBuf::from("out.ts")));
    }

    #[test]
    fn test_filter_spec() {
        assert_eq!(
            filter_spec(None),
            "a2i_cli=warn,a2i_core=warn,a2i_common=warn"
        );
        assert_eq!(
            filter_spec(Some("DEBUG")),
            "a2i_cli=debug,a2i_core=debug,a2i_common=debug"
        );
        assert_eq!(filter_spec(Some("a2i_core=trace")), "a2i_core=trace");
        assert_eq!(
            filter_spec(Some("  ")),
            "a2i_cli=warn,a2i_core=warn,a2i_common=warn"
        );
    }

    #[tokio::test]
    async fn test_generate_command_writes_client() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("openapi.json");
        let output = temp.path().join("out/api.ts");
        std::fs::write(
            &input,
            r#"{ "info": { "title": "Local", "version": "1" }, "paths": { "/ping": { "get": {} } } }"#,
        )
        .unwrap();

        let code = run(vec![
            "a2i".into(),
            "generate".into(),
            "--input".into(),
            input.display().to_string(),
            "--output".into(),
            output.display().to_string(),
        ])
        .await;

        assert_eq!(code, 0);
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("export const getPing = async () => {"));
    }

    #[tokio::test]
    async fn test_generate_command_missing_input_fails() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("api.ts");

        let code = run(vec![
            "a2i".into(),
            "generate".into(),
            "--input".into(),
            temp.path().join("missing.json").display().to_string(),
            "--output".into(),
            output.display().to_string(),
        ])
        .await;

        assert_eq!(code, 1);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_usage_error_exit_code() {
        let code = run(vec!["a2i".into(), "--no-such-flag".into()]).await;
        assert_eq!(code, 2);
    }
}
