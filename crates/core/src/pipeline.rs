//! End-to-end generation: fetch (or read) -> generate -> write.

use std::path::{Path, PathBuf};

use a2i_common::A2iConfig;
use tracing::info;

use crate::apifox::{ApifoxClient, FetchError};
use crate::error::GenerateError;
use crate::openapi::{GeneratorOptions, OpenApiDocument, generate_document};
use crate::writer::{WriteError, write_output};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Generated code plus the number of callables it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub code: String,
    pub operations: usize,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub bytes: usize,
    pub operations: usize,
}

/// Parse `openapi_json` and generate the client. No I/O.
pub fn render(openapi_json: &str, options: &GeneratorOptions) -> Result<Rendered, GenerateError> {
    let doc = OpenApiDocument::from_json(openapi_json)?;
    Ok(Rendered {
        operations: doc.operation_count(),
        code: generate_document(&doc, options),
    })
}

/// Export the document from Apifox, generate the client and write it to
/// `output`. Nothing is written if the fetch or the parse fails.
pub async fn run(
    config: &A2iConfig,
    output: &Path,
    options: &GeneratorOptions,
) -> Result<GenerationReport, PipelineError> {
    let client = ApifoxClient::new(config)?;
    info!(url = %client.endpoint(), "Fetching OpenAPI document.");
    let openapi_json = client.export_openapi().await?;
    run_offline(&openapi_json, output, options).await
}

/// Generate from an already available document and write it to `output`.
pub async fn run_offline(
    openapi_json: &str,
    output: &Path,
    options: &GeneratorOptions,
) -> Result<GenerationReport, PipelineError> {
    let rendered = render(openapi_json, options)?;
    info!(operations = rendered.operations, "Generated TypeScript client.");
    write_output(output, &rendered.code).await?;

    Ok(GenerationReport {
        output: output.to_path_buf(),
        bytes: rendered.code.len(),
        operations: rendered.operations,
    })
}
