//! TypeScript code emitter for OpenAPI documents.
//!
//! This module is a thin wrapper around the IR-based code generation.
//! The pipeline is:
//! 1. Parse: OpenAPI JSON -> OpenApiDocument
//! 2. Normalize: OpenApiDocument -> ApiIR (names derived, schemas mapped)
//! 3. Codegen: ApiIR -> TsModule (TypeScript AST)
//! 4. Emit: TsModule -> String (via Emit trait)

use tracing::debug;

use crate::error::GenerateError;
use crate::openapi::ir::{Emit, codegen_module, normalize_document};
use crate::openapi::options::GeneratorOptions;
use crate::openapi::spec::OpenApiDocument;

/// Generate the TypeScript client from an OpenAPI JSON string with default
/// options.
pub fn generate(openapi_json: &str) -> Result<String, GenerateError> {
    generate_with(openapi_json, &GeneratorOptions::default())
}

/// Generate the TypeScript client from an OpenAPI JSON string.
pub fn generate_with(openapi_json: &str, options: &GeneratorOptions) -> Result<String, GenerateError> {
    let doc = OpenApiDocument::from_json(openapi_json)?;
    Ok(generate_document(&doc, options))
}

/// Generate the TypeScript client from a parsed document. Infallible.
pub fn generate_document(doc: &OpenApiDocument, options: &GeneratorOptions) -> String {
    let api_ir = normalize_document(doc, options);
    debug!(
        title = %api_ir.title,
        operations = api_ir.operations.len(),
        "Normalized OpenAPI document."
    );
    codegen_module(&api_ir, options).emit()
}
