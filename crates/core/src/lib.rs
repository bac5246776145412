//! a2i core: OpenAPI to TypeScript client generation.
//!
//! - [`openapi`]: the generation engine (document model, naming, type
//!   mapping, emission)
//! - [`apifox`]: fetches an OpenAPI export from Apifox
//! - [`writer`]: writes the generated client to disk
//! - [`pipeline`]: fetch -> generate -> write

pub mod apifox;
mod error;
pub mod openapi;
pub mod pipeline;
pub mod writer;

pub use apifox::{ApifoxClient, FetchError};
pub use error::GenerateError;
pub use openapi::{
    ComponentsBlock, DEFAULT_BASE_PATH, GeneratorOptions, NamingStyle, OpenApiDocument, ParamsEncoding, generate,
    generate_document, generate_with,
};
pub use pipeline::{GenerationReport, PipelineError, Rendered};
pub use writer::{WriteError, default_output_path, write_output};
