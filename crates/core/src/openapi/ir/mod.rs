//! Intermediate Representation for OpenAPI to TypeScript code generation.
//!
//! Three layers:
//! 1. API-level IR: one normalized entry per operation, with derived names
//!    and the declarations it needs
//! 2. TypeScript AST IR: types, interfaces, expressions, statements, functions
//! 3. Emission: AST to TypeScript code strings via the `Emit` trait
//!
//! ## Module Structure
//!
//! - `types`: TypeScript AST IR (TsType, TsTypeDef, TsExpr, TsStmt, TsFunction, TsModule)
//! - `api`: API-level IR (HttpMethod, OperationIR, ResponseIR, ApiIR)
//! - `naming`: name derivation for types and callables
//! - `normalize`: OpenAPI document -> API IR, including schema -> type mapping
//! - `codegen`: API IR -> TypeScript AST
//! - `emit`: TypeScript AST -> code strings (via Emit trait)
//! - `utils`: common helpers shared across modules

mod api;
mod codegen;
mod emit;
mod naming;
mod normalize;
mod types;
pub mod utils;

// Re-export the main entry points
pub use api::HttpMethod;
pub use codegen::codegen_module;
pub use emit::Emit;
pub use naming::{NameKind, TypeSuffix, derive_name};
pub use normalize::{normalize_document, resolve};
