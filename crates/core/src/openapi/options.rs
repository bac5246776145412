//! Knobs for the generated client.

/// How path segments are folded into identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingStyle {
    /// Keep `{param}` segments verbatim: `GetUsers{Id}Request`.
    #[default]
    Preserve,
    /// Strip braces and separators: `GetUsersIdRequest`.
    Sanitized,
}

/// How the `params` argument is handed to axios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParamsEncoding {
    /// `params: params` for GET/DELETE, `data: params` otherwise.
    #[default]
    Structured,
    /// `JSON.stringify(params)` in either slot. Matches clients generated
    /// by older versions of the tool.
    JsonString,
}

/// Content of the block emitted between the import and `BaseResponse`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComponentsBlock {
    /// Render `components.schemas` with the built-in renderer.
    #[default]
    Rendered,
    /// Emit the given text as-is.
    Verbatim(String),
}

/// Options for a generation run. `Default` gives the standard client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub naming: NamingStyle,
    pub params_encoding: ParamsEncoding,
    /// Prefix joined to every path template.
    pub base_path: String,
    pub components: ComponentsBlock,
}

pub const DEFAULT_BASE_PATH: &str = "/api";

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            naming: NamingStyle::default(),
            params_encoding: ParamsEncoding::default(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            components: ComponentsBlock::default(),
        }
    }
}
