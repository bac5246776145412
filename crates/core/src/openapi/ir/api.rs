//! API-level IR for normalized operations.
//!
//! - OperationIR: one HTTP operation with its derived names
//! - ResponseIR: how the success response is typed
//! - ApiIR: the whole document, ready for codegen

use super::types::{TsPrimitive, TsType, TsTypeDef};

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Parse a path item key. Only the five supported methods are
    /// recognised; everything else is not an operation.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            "patch" => Some(Self::Patch),
            _ => None,
        }
    }

    /// Wire name: `GET`, `POST`, ...
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Token used at the start of type names: `Get`, `Post`, ...
    pub fn type_token(&self) -> &'static str {
        match self {
            HttpMethod::Get => "Get",
            HttpMethod::Post => "Post",
            HttpMethod::Put => "Put",
            HttpMethod::Delete => "Delete",
            HttpMethod::Patch => "Patch",
        }
    }

    /// Token used at the start of function names: `get`, `post`, ...
    pub fn function_token(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }

    /// GET and DELETE send `params` in the query slot, the rest in the body.
    pub fn sends_query(&self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }
}

/// Typing of an operation's success response.
#[derive(Debug, Clone)]
pub enum ResponseIR {
    /// No `200`/`201` JSON schema.
    None,
    /// Raw `{ type: "string" }` response: returns `string`, no declaration.
    Text,
    /// Whole schema declared as `<Method><Path>Response`.
    Raw(TsTypeDef),
    /// `{ success, code, data }` envelope: only `data` is declared, as
    /// `<Method><Path>ResponseData`.
    Enveloped(TsTypeDef),
}

impl ResponseIR {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ResponseIR::None => "none",
            ResponseIR::Text => "text",
            ResponseIR::Raw(_) => "raw",
            ResponseIR::Enveloped(_) => "enveloped",
        }
    }

    /// The interface this response needs, if any.
    pub fn declaration(&self) -> Option<&TsTypeDef> {
        match self {
            ResponseIR::Raw(def) | ResponseIR::Enveloped(def) => Some(def),
            ResponseIR::None | ResponseIR::Text => None,
        }
    }

    /// Type the callable resolves to; `None` leaves it untyped.
    pub fn return_type(&self) -> Option<TsType> {
        match self {
            ResponseIR::None => None,
            ResponseIR::Text => Some(TsType::Primitive(TsPrimitive::String)),
            ResponseIR::Raw(def) | ResponseIR::Enveloped(def) => Some(TsType::Ref(def.name.clone())),
        }
    }
}

/// Normalized API operation
#[derive(Debug, Clone)]
pub struct OperationIR {
    /// URL path template (e.g., "/users/{id}")
    pub path: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Operation summary, used in the callable's doc comment
    pub summary: Option<String>,
    /// Callable name (e.g., "getUsers{Id}")
    pub fn_name: String,
    /// `<Method><Path>Request` declaration when a JSON body schema exists
    pub request: Option<TsTypeDef>,
    /// Success response typing
    pub response: ResponseIR,
}

/// Source of the block emitted between the import and `BaseResponse`.
#[derive(Debug, Clone)]
pub enum ComponentsIR {
    /// Caller-provided text, emitted verbatim.
    Verbatim(String),
    /// Declarations rendered from `components.schemas`.
    Types(Vec<TsTypeDef>),
}

/// Normalized API document
#[derive(Debug)]
pub struct ApiIR {
    /// `info.title`
    pub title: String,
    /// `info.version`
    pub version: String,
    /// Operations in path-then-method order
    pub operations: Vec<OperationIR>,
    /// Component schema block
    pub components: ComponentsIR,
}
