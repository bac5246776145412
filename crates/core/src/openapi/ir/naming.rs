//! Name derivation for generated declarations and callables.
//!
//! Type names and function names come from the same routine so the two can
//! never drift apart: `GetUsers{Id}Request` and `getUsers{Id}` share every
//! segment and differ only in the method token and the suffix.

use super::api::HttpMethod;
use super::utils::upper_first;
use crate::openapi::options::NamingStyle;

/// Role of a derived type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSuffix {
    Request,
    Response,
    ResponseData,
}

impl TypeSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeSuffix::Request => "Request",
            TypeSuffix::Response => "Response",
            TypeSuffix::ResponseData => "ResponseData",
        }
    }
}

/// What a derived name is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Interface name: capitalized method token plus suffix.
    Type(TypeSuffix),
    /// Callable name: lowercase method token, no suffix.
    Function,
}

/// Derive the identifier for `method path` in the given role.
///
/// The path is split on `/`, empty segments are dropped and each remaining
/// segment is capitalized. A path with no segments yields only the method
/// token (plus the suffix for types).
pub fn derive_name(kind: NameKind, method: HttpMethod, path: &str, style: NamingStyle) -> String {
    let mut name = String::from(match kind {
        NameKind::Type(_) => method.type_token(),
        NameKind::Function => method.function_token(),
    });

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        match style {
            NamingStyle::Preserve => name.push_str(&capitalize_segment(segment)),
            NamingStyle::Sanitized => name.push_str(&sanitize_segment(segment)),
        }
    }

    if let NameKind::Type(suffix) = kind {
        name.push_str(suffix.as_str());
    }
    name
}

/// Capitalize a segment, looking past a leading `{` so that `{id}` becomes
/// `{Id}`.
fn capitalize_segment(segment: &str) -> String {
    match segment.strip_prefix('{') {
        Some(rest) => format!("{{{}", upper_first(rest)),
        None => upper_first(segment),
    }
}

/// Drop braces and fold `-`, `.` and `_` separators into PascalCase.
fn sanitize_segment(segment: &str) -> String {
    segment
        .split(['{', '}', '-', '.', '_'])
        .filter(|part| !part.is_empty())
        .map(upper_first)
        .collect()
}
