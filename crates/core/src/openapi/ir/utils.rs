//! String helpers shared by naming, normalization and emission.

/// `true` when `name` can be written bare as a TS property key or member
/// name (`[A-Za-z_$][A-Za-z0-9_$]*`).
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for a JavaScript/TypeScript literal delimited by `quote`.
/// Escapes backslashes, the delimiter and line breaks.
pub fn escape_js_string(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Interface member key: bare when possible, double-quoted otherwise.
pub fn quote_if_needed(name: &str) -> String {
    if is_plain_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", escape_js_string(name, '"'))
    }
}

pub fn upper_first(s: &str) -> String {
    s.chars()
        .next()
        .map_or_else(String::new, |first| {
            first.to_uppercase().chain(s.chars().skip(1)).collect()
        })
}

/// Whether a path template contains at least one `{name}` token.
pub fn has_path_params(path: &str) -> bool {
    path.find('{')
        .is_some_and(|open| path[open..].contains('}'))
}

/// Last segment of a `$ref` pointer: `#/components/schemas/Item` -> `Item`.
pub fn ref_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Declared name for a schema key or `$ref` target.
///
/// Characters a TS identifier cannot hold become `_` and a leading digit
/// gets a `_` prefix: `PageResult«User»` -> `PageResult_User_`.
pub fn schema_type_name(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.starts_with(|c: char| c.is_numeric()) {
        name.insert(0, '_');
    }
    name
}
