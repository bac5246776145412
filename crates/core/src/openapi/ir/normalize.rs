//! Normalization from OpenAPI document to API IR.
//!
//! This module handles all the OpenAPI-specific logic:
//! - Schema to TypeScript type conversion (the inline type mapper)
//! - Top-level interface bodies for request/response declarations
//! - Enveloped response detection
//! - Component schema declarations

use indexmap::IndexMap;
use tracing::debug;

use crate::openapi::options::{ComponentsBlock, GeneratorOptions, NamingStyle};
use crate::openapi::spec::{Components, OpenApiDocument, Operation, Schema};

use super::api::{ApiIR, ComponentsIR, HttpMethod, OperationIR, ResponseIR};
use super::emit::Emit;
use super::naming::{NameKind, TypeSuffix, derive_name};
use super::types::{TsMember, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind};
use super::utils::{ref_name, schema_type_name};

/// Properties that mark a `{ success, code, data }` response envelope.
const ENVELOPE_FIELDS: [&str; 3] = ["success", "code", "data"];

/// Normalize an OpenAPI document into API IR.
///
/// Never fails: unrecognised schema shapes degrade to `any` or are skipped.
pub fn normalize_document(doc: &OpenApiDocument, options: &GeneratorOptions) -> ApiIR {
    let mut operations = Vec::with_capacity(doc.operation_count());

    for (path, item) in &doc.paths {
        for (method, op) in item.operations() {
            operations.push(normalize_operation(path, method, op, options.naming));
        }
    }

    let components = match &options.components {
        ComponentsBlock::Verbatim(text) => ComponentsIR::Verbatim(text.clone()),
        ComponentsBlock::Rendered => {
            ComponentsIR::Types(normalize_components(doc.components.as_ref()))
        }
    };

    let mut api = ApiIR {
        title: doc.info.title.clone(),
        version: doc.info.version.clone(),
        operations,
        components,
    };
    if options.naming == NamingStyle::Sanitized {
        sanitize_schema_names(&mut api);
    }
    api
}

/// Rewrite component declaration names and every `$ref` type through
/// [`schema_type_name`] so both sides stay in step.
fn sanitize_schema_names(api: &mut ApiIR) {
    if let ComponentsIR::Types(defs) = &mut api.components {
        for def in defs {
            def.name = schema_type_name(&def.name);
            sanitize_def(def);
        }
    }
    for op in &mut api.operations {
        if let Some(def) = &mut op.request {
            sanitize_def(def);
        }
        if let ResponseIR::Raw(def) | ResponseIR::Enveloped(def) = &mut op.response {
            sanitize_def(def);
        }
    }
}

fn sanitize_def(def: &mut TsTypeDef) {
    match &mut def.kind {
        TypeDefKind::Interface { members } => {
            for member in members {
                match member {
                    TsMember::Prop(prop) => sanitize_type(&mut prop.ty),
                    TsMember::Index { value, .. } => sanitize_type(value),
                }
            }
        }
        TypeDefKind::TypeAlias { ty } => sanitize_type(ty),
    }
}

fn sanitize_type(ty: &mut TsType) {
    match ty {
        TsType::Ref(name) => *name = schema_type_name(name),
        TsType::Array(inner) => sanitize_type(inner),
        TsType::Object(props) => {
            for prop in props {
                sanitize_type(&mut prop.ty);
            }
        }
        TsType::Generic { args, .. } => args.iter_mut().for_each(sanitize_type),
        TsType::Primitive(_) => {}
    }
}

fn normalize_operation(
    path: &str,
    method: HttpMethod,
    op: &Operation,
    style: NamingStyle,
) -> OperationIR {
    let type_name = |suffix| derive_name(NameKind::Type(suffix), method, path, style);

    let request = op
        .json_request_schema()
        .map(|schema| declaration(type_name(TypeSuffix::Request), schema));

    let response = match op.json_response_schema() {
        None => ResponseIR::None,
        Some(schema) => match envelope_data(schema) {
            Some(data) => {
                ResponseIR::Enveloped(declaration(type_name(TypeSuffix::ResponseData), data))
            }
            None if schema.type_name() == Some("string") => ResponseIR::Text,
            None => ResponseIR::Raw(declaration(type_name(TypeSuffix::Response), schema)),
        },
    };

    let fn_name = derive_name(NameKind::Function, method, path, style);
    debug!(
        method = method.as_str(),
        path = %path,
        fn_name = %fn_name,
        has_request = request.is_some(),
        response = response.kind(),
        "Normalized operation."
    );

    OperationIR {
        path: path.to_string(),
        method,
        summary: op.summary.clone(),
        fn_name,
        request,
        response,
    }
}

/// The `data` sub-schema when `schema` is a `{ success, code, data }`
/// envelope.
fn envelope_data(schema: &Schema) -> Option<&Schema> {
    if !ENVELOPE_FIELDS.iter().all(|field| schema.has_property(field)) {
        return None;
    }
    schema.properties.as_ref()?.get("data")
}

/// A non-exported interface declaration for an operation schema.
fn declaration(name: String, schema: &Schema) -> TsTypeDef {
    TsTypeDef::interface(name, interface_members(schema))
}

/// Member lines of a top-level interface.
///
/// - object with `properties`: one `name?: type;` line per property
/// - array with `items`: `[index: number]: <item>;`
/// - `$ref` or any other typed schema: `[key: string]: <type>;`
/// - no `type` at all: empty body
pub fn interface_members(schema: &Schema) -> Vec<TsMember> {
    if schema.ref_path.is_some() {
        return vec![catch_all(schema)];
    }

    match (schema.type_name(), &schema.properties, &schema.items) {
        (Some("object"), Some(props), _) => normalize_properties(schema, props)
            .into_iter()
            .map(TsMember::Prop)
            .collect(),
        (Some("array"), _, Some(items)) => vec![TsMember::Index {
            key: "index".to_string(),
            key_type: TsPrimitive::Number,
            value: schema_to_ts_type(items),
        }],
        _ if schema.schema_type.is_some() => vec![catch_all(schema)],
        _ => Vec::new(),
    }
}

fn catch_all(schema: &Schema) -> TsMember {
    TsMember::Index {
        key: "key".to_string(),
        key_type: TsPrimitive::String,
        value: schema_to_ts_type(schema),
    }
}

/// Properties in declaration order; optional unless listed in the parent's
/// `required`.
fn normalize_properties(parent: &Schema, props: &IndexMap<String, Schema>) -> Vec<TsProp> {
    props
        .iter()
        .map(|(name, prop_schema)| TsProp {
            name: name.clone(),
            ty: schema_to_ts_type(prop_schema),
            optional: !parent.is_required(name),
        })
        .collect()
}

/// Convert a schema fragment to a TypeScript type.
pub fn schema_to_ts_type(schema: &Schema) -> TsType {
    if let Some(ref_path) = &schema.ref_path {
        return TsType::Ref(ref_name(ref_path).to_string());
    }

    match schema.type_name() {
        Some("string") => TsType::Primitive(TsPrimitive::String),
        Some("number" | "integer") => TsType::Primitive(TsPrimitive::Number),
        Some("boolean") => TsType::Primitive(TsPrimitive::Boolean),
        Some("array") => {
            let item = schema
                .items
                .as_deref()
                .map_or(TsType::Primitive(TsPrimitive::Any), schema_to_ts_type);
            TsType::Array(Box::new(item))
        }
        Some("object") => match &schema.properties {
            Some(props) => TsType::Object(normalize_properties(schema, props)),
            None => TsType::Primitive(TsPrimitive::Object),
        },
        _ => TsType::Primitive(TsPrimitive::Any),
    }
}

/// Resolve a schema fragment to its TypeScript type expression.
pub fn resolve(schema: &Schema) -> String {
    schema_to_ts_type(schema).emit()
}

/// Exported declarations for `components.schemas`, in document order.
fn normalize_components(components: Option<&Components>) -> Vec<TsTypeDef> {
    let Some(components) = components else {
        return Vec::new();
    };

    components
        .schemas
        .iter()
        .map(|(name, schema)| {
            let kind = match (schema.type_name(), &schema.properties) {
                (Some("object"), Some(_)) => TypeDefKind::Interface {
                    members: interface_members(schema),
                },
                _ => TypeDefKind::TypeAlias {
                    ty: schema_to_ts_type(schema),
                },
            };
            TsTypeDef {
                name: name.clone(),
                type_params: Vec::new(),
                kind,
                is_export: true,
            }
        })
        .collect()
}
