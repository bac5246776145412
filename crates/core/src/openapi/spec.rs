//! OpenAPI document structs for serde deserialization.
//!
//! Only the subset the generator reads is modelled: `info`, `paths` with
//! their JSON request/response schemas, and `components.schemas`. Every map
//! is an `IndexMap` so emission follows the document's own key order.

use indexmap::IndexMap;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use tracing::debug;

use super::ir::HttpMethod;
use crate::error::GenerateError;

/// Media type whose schemas drive generation.
pub const APPLICATION_JSON: &str = "application/json";

/// Root OpenAPI document.
#[derive(Debug, Default, Deserialize)]
pub struct OpenApiDocument {
    #[serde(default)]
    pub info: Info,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    pub components: Option<Components>,
}

/// API metadata used in the generated header comment.
#[derive(Debug, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
}

/// Components section containing reusable schemas.
#[derive(Debug, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

/// Operations declared under one path template, in document order.
///
/// Keys that are not one of the supported HTTP methods (`parameters`,
/// `summary`, `head`, vendor extensions, ...) are dropped while parsing.
#[derive(Debug, Default)]
pub struct PathItem {
    operations: Vec<(HttpMethod, Operation)>,
}

impl PathItem {
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        self.operations.iter().map(|(method, op)| (*method, op))
    }
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathItemVisitor;

        impl<'de> Visitor<'de> for PathItemVisitor {
            type Value = PathItem;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an OpenAPI path item object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<PathItem, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut operations = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if let Some(method) = HttpMethod::from_key(&key) {
                        let operation = map.next_value::<Operation>()?;
                        operations.push((method, operation));
                    } else {
                        debug!(key = %key, "Skipping non-operation path item key.");
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(PathItem { operations })
            }
        }

        deserializer.deserialize_map(PathItemVisitor)
    }
}

/// An API operation (one method on one path).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub summary: Option<String>,
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// A request body definition.
#[derive(Debug, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A response definition.
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Media type content (e.g., application/json).
#[derive(Debug, Default, Deserialize)]
pub struct MediaType {
    pub schema: Option<Schema>,
}

/// JSON Schema fragment.
///
/// Read-only input; anything the generator does not understand is kept
/// loosely typed so that it degrades to `any` instead of failing the parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Reference to another schema.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// The declared type, if any.
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,

    /// Properties for object types, in declaration order.
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required property names for object types.
    #[serde(default, deserialize_with = "lenient_names")]
    pub required: Vec<String>,
}

/// `type` keyword: a single type name, or any other JSON value (type
/// arrays, typos) which the mapper treats as unknown.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Other(Value),
}

/// Accept `required` in any shape, keeping only string entries.
fn lenient_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(names)
}

impl OpenApiDocument {
    /// Parse an OpenAPI document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of operations the generator will emit a callable for.
    pub fn operation_count(&self) -> usize {
        self.paths
            .values()
            .map(|item| item.operations().count())
            .sum()
    }
}

impl Operation {
    /// `requestBody.content["application/json"].schema`
    pub fn json_request_schema(&self) -> Option<&Schema> {
        self.request_body
            .as_ref()?
            .content
            .get(APPLICATION_JSON)?
            .schema
            .as_ref()
    }

    /// The `200` response, else the `201` response.
    pub fn success_response(&self) -> Option<&Response> {
        self.responses
            .get("200")
            .or_else(|| self.responses.get("201"))
    }

    /// JSON schema of the success response.
    pub fn json_response_schema(&self) -> Option<&Schema> {
        self.success_response()?
            .content
            .get(APPLICATION_JSON)?
            .schema
            .as_ref()
    }
}

impl Schema {
    /// The `type` keyword when it is a plain string.
    pub fn type_name(&self) -> Option<&str> {
        match &self.schema_type {
            Some(SchemaType::Single(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Whether `name` appears in this schema's `required` list.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties
            .as_ref()
            .is_some_and(|props| props.contains_key(name))
    }
}
