//! OpenAPI to TypeScript client generator.
//!
//! This module parses OpenAPI 3.x documents and generates a single
//! TypeScript file with:
//! - Declarations for `components.schemas`
//! - Request/response interfaces derived from each operation
//! - One axios-based async callable per operation
//! - A trailing `export type { ... }` list

mod emitter;
mod ir;
mod options;
mod spec;

pub use emitter::{generate, generate_document, generate_with};
pub use ir::{HttpMethod, NameKind, TypeSuffix, derive_name, resolve};
pub use options::{ComponentsBlock, DEFAULT_BASE_PATH, GeneratorOptions, NamingStyle, ParamsEncoding};
pub use spec::{OpenApiDocument, Schema};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const PING_JSON: &str = r#"{
  "openapi": "3.0.1",
  "info": { "title": "Ping API", "version": "1.0.0" },
  "paths": {
    "/ping": {
      "get": {
        "summary": "Health check",
        "responses": {
          "200": { "description": "OK", "content": { "application/json": { "schema": { "type": "string" } } } }
        }
      }
    }
  }
}"#;

    const ITEMS_JSON: &str = r##"{
  "openapi": "3.0.1",
  "info": { "title": "Items API", "version": "2.3.0" },
  "paths": {
    "/items": {
      "post": {
        "summary": "Create item",
        "requestBody": {
          "content": {
            "application/json": {
              "schema": { "type": "object", "properties": { "name": { "type": "string" } }, "required": ["name"] }
            }
          }
        },
        "responses": {
          "200": {
            "description": "OK",
            "content": {
              "application/json": {
                "schema": {
                  "type": "object",
                  "properties": {
                    "success": { "type": "boolean" },
                    "code": { "type": "integer" },
                    "data": { "type": "object", "properties": { "id": { "type": "number" } } }
                  }
                }
              }
            }
          }
        }
      },
      "get": {
        "responses": {
          "200": {
            "description": "OK",
            "content": {
              "application/json": {
                "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Item" } }
              }
            }
          }
        }
      }
    },
    "/users/{id}": {
      "get": {
        "requestBody": {
          "content": {
            "application/json": { "schema": { "type": "object", "properties": { "id": { "type": "integer" } }, "required": ["id"] } }
          }
        },
        "responses": {
          "201": {
            "description": "Created",
            "content": {
              "application/json": {
                "schema": { "type": "object", "properties": { "user": { "$ref": "#/components/schemas/User" }, "data": { "type": "string" } } }
              }
            }
          }
        }
      }
    }
  },
  "components": {
    "schemas": {
      "Item": {
        "type": "object",
        "properties": { "id": { "type": "integer" }, "tags": { "type": "array", "items": { "type": "string" } } },
        "required": ["id"]
      },
      "User": { "type": "object", "properties": { "name": { "type": "string" } } }
    }
  }
}"##;

    fn position(code: &str, needle: &str) -> usize {
        code.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in:\n{code}"))
    }

    #[test]
    fn test_ping_end_to_end() {
        let ts_code = generate(PING_JSON).unwrap();
        assert_eq!(
            ts_code,
            "// Auto-generated API client
// Based on OpenAPI spec: Ping API v1.0.0

import axios from 'axios';

// Base response type
interface BaseResponse<T> {
  success: boolean;
  code: number;
  data: T;
}

/**
 * Health check
 * @returns string
 */
export const getPing = async (): Promise<string> => {
  try {
    const response = await axios.request<string>({
      url: '/api/ping',
      method: 'GET',
      headers: {
        'Content-Type': 'application/json',
      },
    });
    return response.data;
  } catch (error) {
    console.error('Error calling getPing:', error);
    throw error;
  }
};

// Exported types
export type {
  BaseResponse
};
"
        );
    }

    #[test]
    fn test_raw_string_response_has_no_interface() {
        let ts_code = generate(PING_JSON).unwrap();
        assert!(!ts_code.contains("GetPingResponse"));
        assert!(!ts_code.contains("GetPingRequest"));
        assert!(!ts_code.contains("// Operation types"));
    }

    #[test]
    fn test_items_post_end_to_end() {
        let ts_code = generate(ITEMS_JSON).unwrap();

        assert!(
            ts_code.contains("interface PostItemsRequest {\n  name: string;\n}\n"),
            "request interface:\n{ts_code}"
        );
        assert!(
            ts_code.contains("interface PostItemsResponseData {\n  id?: number;\n}\n"),
            "response data interface:\n{ts_code}"
        );
        assert!(ts_code.contains(
            "export const postItems = async (params: PostItemsRequest): Promise<PostItemsResponseData> => {"
        ));
        assert!(ts_code.contains("const response = await axios.request<PostItemsResponseData>({"));
        assert!(ts_code.contains("      method: 'POST',\n"));
        assert!(ts_code.contains("      data: params,\n"));
        assert!(!ts_code.contains("PostItemsResponse {"));
    }

    #[test]
    fn test_header_uses_info() {
        let ts_code = generate(ITEMS_JSON).unwrap();
        assert!(ts_code.starts_with(
            "// Auto-generated API client\n// Based on OpenAPI spec: Items API v2.3.0\n\nimport axios from 'axios';\n"
        ));
    }

    #[test]
    fn test_path_param_braces_in_names() {
        let ts_code = generate(ITEMS_JSON).unwrap();
        assert!(ts_code.contains("interface GetUsers{Id}Request {\n  id: number;\n}\n"));
        assert!(ts_code.contains("export const getUsers{Id} = async (params: GetUsers{Id}Request)"));
    }

    #[test]
    fn test_non_enveloped_response_uses_full_schema() {
        // `data` without `success`/`code` is not an envelope; 201 is used when 200 is absent
        let ts_code = generate(ITEMS_JSON).unwrap();
        assert!(
            ts_code.contains(
                "interface GetUsers{Id}Response {\n  user?: User;\n  data?: string;\n}\n"
            ),
            "{ts_code}"
        );
        assert!(ts_code.contains("Promise<GetUsers{Id}Response>"));
        assert!(!ts_code.contains("GetUsers{Id}ResponseData"));
    }

    #[test]
    fn test_array_response_uses_index_signature() {
        let ts_code = generate(ITEMS_JSON).unwrap();
        assert!(ts_code.contains("interface GetItemsResponse {\n  [index: number]: Item;\n}\n"));
        assert!(ts_code.contains("export const getItems = async (): Promise<GetItemsResponse> => {"));
    }

    #[test]
    fn test_path_params_substituted_from_params() {
        let ts_code = generate(ITEMS_JSON).unwrap();
        assert!(ts_code.contains("const resolvePath = (template: string, params: object): string => {"));
        assert!(ts_code.contains("url: resolvePath('/api/users/{id}', params),"));
        // GET sends params as the query object
        assert!(ts_code.contains("      params: params,\n"));
    }

    #[test]
    fn test_no_resolve_path_helper_without_path_params() {
        let ts_code = generate(PING_JSON).unwrap();
        assert!(!ts_code.contains("resolvePath"));
    }

    #[test]
    fn test_components_rendered_before_base_response() {
        let ts_code = generate(ITEMS_JSON).unwrap();
        assert!(ts_code.contains("export interface Item {\n  id: number;\n  tags?: string[];\n}\n"));
        assert!(ts_code.contains("export interface User {\n  name?: string;\n}\n"));
        assert!(position(&ts_code, "import axios") < position(&ts_code, "export interface Item"));
        assert!(position(&ts_code, "export interface User") < position(&ts_code, "interface BaseResponse<T>"));
    }

    #[test]
    fn test_section_order() {
        let ts_code = generate(ITEMS_JSON).unwrap();
        let order = [
            "// Auto-generated API client",
            "import axios from 'axios';",
            "export interface Item",
            "interface BaseResponse<T>",
            "interface PostItemsRequest",
            "interface PostItemsResponseData",
            "interface GetItemsResponse",
            "interface GetUsers{Id}Request",
            "interface GetUsers{Id}Response",
            "const resolvePath",
            "export const postItems",
            "export const getItems",
            "export const getUsers{Id}",
            "export type {",
        ];
        let positions: Vec<_> = order.iter().map(|needle| position(&ts_code, needle)).collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "sections out of order:\n{ts_code}"
        );
    }

    #[test]
    fn test_export_list() {
        let ts_code = generate(ITEMS_JSON).unwrap();
        assert!(ts_code.ends_with(
            "export type {
  PostItemsRequest,
  PostItemsResponseData,
  GetItemsResponse,
  GetUsers{Id}Request,
  GetUsers{Id}Response,
  BaseResponse
};
"
        ));
    }

    #[test]
    fn test_duplicate_names_exported_once() {
        let json = r#"{
  "info": { "title": "Dup", "version": "1" },
  "paths": {
    "/users": { "post": { "requestBody": { "content": { "application/json": { "schema": { "type": "object", "properties": { "a": { "type": "string" } } } } } } } },
    "/Users": { "post": { "requestBody": { "content": { "application/json": { "schema": { "type": "object", "properties": { "b": { "type": "string" } } } } } } } }
  }
}"#;
        let ts_code = generate(json).unwrap();
        // Both declarations are kept (TypeScript merges them)
        assert_eq!(ts_code.matches("interface PostUsersRequest {").count(), 2);
        assert_eq!(ts_code.matches("  PostUsersRequest,\n").count(), 1);
    }

    #[test]
    fn test_idempotent() {
        let first = generate(ITEMS_JSON).unwrap();
        let second = generate(ITEMS_JSON).unwrap();
        assert_eq!(first, second);

        let doc = OpenApiDocument::from_json(ITEMS_JSON).unwrap();
        let options = GeneratorOptions::default();
        assert_eq!(generate_document(&doc, &options), generate_document(&doc, &options));
    }

    #[test]
    fn test_document_order_drives_output_order() {
        let json = r#"{
  "paths": {
    "/zeta": { "delete": {}, "get": {} },
    "/alpha": { "put": {} }
  }
}"#;
        let ts_code = generate(json).unwrap();
        let zeta_delete = position(&ts_code, "export const deleteZeta");
        let zeta_get = position(&ts_code, "export const getZeta");
        let alpha_put = position(&ts_code, "export const putAlpha");
        assert!(zeta_delete < zeta_get && zeta_get < alpha_put);
    }

    #[test]
    fn test_unsupported_methods_are_skipped() {
        let json = r#"{
  "paths": {
    "/items": { "head": {}, "options": {}, "trace": {}, "parameters": [], "get": {} }
  }
}"#;
        let ts_code = generate(json).unwrap();
        assert!(ts_code.contains("export const getItems"));
        assert!(!ts_code.contains("headItems"));
        assert!(!ts_code.contains("optionsItems"));
    }

    #[test]
    fn test_malformed_schemas_degrade() {
        let json = r#"{
  "paths": {
    "/odd": {
      "patch": {
        "requestBody": { "content": { "application/json": { "schema": { "type": ["string", "null"] } } } },
        "responses": {
          "200": { "content": { "application/json": { "schema": { "properties": { "x": {} } } } } }
        }
      }
    },
    "/empty": {
      "post": {
        "requestBody": { "content": { "text/plain": { "schema": { "type": "string" } } } },
        "responses": { "200": { "description": "no content" }, "500": {} }
      }
    }
  }
}"#;
        let ts_code = generate(json).unwrap();
        assert!(ts_code.contains("interface PatchOddRequest {\n  [key: string]: any;\n}\n"));
        assert!(ts_code.contains("interface PatchOddResponse {\n}\n"));
        assert!(ts_code.contains("export const postEmpty = async () => {"));
    }

    #[test]
    fn test_missing_info_still_generates() {
        let ts_code = generate(r#"{ "paths": {} }"#).unwrap();
        assert!(ts_code.contains("// Based on OpenAPI spec:  v\n"));
        assert!(ts_code.contains("interface BaseResponse<T>"));
    }

    #[test]
    fn test_invalid_json() {
        let err = generate("{ nope").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse OpenAPI document"));
    }

    #[test]
    fn test_sanitized_names() {
        let options = GeneratorOptions {
            naming: NamingStyle::Sanitized,
            ..GeneratorOptions::default()
        };
        let ts_code = generate_with(ITEMS_JSON, &options).unwrap();
        assert!(ts_code.contains("interface GetUsersIdRequest {"));
        assert!(ts_code.contains("export const getUsersId = async (params: GetUsersIdRequest)"));
        assert!(!ts_code.contains("{Id}"));
    }

    #[test]
    fn test_json_string_params() {
        let options = GeneratorOptions {
            params_encoding: ParamsEncoding::JsonString,
            ..GeneratorOptions::default()
        };
        let ts_code = generate_with(ITEMS_JSON, &options).unwrap();
        assert!(ts_code.contains("      data: JSON.stringify(params),\n"));
        assert!(ts_code.contains("      params: JSON.stringify(params),\n"));
    }

    #[test]
    fn test_verbatim_components() {
        let options = GeneratorOptions {
            components: ComponentsBlock::Verbatim("export type External = { id: string };\n".into()),
            ..GeneratorOptions::default()
        };
        let ts_code = generate_with(ITEMS_JSON, &options).unwrap();
        assert!(ts_code.contains(
            "import axios from 'axios';\n\nexport type External = { id: string };\n\n// Base response type\n"
        ));
        assert!(!ts_code.contains("export interface Item"));
    }

    #[test]
    fn test_custom_base_path() {
        let options = GeneratorOptions {
            base_path: "/gateway".into(),
            ..GeneratorOptions::default()
        };
        let ts_code = generate_with(PING_JSON, &options).unwrap();
        assert!(ts_code.contains("url: '/gateway/ping',"));
    }

    #[test]
    fn test_summary_with_quote_and_newline() {
        let json = r#"{
  "paths": { "/q": { "get": { "summary": "Can't fail\nSecond line" } } }
}"#;
        let ts_code = generate(json).unwrap();
        assert!(ts_code.contains("/**\n * Can't fail\n * Second line\n * @returns Response payload\n */\n"));
    }

    #[test]
    fn test_summary_cannot_close_doc_comment() {
        let json = r#"{
  "paths": { "/q": { "get": { "summary": "Accepts */* content" } } }
}"#;
        let ts_code = generate(json).unwrap();
        assert!(ts_code.contains("/**\n * Accepts *\\/* content\n * @returns Response payload\n */\n"));
        let doc_start = ts_code.find("/**").unwrap();
        let doc_end = ts_code[doc_start..].find("*/").unwrap() + doc_start;
        assert!(ts_code[doc_end..].starts_with("*/\nexport const getQ"));
    }

    #[test]
    fn test_public_helpers() {
        let schema: Schema = serde_json::from_str(
            r#"{ "type": "array", "items": { "type": "array", "items": { "type": "boolean" } } }"#,
        )
        .unwrap();
        assert_eq!(resolve(&schema), "boolean[][]");
        assert_eq!(
            derive_name(
                NameKind::Type(TypeSuffix::ResponseData),
                HttpMethod::Get,
                "/users/{id}",
                NamingStyle::Preserve
            ),
            "GetUsers{Id}ResponseData"
        );
    }
}
