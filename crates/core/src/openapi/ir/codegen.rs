//! Code generation from API IR to TypeScript AST.
//!
//! This module turns normalized operations into declarations and axios
//! callables. The generated AST can then be emitted to strings via the
//! `Emit` trait.

use std::collections::HashSet;

use crate::openapi::options::{GeneratorOptions, ParamsEncoding};

use super::api::{ApiIR, ComponentsIR, OperationIR};
use super::emit::Emit;
use super::types::{
    TsExpr, TsFunction, TsImport, TsMember, TsModule, TsParam, TsPrimitive, TsProp, TsStmt,
    TsType, TsTypeDef, TsTypeExport, TypeDefKind,
};
use super::utils::has_path_params;

const BASE_RESPONSE: &str = "BaseResponse";
const RESOLVE_PATH: &str = "resolvePath";
const PARAMS: &str = "params";

/// Generate a complete TypeScript module from API IR.
pub fn codegen_module(api: &ApiIR, options: &GeneratorOptions) -> TsModule {
    let mut types = Vec::new();
    let mut functions = Vec::new();

    // Declarations first, in operation order
    for op in &api.operations {
        types.extend(op.request.iter().cloned());
        types.extend(op.response.declaration().cloned());
    }

    if api.operations.iter().any(substitutes_path) {
        functions.push(codegen_resolve_path());
    }

    for op in &api.operations {
        functions.push(codegen_callable(op, options));
    }

    TsModule {
        header: vec![
            "Auto-generated API client".to_string(),
            format!("Based on OpenAPI spec: {} v{}", api.title, api.version),
        ],
        imports: vec![TsImport {
            name: "axios".into(),
            from: "axios".into(),
        }],
        components: codegen_components(&api.components),
        base_types: vec![codegen_base_response()],
        exports: codegen_exports(&types),
        types,
        functions,
    }
}

fn codegen_components(components: &ComponentsIR) -> String {
    match components {
        ComponentsIR::Verbatim(text) => text.clone(),
        ComponentsIR::Types(defs) => defs.iter().map(Emit::emit).collect::<Vec<_>>().join("\n"),
    }
}

/// `interface BaseResponse<T> { success: boolean; code: number; data: T; }`
fn codegen_base_response() -> TsTypeDef {
    let field = |name: &str, ty: TsType| {
        TsMember::Prop(TsProp {
            name: name.into(),
            ty,
            optional: false,
        })
    };

    TsTypeDef {
        name: BASE_RESPONSE.into(),
        type_params: vec!["T".into()],
        kind: TypeDefKind::Interface {
            members: vec![
                field("success", TsType::Primitive(TsPrimitive::Boolean)),
                field("code", TsType::Primitive(TsPrimitive::Number)),
                field("data", TsType::Ref("T".into())),
            ],
        },
        is_export: false,
    }
}

/// Every declared name once, in declaration order, then `BaseResponse`.
fn codegen_exports(types: &[TsTypeDef]) -> TsTypeExport {
    let mut seen = HashSet::new();
    let mut names: Vec<String> = types
        .iter()
        .filter(|def| seen.insert(def.name.as_str()))
        .map(|def| def.name.clone())
        .collect();
    if !seen.contains(BASE_RESPONSE) {
        names.push(BASE_RESPONSE.into());
    }
    TsTypeExport { names }
}

/// Whether the callable builds its URL through `resolvePath`.
fn substitutes_path(op: &OperationIR) -> bool {
    op.request.is_some() && has_path_params(&op.path)
}

/// Helper that fills `{name}` tokens from the matching `params` keys.
fn codegen_resolve_path() -> TsFunction {
    TsFunction {
        name: RESOLVE_PATH.into(),
        doc: vec!["Replace `{name}` tokens in a path template with values from `params`.".into()],
        params: vec![
            TsParam {
                name: "template".into(),
                ty: Some(TsType::Primitive(TsPrimitive::String)),
                optional: false,
            },
            TsParam {
                name: PARAMS.into(),
                ty: Some(TsType::Primitive(TsPrimitive::Object)),
                optional: false,
            },
        ],
        return_type: Some(TsType::Primitive(TsPrimitive::String)),
        body: vec![TsStmt::Raw(
            "return template.replace(/\\{([^}]+)\\}/g, (match: string, key: string) => {\n  \
             const value = (params as Record<string, unknown>)[key];\n  \
             return value === undefined || value === null ? match : encodeURIComponent(String(value));\n\
             });"
                .into(),
        )],
        is_async: false,
        is_export: false,
    }
}

/// Generate the exported async callable for one operation.
fn codegen_callable(op: &OperationIR, options: &GeneratorOptions) -> TsFunction {
    let request_type = op.request.as_ref().map(|def| TsType::Ref(def.name.clone()));
    let response_type = op.response.return_type();

    let mut doc = Vec::new();
    if let Some(summary) = op.summary.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        doc.extend(summary.lines().map(str::to_string));
    }
    if let Some(ty) = &request_type {
        doc.push(format!("@param params {}", ty.emit()));
    }
    doc.push(match &response_type {
        Some(ty) => format!("@returns {}", ty.emit()),
        None => "@returns Response payload".to_string(),
    });

    let params = request_type
        .map(|ty| TsParam {
            name: PARAMS.into(),
            ty: Some(ty),
            optional: false,
        })
        .into_iter()
        .collect();

    TsFunction {
        name: op.fn_name.clone(),
        doc,
        params,
        return_type: response_type.clone().map(|ty| TsType::Generic {
            name: "Promise".into(),
            args: vec![ty],
        }),
        body: codegen_callable_body(op, response_type, options),
        is_async: true,
        is_export: true,
    }
}

/// `try { axios.request(...); return response.data; } catch { log; rethrow }`
fn codegen_callable_body(
    op: &OperationIR,
    response_type: Option<TsType>,
    options: &GeneratorOptions,
) -> Vec<TsStmt> {
    let request = TsExpr::Call {
        callee: Box::new(TsExpr::member(TsExpr::ident("axios"), "request")),
        type_args: response_type.into_iter().collect(),
        args: vec![codegen_request_config(op, options)],
    };

    let log_error = TsExpr::call(
        TsExpr::member(TsExpr::ident("console"), "error"),
        vec![
            TsExpr::string(format!("Error calling {}:", op.fn_name)),
            TsExpr::ident("error"),
        ],
    );

    vec![TsStmt::TryCatch {
        body: vec![
            TsStmt::Const {
                name: "response".into(),
                init: TsExpr::Await(Box::new(request)),
            },
            TsStmt::Return(TsExpr::member(TsExpr::ident("response"), "data")),
        ],
        binding: "error".into(),
        handler: vec![
            TsStmt::Expr(log_error),
            TsStmt::Throw(TsExpr::ident("error")),
        ],
    }]
}

/// The axios request config object.
fn codegen_request_config(op: &OperationIR, options: &GeneratorOptions) -> TsExpr {
    let url = format!("{}{}", options.base_path.trim_end_matches('/'), op.path);
    let url = if substitutes_path(op) {
        TsExpr::call(
            TsExpr::ident(RESOLVE_PATH),
            vec![TsExpr::string(url), TsExpr::ident(PARAMS)],
        )
    } else {
        TsExpr::string(url)
    };

    let mut config = vec![
        ("url".to_string(), url),
        ("method".to_string(), TsExpr::string(op.method.as_str())),
        (
            "headers".to_string(),
            TsExpr::Object(vec![(
                "Content-Type".to_string(),
                TsExpr::string("application/json"),
            )]),
        ),
    ];

    if op.request.is_some() {
        let slot = if op.method.sends_query() { "params" } else { "data" };
        let value = match options.params_encoding {
            ParamsEncoding::Structured => TsExpr::ident(PARAMS),
            ParamsEncoding::JsonString => TsExpr::call(
                TsExpr::member(TsExpr::ident("JSON"), "stringify"),
                vec![TsExpr::ident(PARAMS)],
            ),
        };
        config.push((slot.to_string(), value));
    }

    TsExpr::Object(config)
}
