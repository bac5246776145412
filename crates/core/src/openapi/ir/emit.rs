//! TypeScript code emission via the Emit trait.
//!
//! Each AST type implements `Emit`; nodes that span several lines also have
//! an `emit_indented` form (2 spaces per level).

use super::types::{
    TsExpr, TsFunction, TsImport, TsLiteral, TsMember, TsModule, TsParam, TsPrimitive, TsProp,
    TsStmt, TsType, TsTypeDef, TsTypeExport, TypeDefKind,
};
use super::utils::{escape_js_string, is_plain_identifier, quote_if_needed};

/// Trait for emitting TypeScript code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its TypeScript string representation.
    fn emit(&self) -> String;
}

fn indent_str(indent: usize) -> String {
    "  ".repeat(indent)
}

fn join<T: Emit>(items: &[T], sep: &str) -> String {
    items.iter().map(Emit::emit).collect::<Vec<_>>().join(sep)
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
            TsPrimitive::Object => "object".to_string(),
            TsPrimitive::Any => "any".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("'{}'", escape_js_string(s, '\'')),
        }
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => format!("{}[]", inner.emit()),
            // `{  }` for an empty property list
            TsType::Object(props) => format!("{{ {} }}", join(props, ", ")),
            TsType::Ref(name) => name.clone(),
            TsType::Generic { name, args } => format!("{}<{}>", name, join(args, ", ")),
        }
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        format!("{}{}: {}", quote_if_needed(&self.name), opt, self.ty.emit())
    }
}

impl Emit for TsMember {
    fn emit(&self) -> String {
        match self {
            TsMember::Prop(prop) => format!("{};", prop.emit()),
            TsMember::Index {
                key,
                key_type,
                value,
            } => format!("[{}: {}]: {};", key, key_type.emit(), value.emit()),
        }
    }
}

// =============================================================================
// Type Definitions
// =============================================================================

impl Emit for TsTypeDef {
    fn emit(&self) -> String {
        let export = if self.is_export { "export " } else { "" };
        let type_params = if self.type_params.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.type_params.join(", "))
        };

        match &self.kind {
            TypeDefKind::Interface { members } => {
                let mut output = format!("{export}interface {}{type_params} {{\n", self.name);
                for member in members {
                    output.push_str(&format!("  {}\n", member.emit()));
                }
                output.push_str("}\n");
                output
            }
            TypeDefKind::TypeAlias { ty } => {
                format!("{export}type {}{type_params} = {};\n", self.name, ty.emit())
            }
        }
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for TsExpr {
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

impl TsExpr {
    /// Emit at the given indentation level. Only multi-line object
    /// literals depend on it; everything else is a single line.
    pub fn emit_indented(&self, indent: usize) -> String {
        match self {
            TsExpr::Ident(name) => name.clone(),
            TsExpr::Literal(lit) => lit.emit(),
            TsExpr::Call {
                callee,
                type_args,
                args,
            } => {
                let type_args_str = if type_args.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", join(type_args, ", "))
                };
                let args_str = args
                    .iter()
                    .map(|a| a.emit_indented(indent))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}{}({})", callee.emit_indented(indent), type_args_str, args_str)
            }
            TsExpr::Member { object, prop } => format!("{}.{}", object.emit_indented(indent), prop),
            TsExpr::Object(props) => {
                if props.is_empty() {
                    return "{}".to_string();
                }
                let inner = indent_str(indent + 1);
                let mut output = String::from("{\n");
                for (key, value) in props {
                    let key = if is_plain_identifier(key) {
                        key.clone()
                    } else {
                        format!("'{}'", escape_js_string(key, '\''))
                    };
                    output.push_str(&format!(
                        "{inner}{key}: {},\n",
                        value.emit_indented(indent + 1)
                    ));
                }
                output.push_str(&format!("{}}}", indent_str(indent)));
                output
            }
            TsExpr::Await(expr) => format!("await {}", expr.emit_indented(indent)),
        }
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        match &self.ty {
            Some(ty) => format!("{}{}: {}", self.name, opt, ty.emit()),
            None => format!("{}{}", self.name, opt),
        }
    }
}

// =============================================================================
// Statements
// =============================================================================

impl Emit for TsStmt {
    fn emit(&self) -> String {
        self.emit_indented(1)
    }
}

impl TsStmt {
    /// Emit with specified indentation level (2 spaces per level)
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = indent_str(indent);
        match self {
            TsStmt::Const { name, init } => {
                format!("{prefix}const {name} = {};\n", init.emit_indented(indent))
            }
            TsStmt::Expr(expr) => format!("{prefix}{};\n", expr.emit_indented(indent)),
            TsStmt::Return(expr) => format!("{prefix}return {};\n", expr.emit_indented(indent)),
            TsStmt::Throw(expr) => format!("{prefix}throw {};\n", expr.emit_indented(indent)),
            TsStmt::TryCatch {
                body,
                binding,
                handler,
            } => {
                let mut output = format!("{prefix}try {{\n");
                for stmt in body {
                    output.push_str(&stmt.emit_indented(indent + 1));
                }
                output.push_str(&format!("{prefix}}} catch ({binding}) {{\n"));
                for stmt in handler {
                    output.push_str(&stmt.emit_indented(indent + 1));
                }
                output.push_str(&format!("{prefix}}}\n"));
                output
            }
            TsStmt::Raw(code) => {
                // Raw code is emitted as-is, with proper indentation for each line
                code.lines()
                    .map(|line| {
                        if line.is_empty() {
                            "\n".to_string()
                        } else {
                            format!("{prefix}{line}\n")
                        }
                    })
                    .collect()
            }
        }
    }
}

// =============================================================================
// Functions
// =============================================================================

impl Emit for TsFunction {
    fn emit(&self) -> String {
        let mut output = String::new();

        if !self.doc.is_empty() {
            output.push_str("/**\n");
            for line in &self.doc {
                output.push_str(&format!(" * {}\n", line.replace("*/", "*\\/")));
            }
            output.push_str(" */\n");
        }

        if self.is_export {
            output.push_str("export ");
        }

        let params_str = join(&self.params, ", ");
        let return_type_str = self
            .return_type
            .as_ref()
            .map(|t| format!(": {}", t.emit()))
            .unwrap_or_default();
        let async_str = if self.is_async { "async " } else { "" };

        output.push_str(&format!(
            "const {} = {}({}){}",
            self.name, async_str, params_str, return_type_str
        ));
        if self.body.is_empty() {
            output.push_str(" => {};\n");
        } else {
            output.push_str(" => {\n");
            for stmt in &self.body {
                output.push_str(&stmt.emit_indented(1));
            }
            output.push_str("};\n");
        }

        output
    }
}

// =============================================================================
// Imports / Exports
// =============================================================================

impl Emit for TsImport {
    fn emit(&self) -> String {
        format!("import {} from '{}';\n", self.name, escape_js_string(&self.from, '\''))
    }
}

impl Emit for TsTypeExport {
    fn emit(&self) -> String {
        if self.names.is_empty() {
            return String::new();
        }
        format!("export type {{\n  {}\n}};\n", self.names.join(",\n  "))
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for TsModule {
    fn emit(&self) -> String {
        let mut output = String::new();

        for line in &self.header {
            output.push_str(&format!("// {line}\n"));
        }
        if !self.header.is_empty() {
            output.push('\n');
        }

        for import in &self.imports {
            output.push_str(&import.emit());
        }
        if !self.imports.is_empty() {
            output.push('\n');
        }

        let components = self.components.trim_end();
        if !components.is_empty() {
            output.push_str(components);
            output.push_str("\n\n");
        }

        if !self.base_types.is_empty() {
            output.push_str("// Base response type\n");
            for type_def in &self.base_types {
                output.push_str(&type_def.emit());
                output.push('\n');
            }
        }

        if !self.types.is_empty() {
            output.push_str("// Operation types\n");
            for type_def in &self.types {
                output.push_str(&type_def.emit());
                output.push('\n');
            }
        }

        for func in &self.functions {
            output.push_str(&func.emit());
            output.push('\n');
        }

        let exports = self.exports.emit();
        if !exports.is_empty() {
            output.push_str("// Exported types\n");
            output.push_str(&exports);
        }

        output
    }
}

// =============================================================================
// Tests
// =============================================================================
