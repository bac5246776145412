//! TypeScript IR types for code generation.
//!
//! - TsType: type expressions (primitives, arrays, inline objects, references)
//! - TsTypeDef: top-level `interface` / `type` declarations
//! - TsExpr / TsStmt / TsFunction: the generated callables
//! - TsModule: the whole output file, section by section

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, object, any
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Inline object type: { foo: string, bar?: number }
    Object(Vec<TsProp>),
    /// Named type reference: "Item", "T"
    Ref(String),
    /// Generic instantiation: Promise<T>
    Generic { name: String, args: Vec<TsType> },
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    String,
    Number,
    Boolean,
    Object,
    Any,
}

/// Object property definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsProp {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
}

/// One line of an interface body
#[derive(Debug, Clone, PartialEq)]
pub enum TsMember {
    /// `name?: type;`
    Prop(TsProp),
    /// `[key: keyType]: value;`
    Index {
        key: String,
        key_type: TsPrimitive,
        value: TsType,
    },
}

/// Type definition kind
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefKind {
    /// interface Foo { ... }
    Interface { members: Vec<TsMember> },
    /// type Foo = ...
    TypeAlias { ty: TsType },
}

/// Type definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeDef {
    pub name: String,
    pub type_params: Vec<String>,
    pub kind: TypeDefKind,
    pub is_export: bool,
}

impl TsTypeDef {
    /// A non-exported interface without type parameters.
    pub fn interface(name: impl Into<String>, members: Vec<TsMember>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            kind: TypeDefKind::Interface { members },
            is_export: false,
        }
    }
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq)]
pub enum TsLiteral {
    String(String),
}

/// TypeScript expression
#[derive(Debug, Clone, PartialEq)]
pub enum TsExpr {
    /// Identifier: foo
    Ident(String),
    /// Literal value: 'bar'
    Literal(TsLiteral),
    /// Function call: foo<T>(a, b)
    Call {
        callee: Box<TsExpr>,
        type_args: Vec<TsType>,
        args: Vec<TsExpr>,
    },
    /// Member access: foo.bar
    Member { object: Box<TsExpr>, prop: String },
    /// Object literal, one property per line
    Object(Vec<(String, TsExpr)>),
    /// Await expression: await fetch()
    Await(Box<TsExpr>),
}

impl TsExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TsExpr::Ident(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        TsExpr::Literal(TsLiteral::String(value.into()))
    }

    pub fn member(object: TsExpr, prop: impl Into<String>) -> Self {
        TsExpr::Member {
            object: Box::new(object),
            prop: prop.into(),
        }
    }

    pub fn call(callee: TsExpr, args: Vec<TsExpr>) -> Self {
        TsExpr::Call {
            callee: Box::new(callee),
            type_args: Vec::new(),
            args,
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct TsParam {
    pub name: String,
    pub ty: Option<TsType>,
    pub optional: bool,
}

/// Statement in a function body
#[derive(Debug, Clone, PartialEq)]
pub enum TsStmt {
    /// const declaration
    Const { name: String, init: TsExpr },
    /// Expression statement
    Expr(TsExpr),
    /// Return statement
    Return(TsExpr),
    /// Throw statement
    Throw(TsExpr),
    /// try { ... } catch (binding) { ... }
    TryCatch {
        body: Vec<TsStmt>,
        binding: String,
        handler: Vec<TsStmt>,
    },
    /// Raw code block (for patterns that don't fit the AST)
    Raw(String),
}

/// Function definition, always emitted as `const name = (...) => { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct TsFunction {
    pub name: String,
    /// JSDoc lines, without the comment markers
    pub doc: Vec<String>,
    pub params: Vec<TsParam>,
    pub return_type: Option<TsType>,
    pub body: Vec<TsStmt>,
    pub is_async: bool,
    pub is_export: bool,
}

/// Default import: `import axios from 'axios';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsImport {
    pub name: String,
    pub from: String,
}

/// Trailing `export type { ... };` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeExport {
    pub names: Vec<String>,
}

/// Complete TypeScript module, in emission order
#[derive(Debug, Clone)]
pub struct TsModule {
    /// Header comment lines
    pub header: Vec<String>,
    pub imports: Vec<TsImport>,
    /// Component schema block (verbatim text or rendered declarations)
    pub components: String,
    /// Declarations every client needs (`BaseResponse<T>`)
    pub base_types: Vec<TsTypeDef>,
    /// Per-operation declarations
    pub types: Vec<TsTypeDef>,
    /// Helpers followed by one callable per operation
    pub functions: Vec<TsFunction>,
    pub exports: TsTypeExport,
}
