use shaclgen_ast::AstError;
use shaclgen_core::Term;
use shaclgen_shacl::ShaclError;
use thiserror::Error;

/// Shape resolution errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Composition error on shape {shape}: {reason}")]
    Composition { shape: Term, reason: String },

    #[error("Unsupported {kind} path on property shape {shape}; only predicate paths produce properties")]
    UnsupportedPath { shape: Term, kind: &'static str },

    #[error("Property shape {0} has no sh:path")]
    MissingPath(Term),

    #[error("Unable to infer a type for shape {0}")]
    UnableToInferType(Term),

    #[error("Unknown shape: {0}")]
    UnknownShape(Term),

    #[error("None of the classes on shape {shape} resolve to a node shape: {classes:?}")]
    UnresolvedClass { shape: Term, classes: Vec<String> },

    #[error("AST error: {0}")]
    Ast(#[from] AstError),

    #[error("Shapes graph error: {0}")]
    Shacl(#[from] ShaclError),
}

/// Object type ordering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Parent cycle between object types: {}", .0.join(", "))]
    Cycle(Vec<String>),
}
