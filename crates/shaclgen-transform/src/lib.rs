//! # shaclgen transform
//!
//! Resolves a [`ShapesGraph`] into a language-neutral [`Ast`]:
//! - node shapes become object types, or object intersections/unions for
//!   node-level `sh:and`/`sh:or`
//! - property shapes become properties typed by composition, scalar rules
//!   and cardinality
//! - class hierarchy links and RDF list item types are attached to object types
//!
//! [`sort_object_types`] orders the result so parents precede children.

pub mod config;
pub mod error;
mod hierarchy;
pub mod list;
pub mod name;
pub mod order;
pub mod scalar;
pub mod transformer;

pub use config::TransformConfig;
pub use error::{OrderError, TransformError};
pub use list::list_item_type;
pub use name::NameResolver;
pub use order::sort_object_types;
pub use scalar::{resolve_scalar_type, wrap_cardinality, ScalarInput, ScalarRule, SCALAR_RULES};
pub use transformer::{NodeShapeType, ShapesGraphToAstTransformer};

use shaclgen_ast::Ast;
use shaclgen_shacl::ShapesGraph;

/// Transform a shapes graph with a fresh resolver
pub fn transform(graph: &ShapesGraph, config: TransformConfig) -> Result<Ast, TransformError> {
    ShapesGraphToAstTransformer::new(graph, config).transform()
}
