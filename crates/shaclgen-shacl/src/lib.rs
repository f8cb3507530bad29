//! SHACL shapes graph provider
//!
//! This crate turns already-parsed triples into typed shapes:
//! - ShapesGraph loading (Loader)
//! - constraint and generator annotation accessors (Shape)
//! - `rdfs:subClassOf` hierarchy queries (ClassHierarchy)

pub mod graph;
pub mod hierarchy;
pub mod loader;
pub mod shape;

// Re-exports
pub use graph::ShapesGraph;
pub use hierarchy::ClassHierarchy;
pub use loader::{DefaultShaclLoader, ShaclLoader};
pub use shape::{
    Annotations, Constraints, DeclarationPreference, MintingStrategy, NodeKind, PropertyPath, Shape, ShapeKind, Visibility,
};

use shaclgen_core::{Term, Triple};
use shaclgen_core::PrefixMap;

// Error types
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShaclError {
    #[error("Malformed RDF list starting at {0}")]
    MalformedList(Term),

    #[error("Malformed property path {0}")]
    MalformedPath(Term),

    #[error("Invalid value {value} for <{predicate}> on shape {shape}")]
    InvalidConstraint {
        shape: Term,
        predicate: String,
        value: Term,
    },

    #[error("Unknown shape: {0}")]
    UnknownShape(Term),
}

impl ShapesGraph {
    /// Load a shapes graph with the default loader
    pub fn from_triples(triples: Vec<Triple>, prefixes: PrefixMap) -> Result<ShapesGraph, ShaclError> {
        DefaultShaclLoader.load_triples(triples, prefixes)
    }
}
