//! # shaclgen core
//!
//! RDF term model shared by the shape compiler crates: IRIs, blank nodes,
//! literals, triples, an indexed in-memory store, vocabulary constants and
//! prefix maps for CURIE shrinking.

pub mod model;
pub mod prefix;
pub mod store;
pub mod vocab;

pub use model::*;
pub use prefix::{Curie, PrefixMap};
pub use store::GraphStore;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid CURIE: {0}")]
    InvalidCurie(String),

    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),
}
