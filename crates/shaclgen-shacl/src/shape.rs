//! Typed view over node and property shapes

use serde::{Deserialize, Serialize};
use shaclgen_core::{Iri, Literal, Term};
use std::collections::BTreeSet;

/// Node Kind
///
/// The compound SHACL node kinds (`sh:BlankNodeOrIRI`, ...) are expanded
/// into sets of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum NodeKind {
    BlankNode,
    Iri,
    Literal,
}

impl NodeKind {
    /// Identifier kinds (blank node and IRI)
    pub fn identifier_kinds() -> BTreeSet<NodeKind> {
        BTreeSet::from([NodeKind::BlankNode, NodeKind::Iri])
    }
}

/// Property Path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyPath {
    Predicate(Iri),
    Inverse(Box<PropertyPath>),
    Sequence(Vec<PropertyPath>),
    Alternative(Vec<PropertyPath>),
    ZeroOrMore(Box<PropertyPath>),
    OneOrMore(Box<PropertyPath>),
    ZeroOrOne(Box<PropertyPath>),
}

impl PropertyPath {
    pub fn as_predicate(&self) -> Option<&Iri> {
        match self {
            PropertyPath::Predicate(iri) => Some(iri),
            _ => None,
        }
    }

    /// Short name of the path kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyPath::Predicate(_) => "predicate",
            PropertyPath::Inverse(_) => "inverse",
            PropertyPath::Sequence(_) => "sequence",
            PropertyPath::Alternative(_) => "alternative",
            PropertyPath::ZeroOrMore(_) => "zero-or-more",
            PropertyPath::OneOrMore(_) => "one-or-more",
            PropertyPath::ZeroOrOne(_) => "zero-or-one",
        }
    }
}

/// Strategy for minting identifiers of instances that lack one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MintingStrategy {
    Sha256,
    Uuidv4,
}

/// Visibility of a generated property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    Private,
    Protected,
    #[default]
    Public,
}

/// Whether backends should emit a composite as a class-like or an interface-like declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeclarationPreference {
    #[default]
    Class,
    Interface,
}

/// SHACL constraints declared on a shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    /// `sh:and` members
    pub and: Vec<Term>,
    /// `sh:or` members (`sh:xone` is folded in)
    pub or: Vec<Term>,
    /// `sh:class` values
    pub classes: Vec<Iri>,
    /// `sh:node` values
    pub nodes: Vec<Term>,
    pub datatype: Option<Iri>,
    pub has_values: Vec<Term>,
    pub in_: Vec<Term>,
    pub default_value: Option<Term>,
    pub languages_in: Vec<String>,
    pub min_count: Option<u64>,
    pub max_count: Option<u64>,
    pub min_inclusive: Option<Literal>,
    pub min_exclusive: Option<Literal>,
    pub max_inclusive: Option<Literal>,
    pub max_exclusive: Option<Literal>,
    pub node_kinds: BTreeSet<NodeKind>,
    /// `sh:property` values (node shapes only)
    pub properties: Vec<Term>,
}

impl Constraints {
    pub fn has_range(&self) -> bool {
        self.min_inclusive.is_some()
            || self.min_exclusive.is_some()
            || self.max_inclusive.is_some()
            || self.max_exclusive.is_some()
    }
}

/// Generator annotations on a shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    /// Explicit name override
    pub name: Option<String>,
    /// Human-readable label (`sh:name`, then `rdfs:label`)
    pub label: Option<String>,
    pub comment: Option<String>,
    pub is_abstract: Option<bool>,
    pub export: Option<bool>,
    pub is_extern: Option<bool>,
    pub inline: Option<bool>,
    pub minting_strategy: Option<MintingStrategy>,
    /// Preferred identifier node kinds
    pub identifier_node_kinds: BTreeSet<NodeKind>,
    pub identifier_property_name: Option<String>,
    pub type_discriminator_property_name: Option<String>,
    pub visibility: Option<Visibility>,
    pub declaration_preference: Option<DeclarationPreference>,
    pub rdf_type: Option<Iri>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Node,
    Property(PropertyPath),
}

/// Shape (Node Shape or Property Shape)
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub identifier: Term,
    pub kind: ShapeKind,
    pub constraints: Constraints,
    pub annotations: Annotations,
    /// `sh:targetClass` values
    pub target_classes: Vec<Iri>,
    /// The shape is itself a class (`rdf:type rdfs:Class` or `owl:Class`)
    pub is_class: bool,
}

impl Shape {
    pub fn is_node_shape(&self) -> bool {
        matches!(self.kind, ShapeKind::Node)
    }

    pub fn is_property_shape(&self) -> bool {
        matches!(self.kind, ShapeKind::Property(_))
    }

    pub fn path(&self) -> Option<&PropertyPath> {
        match &self.kind {
            ShapeKind::Property(path) => Some(path),
            ShapeKind::Node => None,
        }
    }
}
