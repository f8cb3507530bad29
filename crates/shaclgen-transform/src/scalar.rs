//! Scalar type rules and cardinality wrapping
//!
//! Property shapes without `sh:and`/`sh:class`/`sh:node`/`sh:or` are typed by
//! the first rule in [`SCALAR_RULES`] that applies.

use shaclgen_ast::{IdentifierType, LiteralType, Type};
use shaclgen_core::{Literal, Term};
use shaclgen_shacl::{Constraints, NodeKind};
use std::collections::BTreeSet;

/// What a scalar rule sees of a shape
#[derive(Debug, Clone, Copy)]
pub struct ScalarInput<'a> {
    pub constraints: &'a Constraints,
    /// The shape's own `sh:defaultValue`, or one inherited from an enclosing composite
    pub default_value: Option<&'a Term>,
}

impl<'a> ScalarInput<'a> {
    /// Fixed, enumerated and default values
    fn values(&self) -> impl Iterator<Item = &'a Term> {
        self.constraints
            .has_values
            .iter()
            .chain(self.constraints.in_.iter())
            .chain(self.default_value)
    }

    fn has_values(&self) -> bool {
        self.values().next().is_some()
    }
}

pub struct ScalarRule {
    pub name: &'static str,
    pub applies: fn(&ScalarInput<'_>) -> bool,
    pub build: fn(&ScalarInput<'_>) -> Type,
}

/// Rules in priority order
pub static SCALAR_RULES: [ScalarRule; 2] = [
    ScalarRule {
        name: "literal",
        applies: literal_applies,
        build: build_literal,
    },
    ScalarRule {
        name: "identifier",
        applies: identifier_applies,
        build: build_identifier,
    },
];

/// First applicable scalar rule's type
pub fn resolve_scalar_type(input: &ScalarInput<'_>) -> Option<Type> {
    SCALAR_RULES
        .iter()
        .find(|rule| (rule.applies)(input))
        .map(|rule| (rule.build)(input))
}

fn literal_applies(input: &ScalarInput<'_>) -> bool {
    let constraints = input.constraints;
    constraints.datatype.is_some()
        || constraints.has_range()
        || (input.has_values() && input.values().all(Term::is_literal))
        || (constraints.node_kinds.len() == 1 && constraints.node_kinds.contains(&NodeKind::Literal))
}

fn build_literal(input: &ScalarInput<'_>) -> Type {
    let constraints = input.constraints;
    let literals = |terms: &[Term]| terms.iter().filter_map(Term::as_literal).cloned().collect::<Vec<Literal>>();
    Type::Literal(LiteralType {
        datatype: constraints.datatype.clone(),
        default_value: input.default_value.and_then(Term::as_literal).cloned(),
        has_values: literals(&constraints.has_values),
        in_: literals(&constraints.in_),
        languages_in: constraints.languages_in.clone(),
        min_inclusive: constraints.min_inclusive.clone(),
        min_exclusive: constraints.min_exclusive.clone(),
        max_inclusive: constraints.max_inclusive.clone(),
        max_exclusive: constraints.max_exclusive.clone(),
    })
}

fn identifier_applies(input: &ScalarInput<'_>) -> bool {
    let node_kinds = &input.constraints.node_kinds;
    (input.has_values() && input.values().all(Term::is_identifier))
        || (!node_kinds.is_empty() && node_kinds.len() <= 2 && !node_kinds.contains(&NodeKind::Literal))
}

fn build_identifier(input: &ScalarInput<'_>) -> Type {
    let constraints = input.constraints;
    let identifiers = |terms: &[Term]| terms.iter().filter(|t| t.is_identifier()).cloned().collect::<Vec<_>>();

    let node_kinds = if constraints.node_kinds.is_empty() {
        let inferred: BTreeSet<NodeKind> = input
            .values()
            .filter_map(|term| match term {
                Term::Iri(_) => Some(NodeKind::Iri),
                Term::BlankNode(_) => Some(NodeKind::BlankNode),
                Term::Literal(_) => None,
            })
            .collect();
        if inferred.is_empty() {
            NodeKind::identifier_kinds()
        } else {
            inferred
        }
    } else {
        constraints.node_kinds.clone()
    };

    Type::Identifier(IdentifierType {
        node_kinds,
        default_value: input.default_value.filter(|t| t.is_identifier()).cloned(),
        has_values: identifiers(&constraints.has_values),
        in_: identifiers(&constraints.in_),
    })
}

/// Wrap an item type according to its declared cardinality
///
/// A default value forces a required single value. Without bounds, a
/// top-level property is a set and a composite member is left to its
/// enclosing composite. A missing minimum counts as zero.
pub fn wrap_cardinality(
    item_type: Type,
    min_count: Option<u64>,
    max_count: Option<u64>,
    has_default_value: bool,
    nested: bool,
) -> Type {
    if has_default_value {
        return item_type;
    }
    match (min_count, max_count) {
        (None, None) if nested => item_type,
        (None, None) => Type::set(item_type, 0),
        (None | Some(0), Some(1)) => Type::option(item_type),
        (Some(1), Some(1)) => item_type,
        (min_count, _) => Type::set(item_type, min_count.unwrap_or(0)),
    }
}
