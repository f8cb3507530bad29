//! The `Type` tagged union

use serde::{Deserialize, Serialize};
use shaclgen_core::{Iri, Literal, Term};
use shaclgen_shacl::NodeKind;
use std::collections::BTreeSet;

use crate::AstError;

/// Index of an [`crate::ObjectType`] in its [`crate::Ast`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ObjectTypeId(pub usize);

/// Index of an object intersection or object union type in its [`crate::Ast`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ObjectCompositeTypeId(pub usize);

/// A literal value type with its restrictions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralType {
    pub datatype: Option<Iri>,
    pub default_value: Option<Literal>,
    pub has_values: Vec<Literal>,
    pub in_: Vec<Literal>,
    pub languages_in: Vec<String>,
    pub min_inclusive: Option<Literal>,
    pub min_exclusive: Option<Literal>,
    pub max_inclusive: Option<Literal>,
    pub max_exclusive: Option<Literal>,
}

impl LiteralType {
    /// Any literal
    pub fn generic() -> Self {
        Self::default()
    }

    /// No datatype and no range restriction
    pub fn is_generic(&self) -> bool {
        self.datatype.is_none()
            && self.min_inclusive.is_none()
            && self.min_exclusive.is_none()
            && self.max_inclusive.is_none()
            && self.max_exclusive.is_none()
    }
}

/// An IRI and/or blank node value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierType {
    pub node_kinds: BTreeSet<NodeKind>,
    pub default_value: Option<Term>,
    pub has_values: Vec<Term>,
    pub in_: Vec<Term>,
}

impl IdentifierType {
    pub fn new(node_kinds: BTreeSet<NodeKind>) -> Self {
        Self {
            node_kinds,
            default_value: None,
            has_values: Vec::new(),
            in_: Vec::new(),
        }
    }
}

impl Default for IdentifierType {
    fn default() -> Self {
        Self::new(NodeKind::identifier_kinds())
    }
}

/// Members of an intersection or union; always two or more
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeType {
    member_types: Vec<Type>,
}

impl CompositeType {
    pub fn new(member_types: Vec<Type>) -> Result<Self, AstError> {
        if member_types.len() < 2 {
            return Err(AstError::TooFewMembers {
                kind: "composite",
                count: member_types.len(),
            });
        }
        Ok(Self { member_types })
    }

    pub fn member_types(&self) -> &[Type] {
        &self.member_types
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetType {
    pub item_type: Box<Type>,
    pub min_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionType {
    pub item_type: Box<Type>,
}

/// Reference to an object type from a property or composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectReference {
    pub id: ObjectTypeId,
    /// Values are embedded rather than referenced by identifier
    pub inline: bool,
}

/// Resolved type of a property or composite member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Literal(LiteralType),
    Identifier(IdentifierType),
    Intersection(CompositeType),
    Union(CompositeType),
    Set(SetType),
    Option(OptionType),
    Object(ObjectReference),
    ObjectIntersection(ObjectCompositeTypeId),
    ObjectUnion(ObjectCompositeTypeId),
}

impl Type {
    pub fn set(item_type: Type, min_count: u64) -> Self {
        Type::Set(SetType {
            item_type: Box::new(item_type),
            min_count,
        })
    }

    pub fn option(item_type: Type) -> Self {
        Type::Option(OptionType {
            item_type: Box::new(item_type),
        })
    }

    pub fn object(id: ObjectTypeId) -> Self {
        Type::Object(ObjectReference { id, inline: false })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Literal(_) => "LiteralType",
            Type::Identifier(_) => "IdentifierType",
            Type::Intersection(_) => "IntersectionType",
            Type::Union(_) => "UnionType",
            Type::Set(_) => "SetType",
            Type::Option(_) => "OptionType",
            Type::Object(_) => "ObjectType",
            Type::ObjectIntersection(_) => "ObjectIntersectionType",
            Type::ObjectUnion(_) => "ObjectUnionType",
        }
    }

    /// The item type under any Set/Option wrapping
    pub fn without_cardinality(&self) -> &Type {
        match self {
            Type::Set(set) => set.item_type.without_cardinality(),
            Type::Option(option) => option.item_type.without_cardinality(),
            other => other,
        }
    }

    pub fn as_object(&self) -> Option<ObjectTypeId> {
        match self {
            Type::Object(reference) => Some(reference.id),
            _ => None,
        }
    }

    /// Object types this type refers to, directly or through composites
    pub fn referenced_object_types(&self) -> Vec<ObjectTypeId> {
        let mut ids = Vec::new();
        self.collect_object_types(&mut ids);
        ids
    }

    fn collect_object_types(&self, ids: &mut Vec<ObjectTypeId>) {
        match self {
            Type::Object(reference) => {
                if !ids.contains(&reference.id) {
                    ids.push(reference.id);
                }
            }
            Type::Intersection(composite) | Type::Union(composite) => {
                for member in composite.member_types() {
                    member.collect_object_types(ids);
                }
            }
            Type::Set(set) => set.item_type.collect_object_types(ids),
            Type::Option(option) => option.item_type.collect_object_types(ids),
            Type::Literal(_) | Type::Identifier(_) | Type::ObjectIntersection(_) | Type::ObjectUnion(_) => {}
        }
    }
}
