//! # shaclgen AST
//!
//! Language-neutral type model produced from a shapes graph. Object types
//! live in an arena inside [`Ast`] and refer to each other by
//! [`ObjectTypeId`], which lets self-referential and mutually recursive
//! shapes share one object type instead of copies of it.

pub mod name;
pub mod object;
pub mod summary;
pub mod types;

pub use name::{Name, PropertyPathName};
pub use object::{ObjectCompositeType, ObjectType, Property};
pub use types::{
    CompositeType, IdentifierType, LiteralType, ObjectCompositeTypeId, ObjectReference, ObjectTypeId, OptionType,
    SetType, Type,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    #[error("A {kind} type needs at least two members, got {count}")]
    TooFewMembers { kind: &'static str, count: usize },
}

/// Arena lengths recorded by [`Ast::checkpoint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstCheckpoint {
    pub object_types: usize,
    pub object_intersection_types: usize,
    pub object_union_types: usize,
}

impl AstCheckpoint {
    /// Whether `id` was registered before the checkpoint
    pub fn holds_object_type(&self, id: ObjectTypeId) -> bool {
        id.0 < self.object_types
    }

    pub fn holds_object_intersection_type(&self, id: ObjectCompositeTypeId) -> bool {
        id.0 < self.object_intersection_types
    }

    pub fn holds_object_union_type(&self, id: ObjectCompositeTypeId) -> bool {
        id.0 < self.object_union_types
    }
}

/// The resolved type tree handed to code generation backends
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    object_types: Vec<ObjectType>,
    object_intersection_types: Vec<ObjectCompositeType>,
    object_union_types: Vec<ObjectCompositeType>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object type and return its id
    pub fn add_object_type(&mut self, object_type: ObjectType) -> ObjectTypeId {
        self.object_types.push(object_type);
        ObjectTypeId(self.object_types.len() - 1)
    }

    pub fn add_object_intersection_type(&mut self, composite: ObjectCompositeType) -> ObjectCompositeTypeId {
        self.object_intersection_types.push(composite);
        ObjectCompositeTypeId(self.object_intersection_types.len() - 1)
    }

    pub fn add_object_union_type(&mut self, composite: ObjectCompositeType) -> ObjectCompositeTypeId {
        self.object_union_types.push(composite);
        ObjectCompositeTypeId(self.object_union_types.len() - 1)
    }

    pub fn object_types(&self) -> &[ObjectType] {
        &self.object_types
    }

    pub fn object_intersection_types(&self) -> &[ObjectCompositeType] {
        &self.object_intersection_types
    }

    pub fn object_union_types(&self) -> &[ObjectCompositeType] {
        &self.object_union_types
    }

    /// Ids of all object types, in registration order
    pub fn object_type_ids(&self) -> impl Iterator<Item = ObjectTypeId> {
        (0..self.object_types.len()).map(ObjectTypeId)
    }

    pub fn object_type(&self, id: ObjectTypeId) -> &ObjectType {
        &self.object_types[id.0]
    }

    pub fn object_type_mut(&mut self, id: ObjectTypeId) -> &mut ObjectType {
        &mut self.object_types[id.0]
    }

    pub fn object_intersection_type(&self, id: ObjectCompositeTypeId) -> &ObjectCompositeType {
        &self.object_intersection_types[id.0]
    }

    pub fn object_intersection_type_mut(&mut self, id: ObjectCompositeTypeId) -> &mut ObjectCompositeType {
        &mut self.object_intersection_types[id.0]
    }

    pub fn object_union_type(&self, id: ObjectCompositeTypeId) -> &ObjectCompositeType {
        &self.object_union_types[id.0]
    }

    pub fn object_union_type_mut(&mut self, id: ObjectCompositeTypeId) -> &mut ObjectCompositeType {
        &mut self.object_union_types[id.0]
    }

    pub fn checkpoint(&self) -> AstCheckpoint {
        AstCheckpoint {
            object_types: self.object_types.len(),
            object_intersection_types: self.object_intersection_types.len(),
            object_union_types: self.object_union_types.len(),
        }
    }

    /// Drop every type registered after `checkpoint`
    ///
    /// Types registered earlier must not refer to the dropped ones.
    pub fn rollback(&mut self, checkpoint: AstCheckpoint) {
        self.object_types.truncate(checkpoint.object_types);
        self.object_intersection_types
            .truncate(checkpoint.object_intersection_types);
        self.object_union_types.truncate(checkpoint.object_union_types);
    }

    /// Check that every object composite ended up with two or more members
    ///
    /// Composites are registered as empty placeholders before their members
    /// resolve; a resolver that does not roll back failures leaves them behind.
    pub fn validate(&self) -> Result<(), AstError> {
        self.object_intersection_types
            .iter()
            .chain(self.object_union_types.iter())
            .find(|composite| composite.member_types().len() < 2)
            .map_or(Ok(()), |composite| {
                Err(AstError::TooFewMembers {
                    kind: "object composite",
                    count: composite.member_types().len(),
                })
            })
    }

    /// Find an object type by its sanitized name
    pub fn object_type_by_name(&self, name: &str) -> Option<(ObjectTypeId, &ObjectType)> {
        self.object_types
            .iter()
            .enumerate()
            .find(|(_, object_type)| object_type.name.sanitized_name == name)
            .map(|(i, object_type)| (ObjectTypeId(i), object_type))
    }
}
