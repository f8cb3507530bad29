//! Object types, their properties and object composites

use shaclgen_core::Iri;
use shaclgen_shacl::{DeclarationPreference, MintingStrategy, NodeKind, Visibility};
use std::collections::BTreeSet;

use crate::name::Name;
use crate::types::{ObjectTypeId, Type};
use crate::AstError;

/// Property of an object type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: Name,
    /// Predicate IRI of the property shape's path
    pub path: Iri,
    pub type_: Type,
    pub visibility: Visibility,
}

/// Object type resolved from a node shape
///
/// The relation lists and `list_item_type` are filled in after the object
/// type has been registered, so they may point back at the object type
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: Name,
    pub comment: Option<String>,
    pub is_abstract: bool,
    pub export: bool,
    pub is_extern: bool,
    pub node_kinds: BTreeSet<NodeKind>,
    pub minting_strategy: Option<MintingStrategy>,
    pub rdf_type: Option<Iri>,
    pub identifier_property_name: String,
    pub type_discriminator_property_name: String,
    pub properties: Vec<Property>,
    pub parent_object_types: Vec<ObjectTypeId>,
    pub ancestor_object_types: Vec<ObjectTypeId>,
    pub child_object_types: Vec<ObjectTypeId>,
    pub descendant_object_types: Vec<ObjectTypeId>,
    pub list_item_type: Option<Type>,
}

impl ObjectType {
    /// Object type with no properties and no relations yet
    pub fn new(name: Name, identifier_property_name: String, type_discriminator_property_name: String) -> Self {
        Self {
            name,
            comment: None,
            is_abstract: false,
            export: true,
            is_extern: false,
            node_kinds: NodeKind::identifier_kinds(),
            minting_strategy: None,
            rdf_type: None,
            identifier_property_name,
            type_discriminator_property_name,
            properties: Vec::new(),
            parent_object_types: Vec::new(),
            ancestor_object_types: Vec::new(),
            child_object_types: Vec::new(),
            descendant_object_types: Vec::new(),
            list_item_type: None,
        }
    }

    /// Properties declared on this object type, excluding inherited ones
    pub fn own_properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, path: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.path.as_str() == path)
    }

    pub fn is_list(&self) -> bool {
        self.list_item_type.is_some()
    }
}

/// Intersection or union of object types resolved from a node-level `sh:and`/`sh:or`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectCompositeType {
    pub name: Name,
    pub export: bool,
    pub declaration_preference: DeclarationPreference,
    member_types: Vec<ObjectTypeId>,
}

impl ObjectCompositeType {
    /// Placeholder without members
    pub fn new(name: Name, export: bool, declaration_preference: DeclarationPreference) -> Self {
        Self {
            name,
            export,
            declaration_preference,
            member_types: Vec::new(),
        }
    }

    /// Set the members once; two or more are required
    pub fn set_member_types(&mut self, member_types: Vec<ObjectTypeId>) -> Result<(), AstError> {
        if member_types.len() < 2 {
            return Err(AstError::TooFewMembers {
                kind: "object composite",
                count: member_types.len(),
            });
        }
        self.member_types = member_types;
        Ok(())
    }

    pub fn member_types(&self) -> &[ObjectTypeId] {
        &self.member_types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shaclgen_core::Term;

    #[test]
    fn test_object_composite_member_invariant() {
        let mut composite = ObjectCompositeType::new(
            Name::bare(Term::iri("http://example.org/U"), "U"),
            true,
            DeclarationPreference::default(),
        );
        assert!(composite.set_member_types(vec![ObjectTypeId(0)]).is_err());
        assert!(composite.member_types().is_empty());
        composite.set_member_types(vec![ObjectTypeId(0), ObjectTypeId(1)]).unwrap();
        assert_eq!(composite.member_types(), &[ObjectTypeId(0), ObjectTypeId(1)]);
    }

    #[test]
    fn test_object_type_defaults() {
        let object_type = ObjectType::new(
            Name::bare(Term::iri("http://example.org/T"), "T"),
            "identifier".to_string(),
            "type".to_string(),
        );
        assert!(object_type.export);
        assert!(!object_type.is_abstract);
        assert_eq!(object_type.node_kinds, NodeKind::identifier_kinds());
        assert!(!object_type.is_list());
        assert!(object_type.property("http://example.org/p").is_none());
    }
}
