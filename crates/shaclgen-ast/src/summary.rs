//! Cycle-free JSON view of an [`Ast`]
//!
//! Object types are referenced by name, so the output can be serialized,
//! diffed and consumed by backends that do not want to walk the arena.

use serde_json::{json, Map, Value};

use crate::object::{ObjectCompositeType, ObjectType, Property};
use crate::types::{IdentifierType, LiteralType, Type};
use crate::Ast;

impl Ast {
    pub fn summary(&self) -> Value {
        json!({
            "objectTypes": self.object_types().iter().map(|o| self.object_type_summary(o)).collect::<Vec<_>>(),
            "objectIntersectionTypes": self
                .object_intersection_types()
                .iter()
                .map(|c| self.composite_summary(c))
                .collect::<Vec<_>>(),
            "objectUnionTypes": self
                .object_union_types()
                .iter()
                .map(|c| self.composite_summary(c))
                .collect::<Vec<_>>(),
        })
    }

    pub fn type_summary(&self, type_: &Type) -> Value {
        match type_ {
            Type::Literal(literal) => literal_summary(literal),
            Type::Identifier(identifier) => identifier_summary(identifier),
            Type::Intersection(composite) | Type::Union(composite) => json!({
                "kind": type_.kind_name(),
                "memberTypes": composite.member_types().iter().map(|m| self.type_summary(m)).collect::<Vec<_>>(),
            }),
            Type::Set(set) => json!({
                "kind": type_.kind_name(),
                "itemType": self.type_summary(&set.item_type),
                "minCount": set.min_count,
            }),
            Type::Option(option) => json!({
                "kind": type_.kind_name(),
                "itemType": self.type_summary(&option.item_type),
            }),
            Type::Object(reference) => json!({
                "kind": type_.kind_name(),
                "name": self.object_type(reference.id).name.sanitized_name,
                "inline": reference.inline,
            }),
            Type::ObjectIntersection(id) => json!({
                "kind": type_.kind_name(),
                "name": self.object_intersection_type(*id).name.sanitized_name,
            }),
            Type::ObjectUnion(id) => json!({
                "kind": type_.kind_name(),
                "name": self.object_union_type(*id).name.sanitized_name,
            }),
        }
    }

    fn object_type_summary(&self, object_type: &ObjectType) -> Value {
        let names = |ids: &[crate::ObjectTypeId]| {
            ids.iter()
                .map(|id| Value::String(self.object_type(*id).name.sanitized_name.clone()))
                .collect::<Vec<_>>()
        };

        let mut summary = Map::new();
        summary.insert("name".into(), json!(object_type.name.sanitized_name));
        summary.insert("identifier".into(), json!(object_type.name.identifier.to_string()));
        summary.insert("abstract".into(), json!(object_type.is_abstract));
        summary.insert("export".into(), json!(object_type.export));
        summary.insert("extern".into(), json!(object_type.is_extern));
        summary.insert("nodeKinds".into(), json!(object_type.node_kinds));
        summary.insert("mintingStrategy".into(), json!(object_type.minting_strategy));
        summary.insert(
            "rdfType".into(),
            json!(object_type.rdf_type.as_ref().map(|iri| iri.as_str())),
        );
        summary.insert("identifierPropertyName".into(), json!(object_type.identifier_property_name));
        summary.insert(
            "typeDiscriminatorPropertyName".into(),
            json!(object_type.type_discriminator_property_name),
        );
        summary.insert(
            "properties".into(),
            Value::Array(object_type.properties.iter().map(|p| self.property_summary(p)).collect()),
        );
        summary.insert("parentObjectTypes".into(), Value::Array(names(&object_type.parent_object_types)));
        summary.insert("ancestorObjectTypes".into(), Value::Array(names(&object_type.ancestor_object_types)));
        summary.insert("childObjectTypes".into(), Value::Array(names(&object_type.child_object_types)));
        summary.insert(
            "descendantObjectTypes".into(),
            Value::Array(names(&object_type.descendant_object_types)),
        );
        if let Some(item_type) = &object_type.list_item_type {
            summary.insert("listItemType".into(), self.type_summary(item_type));
        }
        Value::Object(summary)
    }

    fn property_summary(&self, property: &Property) -> Value {
        json!({
            "name": property.name.sanitized_name,
            "path": property.path.as_str(),
            "type": self.type_summary(&property.type_),
            "visibility": property.visibility,
        })
    }

    fn composite_summary(&self, composite: &ObjectCompositeType) -> Value {
        json!({
            "name": composite.name.sanitized_name,
            "export": composite.export,
            "declarationPreference": composite.declaration_preference,
            "memberTypes": composite
                .member_types()
                .iter()
                .map(|id| self.object_type(*id).name.sanitized_name.clone())
                .collect::<Vec<_>>(),
        })
    }
}

fn literal_summary(literal: &LiteralType) -> Value {
    let mut summary = Map::new();
    summary.insert("kind".into(), json!("LiteralType"));
    if let Some(datatype) = &literal.datatype {
        summary.insert("datatype".into(), json!(datatype.as_str()));
    }
    if let Some(default_value) = &literal.default_value {
        summary.insert("defaultValue".into(), json!(default_value.to_string()));
    }
    if !literal.has_values.is_empty() {
        summary.insert(
            "hasValues".into(),
            json!(literal.has_values.iter().map(|v| v.to_string()).collect::<Vec<_>>()),
        );
    }
    if !literal.in_.is_empty() {
        summary.insert("in".into(), json!(literal.in_.iter().map(|v| v.to_string()).collect::<Vec<_>>()));
    }
    if !literal.languages_in.is_empty() {
        summary.insert("languageIn".into(), json!(literal.languages_in));
    }
    for (key, bound) in [
        ("minInclusive", &literal.min_inclusive),
        ("minExclusive", &literal.min_exclusive),
        ("maxInclusive", &literal.max_inclusive),
        ("maxExclusive", &literal.max_exclusive),
    ] {
        if let Some(bound) = bound {
            summary.insert(key.into(), json!(bound.lexical));
        }
    }
    Value::Object(summary)
}

fn identifier_summary(identifier: &IdentifierType) -> Value {
    let mut summary = Map::new();
    summary.insert("kind".into(), json!("IdentifierType"));
    summary.insert("nodeKinds".into(), json!(identifier.node_kinds));
    if let Some(default_value) = &identifier.default_value {
        summary.insert("defaultValue".into(), json!(default_value.to_string()));
    }
    if !identifier.has_values.is_empty() {
        summary.insert(
            "hasValues".into(),
            json!(identifier.has_values.iter().map(|v| v.to_string()).collect::<Vec<_>>()),
        );
    }
    if !identifier.in_.is_empty() {
        summary.insert("in".into(), json!(identifier.in_.iter().map(|v| v.to_string()).collect::<Vec<_>>()));
    }
    Value::Object(summary)
}
