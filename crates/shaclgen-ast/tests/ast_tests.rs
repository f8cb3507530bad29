use proptest::prelude::*;
use serde_json::json;
use shaclgen_ast::*;
use shaclgen_core::{Iri, Literal, Term};
use shaclgen_shacl::{DeclarationPreference, NodeKind, Visibility};
use std::collections::BTreeSet;

fn object_type(local: &str) -> ObjectType {
    ObjectType::new(
        Name::bare(Term::iri(format!("http://example.org/{}", local)), local),
        "identifier".to_string(),
        "type".to_string(),
    )
}

fn property(local: &str, type_: Type) -> Property {
    Property {
        name: Name::bare(Term::blank(format!("{}Shape", local)), local),
        path: Iri::new(format!("http://example.org/{}", local)),
        type_,
        visibility: Visibility::Public,
    }
}

#[test]
fn test_mutually_recursive_object_types() {
    let mut ast = Ast::new();
    let person = ast.add_object_type(object_type("Person"));
    let company = ast.add_object_type(object_type("Company"));

    ast.object_type_mut(person)
        .properties
        .push(property("employer", Type::option(Type::object(company))));
    ast.object_type_mut(company)
        .properties
        .push(property("employees", Type::set(Type::object(person), 0)));

    let employer = ast.object_type(person).property("http://example.org/employer").unwrap();
    let company_id = employer.type_.without_cardinality().as_object().unwrap();
    let employees = ast.object_type(company_id).own_properties()[0].type_.without_cardinality();
    assert_eq!(employees.as_object(), Some(person));

    let summary = ast.summary();
    assert_eq!(summary["objectTypes"][1]["properties"][0]["type"]["itemType"]["name"], "Person");
    assert_eq!(summary["objectTypes"][1]["properties"][0]["type"]["minCount"], 0);
}

#[test]
fn test_object_union_summary() {
    let mut ast = Ast::new();
    let cat = ast.add_object_type(object_type("Cat"));
    let dog = ast.add_object_type(object_type("Dog"));

    let mut pet = ObjectCompositeType::new(
        Name::bare(Term::iri("http://example.org/Pet"), "Pet"),
        true,
        DeclarationPreference::Interface,
    );
    pet.set_member_types(vec![cat, dog]).unwrap();
    let pet = ast.add_object_union_type(pet);

    let mut owner = object_type("Owner");
    owner.properties.push(property("pet", Type::ObjectUnion(pet)));
    ast.add_object_type(owner);

    let summary = ast.summary();
    assert_eq!(
        summary["objectUnionTypes"][0],
        json!({
            "name": "Pet",
            "export": true,
            "declarationPreference": "Interface",
            "memberTypes": ["Cat", "Dog"],
        })
    );
    assert_eq!(summary["objectIntersectionTypes"], json!([]));
    assert_eq!(
        summary["objectTypes"][2]["properties"][0]["type"],
        json!({"kind": "ObjectUnionType", "name": "Pet"})
    );
}

#[test]
fn test_literal_restrictions_in_summary() {
    let ast = Ast::new();
    let literal = Type::Literal(LiteralType {
        datatype: Some(Iri::new("http://www.w3.org/2001/XMLSchema#integer")),
        min_inclusive: Some(Literal::integer(0)),
        in_: vec![Literal::integer(1), Literal::integer(2)],
        ..LiteralType::default()
    });

    let summary = ast.type_summary(&literal);
    assert_eq!(summary["kind"], "LiteralType");
    assert_eq!(summary["datatype"], "http://www.w3.org/2001/XMLSchema#integer");
    assert_eq!(summary["minInclusive"], "0");
    assert_eq!(summary["in"].as_array().map(|a| a.len()), Some(2));
    assert!(summary.get("maxInclusive").is_none());
}

#[test]
fn test_identifier_summary_node_kinds() {
    let ast = Ast::new();
    let identifier = Type::Identifier(IdentifierType::new(BTreeSet::from([NodeKind::Iri])));
    assert_eq!(
        ast.type_summary(&identifier),
        json!({"kind": "IdentifierType", "nodeKinds": ["Iri"]})
    );
}

proptest! {
    #[test]
    fn composite_construction_matches_member_count(count in 0usize..6) {
        let members = (0..count).map(|i| Type::object(ObjectTypeId(i))).collect::<Vec<_>>();
        let result = CompositeType::new(members);
        prop_assert_eq!(result.is_ok(), count >= 2);
        if let Ok(composite) = result {
            prop_assert_eq!(composite.member_types().len(), count);
        }
    }
}
