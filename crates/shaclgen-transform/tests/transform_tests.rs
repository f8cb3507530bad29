// End-to-end shapes graph to AST tests

mod common;

use common::*;
use shaclgen_ast::{Ast, LiteralType, ObjectReference, Type};
use shaclgen_core::vocab::{owl, rdf, sh, shaclgen, xsd};
use shaclgen_core::Iri;
use shaclgen_shacl::{MintingStrategy, NodeKind, Visibility};
use shaclgen_transform::{
    sort_object_types, transform, NodeShapeType, ShapesGraphToAstTransformer, TransformConfig, TransformError,
};
use std::collections::BTreeSet;

fn run(shapes: &Shapes) -> Ast {
    init_tracing();
    transform(&shapes.build(), TransformConfig::default()).expect("transform succeeds")
}

fn property_type<'a>(ast: &'a Ast, object_type: &str, path: &str) -> &'a Type {
    let (_, object_type) = ast
        .object_type_by_name(object_type)
        .unwrap_or_else(|| panic!("no object type {}", object_type));
    &object_type
        .property(path)
        .unwrap_or_else(|| panic!("no property {}", path))
        .type_
}

#[test]
fn test_required_single_literal_property() {
    let mut shapes = Shapes::new();
    let person = shapes.node_shape("Person");
    shapes.property(
        &person,
        &ex_iri("givenName"),
        vec![string_datatype(), min_count(1), max_count(1)],
    );

    let ast = run(&shapes);
    let (_, person) = ast.object_type_by_name("ex_Person").unwrap();
    assert_eq!(person.own_properties().len(), 1);

    let property = &person.own_properties()[0];
    assert_eq!(property.name.sanitized_name, "ex_givenName");
    assert_eq!(property.path, Iri::new(ex_iri("givenName")));
    assert_eq!(property.visibility, Visibility::Public);
    match &property.type_ {
        Type::Literal(literal) => assert_eq!(literal.datatype, Some(Iri::new(xsd::STRING))),
        other => panic!("expected an unwrapped literal, got {:?}", other),
    }
}

#[test]
fn test_cardinality_laws() {
    let mut shapes = Shapes::new();
    let thing = shapes.node_shape("Thing");
    shapes.property(&thing, &ex_iri("many"), vec![string_datatype()]);
    shapes.property(&thing, &ex_iri("optional"), vec![string_datatype(), min_count(0), max_count(1)]);
    shapes.property(&thing, &ex_iri("required"), vec![string_datatype(), min_count(1), max_count(1)]);
    shapes.property(&thing, &ex_iri("atLeastTwo"), vec![string_datatype(), min_count(2)]);
    shapes.property(&thing, &ex_iri("upToThree"), vec![string_datatype(), max_count(3)]);

    let ast = run(&shapes);
    let string = Type::Literal(LiteralType {
        datatype: Some(Iri::new(xsd::STRING)),
        ..LiteralType::default()
    });
    assert_eq!(property_type(&ast, "ex_Thing", &ex_iri("many")), &Type::set(string.clone(), 0));
    assert_eq!(property_type(&ast, "ex_Thing", &ex_iri("optional")), &Type::option(string.clone()));
    assert_eq!(property_type(&ast, "ex_Thing", &ex_iri("required")), &string);
    assert_eq!(property_type(&ast, "ex_Thing", &ex_iri("atLeastTwo")), &Type::set(string.clone(), 2));
    assert_eq!(property_type(&ast, "ex_Thing", &ex_iri("upToThree")), &Type::set(string, 0));
}

#[test]
fn test_default_value_forces_single_value() {
    let mut shapes = Shapes::new();
    let thing = shapes.node_shape("Thing");
    shapes.property(&thing, &ex_iri("status"), vec![(sh::DEFAULT_VALUE, string("active"))]);

    let ast = run(&shapes);
    match property_type(&ast, "ex_Thing", &ex_iri("status")) {
        Type::Literal(literal) => assert_eq!(literal.default_value.as_ref().map(|l| l.lexical.as_str()), Some("active")),
        other => panic!("expected an unwrapped literal, got {:?}", other),
    }
}

#[test]
fn test_or_of_plain_literals_collapses() {
    let mut shapes = Shapes::new();
    let thing = shapes.node_shape("Thing");
    let a = shapes.inline(vec![(sh::NODE_KIND, iri(sh::LITERAL))]);
    let b = shapes.inline(vec![(sh::NODE_KIND, iri(sh::LITERAL))]);
    let members = shapes.list(vec![a, b]);
    shapes.property(&thing, &ex_iri("value"), vec![(sh::OR, members), max_count(1)]);

    let ast = run(&shapes);
    assert_eq!(
        property_type(&ast, "ex_Thing", &ex_iri("value")),
        &Type::option(Type::Literal(LiteralType::generic()))
    );
}

#[test]
fn test_or_of_identifiers_collapses_node_kinds() {
    let mut shapes = Shapes::new();
    let thing = shapes.node_shape("Thing");
    let a = shapes.inline(vec![(sh::NODE_KIND, iri(sh::IRI))]);
    let b = shapes.inline(vec![(sh::NODE_KIND, iri(sh::BLANK_NODE))]);
    let members = shapes.list(vec![a, b]);
    shapes.property(&thing, &ex_iri("ref"), vec![(sh::OR, members), min_count(1), max_count(1)]);

    let ast = run(&shapes);
    match property_type(&ast, "ex_Thing", &ex_iri("ref")) {
        Type::Identifier(identifier) => assert_eq!(identifier.node_kinds, NodeKind::identifier_kinds()),
        other => panic!("expected an identifier, got {:?}", other),
    }
}

#[test]
fn test_or_of_mixed_members_is_union() {
    let mut shapes = Shapes::new();
    let thing = shapes.node_shape("Thing");
    let a = shapes.inline(vec![string_datatype()]);
    let b = shapes.inline(vec![(sh::NODE_KIND, iri(sh::IRI))]);
    let members = shapes.list(vec![a, b]);
    shapes.property(&thing, &ex_iri("value"), vec![(sh::OR, members), min_count(1), max_count(1)]);

    let ast = run(&shapes);
    match property_type(&ast, "ex_Thing", &ex_iri("value")) {
        Type::Union(union) => {
            assert_eq!(union.member_types().len(), 2);
            assert_eq!(union.member_types()[0].kind_name(), "LiteralType");
            assert_eq!(union.member_types()[1].kind_name(), "IdentifierType");
        }
        other => panic!("expected a union, got {:?}", other),
    }
}

#[test]
fn test_self_reference_is_the_same_object_type() {
    let mut shapes = Shapes::new();
    let node = shapes.node_shape("Node");
    shapes.property(&node, &ex_iri("next"), vec![(sh::NODE, node.clone()), max_count(1)]);

    let ast = run(&shapes);
    assert_eq!(ast.object_types().len(), 1);
    let (id, _) = ast.object_type_by_name("ex_Node").unwrap();
    assert_eq!(
        property_type(&ast, "ex_Node", &ex_iri("next")),
        &Type::option(Type::object(id))
    );
}

#[test]
fn test_mutual_recursion() {
    let mut shapes = Shapes::new();
    let person = shapes.node_shape("Person");
    let company = shapes.node_shape("Company");
    shapes.property(&person, &ex_iri("employer"), vec![(sh::CLASS, company.clone()), max_count(1)]);
    shapes.property(&company, &ex_iri("employee"), vec![(sh::CLASS, person.clone())]);

    let ast = run(&shapes);
    assert_eq!(ast.object_types().len(), 2);
    let (person_id, _) = ast.object_type_by_name("ex_Person").unwrap();
    let (company_id, _) = ast.object_type_by_name("ex_Company").unwrap();
    assert_eq!(
        property_type(&ast, "ex_Person", &ex_iri("employer")),
        &Type::option(Type::object(company_id))
    );
    assert_eq!(
        property_type(&ast, "ex_Company", &ex_iri("employee")),
        &Type::set(Type::object(person_id), 0)
    );
}

#[test]
fn test_transform_is_idempotent() {
    let mut shapes = Shapes::new();
    let animal = shapes.node_shape("Animal");
    let dog = shapes.node_shape("Dog");
    shapes.sub_class_of(&dog, &animal);
    shapes.property(&dog, &ex_iri("friend"), vec![(sh::CLASS, dog.clone())]);
    shapes.property(&animal, &ex_iri("name"), vec![string_datatype(), max_count(1)]);

    let graph = shapes.build();
    let first = transform(&graph, TransformConfig::default()).unwrap();
    let second = transform(&graph, TransformConfig::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.summary(), second.summary());
}

#[test]
fn test_rdf_list_item_type() {
    let mut shapes = Shapes::new();
    let list = shapes.node_shape("List");
    shapes.sub_class_of(&list, &iri(rdf::LIST));
    shapes.property(&list, rdf::FIRST, vec![string_datatype(), min_count(1), max_count(1)]);
    let tail = shapes.inline(vec![(sh::NODE, list.clone())]);
    let nil = shapes.inline(vec![(sh::HAS_VALUE, iri(rdf::NIL))]);
    let members = shapes.list(vec![tail, nil]);
    shapes.property(&list, rdf::REST, vec![(sh::OR, members), min_count(1), max_count(1)]);

    let ast = run(&shapes);
    let (id, list) = ast.object_type_by_name("ex_List").unwrap();
    assert_eq!(
        list.list_item_type,
        Some(Type::Literal(LiteralType {
            datatype: Some(Iri::new(xsd::STRING)),
            ..LiteralType::default()
        }))
    );
    match &list.property(rdf::REST).unwrap().type_ {
        Type::Union(union) => assert_eq!(union.member_types()[0], Type::object(id)),
        other => panic!("expected a union, got {:?}", other),
    }
}

#[test]
fn test_list_detection_requires_rdf_list_superclass() {
    let mut shapes = Shapes::new();
    let list = shapes.node_shape("Chain");
    shapes.property(&list, rdf::FIRST, vec![string_datatype(), min_count(1), max_count(1)]);
    let tail = shapes.inline(vec![(sh::NODE, list.clone())]);
    let nil = shapes.inline(vec![(sh::HAS_VALUE, iri(rdf::NIL))]);
    let members = shapes.list(vec![tail, nil]);
    shapes.property(&list, rdf::REST, vec![(sh::OR, members), min_count(1), max_count(1)]);

    let ast = run(&shapes);
    assert!(!ast.object_type_by_name("ex_Chain").unwrap().1.is_list());
}

#[test]
fn test_node_level_and_with_one_member_fails() {
    let mut shapes = Shapes::new();
    let person = shapes.node_shape("Person");
    let bad = shapes.node_shape("Bad");
    let members = shapes.list(vec![person]);
    shapes.add(&bad, sh::AND, members);

    let err = transform(&shapes.build(), TransformConfig::default()).unwrap_err();
    match err {
        TransformError::Composition { shape, .. } => assert_eq!(shape, ex("Bad")),
        other => panic!("expected a composition error, got {:?}", other),
    }
}

#[test]
fn test_node_level_or_with_one_surviving_member_fails() {
    let mut shapes = Shapes::new();
    let cat = shapes.node_shape("Cat");
    let single = shapes.list(vec![cat.clone()]);
    let broken = shapes.inline(vec![(sh::AND, single)]);
    let members = shapes.list(vec![cat, broken]);
    let pet = shapes.node_shape("Pet");
    shapes.add(&pet, sh::OR, members);

    let err = transform(&shapes.build(), TransformConfig::default()).unwrap_err();
    assert!(matches!(err, TransformError::Composition { ref shape, .. } if *shape == ex("Pet")));
}

#[test]
fn test_node_level_union() {
    let mut shapes = Shapes::new();
    let cat = shapes.node_shape("Cat");
    let dog = shapes.node_shape("Dog");
    let pet = shapes.node_shape("Pet");
    let members = shapes.list(vec![cat, dog]);
    shapes.add(&pet, sh::OR, members);
    shapes.add(&pet, shaclgen::DECLARATION_PREFERENCE, iri(shaclgen::DECLARATION_PREFERENCE_INTERFACE));
    let owner = shapes.node_shape("Owner");
    shapes.property(&owner, &ex_iri("pet"), vec![(sh::NODE, pet), min_count(1), max_count(1)]);

    let ast = run(&shapes);
    assert_eq!(ast.object_union_types().len(), 1);
    let union = &ast.object_union_types()[0];
    assert_eq!(union.name.sanitized_name, "ex_Pet");
    let members: Vec<_> = union
        .member_types()
        .iter()
        .map(|id| ast.object_type(*id).name.sanitized_name.clone())
        .collect();
    assert_eq!(members, vec!["ex_Cat", "ex_Dog"]);
    assert_eq!(
        property_type(&ast, "ex_Owner", &ex_iri("pet")).kind_name(),
        "ObjectUnionType"
    );
}

#[test]
fn test_unsupported_path_drops_only_that_property() {
    let mut shapes = Shapes::new();
    let person = shapes.node_shape("Person");
    shapes.property(&person, &ex_iri("name"), vec![string_datatype()]);
    let inverse = shapes.inline(vec![(sh::INVERSE_PATH, ex("parent"))]);
    let child = shapes.inline(vec![(sh::NODE, person.clone())]);
    shapes.add(&child, sh::PATH, inverse);
    shapes.add(&person, sh::PROPERTY, child);
    shapes.property(&person, &ex_iri("mystery"), vec![]);
    // no sh:path at all
    let no_path = shapes.inline(vec![string_datatype()]);
    shapes.add(&person, sh::PROPERTY, no_path);

    let ast = run(&shapes);
    let (_, person) = ast.object_type_by_name("ex_Person").unwrap();
    let paths: Vec<_> = person.own_properties().iter().map(|p| p.path.as_str().to_string()).collect();
    assert_eq!(paths, vec![ex_iri("name")]);
}

#[test]
fn test_class_references() {
    let mut shapes = Shapes::new();
    let company = shapes.node_shape("Company");
    let person = shapes.node_shape("Person");
    shapes.property(
        &person,
        &ex_iri("employer"),
        vec![(sh::CLASS, ex("Unknown")), (sh::CLASS, company.clone()), min_count(1), max_count(1)],
    );
    shapes.property(&person, &ex_iri("unknown"), vec![(sh::CLASS, ex("Unknown"))]);
    shapes.property(
        &person,
        &ex_iri("anything"),
        vec![(sh::CLASS, iri(owl::THING)), (sh::NODE_KIND, iri(sh::IRI)), min_count(1), max_count(1)],
    );

    let ast = run(&shapes);
    let (company_id, _) = ast.object_type_by_name("ex_Company").unwrap();
    assert_eq!(property_type(&ast, "ex_Person", &ex_iri("employer")), &Type::object(company_id));

    let (_, person) = ast.object_type_by_name("ex_Person").unwrap();
    assert!(person.property(&ex_iri("unknown")).is_none());
    match property_type(&ast, "ex_Person", &ex_iri("anything")) {
        Type::Identifier(identifier) => assert_eq!(identifier.node_kinds, BTreeSet::from([NodeKind::Iri])),
        other => panic!("expected an identifier, got {:?}", other),
    }
}

#[test]
fn test_extern_and_inline_references() {
    let mut shapes = Shapes::new();
    let external = shapes.node_shape("External");
    shapes.add(&external, shaclgen::EXTERN, boolean(true));
    shapes.add(&external, shaclgen::NODE_KIND, iri(sh::IRI));
    let address = shapes.node_shape("Address");
    let person = shapes.node_shape("Person");
    shapes.property(&person, &ex_iri("external"), vec![(sh::NODE, external), min_count(1), max_count(1)]);
    let home = shapes.property(&person, &ex_iri("home"), vec![(sh::NODE, address), min_count(1), max_count(1)]);
    shapes.add(&home, shaclgen::INLINE, boolean(true));

    let ast = run(&shapes);
    match property_type(&ast, "ex_Person", &ex_iri("external")) {
        Type::Identifier(identifier) => assert_eq!(identifier.node_kinds, BTreeSet::from([NodeKind::Iri])),
        other => panic!("expected an identifier, got {:?}", other),
    }
    let (address_id, _) = ast.object_type_by_name("ex_Address").unwrap();
    assert_eq!(
        property_type(&ast, "ex_Person", &ex_iri("home")),
        &Type::Object(ObjectReference {
            id: address_id,
            inline: true
        })
    );
}

#[test]
fn test_object_type_annotations() {
    let mut shapes = Shapes::new();
    let shape = shapes.node_shape("PersonShape");
    shapes.add(&shape, shaclgen::NAME, string("Person"));
    shapes.add(&shape, shaclgen::ABSTRACT, boolean(true));
    shapes.add(&shape, shaclgen::EXPORT, boolean(false));
    shapes.add(&shape, shaclgen::IDENTIFIER_MINTING_STRATEGY, iri(shaclgen::MINTING_STRATEGY_SHA256));
    shapes.add(&shape, shaclgen::IDENTIFIER_PROPERTY_NAME, string("id"));
    shapes.add(&shape, shaclgen::TYPE_DISCRIMINATOR_PROPERTY_NAME, string("kind"));
    shapes.add(&shape, sh::TARGET_CLASS, ex("Person"));
    let name = shapes.property(&shape, &ex_iri("name"), vec![string_datatype()]);
    shapes.add(&name, shaclgen::VISIBILITY, iri(shaclgen::VISIBILITY_PRIVATE));

    let ast = run(&shapes);
    let (_, person) = ast.object_type_by_name("Person").unwrap();
    assert!(person.is_abstract);
    assert!(!person.export);
    assert!(!person.is_extern);
    assert_eq!(person.minting_strategy, Some(MintingStrategy::Sha256));
    assert_eq!(person.identifier_property_name, "id");
    assert_eq!(person.type_discriminator_property_name, "kind");
    assert_eq!(person.rdf_type, Some(Iri::new(ex_iri("Person"))));
    assert_eq!(person.node_kinds, NodeKind::identifier_kinds());
    assert_eq!(person.own_properties()[0].visibility, Visibility::Private);
}

#[test]
fn test_class_shape_is_its_own_rdf_type() {
    let mut shapes = Shapes::new();
    shapes.node_shape("Person");

    let ast = run(&shapes);
    let (_, person) = ast.object_type_by_name("ex_Person").unwrap();
    assert_eq!(person.rdf_type, Some(Iri::new(ex_iri("Person"))));
    assert_eq!(person.identifier_property_name, "identifier");
    assert_eq!(person.type_discriminator_property_name, "type");
}

#[test]
fn test_config_reaches_names_and_defaults() -> anyhow::Result<()> {
    let mut shapes = Shapes::new();
    let shape = shapes.node_shape("ClassShape");
    shapes.add(&shape, shaclgen::NAME, string("class"));

    let config = TransformConfig::from_json_str(
        r#"{"default_export": false, "default_identifier_property_name": "@id"}"#,
    )?;
    let ast = transform(&shapes.build(), config)?;
    let (_, object_type) = ast
        .object_type_by_name("_class_")
        .ok_or_else(|| anyhow::anyhow!("reserved name was not wrapped"))?;
    assert!(!object_type.export);
    assert_eq!(object_type.identifier_property_name, "@id");
    Ok(())
}

#[test]
fn test_hierarchy_links_and_order() {
    let mut shapes = Shapes::new();
    let puppy = shapes.node_shape("Puppy");
    let dog = shapes.node_shape("Dog");
    let animal = shapes.node_shape("Animal");
    shapes.sub_class_of(&puppy, &dog);
    shapes.sub_class_of(&dog, &animal);

    let ast = run(&shapes);
    let id = |name: &str| ast.object_type_by_name(name).unwrap().0;
    let (puppy, dog, animal) = (id("ex_Puppy"), id("ex_Dog"), id("ex_Animal"));

    let dog_type = ast.object_type(dog);
    assert_eq!(dog_type.parent_object_types, vec![animal]);
    assert_eq!(dog_type.ancestor_object_types, vec![animal]);
    assert_eq!(dog_type.child_object_types, vec![puppy]);
    assert_eq!(dog_type.descendant_object_types, vec![puppy]);
    assert_eq!(ast.object_type(animal).descendant_object_types, vec![dog, puppy]);
    assert_eq!(ast.object_type(puppy).ancestor_object_types, vec![dog, animal]);

    assert_eq!(sort_object_types(&ast).unwrap(), vec![animal, dog, puppy]);
}

#[test]
fn test_summary_of_transformed_graph() {
    let mut shapes = Shapes::new();
    let node = shapes.node_shape("Node");
    shapes.property(&node, &ex_iri("next"), vec![(sh::NODE, node.clone())]);

    let summary = run(&shapes).summary();
    let next = &summary["objectTypes"][0]["properties"][0];
    assert_eq!(next["name"], "ex_next");
    assert_eq!(next["type"]["kind"], "SetType");
    assert_eq!(next["type"]["itemType"]["name"], "ex_Node");
}

#[test]
fn test_shared_property_shape_resolves_on_every_node_shape() {
    let mut shapes = Shapes::new();
    let employee = shapes.node_shape("Employee");
    let person = shapes.node_shape("Person");
    let knows = ex("knowsShape");
    shapes.add(&knows, sh::PATH, ex("knows"));
    shapes.add(&knows, sh::NODE, person.clone());
    shapes.add(&employee, sh::PROPERTY, knows.clone());
    shapes.add(&person, sh::PROPERTY, knows);

    let ast = run(&shapes);
    let (person_id, _) = ast.object_type_by_name("ex_Person").unwrap();
    let expected = Type::set(Type::object(person_id), 0);
    assert_eq!(property_type(&ast, "ex_Employee", &ex_iri("knows")), &expected);
    assert_eq!(property_type(&ast, "ex_Person", &ex_iri("knows")), &expected);
}

#[test]
fn test_failed_node_composite_behind_property_is_rolled_back() {
    let mut shapes = Shapes::new();
    let a = shapes.node_shape("A");
    let single = shapes.list(vec![a.clone()]);
    let broken = shapes.inline(vec![(sh::OR, single)]);
    let members = shapes.list(vec![a, broken]);
    let pet = shapes.inline(vec![(sh::OR, members)]);

    let person = shapes.node_shape("Person");
    shapes.property(&person, &ex_iri("name"), vec![string_datatype()]);
    shapes.property(&person, &ex_iri("bad"), vec![(sh::NODE, pet)]);

    let ast = run(&shapes);
    assert!(ast.object_union_types().is_empty());
    let (_, person) = ast.object_type_by_name("ex_Person").unwrap();
    let paths: Vec<_> = person.own_properties().iter().map(|p| p.path.as_str().to_string()).collect();
    assert_eq!(paths, vec![ex_iri("name")]);
    assert_eq!(ast.object_types().len(), 2);
}

#[test]
fn test_failed_object_type_leaves_no_placeholder() {
    let mut shapes = Shapes::new();
    let single = shapes.list(vec![ex("Other")]);
    let broken = shapes.node_shape("Broken");
    shapes.add(&broken, sh::AND, single);
    // subclass of a failing node shape, reached only through a property
    let orphan = shapes.blank();
    shapes.add(&orphan, rdf::TYPE, iri(sh::NODE_SHAPE));
    shapes.add(&orphan, rdf::TYPE, iri(owl::CLASS));
    shapes.sub_class_of(&orphan, &broken);
    let owner = shapes.node_shape("Owner");
    shapes.property(&owner, &ex_iri("orphan"), vec![(sh::NODE, orphan), min_count(1), max_count(1)]);
    shapes.property(&owner, &ex_iri("name"), vec![string_datatype()]);

    let graph = shapes.build();
    let mut transformer = ShapesGraphToAstTransformer::new(&graph, TransformConfig::default());
    let resolved = transformer.resolve_node_shape(graph.node_shape(&owner).unwrap()).unwrap();
    assert!(matches!(resolved, NodeShapeType::Object(_)));

    let ast = transformer.ast();
    let names: Vec<_> = ast.object_types().iter().map(|o| o.name.sanitized_name.clone()).collect();
    assert_eq!(names, vec!["ex_Owner"]);
    assert_eq!(ast.validate(), Ok(()));
}

#[test]
fn test_property_and_of_objects_is_intersection() {
    let mut shapes = Shapes::new();
    let named = shapes.node_shape("Named");
    let aged = shapes.node_shape("Aged");
    let members = shapes.list(vec![named, aged]);
    let person = shapes.node_shape("Person");
    shapes.property(&person, &ex_iri("friend"), vec![(sh::AND, members), min_count(1), max_count(1)]);

    let ast = run(&shapes);
    let (named_id, _) = ast.object_type_by_name("ex_Named").unwrap();
    let (aged_id, _) = ast.object_type_by_name("ex_Aged").unwrap();
    match property_type(&ast, "ex_Person", &ex_iri("friend")) {
        Type::Intersection(intersection) => assert_eq!(
            intersection.member_types(),
            &[Type::object(named_id), Type::object(aged_id)]
        ),
        other => panic!("expected an intersection, got {:?}", other),
    }
}

#[test]
fn test_failed_composite_member_drops_only_that_property() {
    let mut shapes = Shapes::new();
    let named = shapes.node_shape("Named");
    let single = shapes.list(vec![named.clone()]);
    let broken = shapes.node_shape("Broken");
    shapes.add(&broken, sh::AND, single);
    // nothing to infer a type from
    let opaque_and = shapes.inline(vec![(sh::MAX_COUNT, int(1))]);
    let opaque_or = shapes.inline(vec![(sh::MAX_COUNT, int(1))]);
    let and_members = shapes.list(vec![named.clone(), opaque_and]);
    let or_members = shapes.list(vec![named.clone(), opaque_or]);

    let person = shapes.node_shape("Person");
    shapes.property(&person, &ex_iri("name"), vec![string_datatype()]);
    shapes.property(&person, &ex_iri("viaAnd"), vec![(sh::AND, and_members)]);
    shapes.property(&person, &ex_iri("viaOr"), vec![(sh::OR, or_members)]);
    shapes.property(&person, &ex_iri("viaNode"), vec![(sh::NODE, named), (sh::NODE, broken)]);

    let graph = shapes.build();
    let mut transformer = ShapesGraphToAstTransformer::new(&graph, TransformConfig::default());
    let resolved = transformer.resolve_node_shape(graph.node_shape(&person).unwrap()).unwrap();
    assert!(matches!(resolved, NodeShapeType::Object(_)));

    let (_, person) = transformer.ast().object_type_by_name("ex_Person").unwrap();
    let paths: Vec<_> = person.own_properties().iter().map(|p| p.path.as_str().to_string()).collect();
    assert_eq!(paths, vec![ex_iri("name")]);
}

#[test]
fn test_inline_shape_listing_itself_is_dropped() {
    let mut shapes = Shapes::new();
    let person = shapes.node_shape("Person");
    shapes.property(&person, &ex_iri("name"), vec![string_datatype()]);
    let looping = shapes.property(&person, &ex_iri("loop"), vec![]);
    let text = shapes.inline(vec![string_datatype()]);
    let members = shapes.list(vec![looping.clone(), text]);
    shapes.add(&looping, sh::OR, members);

    let ast = run(&shapes);
    let (_, person) = ast.object_type_by_name("ex_Person").unwrap();
    assert!(person.property(&ex_iri("loop")).is_none());
    assert!(person.property(&ex_iri("name")).is_some());
}
