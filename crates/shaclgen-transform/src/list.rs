//! RDF list recognition

use shaclgen_ast::{ObjectType, ObjectTypeId, Type};
use shaclgen_core::vocab::rdf;
use shaclgen_core::Term;
use shaclgen_shacl::Shape;

use crate::transformer::ShapesGraphToAstTransformer;

impl<'g> ShapesGraphToAstTransformer<'g> {
    pub(crate) fn detect_list_item_type(&self, node_shape: &Shape, id: ObjectTypeId) -> Option<Type> {
        if !self.graph.is_subclass_of(node_shape, &Term::iri(rdf::LIST)) {
            return None;
        }
        list_item_type(self.ast.object_type(id), id)
    }
}

/// Item type of an object type shaped like an RDF list
///
/// The object type needs exactly an `rdf:first` property and an `rdf:rest`
/// property whose type is a union of the object type itself and an
/// identifier (the `rdf:nil` terminator).
pub fn list_item_type(object_type: &ObjectType, id: ObjectTypeId) -> Option<Type> {
    if object_type.properties.len() != 2 {
        return None;
    }
    let first = object_type.property(rdf::FIRST)?;
    let rest = object_type.property(rdf::REST)?;

    let members = match rest.type_.without_cardinality() {
        Type::Union(composite) if composite.member_types().len() == 2 => composite.member_types(),
        _ => return None,
    };
    let is_tail = |t: &Type| matches!(t, Type::Object(reference) if reference.id == id);
    let is_terminator = |t: &Type| matches!(t, Type::Identifier(_));
    let recursive = (is_tail(&members[0]) && is_terminator(&members[1]))
        || (is_terminator(&members[0]) && is_tail(&members[1]));

    recursive.then(|| first.type_.clone())
}
