//! Parent/child/ancestor/descendant links between object types

use shaclgen_ast::ObjectTypeId;
use shaclgen_shacl::Shape;

use crate::error::TransformError;
use crate::transformer::{NodeShapeType, ShapesGraphToAstTransformer};

impl<'g> ShapesGraphToAstTransformer<'g> {
    /// Resolve the shape's related node shapes and attach them to its object type
    ///
    /// Runs after the object type is cached, so related shapes that point
    /// back at it get its id. Related shapes that resolve to object
    /// composites have no place in the relation lists and are skipped.
    pub(crate) fn link_hierarchy(&mut self, node_shape: &'g Shape, id: ObjectTypeId) -> Result<(), TransformError> {
        let graph = self.graph;

        let ancestors = self.resolve_related(graph.ancestor_node_shapes(node_shape))?;
        let descendants = self.resolve_related(graph.descendant_node_shapes(node_shape))?;
        let parents = self.resolve_related(graph.parent_node_shapes(node_shape))?;
        let children = self.resolve_related(graph.child_node_shapes(node_shape))?;

        let object_type = self.ast.object_type_mut(id);
        object_type.ancestor_object_types = ancestors;
        object_type.descendant_object_types = descendants;
        object_type.parent_object_types = parents;
        object_type.child_object_types = children;
        Ok(())
    }

    fn resolve_related(&mut self, shapes: Vec<&'g Shape>) -> Result<Vec<ObjectTypeId>, TransformError> {
        let mut ids = Vec::with_capacity(shapes.len());
        for shape in shapes {
            if let NodeShapeType::Object(id) = self.resolve_node_shape(shape)? {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
