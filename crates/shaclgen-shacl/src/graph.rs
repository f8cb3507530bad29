//! Shapes graph provider: shape lookup and hierarchy queries

use crate::hierarchy::ClassHierarchy;
use crate::shape::Shape;
use crate::ShaclError;
use shaclgen_core::{PrefixMap, Term};
use std::collections::{HashMap, HashSet};

/// Shapes Graph
#[derive(Debug, Clone)]
pub struct ShapesGraph {
    shapes: Vec<Shape>,
    index: HashMap<Term, usize>,
    /// Declared node shapes, in first-appearance order
    node_shapes: Vec<Term>,
    node_shape_set: HashSet<Term>,
    hierarchy: ClassHierarchy,
    prefixes: PrefixMap,
}

impl ShapesGraph {
    pub fn new(shapes: Vec<Shape>, node_shapes: Vec<Term>, hierarchy: ClassHierarchy, prefixes: PrefixMap) -> Self {
        let index = shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| (shape.identifier.clone(), i))
            .collect();
        let node_shape_set = node_shapes.iter().cloned().collect();
        Self {
            shapes,
            index,
            node_shapes,
            node_shape_set,
            hierarchy,
            prefixes,
        }
    }

    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    pub fn hierarchy(&self) -> &ClassHierarchy {
        &self.hierarchy
    }

    /// All shapes, declared or inline
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, identifier: &Term) -> Option<&Shape> {
        self.index.get(identifier).map(|&i| &self.shapes[i])
    }

    /// Like [`ShapesGraph::shape`], failing on unknown identifiers
    pub fn require_shape(&self, identifier: &Term) -> Result<&Shape, ShaclError> {
        self.shape(identifier)
            .ok_or_else(|| ShaclError::UnknownShape(identifier.clone()))
    }

    /// Declared node shapes in first-appearance order
    pub fn node_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.node_shapes.iter().filter_map(|term| self.shape(term))
    }

    /// The node shape declared with this identifier, if any
    pub fn node_shape(&self, identifier: &Term) -> Option<&Shape> {
        if self.is_declared_node_shape(identifier) {
            self.shape(identifier)
        } else {
            None
        }
    }

    pub fn is_declared_node_shape(&self, identifier: &Term) -> bool {
        self.node_shape_set.contains(identifier)
    }

    /// Property shapes referenced by a node shape's `sh:property`
    pub fn property_shapes(&self, node_shape: &Shape) -> Result<Vec<&Shape>, ShaclError> {
        node_shape
            .constraints
            .properties
            .iter()
            .map(|term| self.require_shape(term))
            .collect()
    }

    pub fn parent_node_shapes(&self, node_shape: &Shape) -> Vec<&Shape> {
        self.related_node_shapes(node_shape, self.hierarchy.parents(&node_shape.identifier).to_vec())
    }

    pub fn child_node_shapes(&self, node_shape: &Shape) -> Vec<&Shape> {
        self.related_node_shapes(node_shape, self.hierarchy.children(&node_shape.identifier).to_vec())
    }

    pub fn ancestor_node_shapes(&self, node_shape: &Shape) -> Vec<&Shape> {
        self.related_node_shapes(node_shape, self.hierarchy.ancestors(&node_shape.identifier))
    }

    pub fn descendant_node_shapes(&self, node_shape: &Shape) -> Vec<&Shape> {
        self.related_node_shapes(node_shape, self.hierarchy.descendants(&node_shape.identifier))
    }

    /// Transitive `rdfs:subClassOf` check against an arbitrary class
    pub fn is_subclass_of(&self, shape: &Shape, class: &Term) -> bool {
        self.hierarchy.is_subclass_of(&shape.identifier, class)
    }

    /// Hierarchy queries only apply to class-bearing node shapes
    fn related_node_shapes(&self, node_shape: &Shape, classes: Vec<Term>) -> Vec<&Shape> {
        if !node_shape.is_class {
            return Vec::new();
        }
        classes
            .iter()
            .filter_map(|class| self.node_shape(class))
            .filter(|shape| shape.is_class)
            .collect()
    }
}
