//! Shapes graph to AST resolution
//!
//! Every node shape resolves at most once per transform: the resolved type
//! is cached by the shape's term before any recursive field is populated,
//! so self-references and cycles come back as the cached arena id.

use shaclgen_ast::{
    Ast, AstCheckpoint, CompositeType, IdentifierType, LiteralType, Name, ObjectCompositeType, ObjectCompositeTypeId,
    ObjectReference, ObjectType, ObjectTypeId, Property, Type,
};
use shaclgen_core::vocab::is_non_informative_class;
use shaclgen_core::{Iri, Term};
use shaclgen_shacl::{NodeKind, Shape, ShapesGraph};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, info, warn};

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::name::NameResolver;
use crate::scalar::{resolve_scalar_type, wrap_cardinality, ScalarInput};

/// What a node shape resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeShapeType {
    Object(ObjectTypeId),
    Intersection(ObjectCompositeTypeId),
    Union(ObjectCompositeTypeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompositeKind {
    Intersection,
    Union,
}

/// Which constraint a property composite came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompositeSource {
    And,
    Class,
    Node,
    Or,
}

impl CompositeSource {
    fn kind(self) -> CompositeKind {
        match self {
            CompositeSource::Or => CompositeKind::Union,
            CompositeSource::And | CompositeSource::Class | CompositeSource::Node => CompositeKind::Intersection,
        }
    }
}

/// Settings carried from a composite down to its members
#[derive(Debug, Clone, Default)]
struct Inherited {
    default_value: Option<Term>,
    inline: Option<bool>,
    nested: bool,
}

/// Resolves one shapes graph into an [`Ast`]
///
/// The resolver is consumed by [`ShapesGraphToAstTransformer::transform`];
/// build a new one for every graph.
pub struct ShapesGraphToAstTransformer<'g> {
    pub(crate) graph: &'g ShapesGraph,
    config: TransformConfig,
    pub(crate) ast: Ast,
    cache: HashMap<Term, NodeShapeType>,
    /// Property and inline shapes currently being resolved
    in_progress: HashSet<Term>,
}

impl<'g> ShapesGraphToAstTransformer<'g> {
    pub fn new(graph: &'g ShapesGraph, config: TransformConfig) -> Self {
        Self {
            graph,
            config,
            ast: Ast::new(),
            cache: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Resolve every declared node shape
    ///
    /// Fails as a whole if any node shape fails.
    pub fn transform(mut self) -> Result<Ast, TransformError> {
        let graph = self.graph;
        for node_shape in graph.node_shapes() {
            self.resolve_node_shape(node_shape)?;
        }
        self.ast.validate()?;

        info!(
            object_types = self.ast.object_types().len(),
            object_intersection_types = self.ast.object_intersection_types().len(),
            object_union_types = self.ast.object_union_types().len(),
            "Transformed shapes graph"
        );
        Ok(self.ast)
    }

    /// Types resolved so far
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn resolve_name(&self, shape: &Shape) -> Name {
        NameResolver::new(self.graph.prefixes(), &self.config).resolve_name(shape)
    }

    /// Resolve a node shape to an object type or an object composite
    pub fn resolve_node_shape(&mut self, node_shape: &'g Shape) -> Result<NodeShapeType, TransformError> {
        if let Some(resolved) = self.cache.get(&node_shape.identifier) {
            debug!(shape = %node_shape.identifier, "Node shape cache hit");
            return Ok(*resolved);
        }
        debug!(shape = %node_shape.identifier, "Resolving node shape");

        let checkpoint = self.ast.checkpoint();
        // property shapes may be shared between node shapes; only nesting
        // inside this node shape counts as re-entry
        let outer = std::mem::take(&mut self.in_progress);

        let constraints = &node_shape.constraints;
        let result = if !constraints.and.is_empty() {
            self.resolve_object_composite(node_shape, &constraints.and, CompositeKind::Intersection)
        } else if !constraints.or.is_empty() {
            self.resolve_object_composite(node_shape, &constraints.or, CompositeKind::Union)
        } else {
            self.resolve_object_type(node_shape)
        };

        self.in_progress = outer;
        if result.is_err() {
            self.rollback(checkpoint);
        }
        result
    }

    /// Forget every type registered since `checkpoint`, in the arena and the cache
    fn rollback(&mut self, checkpoint: AstCheckpoint) {
        self.ast.rollback(checkpoint);
        self.cache.retain(|_, resolved| match *resolved {
            NodeShapeType::Object(id) => checkpoint.holds_object_type(id),
            NodeShapeType::Intersection(id) => checkpoint.holds_object_intersection_type(id),
            NodeShapeType::Union(id) => checkpoint.holds_object_union_type(id),
        });
    }

    fn resolve_object_composite(
        &mut self,
        node_shape: &'g Shape,
        members: &'g [Term],
        kind: CompositeKind,
    ) -> Result<NodeShapeType, TransformError> {
        if members.len() < 2 {
            return Err(TransformError::Composition {
                shape: node_shape.identifier.clone(),
                reason: format!("declares {} member(s), at least two are required", members.len()),
            });
        }

        let composite = ObjectCompositeType::new(
            self.resolve_name(node_shape),
            node_shape.annotations.export.unwrap_or(self.config.default_export),
            node_shape.annotations.declaration_preference.unwrap_or_default(),
        );
        let resolved = match kind {
            CompositeKind::Intersection => NodeShapeType::Intersection(self.ast.add_object_intersection_type(composite)),
            CompositeKind::Union => NodeShapeType::Union(self.ast.add_object_union_type(composite)),
        };
        self.cache.insert(node_shape.identifier.clone(), resolved);

        let graph = self.graph;
        let mut member_types = Vec::new();
        for member in members {
            let member_shape = match graph.shape(member) {
                Some(shape) => shape,
                None => {
                    warn!(shape = %node_shape.identifier, member = %member, "Composite member is not a shape");
                    continue;
                }
            };
            match self.resolve_node_shape(member_shape) {
                Ok(NodeShapeType::Object(id)) => {
                    if !member_types.contains(&id) {
                        member_types.push(id);
                    }
                }
                Ok(_) => debug!(shape = %node_shape.identifier, member = %member, "Skipping composite member"),
                Err(err) => {
                    warn!(shape = %node_shape.identifier, member = %member, error = %err, "Composite member failed to resolve")
                }
            }
        }

        let set_members = match resolved {
            NodeShapeType::Intersection(id) => self.ast.object_intersection_type_mut(id).set_member_types(member_types),
            NodeShapeType::Union(id) => self.ast.object_union_type_mut(id).set_member_types(member_types),
            NodeShapeType::Object(_) => Ok(()),
        };
        set_members.map_err(|err| TransformError::Composition {
            shape: node_shape.identifier.clone(),
            reason: err.to_string(),
        })?;
        Ok(resolved)
    }

    fn resolve_object_type(&mut self, node_shape: &'g Shape) -> Result<NodeShapeType, TransformError> {
        let annotations = &node_shape.annotations;
        let mut object_type = ObjectType::new(
            self.resolve_name(node_shape),
            annotations
                .identifier_property_name
                .clone()
                .unwrap_or_else(|| self.config.default_identifier_property_name.clone()),
            annotations
                .type_discriminator_property_name
                .clone()
                .unwrap_or_else(|| self.config.default_type_discriminator_property_name.clone()),
        );
        object_type.comment = annotations.comment.clone();
        object_type.is_abstract = annotations.is_abstract.unwrap_or(false);
        object_type.export = annotations.export.unwrap_or(self.config.default_export);
        object_type.is_extern = annotations.is_extern.unwrap_or(false);
        if !annotations.identifier_node_kinds.is_empty() {
            object_type.node_kinds = annotations.identifier_node_kinds.clone();
        }
        object_type.minting_strategy = annotations.minting_strategy;
        object_type.rdf_type = annotations
            .rdf_type
            .clone()
            .or_else(|| node_shape.target_classes.first().cloned())
            .or_else(|| {
                node_shape
                    .is_class
                    .then(|| node_shape.identifier.as_iri().cloned())
                    .flatten()
            });

        let id = self.ast.add_object_type(object_type);
        self.cache.insert(node_shape.identifier.clone(), NodeShapeType::Object(id));

        self.link_hierarchy(node_shape, id)?;

        let graph = self.graph;
        for property_shape in graph.property_shapes(node_shape)? {
            match self.resolve_property(property_shape) {
                Ok(property) => self.ast.object_type_mut(id).properties.push(property),
                Err(err) => warn!(
                    object_type = %node_shape.identifier,
                    property_shape = %property_shape.identifier,
                    error = %err,
                    "Dropping property"
                ),
            }
        }

        if let Some(item_type) = self.detect_list_item_type(node_shape, id) {
            debug!(shape = %node_shape.identifier, "Detected RDF list object type");
            self.ast.object_type_mut(id).list_item_type = Some(item_type);
        }

        Ok(NodeShapeType::Object(id))
    }

    /// Resolve a property shape into an object type property
    pub fn resolve_property(&mut self, property_shape: &'g Shape) -> Result<Property, TransformError> {
        let path = property_shape
            .path()
            .ok_or_else(|| TransformError::MissingPath(property_shape.identifier.clone()))?;
        let predicate = path.as_predicate().ok_or_else(|| TransformError::UnsupportedPath {
            shape: property_shape.identifier.clone(),
            kind: path.kind_name(),
        })?;

        let type_ = self.resolve_property_type(property_shape, &Inherited::default())?;
        Ok(Property {
            name: self.resolve_name(property_shape),
            path: predicate.clone(),
            type_,
            visibility: property_shape.annotations.visibility.unwrap_or_default(),
        })
    }

    fn resolve_property_type(&mut self, shape: &'g Shape, inherited: &Inherited) -> Result<Type, TransformError> {
        // inline shapes are not cached, so a shape listing itself would never terminate
        if !self.in_progress.insert(shape.identifier.clone()) {
            return Err(TransformError::Composition {
                shape: shape.identifier.clone(),
                reason: "inline shape refers to itself".to_string(),
            });
        }
        let result = self.resolve_property_type_uncached(shape, inherited);
        self.in_progress.remove(&shape.identifier);
        result
    }

    fn resolve_property_type_uncached(&mut self, shape: &'g Shape, inherited: &Inherited) -> Result<Type, TransformError> {
        let constraints = &shape.constraints;
        let default_value = constraints
            .default_value
            .clone()
            .or_else(|| inherited.default_value.clone());
        let members_context = Inherited {
            default_value: default_value.clone(),
            inline: shape.annotations.inline.or(inherited.inline),
            nested: true,
        };

        let item_type = match self.resolve_compositional_type(shape, &members_context)? {
            Some(item_type) => item_type,
            None => resolve_scalar_type(&ScalarInput {
                constraints,
                default_value: default_value.as_ref(),
            })
            .ok_or_else(|| TransformError::UnableToInferType(shape.identifier.clone()))?,
        };

        Ok(wrap_cardinality(
            item_type,
            constraints.min_count,
            constraints.max_count,
            default_value.is_some(),
            inherited.nested,
        ))
    }

    /// `None` if the shape has no compositional constraint
    fn resolve_compositional_type(
        &mut self,
        shape: &'g Shape,
        context: &Inherited,
    ) -> Result<Option<Type>, TransformError> {
        let constraints = &shape.constraints;
        let classes: Vec<&'g Iri> = constraints
            .classes
            .iter()
            .filter(|class| !is_non_informative_class(class.as_str()))
            .collect();

        let (source, member_types) = if !constraints.and.is_empty() {
            (CompositeSource::And, self.resolve_member_shapes(shape, &constraints.and, context)?)
        } else if !classes.is_empty() {
            (CompositeSource::Class, self.resolve_class_members(shape, &classes, context)?)
        } else if !constraints.nodes.is_empty() {
            (CompositeSource::Node, self.resolve_node_references(shape, &constraints.nodes, context)?)
        } else if !constraints.or.is_empty() {
            (CompositeSource::Or, self.resolve_member_shapes(shape, &constraints.or, context)?)
        } else {
            return Ok(None);
        };

        collapse(member_types, source, !constraints.has_values.is_empty()).map(Some)
    }

    /// `sh:and`/`sh:or` members: declared node shapes by reference, anything else inline
    fn resolve_member_shapes(
        &mut self,
        shape: &'g Shape,
        members: &'g [Term],
        context: &Inherited,
    ) -> Result<Vec<Type>, TransformError> {
        let graph = self.graph;
        let mut member_types = Vec::with_capacity(members.len());
        for member in members {
            let member_shape = graph
                .shape(member)
                .ok_or_else(|| TransformError::UnknownShape(member.clone()))
                .map_err(|err| member_failure(shape, member, err))?;

            let member_type = if graph.is_declared_node_shape(member) || !member_shape.constraints.properties.is_empty() {
                self.resolve_node_shape(member_shape)
                    .map(|resolved| self.node_shape_type(resolved, context))
            } else {
                self.resolve_property_type(member_shape, context)
            };
            member_types.push(member_type.map_err(|err| member_failure(shape, member, err))?);
        }
        Ok(member_types)
    }

    /// `sh:class` members; unresolved classes are dropped
    fn resolve_class_members(
        &mut self,
        shape: &'g Shape,
        classes: &[&'g Iri],
        context: &Inherited,
    ) -> Result<Vec<Type>, TransformError> {
        let graph = self.graph;
        let mut member_types = Vec::with_capacity(classes.len());
        for class in classes {
            let class_shape = match graph.node_shape(&Term::Iri((*class).clone())) {
                Some(class_shape) => class_shape,
                None => {
                    warn!(shape = %shape.identifier, class = %class, "Dropping class without a node shape");
                    continue;
                }
            };
            match self.resolve_node_shape(class_shape) {
                Ok(resolved) => member_types.push(self.node_shape_type(resolved, context)),
                Err(err) => warn!(shape = %shape.identifier, class = %class, error = %err, "Dropping unresolved class"),
            }
        }

        if member_types.is_empty() {
            return Err(TransformError::UnresolvedClass {
                shape: shape.identifier.clone(),
                classes: classes.iter().map(|class| class.to_string()).collect(),
            });
        }
        Ok(member_types)
    }

    /// `sh:node` members, always resolved as node shapes
    fn resolve_node_references(
        &mut self,
        shape: &'g Shape,
        nodes: &'g [Term],
        context: &Inherited,
    ) -> Result<Vec<Type>, TransformError> {
        let graph = self.graph;
        let mut member_types = Vec::with_capacity(nodes.len());
        for node in nodes {
            let node_shape = graph
                .shape(node)
                .ok_or_else(|| TransformError::UnknownShape(node.clone()))
                .map_err(|err| member_failure(shape, node, err))?;
            let resolved = self
                .resolve_node_shape(node_shape)
                .map_err(|err| member_failure(shape, node, err))?;
            member_types.push(self.node_shape_type(resolved, context));
        }
        Ok(member_types)
    }

    /// Reference to a resolved node shape; extern object types become bare identifiers
    fn node_shape_type(&self, resolved: NodeShapeType, context: &Inherited) -> Type {
        match resolved {
            NodeShapeType::Object(id) => {
                let object_type = self.ast.object_type(id);
                if object_type.is_extern {
                    Type::Identifier(IdentifierType::new(object_type.node_kinds.clone()))
                } else {
                    Type::Object(ObjectReference {
                        id,
                        inline: context.inline.unwrap_or(false),
                    })
                }
            }
            NodeShapeType::Intersection(id) => Type::ObjectIntersection(id),
            NodeShapeType::Union(id) => Type::ObjectUnion(id),
        }
    }
}

fn member_failure(shape: &Shape, member: &Term, err: TransformError) -> TransformError {
    TransformError::Composition {
        shape: shape.identifier.clone(),
        reason: format!("member {} failed: {}", member, err),
    }
}

/// Collapse resolved composite members into one type
///
/// A single member is returned as is. Without a fixed value, members that
/// are all unrestricted literals (ignoring cardinality) become one generic
/// literal, and members that are all bare identifiers become one identifier
/// over the union of their node kinds. Anything else is an intersection or
/// union.
fn collapse(
    mut member_types: Vec<Type>,
    source: CompositeSource,
    has_fixed_value: bool,
) -> Result<Type, TransformError> {
    if member_types.len() == 1 {
        if let Some(member_type) = member_types.pop() {
            return Ok(member_type);
        }
    }

    if !has_fixed_value {
        if member_types
            .iter()
            .map(Type::without_cardinality)
            .all(|t| matches!(t, Type::Literal(literal) if literal.is_generic()))
        {
            return Ok(Type::Literal(LiteralType::generic()));
        }

        let node_kinds = member_types
            .iter()
            .map(|t| match t {
                Type::Identifier(identifier) => Some(identifier.node_kinds.iter().copied()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>();
        if let Some(node_kinds) = node_kinds {
            let node_kinds: BTreeSet<NodeKind> = node_kinds.into_iter().flatten().collect();
            return Ok(Type::Identifier(IdentifierType::new(node_kinds)));
        }
    }

    let composite = CompositeType::new(member_types)?;
    Ok(match source.kind() {
        CompositeKind::Intersection => Type::Intersection(composite),
        CompositeKind::Union => Type::Union(composite),
    })
}
