//! SHACL ShapesGraph loading from triples

use crate::graph::ShapesGraph;
use crate::hierarchy::ClassHierarchy;
use crate::shape::{
    Annotations, Constraints, DeclarationPreference, MintingStrategy, NodeKind, PropertyPath, Shape, ShapeKind, Visibility,
};
use crate::ShaclError;
use shaclgen_core::vocab::{owl, rdf, rdfs, sh, shaclgen};
use shaclgen_core::{GraphStore, Iri, Literal, PrefixMap, Term, Triple};
use std::collections::{BTreeSet, HashSet};

/// SHACL Loader trait
pub trait ShaclLoader {
    fn load_triples(&self, triples: Vec<Triple>, prefixes: PrefixMap) -> Result<ShapesGraph, ShaclError>;

    fn load_from_store(&self, store: GraphStore, prefixes: PrefixMap) -> Result<ShapesGraph, ShaclError>;
}

/// Default SHACL Loader
pub struct DefaultShaclLoader;

impl ShaclLoader for DefaultShaclLoader {
    fn load_triples(&self, triples: Vec<Triple>, prefixes: PrefixMap) -> Result<ShapesGraph, ShaclError> {
        self.load_from_store(GraphStore::from_triples(triples), prefixes)
    }

    fn load_from_store(&self, store: GraphStore, prefixes: PrefixMap) -> Result<ShapesGraph, ShaclError> {
        let reader = ShapeReader { store: &store };

        let mut shape_terms = OrderedTerms::default();
        let mut node_shape_terms = OrderedTerms::default();

        for triple in store.triples() {
            match triple.predicate.as_str() {
                rdf::TYPE if triple.object.is_iri(sh::NODE_SHAPE) => {
                    shape_terms.push(&triple.subject);
                    node_shape_terms.push(&triple.subject);
                }
                rdf::TYPE if triple.object.is_iri(sh::PROPERTY_SHAPE) => {
                    shape_terms.push(&triple.subject);
                }
                sh::PATH => shape_terms.push(&triple.subject),
                sh::PROPERTY => {
                    shape_terms.push(&triple.subject);
                    shape_terms.push(&triple.object);
                    node_shape_terms.push(&triple.subject);
                }
                sh::NODE => shape_terms.push(&triple.object),
                sh::AND | sh::OR | sh::XONE => {
                    for member in reader.list(&triple.object)? {
                        shape_terms.push(&member);
                    }
                }
                _ => {}
            }
        }

        let mut shapes = Vec::with_capacity(shape_terms.len());
        for term in shape_terms.iter() {
            shapes.push(reader.shape(term)?);
        }

        // A subject of sh:property that also carries sh:path is a property shape
        let node_shapes: Vec<Term> = node_shape_terms
            .iter()
            .filter(|term| store.object(term, sh::PATH).is_none())
            .cloned()
            .collect();

        let hierarchy = ClassHierarchy::from_store(&store);

        Ok(ShapesGraph::new(shapes, node_shapes, hierarchy, prefixes))
    }
}

#[derive(Default)]
struct OrderedTerms {
    terms: Vec<Term>,
    seen: HashSet<Term>,
}

impl OrderedTerms {
    fn push(&mut self, term: &Term) {
        if self.seen.insert(term.clone()) {
            self.terms.push(term.clone());
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    fn len(&self) -> usize {
        self.terms.len()
    }
}

/// Reads typed shape data out of a store
struct ShapeReader<'a> {
    store: &'a GraphStore,
}

impl<'a> ShapeReader<'a> {
    fn shape(&self, term: &Term) -> Result<Shape, ShaclError> {
        let kind = match self.store.object(term, sh::PATH) {
            Some(path) => ShapeKind::Property(self.path(path)?),
            None => ShapeKind::Node,
        };

        let is_class = self
            .store
            .objects(term, rdf::TYPE)
            .any(|t| t.is_iri(rdfs::CLASS) || t.is_iri(owl::CLASS));

        let target_classes = self
            .store
            .objects(term, sh::TARGET_CLASS)
            .map(|class| self.iri(term, sh::TARGET_CLASS, class))
            .collect::<Result<_, _>>()?;

        Ok(Shape {
            identifier: term.clone(),
            kind,
            constraints: self.constraints(term)?,
            annotations: self.annotations(term)?,
            target_classes,
            is_class,
        })
    }

    fn constraints(&self, term: &Term) -> Result<Constraints, ShaclError> {
        let mut constraints = Constraints::default();

        for head in self.store.objects(term, sh::AND) {
            constraints.and.extend(self.list(head)?);
        }
        for predicate in [sh::OR, sh::XONE] {
            for head in self.store.objects(term, predicate) {
                constraints.or.extend(self.list(head)?);
            }
        }
        for head in self.store.objects(term, sh::IN) {
            constraints.in_.extend(self.list(head)?);
        }
        for head in self.store.objects(term, sh::LANGUAGE_IN) {
            for language in self.list(head)? {
                constraints.languages_in.push(self.literal(term, sh::LANGUAGE_IN, &language)?.lexical.clone());
            }
        }

        constraints.classes = self
            .store
            .objects(term, sh::CLASS)
            .map(|class| self.iri(term, sh::CLASS, class))
            .collect::<Result<_, _>>()?;
        constraints.nodes = self.store.objects(term, sh::NODE).cloned().collect();
        constraints.properties = self.store.objects(term, sh::PROPERTY).cloned().collect();
        constraints.has_values = self.store.objects(term, sh::HAS_VALUE).cloned().collect();
        constraints.default_value = self.store.object(term, sh::DEFAULT_VALUE).cloned();

        constraints.datatype = match self.store.object(term, sh::DATATYPE) {
            Some(datatype) => Some(self.iri(term, sh::DATATYPE, datatype)?),
            None => None,
        };
        constraints.min_count = self.count(term, sh::MIN_COUNT)?;
        constraints.max_count = self.count(term, sh::MAX_COUNT)?;
        constraints.min_inclusive = self.optional_literal(term, sh::MIN_INCLUSIVE)?;
        constraints.min_exclusive = self.optional_literal(term, sh::MIN_EXCLUSIVE)?;
        constraints.max_inclusive = self.optional_literal(term, sh::MAX_INCLUSIVE)?;
        constraints.max_exclusive = self.optional_literal(term, sh::MAX_EXCLUSIVE)?;

        for node_kind in self.store.objects(term, sh::NODE_KIND) {
            constraints.node_kinds.extend(node_kinds(term, node_kind)?);
        }

        Ok(constraints)
    }

    fn annotations(&self, term: &Term) -> Result<Annotations, ShaclError> {
        let mut annotations = Annotations {
            name: self.optional_string(term, shaclgen::NAME)?,
            label: match self.optional_string(term, sh::NAME)? {
                Some(label) => Some(label),
                None => self.optional_string(term, rdfs::LABEL)?,
            },
            comment: self.optional_string(term, rdfs::COMMENT)?,
            is_abstract: self.optional_bool(term, shaclgen::ABSTRACT)?,
            export: self.optional_bool(term, shaclgen::EXPORT)?,
            is_extern: self.optional_bool(term, shaclgen::EXTERN)?,
            inline: self.optional_bool(term, shaclgen::INLINE)?,
            identifier_property_name: self.optional_string(term, shaclgen::IDENTIFIER_PROPERTY_NAME)?,
            type_discriminator_property_name: self
                .optional_string(term, shaclgen::TYPE_DISCRIMINATOR_PROPERTY_NAME)?,
            ..Annotations::default()
        };

        if let Some(strategy) = self.store.object(term, shaclgen::IDENTIFIER_MINTING_STRATEGY) {
            annotations.minting_strategy = Some(match self.iri(term, shaclgen::IDENTIFIER_MINTING_STRATEGY, strategy)?.as_str() {
                shaclgen::MINTING_STRATEGY_SHA256 => MintingStrategy::Sha256,
                shaclgen::MINTING_STRATEGY_UUIDV4 => MintingStrategy::Uuidv4,
                _ => return Err(invalid(term, shaclgen::IDENTIFIER_MINTING_STRATEGY, strategy)),
            });
        }

        if let Some(visibility) = self.store.object(term, shaclgen::VISIBILITY) {
            annotations.visibility = Some(match self.iri(term, shaclgen::VISIBILITY, visibility)?.as_str() {
                shaclgen::VISIBILITY_PRIVATE => Visibility::Private,
                shaclgen::VISIBILITY_PROTECTED => Visibility::Protected,
                shaclgen::VISIBILITY_PUBLIC => Visibility::Public,
                _ => return Err(invalid(term, shaclgen::VISIBILITY, visibility)),
            });
        }

        if let Some(preference) = self.store.object(term, shaclgen::DECLARATION_PREFERENCE) {
            annotations.declaration_preference =
                Some(match self.iri(term, shaclgen::DECLARATION_PREFERENCE, preference)?.as_str() {
                    shaclgen::DECLARATION_PREFERENCE_CLASS => DeclarationPreference::Class,
                    shaclgen::DECLARATION_PREFERENCE_INTERFACE => DeclarationPreference::Interface,
                    _ => return Err(invalid(term, shaclgen::DECLARATION_PREFERENCE, preference)),
                });
        }

        for node_kind in self.store.objects(term, shaclgen::NODE_KIND) {
            let kinds = node_kinds(term, node_kind)?;
            if kinds.contains(&NodeKind::Literal) {
                return Err(invalid(term, shaclgen::NODE_KIND, node_kind));
            }
            annotations.identifier_node_kinds.extend(kinds);
        }

        annotations.rdf_type = match self.store.object(term, shaclgen::RDF_TYPE) {
            Some(rdf_type) => Some(self.iri(term, shaclgen::RDF_TYPE, rdf_type)?),
            None => None,
        };

        Ok(annotations)
    }

    fn path(&self, term: &Term) -> Result<PropertyPath, ShaclError> {
        if let Term::Iri(iri) = term {
            return Ok(PropertyPath::Predicate(iri.clone()));
        }

        if self.store.object(term, rdf::FIRST).is_some() {
            let steps = self.list(term)?;
            return Ok(PropertyPath::Sequence(
                steps.iter().map(|step| self.path(step)).collect::<Result<_, _>>()?,
            ));
        }
        if let Some(inner) = self.store.object(term, sh::INVERSE_PATH) {
            return Ok(PropertyPath::Inverse(Box::new(self.path(inner)?)));
        }
        if let Some(head) = self.store.object(term, sh::ALTERNATIVE_PATH) {
            let alternatives = self.list(head)?;
            return Ok(PropertyPath::Alternative(
                alternatives.iter().map(|alt| self.path(alt)).collect::<Result<_, _>>()?,
            ));
        }
        if let Some(inner) = self.store.object(term, sh::ZERO_OR_MORE_PATH) {
            return Ok(PropertyPath::ZeroOrMore(Box::new(self.path(inner)?)));
        }
        if let Some(inner) = self.store.object(term, sh::ONE_OR_MORE_PATH) {
            return Ok(PropertyPath::OneOrMore(Box::new(self.path(inner)?)));
        }
        if let Some(inner) = self.store.object(term, sh::ZERO_OR_ONE_PATH) {
            return Ok(PropertyPath::ZeroOrOne(Box::new(self.path(inner)?)));
        }

        Err(ShaclError::MalformedPath(term.clone()))
    }

    /// Decode an RDF collection
    fn list(&self, head: &Term) -> Result<Vec<Term>, ShaclError> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut current = head;

        while !current.is_iri(rdf::NIL) {
            if !visited.insert(current) {
                return Err(ShaclError::MalformedList(head.clone()));
            }
            let first = self
                .store
                .object(current, rdf::FIRST)
                .ok_or_else(|| ShaclError::MalformedList(head.clone()))?;
            items.push(first.clone());
            current = self
                .store
                .object(current, rdf::REST)
                .ok_or_else(|| ShaclError::MalformedList(head.clone()))?;
        }

        Ok(items)
    }

    fn iri(&self, subject: &Term, predicate: &str, value: &Term) -> Result<Iri, ShaclError> {
        value
            .as_iri()
            .cloned()
            .ok_or_else(|| invalid(subject, predicate, value))
    }

    fn literal<'t>(&self, subject: &Term, predicate: &str, value: &'t Term) -> Result<&'t Literal, ShaclError> {
        value.as_literal().ok_or_else(|| invalid(subject, predicate, value))
    }

    fn optional_literal(&self, subject: &Term, predicate: &str) -> Result<Option<Literal>, ShaclError> {
        match self.store.object(subject, predicate) {
            Some(value) => Ok(Some(self.literal(subject, predicate, value)?.clone())),
            None => Ok(None),
        }
    }

    fn optional_string(&self, subject: &Term, predicate: &str) -> Result<Option<String>, ShaclError> {
        Ok(self
            .optional_literal(subject, predicate)?
            .map(|literal| literal.lexical))
    }

    fn optional_bool(&self, subject: &Term, predicate: &str) -> Result<Option<bool>, ShaclError> {
        match self.store.object(subject, predicate) {
            Some(value) => self
                .literal(subject, predicate, value)?
                .as_bool()
                .map(Some)
                .ok_or_else(|| invalid(subject, predicate, value)),
            None => Ok(None),
        }
    }

    fn count(&self, subject: &Term, predicate: &str) -> Result<Option<u64>, ShaclError> {
        match self.store.object(subject, predicate) {
            Some(value) => self
                .literal(subject, predicate, value)?
                .as_u64()
                .map(Some)
                .ok_or_else(|| invalid(subject, predicate, value)),
            None => Ok(None),
        }
    }
}

fn node_kinds(subject: &Term, value: &Term) -> Result<BTreeSet<NodeKind>, ShaclError> {
    let kinds: &[NodeKind] = match value.as_iri().map(Iri::as_str) {
        Some(sh::BLANK_NODE) => &[NodeKind::BlankNode],
        Some(sh::IRI) => &[NodeKind::Iri],
        Some(sh::LITERAL) => &[NodeKind::Literal],
        Some(sh::BLANK_NODE_OR_IRI) => &[NodeKind::BlankNode, NodeKind::Iri],
        Some(sh::BLANK_NODE_OR_LITERAL) => &[NodeKind::BlankNode, NodeKind::Literal],
        Some(sh::IRI_OR_LITERAL) => &[NodeKind::Iri, NodeKind::Literal],
        _ => return Err(invalid(subject, sh::NODE_KIND, value)),
    };
    Ok(kinds.iter().copied().collect())
}

fn invalid(subject: &Term, predicate: &str, value: &Term) -> ShaclError {
    ShaclError::InvalidConstraint {
        shape: subject.clone(),
        predicate: predicate.to_string(),
        value: value.clone(),
    }
}
