// Shared shapes graph builders for transform tests
#![allow(dead_code)]

use shaclgen_core::vocab::{rdf, rdfs, sh, xsd};
use shaclgen_core::{Iri, Literal, PrefixMap, Term, Triple};
use shaclgen_shacl::ShapesGraph;

pub const EX: &str = "http://example.org/";

pub fn ex(local: &str) -> Term {
    Term::iri(format!("{}{}", EX, local))
}

pub fn ex_iri(local: &str) -> String {
    format!("{}{}", EX, local)
}

pub fn int(value: i64) -> Term {
    Literal::integer(value).into()
}

pub fn string(value: &str) -> Term {
    Literal::string(value).into()
}

pub fn boolean(value: bool) -> Term {
    Literal::boolean(value).into()
}

pub fn iri(value: &str) -> Term {
    Term::iri(value)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Accumulates shape triples
#[derive(Default)]
pub struct Shapes {
    triples: Vec<Triple>,
    blank_nodes: usize,
}

impl Shapes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subject: &Term, predicate: &str, object: Term) -> &mut Self {
        self.triples.push(Triple::new(subject.clone(), predicate, object));
        self
    }

    pub fn blank(&mut self) -> Term {
        self.blank_nodes += 1;
        Term::blank(format!("b{}", self.blank_nodes))
    }

    /// `ex:<local>` typed as a node shape and an `rdfs:Class`
    pub fn node_shape(&mut self, local: &str) -> Term {
        let shape = ex(local);
        self.add(&shape, rdf::TYPE, iri(sh::NODE_SHAPE));
        self.add(&shape, rdf::TYPE, iri(rdfs::CLASS));
        shape
    }

    pub fn sub_class_of(&mut self, child: &Term, parent: &Term) {
        self.add(child, rdfs::SUB_CLASS_OF, parent.clone());
    }

    /// Blank property shape on `node` with a predicate path
    pub fn property(&mut self, node: &Term, path: &str, constraints: Vec<(&str, Term)>) -> Term {
        let property = self.inline(constraints);
        self.add(&property, sh::PATH, iri(path));
        self.add(node, sh::PROPERTY, property.clone());
        property
    }

    /// Blank shape with the given constraints
    pub fn inline(&mut self, constraints: Vec<(&str, Term)>) -> Term {
        let shape = self.blank();
        for (predicate, object) in constraints {
            self.add(&shape, predicate, object);
        }
        shape
    }

    /// RDF list of the given items
    pub fn list(&mut self, items: Vec<Term>) -> Term {
        let mut head = iri(rdf::NIL);
        for item in items.into_iter().rev() {
            let cell = self.blank();
            self.add(&cell, rdf::FIRST, item);
            self.add(&cell, rdf::REST, head);
            head = cell;
        }
        head
    }

    pub fn triples(&self) -> Vec<Triple> {
        self.triples.clone()
    }

    pub fn build(&self) -> ShapesGraph {
        let mut prefixes = PrefixMap::with_defaults();
        prefixes.insert("ex", EX);
        ShapesGraph::from_triples(self.triples(), prefixes).expect("valid shapes graph")
    }
}

/// `sh:datatype xsd:string`
pub fn string_datatype() -> (&'static str, Term) {
    (sh::DATATYPE, Term::Iri(Iri::new(xsd::STRING)))
}

pub fn min_count(count: i64) -> (&'static str, Term) {
    (sh::MIN_COUNT, int(count))
}

pub fn max_count(count: i64) -> (&'static str, Term) {
    (sh::MAX_COUNT, int(count))
}
