//! Indexed in-memory triple store

use crate::model::{Iri, Term, Triple};
use smallvec::SmallVec;
use std::collections::HashMap;

/// In-memory graph with subject and object indexing for fast lookups
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    triples: Vec<Triple>,
    /// Subject index: subject -> list of triple indices
    subject_index: HashMap<Term, SmallVec<[usize; 8]>>,
    /// Object index: object -> list of triple indices
    object_index: HashMap<Term, SmallVec<[usize; 8]>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_triples<I: IntoIterator<Item = Triple>>(triples: I) -> Self {
        let mut store = Self::new();
        for triple in triples {
            store.add_triple(triple);
        }
        store
    }

    /// Add a triple, ignoring exact duplicates
    pub fn add_triple(&mut self, triple: Triple) {
        if self.contains(&triple) {
            return;
        }
        let index = self.triples.len();
        self.subject_index
            .entry(triple.subject.clone())
            .or_insert_with(SmallVec::new)
            .push(index);
        self.object_index
            .entry(triple.object.clone())
            .or_insert_with(SmallVec::new)
            .push(index);
        self.triples.push(triple);
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.subject_index
            .get(&triple.subject)
            .map(|indices| indices.iter().any(|&i| self.triples[i] == *triple))
            .unwrap_or(false)
    }

    /// All triples in insertion order
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Objects of `subject predicate ?o`, in insertion order
    pub fn objects<'a>(&'a self, subject: &Term, predicate: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.subject_index
            .get(subject)
            .into_iter()
            .flatten()
            .map(move |&i| &self.triples[i])
            .filter(move |t| t.predicate.as_str() == predicate)
            .map(|t| &t.object)
    }

    /// First object of `subject predicate ?o`
    pub fn object(&self, subject: &Term, predicate: &str) -> Option<&Term> {
        self.subject_index
            .get(subject)?
            .iter()
            .map(|&i| &self.triples[i])
            .find(|t| t.predicate.as_str() == predicate)
            .map(|t| &t.object)
    }

    /// Subjects of `?s predicate object`, in insertion order
    pub fn subjects<'a>(&'a self, predicate: &'a str, object: &Term) -> impl Iterator<Item = &'a Term> + 'a {
        self.object_index
            .get(object)
            .into_iter()
            .flatten()
            .map(move |&i| &self.triples[i])
            .filter(move |t| t.predicate.as_str() == predicate)
            .map(|t| &t.subject)
    }

    pub fn has(&self, subject: &Term, predicate: &str, object: &Term) -> bool {
        self.objects(subject, predicate).any(|o| o == object)
    }

    /// Distinct subjects in first-appearance order
    pub fn subject_terms(&self) -> Vec<&Term> {
        let mut seen = std::collections::HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.subject)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Predicates used on a subject
    pub fn predicates_of<'a>(&'a self, subject: &Term) -> impl Iterator<Item = &'a Iri> + 'a {
        self.subject_index
            .get(subject)
            .into_iter()
            .flatten()
            .map(move |&i| &self.triples[i].predicate)
    }
}
