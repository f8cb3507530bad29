//! `rdfs:subClassOf` hierarchy over the shapes graph

use shaclgen_core::vocab::rdfs;
use shaclgen_core::{GraphStore, Term};
use std::collections::{HashMap, HashSet, VecDeque};

/// Class hierarchy: direct parents and children per class, in assertion order
#[derive(Debug, Clone, Default)]
pub struct ClassHierarchy {
    parents: HashMap<Term, Vec<Term>>,
    children: HashMap<Term, Vec<Term>>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `rdfs:subClassOf` edges from a store
    pub fn from_store(store: &GraphStore) -> Self {
        let mut hierarchy = Self::new();
        for triple in store.triples() {
            if triple.predicate.as_str() == rdfs::SUB_CLASS_OF {
                hierarchy.add_edge(triple.subject.clone(), triple.object.clone());
            }
        }
        hierarchy
    }

    /// Record `child rdfs:subClassOf parent`; self-edges are ignored
    pub fn add_edge(&mut self, child: Term, parent: Term) {
        if child == parent {
            return;
        }
        let parents = self.parents.entry(child.clone()).or_default();
        if !parents.contains(&parent) {
            parents.push(parent.clone());
        }
        let children = self.children.entry(parent).or_default();
        if !children.contains(&child) {
            children.push(child);
        }
    }

    pub fn parents(&self, class: &Term) -> &[Term] {
        self.parents.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn children(&self, class: &Term) -> &[Term] {
        self.children.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Transitive superclasses, breadth-first, without duplicates or `class` itself
    pub fn ancestors(&self, class: &Term) -> Vec<Term> {
        Self::closure(class, |c| self.parents(c))
    }

    /// Transitive subclasses, breadth-first, without duplicates or `class` itself
    pub fn descendants(&self, class: &Term) -> Vec<Term> {
        Self::closure(class, |c| self.children(c))
    }

    pub fn is_subclass_of(&self, class: &Term, ancestor: &Term) -> bool {
        self.ancestors(class).iter().any(|c| c == ancestor)
    }

    fn closure<'a, F>(start: &Term, next: F) -> Vec<Term>
    where
        F: Fn(&Term) -> &'a [Term],
    {
        let mut visited: HashSet<&Term> = HashSet::from([start]);
        let mut queue: VecDeque<&Term> = VecDeque::from([start]);
        let mut result = Vec::new();

        while let Some(current) = queue.pop_front() {
            for related in next(current) {
                if visited.insert(related) {
                    result.push(related.clone());
                    queue.push_back(related);
                }
            }
        }

        result
    }
}
