//! Prefix maps and CURIE shrinking

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Iri;
use crate::vocab::{owl, rdf, rdfs, sh, xsd};
use crate::CoreError;

/// Compact URI (`prefix:local`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Curie {
    pub prefix: String,
    pub local: String,
}

impl fmt::Display for Curie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.local)
    }
}

/// Ordered prefix -> namespace bindings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixMap {
    bindings: Vec<(String, String)>,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix map with the W3C vocabularies bound
    pub fn with_defaults() -> Self {
        let mut map = Self::new();
        map.insert("owl", owl::NS);
        map.insert("rdf", rdf::NS);
        map.insert("rdfs", rdfs::NS);
        map.insert("sh", sh::NS);
        map.insert("xsd", xsd::NS);
        map
    }

    /// Bind a prefix, replacing any earlier binding of the same prefix
    pub fn insert<P: Into<String>, N: Into<String>>(&mut self, prefix: P, namespace: N) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.bindings.iter_mut().find(|(p, _)| *p == prefix) {
            Some(binding) => binding.1 = namespace,
            None => self.bindings.push((prefix, namespace)),
        }
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Shrink an IRI to a CURIE against the longest matching namespace.
    ///
    /// The local part must be non-empty and must not contain `/`, `#` or `?`.
    pub fn shrink(&self, iri: &Iri) -> Option<Curie> {
        let value = iri.as_str();
        self.bindings
            .iter()
            .filter(|(_, ns)| !ns.is_empty() && value.starts_with(ns.as_str()))
            .filter_map(|(prefix, ns)| {
                let local = &value[ns.len()..];
                if local.is_empty() || local.contains(['/', '#', '?']) {
                    None
                } else {
                    Some((ns.len(), prefix, local))
                }
            })
            .max_by_key(|(ns_len, _, _)| *ns_len)
            .map(|(_, prefix, local)| Curie {
                prefix: prefix.clone(),
                local: local.to_string(),
            })
    }

    /// Expand `prefix:local` into a full IRI
    pub fn expand(&self, curie: &str) -> Result<Iri, CoreError> {
        let (prefix, local) = curie
            .split_once(':')
            .ok_or_else(|| CoreError::InvalidCurie(curie.to_string()))?;
        let namespace = self
            .namespace(prefix)
            .ok_or_else(|| CoreError::UnknownPrefix(prefix.to_string()))?;
        Ok(Iri::new(format!("{}{}", namespace, local)))
    }
}
