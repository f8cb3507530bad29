//! Resolved names with their naming hints

use serde::{Deserialize, Serialize};
use shaclgen_core::{Iri, Term};

/// Naming hints of a property shape's path predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPathName {
    pub identifier: Iri,
    pub curie: Option<String>,
}

/// Name of an AST node
///
/// Keeps every hint that was available on the shape next to the sanitized
/// identifier, so backends can report where a name came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub identifier: Term,
    pub curie: Option<String>,
    pub human_label: Option<String>,
    pub explicit_override: Option<String>,
    pub property_path: Option<PropertyPathName>,
    pub sanitized_name: String,
}

impl Name {
    /// Name with no hints besides the identifier
    pub fn bare<S: Into<String>>(identifier: Term, sanitized_name: S) -> Self {
        Self {
            identifier,
            curie: None,
            human_label: None,
            explicit_override: None,
            property_path: None,
            sanitized_name: sanitized_name.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.sanitized_name
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sanitized_name)
    }
}
