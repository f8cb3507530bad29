//! Name resolution and identifier sanitizing

use shaclgen_ast::{Name, PropertyPathName};
use shaclgen_core::{Iri, PrefixMap};
use shaclgen_shacl::Shape;

use crate::config::TransformConfig;

/// Picks a name for a shape from its naming hints
///
/// Candidates, first present wins:
/// 1. explicit name annotation
/// 2. label, spaces replaced with `_`
/// 3. the shape's CURIE, `:` replaced with `_`
/// 4. property shapes: the path's CURIE, then the path IRI
/// 5. the shape identifier in N-Triples form
///
/// Every candidate goes through [`NameResolver::sanitize`].
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    prefixes: &'a PrefixMap,
    config: &'a TransformConfig,
}

impl<'a> NameResolver<'a> {
    pub fn new(prefixes: &'a PrefixMap, config: &'a TransformConfig) -> Self {
        Self { prefixes, config }
    }

    pub fn resolve_name(&self, shape: &Shape) -> Name {
        let curie = self.shrink(shape.identifier.as_iri());
        let property_path = shape
            .path()
            .and_then(|path| path.as_predicate())
            .map(|predicate| PropertyPathName {
                identifier: predicate.clone(),
                curie: self.shrink(Some(predicate)),
            });

        let candidate = shape
            .annotations
            .name
            .clone()
            .or_else(|| shape.annotations.label.as_ref().map(|label| label.replace(' ', "_")))
            .or_else(|| curie.as_ref().map(|curie| curie.replace(':', "_")))
            .or_else(|| {
                property_path.as_ref().map(|path| match &path.curie {
                    Some(curie) => curie.replace(':', "_"),
                    None => path.identifier.as_str().to_string(),
                })
            })
            .unwrap_or_else(|| shape.identifier.to_string());

        Name {
            identifier: shape.identifier.clone(),
            curie,
            human_label: shape.annotations.label.clone(),
            explicit_override: shape.annotations.name.clone(),
            property_path,
            sanitized_name: self.sanitize(&candidate),
        }
    }

    /// Turn a candidate into a valid identifier
    ///
    /// Reserved identifiers are wrapped with the configured prefix and
    /// suffix. Anything else has each character outside `[A-Za-z0-9_]`
    /// replaced by `_<code point>_`, and a leading digit gets a `_` prefix.
    pub fn sanitize(&self, candidate: &str) -> String {
        if self.config.is_reserved(candidate) {
            return format!(
                "{}{}{}",
                self.config.reserved_identifier_prefix, candidate, self.config.reserved_identifier_suffix
            );
        }

        let mut sanitized = String::with_capacity(candidate.len());
        if candidate.is_empty() || candidate.starts_with(|c: char| c.is_ascii_digit()) {
            sanitized.push('_');
        }
        for c in candidate.chars() {
            if c.is_ascii_alphanumeric() || c == '_' {
                sanitized.push(c);
            } else {
                sanitized.push_str(&format!("_{}_", c as u32));
            }
        }
        sanitized
    }

    fn shrink(&self, iri: Option<&Iri>) -> Option<String> {
        iri.and_then(|iri| self.prefixes.shrink(iri)).map(|curie| curie.to_string())
    }
}
