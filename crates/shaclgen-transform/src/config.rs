use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifiers that collide with common target-language keywords and globals
const DEFAULT_RESERVED_IDENTIFIERS: &[&str] = &[
    "abstract",
    "class",
    "const",
    "default",
    "enum",
    "export",
    "extends",
    "function",
    "import",
    "in",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "type",
    "typeof",
    "var",
    "void",
    "while",
    "yield",
    "Object",
    "String",
    "Number",
    "Boolean",
    "Array",
];

/// Transformer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Names the sanitizer wraps instead of emitting verbatim
    pub reserved_identifiers: BTreeSet<String>,
    pub reserved_identifier_prefix: String,
    pub reserved_identifier_suffix: String,
    /// Used when a node shape has no `identifierPropertyName` annotation
    pub default_identifier_property_name: String,
    /// Used when a node shape has no `typeDiscriminatorPropertyName` annotation
    pub default_type_discriminator_property_name: String,
    pub default_export: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            reserved_identifiers: DEFAULT_RESERVED_IDENTIFIERS.iter().map(|s| s.to_string()).collect(),
            reserved_identifier_prefix: "_".to_string(),
            reserved_identifier_suffix: "_".to_string(),
            default_identifier_property_name: "identifier".to_string(),
            default_type_discriminator_property_name: "type".to_string(),
            default_export: true,
        }
    }
}

impl TransformConfig {
    /// Load a config from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_reserved(&self, identifier: &str) -> bool {
        self.reserved_identifiers.contains(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransformConfig::default();
        assert!(config.is_reserved("class"));
        assert!(config.is_reserved("String"));
        assert!(!config.is_reserved("Person"));
        assert_eq!(config.default_identifier_property_name, "identifier");
        assert_eq!(config.default_type_discriminator_property_name, "type");
        assert!(config.default_export);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TransformConfig::from_json_str(
            r#"{"default_export": false, "reserved_identifiers": ["Thing"]}"#,
        )
        .unwrap();
        assert!(!config.default_export);
        assert!(config.is_reserved("Thing"));
        assert!(!config.is_reserved("class"));
        assert_eq!(config.reserved_identifier_prefix, "_");
    }

    #[test]
    fn test_invalid_json() {
        assert!(TransformConfig::from_json_str("{\"default_export\": 3}").is_err());
    }
}
