//! Vocabulary IRIs used by the shape compiler

pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    pub const LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const RESOURCE: &str = "http://www.w3.org/2000/01/rdf-schema#Resource";
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
}

pub mod owl {
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";
}

pub mod xsd {
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}

/// SHACL core vocabulary
pub mod sh {
    pub const NS: &str = "http://www.w3.org/ns/shacl#";

    pub const NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
    pub const PROPERTY_SHAPE: &str = "http://www.w3.org/ns/shacl#PropertyShape";

    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";
    pub const INVERSE_PATH: &str = "http://www.w3.org/ns/shacl#inversePath";
    pub const ALTERNATIVE_PATH: &str = "http://www.w3.org/ns/shacl#alternativePath";
    pub const ZERO_OR_MORE_PATH: &str = "http://www.w3.org/ns/shacl#zeroOrMorePath";
    pub const ONE_OR_MORE_PATH: &str = "http://www.w3.org/ns/shacl#oneOrMorePath";
    pub const ZERO_OR_ONE_PATH: &str = "http://www.w3.org/ns/shacl#zeroOrOnePath";

    pub const AND: &str = "http://www.w3.org/ns/shacl#and";
    pub const OR: &str = "http://www.w3.org/ns/shacl#or";
    pub const XONE: &str = "http://www.w3.org/ns/shacl#xone";
    pub const NODE: &str = "http://www.w3.org/ns/shacl#node";
    pub const CLASS: &str = "http://www.w3.org/ns/shacl#class";
    pub const DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
    pub const NODE_KIND: &str = "http://www.w3.org/ns/shacl#nodeKind";
    pub const HAS_VALUE: &str = "http://www.w3.org/ns/shacl#hasValue";
    pub const IN: &str = "http://www.w3.org/ns/shacl#in";
    pub const DEFAULT_VALUE: &str = "http://www.w3.org/ns/shacl#defaultValue";
    pub const LANGUAGE_IN: &str = "http://www.w3.org/ns/shacl#languageIn";
    pub const MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";
    pub const MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";
    pub const MIN_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#minInclusive";
    pub const MIN_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#minExclusive";
    pub const MAX_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxInclusive";
    pub const MAX_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxExclusive";
    pub const NAME: &str = "http://www.w3.org/ns/shacl#name";
    pub const TARGET_CLASS: &str = "http://www.w3.org/ns/shacl#targetClass";

    pub const BLANK_NODE: &str = "http://www.w3.org/ns/shacl#BlankNode";
    pub const IRI: &str = "http://www.w3.org/ns/shacl#IRI";
    pub const LITERAL: &str = "http://www.w3.org/ns/shacl#Literal";
    pub const BLANK_NODE_OR_IRI: &str = "http://www.w3.org/ns/shacl#BlankNodeOrIRI";
    pub const BLANK_NODE_OR_LITERAL: &str = "http://www.w3.org/ns/shacl#BlankNodeOrLiteral";
    pub const IRI_OR_LITERAL: &str = "http://www.w3.org/ns/shacl#IRIOrLiteral";
}

/// Generator annotations layered on top of SHACL shapes
pub mod shaclgen {
    pub const NS: &str = "https://shaclgen.dev/ns#";

    pub const ABSTRACT: &str = "https://shaclgen.dev/ns#abstract";
    pub const DECLARATION_PREFERENCE: &str = "https://shaclgen.dev/ns#declarationPreference";
    pub const EXPORT: &str = "https://shaclgen.dev/ns#export";
    pub const EXTERN: &str = "https://shaclgen.dev/ns#extern";
    pub const INLINE: &str = "https://shaclgen.dev/ns#inline";
    pub const NAME: &str = "https://shaclgen.dev/ns#name";
    pub const NODE_KIND: &str = "https://shaclgen.dev/ns#nodeKind";
    pub const RDF_TYPE: &str = "https://shaclgen.dev/ns#rdfType";
    pub const VISIBILITY: &str = "https://shaclgen.dev/ns#visibility";
    pub const IDENTIFIER_MINTING_STRATEGY: &str = "https://shaclgen.dev/ns#identifierMintingStrategy";
    pub const IDENTIFIER_PROPERTY_NAME: &str = "https://shaclgen.dev/ns#identifierPropertyName";
    pub const TYPE_DISCRIMINATOR_PROPERTY_NAME: &str =
        "https://shaclgen.dev/ns#typeDiscriminatorPropertyName";

    pub const MINTING_STRATEGY_SHA256: &str = "https://shaclgen.dev/ns#_IdentifierMintingStrategy_SHA256";
    pub const MINTING_STRATEGY_UUIDV4: &str = "https://shaclgen.dev/ns#_IdentifierMintingStrategy_UUIDv4";

    pub const DECLARATION_PREFERENCE_CLASS: &str = "https://shaclgen.dev/ns#_DeclarationPreference_Class";
    pub const DECLARATION_PREFERENCE_INTERFACE: &str =
        "https://shaclgen.dev/ns#_DeclarationPreference_Interface";

    pub const VISIBILITY_PRIVATE: &str = "https://shaclgen.dev/ns#_Visibility_Private";
    pub const VISIBILITY_PROTECTED: &str = "https://shaclgen.dev/ns#_Visibility_Protected";
    pub const VISIBILITY_PUBLIC: &str = "https://shaclgen.dev/ns#_Visibility_Public";
}

/// Classes that carry no type information when used in `sh:class`
pub const NON_INFORMATIVE_CLASSES: [&str; 4] = [owl::CLASS, owl::THING, rdfs::CLASS, rdfs::RESOURCE];

pub fn is_non_informative_class(iri: &str) -> bool {
    NON_INFORMATIVE_CLASSES.contains(&iri)
}
