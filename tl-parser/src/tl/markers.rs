//! Literal markers recognized by the document scanner.
//!
//! All comparisons against these strings happen after line normalization
//! (trimmed, `///` rewritten to `//`).

/// Plain comment prefix.
pub const COMMENT: &str = "//";

/// Documentation comment prefix, normalized to [`COMMENT`].
pub const DOC_COMMENT: &str = "///";

/// Prefix of an annotation line.
pub const ANNOTATION: &str = "//@";

/// Switches the category of following definitions to functions.
pub const FUNCTIONS_SECTION: &str = "---functions---";

/// Switches the category of following definitions to types.
pub const TYPES_SECTION: &str = "---types---";

/// Schema version marker, followed by a base-10 integer.
pub const LAYER: &str = "// LAYER ";

/// Builtin generic vector declaration, never materialized as a definition.
pub const VECTOR_DEFINITION: &str = "vector {t:Type} # [ t ] = Vector t;";

/// Same as [`VECTOR_DEFINITION`] with its explicit constructor id.
pub const VECTOR_DEFINITION_WITH_ID: &str = "vector#1cb5c415 {t:Type} # [ t ] = Vector t;";

pub const SCOPE_HANDSHAKE: &str = "Authorization key creation";
pub const SCOPE_TRANSPORT: &str = "System messages";
pub const SCOPE_SYNC: &str = "Main application API";
pub const SCOPE_CORE_TYPES: &str = "Base Type Definitions";
pub const SCOPE_END: &str = "Scope End";
