//! Testing utilities
//!
//! Sample documents and a fluent assertion API over parsed schemas:
//!
//! ```rust
//! use tl_parser::tl::ast::Category;
//! use tl_parser::tl::testing::{assert_schema, samples};
//!
//! let schema = samples::parse(samples::MTPROTO);
//! assert_schema(&schema)
//!     .definition_count(6)
//!     .definition(0, |d| {
//!         d.name("resPQ").category(Category::Type).param_count(4);
//!     });
//! ```
//!
//! Tests should assert on parsed structure through this API rather than on
//! debug strings, and should load their input from [`samples`] where a sample
//! covers the case.

use crate::tl::ast::{Category, Schema, SchemaDefinition, ScopeTypeEnum};

/// Sample TL documents shared by unit and integration tests.
pub mod samples {
    use crate::tl::ast::Schema;
    use crate::tl::parsing::parse_str;

    /// A slice of the MTProto service schema with scopes, classes and a layer.
    pub const MTPROTO: &str = "\
// Authorization key creation
///@class ResPQ @description Server response to req_pq
//@description Server nonce and fingerprints @nonce Client nonce
resPQ#05162463 nonce:int128 server_nonce:int128 pq:bytes server_public_key_fingerprints:Vector<long> = ResPQ;
// Scope End

vector#1cb5c415 {t:Type} # [ t ] = Vector t;

// System messages
//@class Pong @description Reply to a ping
pong#347773c5 msg_id:long ping_id:long = Pong;
msgs_ack#62d6b459 msg_ids:Vector<long> = MsgsAck;

// Base Type Definitions
boolFalse#bc799737 = Bool;
boolTrue#997275b5 = Bool;

---functions---

// Main application API
//@description Checks the connection
//@ping_id Random identifier
ping#7abe77ec ping_id:long = Pong;

// LAYER 133
";

    /// Functions only, no classes, no scopes.
    pub const FUNCTIONS_ONLY: &str = "\
---functions---
ping#7abe77ec ping_id:long = Pong;
invokeWithLayer#da9b0d0d {X:Type} layer:int query:!X = X;
";

    /// Types only, mixing `///` documentation comments with plain prose.
    pub const TYPES_ONLY: &str = "\
// A plain comment
/// @description is not an annotation once normalized
//@description A user @id Identifier @first_name First name
user#12345 id:long first_name:string = User;
userEmpty#d3bc4b7a id:long = User;
";

    /// Parse a sample, panicking on failure.
    pub fn parse(source: &str) -> Schema {
        match parse_str(source) {
            Ok(schema) => schema,
            Err(err) => panic!("sample failed to parse: {err}"),
        }
    }
}

/// Start a fluent assertion over a schema.
pub fn assert_schema(schema: &Schema) -> SchemaAssertion<'_> {
    SchemaAssertion { schema }
}

pub struct SchemaAssertion<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaAssertion<'a> {
    pub fn definition_count(self, expected: usize) -> Self {
        assert_eq!(
            self.schema.definitions.len(),
            expected,
            "definition count mismatch"
        );
        self
    }

    pub fn class_count(self, expected: usize) -> Self {
        assert_eq!(self.schema.classes.len(), expected, "class count mismatch");
        self
    }

    pub fn class(self, index: usize, name: &str, description: &str) -> Self {
        let class = self
            .schema
            .classes
            .get(index)
            .unwrap_or_else(|| panic!("no class at index {index}"));
        assert_eq!(class.name, name, "class {index} name");
        assert_eq!(class.description, description, "class {index} description");
        self
    }

    pub fn layer(self, expected: Option<u32>) -> Self {
        assert_eq!(self.schema.layer, expected, "layer mismatch");
        self
    }

    pub fn all_categories(self, expected: Category) -> Self {
        for (i, d) in self.schema.definitions.iter().enumerate() {
            assert_eq!(d.category, expected, "definition {i} category");
        }
        self
    }

    pub fn definition<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(DefinitionAssertion<'a>),
    {
        let def = self
            .schema
            .definitions
            .get(index)
            .unwrap_or_else(|| panic!("no definition at index {index}"));
        check(DefinitionAssertion { def, index });
        self
    }
}

pub struct DefinitionAssertion<'a> {
    def: &'a SchemaDefinition,
    index: usize,
}

impl<'a> DefinitionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.def.definition.full_name(),
            expected,
            "definition {} name",
            self.index
        );
        self
    }

    pub fn id(self, expected: u32) -> Self {
        assert_eq!(
            self.def.definition.id, expected,
            "definition {} id",
            self.index
        );
        self
    }

    pub fn category(self, expected: Category) -> Self {
        assert_eq!(self.def.category, expected, "definition {} category", self.index);
        self
    }

    pub fn scope(self, expected: ScopeTypeEnum) -> Self {
        assert_eq!(self.def.scope, expected, "definition {} scope", self.index);
        self
    }

    pub fn result(self, expected: &str) -> Self {
        assert_eq!(
            self.def.definition.result.to_string(),
            expected,
            "definition {} result type",
            self.index
        );
        self
    }

    pub fn param_count(self, expected: usize) -> Self {
        assert_eq!(
            self.def.definition.params.len(),
            expected,
            "definition {} parameter count",
            self.index
        );
        self
    }

    /// Parameter name and rendered type, e.g. `param(0, "ping_id", "long")`.
    pub fn param(self, index: usize, name: &str, ty: &str) -> Self {
        let param = self
            .def
            .definition
            .params
            .get(index)
            .unwrap_or_else(|| panic!("definition {} has no parameter {index}", self.index));
        assert_eq!(param.name, name, "definition {} parameter {index}", self.index);
        assert_eq!(
            param.ty.to_string(),
            ty,
            "definition {} parameter {index} type",
            self.index
        );
        self
    }

    pub fn annotation_count(self, expected: usize) -> Self {
        assert_eq!(
            self.def.annotations.len(),
            expected,
            "definition {} annotation count",
            self.index
        );
        self
    }

    pub fn annotation(self, index: usize, name: &str, value: &str) -> Self {
        let a = self
            .def
            .annotations
            .get(index)
            .unwrap_or_else(|| panic!("definition {} has no annotation {index}", self.index));
        assert_eq!(a.name, name, "definition {} annotation {index} name", self.index);
        assert_eq!(a.value, value, "definition {} annotation {index} value", self.index);
        self
    }

    pub fn renders_as(self, expected: &str) -> Self {
        assert_eq!(
            self.def.definition.render(),
            expected,
            "definition {} canonical text",
            self.index
        );
        self
    }
}
