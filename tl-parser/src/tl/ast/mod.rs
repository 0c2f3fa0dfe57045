//! Schema model types
//!
//! [`Schema`] is the single data product of parsing. Once returned it is an
//! immutable snapshot: nothing in this crate mutates it afterwards, so it may be
//! shared freely between readers.

pub mod annotation;
pub mod definition;
pub mod schema;
pub mod scope;

pub use annotation::{
    render_single_line, Annotation, ANNOTATION_CLASS, ANNOTATION_DESCRIPTION,
    ANNOTATION_PARAM_DESCRIPTION,
};
pub use definition::{Definition, Flag, Parameter, Type};
pub use schema::{Category, Class, Schema, SchemaDefinition};
pub use scope::ScopeTypeEnum;
