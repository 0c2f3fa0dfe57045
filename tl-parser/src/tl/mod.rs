//! Main module for tl library functionality

pub mod ast;
pub mod formats;
pub mod grammar;
pub mod loader;
pub mod markers;
pub mod parsing;
pub mod testing;
pub mod token;

pub use ast::{
    Annotation, Category, Class, Definition, Flag, Parameter, Schema, SchemaDefinition,
    ScopeTypeEnum, Type,
};
pub use loader::{LoaderError, SchemaLoader};
pub use parsing::{parse, parse_str, ParseError};
