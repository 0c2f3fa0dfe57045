//! Document-level parsing
//!
//! Turns a TL document into a [`Schema`](crate::tl::ast::Schema). See
//! [`parser`] for the order in which lines are classified.

pub mod annotations;
pub mod classify;
pub mod finalize;
pub mod layer;
pub mod normalize;
pub mod parser;
pub mod scope;
pub mod state;

use crate::tl::grammar::{AnnotationError, DefinitionError};
use std::num::ParseIntError;
use thiserror::Error;

pub use parser::{parse, parse_str};
pub use scope::parse_scope;
pub use state::{ParserState, Transition};

/// Errors that abort a document parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failure of the underlying reader
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to parse layer {literal:?} on line {line}: {source}")]
    Layer {
        line: usize,
        literal: String,
        #[source]
        source: ParseIntError,
    },
    #[error("failed to parse line {line}: {source}")]
    Annotation {
        line: usize,
        #[source]
        source: AnnotationError,
    },
    #[error("failed to parse line {line}: can't find param for annotation {name:?}")]
    UnknownAnnotation { line: usize, name: String },
    #[error("failed to parse line {line}: definition: {source}")]
    Definition {
        line: usize,
        #[source]
        source: DefinitionError,
    },
}

impl ParseError {
    /// Line the error was found on, if it relates to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Io(_) => None,
            ParseError::Layer { line, .. }
            | ParseError::Annotation { line, .. }
            | ParseError::UnknownAnnotation { line, .. }
            | ParseError::Definition { line, .. } => Some(*line),
        }
    }
}
