//! Single-line grammars
//!
//! The document scanner in [`parsing`](crate::tl::parsing) hands every
//! declaration line to [`parse_definition`] and every `//@` line to
//! [`parse_annotation_line`].

pub mod annotation;
pub mod checksum;
pub mod definition;

pub use annotation::{parse_annotation_line, AnnotationError};
pub use checksum::{checksum_text, compute_id};
pub use definition::{parse_definition, DefinitionError};
