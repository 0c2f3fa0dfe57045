//! Annotation grammar
//!
//! `//@name value @other value` lines carry one or more name/value pairs. A
//! pair starts at an `@name` at the beginning of the line or right after
//! whitespace, so an `@` inside a word (an e-mail address, say) stays part of
//! the value.

use crate::tl::ast::Annotation;
use crate::tl::markers;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static PAIR_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)@([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex"));

/// Errors produced while parsing an annotation line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("annotation line must start with {:?}", markers::ANNOTATION)]
    MissingPrefix,
    #[error("annotation name expected after '@'")]
    MissingName,
    #[error("annotation {0:?} has no value")]
    EmptyValue(String),
}

/// Parse an annotation line into its ordered name/value pairs.
pub fn parse_annotation_line(line: &str) -> Result<Vec<Annotation>, AnnotationError> {
    let body = line
        .trim()
        .strip_prefix(markers::COMMENT)
        .filter(|rest| rest.starts_with('@'))
        .ok_or(AnnotationError::MissingPrefix)?;

    let starts: Vec<_> = PAIR_START.captures_iter(body).collect();
    match starts.first().and_then(|c| c.get(0)) {
        Some(m) if m.start() == 0 => {}
        _ => return Err(AnnotationError::MissingName),
    }

    let mut annotations = Vec::with_capacity(starts.len());
    for (i, captures) in starts.iter().enumerate() {
        let name = match captures.get(1) {
            Some(name) => name,
            None => return Err(AnnotationError::MissingName),
        };
        let value_end = starts
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(body.len(), |m| m.start());
        let value = body[name.end()..value_end].trim();
        if value.is_empty() {
            return Err(AnnotationError::EmptyValue(name.as_str().to_string()));
        }
        annotations.push(Annotation::new(name.as_str(), value));
    }
    Ok(annotations)
}
