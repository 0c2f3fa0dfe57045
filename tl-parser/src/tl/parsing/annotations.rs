//! Annotation harvesting and class registry
//!
//! `//@` lines are split into name/value pairs. A line holding both a `class`
//! and a `description` pair declares a [`Class`] and is not attached to the
//! next definition. Any other pairs accumulate until the next definition line.

use super::state::ParserState;
use super::ParseError;
use crate::tl::ast::{Annotation, Class, ANNOTATION_CLASS, ANNOTATION_DESCRIPTION};
use crate::tl::grammar::parse_annotation_line;

/// Harvest one annotation line into `state` or into the class registry.
pub fn harvest(
    line: &str,
    state: &mut ParserState,
    classes: &mut Vec<Class>,
) -> Result<(), ParseError> {
    let pairs = parse_annotation_line(line).map_err(|source| ParseError::Annotation {
        line: state.line,
        source,
    })?;

    if let Some(class) = class_declaration(&pairs) {
        log::debug!("line {}: class {}", state.line, class.name);
        classes.push(class);
        return Ok(());
    }

    log::trace!("line {}: {} pending annotation(s)", state.line, pairs.len());
    state.pending.extend(pairs);
    Ok(())
}

/// Build a class from a `//@class Name @description Text` pair set.
pub fn class_declaration(pairs: &[Annotation]) -> Option<Class> {
    let last = |name: &str| {
        pairs
            .iter()
            .rev()
            .find(|a| a.name == name)
            .map(|a| a.value.clone())
    };
    Some(Class {
        name: last(ANNOTATION_CLASS)?,
        description: last(ANNOTATION_DESCRIPTION)?,
    })
}
