//! Definition finalization
//!
//! A line that no other step claimed is a declaration. Pending annotations
//! must each name one of its parameters, except `description` and
//! `param_description`, which are always accepted.

use super::state::ParserState;
use super::ParseError;
use crate::tl::ast::{
    Annotation, Definition, SchemaDefinition, ANNOTATION_DESCRIPTION, ANNOTATION_PARAM_DESCRIPTION,
};
use crate::tl::grammar::parse_definition;
use std::collections::HashSet;

/// Parse `line` and assemble it with the pending annotations.
///
/// Category and scope are left untouched; pending annotations are drained.
pub fn finalize(line: &str, state: &mut ParserState) -> Result<SchemaDefinition, ParseError> {
    let definition = parse_definition(line).map_err(|source| ParseError::Definition {
        line: state.line,
        source,
    })?;
    if let Some(name) = unknown_annotation(&definition, &state.pending) {
        return Err(ParseError::UnknownAnnotation {
            line: state.line,
            name: name.to_string(),
        });
    }

    log::trace!(
        "line {}: {} {}",
        state.line,
        state.category,
        definition.full_name()
    );
    Ok(SchemaDefinition {
        scope: state.scope,
        annotations: std::mem::take(&mut state.pending),
        definition,
        category: state.category,
    })
}

/// First annotation that documents no parameter of `definition`.
pub fn unknown_annotation<'a>(
    definition: &Definition,
    annotations: &'a [Annotation],
) -> Option<&'a str> {
    let params: HashSet<&str> = definition.params.iter().map(|p| p.name.as_str()).collect();
    annotations
        .iter()
        .map(|a| a.name.as_str())
        .find(|name| {
            *name != ANNOTATION_DESCRIPTION
                && *name != ANNOTATION_PARAM_DESCRIPTION
                && !params.contains(name)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tl::ast::{Category, ScopeTypeEnum};

    fn state_with(pending: Vec<Annotation>) -> ParserState {
        ParserState {
            category: Category::Function,
            scope: ScopeTypeEnum::Transport,
            pending,
            line: 4,
        }
    }

    #[test]
    fn test_assembles_definition() {
        let mut state = state_with(vec![
            Annotation::new("description", "Ping"),
            Annotation::new("ping_id", "Id"),
        ]);
        let def = finalize("ping#7abe77ec ping_id:long = Pong;", &mut state).unwrap();

        assert_eq!(def.category, Category::Function);
        assert_eq!(def.scope, ScopeTypeEnum::Transport);
        assert_eq!(def.annotations.len(), 2);
        assert!(state.pending.is_empty());
        assert_eq!(state.category, Category::Function);
        assert_eq!(state.scope, ScopeTypeEnum::Transport);
    }

    #[test]
    fn test_param_description_is_accepted() {
        let mut state = state_with(vec![Annotation::new("param_description", "About")]);
        assert!(finalize("ping#7abe77ec ping_id:long = Pong;", &mut state).is_ok());
    }

    #[test]
    fn test_unknown_annotation() {
        let mut state = state_with(vec![Annotation::new("pong_id", "Id")]);
        let err = finalize("ping#7abe77ec ping_id:long = Pong;", &mut state).unwrap_err();
        match err {
            ParseError::UnknownAnnotation { line, name } => {
                assert_eq!(line, 4);
                assert_eq!(name, "pong_id");
            }
            other => panic!("Expected unknown annotation error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_definition() {
        let mut state = state_with(Vec::new());
        let err = finalize("ping ping_id:long", &mut state).unwrap_err();
        assert!(matches!(err, ParseError::Definition { line: 4, .. }));
        assert_eq!(
            err.to_string(),
            "failed to parse line 4: definition: missing '=' between declaration and result type"
        );
    }
}
