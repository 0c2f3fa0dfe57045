//! Scanner state
//!
//! The per-document accumulator: active category, active scope, annotations
//! waiting for the next definition, and the current line number. It is owned
//! by exactly one parse and threaded through every line-handling step.

use crate::tl::ast::{Annotation, Category, ScopeTypeEnum};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    pub category: Category,
    pub scope: ScopeTypeEnum,
    pub pending: Vec<Annotation>,
    /// 1-based number of the line being handled.
    pub line: usize,
}

/// Effect of a line claimed by a literal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Section switch; sticky until the next switch.
    Category(Category),
    /// Scope marker; sticky until the next marker.
    Scope(ScopeTypeEnum),
    /// Consumed without effect.
    Skip,
}

impl Transition {
    pub fn apply(self, state: &mut ParserState) {
        match self {
            Transition::Category(category) => {
                log::debug!("line {}: entering {} section", state.line, category);
                state.category = category;
            }
            Transition::Scope(scope) => {
                log::debug!("line {}: scope {:?} -> {:?}", state.line, state.scope, scope);
                state.scope = scope;
            }
            Transition::Skip => {
                log::trace!("line {}: skipped builtin", state.line);
            }
        }
    }
}

/// A literal pattern and the transition it triggers.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub pattern: &'static str,
    pub transition: Transition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_are_sticky() {
        let mut state = ParserState::default();
        Transition::Category(Category::Function).apply(&mut state);
        Transition::Skip.apply(&mut state);
        Transition::Scope(ScopeTypeEnum::Sync).apply(&mut state);
        Transition::Skip.apply(&mut state);

        assert_eq!(state.category, Category::Function);
        assert_eq!(state.scope, ScopeTypeEnum::Sync);
    }
}
