//! Scope detection
//!
//! Scope markers are comment lines ending in a fixed phrase. Matching is
//! suffix-based, so any amount of leading slashes or spaces is tolerated.
//! Rules are tried in order; `Scope End` returns to [`ScopeTypeEnum::Empty`].

use super::state::{Rule, Transition};
use crate::tl::ast::ScopeTypeEnum;
use crate::tl::markers;

pub const SCOPE_RULES: &[Rule] = &[
    Rule {
        pattern: markers::SCOPE_HANDSHAKE,
        transition: Transition::Scope(ScopeTypeEnum::Handshake),
    },
    Rule {
        pattern: markers::SCOPE_TRANSPORT,
        transition: Transition::Scope(ScopeTypeEnum::Transport),
    },
    Rule {
        pattern: markers::SCOPE_SYNC,
        transition: Transition::Scope(ScopeTypeEnum::Sync),
    },
    Rule {
        pattern: markers::SCOPE_CORE_TYPES,
        transition: Transition::Scope(ScopeTypeEnum::CoreTypes),
    },
    Rule {
        pattern: markers::SCOPE_END,
        transition: Transition::Scope(ScopeTypeEnum::Empty),
    },
];

/// Match a normalized comment line against [`SCOPE_RULES`].
///
/// Lines that are not comments are declined immediately.
pub fn detect_scope(line: &str) -> Option<Transition> {
    if !line.starts_with(markers::COMMENT) {
        return None;
    }
    SCOPE_RULES
        .iter()
        .find(|rule| line.ends_with(rule.pattern))
        .map(|rule| rule.transition)
}

/// Scope a line switches to, if it is a scope marker.
pub fn parse_scope(line: &str) -> Option<ScopeTypeEnum> {
    match detect_scope(line)? {
        Transition::Scope(scope) => Some(scope),
        _ => None,
    }
}
