//! Token classification
//!
//! Section switches and the builtin vector declarations are recognized by
//! exact equality with the normalized line. The generic vector type is
//! implicit and never becomes a definition.

use super::state::{Rule, Transition};
use crate::tl::ast::Category;
use crate::tl::markers;

pub const TOKEN_RULES: &[Rule] = &[
    Rule {
        pattern: markers::FUNCTIONS_SECTION,
        transition: Transition::Category(Category::Function),
    },
    Rule {
        pattern: markers::TYPES_SECTION,
        transition: Transition::Category(Category::Type),
    },
    Rule {
        pattern: markers::VECTOR_DEFINITION,
        transition: Transition::Skip,
    },
    Rule {
        pattern: markers::VECTOR_DEFINITION_WITH_ID,
        transition: Transition::Skip,
    },
];

/// Match a normalized line against [`TOKEN_RULES`].
pub fn classify_token(line: &str) -> Option<Transition> {
    TOKEN_RULES
        .iter()
        .find(|rule| rule.pattern == line)
        .map(|rule| rule.transition)
}
