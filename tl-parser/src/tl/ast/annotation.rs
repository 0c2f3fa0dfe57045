//! Documentation annotations
//!
//! Annotations are `//@name value` pairs written above a declaration. A line
//! may hold several pairs: `//@class Pong @description Reply to a ping`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form description of the following definition.
pub const ANNOTATION_DESCRIPTION: &str = "description";

/// Name of a class (boxed type with one or more constructors).
pub const ANNOTATION_CLASS: &str = "class";

/// Description of a parameter literally named `description`, which would
/// otherwise collide with [`ANNOTATION_DESCRIPTION`].
pub const ANNOTATION_PARAM_DESCRIPTION: &str = "param_description";

/// A single name/value documentation pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub value: String,
}

impl Annotation {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Annotation {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `//@name value`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//@{} {}", self.name, self.value)
    }
}

/// Render several pairs on one line: `//@a x @b y`.
pub fn render_single_line(annotations: &[Annotation]) -> String {
    let mut out = String::from("//");
    for (i, a) in annotations.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push('@');
        out.push_str(&a.name);
        out.push(' ');
        out.push_str(&a.value);
    }
    out
}
