//! TL writer
//!
//! Re-emits a [`Schema`] as TL text that parses back into the same definitions
//! (category and canonical text, in order) and classes. Scopes are parse-time
//! metadata and are not written.
//!
//! Section headers are re-derived from category changes, starting from the
//! types section. A class is described once, right before the first
//! definition whose result type carries its name.

use super::registry::{FormatError, Formatter};
use crate::tl::ast::{
    render_single_line, Annotation, Category, Class, Schema, ANNOTATION_CLASS,
    ANNOTATION_DESCRIPTION,
};
use crate::tl::markers;
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

/// Render a schema as TL text.
pub fn write_schema(schema: &Schema) -> String {
    let classes: HashMap<&str, &Class> = schema
        .classes
        .iter()
        .map(|class| (class.name.as_str(), class))
        .collect();
    let mut described: HashSet<&str> = HashSet::new();
    let mut category = Category::Type;

    let mut out = String::new();
    for d in &schema.definitions {
        if d.category != category {
            category = d.category;
            out.push('\n');
            out.push_str(section_token(category));
            out.push_str("\n\n");
        }

        let result = d.definition.result.full_name();
        if let Some(class) = classes.get(result.as_str()) {
            if described.insert(class.name.as_str()) {
                out.push_str(&render_single_line(&[
                    Annotation::new(ANNOTATION_CLASS, class.name.as_str()),
                    Annotation::new(ANNOTATION_DESCRIPTION, class.description.as_str()),
                ]));
                out.push_str("\n\n");
            }
        }
        for a in &d.annotations {
            out.push_str(&a.render());
            out.push('\n');
        }
        out.push_str(&d.definition.render());
        out.push_str(";\n\n");
    }

    if let Some(layer) = schema.layer {
        out.push_str(markers::LAYER);
        out.push_str(&layer.to_string());
        out.push('\n');
    }
    out
}

fn section_token(category: Category) -> &'static str {
    match category {
        Category::Type => markers::TYPES_SECTION,
        Category::Function => markers::FUNCTIONS_SECTION,
    }
}

impl Schema {
    /// Render as TL text, see [`write_schema`].
    pub fn to_tl(&self) -> String {
        write_schema(self)
    }

    /// Write TL text to `w` in one go, returning the number of bytes written.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<u64> {
        let text = write_schema(self);
        w.write_all(text.as_bytes())?;
        Ok(text.len() as u64)
    }
}

/// The round-trip TL format.
pub struct TlFormatter;

impl Formatter for TlFormatter {
    fn name(&self) -> &str {
        "tl"
    }

    fn serialize(&self, schema: &Schema) -> Result<String, FormatError> {
        Ok(write_schema(schema))
    }

    fn description(&self) -> &str {
        "Canonical TL text (round-trips through the parser)"
    }
}
