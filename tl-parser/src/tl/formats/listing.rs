//! Definition listing
//!
//! A flat dump of every definition with its category, result type and the
//! 32-bit id as code generators see it:
//!
//! ```text
//! // function: Pong, Definition: ping, int32(crc32): 2059302892
//! ping#7abe77ec ping_id:long = Pong
//! ```

use super::registry::{FormatError, Formatter};
use crate::tl::ast::Schema;
use std::fmt::Write;

pub struct ListingFormatter {
    /// Print ids as signed 32-bit integers rather than hex.
    pub signed_ids: bool,
}

impl Default for ListingFormatter {
    fn default() -> Self {
        ListingFormatter { signed_ids: true }
    }
}

impl Formatter for ListingFormatter {
    fn name(&self) -> &str {
        "listing"
    }

    fn serialize(&self, schema: &Schema) -> Result<String, FormatError> {
        let mut out = String::new();
        for d in &schema.definitions {
            let def = &d.definition;
            let id = if self.signed_ids {
                format!("int32(crc32): {}", def.id as i32)
            } else {
                format!("crc32: {:#010x}", def.id)
            };
            writeln!(
                out,
                "// {}: {}, Definition: {}, {}",
                d.category,
                def.result.full_name(),
                def.full_name(),
                id
            )
            .and_then(|_| writeln!(out, "{def}"))
            .and_then(|_| writeln!(out))
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "One commented line per definition with its signed 32-bit id"
    }
}
