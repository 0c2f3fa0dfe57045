//! Document scanner
//!
//! A single forward pass over the input. Each line goes through the steps
//! below in order and the first step that claims it ends its processing:
//!
//! 1. [`normalize`](super::normalize): blank lines are dropped
//! 2. [`classify_token`](super::classify): section switches, builtin vector
//! 3. [`detect_scope`](super::scope): scope markers
//! 4. [`extract_layer`](super::layer): observed, never claims
//! 5. [`harvest`](super::annotations): `//@` lines
//! 6. plain `//` comments are dropped
//! 7. [`finalize`](super::finalize): everything else is a declaration
//!
//! Each definition is appended as soon as its line is parsed, so nothing is
//! left pending when the input ends.

use super::annotations::harvest;
use super::classify::classify_token;
use super::finalize::finalize;
use super::layer::extract_layer;
use super::normalize::normalize;
use super::scope::detect_scope;
use super::state::ParserState;
use super::ParseError;
use crate::tl::ast::Schema;
use crate::tl::markers;
use std::io::BufRead;

pub(crate) struct SchemaParser {
    state: ParserState,
    schema: Schema,
}

impl SchemaParser {
    pub(crate) fn new() -> Self {
        SchemaParser {
            state: ParserState::default(),
            schema: Schema::default(),
        }
    }

    pub(crate) fn feed_line(&mut self, raw: &str) -> Result<(), ParseError> {
        self.state.line += 1;
        let Some(line) = normalize(raw) else {
            return Ok(());
        };
        let line = line.as_ref();

        if let Some(transition) = classify_token(line).or_else(|| detect_scope(line)) {
            transition.apply(&mut self.state);
            return Ok(());
        }
        if let Some(layer) = extract_layer(line, self.state.line)? {
            log::debug!("line {}: layer {}", self.state.line, layer);
            self.schema.layer = Some(layer);
        }
        if line.starts_with(markers::ANNOTATION) {
            return harvest(line, &mut self.state, &mut self.schema.classes);
        }
        if line.starts_with(markers::COMMENT) {
            return Ok(());
        }

        let definition = finalize(line, &mut self.state)?;
        self.schema.definitions.push(definition);
        Ok(())
    }

    pub(crate) fn finish(self) -> Schema {
        if !self.state.pending.is_empty() {
            log::debug!(
                "{} trailing annotation(s) without a definition dropped",
                self.state.pending.len()
            );
        }
        log::info!(
            "parsed {} definition(s), {} class(es), {} line(s)",
            self.schema.definitions.len(),
            self.schema.classes.len(),
            self.state.line
        );
        self.schema
    }
}

/// Parse a whole document from a buffered reader.
///
/// Any error aborts the parse; no partial schema is returned.
pub fn parse<R: BufRead>(reader: R) -> Result<Schema, ParseError> {
    let mut parser = SchemaParser::new();
    for line in reader.lines() {
        parser.feed_line(&line?)?;
    }
    Ok(parser.finish())
}

/// Parse a whole document held in memory.
pub fn parse_str(source: &str) -> Result<Schema, ParseError> {
    parse(source.as_bytes())
}

impl std::str::FromStr for Schema {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}
