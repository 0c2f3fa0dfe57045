//! Layer extraction
//!
//! `// LAYER 42` records the schema version. Detection is an observation, not
//! an exclusive claim: the line still continues down the scanner, where it is
//! dropped as a plain comment.

use super::ParseError;
use crate::tl::markers;

/// Parse the layer number of a `// LAYER N` line.
///
/// Returns `Ok(None)` for any other line.
pub fn extract_layer(line: &str, line_number: usize) -> Result<Option<u32>, ParseError> {
    let Some(literal) = line.strip_prefix(markers::LAYER) else {
        return Ok(None);
    };
    literal
        .parse::<u32>()
        .map(Some)
        .map_err(|source| ParseError::Layer {
            line: line_number,
            literal: literal.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer() {
        assert_eq!(extract_layer("// LAYER 133", 1).unwrap(), Some(133));
        assert_eq!(extract_layer("// Layer 133", 1).unwrap(), None);
        assert_eq!(extract_layer("ping = Pong", 1).unwrap(), None);
    }

    #[test]
    fn test_malformed_layer() {
        let err = extract_layer("// LAYER abc", 7).unwrap_err();
        match &err {
            ParseError::Layer { line, literal, .. } => {
                assert_eq!(*line, 7);
                assert_eq!(literal, "abc");
            }
            other => panic!("Expected layer error, got {other:?}"),
        }
        assert!(err.to_string().contains("\"abc\""));
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_negative_layer_is_rejected() {
        assert!(extract_layer("// LAYER -1", 1).is_err());
    }
}
