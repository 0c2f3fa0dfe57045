//! Structured serializations of the schema model.

use super::registry::{FormatError, Formatter};
use crate::tl::ast::Schema;

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, schema: &Schema) -> Result<String, FormatError> {
        serde_json::to_string_pretty(schema)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Schema model as JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, schema: &Schema) -> Result<String, FormatError> {
        serde_yaml::to_string(schema).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Schema model as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tl::parsing::parse_str;
    use serde_json::json;

    #[test]
    fn test_json_omits_empty_fields() {
        let schema = parse_str("---functions---\nping#7abe77ec ping_id:long = Pong;").unwrap();
        let text = JsonFormatter.serialize(&schema).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value,
            json!({
                "definitions": [{
                    "definition": {
                        "name": "ping",
                        "id": 2059302892u32,
                        "params": [{"name": "ping_id", "type": {"name": "long"}}],
                        "type": {"name": "Pong"}
                    },
                    "category": "function"
                }]
            })
        );
    }

    #[test]
    fn test_json_scope_and_layer() {
        let schema = parse_str("// Base Type Definitions\n//@description T\nboolTrue#997275b5 = Bool;\n// LAYER 3").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.serialize(&schema).unwrap()).unwrap();

        assert_eq!(value["layer"], json!(3));
        assert_eq!(value["definitions"][0]["scope"], json!("core_types"));
        assert_eq!(value["definitions"][0]["category"], json!("type"));
        assert_eq!(
            value["definitions"][0]["annotations"],
            json!([{"name": "description", "value": "T"}])
        );
    }

    #[test]
    fn test_json_round_trips_model() {
        let schema = parse_str(
            "//@class Bool @description B\nboolTrue#997275b5 = Bool;\n---functions---\nreq#1 {X:Type} flags:# a:flags.0?Vector<%T> q:!X = X;",
        )
        .unwrap();
        let text = JsonFormatter.serialize(&schema).unwrap();
        let back: Schema = serde_json::from_str(&text).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn test_yaml_round_trips_model() {
        let schema = parse_str("// System messages\nboolTrue#997275b5 = Bool;\n// LAYER 1").unwrap();
        let text = YamlFormatter.serialize(&schema).unwrap();
        assert!(text.contains("scope: transport"));
        let back: Schema = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, schema);
    }
}
