//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces the
//! OpenAI-compatible function-calling format accepted by the reasoning
//! service.

use airwatch_application::ports::tool_schema::ToolSchemaPort;
use airwatch_domain::tool::entities::ToolDefinition;

/// Default implementation producing `{"type": "function", "function": {...}}`.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"`
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
///
/// Parameters with allowed values become `enum` constraints.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), serde_json::json!(schema_type));
            prop.insert(
                "description".to_string(),
                serde_json::json!(param.description),
            );
            if !param.allowed_values.is_empty() {
                prop.insert("enum".to_string(), serde_json::json!(param.allowed_values));
            }
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airwatch_domain::tool::entities::{ToolKind, ToolSpec};

    #[test]
    fn test_historical_context_schema() {
        let converter = JsonSchemaToolConverter;
        let schema = converter.tool_to_schema(&ToolKind::HistoricalContext.definition());

        assert_eq!(schema["type"], "function");
        let function = &schema["function"];
        assert_eq!(function["name"], "get_historical_context");
        assert_eq!(function["parameters"]["type"], "object");

        let hour = &function["parameters"]["properties"]["hour"];
        assert_eq!(hour["type"], "integer");

        let day = &function["parameters"]["properties"]["day_of_week"];
        assert_eq!(day["type"], "string");
        let days = day["enum"].as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], "Monday");

        // The slot defaults to the current station-local hour and day
        let required = function["parameters"]["required"].as_array().unwrap();
        assert!(required.is_empty());
        assert!(
            function["parameters"]["properties"]["sensor_id"]
                .get("enum")
                .is_none()
        );
    }

    #[test]
    fn test_report_schema_has_optional_boolean() {
        let converter = JsonSchemaToolConverter;
        let schema = converter.tool_to_schema(&ToolKind::AirQualityReport.definition());

        let prop = &schema["function"]["parameters"]["properties"]["include_raw_metrics"];
        assert_eq!(prop["type"], "boolean");
        assert!(
            schema["function"]["parameters"]["required"]
                .as_array()
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_tools_schema_follows_registry_order() {
        let converter = JsonSchemaToolConverter;

        let full = converter.tools_schema(&ToolSpec::full());
        let names: Vec<&str> = full
            .iter()
            .map(|t| t["function"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "get_air_quality_report",
                "get_historical_context",
                "save_relevant_event"
            ]
        );

        let read_only = converter.tools_schema(&ToolSpec::read_only());
        assert_eq!(read_only.len(), 2);
        assert!(
            read_only
                .iter()
                .all(|t| t["function"]["name"] != "save_relevant_event")
        );
    }
}
