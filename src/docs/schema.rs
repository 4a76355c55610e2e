//! Property extraction from JSON Schema documents.

use serde_json::{Map, Value};

/// One documented property of a configuration section.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInfo {
    /// The name of the property as defined in the schema.
    pub name: String,
    /// JSON Schema type, or the referenced definition name for enums.
    pub type_name: String,
    /// Description taken from the field's doc comment.
    pub description: String,
    /// Rendered default value, or "-" if not specified.
    pub default_value: String,
}

/// Extracts property information from a JSON Schema document.
///
/// Returns an empty vector if the schema has no `properties` object.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use specdocs::docs::extract_property_info;
///
/// let schema = json!({
///     "properties": {
///         "id": {
///             "type": "string",
///             "description": "Plugin instance id.",
///             "default": "api"
///         }
///     }
/// });
///
/// let properties = extract_property_info(&schema);
/// assert_eq!(properties[0].name, "id");
/// assert_eq!(properties[0].default_value, "\"api\"");
/// ```
pub fn extract_property_info(schema: &Value) -> Vec<PropertyInfo> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(build_properties)
        .unwrap_or_default()
}

fn build_properties(props_obj: &Map<String, Value>) -> Vec<PropertyInfo> {
    props_obj
        .iter()
        .map(|(name, property)| PropertyInfo {
            name: name.clone(),
            type_name: get_type(property),
            description: get_description(property),
            default_value: get_default_value(property),
        })
        .collect()
}

fn get_type(property: &Value) -> String {
    if let Some(type_of) = property.get("type").and_then(Value::as_str) {
        return type_of.to_string();
    }

    property
        .get("$ref")
        .or_else(|| {
            property
                .get("allOf")
                .and_then(Value::as_array)
                .and_then(|all| all.first())
                .and_then(|first| first.get("$ref"))
        })
        .and_then(Value::as_str)
        .and_then(|reference| reference.rsplit('/').next())
        .unwrap_or("unknown")
        .to_string()
}

fn get_description(property: &Value) -> String {
    property
        .get("description")
        .and_then(Value::as_str)
        .map(|desc| desc.replace('\n', " "))
        .unwrap_or_else(|| "No description provided".to_string())
}

fn get_default_value(property: &Value) -> String {
    property
        .get("default")
        .map(|def_val| match def_val {
            Value::String(s) => format!("\"{s}\""),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            _ => def_val.to_string(),
        })
        .unwrap_or_else(|| "-".to_string())
}
