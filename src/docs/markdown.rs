use super::{ConfigSection, PropertyInfo, extract_property_info};
use crate::{Result, SpecdocsError};

const TABLE_HEADER: &str =
    "| Property | Type | Description | Default |\n|----------|------|-------------|---------|";

const PAGE_HEADER: &str = "# Configuration Reference\n\n\
specdocs reads `specdocs.toml` from the site root. Every section and \
property is optional.\n\n";

/// Generates a markdown table documenting configuration properties.
///
/// Returns an empty string when there is nothing to document.
pub fn generate_property_table(
    section_title: &str,
    config_path: &str,
    properties: &[PropertyInfo],
) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let property_rows = properties
        .iter()
        .map(|prop| {
            format!(
                "| `{}` | `{}` | {} | `{}` |",
                prop.name, prop.type_name, prop.description, prop.default_value
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!("## {section_title}\n**Config path:** `{config_path}`\n\n{TABLE_HEADER}\n{property_rows}\n")
}

/// Generates the full configuration reference page.
///
/// # Errors
///
/// Returns `SpecdocsError::Serialization` if a section schema cannot be
/// converted to JSON.
pub fn generate_reference_page(sections: &[ConfigSection]) -> Result<String> {
    let mut content = String::from(PAGE_HEADER);

    for section in sections {
        let schema_value = serde_json::to_value((section.schema)()).map_err(|e| {
            SpecdocsError::Serialization {
                what: format!("schema for section '{}'", section.name),
                details: e.to_string(),
            }
        })?;

        let properties = extract_property_info(&schema_value);
        let table = generate_property_table(
            &title_case(section.name),
            &format!("[{}]", section.name),
            &properties,
        );

        if !table.is_empty() {
            content.push_str(&table);
            content.push('\n');
        }
    }

    Ok(content)
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
