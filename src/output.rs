//! Rendering of read results and schemas for the terminal.

use clap::ValueEnum;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use termtree::Tree;

use crate::terraform::{DataSourceState, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StateFormat {
    #[default]
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SchemaFormat {
    #[default]
    Json,
    Tree,
}

#[derive(Tabled)]
struct AttributeRow {
    #[tabled(rename = "Attribute")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn render_state(
    state: &DataSourceState,
    format: StateFormat,
) -> Result<String, serde_json::Error> {
    match format {
        StateFormat::Json => serde_json::to_string_pretty(state),
        StateFormat::Table => Ok(state_table(state)),
    }
}

fn state_table(state: &DataSourceState) -> String {
    let mut rows = vec![AttributeRow {
        name: "id".to_string(),
        value: state.id.clone(),
    }];
    rows.extend(state.attributes.iter().map(|(name, value)| AttributeRow {
        name: name.clone(),
        value: value.to_string(),
    }));

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn render_schema(
    type_name: &str,
    schema: &Schema,
    format: SchemaFormat,
) -> Result<String, serde_json::Error> {
    match format {
        SchemaFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "type": type_name,
            "schema": schema,
        })),
        SchemaFormat::Tree => Ok(schema_tree(type_name, schema).to_string()),
    }
}

fn schema_tree(type_name: &str, schema: &Schema) -> Tree<String> {
    let root = match schema.deprecation_message {
        Some(_) => format!("{type_name} (deprecated)"),
        None => type_name.to_string(),
    };

    let leaves = schema.attributes().map(|attribute| {
        let mut flags = Vec::new();
        if attribute.required {
            flags.push("required");
        }
        if attribute.optional {
            flags.push("optional");
        }
        if attribute.computed {
            flags.push("computed");
        }
        if attribute.deprecated.is_some() {
            flags.push("deprecated");
        }
        format!("{}: {} [{}]", attribute.name, attribute.kind, flags.join(", "))
    });

    Tree::new(root).with_leaves(leaves)
}
