//! YAML schema loader.
//!
//! Parses a schema document into the typed [`Schema`] model. The document
//! root must be a mapping with two required sections:
//!
//! ```yaml
//! column_templates:
//!   id:
//!     type: INT
//!     not_null: true
//! tables:
//!   users:
//!     columns:
//!       id: { template: id }
//!       name: { type: VARCHAR, length: 50 }
//!     constraints:
//!       - type: primary
//!         columns: id
//! ```
//!
//! The loader only checks document shape (mappings where mappings are
//! required, both sections present). Semantic validation of properties
//! happens in [`crate::compile`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use super::value::render_scalar;
use super::{PropertyMap, Schema, Table, TemplateRegistry};

/// Errors that can occur when loading a schema document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error reading the schema file
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML or non-mapping document root
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A required top-level section is absent
    #[error("schema is missing the `{section}` section")]
    MissingSection { section: &'static str },

    /// A column template value is not a property mapping
    #[error("column template `{template}` must be a mapping of properties")]
    InvalidTemplate { template: String },

    /// A table value is not a mapping
    #[error("definition of table `{table}` must be a mapping")]
    InvalidTable { table: String },

    /// A table's `columns` value is not a mapping
    #[error("`columns` for table `{table}` must be a mapping")]
    InvalidColumns { table: String },

    /// A column value is not a property mapping
    #[error("column `{column}` in table `{table}` must be a mapping of properties")]
    InvalidColumn { table: String, column: String },

    /// A table's `constraints` value is not a sequence of mappings
    #[error("`constraints` for table `{table}` must be a sequence of mappings")]
    InvalidConstraints { table: String },
}

/// Result type for schema loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Raw document shape; presence of the sections is validated after parsing.
#[derive(Debug, Deserialize)]
struct SchemaDoc {
    column_templates: Option<Mapping>,
    tables: Option<Mapping>,
}

/// Load a schema from a YAML file.
pub fn load_schema(path: &Path) -> LoadResult<Schema> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_schema_from_str(&source)
}

/// Load a schema from a YAML string.
pub fn load_schema_from_str(source: &str) -> LoadResult<Schema> {
    let doc: SchemaDoc = serde_yaml::from_str(source)?;

    let template_section = doc.column_templates.ok_or(LoadError::MissingSection {
        section: "column_templates",
    })?;
    let table_section = doc
        .tables
        .ok_or(LoadError::MissingSection { section: "tables" })?;

    Ok(Schema {
        templates: build_templates(&template_section)?,
        tables: build_tables(&table_section)?,
    })
}

fn build_templates(section: &Mapping) -> LoadResult<TemplateRegistry> {
    let mut registry = TemplateRegistry::new();
    for (key, value) in section {
        let name = key_string(key);
        let properties = match value {
            Value::Mapping(m) => property_map(m),
            Value::Null => PropertyMap::new(),
            _ => return Err(LoadError::InvalidTemplate { template: name }),
        };
        registry.insert(name, properties);
    }
    Ok(registry)
}

fn build_tables(section: &Mapping) -> LoadResult<Vec<Table>> {
    let mut tables = Vec::with_capacity(section.len());
    for (key, value) in section {
        let name = key_string(key);
        let parts = match value {
            Value::Mapping(m) => m.clone(),
            // A bare `users:` entry is an empty table; the compiler rejects
            // it as missing columns.
            Value::Null => Mapping::new(),
            _ => return Err(LoadError::InvalidTable { table: name }),
        };
        tables.push(build_table(name, &parts)?);
    }
    Ok(tables)
}

fn build_table(name: String, parts: &Mapping) -> LoadResult<Table> {
    let mut columns = Vec::new();
    if let Some(value) = parts.get("columns") {
        let section = match value {
            Value::Mapping(m) => m,
            _ => return Err(LoadError::InvalidColumns { table: name }),
        };
        for (key, value) in section {
            let column = key_string(key);
            let properties = match value {
                Value::Mapping(m) => property_map(m),
                Value::Null => PropertyMap::new(),
                _ => {
                    return Err(LoadError::InvalidColumn {
                        table: name,
                        column,
                    })
                }
            };
            columns.push((column, properties));
        }
    }

    let mut constraints = Vec::new();
    if let Some(value) = parts.get("constraints") {
        let items = match value {
            Value::Sequence(items) => items,
            _ => return Err(LoadError::InvalidConstraints { table: name }),
        };
        for item in items {
            match item {
                Value::Mapping(m) => constraints.push(property_map(m)),
                _ => return Err(LoadError::InvalidConstraints { table: name }),
            }
        }
    }

    Ok(Table {
        name,
        columns,
        constraints,
    })
}

fn property_map(mapping: &Mapping) -> PropertyMap {
    mapping
        .iter()
        .map(|(k, v)| (key_string(k), v.clone()))
        .collect()
}

fn key_string(key: &Value) -> String {
    render_scalar(key)
}
