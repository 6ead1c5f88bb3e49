//! Column resolution.
//!
//! Each column starts from its template's property bag (when a `template`
//! reference is present), overlays its own explicit properties, and renders
//! four fragments: quoted name, type, nullability, default. Every recognized
//! property is consumed; a leftover key fails the compile naming the column
//! and the property.

use crate::compile::CompileError;
use crate::schema::value::{as_string_list, is_truthy, render_scalar};
use crate::schema::{PropertyMap, Table, TemplateRegistry};
use crate::sql::quote_ident;

/// Properties the resolver consumes. `values` is consumed even for non-enum
/// columns; the `template` reference is discarded during the merge.
const RECOGNIZED: &[&str] = &["type", "length", "values", "not_null", "default"];

/// Rendered fragments for one column, prior to row alignment.
///
/// Empty null/default fragments still occupy their field slot so the aligner
/// keeps every row at four fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRow {
    pub name: String,
    pub type_part: String,
    pub null_part: String,
    pub default_part: String,
}

impl ColumnRow {
    pub fn into_fields(self) -> Vec<String> {
        vec![self.name, self.type_part, self.null_part, self.default_part]
    }
}

/// Resolve every column of a table, in declared order.
pub fn resolve_columns(
    table: &Table,
    templates: &TemplateRegistry,
) -> Result<Vec<ColumnRow>, CompileError> {
    table
        .columns
        .iter()
        .map(|(name, props)| resolve_column(&table.name, name, props, templates))
        .collect()
}

/// Resolve a single column definition into its rendered fragments.
pub fn resolve_column(
    table: &str,
    column: &str,
    props: &PropertyMap,
    templates: &TemplateRegistry,
) -> Result<ColumnRow, CompileError> {
    let resolved = match props.get("template") {
        Some(value) => {
            let template = render_scalar(value);
            let defaults =
                templates
                    .get(&template)
                    .ok_or_else(|| CompileError::UnknownColumnTemplate {
                        template: template.clone(),
                        column: column.to_string(),
                    })?;
            props.overlaid_on(defaults, &["template"])
        }
        None => props.clone(),
    };

    let null_part = match resolved.get("not_null") {
        Some(flag) if is_truthy(flag) => "NOT NULL".to_string(),
        Some(_) => "NULL".to_string(),
        None => String::new(),
    };

    let mut type_part = match resolved.get("type") {
        Some(value) => render_scalar(value),
        None => {
            return Err(CompileError::MissingColumnType {
                table: table.to_string(),
                column: column.to_string(),
            })
        }
    };
    if let Some(length) = resolved.get("length") {
        type_part.push_str(&format!("({})", render_scalar(length)));
    }
    if type_part.eq_ignore_ascii_case("enum") {
        let values = resolved
            .get("values")
            .ok_or_else(|| CompileError::MissingEnumValues {
                table: table.to_string(),
                column: column.to_string(),
            })?;
        type_part.push_str(&format!("('{}')", as_string_list(values).join("', '")));
    }

    let default_part = match resolved.get("default") {
        // Emitted verbatim: the schema supplies a ready SQL literal
        // (0, 'active', CURRENT_TIMESTAMP). Quoting is the caller's job.
        Some(value) => format!("DEFAULT {}", render_scalar(value)),
        None => String::new(),
    };

    if let Some(stray) = resolved.first_unrecognized(RECOGNIZED) {
        return Err(CompileError::UnrecognizedColumnProperty {
            table: table.to_string(),
            column: column.to_string(),
            property: stray.to_string(),
        });
    }

    Ok(ColumnRow {
        name: quote_ident(column),
        type_part,
        null_part,
        default_part,
    })
}
