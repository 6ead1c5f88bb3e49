//! Constraint resolution.
//!
//! Renders table-level PRIMARY KEY / FOREIGN KEY constraints into five-field
//! rows: the `CONSTRAINT` keyword, a deterministic quoted name, the
//! constraint kind, the local column list, and (for foreign keys) the
//! references clause. Constraints keep their declared order.

use crate::compile::CompileError;
use crate::schema::value::{as_string_list, render_scalar};
use crate::schema::{PropertyMap, Table};
use crate::sql::quote_ident;

/// Generated foreign key names are capped at the common identifier limit.
/// Truncation is plain (no hashing), so very long names can collide; that is
/// an accepted limitation of the naming scheme.
const FK_NAME_MAX: usize = 63;

/// One rendered constraint, prior to row alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRow {
    /// Quoted constraint name, e.g. `` `pk__orders__id` ``.
    pub name: String,
    /// `PRIMARY KEY` or `FOREIGN KEY`.
    pub kind: String,
    /// Parenthesized local column list, e.g. ``( `id`, `region` )``.
    pub columns: String,
    /// `REFERENCES` clause; empty for primary keys.
    pub references: String,
}

impl ConstraintRow {
    pub fn into_fields(self) -> Vec<String> {
        vec![
            "CONSTRAINT".to_string(),
            self.name,
            self.kind,
            self.columns,
            self.references,
        ]
    }
}

/// Resolve every constraint of a table, in declared order.
pub fn resolve_constraints(table: &Table) -> Result<Vec<ConstraintRow>, CompileError> {
    table
        .constraints
        .iter()
        .map(|def| resolve_constraint(&table.name, def))
        .collect()
}

/// Resolve a single constraint definition into its rendered row.
pub fn resolve_constraint(
    table: &str,
    def: &PropertyMap,
) -> Result<ConstraintRow, CompileError> {
    let kind = match def.get("type") {
        Some(value) => render_scalar(value),
        None => {
            return Err(CompileError::MissingConstraintType {
                table: table.to_string(),
            })
        }
    };

    match kind.as_str() {
        "primary" => resolve_primary(table, def),
        "foreign" => resolve_foreign(table, def),
        other => Err(CompileError::UnknownConstraintType {
            table: table.to_string(),
            kind: other.to_string(),
        }),
    }
}

fn resolve_primary(table: &str, def: &PropertyMap) -> Result<ConstraintRow, CompileError> {
    let columns = match def.get("columns") {
        Some(value) => as_string_list(value),
        None => {
            return Err(CompileError::MissingPrimaryKeyColumns {
                table: table.to_string(),
            })
        }
    };

    let name = format!("pk__{}__{}", table, columns.join("__"));
    let quoted: Vec<String> = columns.iter().map(|c| quote_ident(c)).collect();

    Ok(ConstraintRow {
        name: quote_ident(&name),
        kind: "PRIMARY KEY".to_string(),
        columns: format!("( {} )", quoted.join(", ")),
        references: String::new(),
    })
}

fn resolve_foreign(table: &str, def: &PropertyMap) -> Result<ConstraintRow, CompileError> {
    let column = match def.get("column") {
        Some(value) => render_scalar(value),
        None => {
            return Err(CompileError::MissingForeignKeyColumn {
                table: table.to_string(),
            })
        }
    };
    let references_column = match def.get("references_column") {
        Some(value) => render_scalar(value),
        None => {
            return Err(CompileError::MissingForeignKeyReferencesColumn {
                table: table.to_string(),
            })
        }
    };
    let references_table = match def.get("references_table") {
        Some(value) => render_scalar(value),
        None => {
            return Err(CompileError::MissingForeignKeyReferencesTable {
                table: table.to_string(),
            })
        }
    };

    let mut name = format!(
        "fk__{}__{}__{}__{}",
        table, references_table, column, references_column
    );
    if name.chars().count() > FK_NAME_MAX {
        name = name.chars().take(FK_NAME_MAX).collect();
    }

    Ok(ConstraintRow {
        name: quote_ident(&name),
        kind: "FOREIGN KEY".to_string(),
        columns: format!("( {} )", quote_ident(&column)),
        references: format!(
            "REFERENCES {} ( {} )",
            quote_ident(&references_table),
            quote_ident(&references_column)
        ),
    })
}
