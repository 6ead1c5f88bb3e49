//! End-to-end compilation from a loaded schema to SQL.
//!
//! This module provides the high-level API for compiling a schema to DDL:
//!
//! ```text
//! YAML Source → Schema → Resolve Columns/Constraints → Align → SQL
//! ```
//!
//! # Example
//!
//! ```ignore
//! use ddlgen::{compile, load_schema_from_str};
//!
//! let yaml = r#"
//!     column_templates:
//!       id: { type: INT, not_null: true }
//!     tables:
//!       users:
//!         columns:
//!           id: { template: id }
//! "#;
//!
//! let schema = load_schema_from_str(yaml)?;
//! println!("{}", compile(&schema)?);
//! ```
//!
//! Compilation is fail-fast: the first validation error anywhere aborts the
//! whole run with no partial output.

use std::path::Path;

use crate::resolve::{resolve_columns, resolve_constraints};
use crate::schema::loader::{load_schema, LoadError};
use crate::schema::{Schema, Table, TemplateRegistry};
use crate::sql::render_create_table;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during compilation.
///
/// Every variant names the offending table and, where relevant, the column,
/// template, property, or constraint kind.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("schema load error: {0}")]
    Load(#[from] LoadError),

    #[error("table `{table}` has no columns")]
    TableMissingColumns { table: String },

    #[error("column template `{template}` requested by column `{column}` is not defined")]
    UnknownColumnTemplate { template: String, column: String },

    #[error("column `{column}` in table `{table}` has no type")]
    MissingColumnType { table: String, column: String },

    #[error("enum column `{column}` in table `{table}` is missing a values collection")]
    MissingEnumValues { table: String, column: String },

    #[error("unrecognized property `{property}` on column `{column}` in table `{table}`")]
    UnrecognizedColumnProperty {
        table: String,
        column: String,
        property: String,
    },

    #[error("constraint for table `{table}` is missing a type")]
    MissingConstraintType { table: String },

    #[error("unknown constraint type `{kind}` for table `{table}`")]
    UnknownConstraintType { table: String, kind: String },

    #[error("primary key constraint for table `{table}` is missing columns")]
    MissingPrimaryKeyColumns { table: String },

    #[error("foreign key constraint for table `{table}` is missing a column")]
    MissingForeignKeyColumn { table: String },

    #[error("foreign key constraint for table `{table}` is missing a references_column")]
    MissingForeignKeyReferencesColumn { table: String },

    #[error("foreign key constraint for table `{table}` is missing a references_table")]
    MissingForeignKeyReferencesTable { table: String },
}

pub type CompileResult<T> = Result<T, CompileError>;

// ============================================================================
// Compilation Functions
// ============================================================================

/// Compile a loaded schema into the concatenated `CREATE TABLE` text.
///
/// Tables are emitted in declared order, each statement followed by its own
/// trailing blank line. The compiler is a pure function: recompiling the
/// same schema yields byte-identical output.
pub fn compile(schema: &Schema) -> CompileResult<String> {
    let mut statements = Vec::with_capacity(schema.tables.len());
    for table in &schema.tables {
        statements.push(compile_table(table, &schema.templates)?);
    }
    Ok(statements.join("\n"))
}

/// Load a schema file and compile it in one step.
pub fn compile_file(path: &Path) -> CompileResult<String> {
    let schema = load_schema(path)?;
    compile(&schema)
}

/// Compile a single table into its `CREATE TABLE` statement.
pub fn compile_table(table: &Table, templates: &TemplateRegistry) -> CompileResult<String> {
    if table.columns.is_empty() {
        return Err(CompileError::TableMissingColumns {
            table: table.name.clone(),
        });
    }

    let column_rows: Vec<Vec<String>> = resolve_columns(table, templates)?
        .into_iter()
        .map(|row| row.into_fields())
        .collect();
    let constraint_rows: Vec<Vec<String>> = resolve_constraints(table)?
        .into_iter()
        .map(|row| row.into_fields())
        .collect();

    Ok(render_create_table(
        &table.name,
        &column_rows,
        &constraint_rows,
    ))
}
