//! Validation failure tests covering the whole error taxonomy.

use ddlgen::{compile, load_schema_from_str, CompileError, LoadError};

fn compile_err(yaml: &str) -> CompileError {
    let schema = load_schema_from_str(yaml).expect("schema should load");
    compile(&schema).expect_err("compilation should fail")
}

#[test]
fn test_schema_missing_tables_section() {
    let err = load_schema_from_str("column_templates: {}\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingSection { section: "tables" }
    ));
}

#[test]
fn test_schema_missing_templates_section() {
    let err = load_schema_from_str("tables: {}\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingSection {
            section: "column_templates"
        }
    ));
}

#[test]
fn test_table_missing_columns() {
    let err = compile_err(
        r#"
column_templates: {}
tables:
  users:
    constraints: []
"#,
    );
    assert!(matches!(
        err,
        CompileError::TableMissingColumns { table } if table == "users"
    ));
}

#[test]
fn test_unknown_column_template() {
    let err = compile_err(
        r#"
column_templates:
  id: { type: INT }
tables:
  users:
    columns:
      id: { template: missing }
"#,
    );
    assert!(matches!(
        err,
        CompileError::UnknownColumnTemplate { template, column }
            if template == "missing" && column == "id"
    ));
}

#[test]
fn test_unrecognized_column_property_names_column_and_property() {
    let err = compile_err(
        r#"
column_templates: {}
tables:
  users:
    columns:
      name:
        type: VARCHAR
        comment: no handling for this
"#,
    );

    match &err {
        CompileError::UnrecognizedColumnProperty {
            table,
            column,
            property,
        } => {
            assert_eq!(table, "users");
            assert_eq!(column, "name");
            assert_eq!(property, "comment");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // The rendered message carries both identifiers for the CLI shell.
    let message = err.to_string();
    assert!(message.contains("name"));
    assert!(message.contains("comment"));
}

#[test]
fn test_missing_enum_values() {
    let err = compile_err(
        r#"
column_templates: {}
tables:
  users:
    columns:
      status: { type: ENUM }
"#,
    );
    assert!(matches!(
        err,
        CompileError::MissingEnumValues { table, column }
            if table == "users" && column == "status"
    ));
}

#[test]
fn test_missing_constraint_type() {
    let err = compile_err(
        r#"
column_templates: {}
tables:
  users:
    columns:
      id: { type: INT }
    constraints:
      - columns: id
"#,
    );
    assert!(matches!(
        err,
        CompileError::MissingConstraintType { table } if table == "users"
    ));
}

#[test]
fn test_unknown_constraint_type() {
    let err = compile_err(
        r#"
column_templates: {}
tables:
  users:
    columns:
      id: { type: INT }
    constraints:
      - type: unique
        columns: id
"#,
    );
    assert!(matches!(
        err,
        CompileError::UnknownConstraintType { table, kind }
            if table == "users" && kind == "unique"
    ));
}

#[test]
fn test_missing_primary_key_columns() {
    let err = compile_err(
        r#"
column_templates: {}
tables:
  users:
    columns:
      id: { type: INT }
    constraints:
      - type: primary
"#,
    );
    assert!(matches!(
        err,
        CompileError::MissingPrimaryKeyColumns { table } if table == "users"
    ));
}

#[test]
fn test_missing_foreign_key_fields_are_distinct_errors() {
    let without_column = compile_err(
        r#"
column_templates: {}
tables:
  orders:
    columns:
      id: { type: INT }
    constraints:
      - type: foreign
        references_table: users
        references_column: id
"#,
    );
    assert!(matches!(
        without_column,
        CompileError::MissingForeignKeyColumn { .. }
    ));

    let without_ref_column = compile_err(
        r#"
column_templates: {}
tables:
  orders:
    columns:
      id: { type: INT }
    constraints:
      - type: foreign
        column: user_id
        references_table: users
"#,
    );
    assert!(matches!(
        without_ref_column,
        CompileError::MissingForeignKeyReferencesColumn { .. }
    ));

    let without_ref_table = compile_err(
        r#"
column_templates: {}
tables:
  orders:
    columns:
      id: { type: INT }
    constraints:
      - type: foreign
        column: user_id
        references_column: id
"#,
    );
    assert!(matches!(
        without_ref_table,
        CompileError::MissingForeignKeyReferencesTable { .. }
    ));
}

#[test]
fn test_missing_column_type() {
    let err = compile_err(
        r#"
column_templates: {}
tables:
  users:
    columns:
      name: { length: 50 }
"#,
    );
    assert!(matches!(
        err,
        CompileError::MissingColumnType { table, column }
            if table == "users" && column == "name"
    ));
}

#[test]
fn test_no_partial_output_on_failure() {
    // First table is fine; second is broken. The whole compile fails.
    let schema = load_schema_from_str(
        r#"
column_templates: {}
tables:
  fine:
    columns:
      id: { type: INT }
  broken:
    columns:
      status: { type: enum }
"#,
    )
    .unwrap();

    assert!(compile(&schema).is_err());
}
