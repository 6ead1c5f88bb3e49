//! End-to-end compilation tests: YAML source in, SQL text out.

use ddlgen::{compile, load_schema_from_str};

fn compile_str(yaml: &str) -> String {
    let schema = load_schema_from_str(yaml).expect("schema should load");
    compile(&schema).expect("schema should compile")
}

#[test]
fn test_users_table_end_to_end() {
    let sql = compile_str(
        r#"
column_templates:
  id:
    type: INT
    not_null: true
tables:
  users:
    columns:
      id:
        template: id
      name:
        type: VARCHAR
        length: 50
    constraints:
      - type: primary
        columns: id
"#,
    );

    let expected = [
        "CREATE TABLE `users`",
        "(",
        "    `id`   INT         NOT NULL,",
        "    `name` VARCHAR(50),",
        "",
        "    CONSTRAINT `pk__users__id` PRIMARY KEY ( `id` )",
        ");",
        "",
    ]
    .join("\n");

    assert_eq!(sql, expected);
}

#[test]
fn test_tables_separated_by_blank_line_in_declared_order() {
    let sql = compile_str(
        r#"
column_templates: {}
tables:
  users:
    columns:
      id: { type: INT }
  orders:
    columns:
      id: { type: INT }
"#,
    );

    let users_at = sql.find("CREATE TABLE `users`").unwrap();
    let orders_at = sql.find("CREATE TABLE `orders`").unwrap();
    assert!(users_at < orders_at);
    assert!(sql.contains(");\n\nCREATE TABLE `orders`"));
    assert!(sql.ends_with(");\n"));
}

#[test]
fn test_foreign_key_constraint_rendered() {
    let sql = compile_str(
        r#"
column_templates: {}
tables:
  orders:
    columns:
      id: { type: INT, not_null: true }
      user_id: { type: INT }
    constraints:
      - type: foreign
        column: user_id
        references_table: users
        references_column: id
"#,
    );

    assert!(sql.contains("CONSTRAINT `fk__orders__users__user_id__id` FOREIGN KEY ( `user_id` ) REFERENCES `users` ( `id` )"));
}

#[test]
fn test_constraints_keep_declared_order() {
    let sql = compile_str(
        r#"
column_templates: {}
tables:
  orders:
    columns:
      id: { type: INT }
      user_id: { type: INT }
    constraints:
      - type: foreign
        column: user_id
        references_table: users
        references_column: id
      - type: primary
        columns: id
"#,
    );

    let fk_at = sql.find("FOREIGN KEY").unwrap();
    let pk_at = sql.find("PRIMARY KEY").unwrap();
    assert!(fk_at < pk_at);
}

#[test]
fn test_enum_column_with_default() {
    let sql = compile_str(
        r#"
column_templates: {}
tables:
  tickets:
    columns:
      status:
        type: enum
        values: [open, closed]
        default: "'open'"
"#,
    );

    assert!(sql.contains("enum('open', 'closed')"));
    assert!(sql.contains("DEFAULT 'open'"));
}

#[test]
fn test_enum_scalar_values_match_singleton_sequence() {
    let scalar = compile_str(
        r#"
column_templates: {}
tables:
  t:
    columns:
      status: { type: enum, values: a }
"#,
    );
    let sequence = compile_str(
        r#"
column_templates: {}
tables:
  t:
    columns:
      status: { type: enum, values: [a] }
"#,
    );

    assert_eq!(scalar, sequence);
    assert!(scalar.contains("enum('a')"));
}

#[test]
fn test_template_only_column_satisfies_type_requirement() {
    let sql = compile_str(
        r#"
column_templates:
  stamp:
    type: TIMESTAMP
    default: CURRENT_TIMESTAMP
tables:
  events:
    columns:
      created: { template: stamp }
"#,
    );

    // Two spaces: the empty nullability fragment keeps its (zero-width)
    // slot between its gutters.
    assert!(sql.contains("`created` TIMESTAMP  DEFAULT CURRENT_TIMESTAMP"));
}

#[test]
fn test_repeated_compilation_is_byte_identical() {
    let yaml = r#"
column_templates:
  id: { type: INT, not_null: true }
tables:
  users:
    columns:
      id: { template: id }
      email: { type: VARCHAR, length: 255, not_null: false }
    constraints:
      - type: primary
        columns: [id]
"#;

    let first = compile_str(yaml);
    let second = compile_str(yaml);
    assert_eq!(first, second);
}
