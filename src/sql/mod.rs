//! SQL text assembly.
//!
//! This module turns resolved fragment rows into `CREATE TABLE` statement
//! text:
//!
//! - [`layout`] - fixed-width column aligner for fragment rows
//! - [`quote_ident`] - backtick identifier quoting
//! - [`render_create_table`] - full statement assembly

pub mod layout;

pub use layout::align_rows;

/// Wrap an identifier in backticks.
///
/// Embedded backticks are not escaped; identifiers are assumed trusted, this
/// is not an injection-safe quoting boundary.
pub fn quote_ident(name: &str) -> String {
    format!("`{name}`")
}

/// Assemble a full `CREATE TABLE` statement from aligned body lines.
///
/// Column rows and constraint rows are aligned independently (they have
/// different field counts); when constraints exist a single blank line
/// separates the two blocks. Every non-blank body line is indented four
/// spaces and all but the last get a trailing comma. The statement ends with
/// `);` and a trailing newline so consecutive statements joined with `\n`
/// read as blank-line-separated blocks.
pub fn render_create_table(
    table: &str,
    column_rows: &[Vec<String>],
    constraint_rows: &[Vec<String>],
) -> String {
    let mut body = align_rows(column_rows);
    if !constraint_rows.is_empty() {
        body.push(String::new());
        body.extend(align_rows(constraint_rows));
    }

    let last = body.len().saturating_sub(1);
    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(format!("CREATE TABLE {}", quote_ident(table)));
    lines.push("(".to_string());
    for (i, line) in body.iter().enumerate() {
        if line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let comma = if i < last { "," } else { "" };
        lines.push(format!("    {}{}", line.trim(), comma));
    }
    lines.push(");".to_string());
    lines.push(String::new());

    lines.join("\n")
}
