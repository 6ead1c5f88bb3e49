//! Fixed-width row alignment.
//!
//! Fragment rows (one `Vec<String>` of fields per line) are laid out as a
//! text table: each field column is padded to the widest value in that
//! column, fields are joined with a single-space gutter, and trailing
//! padding is stripped. Alignment is purely cosmetic; the emitted SQL is
//! equivalent under any whitespace layout.

/// Align rows of fields into equal-width columns.
///
/// Empty fields still occupy their column slot, so a column with no value
/// leaves a padded gap rather than shifting later fields.
pub fn align_rows(rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (i, field) in row.iter().enumerate() {
            let len = field.chars().count();
            if i == widths.len() {
                widths.push(len);
            } else if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (i, field) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push_str(field);
                let pad = widths[i].saturating_sub(field.chars().count());
                for _ in 0..pad {
                    line.push(' ');
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}
