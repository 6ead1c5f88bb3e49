//! Property resolution: raw schema definitions → rendered text fragments.
//!
//! The column resolver merges template defaults into each column and renders
//! its name/type/null/default fragments; the constraint resolver renders one
//! five-field row per PRIMARY/FOREIGN KEY constraint. Both consume every
//! recognized property and fail fast on anything left over.

pub mod column;
pub mod constraint;

pub use column::{resolve_column, resolve_columns, ColumnRow};
pub use constraint::{resolve_constraint, resolve_constraints, ConstraintRow};
