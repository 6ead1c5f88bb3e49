//! # ddlgen
//!
//! A one-shot schema compiler that turns declarative YAML table definitions
//! into formatted SQL `CREATE TABLE` statements.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │         YAML Schema (tables, templates, constraints)     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [schema::loader]
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Schema (Rust Types)                     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [resolve]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Column / Constraint Rows (text fragments)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [sql::layout + compile]
//! ┌─────────────────────────────────────────────────────────┐
//! │                CREATE TABLE statements                   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The compiler is a pure function from a loaded [`Schema`] to SQL text:
//! any validation failure aborts the whole compilation, and identical input
//! always produces identical output.

pub mod compile;
pub mod resolve;
pub mod schema;
pub mod sql;

pub use compile::{compile, compile_file, CompileError};
pub use schema::loader::{load_schema, load_schema_from_str, LoadError};
pub use schema::{PropertyMap, Schema, Table, TemplateRegistry};
