//! ddlgen CLI - Compile YAML table schemas to SQL DDL
//!
//! Usage:
//!   ddlgen compile <schema.yaml> [--output <file.sql>]
//!   ddlgen validate <schema.yaml>
//!
//! Examples:
//!   ddlgen compile schema.yaml
//!   ddlgen compile schema.yaml --output schema.sql
//!   ddlgen validate schema.yaml

use clap::{Parser, Subcommand};
use ddlgen::compile_file;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ddlgen")]
#[command(about = "Compile declarative YAML table schemas to SQL CREATE TABLE statements")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a schema to SQL
    Compile {
        /// Path to the YAML schema file
        file: PathBuf,

        /// Write SQL to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a schema without emitting SQL
    Validate {
        /// Path to the YAML schema file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { file, output } => cmd_compile(file, output),
        Commands::Validate { file } => cmd_validate(file),
    }
}

fn cmd_compile(file: PathBuf, output: Option<PathBuf>) -> ExitCode {
    let sql = match compile_file(&file) {
        Ok(sql) => sql,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &sql) {
                eprintln!("Error writing '{}': {e}", path.display());
                return ExitCode::FAILURE;
            }
            println!("Generated {}", path.display());
        }
        None => print!("{sql}"),
    }

    ExitCode::SUCCESS
}

fn cmd_validate(file: PathBuf) -> ExitCode {
    match compile_file(&file) {
        Ok(_) => {
            println!("{} is valid", file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
