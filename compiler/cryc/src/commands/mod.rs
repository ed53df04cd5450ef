//! Command handlers for the Cry CLI.
//!
//! Each submodule implements one command. `main.rs` only parses arguments
//! and dispatches here.

mod run;

pub use run::{
    execute, load_program, parse_run_options, report_error, run_file, LoadError, RunError,
    RunOptions,
};
