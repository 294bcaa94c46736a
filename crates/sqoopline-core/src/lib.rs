//! sqoopline Core Library
//!
//! This crate builds, validates and runs Apache Sqoop command lines:
//! - A closed, ordered flag vocabulary
//! - A parameter store with set/unset semantics
//! - Import/export validation and deterministic rendering
//! - A narrow process-execution boundary and job-control helpers
//! - Project and job file loading
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ SqoopOptions│────▶│ ParameterSet│────▶│ SqoopCommand│────▶│CommandRunner│
//! │ (YAML/code) │     │  (ordered)  │     │(validate/   │     │   (shell)   │
//! └─────────────┘     └─────────────┘     │ render)     │     └─────────────┘
//!                                         └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use sqoopline_core::{SqoopCommand, SqoopOptions};
//!
//! let mut command = SqoopCommand::new(SqoopOptions::default());
//! command.set_param("--table", "Rutas");
//! command.set_param("--incremental", "lastmodified");
//! assert_eq!(
//!     command.command().unwrap(),
//!     "sqoop import --table Rutas --incremental lastmodified"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod config;
pub mod error;
pub mod flag;
pub mod jobs;
pub mod options;
pub mod parameters;
pub mod runner;

pub use command::SqoopCommand;
pub use config::{Config, JobSpec, ProjectConfig};
pub use error::{Error, Result};
pub use flag::{Direction, Flag};
pub use options::SqoopOptions;
pub use parameters::{FlagValue, ParameterSet};
pub use runner::{CommandRunner, EXECUTION_FAILED_STATUS, ExecOutcome, OutputMode, ShellRunner};
