//! Error types for sqoopline-core

use thiserror::Error;

use crate::flag::Flag;

/// Result type alias for sqoopline-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sqoopline-core
///
/// Validation errors are raised before anything is executed; a command that
/// fails validation never reaches the runner.
#[derive(Error, Debug)]
pub enum Error {
    /// No flag of the requested direction carries a value
    #[error("all parameters are empty")]
    AllParametersEmpty,

    /// Import without `--table`, `--query` or `--help`
    #[error(
        "--table or --query is required for import. (Or use sqoop import-all-tables.)\nTry --help for usage instructions."
    )]
    MissingTargetSelector,

    /// `--incremental` set to something other than `append` or `lastmodified`
    #[error("--incremental needs either 'append' or 'lastmodified', got '{value}'")]
    InvalidIncrementalMode {
        /// The rejected mode
        value: String,
    },

    /// Only part of the HBase flag group is set
    #[error(
        "--hbase-table, --hbase-row-key and --column-family must be set together; missing {}",
        join_flags(.missing)
    )]
    MissingColumnStoreDependency {
        /// Members of the group that are absent, in declared order
        missing: Vec<Flag>,
    },

    /// Export without `--export-dir` or `--help`
    #[error("--export-dir is required for export.\nTry --help for usage instructions.")]
    MissingExportDir,

    /// A flag name outside the declared vocabulary
    #[error("unknown flag: {name}")]
    UnknownFlag {
        /// The name that was looked up
        name: String,
    },

    /// A job priority outside the accepted set
    #[error(
        "invalid priority '{value}': expected one of VERY_HIGH, HIGH, NORMAL, LOW, VERY_LOW, DEFAULT"
    )]
    InvalidPriority {
        /// The rejected priority
        value: String,
    },

    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    ConfigInvalid {
        /// Description of what's invalid
        message: String,
    },

    /// No job with the given name in the project
    #[error("job not found: {name}")]
    JobNotFound {
        /// Requested job name
        name: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_flags(flags: &[Flag]) -> String {
    flags
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
