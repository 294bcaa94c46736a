//! CLI command implementations

use anyhow::{Context, Result};
use sqoopline_core::Config;
use std::process::ExitCode;

pub mod init;
pub mod jobs;
pub mod render;
pub mod run;
pub mod validate;

/// Load the project configuration, logging where it came from
pub fn load_config(config_path: &str) -> Result<Config> {
    tracing::debug!("Loading configuration from {}", config_path);
    Config::load(config_path).context("Failed to load configuration")
}

/// Map a child's status onto this process's exit code
pub fn exit_code(status: i32) -> ExitCode {
    match u8::try_from(status) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
