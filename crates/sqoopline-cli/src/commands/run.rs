//! Run a transfer job

use anyhow::{Context, Result};
use sqoopline_core::{ExecOutcome, OutputMode};

/// Run the job and return the child's exit status
pub fn run(config_path: &str, job: &str, dry_run: bool) -> Result<i32> {
    let config = super::load_config(config_path)?;
    let spec = config.find_job(job)?;
    let command = config.command_for(&spec);

    if dry_run {
        let line = command
            .render(spec.direction)
            .with_context(|| format!("Job '{}' is invalid", spec.name))?;
        println!("{}", line);
        return Ok(0);
    }

    tracing::info!("Project: {}", config.project.name);
    tracing::info!("Running job '{}' (sqoop {})", spec.name, spec.direction);

    let runner = config.runner().with_output(OutputMode::Inherit);
    let outcome = command
        .perform(spec.direction, &runner)
        .with_context(|| format!("Job '{}' is invalid", spec.name))?;

    match &outcome {
        ExecOutcome::FailedToStart { reason } => {
            tracing::error!("✗ {} could not be started: {}", spec.name, reason);
        }
        _ if outcome.success() => tracing::info!("✓ {} finished", spec.name),
        _ => tracing::error!("✗ {} exited with status {}", spec.name, outcome.status()),
    }

    Ok(outcome.status())
}
