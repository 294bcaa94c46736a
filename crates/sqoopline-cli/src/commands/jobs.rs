//! Job control commands

use anyhow::Result;
use sqoopline_core::ShellRunner;
use sqoopline_core::jobs::{self, JobTool};

/// List running jobs and print the tool's output
pub fn list(tool: JobTool) -> Result<i32> {
    let outcome = jobs::list_running_jobs(&ShellRunner::default(), tool);
    print!("{}", outcome.stdout());
    if !outcome.success() {
        tracing::warn!("Job listing exited with status {}", outcome.status());
        if !outcome.stderr().is_empty() {
            eprint!("{}", outcome.stderr());
        }
    }
    Ok(outcome.status())
}

/// Change the priority of a running job
pub fn set_priority(job_id: &str, priority: &str) -> Result<i32> {
    let outcome = jobs::set_priority(&ShellRunner::default(), job_id, priority)?;
    print!("{}", outcome.stdout());
    if outcome.success() {
        tracing::info!("✓ {} set to {}", job_id, priority);
    } else {
        tracing::error!("✗ Could not change priority of {}", job_id);
        eprint!("{}", outcome.stderr());
    }
    Ok(outcome.status())
}
