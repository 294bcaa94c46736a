//! Validate configuration command

use anyhow::Result;

/// Run the validate command
pub fn run(config_path: &str) -> Result<()> {
    let config = super::load_config(config_path)?;

    tracing::info!("✓ Project: {}", config.project.name);
    tracing::info!("✓ Version: {}", config.project.version);

    let jobs = config.load_jobs()?;
    let mut failures = 0;
    for job in &jobs {
        match config.render_job(job) {
            Ok(_) => tracing::info!("✓ {} ({})", job.name, job.direction),
            Err(e) => {
                failures += 1;
                tracing::error!("✗ {} ({}): {}", job.name, job.direction, e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} jobs are invalid", failures, jobs.len());
    }

    tracing::info!("✓ {} jobs are valid", jobs.len());
    Ok(())
}
