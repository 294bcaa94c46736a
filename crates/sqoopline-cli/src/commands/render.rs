//! Print a job's command line

use anyhow::{Context, Result, bail};
use sqoopline_core::SqoopCommand;

/// Run the render command
pub fn run(
    config_path: &str,
    job: &str,
    set: &[String],
    unset: &[String],
    json: bool,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let spec = config.find_job(job)?;

    let mut command = config.command_for(&spec);
    apply_overrides(&mut command, set, unset)?;

    let line = command
        .render(spec.direction)
        .with_context(|| format!("Job '{}' is invalid", spec.name))?;

    if json {
        let rendered = serde_json::json!({
            "job": spec.name,
            "direction": spec.direction,
            "command": line,
        });
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        println!("{}", line);
    }
    Ok(())
}

/// Apply `FLAG=VALUE` assignments, then removals
///
/// An assignment without `=` marks the flag present with no argument.
pub fn apply_overrides(
    command: &mut SqoopCommand,
    set: &[String],
    unset: &[String],
) -> Result<()> {
    for assignment in set {
        let (flag, value) = assignment
            .split_once('=')
            .unwrap_or((assignment.as_str(), ""));
        if !command.set_param(flag, value) {
            bail!("Unknown flag: {}", flag);
        }
        tracing::debug!("Override {} = {:?}", flag, value);
    }
    for flag in unset {
        if !command.unset_param(flag) {
            bail!("Unknown flag: {}", flag);
        }
        tracing::debug!("Unset {}", flag);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqoopline_core::SqoopOptions;

    fn base() -> SqoopCommand {
        SqoopCommand::new(SqoopOptions {
            table: Some("orders".to_string()),
            verbose: Some("true".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_apply_overrides() {
        let mut command = base();
        apply_overrides(
            &mut command,
            &[
                "--num-mappers=8".to_string(),
                "--connect=jdbc:sqlserver://db;databaseName=x".to_string(),
                "--direct".to_string(),
            ],
            &["--verbose".to_string()],
        )
        .unwrap();
        assert_eq!(
            command.command().unwrap(),
            "sqoop import --table orders --connect jdbc:sqlserver://db;databaseName=x --num-mappers 8 --direct "
        );
    }

    #[test]
    fn test_unknown_override_flag() {
        let mut command = base();
        let err = apply_overrides(&mut command, &["--mappers=8".to_string()], &[]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown flag: --mappers");
    }
}
