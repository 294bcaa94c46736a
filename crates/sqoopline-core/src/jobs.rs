//! Job control pass-throughs
//!
//! Listing running jobs and changing a running job's priority are fixed
//! argument vectors handed to a [`CommandRunner`]. Their output is returned
//! as-is; nothing here parses it.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::runner::{CommandRunner, ExecOutcome};

/// Tool asked to list jobs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobTool {
    /// `mapred job -list`: MapReduce jobs currently running
    #[default]
    Mapred,
    /// `sqoop job --list`: saved Sqoop jobs
    Sqoop,
}

impl JobTool {
    /// Argument vector listing this tool's jobs
    pub const fn list_args(self) -> &'static [&'static str] {
        match self {
            JobTool::Mapred => &["mapred", "job", "-list"],
            JobTool::Sqoop => &["sqoop", "job", "--list"],
        }
    }
}

/// MapReduce job priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// `VERY_HIGH`
    VeryHigh,
    /// `HIGH`
    High,
    /// `NORMAL`
    Normal,
    /// `LOW`
    Low,
    /// `VERY_LOW`
    VeryLow,
    /// `DEFAULT`
    Default,
}

impl Priority {
    /// Every accepted priority
    pub const ALL: [Priority; 6] = [
        Priority::VeryHigh,
        Priority::High,
        Priority::Normal,
        Priority::Low,
        Priority::VeryLow,
        Priority::Default,
    ];

    /// Name understood by `mapred job -set-priority`
    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::VeryHigh => "VERY_HIGH",
            Priority::High => "HIGH",
            Priority::Normal => "NORMAL",
            Priority::Low => "LOW",
            Priority::VeryLow => "VERY_LOW",
            Priority::Default => "DEFAULT",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::InvalidPriority {
                value: s.to_string(),
            })
    }
}

/// List jobs known to `tool`
pub fn list_running_jobs(runner: &dyn CommandRunner, tool: JobTool) -> ExecOutcome {
    let argv = tool.list_args();
    tracing::info!("Listing jobs: {}", argv.join(" "));
    runner.execute_args(argv)
}

/// Command line changing the priority of `job_id`
pub fn set_priority_command(job_id: &str, priority: Priority) -> String {
    format!("mapred job -set-priority {job_id} {priority}")
}

/// Change the priority of a running MapReduce job
///
/// `priority` is checked before anything runs; an unknown value is an
/// [`Error::InvalidPriority`] and the runner is never called.
pub fn set_priority(
    runner: &dyn CommandRunner,
    job_id: &str,
    priority: &str,
) -> Result<ExecOutcome> {
    let priority: Priority = priority.parse()?;
    tracing::info!("{}", set_priority_command(job_id, priority));
    Ok(runner.execute_args(&[
        "mapred",
        "job",
        "-set-priority",
        job_id,
        priority.as_str(),
    ]))
}
