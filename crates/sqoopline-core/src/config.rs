//! Project configuration and job files
//!
//! This module handles loading sqoopline projects from disk.
//!
//! # Configuration Files
//!
//! - `sqoopline.yaml` - Project root configuration and shared defaults
//! - `jobs/*.yaml` - One transfer job per file
//!
//! Options under `defaults` apply to every job; a job's own options win
//! wherever both set the same flag.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::command::SqoopCommand;
use crate::error::{Error, Result};
use crate::flag::Direction;
use crate::options::SqoopOptions;
use crate::runner::ShellRunner;

/// Name of the project configuration file
pub const PROJECT_FILE: &str = "sqoopline.yaml";

/// Directory holding job files, relative to the project root
pub const JOBS_DIR: &str = "jobs";

/// Root project configuration from `sqoopline.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Options inherited by every job
    #[serde(default)]
    pub defaults: SqoopOptions,

    /// How commands are executed
    #[serde(default)]
    pub runner: RunnerConfig,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Execution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Shell used to run rendered command lines
    #[serde(default = "default_shell")]
    pub shell: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
        }
    }
}

fn default_shell() -> String {
    "sh".to_string()
}

/// A transfer job from `jobs/*.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    /// Job name (must be unique within the project)
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Import or export
    #[serde(default)]
    pub direction: Direction,

    /// Sqoop options for this job
    #[serde(default)]
    pub options: SqoopOptions,
}

/// Main configuration container
#[derive(Debug, Clone)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Base path of the project
    pub base_path: PathBuf,
}

impl Config {
    /// Load configuration from a directory
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the project directory or sqoopline.yaml file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = Config::load("./warehouse-loads")?;
    /// println!("Project: {}", config.project.name);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let (config_path, base_path) = if path.is_dir() {
            (path.join(PROJECT_FILE), path.to_path_buf())
        } else {
            (
                path.to_path_buf(),
                path.parent().unwrap_or(Path::new(".")).to_path_buf(),
            )
        };

        if !config_path.exists() {
            return Err(Error::ConfigNotFound {
                path: config_path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let project: ProjectConfig = serde_yaml::from_str(&contents)?;
        tracing::debug!("Loaded project '{}' from {}", project.name, config_path.display());

        Ok(Self { project, base_path })
    }

    /// Load all job definitions under `jobs/`, sorted by path
    pub fn load_jobs(&self) -> Result<Vec<JobSpec>> {
        let jobs_dir = self.base_path.join(JOBS_DIR);
        if !jobs_dir.exists() {
            return Ok(vec![]);
        }

        let mut jobs: Vec<JobSpec> = Vec::new();
        for entry in walkdir::WalkDir::new(&jobs_dir).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            let is_yaml = entry
                .path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if !entry.file_type().is_file() || !is_yaml {
                continue;
            }

            let contents = std::fs::read_to_string(entry.path())?;
            let job: JobSpec = serde_yaml::from_str(&contents)?;
            if jobs.iter().any(|j| j.name == job.name) {
                return Err(Error::ConfigInvalid {
                    message: format!(
                        "duplicate job name '{}' in {}",
                        job.name,
                        entry.path().display()
                    ),
                });
            }
            jobs.push(job);
        }
        Ok(jobs)
    }

    /// Find a job by name
    pub fn find_job(&self, name: &str) -> Result<JobSpec> {
        self.load_jobs()?
            .into_iter()
            .find(|job| job.name == name)
            .ok_or_else(|| Error::JobNotFound {
                name: name.to_string(),
            })
    }

    /// Build the command for `job`, with project defaults filled in
    pub fn command_for(&self, job: &JobSpec) -> SqoopCommand {
        let defaults = &self.project.defaults;
        let mut inherited = defaults.to_parameters();
        for flag in job.options.disabled_toggles() {
            inherited.unset_flag(flag);
        }
        let mut command = SqoopCommand::new(job.options.clone());
        command.parameters_mut().inherit(&inherited);
        if command.java_opts().is_none() {
            command.set_java_opts(defaults.java_opts.clone());
        }
        if command.partition_directive().is_none() {
            command.set_oracle_partition(defaults.oracle_partition.clone());
        }
        command
    }

    /// Validate and render the command line for `job`
    pub fn render_job(&self, job: &JobSpec) -> Result<String> {
        self.command_for(job).render(job.direction)
    }

    /// Runner configured for this project
    pub fn runner(&self) -> ShellRunner {
        ShellRunner::new(self.project.runner.shell.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
name: test-project
"#;
        let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "test-project");
        assert_eq!(config.version, "0.1.0");
        assert_eq!(config.runner.shell, "sh");
        assert_eq!(config.defaults, SqoopOptions::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
name: test-project
version: "1.0.0"
defaults:
  connect: jdbc:oracle:thin:@//db:1521/ORCL
  username: etl
  num_mappers: 2
  java_opts: -Xmx1024m
runner:
  shell: bash
"#;
        let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.defaults.username.as_deref(), Some("etl"));
        assert_eq!(config.defaults.num_mappers.as_deref(), Some("2"));
        assert_eq!(config.defaults.java_opts.as_deref(), Some("-Xmx1024m"));
        assert_eq!(config.runner.shell, "bash");
    }

    #[test]
    fn test_parse_job_defaults_to_import() {
        let yaml = r#"
name: orders
options:
  table: ORDERS
"#;
        let job: JobSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(job.direction, Direction::Import);
        assert_eq!(job.options.table.as_deref(), Some("ORDERS"));
    }

    #[test]
    fn test_command_for_inherits_defaults() {
        let config = Config {
            project: serde_yaml::from_str(
                "name: p\ndefaults:\n  connect: jdbc:db\n  table: fallback\n  java_opts: -Xmx1g\n",
            )
            .unwrap(),
            base_path: PathBuf::from("."),
        };
        let job: JobSpec =
            serde_yaml::from_str("name: j\noptions:\n  table: ORDERS\n").unwrap();

        assert_eq!(
            config.render_job(&job).unwrap(),
            "sqoop import -Xmx1g --table ORDERS --connect jdbc:db"
        );
    }

    #[test]
    fn test_job_can_switch_off_default_toggle() {
        let config = Config {
            project: serde_yaml::from_str(
                "name: p\ndefaults:\n  hive_import: true\n  direct: true\n",
            )
            .unwrap(),
            base_path: PathBuf::from("."),
        };
        let job: JobSpec =
            serde_yaml::from_str("name: j\noptions:\n  table: t\n  hive_import: false\n")
                .unwrap();

        assert_eq!(
            config.render_job(&job).unwrap(),
            "sqoop import --table t --direct "
        );
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path());
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }
}
