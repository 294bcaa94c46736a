//! Sqoop command builder
//!
//! [`SqoopCommand`] owns a [`ParameterSet`] plus two raw tokens that bypass
//! the ordered flags: JVM options and the Oracle partition directive. Every
//! render re-validates the current parameters, so a command mutated into an
//! invalid state fails on the next render rather than producing a string.
//!
//! # Example
//!
//! ```rust
//! use sqoopline_core::{SqoopCommand, SqoopOptions};
//!
//! let command = SqoopCommand::new(SqoopOptions {
//!     table: Some("prova".to_string()),
//!     null_string: Some("''".to_string()),
//!     fields_terminated_by: Some("\"".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(
//!     command.command().unwrap(),
//!     "sqoop import --fields-terminated-by \" --null-string '' --table prova"
//! );
//! ```

use crate::error::{Error, Result};
use crate::flag::{Direction, Flag};
use crate::options::SqoopOptions;
use crate::parameters::ParameterSet;
use crate::runner::{CommandRunner, ExecOutcome};

/// Executable name at the head of every rendered command
pub const SQOOP_BIN: &str = "sqoop";

/// Prefix turning a partition list into an OraOop generic argument
pub const PARTITION_DIRECTIVE_PREFIX: &str = "-Doraoop.import.partitions=";

/// Accepted values of `--incremental`
pub const INCREMENTAL_MODES: [&str; 2] = ["append", "lastmodified"];

/// Builder for `sqoop import` and `sqoop export` command lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqoopCommand {
    params: ParameterSet,
    java_opts: Option<String>,
    partition_directive: Option<String>,
}

impl SqoopCommand {
    /// Create a command from typed options
    ///
    /// Construction never fails; validation happens on render.
    pub fn new(options: SqoopOptions) -> Self {
        let mut command = Self::from_parameters(options.to_parameters());
        command.set_java_opts(options.java_opts);
        command.set_oracle_partition(options.oracle_partition);
        command
    }

    /// Create a command around an existing parameter set
    pub fn from_parameters(params: ParameterSet) -> Self {
        Self {
            params,
            java_opts: None,
            partition_directive: None,
        }
    }

    /// Current parameters
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Mutable access to the parameters
    pub fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    /// Value of the flag called `name`
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Set the flag called `name`; `false` if no such flag is declared
    pub fn set_param(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.params.set(name, value)
    }

    /// Reset the flag called `name`; `false` if no such flag is declared
    pub fn unset_param(&mut self, name: &str) -> bool {
        self.params.unset(name)
    }

    /// Replace the JVM options token
    pub fn set_java_opts(&mut self, java_opts: Option<String>) {
        self.java_opts = java_opts;
    }

    /// JVM options token, if any
    pub fn java_opts(&self) -> Option<&str> {
        self.java_opts.as_deref()
    }

    /// Replace the Oracle partition list; `None` or an empty list removes
    /// the directive
    pub fn set_oracle_partition(&mut self, partitions: Option<String>) {
        self.partition_directive = partitions
            .filter(|p| !p.is_empty())
            .map(|p| format!("{PARTITION_DIRECTIVE_PREFIX}{p}"));
    }

    /// Rendered partition directive, if any
    pub fn partition_directive(&self) -> Option<&str> {
        self.partition_directive.as_deref()
    }

    /// Render the `sqoop import` command line
    pub fn command(&self) -> Result<String> {
        self.render(Direction::Import)
    }

    /// Render the `sqoop export` command line
    pub fn export_command(&self) -> Result<String> {
        self.render(Direction::Export)
    }

    /// Check the parameters against the rules of `direction`
    pub fn validate(&self, direction: Direction) -> Result<()> {
        if self.params.is_empty() {
            return Err(Error::AllParametersEmpty);
        }

        let help = self.params.is_set(Flag::Help);
        match direction {
            Direction::Import => {
                if !help
                    && !self.params.has_value(Flag::Table)
                    && !self.params.has_value(Flag::Query)
                {
                    return Err(Error::MissingTargetSelector);
                }

                if let Some(mode) = self.params.get_flag(Flag::Incremental)
                    && !INCREMENTAL_MODES.contains(&mode)
                {
                    return Err(Error::InvalidIncrementalMode {
                        value: mode.to_string(),
                    });
                }

                let missing: Vec<Flag> = Flag::COLUMN_STORE_GROUP
                    .into_iter()
                    .filter(|flag| !self.params.is_set(*flag))
                    .collect();
                if !missing.is_empty() && missing.len() < Flag::COLUMN_STORE_GROUP.len() {
                    return Err(Error::MissingColumnStoreDependency { missing });
                }
            }
            Direction::Export => {
                if !help && !self.params.has_value(Flag::ExportDir) {
                    return Err(Error::MissingExportDir);
                }
            }
        }

        Ok(())
    }

    /// Validate, then render the command line for `direction`
    pub fn render(&self, direction: Direction) -> Result<String> {
        self.validate(direction)?;

        let mut tokens: Vec<String> = vec![SQOOP_BIN.to_string(), direction.to_string()];
        if let Some(java_opts) = self.java_opts.as_deref().filter(|o| !o.is_empty()) {
            tokens.push(java_opts.to_string());
        }
        if direction == Direction::Import
            && let Some(directive) = &self.partition_directive
        {
            tokens.push(directive.clone());
        }
        tokens.extend(
            self.params
                .iter_for(direction)
                .map(|(flag, value)| format!("{} {}", flag, value)),
        );

        let line = tokens.join(" ");
        tracing::debug!("Rendered {} command: {}", direction, line);
        Ok(line)
    }

    /// Render and run the import through `runner`
    ///
    /// Validation errors are returned without running anything; a command
    /// that ran, successfully or not, comes back as an [`ExecOutcome`].
    pub fn perform_import(&self, runner: &dyn CommandRunner) -> Result<ExecOutcome> {
        self.perform(Direction::Import, runner)
    }

    /// Render and run the export through `runner`
    pub fn perform_export(&self, runner: &dyn CommandRunner) -> Result<ExecOutcome> {
        self.perform(Direction::Export, runner)
    }

    /// Render and run the command for `direction` through `runner`
    pub fn perform(&self, direction: Direction, runner: &dyn CommandRunner) -> Result<ExecOutcome> {
        let line = self.render(direction)?;
        tracing::info!("Running sqoop {}", direction);
        let outcome = runner.execute(&line);
        if let ExecOutcome::FailedToStart { reason } = &outcome {
            tracing::warn!("sqoop {} could not be started: {}", direction, reason);
        }
        Ok(outcome)
    }
}

impl From<SqoopOptions> for SqoopCommand {
    fn from(options: SqoopOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn options_with_table(table: &str) -> SqoopOptions {
        SqoopOptions {
            table: Some(table.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_command_fails_all_empty() {
        let command = SqoopCommand::default();
        assert!(matches!(command.command(), Err(Error::AllParametersEmpty)));
        assert!(matches!(
            command.export_command(),
            Err(Error::AllParametersEmpty)
        ));
    }

    #[test]
    fn test_java_opts_alone_is_still_empty() {
        let command = SqoopCommand::new(SqoopOptions {
            java_opts: Some("-Xmx1024m".to_string()),
            ..Default::default()
        });
        assert!(matches!(command.command(), Err(Error::AllParametersEmpty)));
    }

    #[test]
    fn test_missing_table_and_query() {
        let command = SqoopCommand::new(SqoopOptions {
            fields_terminated_by: Some("\"".to_string()),
            ..Default::default()
        });
        let err = command.command().unwrap_err();
        assert!(matches!(err, Error::MissingTargetSelector));
        assert!(err.to_string().starts_with("--table or --query is required"));
    }

    #[test]
    fn test_empty_table_is_not_a_selector() {
        let command = SqoopCommand::new(options_with_table(""));
        assert!(matches!(
            command.command(),
            Err(Error::MissingTargetSelector)
        ));
    }

    #[test]
    fn test_help_bypasses_target_selector() {
        let command = SqoopCommand::new(SqoopOptions {
            help: Some(true),
            ..Default::default()
        });
        assert_eq!(command.command().unwrap(), "sqoop import --help ");
    }

    #[test]
    fn test_query_is_a_selector() {
        let command = SqoopCommand::new(SqoopOptions {
            query: Some("'SELECT * FROM t WHERE $CONDITIONS'".to_string()),
            target_dir: Some("/data/t".to_string()),
            ..Default::default()
        });
        assert_eq!(
            command.command().unwrap(),
            "sqoop import --target-dir /data/t --query 'SELECT * FROM t WHERE $CONDITIONS'"
        );
    }

    #[rstest]
    #[case("append")]
    #[case("lastmodified")]
    fn test_valid_incremental_modes(#[case] mode: &str) {
        let mut command = SqoopCommand::new(options_with_table("t"));
        command.set_param("--incremental", mode);
        assert_eq!(
            command.command().unwrap(),
            format!("sqoop import --table t --incremental {mode}")
        );
    }

    #[rstest]
    #[case("bogus")]
    #[case("Append")]
    #[case("")]
    fn test_invalid_incremental_modes(#[case] mode: &str) {
        let mut command = SqoopCommand::new(options_with_table("t"));
        command.set_param("--incremental", mode);
        match command.command() {
            Err(Error::InvalidIncrementalMode { value }) => assert_eq!(value, mode),
            other => panic!("expected InvalidIncrementalMode, got {other:?}"),
        }
    }

    #[rstest]
    #[case(&[Flag::HbaseTable], &[Flag::ColumnFamily, Flag::HbaseRowKey])]
    #[case(&[Flag::ColumnFamily], &[Flag::HbaseTable, Flag::HbaseRowKey])]
    #[case(&[Flag::HbaseTable, Flag::HbaseRowKey], &[Flag::ColumnFamily])]
    fn test_partial_column_store_group(#[case] set: &[Flag], #[case] expected: &[Flag]) {
        let mut command = SqoopCommand::new(options_with_table("t"));
        for flag in set {
            command.parameters_mut().set_flag(*flag, "x");
        }
        match command.command() {
            Err(Error::MissingColumnStoreDependency { missing }) => {
                assert_eq!(missing, expected)
            }
            other => panic!("expected MissingColumnStoreDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_flag_of_other_direction_counts_as_set() {
        let mut command = SqoopCommand::default();
        command.set_param("--export-dir", "/data/out");
        assert!(matches!(
            command.command(),
            Err(Error::MissingTargetSelector)
        ));

        let mut command = SqoopCommand::default();
        command.set_param("--hive-import", "");
        assert!(matches!(
            command.export_command(),
            Err(Error::MissingExportDir)
        ));
    }

    #[test]
    fn test_help_bypasses_export_dir() {
        let command = SqoopCommand::new(SqoopOptions {
            help: Some(true),
            ..Default::default()
        });
        assert_eq!(command.export_command().unwrap(), "sqoop export --help ");
    }

    #[test]
    fn test_validation_order_is_deterministic() {
        let mut command = SqoopCommand::default();
        command.set_param("--incremental", "bogus");
        command.set_param("--hbase-table", "h");
        for _ in 0..3 {
            assert!(matches!(
                command.command(),
                Err(Error::MissingTargetSelector)
            ));
        }
    }

    #[test]
    fn test_presence_only_flag_renders_trailing_space() {
        let command = SqoopCommand::new(SqoopOptions {
            table: Some("t".to_string()),
            hive_import: Some(true),
            ..Default::default()
        });
        assert_eq!(command.command().unwrap(), "sqoop import --table t --hive-import ");
    }

    #[test]
    fn test_partition_directive_precedes_flags() {
        let command = SqoopCommand::new(SqoopOptions {
            table: Some("SALES".to_string()),
            java_opts: Some("-Xmx512m".to_string()),
            oracle_partition: Some("'P2019,P2020'".to_string()),
            ..Default::default()
        });
        assert_eq!(
            command.partition_directive(),
            Some("-Doraoop.import.partitions='P2019,P2020'")
        );
        assert_eq!(
            command.command().unwrap(),
            "sqoop import -Xmx512m -Doraoop.import.partitions='P2019,P2020' --table SALES"
        );
    }

    #[test]
    fn test_partition_directive_is_import_only() {
        let command = SqoopCommand::new(SqoopOptions {
            table: Some("SALES".to_string()),
            export_dir: Some("/data/sales".to_string()),
            oracle_partition: Some("P1".to_string()),
            ..Default::default()
        });
        assert_eq!(
            command.export_command().unwrap(),
            "sqoop export --table SALES --export-dir /data/sales"
        );
    }

    #[test]
    fn test_empty_partition_list_is_no_directive() {
        let command = SqoopCommand::new(SqoopOptions {
            table: Some("t".to_string()),
            oracle_partition: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(command.partition_directive(), None);
        assert_eq!(command.command().unwrap(), "sqoop import --table t");
    }

    #[test]
    fn test_export_requires_export_dir() {
        let command = SqoopCommand::new(options_with_table("t"));
        assert!(matches!(
            command.export_command(),
            Err(Error::MissingExportDir)
        ));
    }

    #[test]
    fn test_export_skips_import_only_flags() {
        let command = SqoopCommand::new(SqoopOptions {
            table: Some("t".to_string()),
            export_dir: Some("/data/t".to_string()),
            hive_import: Some(true),
            num_mappers: Some("2".to_string()),
            connect: Some("jdbc:mysql://db/sales".to_string()),
            ..Default::default()
        });
        assert_eq!(
            command.export_command().unwrap(),
            "sqoop export --table t --export-dir /data/t --connect jdbc:mysql://db/sales --num-mappers 2"
        );
        assert_eq!(
            command.command().unwrap(),
            "sqoop import --table t --connect jdbc:mysql://db/sales --num-mappers 2 --hive-import "
        );
    }

    #[test]
    fn test_unset_removes_flag_from_next_render() {
        let mut command = SqoopCommand::new(SqoopOptions {
            table: Some("t".to_string()),
            username: Some("user".to_string()),
            ..Default::default()
        });
        assert_eq!(command.command().unwrap(), "sqoop import --table t --username user");
        assert!(command.unset_param("--username"));
        assert_eq!(command.get_param("--username"), None);
        assert_eq!(command.command().unwrap(), "sqoop import --table t");
    }

    #[test]
    fn test_from_options() {
        let command: SqoopCommand = options_with_table("t").into();
        assert_eq!(command.command().unwrap(), "sqoop import --table t");
    }
}
