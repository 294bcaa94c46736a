//! Transfer options
//!
//! [`SqoopOptions`] is the typed form of a Sqoop invocation: one optional
//! field per valued flag and an optional boolean per toggle. It is what
//! callers fill in from code and what job files deserialize into.
//!
//! A toggle left out is unspecified and may be inherited from project
//! defaults; `false` switches it off even when the defaults turn it on.
//!
//! ```yaml
//! options:
//!   connect: jdbc:oracle:thin:@//db:1521/ORCL
//!   table: orders
//!   num_mappers: 4
//!   hive_import: true
//! ```
//!
//! YAML numbers and booleans given for valued flags are kept as their text,
//! so `num_mappers: 4` renders as `--num-mappers 4`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::flag::Flag;
use crate::parameters::ParameterSet;

/// Typed construction arguments for a [`SqoopCommand`](crate::SqoopCommand)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SqoopOptions {
    /// `-fs`
    #[serde(deserialize_with = "text")]
    pub fs: Option<String>,
    /// `--create`
    #[serde(deserialize_with = "text")]
    pub create: Option<String>,
    /// `--hive-drop-import-delims`
    pub hive_drop_import_delims: Option<bool>,
    /// `--fields-terminated-by`
    #[serde(deserialize_with = "text")]
    pub fields_terminated_by: Option<String>,
    /// `--input-escaped-by`
    #[serde(deserialize_with = "text")]
    pub input_escaped_by: Option<String>,
    /// `--enclosed-by`
    #[serde(deserialize_with = "text")]
    pub enclosed_by: Option<String>,
    /// `--escaped-by`
    #[serde(deserialize_with = "text")]
    pub escaped_by: Option<String>,
    /// `--null-string`
    #[serde(deserialize_with = "text")]
    pub null_string: Option<String>,
    /// `--null-non-string`
    #[serde(deserialize_with = "text")]
    pub null_non_string: Option<String>,
    /// `--table`
    #[serde(deserialize_with = "text")]
    pub table: Option<String>,
    /// `--target-dir`
    #[serde(deserialize_with = "text")]
    pub target_dir: Option<String>,
    /// `--warehouse-dir`
    #[serde(deserialize_with = "text")]
    pub warehouse_dir: Option<String>,
    /// `--export-dir`
    #[serde(deserialize_with = "text")]
    pub export_dir: Option<String>,
    /// `--delete-target-dir`
    pub delete_target_dir: Option<bool>,
    /// `--connect`
    #[serde(deserialize_with = "text")]
    pub connect: Option<String>,
    /// `--username`
    #[serde(deserialize_with = "text")]
    pub username: Option<String>,
    /// `--password`
    #[serde(deserialize_with = "text")]
    pub password: Option<String>,
    /// `--map-column-java`
    #[serde(deserialize_with = "text")]
    pub map_column_java: Option<String>,
    /// `--incremental`
    #[serde(deserialize_with = "text")]
    pub incremental: Option<String>,
    /// `--check-column`
    #[serde(deserialize_with = "text")]
    pub check_column: Option<String>,
    /// `--last-value`
    #[serde(deserialize_with = "text")]
    pub last_value: Option<String>,
    /// `--connection-manager`
    #[serde(deserialize_with = "text")]
    pub connection_manager: Option<String>,
    /// `--connection-param-file`
    #[serde(deserialize_with = "text")]
    pub connection_param_file: Option<String>,
    /// `--driver`
    #[serde(deserialize_with = "text")]
    pub driver: Option<String>,
    /// `--hadoop-home`
    #[serde(deserialize_with = "text")]
    pub hadoop_home: Option<String>,
    /// `--hadoop-mapred-home`
    #[serde(deserialize_with = "text")]
    pub hadoop_mapred_home: Option<String>,
    /// `--metadata-transaction-isolation-level`
    #[serde(deserialize_with = "text")]
    pub metadata_transaction_isolation_level: Option<String>,
    /// `--password-alias`
    #[serde(deserialize_with = "text")]
    pub password_alias: Option<String>,
    /// `--password-file`
    #[serde(deserialize_with = "text")]
    pub password_file: Option<String>,
    /// `--relaxed-isolation`
    #[serde(deserialize_with = "text")]
    pub relaxed_isolation: Option<String>,
    /// `--split-by`
    #[serde(deserialize_with = "text")]
    pub split_by: Option<String>,
    /// `--hive-table`
    #[serde(deserialize_with = "text")]
    pub hive_table: Option<String>,
    /// `--hive-partition-key`
    #[serde(deserialize_with = "text")]
    pub hive_partition_key: Option<String>,
    /// `--hive-partition-value`
    #[serde(deserialize_with = "text")]
    pub hive_partition_value: Option<String>,
    /// `--skip-dist-cache`
    #[serde(deserialize_with = "text")]
    pub skip_dist_cache: Option<String>,
    /// `--temporary-rootdir`
    #[serde(deserialize_with = "text")]
    pub temporary_root_dir: Option<String>,
    /// `--verbose`
    #[serde(deserialize_with = "text")]
    pub verbose: Option<String>,
    /// `--num-mappers`
    #[serde(deserialize_with = "text")]
    pub num_mappers: Option<String>,
    /// `--bindir`
    #[serde(deserialize_with = "text")]
    pub bindir: Option<String>,
    /// `--hive-delims-replacement`
    #[serde(deserialize_with = "text")]
    pub hive_delims_replacement: Option<String>,
    /// `--hive-import`
    pub hive_import: Option<bool>,
    /// `--hive-overwrite`
    pub hive_overwrite: Option<bool>,
    /// `--as-textfile`
    pub as_textfile: Option<bool>,
    /// `--as-parquetfile`
    pub as_parquetfile: Option<bool>,
    /// `--as-avrodatafile`
    pub as_avrodatafile: Option<bool>,
    /// `--direct`
    pub direct: Option<bool>,
    /// `--help`
    pub help: Option<bool>,
    /// `--hbase-table`
    #[serde(deserialize_with = "text")]
    pub hbase_table: Option<String>,
    /// `--column-family`
    #[serde(deserialize_with = "text")]
    pub column_family: Option<String>,
    /// `--hbase-row-key`
    #[serde(deserialize_with = "text")]
    pub hbase_row_key: Option<String>,
    /// `-m`
    #[serde(deserialize_with = "text")]
    pub m: Option<String>,
    /// `--query`
    #[serde(deserialize_with = "text")]
    pub query: Option<String>,

    /// JVM tuning options placed right after the subcommand, e.g. `-Xmx1024m`
    #[serde(deserialize_with = "text")]
    pub java_opts: Option<String>,

    /// Oracle partitions to import, rendered as
    /// `-Doraoop.import.partitions=<value>`
    #[serde(deserialize_with = "text")]
    pub oracle_partition: Option<String>,
}

impl SqoopOptions {
    /// Build the parameter set these options describe
    pub fn to_parameters(&self) -> ParameterSet {
        let valued = [
            (Flag::Fs, &self.fs),
            (Flag::Create, &self.create),
            (Flag::FieldsTerminatedBy, &self.fields_terminated_by),
            (Flag::InputEscapedBy, &self.input_escaped_by),
            (Flag::EnclosedBy, &self.enclosed_by),
            (Flag::EscapedBy, &self.escaped_by),
            (Flag::NullString, &self.null_string),
            (Flag::NullNonString, &self.null_non_string),
            (Flag::Table, &self.table),
            (Flag::TargetDir, &self.target_dir),
            (Flag::WarehouseDir, &self.warehouse_dir),
            (Flag::ExportDir, &self.export_dir),
            (Flag::Connect, &self.connect),
            (Flag::Username, &self.username),
            (Flag::Password, &self.password),
            (Flag::MapColumnJava, &self.map_column_java),
            (Flag::Incremental, &self.incremental),
            (Flag::CheckColumn, &self.check_column),
            (Flag::LastValue, &self.last_value),
            (Flag::ConnectionManager, &self.connection_manager),
            (Flag::ConnectionParamFile, &self.connection_param_file),
            (Flag::Driver, &self.driver),
            (Flag::HadoopHome, &self.hadoop_home),
            (Flag::HadoopMapredHome, &self.hadoop_mapred_home),
            (
                Flag::MetadataTransactionIsolationLevel,
                &self.metadata_transaction_isolation_level,
            ),
            (Flag::PasswordAlias, &self.password_alias),
            (Flag::PasswordFile, &self.password_file),
            (Flag::RelaxedIsolation, &self.relaxed_isolation),
            (Flag::SplitBy, &self.split_by),
            (Flag::HiveTable, &self.hive_table),
            (Flag::HivePartitionKey, &self.hive_partition_key),
            (Flag::HivePartitionValue, &self.hive_partition_value),
            (Flag::SkipDistCache, &self.skip_dist_cache),
            (Flag::TemporaryRootdir, &self.temporary_root_dir),
            (Flag::Verbose, &self.verbose),
            (Flag::NumMappers, &self.num_mappers),
            (Flag::Bindir, &self.bindir),
            (Flag::HiveDelimsReplacement, &self.hive_delims_replacement),
            (Flag::HbaseTable, &self.hbase_table),
            (Flag::ColumnFamily, &self.column_family),
            (Flag::HbaseRowKey, &self.hbase_row_key),
            (Flag::M, &self.m),
            (Flag::Query, &self.query),
        ];
        let mut params = ParameterSet::new();
        for (flag, value) in valued {
            if let Some(value) = value {
                params.set_flag(flag, value.as_str());
            }
        }
        for (flag, enabled) in self.toggles() {
            if enabled == Some(true) {
                params.enable_flag(flag);
            }
        }
        params
    }

    /// Toggles explicitly switched off
    pub fn disabled_toggles(&self) -> impl Iterator<Item = Flag> {
        self.toggles()
            .into_iter()
            .filter(|(_, enabled)| *enabled == Some(false))
            .map(|(flag, _)| flag)
    }

    fn toggles(&self) -> [(Flag, Option<bool>); 9] {
        [
            (Flag::HiveDropImportDelims, self.hive_drop_import_delims),
            (Flag::DeleteTargetDir, self.delete_target_dir),
            (Flag::HiveImport, self.hive_import),
            (Flag::HiveOverwrite, self.hive_overwrite),
            (Flag::AsTextfile, self.as_textfile),
            (Flag::AsParquetfile, self.as_parquetfile),
            (Flag::AsAvrodatafile, self.as_avrodatafile),
            (Flag::Direct, self.direct),
            (Flag::Help, self.help),
        ]
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

fn text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar = Option::<Scalar>::deserialize(deserializer)?;
    Ok(scalar.map(|s| match s {
        Scalar::Text(s) => s,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}
