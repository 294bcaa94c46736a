//! The closed Sqoop flag vocabulary
//!
//! Every flag sqoopline can emit is a variant of [`Flag`]. Variants are
//! declared in serialization order: a rendered command lists its flags in
//! exactly the order they appear below, whatever order the caller set them in.
//! Reordering variants changes every rendered command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Transfer direction, i.e. the Sqoop tool being invoked
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `sqoop import`: relational store into HDFS/Hive/HBase
    #[default]
    Import,
    /// `sqoop export`: HDFS directory into a relational table
    Export,
}

impl Direction {
    /// Sqoop subcommand name
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Import => "import",
            Direction::Export => "export",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a flag takes an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Emitted as `<flag> <value>`
    Valued,
    /// Boolean toggle, emitted as `<flag> ` with no argument
    PresenceOnly,
}

/// Which directions render a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Import only
    Import,
    /// Export only
    Export,
    /// Common to import and export
    Both,
}

macro_rules! declare_flags {
    ($($(#[$meta:meta])* $variant:ident => $literal:literal, $kind:ident, $scope:ident;)*) => {
        /// A Sqoop command-line flag
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Flag {
            $($(#[$meta])* $variant,)*
        }

        impl Flag {
            /// Every flag, in serialization order
            pub const ALL: &'static [Flag] = &[$(Flag::$variant,)*];

            /// Command-line literal, e.g. `--table`
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Flag::$variant => $literal,)*
                }
            }

            /// Whether the flag takes an argument
            pub const fn kind(self) -> FlagKind {
                match self {
                    $(Flag::$variant => FlagKind::$kind,)*
                }
            }

            /// Directions that render this flag
            pub const fn scope(self) -> Scope {
                match self {
                    $(Flag::$variant => Scope::$scope,)*
                }
            }
        }
    };
}

declare_flags! {
    /// Hadoop default filesystem, `-fs`
    Fs => "-fs", Valued, Both;
    /// Hive create-table name
    Create => "--create", Valued, Import;
    /// Drop `\n`, `\r` and `\01` from string fields on Hive import
    HiveDropImportDelims => "--hive-drop-import-delims", PresenceOnly, Import;
    /// Output field separator
    FieldsTerminatedBy => "--fields-terminated-by", Valued, Import;
    /// Input escape character
    InputEscapedBy => "--input-escaped-by", Valued, Import;
    /// Field enclosing character
    EnclosedBy => "--enclosed-by", Valued, Import;
    /// Output escape character
    EscapedBy => "--escaped-by", Valued, Import;
    /// Replacement for null string columns
    NullString => "--null-string", Valued, Import;
    /// Replacement for null non-string columns
    NullNonString => "--null-non-string", Valued, Import;
    /// Source (import) or destination (export) table
    Table => "--table", Valued, Both;
    /// HDFS destination directory
    TargetDir => "--target-dir", Valued, Import;
    /// HDFS parent for table destination directories
    WarehouseDir => "--warehouse-dir", Valued, Import;
    /// HDFS source directory of an export
    ExportDir => "--export-dir", Valued, Export;
    /// Delete the import target directory first
    DeleteTargetDir => "--delete-target-dir", PresenceOnly, Import;
    /// JDBC connection string
    Connect => "--connect", Valued, Both;
    /// Authentication username
    Username => "--username", Valued, Both;
    /// Authentication password
    Password => "--password", Valued, Both;
    /// Java type overrides for mapped columns
    MapColumnJava => "--map-column-java", Valued, Import;
    /// Incremental mode, `append` or `lastmodified`
    Incremental => "--incremental", Valued, Import;
    /// Column examined for incremental imports
    CheckColumn => "--check-column", Valued, Import;
    /// Last imported value of the check column
    LastValue => "--last-value", Valued, Import;
    /// Connection manager class
    ConnectionManager => "--connection-manager", Valued, Both;
    /// Properties file with extra connection parameters
    ConnectionParamFile => "--connection-param-file", Valued, Both;
    /// JDBC driver class
    Driver => "--driver", Valued, Both;
    /// Override for `$HADOOP_HOME`
    HadoopHome => "--hadoop-home", Valued, Both;
    /// Override for `$HADOOP_MAPRED_HOME`
    HadoopMapredHome => "--hadoop-mapred-home", Valued, Both;
    /// Isolation level for metadata queries
    MetadataTransactionIsolationLevel => "--metadata-transaction-isolation-level", Valued, Both;
    /// Credential provider alias
    PasswordAlias => "--password-alias", Valued, Both;
    /// Path to a file holding the password
    PasswordFile => "--password-file", Valued, Both;
    /// Read-uncommitted isolation for mappers
    RelaxedIsolation => "--relaxed-isolation", Valued, Both;
    /// Column used to split work units
    SplitBy => "--split-by", Valued, Import;
    /// Hive destination table
    HiveTable => "--hive-table", Valued, Import;
    /// Hive partition column
    HivePartitionKey => "--hive-partition-key", Valued, Import;
    /// Hive partition value
    HivePartitionValue => "--hive-partition-value", Valued, Import;
    /// Skip copying jars to the distributed cache
    SkipDistCache => "--skip-dist-cache", Valued, Both;
    /// HDFS directory for temporary files
    TemporaryRootdir => "--temporary-rootdir", Valued, Both;
    /// Verbose Sqoop logging
    Verbose => "--verbose", Valued, Both;
    /// Number of parallel map tasks
    NumMappers => "--num-mappers", Valued, Both;
    /// Output directory for generated classes
    Bindir => "--bindir", Valued, Import;
    /// Replacement for Hive delimiters in string fields
    HiveDelimsReplacement => "--hive-delims-replacement", Valued, Import;
    /// Import into Hive
    HiveImport => "--hive-import", PresenceOnly, Import;
    /// Overwrite existing Hive table data
    HiveOverwrite => "--hive-overwrite", PresenceOnly, Import;
    /// Write plain text files
    AsTextfile => "--as-textfile", PresenceOnly, Import;
    /// Write Parquet files
    AsParquetfile => "--as-parquetfile", PresenceOnly, Import;
    /// Write Avro data files
    AsAvrodatafile => "--as-avrodatafile", PresenceOnly, Import;
    /// Use the database's direct connector
    Direct => "--direct", PresenceOnly, Import;
    /// Print Sqoop usage
    Help => "--help", PresenceOnly, Both;
    /// HBase destination table
    HbaseTable => "--hbase-table", Valued, Import;
    /// HBase column family
    ColumnFamily => "--column-family", Valued, Import;
    /// Column(s) forming the HBase row key
    HbaseRowKey => "--hbase-row-key", Valued, Import;
    /// Short form of `--num-mappers`
    M => "-m", Valued, Both;
    /// Free-form import query
    Query => "--query", Valued, Import;
}

impl Flag {
    /// Number of declared flags
    pub const COUNT: usize = Self::ALL.len();

    /// Flags that must be set together to import into HBase
    pub const COLUMN_STORE_GROUP: [Flag; 3] =
        [Flag::HbaseTable, Flag::ColumnFamily, Flag::HbaseRowKey];

    /// Position in serialization order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this flag is a boolean toggle
    pub const fn is_presence_only(self) -> bool {
        matches!(self.kind(), FlagKind::PresenceOnly)
    }

    /// Whether commands of `direction` render this flag
    pub const fn applies_to(self, direction: Direction) -> bool {
        matches!(
            (self.scope(), direction),
            (Scope::Both, _)
                | (Scope::Import, Direction::Import)
                | (Scope::Export, Direction::Export)
        )
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::ALL
            .iter()
            .copied()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| Error::UnknownFlag {
                name: s.to_string(),
            })
    }
}
