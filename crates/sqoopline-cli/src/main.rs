//! sqoopline CLI
//!
//! Developer tool for rendering, validating and running Sqoop transfer jobs.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// sqoopline - typed Sqoop command lines
#[derive(Parser)]
#[command(name = "sqoopline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file or project directory
    #[arg(short, long, default_value = "sqoopline.yaml", env = "SQOOPLINE_CONFIG")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new sqoopline project
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Project name (defaults to directory name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print the command line of a job
    Render {
        /// Job name
        job: String,

        /// Override a flag, e.g. --set --num-mappers=8
        #[arg(long = "set", value_name = "FLAG=VALUE", allow_hyphen_values = true)]
        set: Vec<String>,

        /// Remove a flag, e.g. --unset --verbose
        #[arg(long = "unset", value_name = "FLAG", allow_hyphen_values = true)]
        unset: Vec<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a job through the configured shell
    Run {
        /// Job name
        job: String,

        /// Print the command instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate every job without running anything
    Validate,

    /// Inspect and control running jobs
    Jobs {
        #[command(subcommand)]
        command: JobsCommands,
    },
}

#[derive(Subcommand)]
enum JobsCommands {
    /// List running jobs
    List {
        /// Tool to ask
        #[arg(long, value_enum, default_value_t = Tool::Mapred)]
        tool: Tool,
    },

    /// Change the priority of a running MapReduce job
    SetPriority {
        /// Job identifier, e.g. job_1580000000000_0042
        job_id: String,

        /// VERY_HIGH, HIGH, NORMAL, LOW, VERY_LOW or DEFAULT
        priority: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Tool {
    /// mapred job -list
    Mapred,
    /// sqoop job --list
    Sqoop,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Init { path, name } => {
            commands::init::run(&path, name.as_deref())?;
        }
        Commands::Render {
            job,
            set,
            unset,
            json,
        } => {
            commands::render::run(&cli.config, &job, &set, &unset, json)?;
        }
        Commands::Run { job, dry_run } => {
            let status = commands::run::run(&cli.config, &job, dry_run)?;
            return Ok(commands::exit_code(status));
        }
        Commands::Validate => {
            commands::validate::run(&cli.config)?;
        }
        Commands::Jobs { command } => match command {
            JobsCommands::List { tool } => {
                let tool = match tool {
                    Tool::Mapred => sqoopline_core::jobs::JobTool::Mapred,
                    Tool::Sqoop => sqoopline_core::jobs::JobTool::Sqoop,
                };
                let status = commands::jobs::list(tool)?;
                return Ok(commands::exit_code(status));
            }
            JobsCommands::SetPriority { job_id, priority } => {
                let status = commands::jobs::set_priority(&job_id, &priority)?;
                return Ok(commands::exit_code(status));
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
