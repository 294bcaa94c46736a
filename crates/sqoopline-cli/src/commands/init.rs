//! Initialize a new sqoopline project

use anyhow::Result;
use sqoopline_core::config::{JOBS_DIR, PROJECT_FILE};
use std::fs;
use std::path::Path;

/// Run the init command
pub fn run(path: &str, name: Option<&str>) -> Result<()> {
    let project_dir = Path::new(path);

    // Create directory if it doesn't exist
    if !project_dir.exists() {
        fs::create_dir_all(project_dir)?;
    }

    let abs_path = project_dir.canonicalize()?;

    let project_name = match name {
        Some(n) => n.to_string(),
        None => abs_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Could not determine project name from path"))?,
    };

    if project_dir.join(PROJECT_FILE).exists() {
        anyhow::bail!(
            "Directory '{}' already contains a {}",
            project_dir.display(),
            PROJECT_FILE
        );
    }

    tracing::info!("Creating new sqoopline project: {}", project_name);

    fs::create_dir_all(project_dir.join(JOBS_DIR))?;

    let config = format!(
        r#"# sqoopline project configuration
name: {project_name}
version: "0.1.0"

# Options inherited by every job in jobs/
defaults:
  connect: "jdbc:mysql://localhost:3306/sales"
  username: etl
  password_file: /user/etl/.password
  num_mappers: 4

runner:
  shell: sh
"#
    );
    fs::write(project_dir.join(PROJECT_FILE), config)?;

    let example_import = r#"# Example import: one table into Hive
name: example_import
description: Import the orders table into Hive

options:
  table: orders
  hive_import: true
  hive_table: staging.orders
  incremental: append
  check_column: id
  last_value: 0
"#;
    fs::write(
        project_dir.join(JOBS_DIR).join("example_import.yaml"),
        example_import,
    )?;

    let example_export = r#"# Example export: aggregated results back to the database
name: example_export
direction: export

options:
  table: orders_summary
  export_dir: /warehouse/orders_summary
"#;
    fs::write(
        project_dir.join(JOBS_DIR).join("example_export.yaml"),
        example_export,
    )?;

    tracing::info!(
        "✓ Created project '{}' at {}",
        project_name,
        abs_path.display()
    );
    tracing::info!("");
    tracing::info!("Next steps:");
    if path != "." {
        tracing::info!("  cd {}", project_dir.display());
    }
    tracing::info!("  sqoopline validate                     # Check every job");
    tracing::info!("  sqoopline render example_import        # Print the command line");
    tracing::info!("  sqoopline run example_import           # Run it");

    Ok(())
}
