//! # contextor
//!
//! Generates a single dated context report for a project directory:
//!
//! - A caller-supplied markdown file opens the report
//! - A directory-tree listing (external `tree` command, with an internal
//!   fallback) describes the project structure
//! - Four fixed boilerplate sections follow
//! - Every project file passing the exclusion and extension rules is
//!   appended inside a language-tagged fenced block
//!
//! ## Usage
//!
//! ```rust,no_run
//! use contextor::{Config, FilterRules, run_contextor};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let project_root = std::env::current_dir()?;
//!     let config = Config {
//!         markdown_path: PathBuf::from("overview.md"),
//!         output_path: project_root.join("project_context_2025-01-01.txt"),
//!         project_root,
//!         rules: FilterRules::default(),
//!     };
//!
//!     run_contextor(config).await
//! }
//! ```

pub mod cli;
pub mod filewalker;
pub mod filter;
pub mod sections;
pub mod structure;
pub mod utils;
pub mod writer;

pub use cli::Config;
pub use filewalker::collect_files;
pub use filter::FilterRules;
pub use structure::{DirectoryTree, StructureRenderer, TreeCommand, render_structure};
pub use writer::ReportWriter;

use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info};
use tokio::fs::File;
use tokio::io::BufWriter;

/// Runs the whole pipeline: creates the output file and appends the report
/// sections in their fixed order.
///
/// A failure to create the output file or to read the markdown file is
/// fatal; per-file read failures during content rendering are reported
/// inline in the report and skipped over.
pub async fn run_contextor(config: Config) -> Result<()> {
    let file = File::create(&config.output_path)
        .await
        .with_context(|| {
            format!(
                "Failed to create output file: {}",
                config.output_path.display()
            )
        })?;
    let buf_writer = BufWriter::new(file);
    let mut writer = ReportWriter::new(buf_writer);

    writer.write_generated_header(&Local::now()).await?;
    writer.write_markdown(&config.markdown_path).await?;

    writer.write_section("# Project Structure").await?;
    writer.write_rule().await?;
    writer.write_raw("\n\n").await?;
    let listing = render_structure(
        &TreeCommand::default(),
        &config.project_root,
        &config.rules,
    );
    writer.write_raw(&listing).await?;

    for section in &sections::BOILERPLATE {
        writer.write_section(section.title).await?;
        writer.write_rule().await?;
        writer.write_raw(section.body).await?;
    }

    writer.write_timestamp(&Local::now()).await?;

    writer.write_rule().await?;
    writer.write_section("# Project Files Content").await?;
    writer.write_rule().await?;
    writer.write_raw("\n\n").await?;

    let files = collect_files(&config.project_root, &config.rules)?;
    info!("Collected {} files for rendering", files.len());

    for path in &files {
        writer.write_file_entry(path, &config.project_root).await?;
        debug!("Finished: {}", path.display());
    }

    writer.flush().await?;
    Ok(())
}
