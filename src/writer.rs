use crate::utils::get_language_tag;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use content_inspector::{ContentType, inspect};
use log::debug;
use memmap2::{Mmap, MmapOptions};
use std::fs::File as StdFile;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Width of the `=` horizontal rule between sections.
const RULE_WIDTH: usize = 80;

/// Append-only writer for the report artifact. Sections are written in a
/// fixed order by the pipeline in `lib.rs`; this type only knows how to
/// format each kind of block.
pub struct ReportWriter<W: AsyncWriteExt + Unpin> {
    writer: BufWriter<W>,
}

impl ReportWriter<File> {
    pub fn new(writer: BufWriter<File>) -> Self {
        Self { writer }
    }

    /// Writes the `# Generated on:` header line that opens the report.
    pub async fn write_generated_header(&mut self, now: &DateTime<Local>) -> Result<()> {
        let header = format!("# Generated on: {}\n\n", now.format("%Y-%m-%d %H:%M:%S"));
        self.write_raw(&header).await
    }

    /// Copies the markdown file's bytes verbatim into the report.
    /// A read failure here is fatal to the whole run.
    pub async fn write_markdown(&mut self, path: &Path) -> Result<()> {
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;

        self.writer
            .write_all(&content)
            .await
            .context("Failed to write markdown content")
    }

    /// Writes a section title on its own line, preceded by a blank line.
    pub async fn write_section(&mut self, title: &str) -> Result<()> {
        self.write_raw(&format!("\n{title}\n")).await
    }

    pub async fn write_rule(&mut self) -> Result<()> {
        let rule = format!("{}\n", "=".repeat(RULE_WIDTH));
        self.write_raw(&rule).await
    }

    /// Writes the trailing `Generated on:` timestamp line.
    pub async fn write_timestamp(&mut self, now: &DateTime<Local>) -> Result<()> {
        let line = format!("\nGenerated on: {}\n", now.format("%Y-%m-%d %H:%M:%S"));
        self.write_raw(&line).await
    }

    pub async fn write_raw(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .context("Failed to write to output file")
    }

    /// Writes one collected file as a headed, fenced block.
    ///
    /// Read failures are the only non-fatal errors in the pipeline: they are
    /// reported inline in place of the content and the caller moves on to
    /// the next file.
    pub async fn write_file_entry(&mut self, path: &Path, project_root: &Path) -> Result<()> {
        let rel_path = path.strip_prefix(project_root).unwrap_or(path);

        debug!("Writing file: {}", rel_path.display());

        self.write_rule().await?;
        self.write_section(&format!("# File: {}\n", rel_path.display()))
            .await?;
        self.write_rule().await?;
        self.write_raw("\n\n").await?;

        let lang = get_language_tag(path);
        if !lang.is_empty() {
            self.write_raw(&format!("```{lang}\n")).await?;
        }

        match map_file(path) {
            Ok(Some(mmap)) => {
                let sample_size = std::cmp::min(8192, mmap.len());
                if inspect(&mmap[..sample_size]) == ContentType::BINARY {
                    self.write_raw("(binary file omitted)\n").await?;
                } else {
                    self.writer.write_all(&mmap).await.with_context(|| {
                        format!("Failed to write content of {}", rel_path.display())
                    })?;
                    if !mmap.ends_with(b"\n") {
                        self.write_raw("\n").await?;
                    }
                }
            }
            Ok(None) => {
                // Empty file: nothing but the trailing newline.
                self.write_raw("\n").await?;
            }
            Err(err) => {
                debug!("Failed to read {}: {err}", path.display());
                self.write_raw(&format!("Error reading file: {err}\n")).await?;
            }
        }

        if !lang.is_empty() {
            self.write_raw("```\n\n").await?;
        } else {
            self.write_raw("\n").await?;
        }

        Ok(())
    }

    pub async fn flush(&mut self) -> Result<()> {
        self.writer.flush().await.context("Failed to flush output")
    }
}

/// Memory-maps a file for rendering. Returns `None` for empty files, which
/// cannot be mapped.
fn map_file(path: &Path) -> io::Result<Option<Mmap>> {
    let file = StdFile::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(None);
    }
    let mmap = unsafe { MmapOptions::new().map(&file)? };
    Ok(Some(mmap))
}
