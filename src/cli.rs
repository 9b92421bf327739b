use crate::filter::FilterRules;
use anyhow::Result;
use chrono::Local;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

pub struct Config {
    pub markdown_path: PathBuf,
    pub output_path: PathBuf,
    pub project_root: PathBuf,
    pub rules: FilterRules,
}

/// Version and platform details printed by `--version`.
pub struct VersionInfo {
    pub version: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

pub fn print_version() {
    let info = VersionInfo::current();
    println!("Contextor {}", info.version);
    println!("  OS/Arch: {}/{}", info.os, info.arch);
}

fn print_usage() {
    println!("Usage: contextor [options] <markdown_file>");
    println!("Options:");
    println!("  -v, --version    Print version information");
}

/// Parses the command line into a [`Config`].
///
/// `--version`/`-v` prints version information and exits 0 without creating
/// any output. A missing markdown-file argument prints usage to stdout and
/// exits 1. Both short-circuit the rest of the pipeline.
pub fn parse_args() -> Result<Config> {
    let matches = Command::new("contextor")
        .about("Concatenates project files and fixed context sections into a dated report")
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("markdown")
                .value_name("MARKDOWN_FILE")
                .help("Markdown file whose content opens the report")
                .required(false),
        )
        .get_matches();

    if matches.get_flag("version") {
        print_version();
        std::process::exit(0);
    }

    let Some(markdown) = matches.get_one::<String>("markdown") else {
        print_usage();
        std::process::exit(1);
    };

    let project_root = std::env::current_dir()?;
    let date = Local::now().format("%Y-%m-%d");
    let output_path = project_root.join(format!("project_context_{date}.txt"));

    Ok(Config {
        markdown_path: PathBuf::from(markdown),
        output_path,
        project_root,
        rules: FilterRules::default(),
    })
}
