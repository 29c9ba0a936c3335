//! `folio` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments and initialize logging.
//! - Delegate checks and builds to `folio_core::SiteService`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{FsContentRepository, SiteService};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", version, about = "Static portfolio site generator")]
struct Cli {
    /// trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr otherwise
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate content, render pages and check links without writing output
    Check {
        /// Site directory containing site.toml and content.toml
        #[arg(long, default_value = "site")]
        site: PathBuf,
    },
    /// Render the site into an output directory
    Build {
        #[arg(long, default_value = "site")]
        site: PathBuf,

        #[arg(long, default_value = "build")]
        out: PathBuf,
    },
    /// Print the core library version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| folio_core::default_log_level());
    folio_core::init_logging(level, cli.log_dir.as_deref())
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")?;

    match cli.command {
        Command::Check { site } => {
            let service = SiteService::new(FsContentRepository::new(&site));
            let report = service
                .check()
                .with_context(|| format!("check failed for `{}`", site.display()))?;
            info!(
                "event=cli_check module=cli status=ok checked={} broken={}",
                report.checked,
                report.broken.len()
            );
            println!(
                "ok: {} link(s) checked, {} broken",
                report.checked,
                report.broken.len()
            );
            for link in &report.broken {
                println!("  broken: {link}");
            }
        }
        Command::Build { site, out } => {
            let service = SiteService::new(FsContentRepository::new(&site));
            let report = service
                .build(&out)
                .with_context(|| format!("build failed for `{}`", site.display()))?;
            for artifact in &report.artifacts {
                println!("wrote {}", report.out_dir.join(artifact).display());
            }
            println!(
                "built {} artifact(s); {} link(s) checked",
                report.artifacts.len(),
                report.link_report.checked
            );
        }
        Command::Version => {
            println!("folio_core version={}", folio_core::core_version());
        }
    }
    Ok(())
}
