//! # erp-landing
//!
//! Renders the ERP platform landing page to a static `index.html`.
//!
//! ```bash
//! erp-landing                    # writes dist/index.html
//! erp-landing --out public       # writes public/index.html
//! erp-landing --static --stdout  # no entrance animation, print to stdout
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use erp_landing::config::LandingConfig;
use erp_landing::render_page;

#[derive(Parser, Debug)]
#[command(name = "erp-landing")]
#[command(about = "Render the ERP platform landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output directory for index.html
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// Config file (default: landing.toml in the current directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render without the hero entrance animation
    #[arg(long = "static")]
    static_only: bool,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run() -> Result<()> {
    let args = Args::parse();

    // stdout may carry the document, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => LandingConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LandingConfig::load(Path::new(".")),
    };
    if args.static_only {
        config.motion.enabled = false;
    }
    debug!(?config, "resolved configuration");

    let html = render_page(&config).context("rendering landing page")?;

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    let path = args.out.join("index.html");
    fs::write(&path, &html).with_context(|| format!("writing {}", path.display()))?;

    info!(
        "wrote {} ({} bytes, motion: {:?})",
        path.display(),
        html.len(),
        config.motion_mode()
    );
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[erp-landing] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
