//! tocsync: add missing documents to a documentation table of contents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tocsync::{config, summary, updater};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tocsync")]
#[command(about = "Add missing documents to a documentation table of contents", long_about = None)]
struct Args {
    /// Documentation root containing the index document
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// Load settings from this file instead of ROOT/tocsync.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the updated index instead of writing it
    #[arg(long, conflicts_with = "check")]
    dry_run: bool,

    /// Exit with status 1 if any document is missing, without writing
    #[arg(long)]
    check: bool,

    /// Log decisions about discovery and placement
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    configure_logging(args.verbose, args.quiet);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn configure_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> tocsync::Result<ExitCode> {
    let cfg = match &args.config {
        Some(path) => config::Config::load_from(path)?,
        None => config::Config::load(&args.root)?,
    };
    let index_name = &cfg.index_file;

    println!("Updating {index_name} for: {}", args.root.display());
    println!();

    let update = updater::update_summary(&args.root, &cfg)?;

    if !update.is_changed() {
        println!("✓ {index_name} is already up to date!");
        println!("  No files needed to be added");
        return Ok(ExitCode::SUCCESS);
    }

    println!("Found {} missing file(s):", update.added.len());
    for path in &update.added {
        println!("  + {path}");
    }
    println!();

    if args.check {
        println!("✗ {index_name} is missing {} file(s)", update.added.len());
        return Ok(ExitCode::FAILURE);
    }

    if args.dry_run {
        println!("{}", update.content);
        return Ok(ExitCode::SUCCESS);
    }

    summary::write_index(&update.index_path, &update.content)?;
    if !update.index_existed {
        println!("Created {}", update.index_path.display());
    }
    println!("✓ {index_name} updated successfully!");
    println!("  Added {} file(s)", update.added.len());
    Ok(ExitCode::SUCCESS)
}
