use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

mod colors;
mod error;
mod generator;
mod header;
mod palette;
mod registry;
mod template;
mod terminal;
mod validator;
mod writer;

use palette::{Contrast, Mode, Palette};

/// everforest - Everforest theme generator
#[derive(Parser, Debug)]
#[command(name = "everforest")]
#[command(about = "Generate Everforest theme files for terminals, editors and CLI tools from one palette")]
struct Args {
    /// Repository root containing palettes/ and the tool directories
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate every variant of every tool that has a template
    Generate {
        /// Only generate this mode (requires --contrast)
        #[arg(long, requires = "contrast")]
        mode: Option<Mode>,

        /// Only generate this contrast (requires --mode)
        #[arg(long, requires = "mode")]
        contrast: Option<Contrast>,
    },

    /// Check the palette, directory layout and templates
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let root = args
        .root
        .canonicalize()
        .with_context(|| format!("Repository root '{}' not found", args.root.display()))?;
    tracing::debug!(root = %root.display(), "using repository root");

    match args.command {
        Command::Generate { mode, contrast } => run_generate(&root, mode.zip(contrast)).await,
        Command::Validate => run_validate(&root).await,
    }
}

/// Load the palette and fan out over all (or one) variants.
///
/// Exits with status 1 only when the palette cannot be used. Per-tool failures
/// are reported and leave the exit status untouched.
async fn run_generate(root: &Path, only: Option<(Mode, Contrast)>) -> Result<()> {
    terminal::print_banner("Starting Everforest theme generation...");

    let palette = match Palette::load(root).await {
        Ok(palette) => {
            terminal::print_success(&format!("Loaded palette from {}", palette::PALETTE_PATH));
            palette
        }
        Err(e) => {
            terminal::print_error(&format!("Failed to load palette: {}", e));
            std::process::exit(1);
        }
    };

    let result = match only {
        Some((mode, contrast)) => generator::generate_variant(root, &palette, mode, contrast).await,
        None => generator::generate_all(root, &palette).await,
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            terminal::print_error(&format!("Failed to resolve palette colors: {}", e));
            terminal::print_info("No theme files were written; add the missing variant to the palette");
            std::process::exit(1);
        }
    };

    terminal::print_section("Summary:");
    terminal::print_detail(&report.to_string());

    let failures: Vec<_> = report.failures().collect();
    if !failures.is_empty() {
        terminal::print_warning(&format!("{} tool/variant pairs failed:", failures.len()));
        for failure in failures {
            if let generator::Outcome::Failed(ref reason) = failure.outcome {
                terminal::print_item(&format!("{} ({}): {}", failure.tool.name, failure.variant(), reason));
            }
        }
    }

    println!();
    terminal::print_success("Theme generation complete!");
    Ok(())
}

/// Validate the repository; exits with status 1 if any error was recorded
async fn run_validate(root: &Path) -> Result<()> {
    terminal::print_banner("Starting Everforest validation...");
    terminal::print_info(&format!("Checking {}", root.display()));

    let report = validator::validate(root).await;
    report.print();

    if !report.is_ok() {
        std::process::exit(1);
    }

    Ok(())
}
