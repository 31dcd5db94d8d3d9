//! BOM CLI - Command-line interface for the BOM graph
//!
//! Loads a bill-of-materials manifest into a fresh graph and answers
//! listing and containment queries against it.

use bom_core::Category;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod manifest;

#[derive(Parser)]
#[command(name = "bom")]
#[command(version)]
#[command(about = "Query parts and assemblies in a bill of materials", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Manifest describing parts and relations
    #[arg(short, long, global = true, default_value = "bom.json")]
    manifest: PathBuf,

    /// Graph configuration (defaults to .bom/config.json beside the manifest)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show part and relation counts
    Status,

    /// List parts, optionally restricted to one category
    List {
        /// orphan, component, sub-assembly, top-level or assembly
        #[arg(long)]
        category: Option<String>,
    },

    /// Show every assembly containing a part
    Contains {
        /// Part id
        part: String,
    },

    /// Show every part below an assembly
    Descendants {
        /// Assembly id
        assembly: String,
    },

    /// Show the direct children of an assembly
    Children {
        /// Assembly id
        assembly: String,
    },

    /// Export the loaded graph to JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "bom-graph.json")]
        output: PathBuf,
    },

    /// Verify the classification index
    Check,
}

/// What `list` should show.
pub enum Listing {
    All,
    Assemblies,
    Category(Category),
}

fn parse_listing(category: Option<&str>) -> Result<Listing, bom_core::ParseCategoryError> {
    match category {
        None => Ok(Listing::All),
        Some(c) if c.eq_ignore_ascii_case("assembly") || c.eq_ignore_ascii_case("assemblies") => {
            Ok(Listing::Assemblies)
        }
        Some(c) => c.parse().map(Listing::Category),
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let source = commands::Source {
        manifest: &cli.manifest,
        config: cli.config.as_deref(),
    };

    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Status => commands::status(&source),
        Commands::List { category } => match parse_listing(category.as_deref()) {
            Ok(listing) => commands::list(&source, listing),
            Err(e) => Err(e.into()),
        },
        Commands::Contains { part } => commands::contains(&source, &part),
        Commands::Descendants { assembly } => commands::descendants(&source, &assembly),
        Commands::Children { assembly } => commands::children(&source, &assembly),
        Commands::Export { output } => commands::export(&source, &output),
        Commands::Check => commands::check(&source),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
