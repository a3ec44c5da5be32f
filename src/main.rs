//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::content::Family;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Inspect the markdown content of a portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, projects or learning posts, newest first
    #[command(alias = "ls")]
    List {
        /// Content family (posts, projects, learning)
        #[arg(default_value = "posts")]
        family: Family,

        /// Restrict learning posts to one journey
        #[arg(short, long)]
        journey: Option<String>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show a single item
    Show {
        /// Content family (posts, projects, learning)
        family: Family,

        /// Slug of the item, with or without the .md extension
        slug: String,

        /// Journey of a learning post
        #[arg(short, long)]
        journey: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List learning journeys
    Journeys,

    /// Count tag usage
    Tags {
        /// Content family (defaults to all)
        family: Option<Family>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            family,
            journey,
            json,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&site, family, journey.as_deref(), json)?;
        }

        Commands::Show {
            family,
            slug,
            journey,
            json,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&site, family, &slug, journey.as_deref(), json)?;
        }

        Commands::Journeys => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::journeys::run(&site)?;
        }

        Commands::Tags { family } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::tags::run(&site, family)?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
