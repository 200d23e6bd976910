//! CLI entry point for foodgram-pages

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "foodgram-pages")]
#[command(version)]
#[command(about = "Static generator for the Foodgram About and Technologies pages", long_about = None)]
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
    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Clean the public folder
    Clean,

    /// List the pages and their metadata
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one page's HTML to stdout
    Render {
        /// Page to render (about, technologies)
        page: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "foodgram_pages=debug,info"
    } else {
        "foodgram_pages=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::Generate => {
            let site = foodgram_pages::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let site = foodgram_pages::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            foodgram_pages::server::start(&site, &ip, port).await?;
        }

        Commands::Clean => {
            let site = foodgram_pages::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { json } => {
            let site = foodgram_pages::Site::new(&base_dir)?;
            foodgram_pages::commands::list::run(&site, json)?;
        }

        Commands::Render { page } => {
            let site = foodgram_pages::Site::new(&base_dir)?;
            foodgram_pages::commands::render::run(&site, &page)?;
        }

        Commands::Version => {
            println!("foodgram-pages version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
