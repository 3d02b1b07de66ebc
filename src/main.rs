//! CLI entry point for blocksite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blocksite")]
#[command(version)]
#[command(about = "Render CMS-exported JSON pages built from content blocks", long_about = None)]
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

    /// Start the preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to `server.port` in the config)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to `server.ip` in the config)
        #[arg(short, long)]
        ip: Option<String>,

        /// Generate the static site before serving
        #[arg(short, long)]
        generate: bool,
    },

    /// Render one record to stdout
    Render {
        /// Content category (page, industryPage, article, caseStudy, researchReport, webinar)
        category: String,

        /// Record slug
        slug: String,
    },

    /// List the records of a category
    List {
        /// Content category
        #[arg(default_value = "article")]
        category: String,
    },

    /// Print the public path for a content type and slug
    Url {
        /// Content type, e.g. "case-study" or "Research Reports"
        content_type: String,

        slug: String,
    },

    /// Delete the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blocksite=debug,info"
    } else {
        "blocksite=info"
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
        Commands::Generate => {
            let site = blocksite::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip, generate } => {
            let site = blocksite::Site::new(&base_dir)?;

            if generate {
                tracing::info!("Generating static files...");
                site.generate()?;
            }

            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blocksite::server::start(&site, &ip, port).await?;
        }

        Commands::Render { category, slug } => {
            let site = blocksite::Site::new(&base_dir)?;
            blocksite::commands::render::run(&site, &category, &slug)?;
        }

        Commands::List { category } => {
            let site = blocksite::Site::new(&base_dir)?;
            blocksite::commands::list::run(&site, &category)?;
        }

        Commands::Url { content_type, slug } => {
            blocksite::commands::url::run(&content_type, &slug);
        }

        Commands::Clean => {
            let site = blocksite::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("blocksite version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
