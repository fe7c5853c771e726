//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A server-rendered personal portfolio site with a markdown blog", long_about = None)]
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
    /// Scaffold a new site (config, catalog, posts directory)
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new date-prefixed blog post
    New {
        /// Title of the new post
        title: String,

        /// Keywords written into the post's metadata comment
        #[arg(short, long, value_delimiter = ',')]
        keywords: Vec<String>,
    },

    /// Start the site server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides site.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides site.yml)
        #[arg(short, long)]
        ip: Option<String>,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// List site content (post, project)
    List {
        /// Type of content to list
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Check posts and catalog against the naming conventions
    Check,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
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
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio::commands::init::run(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, keywords } => {
            let site = folio::Site::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            folio::commands::new::run(&site, &title, &keywords)?;
        }

        Commands::Serve { port, ip, open } => {
            let site = folio::Site::new(&base_dir)?;
            let port = port.unwrap_or(site.config.server.port);
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio::server::start(&site, &ip, port, open).await?;
        }

        Commands::List { r#type } => {
            let site = folio::Site::new(&base_dir)?;
            folio::commands::list::run(&site, &r#type)?;
        }

        Commands::Check => {
            let site = folio::Site::new(&base_dir)?;
            let problems = folio::commands::check::run(&site)?;
            if problems > 0 {
                std::process::exit(1);
            }
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
