//! CLI entry point for blogdata

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogdata::BuildMode;

#[derive(Parser)]
#[command(name = "blogdata")]
#[command(version)]
#[command(about = "Blog post loader: draft filtering, display titles and public URLs", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Build for publishing: hide work-in-progress posts (overrides BLOGDATA_ENV)
    #[arg(long, global = true, conflicts_with = "development")]
    production: bool,

    /// Build for drafting: show work-in-progress posts (overrides BLOGDATA_ENV)
    #[arg(long, global = true)]
    development: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the posts a listing page would show
    #[command(alias = "ls")]
    List,

    /// Write the post list as JSON
    #[command(alias = "e")]
    Export {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Serve the post list over HTTP, reloading on every request
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip from config)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Remove the output directory
    Clean,
}

impl Cli {
    fn mode(&self) -> BuildMode {
        if self.production {
            BuildMode::Production
        } else if self.development {
            BuildMode::Development
        } else {
            BuildMode::from_env()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogdata=debug,info"
    } else {
        "blogdata=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mode = cli.mode();
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = blogdata::Site::new(&base_dir)?;
    tracing::debug!("Site at {:?} in {} mode", site.base_dir, mode);

    match cli.command {
        Commands::List => {
            blogdata::commands::list::run(&site, mode)?;
        }

        Commands::Export { watch } => {
            let path = site.export(mode)?;
            println!("Exported {}", path.display());

            if watch {
                blogdata::commands::export::watch(&site, mode)?;
            }
        }

        Commands::Serve { port, ip } => {
            let port = port.unwrap_or(site.config.server.port);
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blogdata::server::start(&site, mode, &ip, port).await?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
