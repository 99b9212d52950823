//! CLI entry point for postview

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postview")]
#[command(version)]
#[command(about = "Render markdown blog posts into styled HTML pages", long_about = None)]
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
    /// Load the post page for a route and print its HTML
    #[command(alias = "s")]
    Show {
        /// Route path, e.g. /my-post
        route: String,

        /// Explicit slug parameter, takes precedence over the route path
        #[arg(long)]
        slug: Option<String>,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Post key (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List posts
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postview=debug,info"
    } else {
        "postview=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Show { route, slug } => {
            let blog = postview::Blog::new(&base_dir)?;
            postview::commands::show::run(&blog, &route, slug.as_deref()).await?;
        }

        Commands::New { title, slug } => {
            let blog = postview::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            postview::commands::new::run(&blog, &title, slug.as_deref())?;
        }

        Commands::List => {
            let blog = postview::Blog::new(&base_dir)?;
            postview::commands::list::run(&blog)?;
        }

        Commands::Version => {
            println!("postview version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
