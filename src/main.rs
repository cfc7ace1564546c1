//! CLI entry point for tagshelf

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tagshelf")]
#[command(version)]
#[command(about = "Build-time tag index for a Markdown blog", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Build the tag index and write one route per tag
    #[command(alias = "b")]
    Build,

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show the posts filed under a tag, newest first
    Tag {
        /// Tag name
        name: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "tagshelf=debug,info"
    } else {
        "tagshelf=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            tagshelf::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, tags } => {
            let site = tagshelf::Site::new(&base_dir)?;
            let path = site.new_post(&title, &tags)?;
            println!("Created: {:?}", path);
        }

        Commands::Build => {
            let site = tagshelf::Site::new(&base_dir)?;
            tracing::info!("Building tag index...");
            let stats = site.build()?;
            println!(
                "Built {} tag pages from {} posts",
                stats.routes, stats.posts
            );
        }

        Commands::Clean => {
            let site = tagshelf::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = tagshelf::Site::new(&base_dir)?;
            tagshelf::commands::list::run(&site, &r#type)?;
        }

        Commands::Tag { name } => {
            let site = tagshelf::Site::new(&base_dir)?;
            tagshelf::commands::list::show_tag(&site, &name)?;
        }

        Commands::Version => {
            println!("tagshelf version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
