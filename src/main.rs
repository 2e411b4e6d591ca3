//! CLI entry point for idaibin-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idaibin_blog::commands;
use idaibin_blog::commands::list::ListOptions;
use idaibin_blog::{Collection, Language, Site};

#[derive(Parser)]
#[command(name = "idaibin-blog")]
#[command(version)]
#[command(about = "Query the posts of the idaibin.dev bilingual blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// List posts of a collection, newest first
    #[command(alias = "ls")]
    List {
        /// Collection to query (blog, rustzenAdmin)
        #[arg(default_value = "blog")]
        collection: Collection,

        /// Language of the posts (zh, en)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Maximum number of posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Show a single page of results
        #[arg(short, long)]
        page: Option<usize>,

        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count all records of a collection
    Count {
        #[arg(default_value = "blog")]
        collection: Collection,
    },

    /// Detect the language of a URL path
    Lang {
        path: String,
    },

    /// Print the URL of a page in the other language
    Alternate {
        path: String,

        /// Route the post slugs live under
        #[arg(short, long, default_value = "/blog")]
        base: String,
    },

    /// Write the RSS feed
    Feed {
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Create a new post in both languages
    New {
        /// Title of the new post
        title: String,

        #[arg(short, long, default_value = "blog")]
        collection: Collection,

        /// File name to use instead of the slugified title
        #[arg(short, long)]
        slug: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "idaibin_blog=debug,info"
    } else {
        "idaibin_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = Site::new(&base_dir)?;

    match cli.command {
        Commands::List {
            collection,
            lang,
            limit,
            page,
            json,
        } => {
            let options = ListOptions {
                language: lang,
                limit,
                page,
                json,
            };
            commands::list::run(&site, collection, &options).await?;
        }

        Commands::Count { collection } => {
            commands::list::count(&site, collection).await?;
        }

        Commands::Lang { path } => {
            commands::lang::detect(&site, &path);
        }

        Commands::Alternate { path, base } => {
            commands::lang::alternate(&site, &path, &base);
        }

        Commands::Feed { lang } => {
            tracing::info!("Generating feed...");
            let path = commands::feed::run(&site, lang).await?;
            println!("Generated {:?}", path);
        }

        Commands::New {
            title,
            collection,
            slug,
        } => {
            tracing::info!("Creating new post in {} with title: {}", collection, title);
            commands::new::create_post(&site, &title, collection, slug.as_deref())?;
        }
    }

    Ok(())
}
