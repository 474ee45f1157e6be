mod commands;
mod config;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::GlobalConfig;
use evcat_core::HttpEventStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "evcat")]
#[command(about = "Browse and manage the event catalog on a remote event store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, optionally filtered
    List {
        /// Only show events whose title contains this term
        #[arg(short, long)]
        search: Option<String>,

        /// Only show events tagged with this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List every category in use
    Categories,
    /// Show one event in full
    Show { id: String },
    /// Create a new event
    New {
        /// Event title (prompted for when omitted)
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Image URL
        #[arg(short, long)]
        image: Option<String>,

        /// Start time, e.g. "2026-03-20T15:00"
        #[arg(short, long)]
        start: Option<String>,

        /// End time
        #[arg(short, long)]
        end: Option<String>,

        /// Comma-separated categories, e.g. "music, tech"
        #[arg(short, long)]
        categories: Option<String>,
    },
    /// Edit an existing event
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        image: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        /// Comma-separated categories; replaces the existing tags
        #[arg(short, long)]
        categories: Option<String>,
    },
    /// Delete an event (asks for confirmation)
    Delete {
        id: String,

        /// Answer yes to the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = GlobalConfig::load()?;
    let store = HttpEventStore::new(config.server_url);

    match cli.command {
        Commands::List { search, category } => {
            commands::list::run(store, search.as_deref(), category.as_deref()).await
        }
        Commands::Categories => commands::categories::run(store).await,
        Commands::Show { id } => commands::show::run(store, &id).await,
        Commands::New {
            title,
            description,
            image,
            start,
            end,
            categories,
        } => {
            commands::new::run(
                store,
                commands::new::Fields {
                    title,
                    description,
                    image,
                    start,
                    end,
                    categories,
                },
            )
            .await
        }
        Commands::Edit {
            id,
            title,
            description,
            image,
            start,
            end,
            categories,
        } => {
            commands::edit::run(
                store,
                &id,
                commands::new::Fields {
                    title,
                    description,
                    image,
                    start,
                    end,
                    categories,
                },
            )
            .await
        }
        Commands::Delete { id, yes } => commands::delete::run(store, &id, yes).await,
    }
}
