mod commands;

use app_state::load_app_settings;
use clap::{Parser, Subcommand};
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Operator tool for the motorcycle parts gallery.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List records, optionally filtered by search text and category.
    List {
        #[clap(long, short)]
        search: Option<String>,
        #[clap(long, short)]
        category: Option<String>,
    },
    /// Write the gallery document to a backup file.
    Export {
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
    /// Upload an image and add a record for it.
    Upload {
        file: PathBuf,
        /// Defaults to the file name without extension.
        #[clap(long, short)]
        name: Option<String>,
        #[clap(long, short)]
        category: String,
        #[clap(long, short, default_value = "")]
        tags: String,
        #[clap(long, short, default_value = "")]
        description: String,
    },
    /// Change fields of an existing record.
    Edit {
        id: i64,
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        tags: Option<String>,
        #[clap(long)]
        category: Option<String>,
        #[clap(long)]
        description: Option<String>,
        /// Replace the image as well.
        #[clap(long)]
        image: Option<PathBuf>,
    },
    /// Delete records by id, removing their hosted images first.
    Delete {
        #[clap(required = true)]
        ids: Vec<i64>,
    },
    /// Delete every record.
    DeleteAll {
        #[clap(long, default_value_t = false, action)]
        yes: bool,
    },
    /// Replace the gallery with the built-in sample images.
    Reset {
        #[clap(long, default_value_t = false, action)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let settings = load_app_settings()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    commands::run(args.command, &settings).await
}
