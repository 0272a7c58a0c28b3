//! Frost - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `frost search <QUERY> [--limit N]` | Print the best matches as JSON |
//! | `frost index --id ID --title T --text TEXT` | Store a document and its embedding |
//! | `frost init-schema` | Create the PostgreSQL tables |
//! | `frost show-config` | Print the effective configuration |
//!
//! Ctrl-C cancels the running command; pending retries stop at once.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use frost::CancellationToken;
use frost::application::SemanticSearchInput;
use frost::commands;
use frost::domain::value_objects::Document;
use frost::infrastructure::logging::log_config_loaded;
use frost::infrastructure::{ConfigLoader, init_logging};
use tracing::warn;

/// Command line interface for Frost
#[derive(Parser, Debug)]
#[command(name = "frost")]
#[command(about = "Frost - semantic search over document embeddings")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search stored documents by meaning
    Search {
        /// Free text query
        query: String,
        /// Number of results (1-20, defaults to search.default_limit)
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Store a document and generate its embedding
    Index {
        /// Document id; re-indexing an id replaces it
        #[arg(long)]
        id: String,
        /// Document title
        #[arg(long)]
        title: String,
        #[command(flatten)]
        content: ContentSource,
    },
    /// Create the PostgreSQL tables
    InitSchema,
    /// Print the effective configuration with secrets masked
    ShowConfig,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ContentSource {
    /// Document text
    #[arg(long)]
    text: Option<String>,
    /// Read document text from a file
    #[arg(long)]
    file: Option<PathBuf>,
}

impl ContentSource {
    fn read(self) -> anyhow::Result<String> {
        match (self.text, self.file) {
            (Some(text), _) => Ok(text),
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display())),
            (None, None) => anyhow::bail!("either --text or --file is required"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }

    if let Command::ShowConfig = cli.command {
        let config = loader
            .load_unvalidated()
            .context("Failed to load configuration")?;
        print!("{}", commands::render_config(&config)?);
        return Ok(());
    }

    let config = loader.load().context("Failed to load configuration")?;
    let _log_guard = init_logging(&config.logging)?;
    log_config_loaded(loader.source_path().as_deref());
    let context = frost::infrastructure::AppContext::build(&config)?;

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling");
            interrupt.cancel();
        }
    });

    match cli.command {
        Command::Search { query, limit } => {
            let input = SemanticSearchInput { query, limit };
            let hits = commands::search(&context, input, &cancel).await?;
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        Command::Index { id, title, content } => {
            let document = Document::new(id, title, content.read()?);
            let embedding = commands::index_document(&context, document, &cancel).await?;
            println!("{}", serde_json::to_string_pretty(&embedding)?);
        }
        Command::InitSchema => commands::init_schema(&context).await?,
        Command::ShowConfig => {}
    }

    Ok(())
}
