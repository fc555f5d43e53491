use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kawi::clipboard;
use kawi::config::{resolve_api_key, Config, CredentialStatus, SourceKind};
use kawi::generation::{GenerationSession, GenerationState, StateHolder};
use kawi::region::Region;
use kawi::source::{MockSource, PoemSource, RemoteSource};
use kawi::store::{
    FileStore, Favorites, History, KeywordBook, KeywordUpdate, PoemRecord, SaveResult,
    MAX_KEYWORDS,
};

#[derive(Parser)]
#[command(name = "kawi", version, about = "Thai regional poem generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a poem for a region and optional keywords
    Generate {
        /// Region code: north, south, northeast, or central
        #[arg(long)]
        region: String,
        /// Keyword to weave into the poem (repeat up to 3 times)
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        /// Override the configured source: mock or remote
        #[arg(long)]
        source: Option<String>,
        /// Copy the poem to the system clipboard
        #[arg(long)]
        copy: bool,
        /// Save the poem to favorites
        #[arg(long)]
        save: bool,
    },
    /// List recently generated poems, newest first
    History,
    /// List or clear favorite poems
    Favorites {
        #[arg(long)]
        clear: bool,
    },
    /// Manage the saved keyword list for a region
    Keywords {
        #[arg(long)]
        region: String,
        /// Add a keyword to the region's list
        #[arg(long)]
        add: Option<String>,
        /// Remove a keyword from the region's list
        #[arg(long)]
        remove: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Command::Generate {
            region,
            keywords,
            source,
            copy,
            save,
        } => generate(&config, &region, keywords, source, copy, save).await,
        Command::History => show_history(&config),
        Command::Favorites { clear } => show_favorites(clear),
        Command::Keywords {
            region,
            add,
            remove,
        } => manage_keywords(&region, add, remove),
    }
}

fn validate_keywords(keywords: &[String]) -> anyhow::Result<()> {
    if keywords.len() > MAX_KEYWORDS {
        bail!("At most {} keywords are allowed", MAX_KEYWORDS);
    }
    for (i, keyword) in keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            bail!("Keywords must not be empty");
        }
        if keywords[..i].contains(keyword) {
            bail!("Duplicate keyword '{}'", keyword);
        }
    }
    Ok(())
}

fn build_source(config: &Config, override_name: Option<&str>) -> anyhow::Result<Arc<dyn PoemSource>> {
    let name = override_name.unwrap_or(&config.defaults.source);
    let kind = SourceKind::parse(name)
        .with_context(|| format!("Unknown source '{}', expected 'mock' or 'remote'", name))?;

    match kind {
        SourceKind::Mock => Ok(Arc::new(MockSource::new(Duration::from_millis(
            config.defaults.mock_delay_ms,
        )))),
        SourceKind::Remote => match resolve_api_key(&config.remote) {
            CredentialStatus::Configured(key) => {
                Ok(Arc::new(RemoteSource::new(&config.remote, key)))
            }
            CredentialStatus::Unconfigured { reason } => {
                bail!("Remote source not configured: {}", reason)
            }
        },
    }
}

async fn generate(
    config: &Config,
    region: &str,
    keywords: Vec<String>,
    source: Option<String>,
    copy: bool,
    save: bool,
) -> anyhow::Result<()> {
    validate_keywords(&keywords)?;

    let source = build_source(config, source.as_deref())?;
    let holder = StateHolder::new(GenerationSession::new(source));

    let handle = holder.generate(region, &keywords);
    handle.await.context("Generation task panicked")?;

    let poem = match holder.current() {
        GenerationState::Succeeded { poem } => poem,
        GenerationState::Failed { message } => bail!(message),
        GenerationState::Idle | GenerationState::Loading => {
            bail!("Generation did not resolve")
        }
    };

    print_banner(region, &keywords);
    println!("{}", poem);

    let record = PoemRecord::new(poem.clone(), region.to_string(), keywords);
    History::new(Box::new(FileStore::at_data_dir()), config.defaults.history_limit)
        .record(record.clone())
        .context("Failed to record poem in history")?;

    if save {
        let favorites = Favorites::new(Box::new(FileStore::at_data_dir()));
        match favorites.save(record).context("Failed to save favorite")? {
            SaveResult::Added => println!("\nSaved to favorites."),
            SaveResult::AlreadySaved => println!("\nAlready in favorites."),
        }
    }

    if copy {
        match clipboard::copy_text(&poem) {
            Ok(()) => println!("\nCopied to clipboard."),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    Ok(())
}

fn print_banner(region_code: &str, keywords: &[String]) {
    match Region::from_code(region_code) {
        Some(region) => println!(
            "{} {} ({})",
            region.emoji(),
            region.display_name(),
            region.thai_name()
        ),
        None => println!("Thailand ({})", region_code),
    }
    if !keywords.is_empty() {
        println!("keywords: {}", keywords.join(", "));
    }
    println!();
}

fn show_history(config: &Config) -> anyhow::Result<()> {
    let history = History::new(Box::new(FileStore::at_data_dir()), config.defaults.history_limit);
    let records = history.list().context("Failed to read history")?;
    if records.is_empty() {
        println!("No poems in history.");
        return Ok(());
    }
    for record in records {
        print_record(&record);
    }
    Ok(())
}

fn show_favorites(clear: bool) -> anyhow::Result<()> {
    let favorites = Favorites::new(Box::new(FileStore::at_data_dir()));
    if clear {
        favorites.clear().context("Failed to clear favorites")?;
        println!("Favorites cleared.");
        return Ok(());
    }
    let records = favorites.list().context("Failed to read favorites")?;
    if records.is_empty() {
        println!("No favorite poems.");
        return Ok(());
    }
    for record in records {
        print_record(&record);
    }
    Ok(())
}

fn print_record(record: &PoemRecord) {
    println!("[{}] {}", record.timestamp, record.region);
    if !record.keywords.is_empty() {
        println!("keywords: {}", record.keywords.join(", "));
    }
    println!("{}\n", record.poem);
}

fn manage_keywords(
    region: &str,
    add: Option<String>,
    remove: Option<String>,
) -> anyhow::Result<()> {
    let book = KeywordBook::new(Box::new(FileStore::at_data_dir()));

    if let Some(keyword) = add {
        if keyword.trim().is_empty() {
            bail!("Keywords must not be empty");
        }
        match book.add(region, &keyword).context("Failed to save keyword")? {
            KeywordUpdate::Added => println!("Added '{}'.", keyword.trim()),
            KeywordUpdate::Duplicate => println!("'{}' is already saved.", keyword.trim()),
            KeywordUpdate::LimitReached => {
                bail!("At most {} keywords per region", MAX_KEYWORDS)
            }
        }
    }

    if let Some(keyword) = remove {
        if book.remove(region, &keyword).context("Failed to remove keyword")? {
            println!("Removed '{}'.", keyword);
        } else {
            println!("'{}' was not saved.", keyword);
        }
    }

    let keywords = book.list(region).context("Failed to read keywords")?;
    if keywords.is_empty() {
        println!("No saved keywords for '{}'.", region);
    } else {
        println!("Saved keywords for '{}': {}", region, keywords.join(", "));
    }
    Ok(())
}
