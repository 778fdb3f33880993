//! kaomoji-find - Search the kaomoji catalog from the command line

mod output;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use libkaomoji::logging;
use libkaomoji::{
    filter_entries, related_entries, CategoryFilter, Clipboard, Config, Dataset, KaomojiError,
    SystemClipboard,
};

use output::{CategoryRecord, EntryRecord, OutputFormat, RelatedRecord};

#[derive(Parser, Debug)]
#[command(name = "kaomoji-find")]
#[command(version, about = "Search the kaomoji catalog")]
#[command(long_about = r#"Search the kaomoji catalog by symbol or tag, optionally within a category.

EXAMPLES:
    # Everything, first 20 entries
    kaomoji-find

    # Search symbols and tags (case-insensitive substring)
    kaomoji-find cat
    kaomoji-find "table flip"

    # Restrict to one category
    kaomoji-find --category Animals
    kaomoji-find happy -c Joy --limit 5

    # List categories with entry counts
    kaomoji-find --categories

    # Show the category an entry belongs to and its siblings
    kaomoji-find --related "ʕ •ᴥ•ʔ"

    # Copy the first match to the clipboard
    kaomoji-find shrug --copy
    kaomoji-find shrug --copy --hold 1m

    # Use a custom catalog
    kaomoji-find --catalog ~/my-kaomoji.toml love

    # Scripting
    kaomoji-find love --format json | jq -r '.[].symbol'
    kaomoji-find --format csv > kaomoji.csv

OUTPUT FORMATS:
    text  - One entry per line: symbol | category | tags (default)
    json  - JSON array
    jsonl - JSON lines, one object per line
    csv   - CSV with headers

EXIT CODES:
    0 - Success (including empty results)
    1 - Error (config or catalog could not be loaded, etc.)
    2 - Clipboard unavailable (--copy)
    3 - Invalid input (bad arguments, unknown category or entry, bad limit)

CLIPBOARD:
    On X11 and Wayland the copied text lives in the process that copied it.
    --copy therefore waits until another program takes the clipboard over
    (a clipboard manager does this at once) or --hold runs out, whichever
    comes first. Without a clipboard manager, paste before the hold ends.
"#)]
struct Args {
    /// Text to look for in symbols and tags
    #[arg(value_name = "QUERY", default_value = "")]
    query: String,

    /// Category to search in
    #[arg(short, long, default_value = "All", value_name = "CATEGORY")]
    category: String,

    /// Maximum number of entries to print
    #[arg(short, long, default_value = "20", value_name = "N")]
    limit: usize,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "jsonl", "csv"])]
    format: String,

    /// List categories with their entry counts
    #[arg(long, conflicts_with_all = ["related", "query", "category", "limit", "copy"])]
    categories: bool,

    /// Show the category and sibling entries of SYMBOL
    #[arg(long, value_name = "SYMBOL", conflicts_with_all = ["query", "category", "limit"])]
    related: Option<String>,

    /// Copy the first printed entry to the clipboard
    #[arg(long)]
    copy: bool,

    /// How long --copy keeps serving the clipboard on X11/Wayland
    #[arg(long, default_value = "30s", value_name = "DURATION")]
    #[arg(value_parser = humantime::parse_duration)]
    hold: Duration,

    /// Catalog file to use instead of the configured one
    #[arg(long, value_name = "PATH", env = "KAOMOJI_CATALOG")]
    catalog: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(3);
        }
    };

    init_logging(args.verbose);
    tracing::debug!("kaomoji-find started with args: {:?}", args);

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<KaomojiError>()
            .map(KaomojiError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn init_logging(verbose: bool) {
    let mut config = logging::config_from_env();
    // Keep stderr quiet unless asked
    if std::env::var("KAOMOJI_LOG_LEVEL").is_err() {
        config.level = "warn".to_string();
    }
    config.verbose = verbose;
    if let Err(e) = config.init() {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

async fn run(args: Args) -> Result<()> {
    let format: OutputFormat = args
        .format
        .parse()
        .map_err(KaomojiError::InvalidInput)?;

    if args.limit == 0 {
        return Err(KaomojiError::InvalidInput("--limit must be at least 1".to_string()).into());
    }

    let mut config = Config::load_or_default().context("Failed to load configuration")?;
    if let Some(path) = args.catalog.clone() {
        config.catalog.path = Some(path);
    }
    let dataset = config.load_dataset().context("Failed to load kaomoji catalog")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.categories {
        let records = category_records(&dataset);
        output::write_categories(&mut out, &records, format)?;
        return Ok(());
    }

    if let Some(symbol) = &args.related {
        let entry = dataset.find_by_symbol(symbol).ok_or_else(|| {
            KaomojiError::InvalidInput(format!("'{}' is not in the catalog", symbol))
        })?;
        let record = RelatedRecord::new(entry, related_entries(&dataset, entry));
        output::write_related(&mut out, &record, format)?;
        out.flush()?;
        if args.copy {
            copy_symbol(&entry.symbol, args.hold).await?;
        }
        return Ok(());
    }

    let category = CategoryFilter::from(args.category.as_str());
    if let CategoryFilter::Named(name) = &category {
        if dataset.find_category(name).is_none() {
            return Err(KaomojiError::InvalidInput(format!(
                "Unknown category '{}'. Try --categories",
                name
            ))
            .into());
        }
    }

    let matches = filter_entries(&dataset, &category, &args.query);
    tracing::debug!(
        total = matches.len(),
        category = %category,
        query = %args.query,
        "Search finished"
    );

    let records: Vec<EntryRecord<'_>> = matches
        .iter()
        .take(args.limit)
        .map(|entry| EntryRecord::new(&dataset, entry))
        .collect();
    output::write_entries(&mut out, &records, format)?;
    out.flush()?;

    if args.copy {
        match records.first() {
            Some(first) => copy_symbol(first.symbol, args.hold).await?,
            None => eprintln!("Nothing to copy"),
        }
    }

    Ok(())
}

fn category_records(dataset: &Dataset) -> Vec<CategoryRecord<'_>> {
    dataset
        .categories
        .iter()
        .map(|category| CategoryRecord {
            name: &category.name,
            count: category.entries.len(),
        })
        .collect()
}

async fn copy_symbol(symbol: &str, hold: Duration) -> Result<()> {
    let clipboard = SystemClipboard::holding(hold);
    clipboard
        .write_text(symbol)
        .await
        .map_err(KaomojiError::from)?;
    eprintln!("Copied {} to the clipboard", symbol);
    Ok(())
}
