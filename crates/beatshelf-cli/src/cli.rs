//! Command parsing and execution for the beatshelf CLI
//!
//! Usage:
//!   beatshelf scan <library>               Synchronize the catalog
//!   beatshelf list <library>               Sync and print all entries
//!   beatshelf search <library> <query...>  Sync and print matching entries
//!
//! Options:
//!   --catalog <file>   Catalog file path (default: database.json)

use std::path::PathBuf;

use beatshelf_core::{CatalogIndex, CatalogScanner, CatalogStore, SearchFilter};

/// Default catalog file, relative to the working directory.
const DEFAULT_CATALOG: &str = "database.json";

/// CLI command to execute
#[derive(Debug, Clone)]
pub enum Command {
    Scan { library: PathBuf },
    List { library: PathBuf },
    Search { library: PathBuf, query: String },
}

/// CLI options
#[derive(Debug, Clone)]
pub struct Options {
    pub catalog: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG),
        }
    }
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(Command, Options), String> {
    let mut options = Options::default();
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--catalog" => {
                i += 1;
                if i >= args.len() {
                    return Err("--catalog requires a value".to_string());
                }
                options.catalog = PathBuf::from(&args[i]);
            }
            _ => {
                if arg.starts_with('-') {
                    return Err(format!("Unknown option: {}", arg));
                }
                positional.push(arg.clone());
            }
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("scan") => {
            let library = positional
                .next()
                .ok_or("scan requires a library directory")?;
            Command::Scan {
                library: PathBuf::from(library),
            }
        }
        Some("list") => {
            let library = positional
                .next()
                .ok_or("list requires a library directory")?;
            Command::List {
                library: PathBuf::from(library),
            }
        }
        Some("search") => {
            let library = positional
                .next()
                .ok_or("search requires a library directory")?;
            let terms: Vec<String> = positional.collect();
            if terms.is_empty() {
                return Err("search requires at least one query term".to_string());
            }
            Command::Search {
                library: PathBuf::from(library),
                query: terms.join(" "),
            }
        }
        Some(other) => return Err(format!("Unknown command: {}", other)),
        None => {
            return Err("No command specified. Use: scan, list, or search".to_string());
        }
    };

    Ok((command, options))
}

/// Run CLI command
pub fn run(command: Command, options: Options) -> anyhow::Result<()> {
    match command {
        Command::Scan { library } => run_scan(library, options),
        Command::List { library } => run_list(library, options),
        Command::Search { library, query } => run_search(library, query, options),
    }
}

fn run_scan(library: PathBuf, options: Options) -> anyhow::Result<()> {
    let store = CatalogStore::new(options.catalog);
    let scanner = CatalogScanner::new(library);
    let catalog = scanner.sync(&store)?;

    let difficulties: usize = catalog.values().map(|set| set.difficulties.len()).sum();
    println!(
        "Synchronized {} beatmap sets ({} difficulties) into {}",
        catalog.len(),
        difficulties,
        store.path().display()
    );
    Ok(())
}

fn run_list(library: PathBuf, options: Options) -> anyhow::Result<()> {
    let store = CatalogStore::new(options.catalog);
    let scanner = CatalogScanner::new(library);
    let catalog = scanner.sync(&store)?;
    let index = CatalogIndex::build(&catalog, scanner.root());

    for entry in index.entries() {
        println!(
            "{} [{}] by {} (mapped by {})",
            entry.beatmap_name, entry.difficulty_name, entry.artist, entry.creator
        );
    }
    println!("{} entries", index.len());
    Ok(())
}

fn run_search(library: PathBuf, query: String, options: Options) -> anyhow::Result<()> {
    let store = CatalogStore::new(options.catalog);
    let scanner = CatalogScanner::new(library);
    let catalog = scanner.sync(&store)?;
    let index = CatalogIndex::build(&catalog, scanner.root());

    let mut filter = SearchFilter::new();
    filter.set_query(&query);
    let matches = filter.apply(index.entries());

    for entry in &matches {
        println!("{} [{}]", entry.beatmap_name, entry.difficulty_name);
    }
    println!("{} of {} entries match '{}'", matches.len(), index.len(), query);
    Ok(())
}
