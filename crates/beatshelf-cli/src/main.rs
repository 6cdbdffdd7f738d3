//! beatshelf - Beatmap catalog scanner and browser
//!
//! Usage:
//!   beatshelf scan <library>               Synchronize the catalog with disk
//!   beatshelf list <library>               Print every catalog entry
//!   beatshelf search <library> <query...>  Print entries matching a query
//!   beatshelf --help                       Show help

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    init_logging();

    match cli::parse_args(&args) {
        Ok((command, options)) => cli::run(command, options),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("beatshelf v{}", env!("CARGO_PKG_VERSION"));
    println!("Index and browse a beatmap library on disk");
    println!();
    println!("USAGE:");
    println!("    beatshelf <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    scan <library>               Synchronize the catalog with disk");
    println!("    list <library>               Print every catalog entry");
    println!("    search <library> <query...>  Print entries matching a query");
    println!();
    println!("OPTIONS:");
    println!("    --catalog <file>   Catalog file path (default: database.json)");
    println!("    --help             Show this help message");
}

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
