use card_query::cli::{self, CheckOptions, CliError, SearchOptions};
use card_query::output::{render_text, to_json, to_json_pretty};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "cardq")]
#[command(about = "cardq - Search trading card collections with a compact query language")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a card file
    Search {
        /// The query, e.g. 'cmc<=3 o:"draw a card"'
        query: String,

        /// JSON card file (reads from stdin if not provided)
        #[arg(short, long, env = "CARDQ_CARDS")]
        cards: Option<PathBuf>,

        /// Include cards the default filter hides
        #[arg(short, long)]
        all: bool,

        /// Maximum number of cards to print
        #[arg(short, long, default_value_t = 7)]
        limit: usize,

        /// Print matching cards as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Evaluate on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Validate a query and print its predicate tree
    Check {
        /// The query to validate
        query: String,

        /// Leave out the default filter
        #[arg(short, long)]
        all: bool,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'cardq docs' to list categories)
        category: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CARDQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            cards,
            all,
            limit,
            json,
            pretty,
            parallel,
        } => run_search(query, cards, all, limit, json, pretty, parallel),
        Commands::Check { query, all, pretty } => {
            cli::execute_check(&CheckOptions { query, all, pretty }).map(|tree| println!("{}", tree))
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => match cli::get_doc_category(&category) {
            Ok(content) => {
                print!("{}", content);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_search(
    query: String,
    cards: Option<PathBuf>,
    all: bool,
    limit: usize,
    json: bool,
    pretty: bool,
    parallel: bool,
) -> Result<(), CliError> {
    let input = match cards {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = SearchOptions {
        query,
        input,
        all,
        parallel,
    };
    let result = cli::execute_search(&options)?;

    if json {
        let shown = &result.matches[..result.matches.len().min(limit)];
        let output = if pretty {
            to_json_pretty(shown)
        } else {
            to_json(shown)
        }?;
        println!("{}", output);
    } else {
        let matches: Vec<_> = result.matches.iter().collect();
        print!("{}", render_text(&matches, matches.len(), limit));
    }
    Ok(())
}
