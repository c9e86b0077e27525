use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use monrank::config::{DataPaths, ScoringParams};
use monrank::scorer::loader::load_roster;
use monrank::scorer::Scorer;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank monsters by projected training score", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    paths: DataPaths,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank every monster in the roster.
    Rank(cmd::rank::RankArgs),
    /// Pick the best pre-rolled entry of one monster.
    BestEntry(cmd::best_entry::BestEntryArgs),
    /// Search every offset pair for one monster.
    Search(cmd::search::SearchArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Parameters typed on the command line live in the subcommand's matches.
    let (cli_params, sub_matches) = match &cli.command {
        Commands::Rank(args) => (&args.params, matches.subcommand_matches("rank")),
        Commands::BestEntry(args) => (&args.params, matches.subcommand_matches("best-entry")),
        Commands::Search(args) => (&args.params, matches.subcommand_matches("search")),
    };

    let params = match &cli.paths.params {
        Some(path) => {
            info!("Loading scoring params from: {}", path);
            let mut file_params = ScoringParams::load_from_file(path).unwrap_or_else(|e| {
                error!("Failed to load scoring params '{}': {}", path, e);
                process::exit(1);
            });
            if let Some(sub) = sub_matches {
                file_params.merge_from_cli(cli_params, sub);
            }
            file_params
        }
        None => cli_params.clone(),
    };

    let scorer = match Scorer::new(params) {
        Ok(s) => s,
        Err(e) => {
            error!("FATAL ERROR INITIALIZING SCORER: {}", e);
            process::exit(1);
        }
    };

    let roster = load_roster(&cli.paths.monsters).unwrap_or_else(|e| {
        error!("Failed to load monster roster: {}", e);
        process::exit(1);
    });
    if roster.is_empty() {
        warn!("Monster roster is empty.");
    }

    let result = match &cli.command {
        Commands::Rank(args) => cmd::rank::run(args, &scorer, &roster, &cli.paths),
        Commands::BestEntry(args) => cmd::best_entry::run(args, &scorer, &roster, &cli.paths),
        Commands::Search(args) => cmd::search::run(args, &scorer, &roster, &cli.paths),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
