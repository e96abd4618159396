use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use morseref::config::DumpConfig;
use morseref::MorseResult;
use std::process;
use tracing::{debug, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Semaphore code reference table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with output defaults (format, show_unassigned, show_line_break_as)
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up codes or dot/dash patterns
    Lookup(cmd::lookup::LookupArgs),
    /// Print the reference table
    Table(cmd::table::TableArgs),
    /// Print every code value with its dot/dash pattern
    Listing(cmd::listing::ListingArgs),
}

fn base_config(path: Option<&str>) -> MorseResult<DumpConfig> {
    match path {
        Some(p) => DumpConfig::load_from_file(p),
        None => Ok(DumpConfig::default()),
    }
}

fn execute(cli: &Cli, matches: &ArgMatches) -> MorseResult<()> {
    match &cli.command {
        Commands::Lookup(args) => {
            let cfg = base_config(cli.config.as_deref())?;
            cmd::lookup::run(args, &cfg)
        }
        Commands::Table(args) => {
            // File values are the base; only flags typed on the command line win.
            let cfg = match (cli.config.as_deref(), matches.subcommand_matches("table")) {
                (Some(path), Some(sub_matches)) => {
                    let mut cfg = DumpConfig::load_from_file(path)?;
                    cfg.merge_from_cli(&args.config, sub_matches);
                    cfg
                }
                _ => args.config.clone(),
            };
            debug!("Effective table config: {:?}", cfg);
            cmd::table::run(&cfg)
        }
        Commands::Listing(args) => {
            cmd::listing::run(args);
            Ok(())
        }
    }
}

fn main() {
    // Raw matches are kept so config merging can tell user input from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute(&cli, &matches) {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
