use crate::reports;
use clap::Args;
use morseref::code::MorseCode;
use morseref::config::DumpConfig;
use morseref::{table, MorseError, MorseResult};
use tracing::{debug, warn};

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Decimal codes (e.g. 26) or dot/dash patterns (e.g. .-.-).
    /// Patterns starting with '-' go after a `--` separator:
    /// `lookup --strict -- -.- --`
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Treat unassigned codes as errors
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// A query is a decimal code when it is all digits, otherwise a pattern.
pub fn parse_query(query: &str) -> MorseResult<usize> {
    let query = query.trim();
    if !query.is_empty() && query.chars().all(|c| c.is_ascii_digit()) {
        return query
            .parse::<usize>()
            .map_err(|_| MorseError::QueryOutOfRange {
                query: query.to_string(),
            });
    }
    Ok(MorseCode::from_pattern(query)?.index())
}

pub fn run(args: &LookupArgs, cfg: &DumpConfig) -> MorseResult<()> {
    for query in &args.queries {
        let code = parse_query(query)?;
        debug!("Query '{}' resolved to code {}", query, code);

        let symbol = if args.strict {
            Some(table::decode(code)?)
        } else {
            table::lookup(code)?
        };

        if symbol.is_none() {
            warn!("Code {} has no assigned character", code);
        }
        println!("{}", reports::format_lookup(code, symbol, cfg));
    }
    Ok(())
}
