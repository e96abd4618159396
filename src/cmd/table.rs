use crate::reports;
use clap::Args;
use morseref::config::DumpConfig;
use morseref::{table, MorseResult};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    #[command(flatten)]
    pub config: DumpConfig,
}

pub fn run(cfg: &DumpConfig) -> MorseResult<()> {
    let rows = table::rows(cfg.show_unassigned);
    info!(
        "Rendering {} of {} entries as {}",
        rows.len(),
        table::REF_TABLE.len(),
        cfg.format
    );
    println!("{}", reports::render_rows(&rows, cfg)?);
    Ok(())
}
