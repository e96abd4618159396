use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use morseref::code::MorseCode;
use morseref::config::{DumpConfig, OutputFormat};
use morseref::table::TableRow;
use morseref::MorseResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RenderedRow<'a> {
    code: usize,
    pattern: &'a str,
    symbol: Option<String>,
}

fn rendered<'a>(rows: &'a [TableRow], cfg: &DumpConfig) -> Vec<RenderedRow<'a>> {
    rows.iter()
        .map(|row| RenderedRow {
            code: row.code,
            pattern: &row.pattern,
            symbol: row.symbol.map(|c| cfg.render_symbol(Some(c))),
        })
        .collect()
}

pub fn render_rows(rows: &[TableRow], cfg: &DumpConfig) -> MorseResult<String> {
    match cfg.format {
        OutputFormat::Table => Ok(render_table(rows, cfg)),
        OutputFormat::Csv => render_csv(rows, cfg),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rendered(rows, cfg))?),
    }
}

fn render_table(rows: &[TableRow], cfg: &DumpConfig) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Code").add_attribute(Attribute::Bold),
        Cell::new("Pattern").add_attribute(Attribute::Bold),
        Cell::new("Symbol").add_attribute(Attribute::Bold),
    ]);

    for row in rows {
        let symbol = match row.symbol {
            Some(_) => Cell::new(cfg.render_symbol(row.symbol)).set_alignment(CellAlignment::Center),
            None => Cell::new("-").fg(Color::DarkGrey).set_alignment(CellAlignment::Center),
        };
        table.add_row(vec![
            Cell::new(row.code).set_alignment(CellAlignment::Right),
            Cell::new(&row.pattern),
            symbol,
        ]);
    }

    table.to_string()
}

fn render_csv(rows: &[TableRow], cfg: &DumpConfig) -> MorseResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rendered(rows, cfg) {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// One line per lookup: `code  pattern  symbol`.
pub fn format_lookup(code: usize, symbol: Option<char>, cfg: &DumpConfig) -> String {
    let pattern = MorseCode::try_from(code)
        .ok()
        .and_then(MorseCode::pattern)
        .unwrap_or_default();
    let rendered = match symbol {
        Some(_) => cfg.render_symbol(symbol),
        None => "(unassigned)".to_string(),
    };
    format!("{:>3}  {:<6}  {}", code, pattern, rendered)
}

/// The generation listing: one `value pattern` pair per line.
pub fn format_listing(codes: &[MorseCode]) -> String {
    codes
        .iter()
        .map(|c| format!("{:>3}  {}", c.value(), c.pattern().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("\n")
}
