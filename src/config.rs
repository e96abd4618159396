use crate::consts::LINE_BREAK;
use crate::error::{MorseError, MorseResult};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// table, csv or json
    #[arg(long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, default_value_t = false)]
    pub show_unassigned: bool,

    /// Text printed in place of the line-break token.
    #[arg(long, default_value = "\\r")]
    pub show_line_break_as: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            show_unassigned: false,
            show_line_break_as: "\\r".to_string(),
        }
    }
}

impl DumpConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MorseResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MorseError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Copies over only the values the user actually typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &DumpConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    debug!("CLI override: {} = {:?}", $arg_name, cli.$field);
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(format, "format");
        update_if_present!(show_unassigned, "show_unassigned");
        update_if_present!(show_line_break_as, "show_line_break_as");
    }

    pub fn render_symbol(&self, symbol: Option<char>) -> String {
        match symbol {
            Some(LINE_BREAK) => self.show_line_break_as.clone(),
            Some(c) => c.to_string(),
            None => String::new(),
        }
    }
}
