//! Argument types shared by the report commands

use clap::ValueEnum;

/// How report rows are printed
///
/// CSV is the default so exports can be fed back into `sync` and
/// `compare-workday` or opened in a spreadsheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header line plus one quoted row per record
    #[default]
    Csv,
    /// Aligned columns for reading in a terminal
    Table,
    /// Pretty-printed array of row objects
    Json,
    /// Sequence of row mappings
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Same spelling clap accepts on the command line
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}
