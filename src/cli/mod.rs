use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use chrono::NaiveDate;
use clap::Parser;

/// Statistics for a stoic journaling practice
#[derive(Parser, Debug)]
#[clap(name = "diario", about = "Statistics for a stoic journaling practice")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Summarize reflection sessions instead of diary entries
    #[clap(short = 'r', long)]
    pub reflections: bool,

    /// Emit the raw stats as pretty-printed JSON instead of the summary text
    #[clap(short = 'j', long)]
    pub json: bool,

    /// Override the "today" anchor for the reflection streak (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 't', long)]
    pub today: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// Get the today override if specified, parsing it into a NaiveDate
    pub fn parse_today(&self) -> Option<Result<NaiveDate, chrono::ParseError>> {
        self.today.as_ref().map(|date_str| {
            // Try parsing in YYYY-MM-DD format first
            NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
                .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
        })
    }
}
