/*!
# Diario - Journaling Statistics

Diario is a command-line tool that summarizes a stoic journaling practice.
It reads a JSON snapshot of diary entries and reflection sessions and prints
aggregate statistics, either as Spanish summary text or as raw JSON.

This file contains the main application flow, coordinating the various
components to implement the stats functionality.

## Usage

```
diario [OPTIONS]

Options:
  -r, --reflections             Summarize reflection sessions instead of diary entries
  -j, --json                    Emit the raw stats as pretty-printed JSON
  -t, --today <DATE>            Override the "today" anchor for the reflection streak
                                (format: YYYY-MM-DD or YYYYMMDD)
  -v, --verbose                 Enable verbose output
  -h, --help                    Print help information
  -V, --version                 Print version information
```

## Configuration

The application can be configured with the following environment variables:
- `DIARIO_DIR`: The directory the record snapshots are read from
  (defaults to "~/Documents/diario")
*/

use chrono::Local;
use diario::cli::CliArgs;
use diario::config::Config;
use diario::errors::{AppError, AppResult};
use diario::{report, snapshot, stats};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the diario application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Loads the requested record snapshot
/// 5. Runs the corresponding stats calculator
/// 6. Prints the summary text or JSON
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid configuration)
/// - Argument errors (invalid date format)
/// - Snapshot errors (unreadable or malformed snapshot files)
fn main() -> AppResult<()> {
    // Obtain the current date once at the beginning
    let current_date = Local::now().date_naive();

    let args = CliArgs::parse();

    // Logs go to stderr so stdout stays a clean data channel
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting diario");
    debug!("CLI arguments: {:?}", args);

    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;
    debug!("Snapshot directory: {:?}", config.snapshot_dir);

    // The streak anchor: the --today override, or the actual current date
    let today = match args.parse_today() {
        Some(Ok(date)) => date,
        Some(Err(e)) => return Err(AppError::Args(format!("Invalid date format: {}", e))),
        None => current_date,
    };

    if args.reflections {
        let reflections = snapshot::load_reflections(&config.snapshot_dir)?;
        let summary = stats::reflection::calculate(&reflections, today);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", report::reflection_summary(&summary));
        }
    } else {
        let entries = snapshot::load_diary_entries(&config.snapshot_dir)?;
        let summary = stats::diary::calculate(&entries);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", report::diary_summary(&summary));
        }
    }

    info!("Stats printed successfully");
    Ok(())
}
