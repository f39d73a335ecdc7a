/*!
# Diario

Diario computes statistics over a stoic journaling practice: diary entries
with moods and tags, and timed reflection exercises. It reads a JSON snapshot
of one user's records and produces aggregate summaries — mood distribution,
tag frequency, writing streaks, per-month counts, and reflection totals.

## Core Features

- Diary statistics: moods, tags, months, content lengths, writing streak
- Reflection statistics: totals, difficulty breakdown, today-anchored streak
- Spanish summary text or raw JSON output
- Configurable snapshot directory

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `records`: Shared record schema consumed by the loader and the engine
- `snapshot`: JSON snapshot loading (the input boundary)
- `stats`: The aggregation engine (pure functions over record slices)
- `report`: Human-readable summary text

## Usage Example

```rust,no_run
use diario::{snapshot, stats, Config};

fn main() -> diario::AppResult<()> {
    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    // Load the snapshot and compute diary stats
    let entries = snapshot::load_diary_entries(&config.snapshot_dir)?;
    let summary = stats::diary::calculate(&entries);
    println!("{} entradas", summary.total_entries);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized application constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Shared record schema for diary entries and reflections
pub mod records;
/// Human-readable summaries of the computed statistics
pub mod report;
/// Snapshot loading for record files
pub mod snapshot;
/// Statistics aggregation engine
pub mod stats;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use records::{DiaryEntry, Difficulty, Mood, Reflection};
pub use stats::{DiaryStats, ReflectionStats};
