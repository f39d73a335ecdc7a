//! Constants used throughout the application.
//!
//! This module contains all constants used in the Diario application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "diario";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Statistics for a stoic journaling practice";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the snapshot directory.
pub const ENV_VAR_DIARIO_DIR: &str = "DIARIO_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for snapshots within the user's home directory.
pub const DEFAULT_SNAPSHOT_SUBDIR: &str = "Documents/diario";

// Snapshot Files
/// File name of the diary entry snapshot inside the snapshot directory.
pub const DIARY_SNAPSHOT_FILE: &str = "diario.json";
/// File name of the reflection snapshot inside the snapshot directory.
pub const REFLECTION_SNAPSHOT_FILE: &str = "reflexiones.json";

// Validation
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Spanish month names used for the localized month labels in the stats output.
pub const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

// Report Formatting
/// Number of top tags listed in the diary summary text.
pub const REPORT_TOP_TAGS: usize = 5;
/// Fallback shown in the summary text when a value is absent.
pub const REPORT_NONE_PLACEHOLDER: &str = "N/A";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "diario";
