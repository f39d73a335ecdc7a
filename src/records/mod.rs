//! Shared record schema for diary entries and reflections.
//!
//! Both the snapshot loader and the stats engine consume these types, so the
//! shapes live in one place instead of being redefined per module. Wire names
//! are camelCase and enum values are the Spanish labels the product uses.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotional self-rating attached to a diary entry.
///
/// This is a closed set: counting and percentage tables are built with
/// exhaustive matches, so adding or removing a mood is a compile-time-checked
/// change rather than a runtime string-key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "excelente")]
    Excelente,
    #[serde(rename = "buena")]
    Buena,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "difícil")]
    Dificil,
}

impl Mood {
    /// All moods, in the order they are displayed.
    pub const ALL: [Mood; 4] = [Mood::Excelente, Mood::Buena, Mood::Normal, Mood::Dificil];

    /// The Spanish label used on the wire and in the summary text.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Excelente => "excelente",
            Mood::Buena => "buena",
            Mood::Normal => "normal",
            Mood::Dificil => "difícil",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Difficulty rating of a guided reflection exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "fácil")]
    Facil,
    #[serde(rename = "moderado")]
    Moderado,
    #[serde(rename = "desafiante")]
    Desafiante,
}

impl Difficulty {
    /// All difficulties, in the order they are displayed.
    pub const ALL: [Difficulty; 3] =
        [Difficulty::Facil, Difficulty::Moderado, Difficulty::Desafiante];

    /// The Spanish label used on the wire and in the summary text.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Facil => "fácil",
            Difficulty::Moderado => "moderado",
            Difficulty::Desafiante => "desafiante",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One diary journal record authored by a user.
///
/// Records are supplied by the snapshot loader and are immutable from the
/// engine's perspective. `created_at` is assigned once at creation and never
/// changes; `updated_at >= created_at` always.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    /// Opaque identifier, unique within a user's collection.
    pub id: String,
    pub title: String,
    /// Free text; the primary signal for word and character counts.
    pub content: String,
    pub mood: Mood,
    /// Free-text labels. Order is irrelevant; duplicates within one entry are
    /// the creation path's responsibility, not deduplicated here.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
    /// Last-modification timestamp; equals `created_at` until edited.
    pub updated_at: i64,
}

/// One completed or abandoned guided timed exercise session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub id: String,
    pub exercise_id: String,
    pub exercise_title: String,
    /// Free text written during or after the exercise.
    #[serde(default)]
    pub notes: String,
    /// Elapsed seconds; may be less than the planned duration if abandoned.
    #[serde(default)]
    pub duration: u32,
    /// True if the full planned duration elapsed.
    #[serde(default)]
    pub completed: bool,
    pub difficulty: Difficulty,
    /// Short takeaways derived from `notes` by the creation path (at most 3).
    /// Carried verbatim; the stats engine never re-derives them.
    #[serde(default)]
    pub insights: Vec<String>,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
    /// The user's local calendar day as `YYYY-MM-DD`, used for streak
    /// bucketing. Distinct from the instant in `created_at`.
    pub date: String,
    /// Optional mood recorded alongside the exercise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

/// Converts an epoch-millisecond timestamp to a UTC instant.
///
/// Out-of-range timestamps saturate to the minimum representable instant
/// instead of panicking; malformed records produce visibly wrong statistics
/// rather than failures.
pub fn datetime_of_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Derives the calendar day of an epoch-millisecond timestamp.
///
/// This is the single date-derivation convention shared by the writing
/// streak, the month buckets, the days-active count, and the date range, so
/// they can never disagree on which day an entry belongs to.
pub fn day_of_millis(ms: i64) -> NaiveDate {
    datetime_of_millis(ms).date_naive()
}
