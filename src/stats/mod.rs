//! Statistics aggregation over in-memory record snapshots.
//!
//! Two sibling calculators, both pure functions over slices of records with no
//! shared state: [`diary::calculate`] summarizes diary entries and
//! [`reflection::calculate`] summarizes reflection sessions. Each produces a
//! transient value object recomputed in full on every call; nothing is
//! persisted or updated incrementally.
//!
//! The two day-streak computations are intentionally separate algorithms: the
//! diary streak is anchored to the most recent entry (an old run still reports
//! its historical length), while the reflection streak is anchored to the
//! current calendar day (a run that ended before today reports 0). Unifying
//! them would silently change observable behavior.

/// Diary entry aggregation: moods, tags, months, lengths, writing streak.
pub mod diary;
/// Reflection aggregation: totals, difficulty breakdown, today-anchored streak.
pub mod reflection;

pub use diary::DiaryStats;
pub use reflection::ReflectionStats;
