//! Reflection statistics aggregation.
//!
//! [`calculate`] consumes all reflection sessions for one user and produces a
//! [`ReflectionStats`] summary: totals, completion count, average duration,
//! per-difficulty breakdown, and a day streak. Unlike the diary writing
//! streak, the reflection streak is anchored to the current calendar day:
//! `today` is an explicit parameter so the function stays pure and testable.

use crate::constants::DATE_FORMAT_ISO;
use crate::records::{Difficulty, Reflection};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Per-difficulty reflection counts. All three keys are always present,
/// zero-filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyCounts {
    #[serde(rename = "fácil")]
    pub facil: usize,
    pub moderado: usize,
    pub desafiante: usize,
}

impl DifficultyCounts {
    fn tally(reflections: &[Reflection]) -> Self {
        let mut counts = DifficultyCounts::default();
        for reflection in reflections {
            match reflection.difficulty {
                Difficulty::Facil => counts.facil += 1,
                Difficulty::Moderado => counts.moderado += 1,
                Difficulty::Desafiante => counts.desafiante += 1,
            }
        }
        counts
    }

    /// The count for one difficulty.
    pub fn get(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Facil => self.facil,
            Difficulty::Moderado => self.moderado,
            Difficulty::Desafiante => self.desafiante,
        }
    }
}

/// Aggregate reflection statistics for one user.
///
/// Durations are raw seconds throughout; surfacing minutes is the
/// presentation layer's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionStats {
    pub total_reflections: usize,
    /// Sum of all session durations, in seconds.
    pub total_time: u64,
    /// Sessions where the full planned duration elapsed.
    pub completed_reflections: usize,
    /// Rounded mean session duration in seconds, 0 when there are no sessions.
    pub average_time: u64,
    pub by_difficulty: DifficultyCounts,
    /// Consecutive calendar days with at least one reflection, counted
    /// backward from today. A run that ended before today reports 0.
    pub streak: usize,
    /// The most recently created session, independent of input order.
    pub last_reflection: Option<Reflection>,
}

/// Calculates aggregate statistics over all reflection sessions.
///
/// Pure and total; an empty slice yields an all-zero result with
/// `last_reflection = None`. `today` anchors the streak walk and is supplied
/// by the caller (the binary passes the current local date).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use diario::stats::reflection;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let stats = reflection::calculate(&[], today);
/// assert_eq!(stats.total_reflections, 0);
/// assert!(stats.last_reflection.is_none());
/// ```
pub fn calculate(reflections: &[Reflection], today: NaiveDate) -> ReflectionStats {
    let total_reflections = reflections.len();
    let total_time: u64 = reflections
        .iter()
        .map(|reflection| u64::from(reflection.duration))
        .sum();
    let completed_reflections = reflections
        .iter()
        .filter(|reflection| reflection.completed)
        .count();
    let average_time = if total_reflections == 0 {
        0
    } else {
        (total_time as f64 / total_reflections as f64).round() as u64
    };

    let by_difficulty = DifficultyCounts::tally(reflections);
    let streak = day_streak(reflections, today);

    // Sort explicitly instead of assuming the caller supplies
    // newest-first order.
    let mut newest_first: Vec<&Reflection> = reflections.iter().collect();
    newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let last_reflection = newest_first.first().map(|reflection| (*reflection).clone());

    debug!(
        total_reflections,
        completed_reflections, streak, "Calculated reflection stats"
    );

    ReflectionStats {
        total_reflections,
        total_time,
        completed_reflections,
        average_time,
        by_difficulty,
        streak,
        last_reflection,
    }
}

/// Walks distinct reflection days backward from `today`.
///
/// Sessions are grouped by their `date` field, collapsing same-day repeats to
/// a single day. The i-th most recent day must equal `today - i` for the run
/// to continue; the first mismatch fixes the streak length. Days that fail to
/// parse are skipped and can therefore never match.
fn day_streak(reflections: &[Reflection], today: NaiveDate) -> usize {
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();
    for reflection in reflections {
        if let Ok(day) = NaiveDate::parse_from_str(&reflection.date, DATE_FORMAT_ISO) {
            days.insert(day);
        }
    }

    let mut streak = 0;
    for (offset, day) in days.iter().rev().enumerate() {
        let expected = today - Duration::days(offset as i64);
        if *day == expected {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}
