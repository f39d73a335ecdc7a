//! Diary statistics aggregation.
//!
//! [`calculate`] consumes all diary entries for one user and produces a single
//! [`DiaryStats`] summary: mood distribution, tag frequency, writing streak,
//! per-month counts, content-length figures, and the covered date range. The
//! function is total: an empty slice yields a well-defined all-zero result,
//! never an error.

use crate::constants::SPANISH_MONTHS;
use crate::records::{datetime_of_millis, day_of_millis, DiaryEntry, Mood};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// A tag with its occurrence count across all entries.
///
/// A tag is counted once per entry it appears in; duplicates inside a single
/// entry's tag list are the creation path's responsibility and flow through
/// uncollapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// A month bucket with its localized label, e.g. `"enero de 2024"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: String,
    pub count: usize,
}

/// Per-mood entry counts. All four moods are always present, zero-filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MoodCounts {
    pub excelente: usize,
    pub buena: usize,
    pub normal: usize,
    #[serde(rename = "difícil")]
    pub dificil: usize,
}

impl MoodCounts {
    fn tally(entries: &[DiaryEntry]) -> Self {
        let mut counts = MoodCounts::default();
        for entry in entries {
            match entry.mood {
                Mood::Excelente => counts.excelente += 1,
                Mood::Buena => counts.buena += 1,
                Mood::Normal => counts.normal += 1,
                Mood::Dificil => counts.dificil += 1,
            }
        }
        counts
    }

    /// The count for one mood.
    pub fn get(&self, mood: Mood) -> usize {
        match mood {
            Mood::Excelente => self.excelente,
            Mood::Buena => self.buena,
            Mood::Normal => self.normal,
            Mood::Dificil => self.dificil,
        }
    }

    fn percentages(&self, total_entries: usize) -> MoodPercentages {
        MoodPercentages {
            excelente: percent_label(self.excelente, total_entries),
            buena: percent_label(self.buena, total_entries),
            normal: percent_label(self.normal, total_entries),
            dificil: percent_label(self.dificil, total_entries),
        }
    }
}

/// Per-mood share of all entries, as integer percent strings like `"25%"`.
///
/// Defined as `"0%"` across the board when there are no entries; the division
/// is never performed on an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodPercentages {
    pub excelente: String,
    pub buena: String,
    pub normal: String,
    #[serde(rename = "difícil")]
    pub dificil: String,
}

impl MoodPercentages {
    /// The percent label for one mood.
    pub fn get(&self, mood: Mood) -> &str {
        match mood {
            Mood::Excelente => &self.excelente,
            Mood::Buena => &self.buena,
            Mood::Normal => &self.normal,
            Mood::Dificil => &self.dificil,
        }
    }
}

/// Aggregate diary statistics for one user.
///
/// A transient value object: constructed fresh from the current snapshot on
/// every [`calculate`] call, never mutated in place. Serializes with the
/// camelCase field names the presentation layer expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryStats {
    pub total_entries: usize,
    pub total_words: usize,
    /// Character count over all entry contents.
    pub total_characters: usize,
    pub mood_distribution: MoodCounts,
    pub mood_percentage: MoodPercentages,
    /// Tag with the highest count, `None` if no entry carries any tag.
    pub most_used_tag: Option<String>,
    /// All tags sorted by count descending; ties keep first-seen order.
    pub all_tags: Vec<TagCount>,
    /// Consecutive calendar days with at least one entry, counted backward
    /// from the most recent entry (not from today).
    pub writing_streak: usize,
    pub average_entries_per_month: usize,
    /// Month buckets sorted ascending by the underlying (year, month) key,
    /// not by the localized label.
    pub entries_by_month: Vec<MonthCount>,
    /// Character count of the longest entry.
    pub longest_entry: usize,
    /// Character count of the shortest entry.
    pub shortest_entry: usize,
    pub average_entry_length: usize,
    pub first_entry_date: Option<DateTime<Utc>>,
    pub last_entry_date: Option<DateTime<Utc>>,
    /// Count of distinct calendar days with at least one entry.
    pub days_active: usize,
}

impl DiaryStats {
    fn empty() -> Self {
        DiaryStats {
            total_entries: 0,
            total_words: 0,
            total_characters: 0,
            mood_distribution: MoodCounts::default(),
            mood_percentage: MoodCounts::default().percentages(0),
            most_used_tag: None,
            all_tags: Vec::new(),
            writing_streak: 0,
            average_entries_per_month: 0,
            entries_by_month: Vec::new(),
            longest_entry: 0,
            shortest_entry: 0,
            average_entry_length: 0,
            first_entry_date: None,
            last_entry_date: None,
            days_active: 0,
        }
    }
}

/// Calculates aggregate statistics over all diary entries.
///
/// Pure and total. Input order does not matter; the function sorts internally
/// wherever order is significant. Malformed records are not validated here and
/// surface as visibly wrong numbers rather than errors.
///
/// # Examples
///
/// ```
/// use diario::stats::diary;
///
/// let stats = diary::calculate(&[]);
/// assert_eq!(stats.total_entries, 0);
/// assert!(stats.first_entry_date.is_none());
/// ```
pub fn calculate(entries: &[DiaryEntry]) -> DiaryStats {
    // The general path divides by the entry count and must not run on zero
    // entries, so the empty case is an explicit short-circuit.
    if entries.is_empty() {
        debug!("No diary entries; returning zero-value stats");
        return DiaryStats::empty();
    }

    let total_entries = entries.len();
    let total_words = entries
        .iter()
        .map(|entry| count_words(&entry.content))
        .sum();
    let content_lengths: Vec<usize> = entries
        .iter()
        .map(|entry| entry.content.chars().count())
        .collect();
    let total_characters: usize = content_lengths.iter().sum();

    let mood_distribution = MoodCounts::tally(entries);
    let mood_percentage = mood_distribution.percentages(total_entries);

    // Most-recent-first order pins both the streak walk and the tag tie-break.
    let mut newest_first: Vec<&DiaryEntry> = entries.iter().collect();
    newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let all_tags = tag_frequencies(&newest_first);
    let most_used_tag = all_tags.first().map(|tag| tag.tag.clone());

    let writing_streak = writing_streak(&newest_first);

    let month_buckets = month_buckets(entries);
    let average_entries_per_month = rounded(total_entries, month_buckets.len().max(1));
    let entries_by_month = labeled_months(month_buckets);

    let longest_entry = content_lengths.iter().copied().max().unwrap_or(0);
    let shortest_entry = content_lengths.iter().copied().min().unwrap_or(0);
    let average_entry_length = rounded(total_characters, total_entries);

    let first_entry_date = entries
        .iter()
        .map(|entry| entry.created_at)
        .min()
        .map(datetime_of_millis);
    let last_entry_date = entries
        .iter()
        .map(|entry| entry.created_at)
        .max()
        .map(datetime_of_millis);

    let days_active = entries
        .iter()
        .map(|entry| day_of_millis(entry.created_at))
        .collect::<BTreeSet<_>>()
        .len();

    debug!(
        total_entries,
        total_words, writing_streak, days_active, "Calculated diary stats"
    );

    DiaryStats {
        total_entries,
        total_words,
        total_characters,
        mood_distribution,
        mood_percentage,
        most_used_tag,
        all_tags,
        writing_streak,
        average_entries_per_month,
        entries_by_month,
        longest_entry,
        shortest_entry,
        average_entry_length,
        first_entry_date,
        last_entry_date,
        days_active,
    }
}

/// Counts whitespace-separated words in a text.
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rounds `numerator / denominator` to the nearest integer.
fn rounded(numerator: usize, denominator: usize) -> usize {
    (numerator as f64 / denominator as f64).round() as usize
}

fn percent_label(count: usize, total_entries: usize) -> String {
    if total_entries == 0 {
        return "0%".to_string();
    }
    format!("{}%", rounded(count * 100, total_entries))
}

/// Builds the tag frequency table from entries in newest-first order.
///
/// First-seen order in that traversal is the tie-break: the stable sort keeps
/// tags with equal counts in the order their first occurrence was encountered.
fn tag_frequencies(newest_first: &[&DiaryEntry]) -> Vec<TagCount> {
    let mut table: Vec<TagCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in newest_first {
        for tag in &entry.tags {
            match positions.get(tag.as_str()) {
                Some(&at) => table[at].count += 1,
                None => {
                    positions.insert(tag.as_str(), table.len());
                    table.push(TagCount {
                        tag: tag.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// Walks consecutive calendar days backward from the most recent entry.
///
/// A gap of exactly one day extends the run; a repeat of the same day neither
/// extends nor breaks it; a wider gap ends the walk. The anchor is the most
/// recent entry itself, so an old run still reports its historical length.
fn writing_streak(newest_first: &[&DiaryEntry]) -> usize {
    let Some((most_recent, older)) = newest_first.split_first() else {
        return 0;
    };

    let mut streak = 1;
    let mut current_day = day_of_millis(most_recent.created_at);

    for entry in older {
        let day = day_of_millis(entry.created_at);
        let gap = (current_day - day).num_days();
        if gap == 1 {
            streak += 1;
            current_day = day;
        } else if gap > 1 {
            break;
        }
        // gap == 0: another entry on the same day; the run continues unchanged
    }

    streak
}

/// Buckets entries by (year, month) of their creation day.
///
/// The `BTreeMap` key keeps the buckets sorted by the underlying year-month
/// pair; localized labels are attached only afterwards so sort order never
/// depends on locale string comparison.
fn month_buckets(entries: &[DiaryEntry]) -> BTreeMap<(i32, u32), usize> {
    let mut buckets = BTreeMap::new();
    for entry in entries {
        let day = day_of_millis(entry.created_at);
        *buckets.entry((day.year(), day.month())).or_insert(0) += 1;
    }
    buckets
}

fn labeled_months(buckets: BTreeMap<(i32, u32), usize>) -> Vec<MonthCount> {
    buckets
        .into_iter()
        .map(|((year, month), count)| MonthCount {
            month: month_label(year, month),
            count,
        })
        .collect()
}

/// Formats a (year, month) key as the localized label, e.g. `"enero de 2024"`.
fn month_label(year: i32, month: u32) -> String {
    // `month` comes from chrono and is always in 1..=12
    format!("{} de {}", SPANISH_MONTHS[(month - 1) as usize], year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn millis(year: i32, month: u32, day: u32, hour: u32) -> i64 {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    fn entry(id: &str, content: &str, mood: Mood, tags: &[&str], created_at: i64) -> DiaryEntry {
        DiaryEntry {
            id: id.to_string(),
            title: format!("Entrada {}", id),
            content: content.to_string(),
            mood,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_empty_input_returns_zero_stats() {
        let stats = calculate(&[]);

        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.total_characters, 0);
        assert_eq!(stats.mood_distribution, MoodCounts::default());
        for mood in Mood::ALL {
            assert_eq!(stats.mood_percentage.get(mood), "0%");
        }
        assert_eq!(stats.most_used_tag, None);
        assert!(stats.all_tags.is_empty());
        assert_eq!(stats.writing_streak, 0);
        assert_eq!(stats.average_entries_per_month, 0);
        assert!(stats.entries_by_month.is_empty());
        assert_eq!(stats.longest_entry, 0);
        assert_eq!(stats.shortest_entry, 0);
        assert_eq!(stats.average_entry_length, 0);
        assert_eq!(stats.first_entry_date, None);
        assert_eq!(stats.last_entry_date, None);
        assert_eq!(stats.days_active, 0);
    }

    #[test]
    fn test_three_consecutive_days() {
        // Most recent first: moods excelente/buena/buena, tags {a},{a,b},{b}
        let entries = vec![
            entry("1", "hoy", Mood::Excelente, &["a"], millis(2024, 3, 15, 9)),
            entry("2", "ayer", Mood::Buena, &["a", "b"], millis(2024, 3, 14, 9)),
            entry("3", "antier", Mood::Buena, &["b"], millis(2024, 3, 13, 9)),
        ];

        let stats = calculate(&entries);

        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.mood_distribution.excelente, 1);
        assert_eq!(stats.mood_distribution.buena, 2);
        assert_eq!(stats.mood_distribution.normal, 0);
        assert_eq!(stats.mood_distribution.dificil, 0);
        assert_eq!(stats.writing_streak, 3);
        assert_eq!(stats.days_active, 3);

        // Both tags count 2; "a" was seen first in newest-first traversal
        assert_eq!(stats.all_tags.len(), 2);
        assert_eq!(stats.all_tags[0], TagCount { tag: "a".to_string(), count: 2 });
        assert_eq!(stats.all_tags[1], TagCount { tag: "b".to_string(), count: 2 });
        assert_eq!(stats.most_used_tag, Some("a".to_string()));
    }

    #[test]
    fn test_tag_tie_break_ignores_input_order() {
        // Same records as above, supplied oldest-first: the engine must sort
        // internally, so the tie-break still follows creation-descending order
        let entries = vec![
            entry("3", "antier", Mood::Buena, &["b"], millis(2024, 3, 13, 9)),
            entry("2", "ayer", Mood::Buena, &["a", "b"], millis(2024, 3, 14, 9)),
            entry("1", "hoy", Mood::Excelente, &["a"], millis(2024, 3, 15, 9)),
        ];

        let stats = calculate(&entries);

        assert_eq!(stats.all_tags[0].tag, "a");
        assert_eq!(stats.all_tags[1].tag, "b");
        assert_eq!(stats.writing_streak, 3);
    }

    #[test]
    fn test_single_entry_counts() {
        let entries = vec![entry(
            "1",
            "uno dos tres",
            Mood::Normal,
            &[],
            millis(2024, 3, 15, 9),
        )];

        let stats = calculate(&entries);

        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.total_characters, 12);
        assert_eq!(stats.longest_entry, 12);
        assert_eq!(stats.shortest_entry, 12);
        assert_eq!(stats.average_entry_length, 12);
        assert_eq!(stats.writing_streak, 1);
        assert_eq!(stats.days_active, 1);
        assert_eq!(stats.mood_percentage.get(Mood::Normal), "100%");
    }

    #[test]
    fn test_word_count_collapses_whitespace_runs() {
        let entries = vec![entry(
            "1",
            "  uno \t dos\n\ntres  ",
            Mood::Buena,
            &[],
            millis(2024, 3, 15, 9),
        )];

        let stats = calculate(&entries);

        assert_eq!(stats.total_words, 3);
    }

    #[test]
    fn test_same_day_repeat_neither_extends_nor_breaks_streak() {
        let entries = vec![
            entry("1", "tarde", Mood::Buena, &[], millis(2024, 3, 15, 21)),
            entry("2", "mañana", Mood::Buena, &[], millis(2024, 3, 15, 8)),
            entry("3", "ayer", Mood::Normal, &[], millis(2024, 3, 14, 9)),
        ];

        let stats = calculate(&entries);

        // Two entries on the 15th count as one day in the run
        assert_eq!(stats.writing_streak, 2);
        assert_eq!(stats.days_active, 2);
    }

    #[test]
    fn test_gap_ends_streak_at_current_count() {
        let entries = vec![
            entry("1", "hoy", Mood::Buena, &[], millis(2024, 3, 15, 9)),
            entry("2", "ayer", Mood::Buena, &[], millis(2024, 3, 14, 9)),
            entry("3", "hace una semana", Mood::Normal, &[], millis(2024, 3, 8, 9)),
            entry("4", "el día anterior", Mood::Normal, &[], millis(2024, 3, 7, 9)),
        ];

        let stats = calculate(&entries);

        // The run from the 8th backward is unreachable past the gap
        assert_eq!(stats.writing_streak, 2);
        assert_eq!(stats.days_active, 4);
    }

    #[test]
    fn test_streak_is_anchored_to_most_recent_entry_not_today() {
        // A run that ended long ago still reports its own length
        let entries = vec![
            entry("1", "a", Mood::Buena, &[], millis(2020, 1, 3, 9)),
            entry("2", "b", Mood::Buena, &[], millis(2020, 1, 2, 9)),
            entry("3", "c", Mood::Buena, &[], millis(2020, 1, 1, 9)),
        ];

        assert_eq!(calculate(&entries).writing_streak, 3);
    }

    #[test]
    fn test_mood_percentages_round_to_integers() {
        let entries = vec![
            entry("1", "a", Mood::Excelente, &[], millis(2024, 3, 15, 9)),
            entry("2", "b", Mood::Buena, &[], millis(2024, 3, 14, 9)),
            entry("3", "c", Mood::Buena, &[], millis(2024, 3, 13, 9)),
        ];

        let stats = calculate(&entries);

        // 1/3 -> 33%, 2/3 -> 67%
        assert_eq!(stats.mood_percentage.excelente, "33%");
        assert_eq!(stats.mood_percentage.buena, "67%");
        assert_eq!(stats.mood_percentage.normal, "0%");
        assert_eq!(stats.mood_percentage.dificil, "0%");
    }

    #[test]
    fn test_mood_distribution_sums_to_total() {
        let entries = vec![
            entry("1", "a", Mood::Excelente, &[], millis(2024, 1, 1, 9)),
            entry("2", "b", Mood::Dificil, &[], millis(2024, 1, 5, 9)),
            entry("3", "c", Mood::Normal, &[], millis(2024, 2, 1, 9)),
            entry("4", "d", Mood::Buena, &[], millis(2024, 2, 2, 9)),
            entry("5", "e", Mood::Buena, &[], millis(2024, 2, 3, 9)),
        ];

        let stats = calculate(&entries);

        let sum: usize = Mood::ALL
            .iter()
            .map(|mood| stats.mood_distribution.get(*mood))
            .sum();
        assert_eq!(sum, stats.total_entries);
    }

    #[test]
    fn test_intra_entry_duplicate_tags_are_not_deduplicated() {
        let entries = vec![entry(
            "1",
            "a",
            Mood::Buena,
            &["estoicismo", "estoicismo"],
            millis(2024, 3, 15, 9),
        )];

        let stats = calculate(&entries);

        assert_eq!(stats.all_tags.len(), 1);
        assert_eq!(stats.all_tags[0].count, 2);
    }

    #[test]
    fn test_months_sorted_by_year_month_key() {
        // "diciembre de 2023" sorts after "enero de 2024" lexically; the
        // underlying key must win
        let entries = vec![
            entry("1", "a", Mood::Buena, &[], millis(2024, 1, 10, 9)),
            entry("2", "b", Mood::Buena, &[], millis(2023, 12, 5, 9)),
            entry("3", "c", Mood::Buena, &[], millis(2024, 1, 20, 9)),
        ];

        let stats = calculate(&entries);

        assert_eq!(
            stats.entries_by_month,
            vec![
                MonthCount { month: "diciembre de 2023".to_string(), count: 1 },
                MonthCount { month: "enero de 2024".to_string(), count: 2 },
            ]
        );
        // 3 entries over 2 distinct months
        assert_eq!(stats.average_entries_per_month, 2);
    }

    #[test]
    fn test_date_range_and_length_ordering() {
        let entries = vec![
            entry("1", "corta", Mood::Buena, &[], millis(2024, 3, 10, 9)),
            entry("2", "una entrada más larga", Mood::Buena, &[], millis(2024, 3, 12, 9)),
            entry("3", "mediana aquí", Mood::Buena, &[], millis(2024, 3, 11, 9)),
        ];

        let stats = calculate(&entries);

        assert_eq!(
            stats.first_entry_date,
            Some(datetime_of_millis(millis(2024, 3, 10, 9)))
        );
        assert_eq!(
            stats.last_entry_date,
            Some(datetime_of_millis(millis(2024, 3, 12, 9)))
        );
        assert!(stats.longest_entry >= stats.average_entry_length);
        assert!(stats.average_entry_length >= stats.shortest_entry);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let entries = vec![
            entry("1", "hoy", Mood::Excelente, &["a"], millis(2024, 3, 15, 9)),
            entry("2", "ayer", Mood::Buena, &["a", "b"], millis(2024, 3, 14, 9)),
        ];
        let snapshot = entries.clone();

        let first = calculate(&entries);
        let second = calculate(&entries);

        assert_eq!(first, second);
        // The input slice is untouched
        assert_eq!(entries, snapshot);
    }

    #[test]
    fn test_stats_serialize_with_contract_field_names() {
        let entries = vec![entry("1", "uno", Mood::Dificil, &[], millis(2024, 3, 15, 9))];

        let json = serde_json::to_value(calculate(&entries)).unwrap();

        assert_eq!(json["totalEntries"], 1);
        assert_eq!(json["moodDistribution"]["difícil"], 1);
        assert_eq!(json["moodPercentage"]["difícil"], "100%");
        assert_eq!(json["writingStreak"], 1);
        assert!(json["firstEntryDate"].is_string());
    }
}
