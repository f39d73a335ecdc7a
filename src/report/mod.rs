//! Human-readable summaries of the computed statistics.
//!
//! Pure formatting of [`DiaryStats`] and [`ReflectionStats`] into the Spanish
//! share-text the app presents. Nothing here touches the filesystem; the text
//! goes to stdout. Durations are surfaced in minutes as
//! `round(total_time / 60)` here, on the presentation side; the engine itself
//! only ever exposes raw seconds.

use crate::constants::{REPORT_NONE_PLACEHOLDER, REPORT_TOP_TAGS};
use crate::records::{Difficulty, Mood};
use crate::stats::{DiaryStats, ReflectionStats};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Renders the diary statistics summary text.
pub fn diary_summary(stats: &DiaryStats) -> String {
    let mut text = String::new();

    text.push_str("📊 ESTADÍSTICAS DE MI DIARIO\n\n");

    text.push_str("📈 General:\n");
    let _ = writeln!(text, "• Total de notas: {}", stats.total_entries);
    let _ = writeln!(
        text,
        "• Total de palabras: {}",
        group_thousands(stats.total_words as u64)
    );
    let _ = writeln!(
        text,
        "• Total de caracteres: {}",
        group_thousands(stats.total_characters as u64)
    );
    let _ = writeln!(text, "• Días activos: {}", stats.days_active);
    let _ = writeln!(text, "• Racha actual: {} días", stats.writing_streak);
    text.push('\n');

    text.push_str("😊 Estados de ánimo:\n");
    for mood in Mood::ALL {
        let _ = writeln!(
            text,
            "• {}: {} ({})",
            capitalize(mood.label()),
            stats.mood_distribution.get(mood),
            stats.mood_percentage.get(mood)
        );
    }
    text.push('\n');

    text.push_str("📝 Contenido:\n");
    let _ = writeln!(text, "• Nota más larga: {} caracteres", stats.longest_entry);
    let _ = writeln!(text, "• Nota más corta: {} caracteres", stats.shortest_entry);
    let _ = writeln!(
        text,
        "• Promedio por nota: {} caracteres",
        stats.average_entry_length
    );
    let _ = writeln!(
        text,
        "• Promedio por mes: {} notas",
        stats.average_entries_per_month
    );
    text.push('\n');

    text.push_str("🏷️ Etiquetas:\n");
    let _ = writeln!(
        text,
        "• Más usada: {}",
        stats
            .most_used_tag
            .as_deref()
            .unwrap_or(REPORT_NONE_PLACEHOLDER)
    );
    let _ = writeln!(text, "• Total de etiquetas únicas: {}", stats.all_tags.len());
    for tag in stats.all_tags.iter().take(REPORT_TOP_TAGS) {
        let _ = writeln!(text, "  • #{}: {}", tag.tag, tag.count);
    }
    text.push('\n');

    text.push_str("📅 Período:\n");
    let _ = writeln!(text, "• Desde: {}", date_label(stats.first_entry_date));
    let _ = writeln!(text, "• Hasta: {}", date_label(stats.last_entry_date));

    text.trim_end().to_string()
}

/// Renders the reflection statistics summary text.
pub fn reflection_summary(stats: &ReflectionStats) -> String {
    let mut text = String::new();

    text.push_str("🧘 ESTADÍSTICAS DE MIS REFLEXIONES\n\n");

    text.push_str("📈 General:\n");
    let _ = writeln!(text, "• Total de reflexiones: {}", stats.total_reflections);
    let _ = writeln!(text, "• Completadas: {}", stats.completed_reflections);
    let _ = writeln!(
        text,
        "• Tiempo total: {} minutos",
        minutes(stats.total_time)
    );
    let _ = writeln!(text, "• Tiempo promedio: {} segundos", stats.average_time);
    let _ = writeln!(text, "• Racha actual: {} días", stats.streak);
    text.push('\n');

    text.push_str("🎯 Por dificultad:\n");
    for difficulty in Difficulty::ALL {
        let _ = writeln!(
            text,
            "• {}: {}",
            capitalize(difficulty.label()),
            stats.by_difficulty.get(difficulty)
        );
    }
    text.push('\n');

    text.push_str("🕐 Última reflexión:\n");
    match &stats.last_reflection {
        Some(reflection) => {
            let _ = writeln!(
                text,
                "• {} ({})",
                reflection.exercise_title, reflection.date
            );
        }
        None => {
            let _ = writeln!(text, "• {}", REPORT_NONE_PLACEHOLDER);
        }
    }

    text.trim_end().to_string()
}

/// Total minutes for a seconds figure, rounded to the nearest minute.
fn minutes(seconds: u64) -> u64 {
    (seconds as f64 / 60.0).round() as u64
}

/// Groups a number with es-ES thousands separators, e.g. `1.234.567`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a timestamp as the es-ES short date, `15/3/2024`, or the
/// placeholder when absent.
fn date_label(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%-d/%-m/%Y").to_string(),
        None => REPORT_NONE_PLACEHOLDER.to_string(),
    }
}
