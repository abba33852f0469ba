//! Plain-text rendering for the terminal.

use std::fmt::Write;

use crate::models::forecast_model::MenuItem;
use crate::models::forecast_row::ForecastRow;

/// Render the forecast as a table headed by `title`.
pub fn render_table(title: &str, rows: &[ForecastRow], show_label: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);

    if rows.is_empty() {
        out.push_str("  (no forecast days)\n");
        return out;
    }

    let day_width = rows
        .iter()
        .map(|r| r.day_label.chars().count())
        .max()
        .unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|r| r.condition.label().chars().count())
        .max()
        .unwrap_or(0);

    for row in rows {
        let _ = write!(
            out,
            "  {:<day_width$}  {} ",
            row.day_label,
            row.condition.glyph(),
        );
        if show_label {
            let _ = write!(out, " {:<label_width$} ", row.condition.label());
        }
        let _ = writeln!(out, " {}", row.temperatures);
    }

    out
}

/// Render the location menu, marking the selection.
pub fn render_menu(items: &[MenuItem]) -> String {
    let mut out = String::from("Select a Location\n");
    for item in items {
        let marker = if item.is_selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "  {} {:<12} {}",
            marker,
            item.location.name.as_str(),
            item.location.title
        );
    }
    out
}
