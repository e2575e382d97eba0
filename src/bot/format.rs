//! Message formatting shared by several commands.

use crate::{
    core::expiry::{self, ExpiryInfo},
    entities::food_item,
};
use chrono::NaiveDate;

/// Discord's limit for embed descriptions
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;
/// Discord's limit for embed field values
pub const EMBED_FIELD_LIMIT: usize = 1024;
/// Discord's limit for embed titles and field names
pub const EMBED_TITLE_LIMIT: usize = 256;
/// Discord's limit for all text in one embed (title, description, fields, footer)
pub const EMBED_TOTAL_LIMIT: usize = 6000;
/// Status shown when an expiry date can't be read
pub const UNKNOWN_STATUS: &str = "❓ Unknown";

/// Formats a quantity without a trailing `.0` for whole numbers.
///
/// Two decimals are shown at most, unless that would round a non-zero
/// quantity down to "0".
#[must_use]
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        return format!("{quantity:.0}");
    }
    let rounded = format!("{quantity:.2}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();
    if rounded == "0" || rounded == "-0" {
        quantity.to_string()
    } else {
        rounded
    }
}

/// Status for a typed expiry date, or [`UNKNOWN_STATUS`] if it can't be parsed.
#[must_use]
pub fn format_expiry_input(input: &str, today: NaiveDate) -> String {
    expiry::compute_status_from_input(input, today).map_or_else(
        |_| UNKNOWN_STATUS.to_string(),
        |info| format!("{} {}", info.status.emoji(), expiry::describe_days(info.days_remaining)),
    )
}

/// Status fragment like "⚠️ Expires in 3 days (2024-03-18)".
#[must_use]
pub fn format_expiry(info: ExpiryInfo, expiry_date: NaiveDate) -> String {
    format!(
        "{} {} ({})",
        info.status.emoji(),
        expiry::describe_days(info.days_remaining),
        expiry::format_date(expiry_date)
    )
}

/// One listing line for an item, e.g.
/// "`#12` **Milk** · 2 l · Dairy · 🔥 Expires today! (2024-03-15)".
#[must_use]
pub fn format_item_line(item: &food_item::Model, today: NaiveDate) -> String {
    let info = expiry::compute_status(item.expiry_date, today);
    format!(
        "`#{}` **{}** · {} {} · {} · {}",
        item.id,
        item.name,
        format_quantity(item.quantity),
        item.unit,
        item.category,
        format_expiry(info, item.expiry_date)
    )
}

/// Joins lines, stopping before `limit` characters and noting how many were left out.
#[must_use]
pub fn join_lines_within(lines: &[String], limit: usize) -> String {
    let mut out = String::new();
    for (shown, line) in lines.iter().enumerate() {
        let remaining = lines.len() - shown;
        let footer = format!("\n…and {remaining} more");
        if out.len() + line.len() + 1 + footer.len() > limit {
            out.push_str(&footer);
            return out;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

/// Truncates `text` to at most `limit` bytes on a char boundary, adding "…" if cut.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut end = limit.saturating_sub('…'.len_utf8());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &text[..end])
}
