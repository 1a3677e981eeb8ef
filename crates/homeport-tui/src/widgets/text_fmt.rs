//! Display formatting helpers: prices, truncation, calendar dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Fallback photo for listings without an uploaded image, and for
/// images that fail to load on the backend side.
pub const LISTING_PLACEHOLDER_IMAGE: &str = "/images/logo.png";

/// Fallback portrait for agents without a photo.
pub const AGENT_PLACEHOLDER_IMAGE: &str = "/images/generic_actor.jpg";

/// Maximum description length in summary cards; the detail view always
/// shows the full text.
pub const SUMMARY_DESCRIPTION_LIMIT: usize = 100;

const ELLIPSIS: &str = "...";

/// Format a price as a thousands-grouped integer, en-US style
/// (`1234567.0` → `"1,234,567"`). Fractional cents are dropped from
/// display; the integer part is never truncated.
pub fn fmt_price(price: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let n = price.trunc() as i64;
    let digits = n.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if n < 0 { format!("-{grouped}") } else { grouped }
}

/// Truncate `text` to at most `max_chars` characters, appending an
/// ellipsis marker when anything was cut. Char-based, so multi-byte
/// text never splits inside a code point.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}{ELLIPSIS}")
}

/// Format a backend timestamp as a human-readable calendar date,
/// e.g. `"Mar 5, 2024"`. Absent or unparseable input renders as
/// `"Unknown"` rather than failing.
pub fn fmt_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map_or_else(|| "Unknown".to_owned(), |d| d.format("%b %-d, %Y").to_string())
}

/// Accept RFC 3339 plus the plain formats SQLite-backed services emit.
fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn price_groups_thousands() {
        assert_eq!(fmt_price(0.0), "0");
        assert_eq!(fmt_price(999.0), "999");
        assert_eq!(fmt_price(1_000.0), "1,000");
        assert_eq!(fmt_price(275_000.0), "275,000");
        assert_eq!(fmt_price(1_234_567.0), "1,234,567");
        assert_eq!(fmt_price(25_000_000.0), "25,000,000");
    }

    #[test]
    fn price_drops_cents_keeps_integer_digits() {
        assert_eq!(fmt_price(499_999.99), "499,999");
        assert_eq!(fmt_price(1_000_000.5), "1,000,000");
    }

    #[test]
    fn truncate_short_text_unchanged() {
        let text = "a".repeat(100);
        assert_eq!(truncate(&text, 100), text);
        assert_eq!(truncate("cozy", 100), "cozy");
        assert_eq!(truncate("", 100), "");
    }

    #[test]
    fn truncate_long_text_is_exactly_limit_plus_ellipsis() {
        let text = "b".repeat(101);
        let out = truncate(&text, 100);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..100], &text[..100]);
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        let out = truncate(&text, 4);
        assert_eq!(out, format!("{}...", "é".repeat(4)));
    }

    #[test]
    fn date_formats_calendar_style() {
        assert_eq!(fmt_date(Some("2024-03-05T10:00:00Z")), "Mar 5, 2024");
        assert_eq!(fmt_date(Some("2023-12-31 23:59:59")), "Dec 31, 2023");
        assert_eq!(fmt_date(Some("2022-01-15")), "Jan 15, 2022");
    }

    #[test]
    fn date_falls_back_to_unknown() {
        assert_eq!(fmt_date(None), "Unknown");
        assert_eq!(fmt_date(Some("")), "Unknown");
        assert_eq!(fmt_date(Some("next tuesday")), "Unknown");
    }
}
