//! Display helpers shared by the list widgets.

use chrono::NaiveDate;

/// Escapes text for safe insertion into HTML element content and
/// double- or single-quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Formats a date as `5 Jun 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Whole days from `today` until `date`; negative once the date has passed.
///
/// Both sides are calendar dates, so the result is local midnight to local
/// midnight and unaffected by DST shifts.
pub fn days_left(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Human-readable countdown for a day difference.
pub fn countdown_label(days_left: i64) -> String {
    let magnitude = days_left.unsigned_abs();
    let unit = if magnitude == 1 { "day" } else { "days" };
    match days_left {
        0 => "Today".to_string(),
        n if n > 0 => format!("{magnitude} {unit} left"),
        _ => format!("{magnitude} {unit} ago"),
    }
}

#[cfg(test)]
mod tests {
    use super::{countdown_label, days_left, escape_html, format_date};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b onclick="x">Tom & 'Jerry'</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn format_date_uses_unpadded_day_and_short_month() {
        assert_eq!(format_date(date(2025, 6, 5)), "5 Jun 2025");
        assert_eq!(format_date(date(2024, 12, 31)), "31 Dec 2024");
    }

    #[test]
    fn countdown_labels_cover_today_future_and_past() {
        let today = date(2025, 6, 10);
        assert_eq!(countdown_label(days_left(today, today)), "Today");
        assert_eq!(countdown_label(days_left(date(2025, 6, 11), today)), "1 day left");
        assert_eq!(countdown_label(days_left(date(2025, 6, 9), today)), "1 day ago");
        assert_eq!(countdown_label(days_left(date(2025, 6, 13), today)), "3 days left");
        assert_eq!(countdown_label(days_left(date(2025, 5, 31), today)), "10 days ago");
    }

    #[test]
    fn days_left_crosses_month_and_year_boundaries() {
        assert_eq!(days_left(date(2026, 1, 1), date(2025, 12, 31)), 1);
        assert_eq!(days_left(date(2024, 3, 1), date(2024, 2, 28)), 2);
    }
}
