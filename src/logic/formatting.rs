//! Formatting and display logic
//!
//! Pure functions for formatting country data for the cards and status bar.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format an area in square kilometres
///
/// Whole numbers print without a decimal part, the way the API returns them.
///
/// # Examples
/// ```
/// use countryviz::logic::formatting::format_area;
///
/// assert_eq!(format_area(Some(65300.0)), "65300");
/// assert_eq!(format_area(Some(0.44)), "0.44");
/// assert_eq!(format_area(None), "unknown");
/// ```
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(area) => format!("{}", area),
        None => "unknown".to_string(),
    }
}

/// Truncate `text` to at most `max_width` terminal columns, adding "…" when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

/// "shown/total" summary for the status bar
pub fn format_count(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{} countries", total)
    } else {
        format!("{}/{} countries", shown, total)
    }
}
