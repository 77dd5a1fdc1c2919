use jiff::Timestamp;
use jiff::civil::Date;

/// Format a price string for display. "0" (or anything that parses to zero)
/// reads as "Free"; other numeric strings get the currency prefix; free text
/// passes through untouched.
pub fn format_price(price: &str) -> String {
    match price.trim().parse::<f64>() {
        Ok(v) if v == 0.0 => "Free".to_string(),
        Ok(v) => {
            if v == v.trunc() {
                format!("EGP {:.0}", v)
            } else {
                format!("EGP {:.2}", v)
            }
        }
        Err(_) => price.to_string(),
    }
}

/// Format an ISO-8601 date or instant for display, e.g. "Nov 7, 2025".
///
/// The API hands back full instants; the draft holds bare dates. Anything
/// else is shown as-is.
pub fn format_event_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(ts) = trimmed.parse::<Timestamp>() {
        let date = ts.to_zoned(jiff::tz::TimeZone::UTC).date();
        return format_date(date);
    }
    if let Ok(date) = Date::strptime("%Y-%m-%d", trimmed) {
        return format_date(date);
    }
    trimmed.to_string()
}

fn format_date(date: Date) -> String {
    date.strftime("%b %-d, %Y").to_string()
}

/// Format a coordinate with fixed precision for the map panel.
pub fn format_coord(value: f64) -> String {
    format!("{:.4}", value)
}

/// Shorten a string to `max` characters, ellipsized.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("0"), "Free");
        assert_eq!(format_price("0.00"), "Free");
        assert_eq!(format_price("150"), "EGP 150");
        assert_eq!(format_price("99.5"), "EGP 99.50");
        assert_eq!(format_price("TBD"), "TBD");
    }

    #[test]
    fn test_format_event_date() {
        assert_eq!(format_event_date("2025-11-07"), "Nov 7, 2025");
        assert_eq!(format_event_date("2025-11-07T00:00:00Z"), "Nov 7, 2025");
        assert_eq!(format_event_date("sometime soon"), "sometime soon");
    }

    #[test]
    fn test_format_coord() {
        assert_eq!(format_coord(30.0444), "30.0444");
        assert_eq!(format_coord(26.85), "26.8500");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer label", 8), "a longe…");
    }
}
