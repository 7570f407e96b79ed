//! First-mention timestamps (`HH:MM:SS`, `MM:SS` or plain seconds)

/// Parse a first-mention timestamp into seconds
///
/// Accepts one to three colon-separated unsigned components. Minutes and
/// seconds after the leading component must be below 60.
///
/// # Examples
///
/// ```
/// use debatemap_domain::parse_timestamp;
///
/// assert_eq!(parse_timestamp("01:02:03"), Some(3723));
/// assert_eq!(parse_timestamp("12:30"), Some(750));
/// assert_eq!(parse_timestamp("45"), Some(45));
/// assert_eq!(parse_timestamp("soon"), None);
/// ```
pub fn parse_timestamp(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut total: u32 = 0;
    for (index, part) in parts.iter().enumerate() {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let n: u32 = part.parse().ok()?;
        if index > 0 && n >= 60 {
            return None;
        }
        total = total.checked_mul(60)?.checked_add(n)?;
    }
    Some(total)
}

/// Format seconds as `HH:MM:SS`
pub fn format_timestamp(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("1:2:3:4"), None);
        assert_eq!(parse_timestamp("00:61:00"), None);
        assert_eq!(parse_timestamp("00::00"), None);
        assert_eq!(parse_timestamp("-1:00"), None);
    }

    #[test]
    fn test_leading_component_unbounded() {
        assert_eq!(parse_timestamp("90:00"), Some(5400));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_timestamp(3723), "01:02:03");
        assert_eq!(format_timestamp(0), "00:00:00");
    }
}
