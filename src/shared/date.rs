/// Validates a calendar date and normalizes it to `YYYY-MM-DD`. Accepts what
/// an `<input type="date">` produces; anything else is rejected before any
/// network call is made. Kept chrono-free so it runs on the web side too.
pub fn normalize_iso_date(raw: &str) -> Option<String> {
    let s = raw.trim();
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !s
        .char_indices()
        .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit())
    {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
        return None;
    }
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_picker_date() {
        assert_eq!(
            normalize_iso_date("2024-05-21"),
            Some("2024-05-21".to_string())
        );
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert_eq!(normalize_iso_date(""), None);
        assert_eq!(normalize_iso_date("not-a-date"), None);
        assert_eq!(normalize_iso_date("21/05/2024"), None);
        assert_eq!(normalize_iso_date("2024-5-21"), None);
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(normalize_iso_date("2024-13-01"), None);
        assert_eq!(normalize_iso_date("2024-00-10"), None);
        assert_eq!(normalize_iso_date("2024-04-31"), None);
        assert_eq!(normalize_iso_date("2023-02-29"), None);
    }

    #[test]
    fn accepts_leap_day() {
        assert_eq!(
            normalize_iso_date("2024-02-29"),
            Some("2024-02-29".to_string())
        );
    }
}
