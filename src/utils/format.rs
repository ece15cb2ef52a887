const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// `YYYY-MM-DD` -> `21 May 2024`. Falls back to the input when it does not
/// look like an ISO date.
pub fn format_iso_date(date: &str) -> String {
    let bytes = date.as_bytes();
    if bytes.len() >= 10 && bytes[4] == b'-' && bytes[7] == b'-' {
        let day = date[8..10].parse::<u32>().ok();
        let month = date[5..7]
            .parse::<usize>()
            .ok()
            .filter(|m| (1..=12).contains(m));
        if let (Some(day), Some(month)) = (day, month) {
            return format!("{} {} {}", day, MONTHS[month - 1], &date[0..4]);
        }
    }
    date.to_string()
}

#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Current local date and time for the header clock.
#[cfg(feature = "web")]
pub fn clock_now() -> String {
    use js_sys::Date;
    let d = Date::new_0();
    let day = d.get_date() as u32;
    let month = d.get_month() as usize; // 0-based
    let year = d.get_full_year() as i32;
    format!(
        "{} {} {} {}:{}:{}",
        day,
        MONTHS[month.min(11)],
        year,
        pad2(d.get_hours() as i32),
        pad2(d.get_minutes() as i32),
        pad2(d.get_seconds() as i32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_iso_date("2024-05-21"), "21 May 2024");
        assert_eq!(format_iso_date("2025-12-01"), "1 December 2025");
    }

    #[test]
    fn leaves_non_dates_alone() {
        assert_eq!(format_iso_date(""), "");
        assert_eq!(format_iso_date("soon"), "soon");
        assert_eq!(format_iso_date("2024-99-21"), "2024-99-21");
    }
}
