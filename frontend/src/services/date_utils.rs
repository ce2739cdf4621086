use chrono::{Datelike, NaiveDate};

/// A cell in the month grid: either a leading blank (padding before day 1)
/// or an actual day with its "YYYY-MM-DD" string.
#[derive(Debug, Clone, PartialEq)]
pub enum DayCell {
    Blank,
    Day { day: u32, date: String },
}

/// Get month name from number (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid",
    }
}

/// Number of days in a month (accounting for leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 30,
    }
}

/// Weekday of day 1 of the given month (0 = Sunday, 1 = Monday, ...)
pub fn first_day_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Shift a (year, month) anchor by whole months.
///
/// The anchor never carries a day, so there is no month-length overflow
/// to clamp (paging from Jan 31 can never land on Feb 31).
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) + offset;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

/// Build the cell sequence for a month grid: one `Blank` per weekday
/// before day 1, then one `Day` per day of the month.
pub fn month_cells(year: i32, month: u32) -> Vec<DayCell> {
    let blanks = first_day_of_month(year, month);
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity((blanks + days) as usize);
    for _ in 0..blanks {
        cells.push(DayCell::Blank);
    }
    for day in 1..=days {
        cells.push(DayCell::Day {
            day,
            date: format!("{:04}-{:02}-{:02}", year, month, day),
        });
    }
    cells
}

/// Get current date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// Get the current (year, month) anchor for the initial view
pub fn current_year_month() -> (i32, u32) {
    use js_sys::Date;
    let now = Date::new_0();
    (now.get_full_year() as i32, now.get_month() + 1)
}

/// Format a "YYYY-MM-DD" date string for display (e.g., "December 25, 2025")
pub fn format_date_for_display(date_str: &str) -> String {
    let parts: Vec<&str> = date_str.split('-').collect();
    if let [year, month, day] = parts[..] {
        if let (Ok(_), Ok(m), Ok(d)) = (
            year.parse::<u32>(),
            month.parse::<u32>(),
            day.parse::<u32>(),
        ) {
            if (1..=12).contains(&m) {
                return format!("{} {}, {}", month_name(m), d, year);
            }
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        // Leap years
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_first_day_of_month() {
        // June 2025 starts on a Sunday
        assert_eq!(first_day_of_month(2025, 6), 0);
        // December 2025 starts on a Monday
        assert_eq!(first_day_of_month(2025, 12), 1);
        // February 2024 starts on a Thursday
        assert_eq!(first_day_of_month(2024, 2), 4);
    }

    #[test]
    fn test_shift_month_within_year() {
        assert_eq!(shift_month(2025, 6, 1), (2025, 7));
        assert_eq!(shift_month(2025, 6, -1), (2025, 5));
    }

    #[test]
    fn test_shift_month_across_year_boundary() {
        assert_eq!(shift_month(2025, 12, 1), (2026, 1));
        assert_eq!(shift_month(2025, 1, -1), (2024, 12));
        assert_eq!(shift_month(2025, 3, -3), (2024, 12));
        assert_eq!(shift_month(2025, 11, 14), (2027, 1));
    }

    #[test]
    fn test_month_cells_count_is_blanks_plus_days() {
        // No leading blanks: June 2025 starts on Sunday
        assert_eq!(month_cells(2025, 6).len(), 30);
        // One leading blank: December 2025 starts on Monday
        assert_eq!(month_cells(2025, 12).len(), 1 + 31);
        // Leap February
        assert_eq!(month_cells(2024, 2).len(), 4 + 29);
    }

    #[test]
    fn test_month_cells_layout() {
        let cells = month_cells(2025, 12);
        assert_eq!(cells[0], DayCell::Blank);
        assert_eq!(
            cells[1],
            DayCell::Day { day: 1, date: "2025-12-01".to_string() }
        );
        assert_eq!(
            cells.last().unwrap(),
            &DayCell::Day { day: 31, date: "2025-12-31".to_string() }
        );
    }

    #[test]
    fn test_month_cells_dates_are_zero_padded() {
        let cells = month_cells(2026, 3);
        let first_day = cells
            .iter()
            .find_map(|c| match c {
                DayCell::Day { date, .. } => Some(date.clone()),
                DayCell::Blank => None,
            })
            .unwrap();
        assert_eq!(first_day, "2026-03-01");
    }

    #[test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2025-12-25"), "December 25, 2025");
        assert_eq!(format_date_for_display("2025-01-05"), "January 5, 2025");
        // Unparseable input passes through untouched
        assert_eq!(format_date_for_display("garbage"), "garbage");
    }
}
