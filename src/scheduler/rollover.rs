//! Weekend rollover of congratulation dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Whether the date falls on a Saturday or a Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Find the next date falling on `target`, strictly after `date`.
///
/// When `date` itself is already a `target` weekday the result is one week
/// later, so the function always moves forward in time.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use contact_assistant::scheduler::next_weekday_on_or_after;
///
/// let saturday = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
/// let monday = next_weekday_on_or_after(saturday, Weekday::Mon);
/// assert_eq!(monday, NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());
/// ```
pub fn next_weekday_on_or_after(date: NaiveDate, target: Weekday) -> NaiveDate {
    let current = i64::from(date.weekday().num_days_from_monday());
    let wanted = i64::from(target.num_days_from_monday());

    let mut offset = wanted - current;
    if offset <= 0 {
        offset += 7;
    }

    date + Duration::days(offset)
}

/// Move a Saturday or Sunday to the following Monday; other days are unchanged.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    if is_weekend(date) {
        next_weekday_on_or_after(date, Weekday::Mon)
    } else {
        date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2025, 3, 15)));
        assert!(is_weekend(date(2025, 3, 16)));
        assert!(!is_weekend(date(2025, 3, 17)));
        assert!(!is_weekend(date(2025, 3, 14)));
    }

    #[test]
    fn test_next_weekday_moves_forward() {
        // Thursday -> Monday of next week
        assert_eq!(
            next_weekday_on_or_after(date(2025, 3, 20), Weekday::Mon),
            date(2025, 3, 24)
        );
        // Monday -> Wednesday of the same week
        assert_eq!(
            next_weekday_on_or_after(date(2025, 3, 17), Weekday::Wed),
            date(2025, 3, 19)
        );
    }

    #[test]
    fn test_next_weekday_never_returns_same_day() {
        assert_eq!(
            next_weekday_on_or_after(date(2025, 3, 17), Weekday::Mon),
            date(2025, 3, 24)
        );
    }

    #[test]
    fn test_adjust_for_weekend() {
        assert_eq!(adjust_for_weekend(date(2025, 3, 15)), date(2025, 3, 17));
        assert_eq!(adjust_for_weekend(date(2025, 3, 16)), date(2025, 3, 17));
        assert_eq!(adjust_for_weekend(date(2025, 3, 14)), date(2025, 3, 14));
        assert_eq!(adjust_for_weekend(date(2025, 3, 17)), date(2025, 3, 17));
    }

    #[test]
    fn test_adjust_for_weekend_crosses_year_boundary() {
        // Sunday 31.12.2028
        assert_eq!(adjust_for_weekend(date(2028, 12, 31)), date(2029, 1, 1));
    }
}
