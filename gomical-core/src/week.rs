//! Week rotation and weekday-to-date resolution.
//!
//! Collection schedules name weekdays, but displays want concrete dates
//! ("this Thursday is the 14th"). Only the current week is ever
//! relevant, so a full date-range model is unnecessary: today anchors a
//! rotated week and every weekday resolves to today plus its offset.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::model::Weekday;

/// The seven days as a cyclic rotation of the canonical order,
/// beginning at `start`.
#[must_use]
pub fn rotation_from(start: Weekday) -> [Weekday; 7] {
    let mut week = Weekday::ALL;
    week.rotate_left(start.days_from_monday());
    week
}

/// The seven days beginning at the local current weekday.
#[must_use]
pub fn rotation_starting_today() -> [Weekday; 7] {
    rotation_from(today())
}

/// The local current weekday.
#[must_use]
pub fn today() -> Weekday {
    Local::now().date_naive().weekday().into()
}

/// Resolve `day` to its date within the week that starts on `today`.
///
/// The offset is `day`'s position in the rotation beginning at `today`'s
/// weekday: 0 when it is today itself, up to 6 for the day just past.
#[must_use]
pub fn date_in_week_of(today: NaiveDate, day: Weekday) -> NaiveDate {
    let anchor = Weekday::from(today.weekday()).days_from_monday();
    let offset = (day.days_from_monday() + 7 - anchor) % 7;
    today
        .checked_add_days(Days::new(offset as u64))
        .unwrap_or(today)
}

/// `day`'s date within the current local week, formatted `YYYY-MM-DD`.
#[must_use]
pub fn date_in_current_week(day: Weekday) -> String {
    date_in_week_of(Local::now().date_naive(), day)
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Days, Local, NaiveDate};

    use crate::model::Weekday;
    use crate::week::{
        date_in_current_week, date_in_week_of, rotation_from, rotation_starting_today, today,
    };

    #[test]
    fn test_rotation_is_cyclic_permutation() {
        for start in Weekday::ALL {
            let rotation = rotation_from(start);
            assert_eq!(rotation.first(), Some(&start));
            let unique: HashSet<_> = rotation.iter().copied().collect();
            assert_eq!(unique.len(), 7, "rotation must cover all seven days");
            // Successors follow the canonical cycle.
            for pair in rotation.windows(2) {
                let &[current, next] = pair else {
                    continue;
                };
                assert_eq!(
                    next.days_from_monday(),
                    (current.days_from_monday() + 1) % 7
                );
            }
        }
    }

    #[test]
    fn test_rotation_from_monday_is_canonical() {
        assert_eq!(rotation_from(Weekday::Monday), Weekday::ALL);
    }

    #[test]
    fn test_rotation_starting_today_begins_today() {
        assert_eq!(rotation_starting_today().first(), Some(&today()));
    }

    #[test]
    fn test_date_resolution_around_anchor() {
        // 2026-08-27 is a Thursday.
        let anchor = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();

        assert_eq!(date_in_week_of(anchor, Weekday::Thursday), anchor);
        assert_eq!(
            date_in_week_of(anchor, Weekday::Friday),
            anchor.checked_add_days(Days::new(1)).unwrap()
        );
        // The day just past comes back six days ahead.
        assert_eq!(
            date_in_week_of(anchor, Weekday::Wednesday),
            anchor.checked_add_days(Days::new(6)).unwrap()
        );
        assert_eq!(
            date_in_week_of(anchor, Weekday::Sunday),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
        );
    }

    #[test]
    fn test_date_resolution_crosses_month_boundary() {
        // 2026-08-31 is a Monday; Sunday lands in September.
        let anchor = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        assert_eq!(
            date_in_week_of(anchor, Weekday::Sunday),
            NaiveDate::from_ymd_opt(2026, 9, 6).unwrap()
        );
    }

    #[test]
    fn test_current_week_date_of_today_is_today() {
        let formatted = date_in_current_week(today());
        assert_eq!(
            formatted,
            Local::now().date_naive().format("%Y-%m-%d").to_string()
        );
        let parsed = NaiveDate::parse_from_str(&formatted, "%Y-%m-%d").unwrap();
        assert_eq!(parsed, Local::now().date_naive());
    }
}
