use chrono::{Datelike, Duration, Local, NaiveDate};

const FRIDAY_FROM_SUNDAY: i64 = 5;
const PARAM_FORMAT: &str = "%Y-%m-%d";

/// Friday-to-Sunday window the listing is queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn start_param(&self) -> String {
        self.start.format(PARAM_FORMAT).to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format(PARAM_FORMAT).to_string()
    }
}

/// The weekend after the upcoming one. On a Friday the upcoming Friday is
/// today, so the result starts a full week out.
pub fn weekend_range(today: NaiveDate) -> DateRange {
    let weekday = i64::from(today.weekday().num_days_from_sunday());
    let days_until_friday = (FRIDAY_FROM_SUNDAY - weekday + 7) % 7;
    let start = today + Duration::days(days_until_friday + 7);
    DateRange {
        start,
        end: start + Duration::days(2),
    }
}

pub fn upcoming_weekend() -> DateRange {
    weekend_range(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn monday_skips_to_friday_of_next_week() {
        let range = weekend_range(date(2026, 10, 19));
        assert_eq!(range.start, date(2026, 10, 30));
        assert_eq!(range.end, date(2026, 11, 1));
        assert_eq!(range.start_param(), "2026-10-30");
        assert_eq!(range.end_param(), "2026-11-01");
    }

    #[test]
    fn friday_starts_a_week_out() {
        let friday = date(2026, 10, 23);
        assert_eq!(friday.weekday(), Weekday::Fri);
        let range = weekend_range(friday);
        assert_eq!(range.start, date(2026, 10, 30));
    }

    #[test]
    fn every_weekday_lands_on_a_friday_within_two_weeks() {
        let mut today = date(2026, 12, 20);
        for _ in 0..21 {
            let range = weekend_range(today);
            let gap = (range.start - today).num_days();
            assert_eq!(range.start.weekday(), Weekday::Fri, "from {today}");
            assert!((7..=13).contains(&gap), "gap {gap} from {today}");
            assert_eq!((range.end - range.start).num_days(), 2);
            assert_eq!(range.end.weekday(), Weekday::Sun);
            today = today.succ_opt().expect("next day");
        }
    }

    #[test]
    fn saturday_crosses_the_year_boundary() {
        let range = weekend_range(date(2026, 12, 26));
        assert_eq!(range.start, date(2027, 1, 8));
        assert_eq!(range.end_param(), "2027-01-10");
    }
}
