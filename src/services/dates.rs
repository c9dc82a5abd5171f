use chrono::{Datelike, Days, Local, NaiveDate};

use crate::models::DateOption;

/// Сколько дней вперед доступно для бронирования, включая сегодня
pub const DATE_OPTION_DAYS: u64 = 7;

/// Названия дней недели, индекс 0 = воскресенье
pub const WEEKDAY_NAMES: [&str; 7] = ["週日", "週一", "週二", "週三", "週四", "週五", "週六"];

/// Источник текущей даты
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Локальная дата системы
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Фиксированная дата, для тестов и для SHOW_DATE из конфигурации
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn date_options(clock: &dyn Clock) -> Vec<DateOption> {
    date_options_from(clock.today())
}

/// Семь дат начиная с `start`
pub fn date_options_from(start: NaiveDate) -> Vec<DateOption> {
    (0..DATE_OPTION_DAYS)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(date_option)
        .collect()
}

pub fn date_option(date: NaiveDate) -> DateOption {
    DateOption {
        value: date.format("%Y-%m-%d").to_string(),
        label: format!("{}/{}", date.month(), date.day()),
        day: WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seven_consecutive_days_from_reference() {
        let options = date_options(&FixedClock(ymd(2024, 1, 5)));

        assert_eq!(options.len(), 7);
        assert_eq!(options[0].value, "2024-01-05");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "2024-01-05", "2024-01-06", "2024-01-07", "2024-01-08",
                "2024-01-09", "2024-01-10", "2024-01-11",
            ]
        );
    }

    #[test]
    fn labels_are_unpadded_month_and_day() {
        let option = date_option(ymd(2024, 3, 9));
        assert_eq!(option.value, "2024-03-09");
        assert_eq!(option.label, "3/9");
    }

    #[test]
    fn weekday_starts_from_sunday() {
        // 2024-01-07 воскресенье
        assert_eq!(date_option(ymd(2024, 1, 7)).day, "週日");
        assert_eq!(date_option(ymd(2024, 1, 8)).day, "週一");
        assert_eq!(date_option(ymd(2024, 1, 13)).day, "週六");
    }

    #[test]
    fn crosses_month_and_year_boundary() {
        let options = date_options_from(ymd(2023, 12, 29));
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["12/29", "12/30", "12/31", "1/1", "1/2", "1/3", "1/4"]);
        assert_eq!(options[3].value, "2024-01-01");
    }

    #[test]
    fn leap_day_is_included() {
        let options = date_options_from(ymd(2024, 2, 27));
        assert_eq!(options[2].value, "2024-02-29");
        assert_eq!(options[3].value, "2024-03-01");
    }

    #[test]
    fn every_option_is_one_day_after_previous() {
        let options = date_options_from(ymd(2025, 6, 1));
        for pair in options.windows(2) {
            let a = NaiveDate::parse_from_str(&pair[0].value, "%Y-%m-%d").unwrap();
            let b = NaiveDate::parse_from_str(&pair[1].value, "%Y-%m-%d").unwrap();
            assert_eq!(b - a, chrono::Duration::days(1));
        }
    }
}
