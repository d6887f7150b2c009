//! Sample data for tests. Never reachable from production code.

use crate::store::{Employee, TimeRecord};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub const SAMPLE_EMPLOYEE_IDS: [&str; 5] = ["EMP001", "EMP002", "EMP003", "EMP004", "EMP005"];
pub const SAMPLE_CLIENTS: [&str; 4] = ["Cliente A", "Cliente B", "Cliente C", "Cliente D"];

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn sample_employees() -> Vec<Employee> {
    SAMPLE_EMPLOYEE_IDS
        .iter()
        .enumerate()
        .map(|(idx, id)| Employee {
            id: (*id).to_string(),
            name: format!("Sample Employee {}", idx + 1),
            active: true,
        })
        .collect()
}

/// Weekday records between `from` and `to` (inclusive) for every sample
/// employee: ~80% attendance, entry 08:00-09:59, exit 17:00-19:59.
pub fn sample_time_records(seed: u64, from: NaiveDate, to: NaiveDate) -> Vec<TimeRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();
    let mut day = from;

    while day <= to {
        if !is_weekend(day) {
            for employee_id in SAMPLE_EMPLOYEE_IDS {
                if !rng.gen_bool(0.8) {
                    continue;
                }
                let entry_time = format!("{:02}:{:02}", rng.gen_range(8..10), rng.gen_range(0..60));
                let exit_time =
                    format!("{:02}:{:02}", rng.gen_range(17..20), rng.gen_range(0..60));
                let client = SAMPLE_CLIENTS[rng.gen_range(0..SAMPLE_CLIENTS.len())];
                records.push(TimeRecord {
                    id: format!("TR{}-{employee_id}", day.format("%Y%m%d")),
                    employee_id: employee_id.to_string(),
                    date: day,
                    total_work_minutes: TimeRecord::minutes_between(&entry_time, &exit_time),
                    entry_time,
                    exit_time,
                    client_label: Some(client.to_string()),
                    used_entry_tolerance: rng.gen_bool(0.2),
                    manual_entry: rng.gen_bool(0.3),
                });
            }
        }
        day = match day.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    records
}

pub fn record(employee_id: &str, date: NaiveDate, minutes: u32) -> TimeRecord {
    TimeRecord {
        id: format!("TR-{employee_id}-{date}-{minutes}"),
        employee_id: employee_id.to_string(),
        date,
        entry_time: "09:00".into(),
        exit_time: "17:00".into(),
        client_label: None,
        total_work_minutes: minutes,
        used_entry_tolerance: false,
        manual_entry: false,
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekends_are_detected() {
        assert!(is_weekend(ymd(2024, 1, 6)));
        assert!(is_weekend(ymd(2024, 1, 7)));
        assert!(!is_weekend(ymd(2024, 1, 8)));
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        let a = sample_time_records(7, ymd(2024, 1, 1), ymd(2024, 1, 31));
        let b = sample_time_records(7, ymd(2024, 1, 1), ymd(2024, 1, 31));
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn generator_skips_weekends_and_stays_in_range() {
        let from = ymd(2024, 1, 1);
        let to = ymd(2024, 1, 14);
        let records = sample_time_records(42, from, to);
        assert!(records.iter().all(|r| !is_weekend(r.date)));
        assert!(records.iter().all(|r| r.date >= from && r.date <= to));
        // 8:00-9:59 in, 17:00-19:59 out
        assert!(records
            .iter()
            .all(|r| (421..=719).contains(&r.total_work_minutes)));
    }
}
