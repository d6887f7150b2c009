//! Report generation over a flat list of time records.
//!
//! Everything here is pure: callers load records, pick the filters and pass
//! `today` in, so results are deterministic for a given input.

use super::types::{
    AttendanceRow, DateRange, EmployeeFilter, HoursRow, PerformanceRow, ReportFilters, ReportRows,
    ReportType,
};
use super::utils::{format_minutes, round_to_tenth};
use crate::store::{Employee, TimeRecord};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Attendance rate denominator. Fixed regardless of the selected window, so a
/// quarter with 60 worked days reports 300%.
pub const ASSUMED_BUSINESS_DAYS: u32 = 20;
pub const TARGET_DAILY_HOURS: f64 = 8.0;
const LATE_ARRIVAL_PENALTY: f64 = 20.0;
const HOURS_DEVIATION_PENALTY: f64 = 5.0;

pub fn placeholder_name(employee_id: &str) -> String {
    format!("従業員 {employee_id}")
}

struct EmployeeDirectory<'a> {
    names: HashMap<&'a str, &'a str>,
}

impl<'a> EmployeeDirectory<'a> {
    fn new(employees: &'a [Employee]) -> Self {
        Self {
            names: employees
                .iter()
                .map(|e| (e.id.as_str(), e.name.as_str()))
                .collect(),
        }
    }

    fn name_of(&self, employee_id: &str) -> String {
        self.names
            .get(employee_id)
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| placeholder_name(employee_id))
    }
}

pub fn generate_report(
    records: &[TimeRecord],
    filters: &ReportFilters,
    employees: &[Employee],
    today: NaiveDate,
) -> ReportRows {
    let selected = filter_by_employee(
        filter_by_date(records, filters.date_range, today),
        &filters.employee,
    );
    let directory = EmployeeDirectory::new(employees);

    match filters.report_type {
        ReportType::Attendance => ReportRows::Attendance(attendance_report(&selected, &directory)),
        ReportType::Hours => ReportRows::Hours(hours_report(&selected, &directory)),
        ReportType::Performance => {
            ReportRows::Performance(performance_report(&selected, &directory))
        }
    }
}

pub fn filter_by_date(records: &[TimeRecord], range: DateRange, today: NaiveDate) -> Vec<&TimeRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.date, today))
        .collect()
}

pub fn filter_by_employee<'a>(
    records: Vec<&'a TimeRecord>,
    filter: &EmployeeFilter,
) -> Vec<&'a TimeRecord> {
    records
        .into_iter()
        .filter(|record| filter.matches(&record.employee_id))
        .collect()
}

pub fn attendance_rate(days_worked: u32) -> u32 {
    (f64::from(days_worked) / f64::from(ASSUMED_BUSINESS_DAYS) * 100.0).round() as u32
}

/// 100, minus up to 20 for late arrivals and 5 per hour away from the daily
/// target, clamped to 0..=100.
pub fn performance_score(late_arrivals: u32, days_worked: u32, avg_hours_per_day: f64) -> u32 {
    let late_ratio = if days_worked == 0 {
        0.0
    } else {
        f64::from(late_arrivals) / f64::from(days_worked)
    };
    let score = 100.0
        - late_ratio * LATE_ARRIVAL_PENALTY
        - (avg_hours_per_day - TARGET_DAILY_HOURS).abs() * HOURS_DEVIATION_PENALTY;
    if score.is_nan() {
        return 0;
    }
    score.clamp(0.0, 100.0).round() as u32
}

fn average_hours(total_minutes: u64, days: u32) -> f64 {
    if days == 0 {
        return 0.0;
    }
    round_to_tenth(total_minutes as f64 / f64::from(days) / 60.0)
}

fn attendance_report(records: &[&TimeRecord], directory: &EmployeeDirectory) -> Vec<AttendanceRow> {
    let mut by_employee: BTreeMap<&str, Vec<&TimeRecord>> = BTreeMap::new();
    for record in records {
        by_employee
            .entry(record.employee_id.as_str())
            .or_default()
            .push(record);
    }

    by_employee
        .into_iter()
        .filter(|(_, group)| !group.is_empty())
        .map(|(employee_id, group)| {
            let days_worked = group.len() as u32;
            let late_arrivals = group.iter().filter(|r| r.used_entry_tolerance).count() as u32;
            let total_minutes: u64 = group
                .iter()
                .map(|r| u64::from(r.total_work_minutes))
                .sum();
            AttendanceRow {
                employee_id: employee_id.to_string(),
                name: directory.name_of(employee_id),
                days_worked,
                late_arrivals,
                avg_hours_per_day: average_hours(total_minutes, days_worked),
                attendance_rate: attendance_rate(days_worked),
            }
        })
        .collect()
}

struct DayTotals<'a> {
    total_minutes: u64,
    client: Option<&'a str>,
    manual_entry: bool,
}

fn hours_report(records: &[&TimeRecord], directory: &EmployeeDirectory) -> Vec<HoursRow> {
    // Keyed by date first so rows come out in calendar order.
    let mut by_day: BTreeMap<(NaiveDate, &str), DayTotals> = BTreeMap::new();
    for record in records {
        let totals = by_day
            .entry((record.date, record.employee_id.as_str()))
            .or_insert_with(|| DayTotals {
                total_minutes: 0,
                client: record.client_label.as_deref(),
                manual_entry: false,
            });
        totals.total_minutes += u64::from(record.total_work_minutes);
        totals.manual_entry |= record.manual_entry;
    }

    by_day
        .into_iter()
        .map(|((date, employee_id), totals)| HoursRow {
            id: format!("{employee_id}-{date}"),
            employee_id: employee_id.to_string(),
            name: directory.name_of(employee_id),
            date,
            total_minutes: totals.total_minutes,
            hours_worked: format_minutes(totals.total_minutes),
            client: totals.client.map(str::to_string),
            manual_entry: totals.manual_entry,
        })
        .collect()
}

#[derive(Default)]
struct EmployeeTotals<'a> {
    total_minutes: u64,
    days: BTreeSet<NaiveDate>,
    late_arrivals: u32,
    manual_entries: u32,
    clients: BTreeSet<&'a str>,
}

fn performance_report(
    records: &[&TimeRecord],
    directory: &EmployeeDirectory,
) -> Vec<PerformanceRow> {
    let mut by_employee: BTreeMap<&str, EmployeeTotals> = BTreeMap::new();
    for record in records {
        let totals = by_employee
            .entry(record.employee_id.as_str())
            .or_default();
        totals.total_minutes += u64::from(record.total_work_minutes);
        totals.days.insert(record.date);
        if record.used_entry_tolerance {
            totals.late_arrivals += 1;
        }
        if record.manual_entry {
            totals.manual_entries += 1;
        }
        if let Some(client) = record
            .client_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
        {
            totals.clients.insert(client);
        }
    }

    let mut rows: Vec<PerformanceRow> = by_employee
        .into_iter()
        .filter(|(_, totals)| !totals.days.is_empty())
        .map(|(employee_id, totals)| {
            let days_worked = totals.days.len() as u32;
            let avg_hours_per_day = average_hours(totals.total_minutes, days_worked);
            PerformanceRow {
                employee_id: employee_id.to_string(),
                name: directory.name_of(employee_id),
                days_worked,
                total_hours: round_to_tenth(totals.total_minutes as f64 / 60.0),
                avg_hours_per_day,
                late_arrivals: totals.late_arrivals,
                manual_entries: totals.manual_entries,
                client_count: totals.clients.len() as u32,
                performance_score: performance_score(
                    totals.late_arrivals,
                    days_worked,
                    avg_hours_per_day,
                ),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.performance_score
            .cmp(&a.performance_score)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });
    rows
}
