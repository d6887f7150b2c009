use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Attendance,
    Hours,
    Performance,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [
        ReportType::Attendance,
        ReportType::Hours,
        ReportType::Performance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::Attendance => "attendance",
            ReportType::Hours => "hours",
            ReportType::Performance => "performance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportType::Attendance => "出勤状況",
            ReportType::Hours => "勤務時間",
            ReportType::Performance => "パフォーマンス",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportType::Attendance => "出勤状況レポート",
            ReportType::Hours => "勤務時間レポート",
            ReportType::Performance => "パフォーマンスレポート",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Report window, always ending today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::Week,
        DateRange::Month,
        DateRange::Quarter,
        DateRange::Year,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Quarter => "quarter",
            DateRange::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Week => "過去1週間",
            DateRange::Month => "過去1か月",
            DateRange::Quarter => "過去3か月",
            DateRange::Year => "過去1年",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }

    /// First day of the window. Month arithmetic clamps to the end of shorter
    /// months (Mar 31 minus one month is Feb 29/28).
    pub fn window_start(self, today: NaiveDate) -> NaiveDate {
        let start = match self {
            DateRange::Week => today.checked_sub_days(Days::new(7)),
            DateRange::Month => today.checked_sub_months(Months::new(1)),
            DateRange::Quarter => today.checked_sub_months(Months::new(3)),
            DateRange::Year => today.checked_sub_months(Months::new(12)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.window_start(today) && date <= today
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum EmployeeFilter {
    #[default]
    All,
    Only(String),
}

impl EmployeeFilter {
    pub const ALL_VALUE: &'static str = "all";

    pub fn from_value(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == Self::ALL_VALUE {
            EmployeeFilter::All
        } else {
            EmployeeFilter::Only(trimmed.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            EmployeeFilter::All => Self::ALL_VALUE,
            EmployeeFilter::Only(id) => id,
        }
    }

    pub fn matches(&self, employee_id: &str) -> bool {
        match self {
            EmployeeFilter::All => true,
            EmployeeFilter::Only(id) => id == employee_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    pub date_range: DateRange,
    pub employee: EmployeeFilter,
    pub report_type: ReportType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRow {
    pub employee_id: String,
    pub name: String,
    pub days_worked: u32,
    pub late_arrivals: u32,
    pub avg_hours_per_day: f64,
    /// Whole percent; may exceed 100 for windows longer than a month.
    pub attendance_rate: u32,
}

impl AttendanceRow {
    pub fn attendance_rate_label(&self) -> String {
        format!("{}%", self.attendance_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursRow {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub total_minutes: u64,
    pub hours_worked: String,
    pub client: Option<String>,
    pub manual_entry: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRow {
    pub employee_id: String,
    pub name: String,
    pub days_worked: u32,
    pub total_hours: f64,
    pub avg_hours_per_day: f64,
    pub late_arrivals: u32,
    pub manual_entries: u32,
    pub client_count: u32,
    pub performance_score: u32,
}

impl PerformanceRow {
    pub fn performance_score_label(&self) -> String {
        format!("{}%", self.performance_score)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportRows {
    Attendance(Vec<AttendanceRow>),
    Hours(Vec<HoursRow>),
    Performance(Vec<PerformanceRow>),
}

impl ReportRows {
    pub fn empty(report_type: ReportType) -> Self {
        match report_type {
            ReportType::Attendance => ReportRows::Attendance(Vec::new()),
            ReportType::Hours => ReportRows::Hours(Vec::new()),
            ReportType::Performance => ReportRows::Performance(Vec::new()),
        }
    }

    pub fn report_type(&self) -> ReportType {
        match self {
            ReportRows::Attendance(_) => ReportType::Attendance,
            ReportRows::Hours(_) => ReportType::Hours,
            ReportRows::Performance(_) => ReportType::Performance,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ReportRows::Attendance(rows) => rows.len(),
            ReportRows::Hours(rows) => rows.len(),
            ReportRows::Performance(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures::ymd;

    #[test]
    fn window_starts_follow_calendar_arithmetic() {
        let today = ymd(2024, 3, 31);
        assert_eq!(DateRange::Week.window_start(today), ymd(2024, 3, 24));
        assert_eq!(DateRange::Month.window_start(today), ymd(2024, 2, 29));
        assert_eq!(DateRange::Quarter.window_start(today), ymd(2023, 12, 31));
        assert_eq!(DateRange::Year.window_start(today), ymd(2023, 3, 31));
    }

    #[test]
    fn window_includes_both_ends_and_excludes_future() {
        let today = ymd(2024, 1, 15);
        assert!(DateRange::Week.contains(ymd(2024, 1, 8), today));
        assert!(DateRange::Week.contains(today, today));
        assert!(!DateRange::Week.contains(ymd(2024, 1, 7), today));
        assert!(!DateRange::Week.contains(ymd(2024, 1, 16), today));
    }

    #[test]
    fn selector_values_parse() {
        assert_eq!(ReportType::from_value("hours"), Some(ReportType::Hours));
        assert_eq!(ReportType::from_value("payroll"), None);
        assert_eq!(DateRange::from_value("quarter"), Some(DateRange::Quarter));
        assert_eq!(EmployeeFilter::from_value("all"), EmployeeFilter::All);
        assert_eq!(
            EmployeeFilter::from_value("EMP001"),
            EmployeeFilter::Only("EMP001".into())
        );
        assert_eq!(EmployeeFilter::Only("EMP001".into()).as_value(), "EMP001");
    }

    #[test]
    fn empty_rows_keep_their_type() {
        for report_type in ReportType::ALL {
            let rows = ReportRows::empty(report_type);
            assert!(rows.is_empty());
            assert_eq!(rows.report_type(), report_type);
        }
    }
}
