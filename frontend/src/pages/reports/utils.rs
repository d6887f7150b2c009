use super::types::{ReportRows, ReportType};

pub fn format_minutes(total_minutes: u64) -> String {
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn format_hours(value: f64) -> String {
    format!("{value:.1}")
}

pub fn export_filename(report_type: ReportType, stamp: &str) -> String {
    format!("{}_report_{stamp}.csv", report_type.as_str())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "はい"
    } else {
        "いいえ"
    }
}

/// Spreadsheet apps evaluate cells starting with these characters.
fn guard_formula(value: &str) -> String {
    match value.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{value}"),
        _ => value.to_string(),
    }
}

fn headers(report_type: ReportType) -> &'static [&'static str] {
    match report_type {
        ReportType::Attendance => &[
            "従業員ID",
            "従業員名",
            "出勤日数",
            "遅刻回数",
            "平均勤務時間/日",
            "出勤率",
        ],
        ReportType::Hours => &[
            "日付",
            "従業員ID",
            "従業員名",
            "勤務時間",
            "合計(分)",
            "クライアント",
            "手動入力",
        ],
        ReportType::Performance => &[
            "従業員ID",
            "従業員名",
            "出勤日数",
            "合計時間",
            "平均勤務時間/日",
            "遅刻回数",
            "手動入力回数",
            "クライアント数",
            "スコア",
        ],
    }
}

pub fn report_to_csv(rows: &ReportRows) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    writer.write_record(headers(rows.report_type()))?;

    match rows {
        ReportRows::Attendance(rows) => {
            for row in rows {
                writer.write_record([
                    guard_formula(&row.employee_id),
                    guard_formula(&row.name),
                    row.days_worked.to_string(),
                    row.late_arrivals.to_string(),
                    format_hours(row.avg_hours_per_day),
                    row.attendance_rate_label(),
                ])?;
            }
        }
        ReportRows::Hours(rows) => {
            for row in rows {
                writer.write_record([
                    row.date.format("%Y-%m-%d").to_string(),
                    guard_formula(&row.employee_id),
                    guard_formula(&row.name),
                    row.hours_worked.clone(),
                    row.total_minutes.to_string(),
                    guard_formula(row.client.as_deref().unwrap_or("")),
                    yes_no(row.manual_entry).to_string(),
                ])?;
            }
        }
        ReportRows::Performance(rows) => {
            for row in rows {
                writer.write_record([
                    guard_formula(&row.employee_id),
                    guard_formula(&row.name),
                    row.days_worked.to_string(),
                    format_hours(row.total_hours),
                    format_hours(row.avg_hours_per_day),
                    row.late_arrivals.to_string(),
                    row.manual_entries.to_string(),
                    row.client_count.to_string(),
                    row.performance_score_label(),
                ])?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::reports::types::{AttendanceRow, HoursRow};
    use crate::test_support::fixtures::ymd;

    #[test]
    fn minutes_format_as_hours_and_minutes() {
        assert_eq!(format_minutes(360), "6h 0m");
        assert_eq!(format_minutes(0), "0h 0m");
        assert_eq!(format_minutes(545), "9h 5m");
    }

    #[test]
    fn rounding_keeps_one_decimal() {
        assert_eq!(round_to_tenth(7.25), 7.3);
        assert_eq!(round_to_tenth(8.0), 8.0);
        assert_eq!(format_hours(8.0), "8.0");
    }

    #[test]
    fn filename_carries_type_and_stamp() {
        assert_eq!(
            export_filename(ReportType::Hours, "20240131_0930"),
            "hours_report_20240131_0930.csv"
        );
    }

    #[test]
    fn empty_report_exports_header_only() {
        let csv = report_to_csv(&ReportRows::empty(ReportType::Attendance)).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("\"従業員ID\",\"従業員名\""));
    }

    #[test]
    fn attendance_rows_export_in_order() {
        let rows = ReportRows::Attendance(vec![AttendanceRow {
            employee_id: "EMP001".into(),
            name: "Ana, \"Boss\"".into(),
            days_worked: 1,
            late_arrivals: 0,
            avg_hours_per_day: 8.0,
            attendance_rate: 5,
        }]);
        let csv = report_to_csv(&rows).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines[1],
            "\"EMP001\",\"Ana, \"\"Boss\"\"\",\"1\",\"0\",\"8.0\",\"5%\""
        );
    }

    #[test]
    fn hours_rows_guard_formulas_and_translate_flags() {
        let rows = ReportRows::Hours(vec![HoursRow {
            id: "E1-2024-01-10".into(),
            employee_id: "E1".into(),
            name: "=HYPERLINK()".into(),
            date: ymd(2024, 1, 10),
            total_minutes: 360,
            hours_worked: "6h 0m".into(),
            client: None,
            manual_entry: true,
        }]);
        let csv = report_to_csv(&rows).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines[1],
            "\"2024-01-10\",\"E1\",\"'=HYPERLINK()\",\"6h 0m\",\"360\",\"\",\"はい\""
        );
    }
}
