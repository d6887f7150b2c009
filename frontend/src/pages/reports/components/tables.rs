use crate::components::empty_state::EmptyState;
use crate::pages::reports::{
    types::{AttendanceRow, HoursRow, PerformanceRow, ReportRows},
    utils::format_hours,
};
use leptos::*;

#[component]
fn HeaderCell(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
            {label}
        </th>
    }
}

#[component]
fn Cell(children: Children) -> impl IntoView {
    view! {
        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{children()}</td>
    }
}

fn score_class(score: u32) -> &'static str {
    match score {
        80.. => "text-green-700",
        60..=79 => "text-amber-600",
        _ => "text-red-600",
    }
}

#[component]
pub fn AttendanceTable(rows: Vec<AttendanceRow>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-gray-200">
            <thead class="bg-gray-50">
                <tr>
                    <HeaderCell label="従業員" />
                    <HeaderCell label="出勤日数" />
                    <HeaderCell label="遅刻回数" />
                    <HeaderCell label="平均勤務時間/日" />
                    <HeaderCell label="出勤率" />
                </tr>
            </thead>
            <tbody class="bg-white divide-y divide-gray-200">
                {rows
                    .into_iter()
                    .map(|row| {
                        let rate = row.attendance_rate_label();
                        view! {
                            <tr>
                                <Cell>{row.name}</Cell>
                                <Cell>{row.days_worked}</Cell>
                                <Cell>{row.late_arrivals}</Cell>
                                <Cell>{format!("{}h", format_hours(row.avg_hours_per_day))}</Cell>
                                <Cell>{rate}</Cell>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn HoursTable(rows: Vec<HoursRow>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-gray-200">
            <thead class="bg-gray-50">
                <tr>
                    <HeaderCell label="日付" />
                    <HeaderCell label="従業員" />
                    <HeaderCell label="勤務時間" />
                    <HeaderCell label="クライアント" />
                    <HeaderCell label="入力" />
                </tr>
            </thead>
            <tbody class="bg-white divide-y divide-gray-200">
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <Cell>{row.date.format("%Y-%m-%d").to_string()}</Cell>
                                <Cell>{row.name}</Cell>
                                <Cell>{row.hours_worked}</Cell>
                                <Cell>{row.client.unwrap_or_else(|| "-".into())}</Cell>
                                <Cell>{if row.manual_entry { "手動" } else { "自動" }}</Cell>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn PerformanceTable(rows: Vec<PerformanceRow>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-gray-200">
            <thead class="bg-gray-50">
                <tr>
                    <HeaderCell label="従業員" />
                    <HeaderCell label="出勤日数" />
                    <HeaderCell label="合計時間" />
                    <HeaderCell label="平均勤務時間/日" />
                    <HeaderCell label="遅刻回数" />
                    <HeaderCell label="手動入力" />
                    <HeaderCell label="クライアント数" />
                    <HeaderCell label="スコア" />
                </tr>
            </thead>
            <tbody class="bg-white divide-y divide-gray-200">
                {rows
                    .into_iter()
                    .map(|row| {
                        let score = row.performance_score_label();
                        let class = score_class(row.performance_score);
                        view! {
                            <tr>
                                <Cell>{row.name}</Cell>
                                <Cell>{row.days_worked}</Cell>
                                <Cell>{format!("{}h", format_hours(row.total_hours))}</Cell>
                                <Cell>{format!("{}h", format_hours(row.avg_hours_per_day))}</Cell>
                                <Cell>{row.late_arrivals}</Cell>
                                <Cell>{row.manual_entries}</Cell>
                                <Cell>{row.client_count}</Cell>
                                <Cell><span class=format!("font-semibold {class}")>{score}</span></Cell>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn ReportTable(rows: ReportRows) -> impl IntoView {
    if rows.is_empty() {
        return view! {
            <EmptyState
                title="該当するデータがありません"
                description="期間や従業員の条件を変更して再度生成してください。"
            />
        }
        .into_view();
    }
    let table = match rows {
        ReportRows::Attendance(rows) => view! { <AttendanceTable rows=rows /> }.into_view(),
        ReportRows::Hours(rows) => view! { <HoursTable rows=rows /> }.into_view(),
        ReportRows::Performance(rows) => view! { <PerformanceTable rows=rows /> }.into_view(),
    };
    view! { <div class="overflow-x-auto">{table}</div> }.into_view()
}
