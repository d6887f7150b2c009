use crate::pages::reports::types::{DateRange, EmployeeFilter, ReportType};
use crate::store::Employee;
use leptos::*;

const SELECT_CLASS: &str =
    "w-full border rounded px-2 py-2 bg-white text-sm text-gray-900 disabled:opacity-50";

#[component]
pub fn ReportFilterForm(
    report_type: RwSignal<ReportType>,
    date_range: RwSignal<DateRange>,
    employee: RwSignal<EmployeeFilter>,
    employees: RwSignal<Vec<Employee>>,
    #[prop(into)] generating: Signal<bool>,
    on_generate: Callback<()>,
) -> impl IntoView {
    let on_type_change = move |ev| {
        if let Some(value) = ReportType::from_value(&event_target_value(&ev)) {
            report_type.set(value);
        }
    };
    let on_range_change = move |ev| {
        if let Some(value) = DateRange::from_value(&event_target_value(&ev)) {
            date_range.set(value);
        }
    };
    let on_employee_change =
        move |ev| employee.set(EmployeeFilter::from_value(&event_target_value(&ev)));

    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-gray-900 mb-4">{"レポート作成"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-4">
                <div>
                    <label for="report-type" class="block text-sm text-gray-700 mb-1">{"レポート種別"}</label>
                    <select
                        id="report-type"
                        class=SELECT_CLASS
                        on:change=on_type_change
                        prop:value=move || report_type.get().as_str()
                    >
                        {ReportType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label for="date-range" class="block text-sm text-gray-700 mb-1">{"期間"}</label>
                    <select
                        id="date-range"
                        class=SELECT_CLASS
                        on:change=on_range_change
                        prop:value=move || date_range.get().as_str()
                    >
                        {DateRange::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label for="employee" class="block text-sm text-gray-700 mb-1">{"従業員"}</label>
                    <select
                        id="employee"
                        class=SELECT_CLASS
                        on:change=on_employee_change
                        prop:value=move || employee.get().as_value().to_string()
                    >
                        <option value=EmployeeFilter::ALL_VALUE>{"全従業員"}</option>
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .map(|e| view! { <option value=e.id.clone()>{e.name.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>
            <button
                class="px-4 py-2 bg-indigo-600 text-white rounded disabled:opacity-50"
                on:click=move |_| on_generate.call(())
                disabled=move || generating.get()
            >
                <span class="inline-flex items-center gap-2">
                    <Show when=move || generating.get()>
                        <span class="h-4 w-4 animate-spin rounded-full border-2 border-white/70 border-t-transparent"></span>
                    </Show>
                    {move || if generating.get() { "生成中..." } else { "レポートを生成" }}
                </span>
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::sample_employees;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_lists_types_ranges_and_employees() {
        let html = render_to_string(move || {
            view! {
                <ReportFilterForm
                    report_type=create_rw_signal(ReportType::Hours)
                    date_range=create_rw_signal(DateRange::Quarter)
                    employee=create_rw_signal(EmployeeFilter::All)
                    employees=create_rw_signal(sample_employees())
                    generating=Signal::derive(|| false)
                    on_generate=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("パフォーマンス"));
        assert!(html.contains("過去3か月"));
        assert!(html.contains("全従業員"));
        assert!(html.contains("Sample Employee 5"));
        assert!(html.contains("レポートを生成"));
    }

    #[test]
    fn button_shows_progress_while_generating() {
        let html = render_to_string(move || {
            view! {
                <ReportFilterForm
                    report_type=create_rw_signal(ReportType::Attendance)
                    date_range=create_rw_signal(DateRange::Month)
                    employee=create_rw_signal(EmployeeFilter::All)
                    employees=create_rw_signal(Vec::new())
                    generating=Signal::derive(|| true)
                    on_generate=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("生成中..."));
    }
}
