use super::{
    components::{filters::ReportFilterForm, tables::ReportTable},
    view_model::{use_reports_view_model, ReportsViewModel},
};
use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    layout::Layout,
};
use leptos::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <Layout>
            <ReportsPanel />
        </Layout>
    }
}

#[component]
fn ReportsPanel() -> impl IntoView {
    let vm = use_reports_view_model();
    let generating = vm.generate_action.pending();
    let on_generate = Callback::new(move |_| vm.generate());

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{"レポート"}</h1>
            <ReportFilterForm
                report_type=vm.report_type
                date_range=vm.date_range
                employee=vm.employee
                employees=vm.employees
                generating=generating
                on_generate=on_generate
            />
            <InlineErrorMessage error={vm.error.into()} />
            <ReportResults vm=vm />
        </div>
    }
}

#[component]
fn ReportResults(vm: ReportsViewModel) -> impl IntoView {
    let title = move || {
        vm.report
            .get()
            .map(|rows| rows.report_type().title())
            .unwrap_or_default()
    };

    view! {
        <Show when=move || vm.report.with(Option::is_some)>
            <div class="bg-white shadow rounded-lg p-6">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-lg font-medium text-gray-900">{title}</h2>
                    <Button
                        variant=ButtonVariant::Secondary
                        class="px-3 py-1.5"
                        on_click=Callback::new(move |_| vm.export_csv())
                    >
                        {"CSVをエクスポート"}
                    </Button>
                </div>
                {move || vm.report.get().map(|rows| view! { <ReportTable rows=rows /> })}
            </div>
        </Show>
    }
}
