use super::{
    repository::ReportsRepository,
    types::{DateRange, EmployeeFilter, ReportFilters, ReportRows, ReportType},
    utils::{export_filename, report_to_csv},
};
use crate::{
    config,
    store::{AppError, Employee, StoreClient},
    utils::{
        time::{file_stamp, now_in_app_tz, today_in_app_tz},
        trigger_csv_download,
    },
};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub date_range: RwSignal<DateRange>,
    pub employee: RwSignal<EmployeeFilter>,
    pub report_type: RwSignal<ReportType>,
    pub employees: RwSignal<Vec<Employee>>,
    pub report: RwSignal<Option<ReportRows>>,
    pub error: RwSignal<Option<AppError>>,
    pub generate_action: Action<ReportFilters, ReportRows>,
}

impl ReportsViewModel {
    pub fn filters_untracked(&self) -> ReportFilters {
        ReportFilters {
            date_range: self.date_range.get_untracked(),
            employee: self.employee.get_untracked(),
            report_type: self.report_type.get_untracked(),
        }
    }

    pub fn generate(&self) {
        self.error.set(None);
        self.generate_action.dispatch(self.filters_untracked());
    }

    pub fn export_csv(&self) {
        let Some(rows) = self.report.get_untracked() else {
            self.error
                .set(Some(AppError::validation("先にレポートを生成してください。")));
            return;
        };
        match prepare_export(&rows, &file_stamp(now_in_app_tz())) {
            Ok((filename, csv)) => {
                if let Err(err) = trigger_csv_download(&filename, &csv) {
                    log::error!("CSV download failed: {err}");
                    self.error.set(Some(AppError::unknown(
                        "CSVファイルのダウンロードに失敗しました。",
                    )));
                } else {
                    log::info!("Exported {} rows to {filename}", rows.len());
                }
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn prepare_export(rows: &ReportRows, stamp: &str) -> Result<(String, String), AppError> {
    let csv = report_to_csv(rows).map_err(|err| {
        log::error!("Failed to render report CSV: {err}");
        AppError::unknown("CSVの作成に失敗しました。")
    })?;
    Ok((export_filename(rows.report_type(), stamp), csv))
}

/// Drops rows generated for a report type that is no longer selected, so a
/// slow generation cannot land under a different selector value.
pub fn rows_for_selection(rows: ReportRows, selected: ReportType) -> Option<ReportRows> {
    if rows.report_type() == selected {
        Some(rows)
    } else {
        log::debug!(
            "Discarding {:?} rows; {:?} is selected",
            rows.report_type(),
            selected
        );
        None
    }
}

pub fn use_reports_view_model() -> ReportsViewModel {
    let store = use_context::<StoreClient>().unwrap_or_else(StoreClient::new);
    let repo = ReportsRepository::new_with_store(store);

    let date_range = create_rw_signal(DateRange::default());
    let employee = create_rw_signal(EmployeeFilter::All);
    let report_type = create_rw_signal(ReportType::default());
    let employees = create_rw_signal(repo.load_employees());
    let report = create_rw_signal(None::<ReportRows>);
    let error = create_rw_signal(None::<AppError>);

    let repo_generate = repo.clone();
    let generate_action = create_action(move |filters: &ReportFilters| {
        let rows = repo_generate.generate(filters, today_in_app_tz());
        let delay = config::report_delay_ms();
        async move {
            if delay > 0 {
                TimeoutFuture::new(delay).await;
            }
            rows
        }
    });

    create_effect(move |_| {
        if let Some(rows) = generate_action.value().get() {
            if let Some(rows) = rows_for_selection(rows, report_type.get_untracked()) {
                report.set(Some(rows));
            }
        }
    });

    // A new report type invalidates rows rendered for the previous one.
    create_effect(move |_| {
        let selected = report_type.get();
        if report
            .get_untracked()
            .is_some_and(|rows| rows.report_type() != selected)
        {
            report.set(None);
        }
    });

    ReportsViewModel {
        date_range,
        employee,
        report_type,
        employees,
        report,
        error,
        generate_action,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures::sample_employees;
    use crate::test_support::helpers::provide_store;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_loads_employees_from_context_store() {
        with_runtime(|| {
            let store = provide_store(StoreClient::in_memory());
            store.save_employees(&sample_employees()).unwrap();
            let vm = use_reports_view_model();
            assert_eq!(vm.employees.get_untracked().len(), 5);
            assert!(vm.report.get_untracked().is_none());
            assert_eq!(vm.filters_untracked(), ReportFilters::default());
        });
    }

    #[test]
    fn exporting_before_generating_reports_an_error() {
        with_runtime(|| {
            provide_store(StoreClient::in_memory());
            let vm = use_reports_view_model();
            vm.export_csv();
            let err = vm.error.get_untracked().unwrap();
            assert_eq!(err.code, "VALIDATION_ERROR");
        });
    }
}
