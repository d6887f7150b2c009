use super::{
    aggregate::generate_report,
    types::{ReportFilters, ReportRows},
};
use crate::store::{Employee, StoreClient, TimeRecord};
use chrono::NaiveDate;

#[derive(Clone)]
pub struct ReportsRepository {
    store: StoreClient,
}

impl Default for ReportsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportsRepository {
    pub fn new() -> Self {
        Self {
            store: StoreClient::new(),
        }
    }

    pub fn new_with_store(store: StoreClient) -> Self {
        Self { store }
    }

    pub fn load_employees(&self) -> Vec<Employee> {
        self.store.employees()
    }

    pub fn load_time_records(&self) -> Vec<TimeRecord> {
        self.store.time_records()
    }

    /// Reads both collections fresh on every call so newly saved records show
    /// up without a reload.
    pub fn generate(&self, filters: &ReportFilters, today: NaiveDate) -> ReportRows {
        let records = self.load_time_records();
        let employees = self.load_employees();
        log::debug!(
            "Generating {} report over {} records",
            filters.report_type.as_str(),
            records.len()
        );
        generate_report(&records, filters, &employees, today)
    }
}
