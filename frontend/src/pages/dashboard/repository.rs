use crate::store::{Client, Employee, StoreClient, TimeRecord};
use chrono::NaiveDate;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub total_clients: usize,
    pub active_clients: usize,
    pub total_records: usize,
    pub today_records: usize,
}

fn ratio(part: usize, total: usize) -> String {
    format!("{part} / {total}")
}

impl DashboardStats {
    pub fn employees_label(&self) -> String {
        ratio(self.active_employees, self.total_employees)
    }

    pub fn clients_label(&self) -> String {
        ratio(self.active_clients, self.total_clients)
    }

    pub fn records_label(&self) -> String {
        ratio(self.today_records, self.total_records)
    }
}

pub fn build_stats(
    employees: &[Employee],
    clients: &[Client],
    records: &[TimeRecord],
    today: NaiveDate,
) -> DashboardStats {
    DashboardStats {
        total_employees: employees.len(),
        active_employees: employees.iter().filter(|e| e.active).count(),
        total_clients: clients.len(),
        active_clients: clients.iter().filter(|c| c.active).count(),
        total_records: records.len(),
        today_records: records.iter().filter(|r| r.date == today).count(),
    }
}

#[derive(Clone)]
pub struct DashboardRepository {
    store: StoreClient,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self {
            store: StoreClient::new(),
        }
    }

    pub fn new_with_store(store: StoreClient) -> Self {
        Self { store }
    }

    pub fn load_stats(&self, today: NaiveDate) -> DashboardStats {
        build_stats(
            &self.store.employees(),
            &self.store.clients(),
            &self.store.time_records(),
            today,
        )
    }
}
