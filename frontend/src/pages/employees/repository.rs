use super::utils::new_employee_id;
use crate::store::{AppError, Collection, Employee, StoreClient, StoreError};

fn storage_error(err: StoreError) -> AppError {
    log::error!("Employee storage failed: {err}");
    AppError::storage("従業員情報を保存できませんでした。もう一度お試しください。")
}

#[derive(Clone)]
pub struct EmployeesRepository {
    store: StoreClient,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self {
            store: StoreClient::new(),
        }
    }

    pub fn new_with_store(store: StoreClient) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Employee> {
        self.store.employees()
    }

    fn load_for_update(&self) -> Result<Vec<Employee>, AppError> {
        self.store
            .try_load_all(Collection::Employees)
            .map_err(storage_error)
    }

    /// Appends an active employee and returns the full updated list.
    pub fn add(&self, name: String) -> Result<Vec<Employee>, AppError> {
        let mut employees = self.load_for_update()?;
        let employee = Employee {
            id: new_employee_id(),
            name,
            active: true,
        };
        log::info!("Adding employee {}", employee.id);
        employees.push(employee);
        self.store.save_employees(&employees).map_err(storage_error)?;
        Ok(employees)
    }

    pub fn toggle_active(&self, id: &str) -> Result<Vec<Employee>, AppError> {
        let mut employees = self.load_for_update()?;
        let employee = employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(|| AppError::not_found("従業員が見つかりません"))?;
        employee.active = !employee.active;
        self.store.save_employees(&employees).map_err(storage_error)?;
        Ok(employees)
    }
}
