pub mod clients;
pub mod dashboard;
pub mod employees;
pub mod home;
pub mod login;
pub mod reports;
