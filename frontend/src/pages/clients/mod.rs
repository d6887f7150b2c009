pub mod add;
pub mod edit;
pub mod form;
pub mod list;
pub mod repository;
pub mod utils;

pub use add::AddClientPage;
pub use edit::EditClientPage;
pub use list::ClientsPage;

pub const CLIENTS_ROUTE: &str = "/admin/clients";
pub const ADD_CLIENT_ROUTE: &str = "/admin/clients/add-client";

pub fn edit_client_href(id: &str) -> String {
    format!("/admin/clients/edit-client?id={id}")
}
