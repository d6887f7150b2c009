use leptos::*;
use leptos_router::*;

mod components;
pub mod config;
mod pages;
pub mod state;
pub mod store;
pub mod utils;

#[cfg(test)]
mod test_support;

use components::guard::{RequireAdmin, RequireAuth};
use pages::{
    clients::{AddClientPage, ClientsPage, EditClientPage},
    dashboard::DashboardPage,
    employees::EmployeesPage,
    home::HomePage,
    login::LoginPage,
    reports::ReportsPage,
};
use state::auth::AuthProvider;
use store::StoreClient;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Time Tracker frontend (wasm)");

    // The storage prefix comes from the runtime config, so the store must not be
    // touched before it resolves.
    leptos::spawn_local(async move {
        let cfg = config::init().await;
        log::info!(
            "Runtime config initialized (prefix: {}, report delay: {} ms)",
            cfg.storage_prefix,
            cfg.report_delay_ms
        );
        mount_to_body(App);
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(StoreClient::new());

    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/reports" view=ProtectedReports/>
                    <Route path="/admin/employees" view=ProtectedEmployees/>
                    <Route path="/admin/clients" view=ProtectedClients/>
                    <Route path="/admin/clients/add-client" view=ProtectedAddClient/>
                    <Route path="/admin/clients/edit-client" view=ProtectedEditClient/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RequireAuth><ReportsPage/></RequireAuth> }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <RequireAdmin><EmployeesPage/></RequireAdmin> }
}

#[component]
fn ProtectedClients() -> impl IntoView {
    view! { <RequireAdmin><ClientsPage/></RequireAdmin> }
}

#[component]
fn ProtectedAddClient() -> impl IntoView {
    view! { <RequireAdmin><AddClientPage/></RequireAdmin> }
}

#[component]
fn ProtectedEditClient() -> impl IntoView {
    view! { <RequireAdmin><EditClientPage/></RequireAdmin> }
}
