#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod fixtures;

pub mod helpers {
    use crate::state::auth::SessionSnapshot;
    use crate::store::{Principal, Role, StoreClient};
    use leptos::*;

    pub fn admin_principal() -> Principal {
        Principal {
            id: "USR-admin".into(),
            name: "Admin User".into(),
            role: Role::Admin,
        }
    }

    pub fn employee_principal() -> Principal {
        Principal {
            id: "USR-employee".into(),
            name: "Regular User".into(),
            role: Role::Employee,
        }
    }

    pub fn provide_session(
        resolved: bool,
        principal: Option<Principal>,
    ) -> (ReadSignal<SessionSnapshot>, WriteSignal<SessionSnapshot>) {
        let (session, set_session) = create_signal(SessionSnapshot {
            resolved,
            principal,
        });
        provide_context((session, set_session));
        (session, set_session)
    }

    pub fn provide_store(store: StoreClient) -> StoreClient {
        provide_context(store.clone());
        store
    }
}
