use crate::store::{Principal, Role, StoreClient, StoreError};
use leptos::*;

pub const LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_AUTHENTICATED_ROUTE: &str = "/dashboard";

type AuthContext = (ReadSignal<SessionSnapshot>, WriteSignal<SessionSnapshot>);

/// What the ambient authentication context knows right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub resolved: bool,
    pub principal: Option<Principal>,
}

impl SessionSnapshot {
    pub fn resolved(principal: Option<Principal>) -> Self {
        Self {
            resolved: true,
            principal,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequiredRole {
    #[default]
    Any,
    Only(Role),
}

impl RequiredRole {
    fn admits(self, role: Role) -> bool {
        match self {
            RequiredRole::Any => true,
            RequiredRole::Only(required) => required == role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unresolved,
    Unauthenticated,
    Unauthorized(Principal),
    Authorized(Principal),
}

impl AuthState {
    pub fn evaluate(session: &SessionSnapshot, required: RequiredRole) -> Self {
        if !session.resolved {
            return AuthState::Unresolved;
        }
        match &session.principal {
            None => AuthState::Unauthenticated,
            Some(principal) if required.admits(principal.role) => {
                AuthState::Authorized(principal.clone())
            }
            Some(principal) => AuthState::Unauthorized(principal.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Pending,
    Authorized,
    Redirect(&'static str),
}

pub fn check_authorization(session: &SessionSnapshot, required: RequiredRole) -> Authorization {
    match AuthState::evaluate(session, required) {
        AuthState::Unresolved => Authorization::Pending,
        AuthState::Unauthenticated => Authorization::Redirect(LOGIN_ROUTE),
        AuthState::Unauthorized(_) => Authorization::Redirect(DEFAULT_AUTHENTICATED_ROUTE),
        AuthState::Authorized(_) => Authorization::Authorized,
    }
}

fn create_auth_context() -> AuthContext {
    let (session, set_session) = create_signal(SessionSnapshot::default());
    let store = use_context::<StoreClient>().unwrap_or_else(StoreClient::new);

    // Effects only run once mounted in the browser, so the gate always sees an
    // unresolved session first.
    create_effect(move |_| {
        let principal = store.session();
        set_session.set(SessionSnapshot::resolved(principal));
    });

    (session, set_session)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(SessionSnapshot::default()))
}

pub fn login(
    store: &StoreClient,
    principal: Principal,
    set_session: WriteSignal<SessionSnapshot>,
) -> Result<(), StoreError> {
    store.save_session(&principal)?;
    log::info!("Signed in as {} ({})", principal.name, principal.role.as_str());
    set_session.set(SessionSnapshot::resolved(Some(principal)));
    Ok(())
}

pub fn logout(store: &StoreClient, set_session: WriteSignal<SessionSnapshot>) {
    if let Err(err) = store.clear_session() {
        log::error!("Failed to clear stored session: {err}");
    }
    set_session.set(SessionSnapshot::resolved(None));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_principal, employee_principal};
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn unresolved_session_waits_without_redirect() {
        let session = SessionSnapshot::default();
        assert_eq!(
            AuthState::evaluate(&session, RequiredRole::Any),
            AuthState::Unresolved
        );
        assert_eq!(
            check_authorization(&session, RequiredRole::Only(Role::Admin)),
            Authorization::Pending
        );
    }

    #[test]
    fn unauthenticated_session_redirects_to_login() {
        let session = SessionSnapshot::resolved(None);
        assert_eq!(
            check_authorization(&session, RequiredRole::Any),
            Authorization::Redirect(LOGIN_ROUTE)
        );
        assert_eq!(
            check_authorization(&session, RequiredRole::Only(Role::Admin)),
            Authorization::Redirect("/login")
        );
    }

    #[test]
    fn role_mismatch_redirects_to_dashboard() {
        let session = SessionSnapshot::resolved(Some(employee_principal()));
        assert!(matches!(
            AuthState::evaluate(&session, RequiredRole::Only(Role::Admin)),
            AuthState::Unauthorized(_)
        ));
        assert_eq!(
            check_authorization(&session, RequiredRole::Only(Role::Admin)),
            Authorization::Redirect("/dashboard")
        );
    }

    #[test]
    fn matching_role_or_any_is_authorized() {
        let admin = SessionSnapshot::resolved(Some(admin_principal()));
        let employee = SessionSnapshot::resolved(Some(employee_principal()));
        assert_eq!(
            check_authorization(&admin, RequiredRole::Only(Role::Admin)),
            Authorization::Authorized
        );
        assert_eq!(
            check_authorization(&employee, RequiredRole::Any),
            Authorization::Authorized
        );
        assert_eq!(
            check_authorization(&employee, RequiredRole::Only(Role::Employee)),
            Authorization::Authorized
        );
    }

    #[test]
    fn use_auth_returns_unresolved_default_without_context() {
        with_runtime(|| {
            let (session, _) = use_auth();
            let snapshot = session.get_untracked();
            assert!(!snapshot.resolved);
            assert!(!snapshot.is_authenticated());
        });
    }

    #[test]
    fn login_and_logout_update_store_and_session() {
        with_runtime(|| {
            let store = StoreClient::in_memory();
            let (session, set_session) = create_signal(SessionSnapshot::default());

            login(&store, admin_principal(), set_session).unwrap();
            let snapshot = session.get_untracked();
            assert!(snapshot.resolved);
            assert_eq!(snapshot.principal, Some(admin_principal()));
            assert_eq!(store.session(), Some(admin_principal()));

            logout(&store, set_session);
            let snapshot = session.get_untracked();
            assert!(snapshot.resolved);
            assert!(snapshot.principal.is_none());
            assert!(store.session().is_none());
        });
    }
}
