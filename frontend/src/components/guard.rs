use crate::{
    components::layout::LoadingSpinner,
    state::auth::{check_authorization, use_auth, Authorization, RequiredRole},
    store::Role,
    utils::redirect_to,
};
use leptos::*;

/// Renders `children` only once the session is resolved and admitted by
/// `required`. Redirects happen from an effect, so server-side rendering never
/// navigates and never shows protected markup.
fn gate_view(required: RequiredRole, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_auth();
    let decision = create_memo(move |_| check_authorization(&session.get(), required));

    create_effect(move |_| {
        if let Authorization::Redirect(target) = decision.get() {
            log::info!("Access denied for {required:?}; redirecting to {target}");
            redirect_to(target);
        }
    });

    view! {
        <Show
            when=move || decision.get() == Authorization::Authorized
            fallback=move || {
                if decision.get() == Authorization::Pending {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    gate_view(RequiredRole::Any, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    gate_view(RequiredRole::Only(Role::Admin), children)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireAuth};
    use crate::test_support::helpers::{admin_principal, employee_principal, provide_session};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn unresolved_session_shows_spinner_only() {
        let html = render_to_string(move || {
            provide_session(false, Some(admin_principal()));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_renders_children_when_signed_in() {
        let html = render_to_string(move || {
            provide_session(true, Some(employee_principal()));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_renders_nothing_when_signed_out() {
        let html = render_to_string(move || {
            provide_session(true, None);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn require_admin_renders_children_for_admin() {
        let html = render_to_string(move || {
            provide_session(true, Some(admin_principal()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_hides_children_from_employees() {
        let html = render_to_string(move || {
            provide_session(true, Some(employee_principal()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }
}
