use crate::{
    components::error::InlineErrorMessage,
    pages::login::utils,
    state::auth::{self, DEFAULT_AUTHENTICATED_ROUTE},
    store::{AppError, Role, StoreClient},
    utils::redirect_to,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let store = use_context::<StoreClient>().unwrap_or_else(StoreClient::new);
    let (session, set_session) = auth::use_auth();
    let name = create_rw_signal(String::new());
    let role = create_rw_signal(Role::Employee.as_str().to_string());
    let error = create_rw_signal(None::<AppError>);

    // Someone already signed in has nothing to do here.
    create_effect(move |_| {
        if session.get().is_authenticated() {
            redirect_to(DEFAULT_AUTHENTICATED_ROUTE);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let principal = match utils::validate_login(&name.get_untracked(), &role.get_untracked())
        {
            Ok(principal) => principal,
            Err(err) => {
                error.set(Some(err));
                return;
            }
        };
        match auth::login(&store, principal, set_session) {
            Ok(()) => {
                error.set(None);
                redirect_to(DEFAULT_AUTHENTICATED_ROUTE);
            }
            Err(err) => {
                log::error!("Failed to persist session: {err}");
                error.set(Some(AppError::storage(
                    "ログイン情報を保存できませんでした。",
                )));
            }
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        {"Time Tracker にログイン"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        {"勤務時間管理システム"}
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="space-y-4">
                        <div>
                            <label for="name" class="block text-sm font-medium text-gray-700 mb-1">{"名前"}</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                class="block w-full px-3 py-2 border border-gray-300 rounded-md text-gray-900 sm:text-sm"
                                placeholder="名前"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="role" class="block text-sm font-medium text-gray-700 mb-1">{"権限"}</label>
                            <select
                                id="role"
                                name="role"
                                class="block w-full px-3 py-2 border border-gray-300 rounded-md bg-white text-gray-900 sm:text-sm"
                                prop:value=move || role.get()
                                on:change=move |ev| role.set(event_target_value(&ev))
                            >
                                {Role::ALL
                                    .into_iter()
                                    .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <InlineErrorMessage error={error.into()} />

                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700"
                    >
                        {"ログイン"}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, provide_store};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_form_offers_both_roles() {
        let html = render_to_string(move || {
            provide_store(StoreClient::in_memory());
            provide_session(true, None);
            view! { <LoginPanel /> }
        });
        assert!(html.contains("Time Tracker にログイン"));
        assert!(html.contains("管理者"));
        assert!(html.contains("従業員"));
        assert!(html.contains("type=\"submit\""));
    }
}
