use crate::{
    state::auth::{self, use_auth, LOGIN_ROUTE},
    store::StoreClient,
    utils::redirect_to,
};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100";
const MOBILE_NAV_LINK_CLASS: &str =
    "block text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100";

struct NavLink {
    href: &'static str,
    label: &'static str,
    admin_only: bool,
}

static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        href: "/dashboard",
        label: "ダッシュボード",
        admin_only: false,
    },
    NavLink {
        href: "/reports",
        label: "レポート",
        admin_only: false,
    },
    NavLink {
        href: "/admin/employees",
        label: "従業員管理",
        admin_only: true,
    },
    NavLink {
        href: "/admin/clients",
        label: "クライアント管理",
        admin_only: true,
    },
];

fn visible_links(is_admin: bool) -> impl Iterator<Item = &'static NavLink> {
    NAV_LINKS
        .iter()
        .filter(move |link| is_admin || !link.admin_only)
}

#[component]
pub fn Header() -> impl IntoView {
    let (session, set_session) = use_auth();
    let store = use_context::<StoreClient>().unwrap_or_else(StoreClient::new);
    let (menu_open, set_menu_open) = create_signal(false);

    let is_admin = create_memo(move |_| {
        session
            .get()
            .principal
            .as_ref()
            .is_some_and(|principal| principal.is_admin())
    });
    let principal_label = move || {
        session
            .get()
            .principal
            .map(|principal| format!("{} ({})", principal.name, principal.role.label()))
            .unwrap_or_default()
    };

    let on_logout = move |_: ev::MouseEvent| {
        set_menu_open.set(false);
        auth::logout(&store, set_session);
        redirect_to(LOGIN_ROUTE);
    };
    let on_mobile_logout = on_logout.clone();
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold text-gray-900">"Time Tracker"</h1>
                        <span class="hidden sm:inline text-sm text-gray-500">{principal_label}</span>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            {move || {
                                visible_links(is_admin.get())
                                    .map(|link| view! { <a href=link.href class=NAV_LINK_CLASS>{link.label}</a> })
                                    .collect_view()
                            }}
                            <button on:click=on_logout class=NAV_LINK_CLASS>
                                "ログアウト"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "メニューを閉じる" } else { "メニューを開く" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-gray-200">
                        <nav class="px-4 py-3 space-y-2">
                            {move || {
                                visible_links(is_admin.get())
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                class=MOBILE_NAV_LINK_CLASS
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()
                            }}
                            <button on:click=on_mobile_logout.clone() class="w-full text-left text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                                "ログアウト"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}
