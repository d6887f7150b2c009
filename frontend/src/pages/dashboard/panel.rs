use crate::{
    components::{cards::StatCard, layout::Layout},
    pages::dashboard::repository::{DashboardRepository, DashboardStats},
    state::auth::use_auth,
    store::StoreClient,
    utils::time::today_in_app_tz,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_context::<StoreClient>().unwrap_or_else(StoreClient::new);
    let repo = DashboardRepository::new_with_store(store);
    let stats = create_rw_signal(DashboardStats::default());
    let loaded = create_rw_signal(false);

    // Storage is read after mount so server-side rendering stays inert.
    create_effect(move |_| {
        stats.set(repo.load_stats(today_in_app_tz()));
        loaded.set(true);
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">{"ダッシュボード"}</h1>
                <DashboardStatsGrid stats=stats.read_only() loaded=loaded.read_only() />
                <QuickLinks />
            </div>
        </Layout>
    }
}

#[component]
fn DashboardStatsGrid(stats: ReadSignal<DashboardStats>, loaded: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show
            when=move || loaded.get()
            fallback=|| view! { <p class="text-sm text-gray-500">{"統計を読み込み中..."}</p> }
        >
            <dl class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    label="従業員 (有効 / 全体)"
                    value=Signal::derive(move || stats.with(DashboardStats::employees_label))
                    href="/admin/employees"
                />
                <StatCard
                    label="クライアント (有効 / 全体)"
                    value=Signal::derive(move || stats.with(DashboardStats::clients_label))
                    href="/admin/clients"
                />
                <StatCard
                    label="勤務記録 (本日 / 全体)"
                    value=Signal::derive(move || stats.with(DashboardStats::records_label))
                    href="/reports"
                />
            </dl>
        </Show>
    }
}

#[component]
fn QuickLinks() -> impl IntoView {
    let (session, _) = use_auth();
    let is_admin = move || {
        session
            .get()
            .principal
            .as_ref()
            .is_some_and(|principal| principal.is_admin())
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-medium text-gray-900 mb-4">{"クイックアクション"}</h2>
                <a href="/reports" class="block p-3 bg-indigo-50 hover:bg-indigo-100 rounded-md text-sm">
                    {"レポートを作成"}
                </a>
            </div>
            <Show when=is_admin>
                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-lg font-medium text-gray-900 mb-4">{"管理"}</h2>
                    <div class="space-y-2">
                        <a href="/admin/employees" class="block p-3 bg-amber-50 hover:bg-amber-100 rounded-md text-sm">
                            {"従業員を管理"}
                        </a>
                        <a href="/admin/clients" class="block p-3 bg-emerald-50 hover:bg-emerald-100 rounded-md text-sm">
                            {"クライアントを管理"}
                        </a>
                        <a href="/admin/clients/add-client" class="block p-3 bg-emerald-50 hover:bg-emerald-100 rounded-md text-sm">
                            {"クライアントを追加"}
                        </a>
                    </div>
                </div>
            </Show>
        </div>
    }
}
