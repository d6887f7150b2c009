use super::{edit_client_href, repository::ClientsRepository, ADD_CLIENT_ROUTE};
use crate::{
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::Layout,
    },
    store::{AppError, Client, StoreClient},
};
use leptos::*;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let store = use_context::<StoreClient>().unwrap_or_else(StoreClient::new);
    let repo = ClientsRepository::new_with_store(store);
    let clients = create_rw_signal(Vec::<Client>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<AppError>);

    {
        let repo = repo.clone();
        create_effect(move |_| {
            clients.set(repo.list());
            loading.set(false);
        });
    }

    let on_toggle = Callback::new(move |id: String| match repo.toggle_active(&id) {
        Ok(updated) => {
            error.set(None);
            clients.set(updated);
        }
        Err(err) => error.set(Some(err)),
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{"クライアント管理"}</h1>
                    <a
                        href=ADD_CLIENT_ROUTE
                        class="inline-flex items-center rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700"
                    >
                        {"クライアントを追加"}
                    </a>
                </div>
                <InlineErrorMessage error=error.into() />
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="text-sm text-gray-500">{"読み込み中..."}</p> }
                >
                    <ClientTable clients=clients.read_only() on_toggle=on_toggle />
                </Show>
            </div>
        </Layout>
    }
}

#[component]
pub fn ClientTable(clients: ReadSignal<Vec<Client>>, on_toggle: Callback<String>) -> impl IntoView {
    view! {
        <Show
            when=move || !clients.with(Vec::is_empty)
            fallback=|| {
                view! {
                    <EmptyState
                        title="クライアントが登録されていません"
                        description="最初のクライアントを追加してください。"
                        action_href=ADD_CLIENT_ROUTE
                        action_label="クライアントを追加"
                    />
                }
            }
        >
            <div class="bg-white shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 text-sm">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-2 text-left font-medium text-gray-500">{"クライアント名"}</th>
                            <th class="px-4 py-2 text-left font-medium text-gray-500">{"タグ"}</th>
                            <th class="px-4 py-2 text-left font-medium text-gray-500">{"状態"}</th>
                            <th class="px-4 py-2 text-right font-medium text-gray-500">{"操作"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=move || clients.get()
                            key=|client| (client.id.clone(), client.active, client.name.clone())
                            children=move |client| view! { <ClientRow client=client on_toggle=on_toggle /> }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
fn ClientRow(client: Client, on_toggle: Callback<String>) -> impl IntoView {
    let id = client.id.clone();
    let (status_label, status_class) = if client.active {
        ("有効", "bg-green-100 text-green-800")
    } else {
        ("無効", "bg-gray-100 text-gray-600")
    };
    let (toggle_label, toggle_variant) = if client.active {
        ("無効にする", ButtonVariant::Danger)
    } else {
        ("有効にする", ButtonVariant::Secondary)
    };

    view! {
        <tr>
            <td class="px-4 py-2">
                <div class="font-medium text-gray-900">{client.name.clone()}</div>
                <div class="text-xs text-gray-500">{client.id.clone()}</div>
            </td>
            <td class="px-4 py-2">
                {match client.custom_tag.clone() {
                    Some(tag) => view! {
                        <span class="inline-flex rounded-full bg-indigo-100 px-2 py-0.5 text-xs text-indigo-800">{tag}</span>
                    }
                    .into_view(),
                    None => view! { <span class="text-gray-400">"-"</span> }.into_view(),
                }}
            </td>
            <td class="px-4 py-2">
                <span class=format!("inline-flex rounded-full px-2 py-0.5 text-xs {}", status_class)>
                    {status_label}
                </span>
            </td>
            <td class="px-4 py-2 text-right space-x-2">
                <a href=edit_client_href(&client.id) class="text-indigo-600 hover:text-indigo-800">
                    {"編集"}
                </a>
                <Button
                    variant=toggle_variant
                    class="px-3 py-1"
                    on_click=Callback::new(move |_| on_toggle.call(id.clone()))
                >
                    {toggle_label}
                </Button>
            </td>
        </tr>
    }
}
