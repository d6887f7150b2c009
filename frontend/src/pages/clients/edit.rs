use super::{
    form::{ClientForm, ClientFormState},
    repository::ClientsRepository,
    utils::ClientDraft,
    CLIENTS_ROUTE,
};
use crate::{components::layout::Layout, store::StoreClient, utils::redirect_to};
use chrono::Utc;
use leptos::*;
use leptos_router::use_query_map;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditStatus {
    Loading,
    Ready,
    NotFound,
}

#[component]
pub fn EditClientPage() -> impl IntoView {
    let query = use_query_map();
    let client_id = query.with_untracked(|params| params.get("id").cloned());

    view! {
        <Layout>
            <EditClientPanel client_id=client_id />
        </Layout>
    }
}

#[component]
pub fn EditClientPanel(client_id: Option<String>) -> impl IntoView {
    let store = use_context::<StoreClient>().unwrap_or_else(StoreClient::new);
    let repo = ClientsRepository::new_with_store(store);
    let state = ClientFormState::new();
    let status = create_rw_signal(EditStatus::Loading);

    {
        let repo = repo.clone();
        let client_id = client_id.clone();
        create_effect(move |_| {
            match client_id.as_deref().and_then(|id| repo.find(id)) {
                Some(client) => {
                    state.fill(&client);
                    status.set(EditStatus::Ready);
                }
                None => {
                    log::warn!("Client {:?} not found for editing", client_id);
                    status.set(EditStatus::NotFound);
                }
            }
        });
    }

    let on_submit = Callback::new(move |draft: ClientDraft| {
        let Some(id) = client_id.as_deref() else {
            status.set(EditStatus::NotFound);
            return;
        };
        match repo.update(id, draft, Utc::now()) {
            Ok(_) => {
                state.submit_error.set(None);
                redirect_to(CLIENTS_ROUTE);
            }
            Err(err) => state.submit_error.set(Some(err)),
        }
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{"クライアントを編集"}</h1>
            {move || match status.get() {
                EditStatus::Loading => {
                    view! { <p class="text-sm text-gray-500">{"読み込み中..."}</p> }.into_view()
                }
                EditStatus::NotFound => view! {
                    <div class="bg-white shadow rounded-lg p-6 space-y-4">
                        <p class="text-gray-700">{"クライアントが見つかりません"}</p>
                        <a href=CLIENTS_ROUTE class="text-indigo-600 hover:text-indigo-800 text-sm">
                            {"クライアント一覧に戻る"}
                        </a>
                    </div>
                }
                .into_view(),
                EditStatus::Ready => {
                    view! { <ClientForm state=state submit_label="更新する" on_submit=on_submit /> }
                        .into_view()
                }
            }}
        </div>
    }
}
