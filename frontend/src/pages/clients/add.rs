use super::{
    form::{ClientForm, ClientFormState},
    repository::ClientsRepository,
    utils::ClientDraft,
    CLIENTS_ROUTE,
};
use crate::{components::layout::Layout, store::StoreClient, utils::redirect_to};
use chrono::Utc;
use leptos::*;

#[component]
pub fn AddClientPage() -> impl IntoView {
    let store = use_context::<StoreClient>().unwrap_or_else(StoreClient::new);
    let repo = ClientsRepository::new_with_store(store);
    let state = ClientFormState::new();

    let on_submit = Callback::new(move |draft: ClientDraft| {
        match repo.create(draft, Utc::now()) {
            Ok(_) => {
                state.submit_error.set(None);
                redirect_to(CLIENTS_ROUTE);
            }
            Err(err) => state.submit_error.set(Some(err)),
        }
    });

    view! {
        <Layout>
            <div class="max-w-2xl mx-auto space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">{"クライアントを追加"}</h1>
                <ClientForm state=state submit_label="追加する" on_submit=on_submit />
            </div>
        </Layout>
    }
}
