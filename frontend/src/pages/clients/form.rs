use super::{
    utils::{validate_client_form, ClientDraft, ClientFormErrors},
    CLIENTS_ROUTE,
};
use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    forms::TextField,
};
use crate::store::{AppError, Client};
use leptos::{ev::SubmitEvent, *};

#[derive(Clone, Copy)]
pub struct ClientFormState {
    pub name: RwSignal<String>,
    pub custom_tag: RwSignal<String>,
    pub errors: RwSignal<ClientFormErrors>,
    pub submit_error: RwSignal<Option<AppError>>,
}

impl ClientFormState {
    pub fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            custom_tag: create_rw_signal(String::new()),
            errors: create_rw_signal(ClientFormErrors::default()),
            submit_error: create_rw_signal(None),
        }
    }

    pub fn fill(&self, client: &Client) {
        self.name.set(client.name.clone());
        self.custom_tag
            .set(client.custom_tag.clone().unwrap_or_default());
    }

    /// Validates the current input, recording field errors on failure.
    pub fn draft(&self) -> Option<ClientDraft> {
        match validate_client_form(&self.name.get_untracked(), &self.custom_tag.get_untracked())
        {
            Ok(draft) => {
                self.errors.set(ClientFormErrors::default());
                Some(draft)
            }
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }
}

impl Default for ClientFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ClientForm(
    state: ClientFormState,
    submit_label: &'static str,
    on_submit: Callback<ClientDraft>,
) -> impl IntoView {
    let name_error = Signal::derive(move || state.errors.get().name);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(draft) = state.draft() {
            on_submit.call(draft);
        }
    };

    view! {
        <form class="bg-white shadow rounded-lg p-6 space-y-4" on:submit=handle_submit>
            <InlineErrorMessage error={state.submit_error.into()} />
            <TextField
                id="client-name"
                label="クライアント名"
                value=state.name
                placeholder="例: 株式会社サンプル"
                required=true
                error=name_error
            />
            <TextField
                id="client-tag"
                label="カスタムタグ"
                value=state.custom_tag
                placeholder="例: VIP, 長期契約"
            />
            <p class="text-xs text-gray-500">{"タグはクライアントの分類に使用できます (任意)。"}</p>
            <div class="flex justify-end gap-3">
                <a href=CLIENTS_ROUTE class="px-4 py-2 rounded-md text-sm border border-gray-300 text-gray-700 hover:bg-gray-50">
                    {"キャンセル"}
                </a>
                <Button variant=ButtonVariant::Primary submit=true>
                    {submit_label}
                </Button>
            </div>
        </form>
    }
}
