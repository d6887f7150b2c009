use super::utils::{new_client_id, ClientDraft};
use crate::store::{AppError, Client, Collection, StoreClient, StoreError};
use chrono::{DateTime, Utc};

fn storage_error(err: StoreError) -> AppError {
    log::error!("Client storage failed: {err}");
    AppError::storage("クライアント情報を保存できませんでした。もう一度お試しください。")
}

#[derive(Clone)]
pub struct ClientsRepository {
    store: StoreClient,
}

impl Default for ClientsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientsRepository {
    pub fn new() -> Self {
        Self {
            store: StoreClient::new(),
        }
    }

    pub fn new_with_store(store: StoreClient) -> Self {
        Self { store }
    }

    /// For display; unreadable data shows as an empty list.
    pub fn list(&self) -> Vec<Client> {
        self.store.clients()
    }

    pub fn find(&self, id: &str) -> Option<Client> {
        self.list().into_iter().find(|client| client.id == id)
    }

    // Mutations refuse to overwrite a collection they could not parse.
    fn load_for_update(&self) -> Result<Vec<Client>, AppError> {
        self.store
            .try_load_all(Collection::Clients)
            .map_err(storage_error)
    }

    fn save(&self, clients: &[Client]) -> Result<(), AppError> {
        self.store.save_clients(clients).map_err(storage_error)
    }

    pub fn create(&self, draft: ClientDraft, now: DateTime<Utc>) -> Result<Client, AppError> {
        let mut clients = self.load_for_update()?;
        let client = Client {
            id: new_client_id(),
            name: draft.name,
            active: true,
            custom_tag: draft.custom_tag,
            created_at: Some(now),
            updated_at: None,
        };
        clients.push(client.clone());
        self.save(&clients)?;
        log::info!("Created client {}", client.id);
        Ok(client)
    }

    pub fn update(
        &self,
        id: &str,
        draft: ClientDraft,
        now: DateTime<Utc>,
    ) -> Result<Client, AppError> {
        let mut clients = self.load_for_update()?;
        let client = clients
            .iter_mut()
            .find(|client| client.id == id)
            .ok_or_else(|| AppError::not_found("クライアントが見つかりません"))?;
        client.name = draft.name;
        client.custom_tag = draft.custom_tag;
        client.updated_at = Some(now);
        let updated = client.clone();
        self.save(&clients)?;
        Ok(updated)
    }

    /// Flips the soft `active` flag and returns the full updated list.
    pub fn toggle_active(&self, id: &str) -> Result<Vec<Client>, AppError> {
        let mut clients = self.load_for_update()?;
        let client = clients
            .iter_mut()
            .find(|client| client.id == id)
            .ok_or_else(|| AppError::not_found("クライアントが見つかりません"))?;
        client.active = !client.active;
        self.save(&clients)?;
        Ok(clients)
    }
}
