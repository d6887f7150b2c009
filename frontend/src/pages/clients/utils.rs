use uuid::Uuid;

pub const NAME_REQUIRED: &str = "クライアント名は必須です";

pub fn new_client_id() -> String {
    format!("CLI-{}", Uuid::new_v4().simple())
}

/// Validated client input, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub custom_tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFormErrors {
    pub name: Option<String>,
}

impl ClientFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

pub fn validate_client_form(name: &str, custom_tag: &str) -> Result<ClientDraft, ClientFormErrors> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ClientFormErrors {
            name: Some(NAME_REQUIRED.to_string()),
        });
    }
    let tag = custom_tag.trim();
    Ok(ClientDraft {
        name: name.to_string(),
        custom_tag: (!tag.is_empty()).then(|| tag.to_string()),
    })
}
