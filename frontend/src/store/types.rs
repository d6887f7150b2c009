use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const CLOCK_FORMAT: &str = "%H:%M";

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One entry/exit interval. Older browsers stored `userId`, `client` and
/// `totalWorkTime`; those names are still accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    pub id: String,
    #[serde(alias = "userId")]
    pub employee_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub entry_time: String,
    #[serde(default)]
    pub exit_time: String,
    #[serde(default, alias = "client")]
    pub client_label: Option<String>,
    #[serde(alias = "totalWorkTime")]
    pub total_work_minutes: u32,
    #[serde(default)]
    pub used_entry_tolerance: bool,
    #[serde(default)]
    pub manual_entry: bool,
}

impl TimeRecord {
    /// Minutes between two `HH:MM` clock readings; zero when unparsable or
    /// when the exit precedes the entry.
    pub fn minutes_between(entry: &str, exit: &str) -> u32 {
        let parse = |value: &str| NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT).ok();
        match (parse(entry), parse(exit)) {
            (Some(start), Some(end)) if end > start => {
                u32::try_from((end - start).num_minutes()).unwrap_or(0)
            }
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Employee];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "管理者",
            Role::Employee => "従業員",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.error
    }
}

impl IntoView for AppError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "NOT_FOUND".to_string(),
            details: None,
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "STORAGE_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}
