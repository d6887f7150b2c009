use crate::store::AppError;
use serde_json::json;
use uuid::Uuid;

pub const NAME_REQUIRED: &str = "従業員名は必須です";

pub fn new_employee_id() -> String {
    format!("EMP-{}", Uuid::new_v4().simple())
}

pub fn validate_employee_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("入力内容を確認してください")
            .with_details(json!({ "fields": [NAME_REQUIRED] })));
    }
    Ok(name.to_string())
}
