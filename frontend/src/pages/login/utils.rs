use crate::store::{AppError, Principal, Role};
use uuid::Uuid;

pub fn validate_login(name: &str, role: &str) -> Result<Principal, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("名前を入力してください"));
    }
    let role = Role::from_value(role)
        .ok_or_else(|| AppError::validation("権限を選択してください"))?;
    Ok(Principal {
        id: format!("USR-{}", Uuid::new_v4()),
        name: name.to_string(),
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let err = validate_login("   ", "admin").unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "名前を入力してください");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = validate_login("Ana", "owner").unwrap_err();
        assert_eq!(err.error, "権限を選択してください");
    }

    #[test]
    fn valid_input_builds_a_principal() {
        let principal = validate_login("  Ana ", "Employee").unwrap();
        assert_eq!(principal.name, "Ana");
        assert_eq!(principal.role, Role::Employee);
        assert!(principal.id.starts_with("USR-"));
    }
}
