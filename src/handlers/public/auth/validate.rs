use serde_json::Value;

use crate::error::FieldErrors;

const NAME_MAX_CHARS: usize = 255;
const EMAIL_MAX_CHARS: usize = 255;
const PASSWORD_MIN_CHARS: usize = 8;

/// Registration fields that passed their own rules. A field is `None` when it
/// failed; the corresponding messages are in the returned error map.
#[derive(Debug, Default)]
pub struct RegisterData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default)]
pub struct LoginData {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Check all registration rules at once and report every violation.
/// Email uniqueness is checked by the handler since it needs the store.
pub fn validate_register(payload: &Value) -> (RegisterData, FieldErrors) {
    let mut errors = FieldErrors::new();
    let mut data = RegisterData::default();

    match present(payload, "name") {
        None => require(&mut errors, "name"),
        Some(value) => data.name = collect(&mut errors, "name", validate_name(value)),
    }
    match present(payload, "email") {
        None => require(&mut errors, "email"),
        Some(value) => data.email = collect(&mut errors, "email", validate_email(value)),
    }
    match present(payload, "password") {
        None => require(&mut errors, "password"),
        Some(value) => data.password = collect(&mut errors, "password", validate_password(value)),
    }

    (data, errors)
}

pub fn validate_login(payload: &Value) -> (LoginData, FieldErrors) {
    let mut errors = FieldErrors::new();
    let mut data = LoginData::default();

    match present(payload, "email") {
        None => require(&mut errors, "email"),
        Some(value) => data.email = collect(&mut errors, "email", validate_email(value)),
    }
    match present(payload, "password") {
        None => require(&mut errors, "password"),
        Some(value) => match value.as_str() {
            Some(p) if !p.is_empty() => data.password = Some(p.to_string()),
            Some(_) => require(&mut errors, "password"),
            None => {
                errors.insert(
                    "password".to_string(),
                    vec!["The password field must be a string.".to_string()],
                );
            }
        },
    }

    (data, errors)
}

fn validate_name(value: &Value) -> Result<String, Vec<String>> {
    let Some(name) = value.as_str() else {
        return Err(vec!["The name field must be a string.".to_string()]);
    };
    if name.is_empty() {
        return Err(vec!["The name field is required.".to_string()]);
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(vec![
            "The name field must not be greater than 255 characters.".to_string(),
        ]);
    }
    Ok(name.to_string())
}

fn validate_email(value: &Value) -> Result<String, Vec<String>> {
    let Some(email) = value.as_str() else {
        return Err(vec!["The email field must be a string.".to_string()]);
    };
    if email.is_empty() {
        return Err(vec!["The email field is required.".to_string()]);
    }
    if email.chars().count() > EMAIL_MAX_CHARS {
        return Err(vec![
            "The email field must not be greater than 255 characters.".to_string(),
        ]);
    }
    if !looks_like_email(email) {
        return Err(vec![
            "The email field must be a valid email address.".to_string(),
        ]);
    }
    Ok(email.to_string())
}

fn validate_password(value: &Value) -> Result<String, Vec<String>> {
    let Some(password) = value.as_str() else {
        return Err(vec!["The password field must be a string.".to_string()]);
    };
    if password.is_empty() {
        return Err(vec!["The password field is required.".to_string()]);
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(vec![
            "The password field must be at least 8 characters.".to_string(),
        ]);
    }
    Ok(password.to_string())
}

/// Single non-empty local part, single domain containing a dot
fn looks_like_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return false;
    }
    parts[1].contains('.')
}

/// Absent keys and explicit nulls are both treated as "not provided"
fn present<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    match payload.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn require(errors: &mut FieldErrors, field: &str) {
    errors.insert(
        field.to_string(),
        vec![format!("The {} field is required.", field)],
    );
}

fn collect<T>(errors: &mut FieldErrors, field: &str, result: Result<T, Vec<String>>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(messages) => {
            errors.insert(field.to_string(), messages);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payload_reports_every_field() {
        let (_, errors) = validate_register(&json!({}));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["name"], vec!["The name field is required."]);
        assert_eq!(errors["email"], vec!["The email field is required."]);
        assert_eq!(errors["password"], vec!["The password field is required."]);
    }

    #[test]
    fn short_password_rejected() {
        let (_, errors) = validate_register(&json!({
            "name": "Ada", "email": "ada@example.com", "password": "short"
        }));
        assert_eq!(
            errors["password"],
            vec!["The password field must be at least 8 characters."]
        );
        assert!(!errors.contains_key("name"));
    }

    #[test]
    fn malformed_email_rejected() {
        for bad in ["not-an-email", "@example.com", "ada@", "ada@nodomain"] {
            let (_, errors) = validate_register(&json!({
                "name": "Ada", "email": bad, "password": "long-enough"
            }));
            assert_eq!(
                errors["email"],
                vec!["The email field must be a valid email address."],
                "expected {} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn valid_register_payload_passes() {
        let (data, errors) = validate_register(&json!({
            "name": "Ada", "email": "ada@example.com", "password": "long-enough"
        }));
        assert!(errors.is_empty());
        assert_eq!(data.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn login_requires_both_fields() {
        let (_, errors) = validate_login(&json!({"email": "ada@example.com"}));
        assert_eq!(errors["password"], vec!["The password field is required."]);
        assert!(!errors.contains_key("email"));
    }
}
