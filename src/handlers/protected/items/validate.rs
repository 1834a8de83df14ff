use serde_json::Value;

use crate::database::models::item::{ItemChanges, NewItem};
use crate::error::FieldErrors;

const NAME_MAX_CHARS: usize = 255;

/// Check every create rule atomically: any violation rejects the whole
/// payload and nothing is persisted.
///
/// Rules: `name` required string <= 255 chars, `description` optional string,
/// `quantity` required integer >= 0.
pub fn validate_create(payload: &Value) -> Result<NewItem, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match present(payload, "name") {
        None => {
            require(&mut errors, "name");
            None
        }
        Some(value) => collect(&mut errors, "name", validate_name(value)),
    };

    let description = match present(payload, "description") {
        None => None,
        Some(value) => collect(&mut errors, "description", validate_description(value)),
    };

    let quantity = match present(payload, "quantity") {
        None => {
            require(&mut errors, "quantity");
            None
        }
        Some(value) => collect(&mut errors, "quantity", validate_quantity(value)),
    };

    match (name, quantity) {
        (Some(name), Some(quantity)) if errors.is_empty() => Ok(NewItem {
            name,
            description,
            quantity,
        }),
        _ => Err(errors),
    }
}

/// Partial-update rules: each field is optional, but a present field must
/// satisfy the same rule as on create. Absent keys and explicit nulls both
/// mean "no change"; an empty-string description is a real value.
pub fn validate_update(payload: &Value) -> Result<ItemChanges, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut changes = ItemChanges::default();

    if let Some(value) = present(payload, "name") {
        changes.name = collect(&mut errors, "name", validate_name(value));
    }
    if let Some(value) = present(payload, "description") {
        changes.description = collect(&mut errors, "description", validate_description(value));
    }
    if let Some(value) = present(payload, "quantity") {
        changes.quantity = collect(&mut errors, "quantity", validate_quantity(value));
    }

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors)
    }
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

fn validate_description(value: &Value) -> Result<String, Vec<String>> {
    match value.as_str() {
        // Empty string is allowed and distinct from null
        Some(description) => Ok(description.to_string()),
        None => Err(vec!["The description field must be a string.".to_string()]),
    }
}

fn validate_quantity(value: &Value) -> Result<i32, Vec<String>> {
    // as_i64 rejects floats, booleans and numeric strings outright
    let Some(quantity) = value.as_i64() else {
        return Err(vec!["The quantity field must be an integer.".to_string()]);
    };
    if quantity < 0 {
        return Err(vec!["The quantity field must be at least 0.".to_string()]);
    }
    i32::try_from(quantity)
        .map_err(|_| vec!["The quantity field must be an integer.".to_string()])
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
    fn create_accepts_minimal_payload() {
        let item = validate_create(&json!({"name": "Bolt", "quantity": 5})).expect("valid");
        assert_eq!(item.name, "Bolt");
        assert_eq!(item.description, None);
        assert_eq!(item.quantity, 5);
    }

    #[test]
    fn create_reports_all_violations_at_once() {
        let errors = validate_create(&json!({"description": 7, "quantity": -2})).unwrap_err();
        assert_eq!(errors["name"], vec!["The name field is required."]);
        assert_eq!(
            errors["description"],
            vec!["The description field must be a string."]
        );
        assert_eq!(
            errors["quantity"],
            vec!["The quantity field must be at least 0."]
        );
    }

    #[test]
    fn create_rejects_non_integer_quantities() {
        for bad in [json!("5"), json!(2.5), json!(true)] {
            let errors = validate_create(&json!({"name": "Bolt", "quantity": bad})).unwrap_err();
            assert_eq!(
                errors["quantity"],
                vec!["The quantity field must be an integer."]
            );
        }
    }

    #[test]
    fn create_enforces_name_length() {
        let ok = "x".repeat(255);
        assert!(validate_create(&json!({"name": ok, "quantity": 0})).is_ok());

        let too_long = "x".repeat(256);
        let errors = validate_create(&json!({"name": too_long, "quantity": 0})).unwrap_err();
        assert_eq!(
            errors["name"],
            vec!["The name field must not be greater than 255 characters."]
        );
    }

    #[test]
    fn create_treats_null_description_as_absent() {
        let item =
            validate_create(&json!({"name": "Bolt", "description": null, "quantity": 1}))
                .expect("valid");
        assert_eq!(item.description, None);
    }

    #[test]
    fn update_allows_empty_payload() {
        let changes = validate_update(&json!({})).expect("valid");
        assert!(changes.is_empty());
    }

    #[test]
    fn update_null_fields_mean_no_change() {
        let changes =
            validate_update(&json!({"name": null, "quantity": null})).expect("valid");
        assert!(changes.is_empty());
    }

    #[test]
    fn update_keeps_empty_string_description() {
        let changes = validate_update(&json!({"description": ""})).expect("valid");
        assert_eq!(changes.description.as_deref(), Some(""));
    }

    #[test]
    fn update_validates_present_fields() {
        let errors = validate_update(&json!({"name": "", "quantity": -1})).unwrap_err();
        assert_eq!(errors["name"], vec!["The name field is required."]);
        assert_eq!(
            errors["quantity"],
            vec!["The quantity field must be at least 0."]
        );
    }
}
