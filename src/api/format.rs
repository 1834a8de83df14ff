use serde_json::{json, Value};

use crate::database::models::item::Item;
use crate::database::models::user::User;

/// Convert a stored item into the public wire shape. Field-by-field on
/// purpose: the wire contract stays fixed even if the record type grows.
pub fn item_to_api_value(item: &Item) -> Value {
    json!({
        "id": item.id,
        "name": item.name,
        "description": item.description,
        "quantity": item.quantity,
        "created_at": item.created_at,
        "updated_at": item.updated_at,
    })
}

pub fn items_to_api_value(items: &[Item]) -> Value {
    Value::Array(items.iter().map(item_to_api_value).collect())
}

/// Public user shape; never exposes the password hash
pub fn user_to_api_value(user: &User) -> Value {
    json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "created_at": user.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn user_wire_shape_hides_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password_hash: "$argon2id$...".into(),
            created_at: Utc::now(),
        };
        let value = user_to_api_value(&user);
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], "ada@example.com");
    }

    #[test]
    fn item_wire_shape_keeps_null_description() {
        let item = Item {
            id: Uuid::new_v4(),
            name: "Bolt".into(),
            description: None,
            quantity: 5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = item_to_api_value(&item);
        assert!(value["description"].is_null());
        assert_eq!(value["quantity"], 5);
    }
}
