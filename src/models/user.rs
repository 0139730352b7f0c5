//! Registered users.

use serde::{Deserialize, Serialize};

/// A stored user as returned by `GET /usuarios`.
///
/// Columns the model does not know about are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,

    #[serde(rename = "nombre")]
    pub name: String,
}

/// Body of `POST /usuarios`.
///
/// `token` is the CAPTCHA response; the server verifies it before storing the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    #[serde(rename = "nombre")]
    pub name: String,

    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization_ignores_extra_columns() {
        let json = r#"{"id": 7, "nombre": "Ana", "creado_en": "2026-01-01T00:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Ana");
    }

    #[test]
    fn test_registration_request_wire_names() {
        let request = RegistrationRequest {
            name: "Ana".to_string(),
            token: "captcha-token".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"nombre": "Ana", "token": "captcha-token"}));
    }
}
