use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User as stored in the users collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Natural key, unique across the collection
    #[serde(rename = "username")]
    pub email: String,
    /// Argon2 PHC string, never the plaintext
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(rename = "isadmin", default)]
    pub is_admin: bool,
}

impl User {
    /// Registered users are never admins.
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: None,
            email,
            password_hash,
            is_admin: false,
        }
    }
}

/// Body of registration and authentication requests.
///
/// Unknown fields such as `isadmin` are ignored.
#[derive(Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct Credentials {
    #[serde(rename = "username")]
    #[validate(email)]
    #[schema(example = "shelby.dummy@gmail.com")]
    pub email: String,

    #[validate(length(min = 8, max = 300))]
    #[schema(example = "qwertyuiop", min_length = 8, max_length = 300)]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Public view of a user; carries no password field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "username")]
    #[schema(example = "shelby.dummy@gmail.com")]
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_credentials() {
        assert!(credentials("shelby.dummy@gmail.com", "qwertyuiop").validate().is_ok());
    }

    #[test]
    fn test_short_password_is_rejected() {
        let errors = credentials("shelby.dummy@gmail.com", "qwert").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_overlong_password_is_rejected() {
        let long = "p".repeat(301);
        assert!(credentials("a@b.co", &long).validate().is_err());
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let errors = credentials("not-an-email", "qwertyuiop").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_credentials_ignore_admin_flag() {
        let creds: Credentials = serde_json::from_str(
            r#"{"username":"a@b.co","password":"qwertyuiop","isadmin":true}"#,
        )
        .unwrap();
        assert_eq!(creds.email, "a@b.co");
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let creds: Credentials = serde_json::from_str("{}").unwrap();
        let errors = creds.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_stored_field_names() {
        let user = User::new("a@b.co".to_string(), "$argon2id$hash".to_string());
        let doc = mongodb::bson::to_document(&user).unwrap();
        assert_eq!(doc.get_str("username").unwrap(), "a@b.co");
        assert_eq!(doc.get_str("password").unwrap(), "$argon2id$hash");
        assert!(!doc.get_bool("isadmin").unwrap());
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_response_has_no_password() {
        let user = User::new("a@b.co".to_string(), "$argon2id$hash".to_string());
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "a@b.co" }));
    }
}
