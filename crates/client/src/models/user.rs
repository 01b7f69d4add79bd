//! Identity types.

use serde::{Deserialize, Serialize};

use pawsome_core::{Email, Preferences, UserId, UserRole};

/// The authenticated user record held client-side.
///
/// Returned by the auth endpoints on login/registration and persisted under
/// the `identity` storage key. The bearer `token` is what the API client
/// attaches to subsequent requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Backend-assigned user ID.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: Email,
    /// Role deciding back-office access.
    #[serde(default)]
    pub role: UserRole,
    /// Bearer token for authenticated API calls.
    pub token: String,
    /// Lifestyle survey, if the user has completed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

impl Identity {
    /// Whether this identity may use the back-office operations.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_parses_backend_shape() {
        let json = r#"{
            "_id": "u1",
            "name": "Jordan",
            "email": "jordan@example.com",
            "role": "admin",
            "token": "jwt-token"
        }"#;

        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id, UserId::new("u1"));
        assert!(identity.is_admin());
        assert_eq!(identity.preferences, None);
    }

    #[test]
    fn test_role_defaults_to_user() {
        let json = r#"{
            "_id": "u2",
            "name": "Sam",
            "email": "sam@example.com",
            "token": "jwt-token"
        }"#;

        let identity: Identity = serde_json::from_str(json).unwrap();
        assert!(!identity.is_admin());
    }
}
