use serde::{Deserialize, Serialize};

/// A user account as returned by the backend and exposed over REST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

/// Payload for creating or replacing a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreate {
    pub id: String,
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_create_round_trip() {
        let raw = r#"{"id":"123","username":"testuser","password":"testpass"}"#;
        let decoded: UserCreate = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.username, "testuser");

        let reencoded = serde_json::to_string(&decoded).unwrap();
        assert_eq!(serde_json::from_str::<UserCreate>(&reencoded).unwrap(), decoded);
    }

    #[test]
    fn test_user_create_rejects_missing_field() {
        let raw = r#"{"id":"123","username":"testuser"}"#;
        assert!(serde_json::from_str::<UserCreate>(raw).is_err());
    }
}
