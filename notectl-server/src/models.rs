//! Transfer shapes crossing the API boundary
//!
//! Creation payloads require every field; update payloads make every field
//! optional (absent means "leave unchanged"); responses carry the full
//! stored representation, minus the user's password.

use serde::{Deserialize, Serialize};

use crate::db::repos::{Label, Note, User};

// --- User ---

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// User representation on the wire. The password column never leaves the
/// database layer.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
        }
    }
}

// --- Note ---

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
            user_id: n.user_id,
        }
    }
}

// --- Label ---

#[derive(Debug, Deserialize)]
pub struct CreateLabelRequest {
    pub name: String,
    pub user_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateLabelRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LabelResponse {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
}

impl From<Label> for LabelResponse {
    fn from(l: Label) -> Self {
        Self {
            id: l.id,
            name: l.name,
            user_id: l.user_id,
        }
    }
}

/// Delete acknowledgment: `{"msg": "User deleted"}`
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub msg: String,
}

impl DeletedResponse {
    pub fn new(resource: &str) -> Self {
        Self {
            msg: format!("{resource} deleted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_omits_password() {
        let response = UserResponse::from(User {
            id: 1,
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "secret".into(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn update_payload_fields_default_to_absent() {
        let patch: UpdateNoteRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.title.is_none());
        assert!(patch.content.is_none());
    }

    #[test]
    fn deleted_message_shape() {
        let ack = DeletedResponse::new("User");
        assert_eq!(serde_json::to_value(&ack).unwrap()["msg"], "User deleted");
    }
}
