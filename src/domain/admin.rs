use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Backoffice user record used only by the login gate.
///
/// Deliberately not `Serialize`: the bcrypt hash must never reach a response
/// body. Anything leaving the service layer goes through [`AdminProfile`],
/// which has no password field at all.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    /// Unique login email.
    pub email: String,
    /// Bcrypt hash of the password.
    pub password: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Client-facing view of an admin, returned by the login endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Admin> for AdminProfile {
    fn from(value: Admin) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            role: value.role,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Payload required to insert a new admin (seed tooling only; there is no
/// self-service registration).
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    /// Bcrypt hash, produced by the caller.
    pub password: String,
    pub role: String,
    pub updated_at: NaiveDateTime,
}

impl NewAdmin {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: "admin".to_string(),
            updated_at: now,
        }
    }
}
