#![forbid(unsafe_code)]

use qa_core::UserId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub picture: Option<String>,
    pub bio: Option<String>,
    pub reputation: i64,
    pub created_at_ms: i64,
}
