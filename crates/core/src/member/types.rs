use serde::{Deserialize, Serialize};

/// A registered member account.
///
/// `phone` and `birthdate` are free-form text and may be empty; `birthdate`
/// carries no format validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Row id assigned by the store at creation. Never reused or changed.
    pub id: i64,
    /// Unique across all members, immutable after creation.
    pub username: String,
    /// Unique across all members, stored lowercased.
    pub email: String,
    /// Stored and compared verbatim. Known weakness, preserved behavior.
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}

/// Field values for inserting a new member row.
///
/// The id is assigned by the store; callers get it back on the created
/// [`Member`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}

/// Field values the edit-profile flow may change. Username is immutable and
/// deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}
