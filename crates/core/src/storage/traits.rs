use async_trait::async_trait;

use crate::member::{Member, NewMember, ProfileUpdate};

use super::Result;

/// Repository for member account operations.
///
/// Callers are expected to pass already-normalized values: trimmed fields
/// and lowercased emails (see [`crate::member::normalize_email`]). The
/// repository compares exactly what it is given.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Gets a member by id.
    async fn get_member(&self, id: i64) -> Result<Option<Member>>;

    /// Finds the member whose email and password both match exactly.
    async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Member>>;

    /// Whether any member already holds this username.
    async fn username_exists(&self, username: &str) -> Result<bool>;

    /// Whether this email belongs to a member other than `id`. A member's
    /// own current email never counts as taken.
    async fn email_taken_by_other(&self, email: &str, id: i64) -> Result<bool>;

    /// Inserts a new member and returns the stored row with its assigned id.
    async fn create_member(&self, member: &NewMember) -> Result<Member>;

    /// Applies an edit-profile update to the member with this id.
    async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<()>;

    /// Deletes the member with this id. Deleting an id that does not exist
    /// is a silent no-op.
    async fn delete_member(&self, id: i64) -> Result<()>;
}
