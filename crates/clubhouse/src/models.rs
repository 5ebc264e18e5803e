//! Form payloads submitted by the browser.
//!
//! Every field defaults to an empty string when absent, mirroring permissive
//! form handling: presence checks happen in the handlers after trimming, not
//! during extraction.

use serde::Deserialize;

/// Payload for POST /register.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub birthdate: String,
}

/// Payload for POST /login.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Payload for POST /edit_profile/{id}. Username is immutable and not part
/// of the form.
#[derive(Debug, Default, Deserialize)]
pub struct EditProfileForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub birthdate: String,
}
