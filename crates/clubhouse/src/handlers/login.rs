//! Login handlers.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use clubhouse_core::member::{normalize_email, trim_field};

use crate::{
    handlers::{error::error_page, pages::HtmlTemplate, AppError},
    models::LoginForm,
    state::AppState,
};

/// Login form template.
#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate;

/// Handler for GET /login.
pub async fn login_form() -> impl IntoResponse {
    HtmlTemplate(LoginTemplate)
}

/// Handler for POST /login.
///
/// Email is lowercased before the lookup, which is what makes login
/// case-insensitive: stored emails are normalized the same way at
/// registration and edit. There is no session; the matched id travels in
/// the redirect URL.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let email = normalize_email(&form.email);
    let password = trim_field(&form.password);

    if email.is_empty() || password.is_empty() {
        return Ok(error_page(
            StatusCode::BAD_REQUEST,
            "Email and password are required",
        ));
    }

    match state.members.find_by_credentials(&email, &password).await? {
        Some(member) => {
            tracing::info!(member_id = member.id, "Member logged in");
            Ok(Redirect::to(&format!("/welcome/{}", member.id)).into_response())
        }
        None => Ok(error_page(
            StatusCode::UNAUTHORIZED,
            "Email or password incorrect",
        )),
    }
}
