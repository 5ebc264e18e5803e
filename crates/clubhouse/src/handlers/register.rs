//! Registration handlers.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use clubhouse_core::member::{normalize_email, trim_field, NewMember};

use crate::{
    handlers::{error::error_page, pages::HtmlTemplate, AppError},
    models::RegisterForm,
    state::AppState,
};

/// Registration form template.
#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate;

/// Handler for GET /register.
pub async fn register_form() -> impl IntoResponse {
    HtmlTemplate(RegisterTemplate)
}

/// Handler for POST /register.
///
/// The username pre-check exists for the friendlier message; the UNIQUE
/// constraints on username and email remain the actual safety net if a
/// concurrent registration slips between check and insert.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let username = trim_field(&form.username);
    let email = normalize_email(&form.email);
    let password = trim_field(&form.password);
    let phone = trim_field(&form.phone);
    let birthdate = trim_field(&form.birthdate);

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Ok(error_page(
            StatusCode::BAD_REQUEST,
            "Username, email and password are required",
        ));
    }

    if state.members.username_exists(&username).await? {
        return Ok(error_page(StatusCode::CONFLICT, "Username already exists"));
    }

    let member = state
        .members
        .create_member(&NewMember {
            username,
            email,
            password,
            phone,
            birthdate,
        })
        .await?;

    tracing::info!(member_id = member.id, "Registered new member");

    Ok(Redirect::to("/login").into_response())
}
