//! Welcome and edit-profile handlers.
//!
//! Identity is carried only by the id in the URL; anyone who can construct
//! that URL can view or edit the member. Deliberate simplification - do not
//! add authorization here without changing the observable contract.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use clubhouse_core::member::{decorate_username, normalize_email, trim_field, Member, ProfileUpdate};

use crate::{
    handlers::{error::error_page, pages::HtmlTemplate, AppError},
    models::EditProfileForm,
    state::AppState,
};

/// Welcome page template.
#[derive(Template)]
#[template(path = "welcome.html")]
struct WelcomeTemplate {
    member: Member,
    /// Username decorated for display, e.g. `★alice★`.
    display_name: String,
}

/// Edit-profile form template, pre-filled with the current values.
#[derive(Template)]
#[template(path = "edit_profile.html")]
struct EditProfileTemplate {
    member: Member,
}

/// Handler for GET /welcome/{id}.
pub async fn welcome(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(member) = state.members.get_member(id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let display_name = decorate_username(&member.username);

    Ok(HtmlTemplate(WelcomeTemplate {
        member,
        display_name,
    })
    .into_response())
}

/// Handler for GET /edit_profile/{id}.
pub async fn edit_profile_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(member) = state.members.get_member(id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    Ok(HtmlTemplate(EditProfileTemplate { member }).into_response())
}

/// Handler for POST /edit_profile/{id}.
///
/// The email collision pre-check excludes the member's own row, so keeping
/// the current email always succeeds. As with registration, the UNIQUE
/// constraint backs the pre-check against concurrent edits.
pub async fn edit_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EditProfileForm>,
) -> Result<Response, AppError> {
    if state.members.get_member(id).await?.is_none() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let email = normalize_email(&form.email);
    let password = trim_field(&form.password);
    let phone = trim_field(&form.phone);
    let birthdate = trim_field(&form.birthdate);

    if email.is_empty() || password.is_empty() {
        return Ok(error_page(
            StatusCode::BAD_REQUEST,
            "Email and password are required",
        ));
    }

    if state.members.email_taken_by_other(&email, id).await? {
        return Ok(error_page(StatusCode::CONFLICT, "Email already in use"));
    }

    state
        .members
        .update_profile(
            id,
            &ProfileUpdate {
                email,
                password,
                phone,
                birthdate,
            },
        )
        .await?;

    tracing::info!(member_id = id, "Updated member profile");

    Ok(Redirect::to(&format!("/welcome/{id}")).into_response())
}
