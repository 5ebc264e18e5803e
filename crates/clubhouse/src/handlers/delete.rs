//! Account deletion handler.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::{handlers::AppError, state::AppState};

/// Handler for GET /delete/{id}.
///
/// No existence check: deleting an id that was never registered (or was
/// already deleted) silently succeeds and still redirects home.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.members.delete_member(id).await?;

    tracing::info!(member_id = id, "Deleted member");

    Ok(Redirect::to("/"))
}
