use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use clubhouse_core::storage::{repository_error_to_status_code, RepositoryError};

/// Shared error page carrying a human-readable message.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    message: String,
}

/// Renders the shared error page with the given status and message.
///
/// Validation and conflict failures go through here so the user always sees
/// a rendered view rather than a bare status line.
pub fn error_page(status: StatusCode, message: impl Into<String>) -> Response {
    let template = ErrorTemplate {
        message: message.into(),
    };
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render template: {err}"),
        )
            .into_response(),
    }
}

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        error_page(status_code, self.0.to_string())
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
