use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Template wrapper that converts Askama templates into HTML responses.
pub(crate) struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Landing page template.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

/// Handler for the landing page (GET /).
pub async fn index() -> impl IntoResponse {
    HtmlTemplate(IndexTemplate)
}
