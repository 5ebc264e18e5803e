use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        delete::delete,
        login::{login, login_form},
        pages::index,
        profile::{edit_profile, edit_profile_form, welcome},
        register::{register, register_form},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/welcome/{id}", get(welcome))
        .route("/edit_profile/{id}", get(edit_profile_form).post(edit_profile))
        .route("/delete/{id}", get(delete))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
