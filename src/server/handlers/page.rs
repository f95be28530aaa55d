//! The rescue page handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::template_structs::{ErrorTemplate, IndexTemplate};
use super::super::AppState;
use super::params::RescueParams;

/// Render the page for the submitted inputs.
pub async fn rescue_page(
    State(state): State<AppState>,
    Query(params): Query<RescueParams>,
) -> Response {
    let inputs = params.inputs();
    let session = params.session();

    match state.shell.render(&inputs, &session).await {
        Ok(outcome) => {
            let template = IndexTemplate::new(&inputs, &session, &outcome);
            match template.render() {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    tracing::error!("Template error: {}", e);
                    error_page(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
                }
            }
        }
        Err(e) => {
            tracing::error!("Render failed: {}", e);
            error_page(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

fn error_page(status: StatusCode, message: &str) -> Response {
    let template = ErrorTemplate {
        title: "Something went wrong",
        message,
    };
    let html = template.render().unwrap_or_else(|_| message.to_string());
    (status, Html(html)).into_response()
}
