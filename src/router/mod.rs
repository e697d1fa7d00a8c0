use crate::app::{render_document, render_view};
use crate::components::{ErrorPage, NotFound, PROFILE_PATH};
use crate::model::AppState;
use crate::pages::{ProfilePage, render_user_list};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use leptos::prelude::*;
use tower_http::trace::TraceLayer;

pub fn new(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(user_list))
        .route(PROFILE_PATH, get(profile))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn user_list(State(state): State<AppState>) -> Response {
    match render_user_list(&state).await {
        Ok(body) => Html(render_document("User List", body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "could not render the user list");
            let status = StatusCode::from_u16(e.to_status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let message = e.to_string();
            let body = render_view(move || {
                view! { <ErrorPage status=status.as_u16() message /> }
            });
            (status, Html(render_document("Error", body))).into_response()
        }
    }
}

async fn profile() -> Html<String> {
    let body = render_view(|| view! { <ProfilePage /> });
    Html(render_document("Profile", body))
}

async fn not_found() -> impl IntoResponse {
    let body = render_view(|| view! { <NotFound /> });
    (
        StatusCode::NOT_FOUND,
        Html(render_document("Not found", body)),
    )
}
