use axum::extract::{Request, State};
use axum::http::Method;
use axum::response::{Html, IntoResponse, Response};
use tower::ServiceExt;

use crate::state::AppState;
use crate::{games, sounds};

/// Path prefix that selects game discovery. Query strings never reach the
/// match because `Uri::path()` excludes them.
const GAME_LIST_PREFIX: &str = "/list-games";

/// Single entry point for every request, installed as the router fallback.
///
/// GET requests are matched in priority order: game discovery, sound listing,
/// then the static file service. A failed sound listing logs and falls
/// through to static serving with the original request. Non-GET requests go
/// straight to the static service, which answers 405 for methods it does not
/// support.
pub async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    if req.method() == Method::GET {
        let path = req.uri().path();
        if path.starts_with(GAME_LIST_PREFIX) {
            return games::list_games(&state).await.into_response();
        }
        if sounds::is_listing_path(path) {
            match sounds::render_listing(state.web_root(), path).await {
                Ok(page) => return Html(page).into_response(),
                Err(e) => {
                    tracing::warn!(
                        path,
                        error = %e,
                        "Sound listing failed, deferring to static files"
                    );
                },
            }
        }
    }
    serve_static(&state, req).await
}

/// Hand the request to the static file service.
async fn serve_static(state: &AppState, req: Request) -> Response {
    match state.assets().oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(infallible) => match infallible {},
    }
}
