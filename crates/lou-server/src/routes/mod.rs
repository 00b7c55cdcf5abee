// Export route modules
pub mod chat;

use crate::error::method_not_allowed;
use crate::state::AppState;
use axum::{
    extract::Request,
    http::{
        header::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN},
        Method,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// Only an OPTIONS carrying both headers is a preflight for the CORS layer to answer
async fn reject_plain_options(request: Request, next: Next) -> Response {
    let headers = request.headers();
    let is_preflight =
        headers.contains_key(ORIGIN) && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD);

    if request.method() == Method::OPTIONS && !is_preflight {
        return method_not_allowed().await.into_response();
    }
    next.run(request).await
}

// Function to configure all routes
pub fn configure(state: AppState) -> Router {
    // The only client is a browser page
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(chat::routes(state))
        .layer(cors)
        .layer(middleware::from_fn(reject_plain_options))
        .layer(TraceLayer::new_for_http())
}
