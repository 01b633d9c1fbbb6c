use crate::app_context::AppContext;
use crate::cli::Args;
use crate::{health, memes};
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use http::StatusCode;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

fn meme_route() -> MethodRouter<AppContext> {
    post(memes::handlers::create).fallback(memes::handlers::method_not_allowed)
}

pub fn new(args: &Args, app_context: AppContext) -> Router {
    // `POST /health/check` still captions the `health` template.
    let health_routes = Router::new().route(
        "/check",
        get(health::handlers::healthcheck)
            .post(memes::handlers::create)
            .fallback(memes::handlers::method_not_allowed),
    );

    let router = Router::new()
        .route("/", meme_route())
        .route("/:image_id", meme_route())
        .route("/:image_id/", meme_route())
        .route("/:image_id/*rest", meme_route())
        .nest("/health", health_routes)
        .fallback(memes::handlers::not_found)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
                .layer(axum::middleware::map_response(
                    crate::http::middleware::envelope_timeouts,
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    args.request_timeout(),
                )),
        );
    tracing::info!("Initialized HTTP routes.");
    router
}
