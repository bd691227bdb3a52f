//! HTTP surface: router construction and request handlers.
//!
//! Every handler is a thin shim over the pure renderers; the only shared
//! state is the loaded site config.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tracing::debug;
use zfishdocs_content::{find_component, find_example};
use zfishdocs_render::{
    PreviewParams, SVG_CONTENT_TYPE, pages, render_og_image, render_robots, render_sitemap,
    render_twitter_image,
};
use zfishdocs_shared::SiteConfig;

/// Shared request state.
pub(crate) struct SiteState {
    pub config: SiteConfig,
}

impl SiteState {
    fn cache_control(&self) -> String {
        let max_age = self.config.server.cache_max_age;
        format!("public, max-age={max_age}, s-maxage={max_age}")
    }
}

/// Build the full site router.
pub(crate) fn build_router(config: SiteConfig) -> Router {
    let state = Arc::new(SiteState { config });

    Router::new()
        .route("/", get(home))
        .route("/getting-started", get(getting_started))
        .route("/components", get(components_index))
        .route("/components/{slug}", get(component_page))
        .route("/examples", get(examples_index))
        .route("/examples/{slug}", get(example_page))
        .route("/api", get(api_reference))
        .route("/api/og", get(og_image))
        .route("/api/twitter-og", get(twitter_image))
        .route("/robots", get(robots))
        .route("/sitemap", get(sitemap))
        .fallback(not_found)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Page handlers
// ---------------------------------------------------------------------------

async fn home(State(state): State<Arc<SiteState>>) -> Html<String> {
    Html(pages::render_home(&state.config))
}

async fn getting_started(State(state): State<Arc<SiteState>>) -> Html<String> {
    Html(pages::render_getting_started(&state.config))
}

async fn components_index(State(state): State<Arc<SiteState>>) -> Html<String> {
    Html(pages::render_components_index(&state.config))
}

async fn component_page(
    State(state): State<Arc<SiteState>>,
    Path(slug): Path<String>,
) -> Response {
    match find_component(&slug) {
        Some(component) => Html(pages::render_component(&state.config, component)).into_response(),
        None => {
            debug!(slug, "unknown component");
            (
                StatusCode::NOT_FOUND,
                Html(pages::render_not_found(
                    &state.config,
                    &format!("/components/{slug}"),
                )),
            )
                .into_response()
        }
    }
}

async fn examples_index(State(state): State<Arc<SiteState>>) -> Html<String> {
    Html(pages::render_examples_index(&state.config))
}

async fn example_page(State(state): State<Arc<SiteState>>, Path(slug): Path<String>) -> Response {
    match find_example(&slug) {
        Some(example) => Html(pages::render_example(&state.config, example)).into_response(),
        None => {
            debug!(slug, "unknown example");
            (
                StatusCode::NOT_FOUND,
                Html(pages::render_example_not_found(&state.config)),
            )
                .into_response()
        }
    }
}

async fn api_reference(State(state): State<Arc<SiteState>>) -> Html<String> {
    Html(pages::render_api_reference(&state.config))
}

// ---------------------------------------------------------------------------
// Preview images
// ---------------------------------------------------------------------------

async fn og_image(
    State(state): State<Arc<SiteState>>,
    Query(params): Query<PreviewParams>,
) -> Response {
    svg_response(&state, render_og_image(&params))
}

async fn twitter_image(
    State(state): State<Arc<SiteState>>,
    Query(params): Query<PreviewParams>,
) -> Response {
    svg_response(&state, render_twitter_image(&params))
}

fn svg_response(state: &SiteState, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE.to_string()),
            (header::CACHE_CONTROL, state.cache_control()),
        ],
        body,
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Crawler endpoints
// ---------------------------------------------------------------------------

async fn robots(State(state): State<Arc<SiteState>>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CACHE_CONTROL, state.cache_control()),
        ],
        render_robots(&state.config),
    )
        .into_response()
}

async fn sitemap(State(state): State<Arc<SiteState>>) -> Response {
    (
        [
            (
                header::CONTENT_TYPE,
                "application/xml; charset=utf-8".to_string(),
            ),
            (header::CACHE_CONTROL, state.cache_control()),
        ],
        render_sitemap(&state.config, Utc::now()),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

async fn not_found(State(state): State<Arc<SiteState>>, uri: Uri) -> Response {
    debug!(path = %uri.path(), "unknown route");
    (
        StatusCode::NOT_FOUND,
        Html(pages::render_not_found(&state.config, uri.path())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn request(path: &str) -> (StatusCode, String) {
        let router = build_router(SiteConfig::default());
        let response = router
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8"))
    }

    #[tokio::test]
    async fn home_page_serves_html() {
        let (status, body) = request("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!doctype html>"));
        assert!(body.contains("cargo add zfish"));
    }

    #[tokio::test]
    async fn component_and_example_pages_resolve() {
        let (status, body) = request("/components/tables").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Tables"));

        let (status, body) = request("/examples/01_hello_world").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Hello World"));
    }

    #[tokio::test]
    async fn example_lookup_falls_back_to_trailing_ordinal() {
        let (status, body) = request("/examples/example-10").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Advanced Args"));
    }

    #[tokio::test]
    async fn unknown_example_renders_placeholder_with_404() {
        let (status, body) = request("/examples/99_no_such_thing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Example not found"));
    }

    #[tokio::test]
    async fn og_image_defaults_and_overrides() {
        let (status, body) = request("/api/og").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"width="1200" height="630""#));
        assert!(body.contains("ZFish - Ultra-Light CLI"));

        let (_, body) = request("/api/og?title=Foo&description=Bar").await;
        assert!(body.contains(">Foo</text>"));
        assert!(body.contains(">Bar</text>"));
    }

    #[tokio::test]
    async fn twitter_image_has_card_dimensions() {
        let (status, body) = request("/api/twitter-og").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"width="1200" height="600""#));
    }

    #[tokio::test]
    async fn og_responses_carry_svg_and_cache_headers() {
        let router = build_router(SiteConfig::default());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/og")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
        assert_eq!(
            headers[header::CACHE_CONTROL],
            "public, max-age=3600, s-maxage=3600"
        );
    }

    #[tokio::test]
    async fn sitemap_carries_xml_and_cache_headers() {
        let router = build_router(SiteConfig::default());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/sitemap")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "application/xml; charset=utf-8");
        assert_eq!(
            headers[header::CACHE_CONTROL],
            "public, max-age=3600, s-maxage=3600"
        );
    }

    #[tokio::test]
    async fn robots_points_at_sitemap() {
        let (status, body) = request("/robots").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sitemap: https://zfish-devdocs.vercel.app/sitemap"));
        assert!(body.contains("User-agent: GPTBot"));
    }

    #[tokio::test]
    async fn sitemap_lists_home_with_top_priority() {
        let (status, body) = request("/sitemap").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(body.contains(
            "<loc>https://zfish-devdocs.vercel.app</loc>"
        ));
        assert!(body.contains("<priority>1</priority>"));
    }

    #[tokio::test]
    async fn unknown_route_renders_404_page() {
        let (status, body) = request("/no/such/page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }
}
