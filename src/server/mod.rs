//! Local preview server
//!
//! Pages are rendered on every request, so the server never serves stale
//! output and needs no generated public directory.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::PageId;
use crate::error::Result;
use crate::render::Renderer;
use crate::templates::STYLESHEET;
use crate::Site;

/// Server state
struct ServerState {
    renderer: Renderer,
}

/// Build the router serving the pages and their stylesheet
pub fn router(site: &Site) -> Result<Router> {
    let state = Arc::new(ServerState {
        renderer: Renderer::new(&site.config)?,
    });

    Ok(Router::new()
        .route("/", get(index_handler))
        .route("/css/pages.css", get(stylesheet_handler))
        .route("/:page", get(page_handler))
        .route("/:page/", get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Start the preview server
pub async fn start(site: &Site, ip: &str, port: u16) -> anyhow::Result<()> {
    let app = router(site)?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    render_page(&state, PageId::About)
}

async fn page_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match slug.parse::<PageId>() {
        Ok(page) => render_page(&state, page),
        Err(e) => {
            tracing::debug!("{}", e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

fn render_page(state: &ServerState, page: PageId) -> Response {
    match state.renderer.render(page) {
        Ok(rendered) => Html(rendered.html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render {}: {}", page, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, String) {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let response = router(&site)
            .unwrap()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_pages() {
        let (status, body) = get("/technologies/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches(r#"<li class="textItem">"#).count(), 8);

        let (status, body) = get("/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("https://t.me/FuntikPiggy"));
    }

    #[tokio::test]
    async fn test_index_is_about() {
        let (_, index) = get("/").await;
        let (_, about) = get("/about/").await;
        assert_eq!(index, about);
    }

    #[tokio::test]
    async fn test_unknown_page() {
        let (status, _) = get("/recipes/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stylesheet() {
        let (status, body) = get("/css/pages.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(".textLink"));
    }
}
