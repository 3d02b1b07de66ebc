//! Preview server: resolves and renders content on every request

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::ContentCategory;
use crate::generator::listing_categories;
use crate::helpers::url_for;
use crate::templates::TemplateRenderer;
use crate::{PageError, Site};

/// Server state
struct ServerState {
    site: Site,
    templates: TemplateRenderer,
}

type SharedState = Arc<ServerState>;

/// Build the preview router for a site
pub fn router(site: &Site) -> Result<Router> {
    let state = Arc::new(ServerState {
        site: site.clone(),
        templates: TemplateRenderer::new()?,
    });

    let mut app = Router::new().route("/", get(root_handler));

    for category in ContentCategory::ALL {
        let Some(prefix) = category.listing_prefix() else {
            continue;
        };

        let post = move |State(state): State<SharedState>, Path(slug): Path<String>, request: Request<Body>| async move {
            serve_content(state, vec![category], slug, request).await
        };
        app = app
            .route(&format!("{}/:slug", prefix), get(post))
            .route(&format!("{}/:slug/", prefix), get(post));
    }

    for category in listing_categories(&site.config) {
        if let Some(prefix) = category.listing_prefix() {
            let listing = move |State(state): State<SharedState>| async move {
                serve_listing(state, category).await
            };
            app = app
                .route(prefix, get(listing))
                .route(&format!("{}/", prefix), get(listing));
        }
    }

    let app = app
        .route("/:slug", get(page_handler))
        .route("/:slug/", get(page_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Start the preview server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
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

/// `/` forwards to the configured home page
async fn root_handler(State(state): State<SharedState>) -> Redirect {
    let config = &state.site.config;
    Redirect::temporary(&url_for(config, &format!("/{}/", config.home)))
}

/// Top-level slugs are pages first, then industry pages
async fn page_handler(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
    request: Request<Body>,
) -> Response {
    serve_content(
        state,
        vec![ContentCategory::Page, ContentCategory::IndustryPage],
        slug,
        request,
    )
    .await
}

async fn serve_content(
    state: SharedState,
    categories: Vec<ContentCategory>,
    slug: String,
    request: Request<Body>,
) -> Response {
    let worker = state.clone();
    let rendered = tokio::task::spawn_blocking(move || render_first(&worker, &categories, &slug)).await;

    match rendered {
        Ok(Ok(Some(html))) => Html(html).into_response(),
        // Nothing in the content store; the path may still be a static asset
        Ok(Ok(None)) => serve_static(state, request).await,
        Ok(Err(e)) => internal_error(e),
        Err(e) => internal_error(e.into()),
    }
}

/// Render the first category that holds `slug`; `None` when none does
fn render_first(state: &ServerState, categories: &[ContentCategory], slug: &str) -> Result<Option<String>> {
    for category in categories {
        match state.site.render_page(&state.templates, *category, slug) {
            Ok(html) => return Ok(Some(html)),
            Err(PageError::NotFound(e)) => {
                tracing::debug!("{}: {}", e, e.cause);
            }
            Err(PageError::Template(e)) => return Err(e),
        }
    }
    Ok(None)
}

async fn serve_listing(state: SharedState, category: ContentCategory) -> Response {
    let worker = state.clone();
    let rendered = tokio::task::spawn_blocking(move || {
        let posts = worker.site.resolver().list_all(category);
        worker
            .templates
            .render_listing(&worker.site.config, category, &posts)
    })
    .await;

    match rendered {
        Ok(Ok(html)) => Html(html).into_response(),
        Ok(Err(e)) => internal_error(e),
        Err(e) => internal_error(e.into()),
    }
}

/// Fallback handler that serves generated files and assets
async fn fallback_handler(State(state): State<SharedState>, request: Request<Body>) -> Response {
    serve_static(state, request).await
}

async fn serve_static(state: SharedState, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();

    let mut service = ServeDir::new(&state.site.public_dir).append_index_html_on_directories(true);
    match service.try_call(request).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.into_response(),
        Ok(_) => not_found(&state, &path),
        Err(e) => internal_error(e.into()),
    }
}

fn not_found(state: &ServerState, path: &str) -> Response {
    tracing::debug!("Not found: {}", path);
    match state.templates.render_not_found(&state.site.config, path) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render 404 page: {}", e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

fn internal_error(e: anyhow::Error) -> Response {
    tracing::error!("Request failed: {:#}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}
