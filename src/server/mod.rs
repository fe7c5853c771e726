//! HTTP server for the portfolio site
//!
//! Every page is rendered per request; blog routes re-read the posts
//! directory each time, so edits on disk show up on the next refresh
//! without any rebuild step.

mod error;

pub use error::AppError;

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Context;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::catalog::ProjectCatalog;
use crate::content::{build_index, MarkdownRenderer, Post};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Shared, read-only server state
struct ServerState {
    site: Site,
    catalog: ProjectCatalog,
    templates: TemplateRenderer,
    renderer: MarkdownRenderer,
}

impl ServerState {
    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site.config);
        context
    }

    fn page(&self, template: &str, context: &Context) -> Result<Html<String>, AppError> {
        Ok(Html(self.templates.render(template, context)?))
    }

    fn not_found_page(&self) -> Result<Response, AppError> {
        let html = self.templates.render("not_found.html", &self.base_context())?;
        Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
    }
}

/// Optional `?q=` search parameter shared by the list routes
#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

impl SearchParams {
    fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

/// Start the site server
pub async fn start(site: &Site, ip: &str, port: u16, open: bool) -> Result<()> {
    let catalog = ProjectCatalog::load(site.catalog_path())?;
    tracing::info!("loaded {} project(s) from the catalog", catalog.len());

    let state = Arc::new(ServerState {
        site: site.clone(),
        catalog,
        templates: TemplateRenderer::new()?,
        renderer: MarkdownRenderer::new(),
    });

    let manifest = site.static_dir.join("manifest.json");
    let app = Router::new()
        .route("/", get(home))
        .route("/cv", get(cv))
        .route("/projects", get(projects_index))
        .route("/projects/:slug", get(project_detail))
        .route("/blog", get(blog_index))
        .route("/blog/:slug", get(blog_post))
        .route_service("/manifest.json", ServeFile::new(manifest))
        .nest_service("/static", ServeDir::new(&site.static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Handle "localhost" specially so the bind address still parses
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Serving {} at {}", site.config.title, url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn home(State(state): State<Arc<ServerState>>) -> Result<Html<String>, AppError> {
    state.page("home.html", &state.base_context())
}

async fn cv(State(state): State<Arc<ServerState>>) -> Result<Html<String>, AppError> {
    state.page("cv.html", &state.base_context())
}

async fn projects_index(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let projects = state.catalog.filter(params.query());

    let mut context = state.base_context();
    context.insert("projects", &projects);
    context.insert("query", &params.q);
    state.page("projects.html", &context)
}

async fn project_detail(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    match state.catalog.get(&slug) {
        Some(project) => {
            let mut context = state.base_context();
            context.insert("project", project);
            Ok(state.page("project.html", &context)?.into_response())
        }
        None => state.not_found_page(),
    }
}

async fn blog_index(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let posts = build_index(&state.site.posts_dir, params.query());

    let mut context = state.base_context();
    context.insert("posts", &posts);
    context.insert("query", &params.q);
    state.page("blog.html", &context)
}

async fn blog_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    match Post::load(&state.site.posts_dir, &slug, &state.renderer)? {
        Some(post) => {
            let mut context = state.base_context();
            context.insert("post", &post);
            Ok(state.page("post.html", &context)?.into_response())
        }
        None => state.not_found_page(),
    }
}

/// Fallback for routes the site does not define
async fn not_found(State(state): State<Arc<ServerState>>) -> Result<Response, AppError> {
    state.not_found_page()
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
