//! Development server: serves the post list, reloaded on every request

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::BuildMode;
use crate::Site;

/// Server state
struct ServerState {
    site: Site,
    mode: BuildMode,
}

/// Build the router for a site
pub fn router(site: Site, mode: BuildMode) -> Router {
    let data_route = format!("/{}", site.config.data_file.trim_start_matches('/'));
    let state = Arc::new(ServerState { site, mode });

    Router::new()
        .route("/", get(index_handler))
        .route(&data_route, get(posts_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the development server
pub async fn start(site: &Site, mode: BuildMode, ip: &str, port: u16) -> Result<()> {
    let app = router(site.clone(), mode);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!(
        "Serving posts at http://{}:{}/{} ({} mode)",
        ip, port, site.config.data_file, mode
    );
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fresh load of all posts; file I/O runs off the async workers
async fn load_posts(state: Arc<ServerState>) -> Response {
    let result = tokio::task::spawn_blocking(move || state.site.posts(state.mode)).await;

    match result {
        Ok(Ok(posts)) => Json(posts).into_response(),
        Ok(Err(e)) => {
            tracing::error!("Failed to load posts: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)).into_response()
        }
        Err(e) => {
            tracing::error!("Loader task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Loader task failed").into_response()
        }
    }
}

async fn posts_handler(State(state): State<Arc<ServerState>>) -> Response {
    load_posts(state).await
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> String {
    let config = &state.site.config;
    format!(
        "{}\n{}\nmode: {}\nposts: /{}\n",
        config.title, config.description, state.mode, config.data_file
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use axum::body::to_bytes;
    use std::fs;
    use tempfile::TempDir;

    fn state(dir: &TempDir, mode: BuildMode) -> Arc<ServerState> {
        let site = Site::with_config(dir.path().to_path_buf(), SiteConfig::default());
        Arc::new(ServerState { site, mode })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_posts_are_reloaded_per_request() {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("src/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(blog.join("first.md"), "---\ntitle: First\n---\n").unwrap();

        let state = state(&dir, BuildMode::Development);

        let response = posts_handler(State(state.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

        fs::write(blog.join("second.md"), "---\ntitle: Second\nwip: true\n---\n").unwrap();

        let json = body_json(posts_handler(State(state)).await).await;
        let posts = json.as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1]["title"], "Second 🚧");
    }

    #[tokio::test]
    async fn test_broken_post_is_server_error() {
        let dir = TempDir::new().unwrap();
        let blog = dir.path().join("src/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(blog.join("bad.md"), "---\ntitle: [oops\n---\n").unwrap();

        let response = posts_handler(State(state(&dir, BuildMode::Production))).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_index_mentions_mode() {
        let dir = TempDir::new().unwrap();
        let body = index_handler(State(state(&dir, BuildMode::Production))).await;
        assert!(body.contains("mode: production"));
        assert!(body.contains("/blog.data.json"));
    }
}
