//! Tunegraph Web Server
//!
//! Axum-based server for the graph explorer, the read-only session API and
//! the built front-end.

pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use tunegraph_core::config::ServerConfig;

pub use error::ApiError;
pub use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let graph_routes = Router::new()
        .route("/tune", get(routes::graph::tune_graph))
        .route("/set", get(routes::graph::set_graph));

    let api_routes = Router::new()
        // Tunes
        .route("/tunes", get(routes::tunes::list_tunes))
        .route("/tunes/{id}", get(routes::tunes::get_tune))
        .route("/tunes/{id}/sets", get(routes::tunes::list_tune_sets))
        // Sets
        .route("/sets/{id}", get(routes::sets::get_set))
        // Sessions
        .route("/sessions", get(routes::sessions::list_sessions))
        .route("/sessions/{id}/sets", get(routes::sessions::list_session_sets));

    Router::new()
        .nest("/graph", graph_routes)
        .nest("/api", api_routes)
        .route("/health", get(routes::health::health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_router(state, &config.static_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use tunegraph_db::DbPool;
    use tunegraph_graph::{EntityKind, GraphEntity, GraphError, NeighborhoodSource, PathRecord};

    /// Canned neighborhood source recording the lookups it receives.
    #[derive(Default)]
    struct FakeSource {
        records: Vec<PathRecord>,
        fail: bool,
        calls: Mutex<Vec<(EntityKind, String)>>,
    }

    #[async_trait]
    impl NeighborhoodSource for FakeSource {
        async fn fetch_neighborhood(
            &self,
            focus: EntityKind,
            key: &str,
        ) -> Result<Vec<PathRecord>, GraphError> {
            self.calls.lock().unwrap().push((focus, key.to_string()));
            if self.fail {
                return Err(GraphError::Connection("connection refused".to_string()));
            }
            Ok(self
                .records
                .iter()
                .filter(|r| r.focal.label == key)
                .cloned()
                .collect())
        }
    }

    fn drowsy_maggie() -> PathRecord {
        PathRecord {
            focal: GraphEntity::new(1, "Drowsy Maggie"),
            first_hop: vec![
                GraphEntity::new(101, "Drowsy Maggie, The Blarney Pilgrim"),
                GraphEntity::new(102, "Drowsy Maggie, Cooley's"),
            ],
            second_hop: vec![
                GraphEntity::new(1, "Drowsy Maggie"),
                GraphEntity::new(2, "The Blarney Pilgrim"),
                GraphEntity::new(3, "Cooley's"),
            ],
        }
    }

    fn seeded_db() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        pool.with_conn(|conn| {
            conn.execute_batch(
                "INSERT INTO Tune (tune_id, name, tune_mode) VALUES
                     (1, 'Drowsy Maggie', 'Edorian'), (3, 'Cooley''s', 'Edorian');
                 INSERT INTO SetTable (set_id, description) VALUES (102, 'Drowsy Maggie, Cooley''s');
                 INSERT INTO TuneToSet (tune_id, set_id, tune_index) VALUES (3, 102, 2), (1, 102, 1);
                 INSERT INTO Session (session_id, session_date) VALUES (1, '2024-07-18');
                 INSERT INTO SetToSession (session_id, set_id, set_index) VALUES (1, 102, 1);",
            )?;
            Ok(())
        })
        .unwrap();
        pool
    }

    fn app(source: Arc<FakeSource>) -> Router {
        let state = AppState::new(seeded_db(), source);
        create_router(state, &PathBuf::from("/nonexistent/dist"))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_tune_graph_returns_folded_neighborhood() {
        let source = Arc::new(FakeSource {
            records: vec![drowsy_maggie()],
            ..Default::default()
        });
        let resp = get(app(source.clone()), "/graph/tune?tuneName=Drowsy%20Maggie").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["nodes"].as_array().unwrap().len(), 5);
        assert_eq!(json["nodes"][0]["color"]["background"], "yellow");
        assert!(json["edges"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!({"from": 2, "to": 101})));

        let calls = source.calls.lock().unwrap();
        assert_eq!(calls[0], (EntityKind::Tune, "Drowsy Maggie".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_focal_is_empty_ok() {
        let source = Arc::new(FakeSource::default());
        let resp = get(app(source), "/graph/tune?tuneName=Nobody").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, r#"{"nodes":[],"edges":[]}"#);
    }

    #[tokio::test]
    async fn test_missing_tune_name_is_401() {
        let source = Arc::new(FakeSource::default());
        let resp = get(app(source.clone()), "/graph/tune").await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(resp).await, "tuneName required");

        let resp = get(app(source.clone()), "/graph/tune?tuneName=").await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(source.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_set_name_is_401() {
        let resp = get(app(Arc::new(FakeSource::default())), "/graph/set?tuneName=x").await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(resp).await, "setName required");
    }

    #[tokio::test]
    async fn test_set_graph_uses_set_focus() {
        let source = Arc::new(FakeSource::default());
        let resp = get(
            app(source.clone()),
            "/graph/set?setName=Drowsy%20Maggie%2C%20Cooley%27s",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let calls = source.calls.lock().unwrap();
        assert_eq!(calls[0], (EntityKind::Set, "Drowsy Maggie, Cooley's".to_string()));
    }

    #[tokio::test]
    async fn test_store_failure_is_500_with_error() {
        let source = Arc::new(FakeSource {
            fail: true,
            ..Default::default()
        });
        let resp = get(app(source), "/graph/set?setName=anything").await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(resp).await;
        assert!(json["error"].as_str().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_relational_routes() {
        let source = Arc::new(FakeSource::default());

        let resp = get(app(source.clone()), "/api/tunes?name=Maggie").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["name"], "Drowsy Maggie");

        let resp = get(app(source.clone()), "/api/sets/102").await;
        let json = body_json(resp).await;
        assert_eq!(json["tunes"][0]["name"], "Drowsy Maggie");
        assert_eq!(json["tunes"][1]["tune_index"], 2);

        let resp = get(app(source.clone()), "/api/sessions/1/sets").await;
        let json = body_json(resp).await;
        assert_eq!(json[0]["set_id"], 102);
        assert_eq!(json[0]["set_index"], 1);

        let resp = get(app(source.clone()), "/api/tunes/3/sets").await;
        let json = body_json(resp).await;
        assert_eq!(json[0]["description"], "Drowsy Maggie, Cooley's");
    }

    #[tokio::test]
    async fn test_relational_not_found_is_404() {
        let source = Arc::new(FakeSource::default());
        let resp = get(app(source.clone()), "/api/tunes/999").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Tune not found: 999");

        let resp = get(app(source), "/api/sessions/5/sets").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let resp = get(app(Arc::new(FakeSource::default())), "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }
}
