//! HTTP route table
//!
//! - `POST /s/` publishes a message to a room
//! - `GET /n/{room}` streams a room as server-sent events
//! - anything else is served from the static directory

use std::convert::Infallible;
use std::sync::Arc;

use warp::{Filter, Rejection, Reply};

use crate::registry::ChannelRegistry;
use crate::server::config::ServerConfig;
use crate::server::handlers;
use crate::server::shutdown::ShutdownSignal;

/// Build the relay's filters
pub fn routes(
    registry: Arc<ChannelRegistry>,
    shutdown: ShutdownSignal,
    config: &ServerConfig,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let publish = warp::path("s")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(config.max_body_size))
        .and(warp::body::bytes())
        .and(with(Arc::clone(&registry)))
        .and_then(handlers::publish);

    let stream = warp::path("n")
        .and(warp::path::tail())
        .and(warp::get())
        .and(with(registry))
        .and(with(shutdown))
        .and(with(config.keep_alive))
        .and_then(handlers::stream);

    let static_files = warp::get().and(warp::fs::dir(config.static_dir.clone()));

    publish
        .or(stream)
        .or(static_files)
        .with(warp::trace::request())
}

fn with<T: Clone + Send>(t: T) -> impl Filter<Extract = (T,), Error = Infallible> + Clone {
    warp::any().map(move || t.clone())
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use warp::http::StatusCode;

    use super::*;
    use crate::server::shutdown::Shutdown;

    fn setup() -> (
        Arc<ChannelRegistry>,
        impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone,
    ) {
        let registry = Arc::new(ChannelRegistry::new());
        let shutdown = Shutdown::new();
        let filter = routes(
            Arc::clone(&registry),
            shutdown.to_signal(),
            &ServerConfig::default(),
        );
        (registry, filter)
    }

    #[tokio::test]
    async fn test_publish_delivers_to_subscriber() {
        let (registry, filter) = setup();
        let room = registry.channel_name("lobby").unwrap();
        let mut reader = registry.subscribe(&room).await;

        let response = warp::test::request()
            .method("POST")
            .path("/s/")
            .body(r#"{"Room": "lobby", "Msg": "hello"}"#)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(reader.read().await, Some(Bytes::from_static(b"hello")));
    }

    #[tokio::test]
    async fn test_publish_without_room() {
        let (registry, filter) = setup();

        let response = warp::test::request()
            .method("POST")
            .path("/s/")
            .body(r#"{"Msg": "hello"}"#)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), "Bad Request Error: No Room");
        assert_eq!(registry.channel_count().await, 0);
    }

    #[tokio::test]
    async fn test_publish_without_msg() {
        let (_registry, filter) = setup();

        let response = warp::test::request()
            .method("POST")
            .path("/s/")
            .body(r#"{"Room": "lobby", "Msg": ""}"#)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), "Bad Request Error: No Msg");
    }

    #[tokio::test]
    async fn test_publish_malformed_body() {
        let (_registry, filter) = setup();

        let response = warp::test::request()
            .method("POST")
            .path("/s/")
            .body("not json")
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), "Bad Request Error: No Room");
    }

    #[tokio::test]
    async fn test_publish_to_closed_room() {
        let (registry, filter) = setup();
        let room = registry.channel_name("lobby").unwrap();
        registry.get_or_create(&room).await;
        registry.close(&room).await;

        let response = warp::test::request()
            .method("POST")
            .path("/s/")
            .body(r#"{"Room": "lobby", "Msg": "hello"}"#)
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_stream_rejects_nested_room() {
        let (registry, filter) = setup();

        let response = warp::test::request()
            .path("/n/a/b")
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), "Bad Request Error: wrong room name");
        assert_eq!(registry.channel_count().await, 0);
    }

    #[tokio::test]
    async fn test_stream_of_closed_room() {
        let (registry, filter) = setup();
        let room = registry.channel_name("lobby").unwrap();
        registry.get_or_create(&room).await;
        registry.close(&room).await;

        let response = warp::test::request()
            .path("/n/lobby")
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/event-stream"
        );
        assert!(response.body().is_empty());
    }
}
