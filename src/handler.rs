use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// Every path takes the same route: consult the greeter and answer with
/// whatever it decides. Generic over the request body because the body is
/// never read.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path();

    let reply = state.greeter.reply(path);
    let status = reply.status();
    let body = reply.into_body();

    if state.logging.access_log {
        let mut entry = logger::AccessLogEntry::new(
            peer_addr.to_string(),
            req.method().to_string(),
            path.to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = logger::http_version_label(req.version()).to_string();
        entry.status = status.as_u16();
        entry.body_bytes = body.len();
        logger::log_access(&entry, &state.logging.access_log_format);
    }

    Ok(http::build_text_response(status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig, WarmupConfig};
    use http_body_util::BodyExt;
    use hyper::StatusCode;
    use std::time::Instant;

    fn test_state(window_secs: u64) -> Arc<AppState> {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            warmup: WarmupConfig { window_secs },
            logging: LoggingConfig {
                access_log: false,
                access_log_format: "common".to_string(),
            },
        };
        Arc::new(AppState::new(&config, Instant::now()))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_rejects_inside_warmup_window() {
        let req = Request::builder().uri("/").body(()).unwrap();
        let response = handle_request(req, peer(), test_state(120)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Server Error");
    }

    #[tokio::test]
    async fn test_greets_when_gate_disabled() {
        let req = Request::builder().uri("/foo").body(()).unwrap();
        let response = handle_request(req, peer(), test_state(0)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "(1.3) Hello, \"/foo\"");
    }

    #[tokio::test]
    async fn test_query_not_part_of_greeting() {
        let req = Request::builder().uri("/a?b=c").body(()).unwrap();
        let response = handle_request(req, peer(), test_state(0)).await.unwrap();
        assert_eq!(body_string(response).await, "(1.3) Hello, \"/a\"");
    }

    #[tokio::test]
    async fn test_any_method_served() {
        let req = Request::builder()
            .method("POST")
            .uri("/foo")
            .body(())
            .unwrap();
        let response = handle_request(req, peer(), test_state(0)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "(1.3) Hello, \"/foo\"");
    }

    #[tokio::test]
    async fn test_encoded_path_decoded_and_escaped() {
        let req = Request::builder().uri("/%3Cscript%3E").body(()).unwrap();
        let response = handle_request(req, peer(), test_state(0)).await.unwrap();
        assert_eq!(
            body_string(response).await,
            "(1.3) Hello, \"/&lt;script&gt;\""
        );
    }

    #[tokio::test]
    async fn test_access_log_enabled_still_serves() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            warmup: WarmupConfig { window_secs: 0 },
            logging: LoggingConfig {
                access_log: true,
                access_log_format: "json".to_string(),
            },
        };
        let state = Arc::new(AppState::new(&config, Instant::now()));
        let req = Request::builder().uri("/logged?x=1").body(()).unwrap();
        let response = handle_request(req, peer(), state).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
