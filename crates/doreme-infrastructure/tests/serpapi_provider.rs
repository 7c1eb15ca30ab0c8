use doreme_core::feed::{FeedProvider, fallback_feed_items};
use doreme_infrastructure::SerpApiFeedProvider;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

fn provider() -> SerpApiFeedProvider {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    SerpApiFeedProvider::new("test-key").with_client(client)
}

/// Serves exactly one HTTP response and reports the request head it received.
async fn serve_once(status_line: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&buf).to_string());

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    (format!("http://{addr}/search"), rx)
}

#[tokio::test]
async fn test_success_maps_results_and_sends_expected_query() {
    let body = r#"{"video_results":[{"channel":{"name":"Smooth Jazz Cafe"},"title":"Evening jazz","link":"https://y/1","thumbnail":"https://t/1"}]}"#;
    let (url, request) = serve_once("HTTP/1.1 200 OK", body.to_string()).await;

    let provider = provider().with_base_url(url);
    let items = provider.search("jazz piano").await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "serp-0");
    assert_eq!(items[0].handle, "@smoothjazzcafe");

    let head = request.await.unwrap();
    let request_line = head.lines().next().unwrap();
    assert!(request_line.starts_with("GET /search?"));
    assert!(request_line.contains("engine=youtube"));
    assert!(request_line.contains("search_query=jazz+piano"));
    assert!(request_line.contains("api_key=test-key"));
}

#[tokio::test]
async fn test_error_status_falls_back_unfiltered() {
    let (url, _request) = serve_once("HTTP/1.1 500 Internal Server Error", "{}".to_string()).await;

    let provider = provider().with_base_url(url);
    let items = provider.search("jazz").await.unwrap();

    // The query is not applied on the failure path.
    assert_eq!(items, fallback_feed_items());
}

#[tokio::test]
async fn test_unparseable_body_falls_back() {
    let (url, _request) = serve_once("HTTP/1.1 200 OK", "<html>oops</html>".to_string()).await;

    let provider = provider().with_base_url(url);
    assert_eq!(provider.search("").await.unwrap(), fallback_feed_items());
}

#[tokio::test]
async fn test_connection_refused_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = provider()
        .with_base_url(format!("http://{addr}/search"))
        .with_fallback(vec![]);
    assert!(provider.search("jazz").await.unwrap().is_empty());
}
