use std::time::Duration;

use headliner_engine::{ApiError, ApiSettings, NewsApi, ReqwestNewsApi};
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": {"id": "bbc-news", "name": "BBC News"},
                "author": "Author One",
                "title": "Kotlin is great",
                "description": "Description one",
                "url": "https://example.com/1",
                "urlToImage": "https://example.com/image1.jpg",
                "publishedAt": "2023-06-01T12:00:00Z",
                "content": "Content one"
            },
            {
                "source": {"id": null, "name": "CNN"},
                "author": null,
                "title": "Jetpack Compose tutorial",
                "description": null,
                "url": "https://example.com/2",
                "urlToImage": null,
                "publishedAt": "not-a-timestamp",
                "content": null
            }
        ]
    })
}

fn client_for(server: &MockServer) -> ReqwestNewsApi {
    let settings = ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    };
    ReqwestNewsApi::new(settings, "test-key").expect("client")
}

#[tokio::test]
async fn sends_api_key_header_and_source_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .and(header("X-Api-Key", "test-key"))
        .and(query_param("sources", "bbc-news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .top_headlines("bbc-news")
        .await
        .expect("fetch ok");

    assert_eq!(response.status, "ok");
    assert_eq!(response.total_results, 2);
    assert_eq!(response.articles.len(), 2);
    assert_eq!(response.articles[0].title, "Kotlin is great");
    assert_eq!(response.articles[1].author, None);
    assert_eq!(response.articles[1].source.id, None);
}

#[tokio::test]
async fn classifies_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .top_headlines("bbc-news")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            code: 404,
            message: "Not Found".to_string(),
        }
    );
}

#[tokio::test]
async fn classifies_slow_response_as_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(sample_body()),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ApiSettings::default()
    };
    let client = ReqwestNewsApi::new(settings, "test-key").expect("client");

    let err = client.top_headlines("bbc-news").await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn classifies_refused_connection_as_host_unreachable() {
    // Nothing listens on the discard port.
    let settings = ApiSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        ..ApiSettings::default()
    };
    let client = ReqwestNewsApi::new(settings, "test-key").expect("client");

    let err = client.top_headlines("bbc-news").await.unwrap_err();
    assert!(matches!(err, ApiError::HostUnreachable(_)), "got {err:?}");
}

#[tokio::test]
async fn classifies_malformed_body_as_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .top_headlines("bbc-news")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unexpected(_)), "got {err:?}");
}
