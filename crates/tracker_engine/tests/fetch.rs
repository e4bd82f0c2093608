use std::time::Duration;

use serde::Deserialize;
use tracker_engine::{FailureKind, FetchSettings, JsonFetcher};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Payload {
    name: String,
}

fn fetcher(settings: FetchSettings) -> JsonFetcher {
    JsonFetcher::new(settings).expect("client builds")
}

fn url(server: &MockServer, route: &str) -> url::Url {
    JsonFetcher::parse_url(&format!("{}{}", server.uri(), route)).unwrap()
}

#[tokio::test]
async fn fetcher_decodes_json_and_sends_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .and(header("accept", "application/vnd.api+json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"name":"Kitsu"}"#,
            "application/vnd.api+json",
        ))
        .mount(&server)
        .await;

    let payload: Payload = fetcher(FetchSettings::default())
        .get_json(url(&server, "/doc"), "application/vnd.api+json")
        .await
        .expect("fetch ok");

    assert_eq!(
        payload,
        Payload {
            name: "Kitsu".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = fetcher(FetchSettings::default())
        .get_json::<Payload>(url(&server, "/missing"), "application/json")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_reports_rate_limit_as_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = fetcher(FetchSettings::default())
        .get_json::<Payload>(url(&server, "/limited"), "application/json")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(429));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let err = fetcher(settings)
        .get_json::<Payload>(url(&server, "/slow"), "application/json")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string(r#"{"name":"0123456789"}"#),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let err = fetcher(settings)
        .get_json::<Payload>(url(&server, "/large"), "application/json")
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[tokio::test]
async fn fetcher_reports_malformed_json_as_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = fetcher(FetchSettings::default())
        .get_json::<Payload>(url(&server, "/garbage"), "application/json")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[test]
fn invalid_url_is_rejected_before_any_request() {
    let err = JsonFetcher::parse_url("not a url").unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
