use pretty_assertions::assert_eq;
use serde_json::json;
use tracker_core::{CuratedEntry, EnrichedRecord, ExternalLink, Unmatched};
use tracker_engine::{FetchSettings, JikanLinks, JsonFetcher, LinkProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn links(server: &MockServer) -> JikanLinks {
    let fetcher = JsonFetcher::new(FetchSettings::default()).expect("client builds");
    JikanLinks::new(fetcher, server.uri())
}

#[tokio::test]
async fn searches_by_title_then_fetches_external_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("q", "Made Up Show"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "mal_id": 457, "title": "Made Up Show" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/anime/457/external"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "name": "Official Site", "url": "https://official.test" },
                { "name": "Netflix", "url": "https://netflix.test/457" },
                { "name": "No Url" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Title lookup works even for records without catalog data.
    let record = EnrichedRecord::unmatched(CuratedEntry::titled("Made Up Show"), Unmatched::NoMatch);
    let found = links(&server).external_links(&record).await.expect("links ok");

    assert_eq!(
        found,
        vec![
            ExternalLink::new("Official Site", "https://official.test"),
            ExternalLink::new("Netflix", "https://netflix.test/457"),
        ]
    );
    assert!(found[1].is_streaming_service());
    assert!(!found[0].is_streaming_service());
}

#[tokio::test]
async fn no_search_hit_means_no_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let record = EnrichedRecord::unmatched(CuratedEntry::titled("Nothing"), Unmatched::NoMatch);
    let found = links(&server).external_links(&record).await.expect("links ok");

    assert!(found.is_empty());
}

#[tokio::test]
async fn failed_external_request_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "mal_id": 1 }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/anime/1/external"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let record = EnrichedRecord::unmatched(CuratedEntry::titled("Cowboy Bebop"), Unmatched::NoMatch);
    assert!(links(&server).external_links(&record).await.is_err());
}
