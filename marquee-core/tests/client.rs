mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::{
    TEST_KEY, client_for, config_for, keyless_client_for, movie, page, show,
};
use marquee_core::{
    ContentClient, ContentError, DETAILS_APPEND, GENERIC_FAILURE_MESSAGE,
};
use marquee_model::{
    ImageSize, ItemKind, ListCategory, MediaKind, TimeWindow, TrendingKind,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn missing_key_fails_every_operation_without_a_request() {
    let server = MockServer::start().await;
    let client = keyless_client_for(&server);

    let results = [
        client
            .trending(TrendingKind::All, TimeWindow::Week, 1)
            .await
            .map(|_| ()),
        client.popular(MediaKind::Movie, 1).await.map(|_| ()),
        client
            .details_with_related(MediaKind::Movie, 550)
            .await
            .map(|_| ()),
        client
            .list_by_category(MediaKind::Tv, ListCategory::OnTheAir, 1)
            .await
            .map(|_| ()),
        client.genres(MediaKind::Movie).await.map(|_| ()),
        client.search_multi("dune", 1).await.map(|_| ()),
    ];

    for result in results {
        let err = result.expect_err("keyless call must fail");
        assert!(matches!(err, ContentError::MissingApiKey));
        assert_eq!(
            err.to_string(),
            "API key is missing. Cannot proceed with the request."
        );
    }

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "no request may leave without a key");
}

#[tokio::test]
async fn blank_search_returns_empty_page_without_a_request() {
    let server = MockServer::start().await;

    let page = client_for(&server).search_multi("   ", 1).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.page, 1);

    // Blank query wins over the missing-key check.
    let page = keyless_client_for(&server).search_multi("", 3).await.unwrap();
    assert!(page.is_empty());

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn requests_carry_key_language_and_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("api_key", TEST_KEY))
        .and(query_param("language", "en-US"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![movie(1, "Arrival"), movie(2, "Heat")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .popular(MediaKind::Movie, 2)
        .await
        .unwrap();

    let titles: Vec<_> = results.results.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Arrival", "Heat"]);
    assert_eq!(results.results[0].year, Some(2024));
    assert!(
        results
            .results
            .iter()
            .all(|i| i.media_kind == Some(ItemKind::Movie))
    );
}

#[tokio::test]
async fn configured_language_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/genre/movie/list"))
        .and(query_param("language", "de-DE"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "genres": [{ "id": 28, "name": "Action" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ContentClient::new(
        config_for(&server, Some(TEST_KEY)).with_language("de-DE"),
    );
    let genres = client.genres(MediaKind::Movie).await.unwrap();
    assert_eq!(genres[0].name, "Action");
}

#[tokio::test]
async fn page_zero_is_sent_as_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending/tv/day"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![show(7, "Severance")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .trending(TrendingKind::Tv, TimeWindow::Day, 0)
        .await
        .unwrap();

    assert_eq!(results.results[0].title, "Severance");
    assert_eq!(results.results[0].year, Some(2019));
    assert_eq!(results.results[0].media_kind, Some(ItemKind::Tv));
}

#[tokio::test]
async fn mixed_trending_keeps_upstream_media_type() {
    let server = MockServer::start().await;
    let mut tv = show(8, "Dark");
    tv["media_type"] = json!("tv");
    let mut film = movie(9, "Alien");
    film["media_type"] = json!("movie");

    Mock::given(method("GET"))
        .and(path("/trending/all/week"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![tv, film])))
        .mount(&server)
        .await;

    let results = client_for(&server)
        .trending(TrendingKind::All, TimeWindow::Week, 1)
        .await
        .unwrap();

    let kinds: Vec<_> = results.results.iter().map(|i| i.media_kind).collect();
    assert_eq!(kinds, [Some(ItemKind::Tv), Some(ItemKind::Movie)]);
}

#[tokio::test]
async fn upstream_status_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/top_rated"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key.",
            "success": false,
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_by_category(MediaKind::Movie, ListCategory::TopRated, 1)
        .await
        .unwrap_err();

    match err {
        ContentError::Upstream { ref message } => assert_eq!(
            message,
            "Invalid API key: You must be granted a valid key."
        ),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn upstream_rejection_is_logged_with_status_and_message() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "status_message": "Invalid key" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .popular(MediaKind::Movie, 1)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid key");

    let logged = logs.contents();
    assert!(logged.contains("catalog request rejected"), "{logged}");
    assert!(logged.contains("Invalid key"), "{logged}");
    assert!(logged.contains("401"), "{logged}");
}

#[tokio::test]
async fn failure_without_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/genre/tv/list"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).genres(MediaKind::Tv).await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client.popular(MediaKind::Tv, 1).await.unwrap_err();
    assert!(matches!(err, ContentError::Network { .. }));
    assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/upcoming"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_by_category(MediaKind::Movie, ListCategory::Upcoming, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, ContentError::Decode { .. }));
}

#[tokio::test]
async fn details_append_related_collections() {
    let server = MockServer::start().await;
    let mut body = movie(550, "Fight Club");
    body["runtime"] = json!(139);
    body["tagline"] = json!("Mischief. Mayhem. Soap.");
    body["genres"] = json!([{ "id": 18, "name": "Drama" }]);
    body["videos"] = json!({ "results": [
        { "key": "abc", "name": "Teaser", "site": "YouTube", "type": "Teaser" },
        { "key": "xyz", "name": "Official Trailer", "site": "YouTube", "type": "Trailer" },
    ]});
    body["credits"] = json!({ "cast": [
        { "id": 287, "name": "Brad Pitt", "character": "Tyler Durden", "order": 1 },
    ]});
    body["similar"] = page(vec![movie(807, "Se7en")]);
    body["recommendations"] = page(vec![movie(680, "Pulp Fiction")]);

    Mock::given(method("GET"))
        .and(path("/movie/550"))
        .and(query_param("append_to_response", DETAILS_APPEND))
        .and(query_param("api_key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let details = client_for(&server)
        .details_with_related(MediaKind::Movie, 550)
        .await
        .unwrap();

    assert_eq!(details.item.title, "Fight Club");
    assert_eq!(details.item.media_kind, Some(ItemKind::Movie));
    assert_eq!(details.runtime, Some(139));
    assert_eq!(details.genres[0].name, "Drama");
    assert_eq!(details.trailer().map(|v| v.key.as_str()), Some("xyz"));
    assert_eq!(details.cast[0].name, "Brad Pitt");
    assert_eq!(details.similar.results[0].title, "Se7en");
    assert_eq!(
        details.recommendations.results[0].media_kind,
        Some(ItemKind::Movie)
    );
}

#[tokio::test]
async fn genres_unwrap_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/genre/movie/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genres": [
                { "id": 28, "name": "Action" },
                { "id": 35, "name": "Comedy" },
            ]
        })))
        .mount(&server)
        .await;

    let genres = client_for(&server).genres(MediaKind::Movie).await.unwrap();
    let names: Vec<_> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Action", "Comedy"]);
}

#[tokio::test]
async fn search_multi_sends_the_query() {
    let server = MockServer::start().await;
    let person = json!({
        "id": 31,
        "name": "Tom Hanks",
        "profile_path": "/hanks.jpg",
        "media_type": "person",
    });
    Mock::given(method("GET"))
        .and(path("/search/multi"))
        .and(query_param("query", "tom hanks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![person])))
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search_multi("tom hanks", 1)
        .await
        .unwrap();

    let hit = &results.results[0];
    assert_eq!(hit.title, "Tom Hanks");
    assert_eq!(hit.media_kind, Some(ItemKind::Person));
    assert_eq!(hit.poster_path.as_deref(), Some("/hanks.jpg"));
    assert_eq!(
        client_for(&server)
            .image_url(hit.poster_path.as_deref(), ImageSize::W185)
            .as_deref(),
        Some("https://image.tmdb.org/t/p/w185/hanks.jpg")
    );
}

#[tokio::test]
async fn raw_fetch_passes_json_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": { "secure_base_url": "https://image.tmdb.org/t/p/" }
        })))
        .mount(&server)
        .await;

    let value = client_for(&server)
        .fetch("/configuration", &[("include_image_language", "en")])
        .await
        .unwrap();
    assert_eq!(
        value["images"]["secure_base_url"],
        "https://image.tmdb.org/t/p/"
    );
}
