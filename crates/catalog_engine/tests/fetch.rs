use std::time::Duration;

use catalog_engine::{
    FailureKind, FetchSettings, FileProductSource, ProductSource, ReqwestProductSource,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRODUCTS: &str = r#"[
    {"id": "1", "category": "accessories", "name": "Watch Band", "processor": "", "priceRegular": 49},
    {"id": "2", "category": "phones", "name": "Phone", "processor": "A16", "priceRegular": 999},
    {"id": "3", "category": "accessories", "name": "Charger", "processor": "", "priceRegular": 19}
]"#;

#[tokio::test]
async fn source_returns_accessories_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PRODUCTS, "application/json"))
        .mount(&server)
        .await;

    let source = ReqwestProductSource::new(
        format!("{}/api/products.json", server.uri()),
        FetchSettings::default(),
    );

    let products = source.fetch_products().await.expect("fetch ok");
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Watch Band", "Charger"]);
}

#[tokio::test]
async fn source_without_category_returns_everything() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(PRODUCTS, "application/json; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        category: None,
        ..FetchSettings::default()
    };
    let source = ReqwestProductSource::new(format!("{}/all", server.uri()), settings);

    assert_eq!(source.fetch_products().await.unwrap().len(), 3);
}

#[tokio::test]
async fn source_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source =
        ReqwestProductSource::new(format!("{}/missing", server.uri()), FetchSettings::default());

    let err = source.fetch_products().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn source_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("[]", "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let source = ReqwestProductSource::new(format!("{}/slow", server.uri()), settings);

    let err = source.fetch_products().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn source_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PRODUCTS, "application/json"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let source = ReqwestProductSource::new(format!("{}/large", server.uri()), settings);

    let err = source.fetch_products().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(PRODUCTS.len() as u64)
        }
    );
}

#[tokio::test]
async fn source_rejects_html_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let source =
        ReqwestProductSource::new(format!("{}/page", server.uri()), FetchSettings::default());

    let err = source.fetch_products().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn source_reports_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[{", "application/json"))
        .mount(&server)
        .await;

    let source =
        ReqwestProductSource::new(format!("{}/broken", server.uri()), FetchSettings::default());

    let err = source.fetch_products().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn invalid_endpoint_is_rejected() {
    let source = ReqwestProductSource::new("not a url", FetchSettings::default());
    let err = source.fetch_products().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn file_source_reads_json_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("products.json");
    std::fs::write(&file, PRODUCTS).unwrap();

    let source = FileProductSource::new(&file, Some("accessories".to_string()));
    assert_eq!(source.fetch_products().await.unwrap().len(), 2);

    let missing = FileProductSource::new(dir.path().join("nope.json"), None);
    assert_eq!(
        missing.fetch_products().await.unwrap_err().kind,
        FailureKind::Io
    );
}
