mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use common::*;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app(server: &httpmock::MockServer) -> Router {
    statefacts::server::router(Arc::new(components_for(server)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_form() {
    let server = setup_server();
    let (status, body) = get(app(&server), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<select name=\"states\">"));
    assert!(body.contains("<option value=\"Wyoming\">"));
    assert!(body.contains("name=\"InformationType\" value=\"type1\""));
}

#[tokio::test]
async fn health_is_ok() {
    let server = setup_server();
    let (status, body) = get(app(&server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn missing_state_is_bad_request_with_form() {
    let server = setup_server();
    let (status, body) = get(app(&server), "/Information?InformationType=type1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("<form action=\"/Information\""));
}

#[tokio::test]
async fn information_type1_renders_symbols() {
    let server = setup_server();
    mock_census(&server);
    mock_article(
        &server,
        "Washington_(state)",
        article_html("Washington", "Olympia", "Bob Ferguson"),
    );
    mock_file_page(&server, "Flag_of_Washington_(state).svg", "Flagmaker");
    mock_file_page(&server, "Seal_of_Washington_(state).svg", "Sealmaker");

    let (status, body) = get(
        app(&server),
        "/Information?states=Washington&InformationType=type1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Washington</h1>"));
    assert!(body.contains("7705281"));
    assert!(body.contains("src=\"//upload.wikimedia.org/flags/Flag_of_Washington.svg\""));
    assert!(body.contains("Sealmaker"));
}

#[tokio::test]
async fn information_type2_renders_capital_and_governor() {
    let server = setup_server();
    mock_article(
        &server,
        "New_York_(state)",
        article_html("New_York", "Albany", "Kathy Hochul"),
    );

    let (status, body) = get(
        app(&server),
        "/Information?states=New+York&InformationType=type2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>New York</h1>"));
    assert!(body.contains("<dd id=\"stateCapital\">Albany</dd>"));
    assert!(body.contains("<dd id=\"stateGovernor\">Kathy Hochul</dd>"));
}

#[tokio::test]
async fn api_returns_fact_sheet_json() {
    let server = setup_server();
    mock_article(&server, "Texas", article_html("Texas", "Austin", "Greg Abbott"));

    let (status, body) = get(app(&server), "/api/information?states=Texas").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["state"], "Texas");
    assert_eq!(json["data"]["informationType"], "type2");
    assert_eq!(json["data"]["stateCapital"], "Austin");
    assert_eq!(json["data"]["stateGovernor"], "Greg Abbott");
}

#[tokio::test]
async fn api_reports_information_type_as_query_value() {
    let server = setup_server();
    mock_census(&server);
    mock_article(
        &server,
        "Washington_(state)",
        article_html("Washington", "Olympia", "Bob Ferguson"),
    );

    let (status, body) = get(
        app(&server),
        "/api/information?states=Washington&InformationType=type1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"]["informationType"], "type1");
    assert_eq!(json["data"]["state"], "Washington");
    assert_eq!(json["data"]["statePopulation"], "7705281");
}

#[tokio::test]
async fn api_missing_state_is_error_json() {
    let server = setup_server();
    let (status, body) = get(app(&server), "/api/information").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ok"], false);
    assert!(json["error"].as_str().unwrap().contains("states"));
}
