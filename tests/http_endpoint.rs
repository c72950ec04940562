use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use book_catalog::catalog::{BookStore, Catalog};
use book_catalog::graphql::create_schema;
use book_catalog::server::create_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    let store: Arc<dyn BookStore> = Arc::new(Catalog::builtin());
    create_router(create_schema(store))
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

async fn send(method: Method, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, content_type, bytes.to_vec())
}

async fn get_book(query: &str) -> (StatusCode, Option<String>, Value) {
    let uri = format!("/book?query={}", encode(query));
    let (status, content_type, body) = send(Method::GET, &uri).await;
    (status, content_type, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn list_query_returns_json_envelope() {
    let (status, content_type, body) = get_book("{list{idbook,title}}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let list = body["data"]["list"].as_array().unwrap();
    assert_eq!(list.len(), 8);
    assert_eq!(list[0], json!({"idbook": 1, "title": "Winnie the Pooh"}));
    assert!(list.iter().all(|b| b.get("author").is_none()));
}

#[tokio::test]
async fn book_lookup_over_http() {
    let (status, _, body) = get_book("{ book(idbook: 4) { title author } }").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["book"],
        json!({"title": "Jeeves and Woosters stories", "author": "P.G.Wodehouse"})
    );
}

#[tokio::test]
async fn unknown_book_is_null_over_http() {
    let (status, _, body) = get_book("{ book(idbook: 9999) { title } }").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book"], Value::Null);
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn query_errors_keep_status_ok() {
    let (status, content_type, body) = get_book("{list{nonexistent}}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body["data"], Value::Null);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_query_parameter_is_a_graphql_error() {
    let (status, _, body) = send(Method::GET, "/book").await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_query_parameter_uses_first_value() {
    let uri = format!(
        "/book?query={}&query={}",
        encode("{list{idbook}}"),
        encode("{list{title}}")
    );
    let (status, content_type, body) = send(Method::GET, &uri).await;
    let body: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let list = body["data"]["list"].as_array().unwrap();
    assert_eq!(list.len(), 8);
    assert_eq!(list[0], json!({"idbook": 1}));
}

#[tokio::test]
async fn variables_parameter_is_applied() {
    let uri = format!(
        "/book?query={}&variables={}",
        encode("query($id: Int) { book(idbook: $id) { idbook } }"),
        encode(r#"{"id": 6}"#)
    );
    let (status, _, body) = send(Method::GET, &uri).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book"]["idbook"], json!(6));
}

#[tokio::test]
async fn invalid_variables_are_reported_in_errors() {
    let uri = format!(
        "/book?query={}&variables={}",
        encode("{ list { idbook } }"),
        encode("{not json")
    );
    let (status, _, body) = send(Method::GET, &uri).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::OK);
    let message = body["errors"][0]["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid variables"));
}

#[tokio::test]
async fn operation_name_selects_operation() {
    let uri = format!(
        "/book?query={}&operationName=Second",
        encode("query First { book(idbook: 1) { idbook } } query Second { book(idbook: 2) { idbook } }")
    );
    let (status, _, body) = send(Method::GET, &uri).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book"]["idbook"], json!(2));
}

#[tokio::test]
async fn other_methods_and_paths_are_not_routed() {
    let (status, _, _) = send(Method::POST, "/book?query=%7Blist%7Bidbook%7D%7D").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _, _) = send(Method::GET, "/graphql?query=%7Blist%7Bidbook%7D%7D").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
