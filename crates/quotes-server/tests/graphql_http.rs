//! End-to-end tests through the axum router.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use quotes_server::{
    AppState, JwtAuthenticator, ServerConfig, UserDirectory, build_app,
    config::UserEntry, seed::sample_quotes,
};
use quotes_store::{QuoteStore, SequentialGenerator};
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "integration-test-secret";

fn app(graphiql_enabled: bool) -> Router {
    let config = ServerConfig {
        graphiql_enabled,
        ..ServerConfig::default()
    };

    let directory = UserDirectory::from_entries(&[UserEntry {
        username: "alice".to_string(),
        password: "wonderland".to_string(),
    }])
    .unwrap();
    let authenticator = Arc::new(JwtAuthenticator::new(directory, SECRET, 1));

    let store = Arc::new(QuoteStore::with_generator(SequentialGenerator::new("q")));
    store.seed(sample_quotes()).unwrap();

    build_app(AppState::new(store, authenticator, config)).unwrap()
}

async fn post_graphql(app: &Router, token: Option<&str>, query: &str, variables: Value) -> Value {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = json!({ "query": query, "variables": variables }).to_string();

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: &Router) -> String {
    let body = post_graphql(
        app,
        None,
        "mutation($u: String!, $p: String!) { login(username: $u, password: $p) { token } }",
        json!({ "u": "alice", "p": "wonderland" }),
    )
    .await;
    body["data"]["login"]["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_seeded_quotes_are_public() {
    let app = app(true);
    let body = post_graphql(&app, None, "{ quotes { id phrase quotee } }", json!({})).await;

    assert_eq!(
        body["data"]["quotes"],
        json!([
            { "id": "q-1", "phrase": "Test 1", "quotee": "Fulano de tal" },
            { "id": "q-2", "phrase": "Test 2", "quotee": "Fulano de tal 2" },
            { "id": "q-3", "phrase": "Test 3", "quotee": "Fulano de tal 3" },
        ])
    );
}

#[tokio::test]
async fn test_login_then_mutate() {
    let app = app(true);
    let token = login(&app).await;

    let added = post_graphql(
        &app,
        Some(&token),
        "mutation { addQuote(phrase: \"Carpe diem\", quotee: \"Horace\") { id phrase quotee } }",
        json!({}),
    )
    .await;
    assert_eq!(
        added["data"]["addQuote"],
        json!({ "id": "q-4", "phrase": "Carpe diem", "quotee": "Horace" })
    );

    let edited = post_graphql(
        &app,
        Some(&token),
        "mutation { editQuote(id: \"q-4\", phrase: \"Seize the day\") { id phrase quotee } }",
        json!({}),
    )
    .await;
    assert_eq!(
        edited["data"]["editQuote"],
        json!({ "id": "q-4", "phrase": "Seize the day", "quotee": "Horace" })
    );

    let deleted = post_graphql(
        &app,
        Some(&token),
        "mutation { deleteQuote(id: \"q-1\") { ok } }",
        json!({}),
    )
    .await;
    assert_eq!(deleted["data"]["deleteQuote"]["ok"], true);

    let listed = post_graphql(&app, None, "{ quotes { id } }", json!({})).await;
    assert_eq!(
        listed["data"]["quotes"],
        json!([{ "id": "q-2" }, { "id": "q-3" }, { "id": "q-4" }])
    );
}

#[tokio::test]
async fn test_invalid_token_is_anonymous_not_a_failure() {
    let app = app(true);

    let listed = post_graphql(&app, Some("invalid-token"), "{ quotes { id } }", json!({})).await;
    assert!(listed.get("errors").is_none());
    assert_eq!(listed["data"]["quotes"].as_array().unwrap().len(), 3);

    let rejected = post_graphql(
        &app,
        Some("invalid-token"),
        "mutation { deleteQuote(id: \"q-1\") { ok } }",
        json!({}),
    )
    .await;
    assert_eq!(rejected["data"]["deleteQuote"], Value::Null);
    assert_eq!(rejected["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_bad_credentials() {
    let app = app(true);
    let body = post_graphql(
        &app,
        None,
        "mutation { login(username: \"alice\", password: \"nope\") { token } }",
        json!({}),
    )
    .await;

    assert_eq!(body["data"]["login"], Value::Null);
    assert_eq!(body["errors"][0]["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_health_reports_store_size() {
    let app = app(true);
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok", "quotes": 3 }));
}

#[tokio::test]
async fn test_request_id_generated_and_echoed() {
    let app = app(true);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_graphiql_toggle() {
    let response = app(true)
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(false)
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
