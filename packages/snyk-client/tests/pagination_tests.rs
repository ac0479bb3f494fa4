//! Pagination behaviour of the Snyk client against a mock API.

use std::time::Duration;

use serde_json::{json, Value};
use snyk_client::{SnykClient, SnykError};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn client_for(server: &MockServer) -> SnykClient {
    SnykClient::new(TOKEN)
        .with_base_url(server.uri())
        .with_page_delay(Duration::ZERO)
}

fn org(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "type": "org",
        "attributes": { "name": name, "slug": name.to_lowercase(), "is_personal": false }
    })
}

fn project(id: &str, org_id: &str, project_type: &str) -> Value {
    json!({
        "id": id,
        "type": "project",
        "attributes": {
            "name": format!("repo/{}", id),
            "type": project_type,
            "created": "2024-05-01T10:00:00.000Z",
            "status": "active",
            "origin": "github"
        },
        "relationships": {
            "organization": { "data": { "id": org_id, "type": "org" } }
        }
    })
}

#[tokio::test]
async fn test_pages_are_concatenated_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/orgs/o1/projects"))
        .and(query_param_is_missing("starting_after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [project("p1", "o1", "npm"), project("p2", "o1", "sast")],
            "links": {
                "next": "/rest/orgs/o1/projects?version=2024-08-22&limit=100&starting_after=p2"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/orgs/o1/projects"))
        .and(query_param("starting_after", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [project("p3", "o1", "apk")],
            "links": {
                "next": "/rest/orgs/o1/projects?version=2024-08-22&limit=100&starting_after=p3"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/orgs/o1/projects"))
        .and(query_param("starting_after", "p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [project("p4", "o1", "k8sconfig")],
            "links": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client_for(&server).list_org_projects("o1").await.unwrap();
    let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
}

#[tokio::test]
async fn test_requests_carry_version_limit_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/groups/g1/orgs"))
        .and(query_param("version", "2024-08-22"))
        .and(query_param("limit", "100"))
        .and(header("accept", "application/vnd.api+json"))
        .and(header("authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [org("o1", "Acme")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orgs = client_for(&server).list_group_orgs("g1").await.unwrap();

    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].name(), "Acme");
    assert_eq!(orgs[0].slug(), "acme");
}

#[tokio::test]
async fn test_absolute_next_link_is_followed_unchanged() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/groups/g1/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [org("o1", "Acme")],
            "links": { "next": format!("{}/rest/groups/g1/orgs?starting_after=o1", second.uri()) }
        })))
        .expect(1)
        .mount(&first)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/groups/g1/orgs"))
        .and(query_param("starting_after", "o1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [org("o2", "Globex")]
        })))
        .expect(1)
        .mount(&second)
        .await;

    let orgs = client_for(&first).list_group_orgs("g1").await.unwrap();
    let names: Vec<&str> = orgs.iter().map(|o| o.name()).collect();

    assert_eq!(names, vec!["Acme", "Globex"]);
}

#[tokio::test]
async fn test_server_error_on_second_page_aborts_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/orgs/o1/projects"))
        .and(query_param_is_missing("starting_after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [project("p1", "o1", "sast")],
            "links": { "next": "/rest/orgs/o1/projects?starting_after=p1" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/orgs/o1/projects"))
        .and(query_param("starting_after", "p1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).list_org_projects("o1").await.unwrap_err();

    match err {
        SnykError::Api { status, message, url } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
            assert!(url.contains("starting_after=p1"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_data_key_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/groups/g1/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": {}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).list_group_orgs("g1").await.unwrap_err();

    assert!(matches!(err, SnykError::Parse(_)));
}

#[tokio::test]
async fn test_unauthorized_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).list_group_orgs("g1").await.unwrap_err();

    assert!(matches!(err, SnykError::Api { status: 401, .. }));
}

#[tokio::test]
async fn test_empty_next_link_ends_the_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/groups/g1/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [org("o1", "Acme")],
            "links": { "next": "" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&server)
        .await;

    let orgs = client_for(&server).list_group_orgs("g1").await.unwrap();

    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].id, "o1");
}
