//! End-to-end tests of the request pipeline against a mock Confluence.

use std::time::Duration;

use assert2::{check, let_assert};
use confluence_api::model::Content;
use confluence_api::params::{
    CalendarEventsParameters, ContentIdParameters, ExpandParameters, SearchParameters,
    SpaceParameters, UserParameters,
};
use confluence_api::{
    ApiError, Confluence, Credential, EmptyParameters, Error, HyperClient, Method, NO_BODY, Query,
    StatusTable, Validate,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, header_exists, method, path, query_param},
};

const TOKEN: &str = "TESTVYhExHzKbHzNPCMRmviasXJoUaATysUimxwiWmkr";

async fn setup() -> (MockServer, Confluence) {
    let server = MockServer::start().await;
    let confluence =
        Confluence::new(&server.uri(), Credential::basic("john", "secret")).expect("client");
    (server, confluence)
}

#[tokio::test]
async fn content_by_id_decodes_document() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/123"))
        .and(header("Authorization", "Basic am9objpzZWNyZXQ="))
        .and(header("Accept", "application/json"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "123" })))
        .expect(1)
        .mount(&server)
        .await;

    let content = confluence
        .content_by_id("123", &ContentIdParameters::default())
        .await
        .expect("content");

    check!(content.id == "123");
}

#[tokio::test]
async fn missing_content_maps_to_no_such_content() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/404404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "message": "No content found with id: ContentId{id=404404}"
        })))
        .mount(&server)
        .await;

    let result = confluence
        .content_by_id("404404", &ContentIdParameters::default())
        .await;

    let_assert!(Err(err) = result);
    let_assert!(
        Error::Api {
            status: 404,
            kind: ApiError::NoSuchContent,
            ..
        } = &err
    );
    check!(err.is_not_found());
    check!(err.body().is_some());
}

#[tokio::test]
async fn status_tables_per_endpoint() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/space"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/api/search"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/api/user"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/api/space/TS"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = confluence
        .spaces(&SpaceParameters::keys(["TS"]))
        .await
        .expect_err("403");
    check!(err.api_error() == Some(ApiError::PermissionDenied));
    check!(err.body().is_none());

    let err = confluence
        .search(&SearchParameters::cql("type = = page"))
        .await
        .expect_err("400");
    check!(err.api_error() == Some(ApiError::MalformedQuery));

    let err = confluence
        .user(&UserParameters::username("nobody"))
        .await
        .expect_err("404");
    check!(err.api_error() == Some(ApiError::NoSuchUser));

    let err = confluence
        .space("TS", &ExpandParameters::default())
        .await
        .expect_err("404");
    check!(err.api_error() == Some(ApiError::NoSuchSpace));
}

#[tokio::test]
async fn undocumented_status_is_unexpected() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/user/current"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = confluence
        .current_user(&ExpandParameters::default())
        .await
        .expect_err("503");

    let_assert!(Error::Api { status, kind, body } = err);
    check!(status == 503);
    check!(kind == ApiError::UnexpectedStatus(503));
    check!(body.as_deref() == Some(b"maintenance".as_slice()));
}

#[tokio::test]
async fn query_string_reaches_server() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/space"))
        .and(query_param("spaceKey", "TS1"))
        .and(query_param("spaceKey", "TS2"))
        .and(query_param("favourite", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "key": "TS1" }, { "key": "TS2" }],
            "size": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let spaces = confluence
        .spaces(&SpaceParameters {
            favourite: true,
            ..SpaceParameters::keys(["TS1", "TS2"])
        })
        .await
        .expect("spaces");

    check!(spaces.size == 2);
    check!(spaces.results[1].key == "TS2");
}

#[tokio::test]
async fn calendar_window_is_sent_in_utc() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/calendar-services/1.0/calendar/events.json"))
        .and(query_param(
            "subCalendarId",
            "1a72410b-6417-4869-9260-9ec13816e481",
        ))
        .and(query_param("userTimeZoneId", "Etc/UTC"))
        .and(query_param("start", "2020-01-01T00:00:00Z"))
        .and(query_param("end", "2020-01-02T12:30:45Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "events": [{ "id": "e1", "title": "Standup", "allDay": false }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let start = "2020-01-01T01:00:00+01:00"
        .parse::<chrono::DateTime<chrono::FixedOffset>>()
        .expect("start")
        .to_utc();
    let end = "2020-01-02T12:30:45Z"
        .parse::<chrono::DateTime<chrono::Utc>>()
        .expect("end");

    let events = confluence
        .calendar_events(&CalendarEventsParameters {
            sub_calendar_id: "1a72410b-6417-4869-9260-9ec13816e481".to_string(),
            user_timezone_id: "Etc/UTC".to_string(),
            start: Some(start),
            end: Some(end),
        })
        .await
        .expect("events");

    check!(events.success);
    check!(events.events[0].title == "Standup");
}

#[tokio::test]
async fn path_segments_are_encoded() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/group/confluence%20users/member"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "username": "john" }],
            "size": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let members = confluence
        .group_members("confluence users", &Default::default())
        .await
        .expect("members");

    check!(members.results[0].username == "john");
}

#[tokio::test]
async fn base_url_context_path_is_kept() {
    let server = MockServer::start().await;
    let base = format!("{}/confluence/", server.uri());
    let confluence = Confluence::builder()
        .base_url(base)
        .token(TOKEN)
        .app("wiki-report", "1.2.0")
        .build()
        .expect("client");

    Mock::given(method("GET"))
        .and(path("/confluence/rest/api/user/anonymous"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .and(header("User-Agent", confluence.user_agent()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "anonymous",
            "displayName": "Anonymous"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = confluence.anonymous_user().await.expect("user");

    check!(user.is_anonymous());
    check!(confluence.user_agent().starts_with("wiki-report/1.2.0 "));
}

#[tokio::test]
async fn undecodable_document_reports_path() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123",
            "version": { "number": "four" }
        })))
        .mount(&server)
        .await;

    let result = confluence
        .content_by_id("123", &ContentIdParameters::default())
        .await;

    let_assert!(Err(Error::JsonDeserialization { path, .. }) = result);
    check!(path == "version.number");
}

#[tokio::test]
async fn transport_timeout_surfaces_unchanged() {
    let server = MockServer::start().await;
    let confluence = Confluence::builder()
        .base_url(server.uri())
        .basic_auth("john", "secret")
        .http_client(
            HyperClient::builder()
                .timeout(Duration::from_millis(100))
                .build(),
        )
        .build()
        .expect("client");

    Mock::given(method("GET"))
        .and(path("/rest/api/audit/retention"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let err = confluence.audit_retention().await.expect_err("timeout");

    check!(err.is_timeout());
}

#[derive(Debug, Default, Query)]
#[query(rename_all = "camelCase")]
struct LongTaskParameters {
    start: u32,
    limit: u32,
}

impl Validate for LongTaskParameters {}

#[tokio::test]
async fn execute_reaches_unbound_endpoints() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/longtask"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "size": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let tasks: serde_json::Value = confluence
        .execute(
            Method::Get,
            "/rest/api/longtask",
            &LongTaskParameters {
                limit: 5,
                ..Default::default()
            },
            NO_BODY,
            StatusTable::PERMISSION,
        )
        .await
        .expect("tasks");

    check!(tasks["size"] == 0);
}

#[tokio::test]
async fn execute_empty_sends_json_body() {
    let (server, confluence) = setup().await;

    let label = json!([{ "prefix": "global", "name": "release" }]);

    Mock::given(method("POST"))
        .and(path("/rest/api/content/123/label"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&label))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    confluence
        .execute_empty(
            Method::Post,
            "/rest/api/content/123/label",
            &EmptyParameters,
            Some(&label),
            StatusTable::CONTENT,
        )
        .await
        .expect("labels added");
}

#[tokio::test]
async fn decoded_content_links() {
    let (server, confluence) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/content/1477502"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1477502",
            "type": "page",
            "title": "Release notes",
            "version": { "by": { "username": "jsmith" }, "number": 2 }
        })))
        .mount(&server)
        .await;

    let content: Content = confluence
        .content_by_id("1477502", &ContentIdParameters::default())
        .await
        .expect("content");
    let author = content
        .version
        .as_ref()
        .and_then(|v| v.by.as_ref())
        .expect("author");

    check!(
        confluence.profile_url(author) == format!("{}/display/~jsmith", server.uri())
    );
    check!(confluence.tiny_link(&content.id) == Some(format!("{}/x/fosW", server.uri())));
}
