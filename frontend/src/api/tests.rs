#![cfg(not(coverage))]

use super::*;
use crate::{error::PanelError, state::auth::SessionContext};
use httpmock::prelude::*;
use serde_json::json;

fn session() -> SessionContext {
    SessionContext::new("u-super", "tok-9")
}

fn admin_json(id: &str, added_at: &str) -> serde_json::Value {
    json!({ "id": id, "added_at": added_at })
}

fn error_json(error: &str, code: &str) -> serde_json::Value {
    json!({ "error": error, "code": code })
}

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn list_admins_sends_bearer_token_and_parses_records() {
    let server = MockServer::start_async().await;
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/admins")
            .header("authorization", "Bearer tok-9");
        then.status(200).json_body(json!([
            admin_json("u1", "2025-01-01T09:00:00Z"),
            admin_json("u2", "2025-01-02T09:00:00Z")
        ]));
    });

    let admins = client(&server).list_admins(&session()).await.unwrap();
    list_mock.assert();
    assert_eq!(admins.len(), 2);
    assert_eq!(admins[0].id, "u1");
    assert_eq!(admins[1].added_at.to_rfc3339(), "2025-01-02T09:00:00+00:00");
}

#[tokio::test]
async fn list_admins_without_token_is_denied_locally() {
    let server = MockServer::start_async().await;
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/admins");
        then.status(200).json_body(json!([]));
    });

    let result = client(&server)
        .list_admins(&SessionContext::anonymous())
        .await;
    assert!(matches!(result, Err(PanelError::PermissionDenied(_))));
    list_mock.assert_hits(0);
}

#[tokio::test]
async fn list_admins_maps_forbidden_and_server_errors() {
    let server = MockServer::start_async().await;
    let mut forbidden = server.mock(|when, then| {
        when.method(GET).path("/api/admins");
        then.status(403)
            .json_body(error_json("Admins only", "FORBIDDEN"));
    });
    assert_eq!(
        client(&server).list_admins(&session()).await,
        Err(PanelError::PermissionDenied("Admins only".into()))
    );
    forbidden.delete();

    server.mock(|when, then| {
        when.method(GET).path("/api/admins");
        then.status(503).body("unavailable");
    });
    assert!(matches!(
        client(&server).list_admins(&session()).await,
        Err(PanelError::TransientFailure(_))
    ));
}

#[tokio::test]
async fn list_admins_maps_missing_route_to_transient_with_backend_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admins");
        then.status(404)
            .json_body(error_json("Directory unavailable", "NOT_FOUND"));
    });
    assert_eq!(
        client(&server).list_admins(&session()).await,
        Err(PanelError::TransientFailure("Directory unavailable".into()))
    );
}

#[tokio::test]
async fn list_admins_reports_malformed_body_as_transient() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admins");
        then.status(200).body("not json");
    });
    assert!(matches!(
        client(&server).list_admins(&session()).await,
        Err(PanelError::TransientFailure(_))
    ));
}

#[tokio::test]
async fn add_admin_posts_identity() {
    let server = MockServer::start_async().await;
    let add_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admins")
            .header("authorization", "Bearer tok-9")
            .json_body(json!({ "id": "u7" }));
        then.status(201)
            .json_body(admin_json("u7", "2025-03-01T00:00:00Z"));
    });

    let record = client(&server).add_admin(&session(), "u7").await.unwrap();
    add_mock.assert();
    assert_eq!(record.id, "u7");
}

#[tokio::test]
async fn add_admin_maps_conflict_and_validation() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/admins")
            .json_body(json!({ "id": "u1" }));
        then.status(409)
            .json_body(error_json("Already an admin", "CONFLICT"));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/admins")
            .json_body(json!({ "id": "ghost" }));
        then.status(422)
            .json_body(error_json("User is not registered", "VALIDATION_ERROR"));
    });

    let api = client(&server);
    assert_eq!(
        api.add_admin(&session(), "u1").await,
        Err(PanelError::AlreadyExists("u1".into()))
    );
    assert_eq!(
        api.add_admin(&session(), "ghost").await,
        Err(PanelError::InvalidInput("User is not registered".into()))
    );
}

#[tokio::test]
async fn remove_admin_targets_identity_path() {
    let server = MockServer::start_async().await;
    let remove_mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/admins/u2")
            .header("authorization", "Bearer tok-9");
        then.status(204);
    });

    client(&server).remove_admin(&session(), "u2").await.unwrap();
    remove_mock.assert();
}

#[tokio::test]
async fn remove_admin_percent_encodes_identity() {
    let server = MockServer::start_async().await;
    let remove_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/admins/user%40forum");
        then.status(204);
    });

    client(&server)
        .remove_admin(&session(), "user@forum")
        .await
        .unwrap();
    remove_mock.assert();
}

#[tokio::test]
async fn remove_admin_maps_missing_record() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/admins/ghost");
        then.status(404)
            .json_body(error_json("Not found", "NOT_FOUND"));
    });
    assert_eq!(
        client(&server).remove_admin(&session(), "ghost").await,
        Err(PanelError::NotFound("ghost".into()))
    );
}

#[tokio::test]
async fn role_flags_default_missing_fields_to_false() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/admins/me/role")
            .header("authorization", "Bearer tok-9");
        then.status(200).json_body(json!({ "is_admin": true }));
    });
    let flags = client(&server).get_role_flags(&session()).await.unwrap();
    assert_eq!(
        flags,
        RoleFlagsResponse {
            is_admin: true,
            is_super_admin: false
        }
    );
}

#[tokio::test]
async fn get_me_surfaces_backend_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(401)
            .json_body(error_json("Invalid token", "UNAUTHORIZED"));
    });
    let err = client(&server).get_me(&session()).await.unwrap_err();
    assert_eq!(err.error, "Invalid token");
    assert_eq!(err.code, "UNAUTHORIZED");
}
