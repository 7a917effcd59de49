//! Integration tests against a mock Unbound server.

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use unbound_client::store::{STORE_KEY_NAMESPACE, STORE_KEY_URL, STORE_KEY_USER_ID};
use unbound_client::types::{
    ChatRequest, CreateRoomRequest, ListNotesQuery, UpdatePortalRequest,
};
use unbound_client::{KeyValueStore, MemoryStore, Session, SessionOptions};

fn session_for(server: &MockServer) -> Session {
    Session::new(SessionOptions {
        namespace: Some("t".into()),
        token: Some("k".into()),
        url: Some(server.uri()),
        ..Default::default()
    })
}

#[tokio::test]
async fn chat_posts_body_with_auth_and_tenant_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai/generative/chat"))
        .and(header("authorization", "Bearer k"))
        .and(header("x-unbound-namespace", "t"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"method": "gpt"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "hi"})))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let reply = session
        .ai()
        .generative()
        .chat(ChatRequest {
            method: Some("gpt".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(reply, json!({"text": "hi"}));
}

#[tokio::test]
async fn chat_without_method_fails_before_any_request() {
    let server = MockServer::start().await;
    // No mock mounted: any received request would 404 and the expect(0)
    // guard below would catch it.
    Mock::given(method("POST"))
        .and(path("/ai/generative/chat"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let err = session
        .ai()
        .generative()
        .chat(ChatRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("method"));
}

#[tokio::test]
async fn layouts_delete_sends_authenticated_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/layouts/abc"))
        .and(header("authorization", "Bearer k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let reply = session.layouts().delete("abc").await.unwrap();
    assert_eq!(reply, json!({"deleted": true}));
}

#[tokio::test]
async fn layouts_get_builds_both_path_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/layouts/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["l1"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/layouts/contact/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("l42")))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    assert_eq!(
        session.layouts().get("contact", None, None).await.unwrap(),
        json!(["l1"])
    );
    assert_eq!(
        session
            .layouts()
            .get("contact", Some("42"), None)
            .await
            .unwrap(),
        json!("l42")
    );
}

#[tokio::test]
async fn login_skips_auth_and_mirrors_identity_into_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "username": "u",
            "password": "p",
            "tokenType": "cookie",
            "namespace": "t",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"valid": true, "userId": "U"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let session = Session::new(SessionOptions {
        namespace: Some("t".into()),
        url: Some(server.uri()),
        store: Some(store.clone()),
        ..Default::default()
    });

    let response = session.login().login("u", "p", Some("t")).await.unwrap();
    assert!(response.valid);
    assert_eq!(response.user_id.as_deref(), Some("U"));
    assert_eq!(response.namespace.as_deref(), Some("t"));
    assert_eq!(response.url.as_deref(), Some(server.uri().as_str()));

    assert_eq!(session.user_id().as_deref(), Some("U"));
    assert_eq!(store.get(STORE_KEY_URL), Some(server.uri()));
    assert_eq!(store.get(STORE_KEY_USER_ID).as_deref(), Some("U"));
    assert_eq!(store.get(STORE_KEY_NAMESPACE).as_deref(), Some("t"));

    // No Authorization header was sent.
    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r: &Request| !r.headers.contains_key("authorization")));
}

#[tokio::test]
async fn logout_clears_mirrored_identity() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    store.set(STORE_KEY_URL, "x");
    store.set(STORE_KEY_USER_ID, "y");
    store.set(STORE_KEY_NAMESPACE, "z");

    let session = Session::new(SessionOptions {
        namespace: Some("t".into()),
        user_id: Some("U".into()),
        url: Some(server.uri()),
        store: Some(store.clone()),
        ..Default::default()
    });

    session.login().logout().await.unwrap();

    assert_eq!(session.user_id(), None);
    assert_eq!(store.get(STORE_KEY_URL), None);
    assert_eq!(store.get(STORE_KEY_USER_ID), None);
    assert_eq!(store.get(STORE_KEY_NAMESPACE), None);
}

#[tokio::test]
async fn login_and_logout_without_store_still_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"userId": "U"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let session = Session::new(SessionOptions {
        url: Some(server.uri()),
        ..Default::default()
    });

    let response = session.login().login("u", "p", None).await.unwrap();
    assert_eq!(response.user_id.as_deref(), Some("U"));
    session.login().logout().await.unwrap();
    assert_eq!(session.user_id(), None);
}

#[tokio::test]
async fn portal_update_body_carries_only_supplied_keys() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/portals/P"))
        .and(body_json(json!({"name": "X", "isPublic": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "P"})))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(SessionOptions {
        token: Some("k".into()),
        url: Some(server.uri()),
        ..Default::default()
    });

    let reply = session
        .portals()
        .update(
            "P",
            UpdatePortalRequest {
                name: Some("X".into()),
                is_public: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(reply, json!({"id": "P"}));
}

#[tokio::test]
async fn portals_get_public_sends_domain_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/portals/public"))
        .and(query_param("domain", "shop.example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "P"})))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    session.portals().get_public("shop.example").await.unwrap();
}

#[tokio::test]
async fn remote_500_surfaces_status_and_decoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video/rooms"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let session = session_for(&server);
    let err = session
        .video()
        .create_room(CreateRoomRequest::default())
        .await
        .unwrap_err();

    match err {
        unbound_client::Error::Remote { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, json!({"error": "boom"}));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/record-types"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let session = session_for(&server);
    let err = session.record_types().list().await.unwrap_err();
    match err {
        unbound_client::Error::Remote { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, Value::String("bad gateway".into()));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(session.record_types().list().await.unwrap_err().is_server_error());
}

#[tokio::test]
async fn empty_success_body_decodes_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/n1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let session = session_for(&server);
    assert_eq!(session.notes().delete("n1").await.unwrap(), Value::Null);
}

#[tokio::test]
async fn call_and_fw_request_ids_become_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messaging"))
        .and(header("x-unbound-namespace", "t"))
        .and(header("x-unbound-call-id", "c1"))
        .and(header("x-unbound-fw-request-id", "f1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(SessionOptions {
        namespace: Some("t".into()),
        call_id: Some("c1".into()),
        fw_request_id: Some("f1".into()),
        token: Some("k".into()),
        url: Some(server.uri()),
        ..Default::default()
    });
    session.messaging().list().await.unwrap();
}

#[tokio::test]
async fn query_arrays_repeat_the_key_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    session
        .notes()
        .list(ListNotesQuery {
            tags: Some(vec!["a".into(), "b".into()]),
            ..Default::default()
        })
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap();
    assert_eq!(query, "tags=a&tags=b");
}

#[tokio::test]
async fn credential_mutation_applies_to_later_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workflows"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    session.set_token("fresh");
    session.workflows().list().await.unwrap();
}
