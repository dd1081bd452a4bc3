use super::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::executor::block_on;

use crate::net::http::{RawRequest, RawResponse};
use crate::session::{TOKEN_KEY, USER_KEY};
use crate::storage::MemoryStore;

#[derive(Clone, Default)]
struct StubDispatch {
    calls: Rc<RefCell<Vec<RawRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<RawResponse, ApiError>>>>,
}

impl StubDispatch {
    fn replying(status: u16, body: &str) -> Self {
        let stub = Self::default();
        stub.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.to_owned(),
        }));
        stub
    }

    fn calls(&self) -> Vec<RawRequest> {
        self.calls.borrow().clone()
    }
}

impl Dispatch for StubDispatch {
    async fn send(&self, request: &RawRequest) -> Result<RawResponse, ApiError> {
        self.calls.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("scripted response")
    }
}

fn client(dispatch: StubDispatch, store: MemoryStore) -> AuthClient<StubDispatch, MemoryStore> {
    let vault = SessionVault::new(store);
    let transport = Transport::new(
        dispatch,
        vault.clone(),
        "http://api.test".to_owned(),
        Box::new(|| {}),
    );
    AuthClient::new(transport, vault)
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_persists_token_and_user() {
    let store = MemoryStore::new();
    let api = client(
        StubDispatch::replying(200, r#"{"token":"t1","id":7,"role":"SUPERADMIN"}"#),
        store.clone(),
    );

    let session = block_on(api.login("valid@x.com", "validpass")).expect("session");

    assert_eq!(session.token, "t1");
    assert_eq!(session.user.id, Some(7));
    assert_eq!(store.get(TOKEN_KEY), Some("t1".to_owned()));
    assert!(store.get(USER_KEY).is_some());
}

#[test]
fn login_stores_full_response_body_as_user_record() {
    let store = MemoryStore::new();
    let api = client(
        StubDispatch::replying(200, r#"{"token":"t1","id":7}"#),
        store.clone(),
    );

    block_on(api.login("valid@x.com", "validpass")).expect("session");

    let raw = store.get(USER_KEY).expect("user record");
    let record: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(record["token"], "t1");
    assert_eq!(record["id"], 7);
}

#[test]
fn login_sends_credentials_without_bearer() {
    let store = MemoryStore::new();
    let dispatch = StubDispatch::replying(200, r#"{"token":"t1","id":7}"#);
    let api = client(dispatch.clone(), store);

    block_on(api.login("a@b.com", "secreto1")).expect("session");

    let calls = dispatch.calls();
    assert_eq!(calls[0].url, "http://api.test/api/auth/login");
    assert_eq!(calls[0].bearer, None);
    let body: serde_json::Value = serde_json::from_str(&calls[0].body).expect("json");
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["password"], "secreto1");
}

#[test]
fn login_failure_leaves_storage_untouched() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "old-token");
    store.set(USER_KEY, r#"{"id":1}"#);
    let api = client(
        StubDispatch::replying(400, r#"{"message":"Credenciales inválidas"}"#),
        store.clone(),
    );

    let err = block_on(api.login("a@b.com", "wrongpass")).expect_err("http error");

    assert_eq!(err.status(), Some(400));
    assert_eq!(store.get(TOKEN_KEY), Some("old-token".to_owned()));
    assert_eq!(store.get(USER_KEY), Some(r#"{"id":1}"#.to_owned()));
}

#[test]
fn login_response_without_token_is_malformed_and_not_persisted() {
    let store = MemoryStore::new();
    let api = client(StubDispatch::replying(200, r#"{"id":7}"#), store.clone());

    let err = block_on(api.login("a@b.com", "validpass")).expect_err("malformed");

    assert!(matches!(err, ApiError::Malformed(_)));
    assert!(store.is_empty());
}

// =============================================================
// logout / current_user
// =============================================================

#[test]
fn logout_clears_the_persisted_session() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "t1");
    store.set(USER_KEY, r#"{"id":7}"#);
    let api = client(StubDispatch::default(), store.clone());

    api.logout();

    assert!(store.is_empty());
}

#[test]
fn logout_without_session_is_a_no_op() {
    let store = MemoryStore::new();
    let api = client(StubDispatch::default(), store.clone());

    api.logout();

    assert!(store.is_empty());
}

#[test]
fn current_user_round_trips_after_login() {
    let store = MemoryStore::new();
    let session = {
        let api = client(
            StubDispatch::replying(200, r#"{"token":"t1","id":7}"#),
            store.clone(),
        );
        block_on(api.login("valid@x.com", "validpass")).expect("session")
    };

    // A fresh client over the same storage, as after a page reload.
    let api = client(StubDispatch::default(), store);
    assert_eq!(api.current_user(), Some(session.user));
}

#[test]
fn current_user_with_malformed_record_is_none() {
    let store = MemoryStore::new();
    store.set(USER_KEY, "{not json");
    let api = client(StubDispatch::default(), store);

    assert_eq!(api.current_user(), None);
}

// =============================================================
// register / forgot password
// =============================================================

#[test]
fn register_super_admin_does_not_persist_a_session() {
    let store = MemoryStore::new();
    let dispatch = StubDispatch::replying(201, r#"{"message":"Revisa tu email"}"#);
    let api = client(dispatch.clone(), store.clone());

    let resp = block_on(api.register_super_admin("a@b.com", "Secreto12", "Liga Norte"))
        .expect("response");

    assert_eq!(resp.message.as_deref(), Some("Revisa tu email"));
    assert!(store.is_empty());

    let body: serde_json::Value =
        serde_json::from_str(&dispatch.calls()[0].body).expect("json");
    assert_eq!(body["nombreLiga"], "Liga Norte");
}

#[test]
fn register_super_admin_propagates_server_errors() {
    let api = client(
        StubDispatch::replying(409, r#"{"message":"La liga ya existe"}"#),
        MemoryStore::new(),
    );

    let err = block_on(api.register_super_admin("a@b.com", "Secreto12", "Liga Norte"))
        .expect_err("conflict");

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.server_message(), Some("La liga ya existe"));
}

#[test]
fn forgot_password_posts_the_email() {
    let dispatch = StubDispatch::replying(200, "{}");
    let api = client(dispatch.clone(), MemoryStore::new());

    block_on(api.forgot_password("a@b.com")).expect("response");

    let call = &dispatch.calls()[0];
    assert_eq!(call.url, "http://api.test/api/auth/forgot-password");
    let body: serde_json::Value = serde_json::from_str(&call.body).expect("json");
    assert_eq!(body["email"], "a@b.com");
}

#[test]
fn forgot_password_propagates_server_errors() {
    let api = client(
        StubDispatch::replying(404, r#"{"message":"Email no registrado"}"#),
        MemoryStore::new(),
    );

    let err = block_on(api.forgot_password("missing@x.com")).expect_err("not found");

    assert_eq!(err.status(), Some(404));
}
