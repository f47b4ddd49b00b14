use std::rc::Rc;

use super::*;
use crate::auth::Role;
use crate::config::ApiConfig;
use crate::net::mock::MockTransport;
use crate::session::cache::MemoryCache;
use crate::session::store::SessionPhase;

const USER_JSON: &str = r#"{
    "id": "7d7f9a4e-64c9-4bbd-9d2a-1f0e5c6a7b8c",
    "email": "ada@example.com",
    "displayName": "Ada",
    "role": "team",
    "createdAt": "2024-03-01T10:00:00Z",
    "updatedAt": "2024-03-02T11:00:00Z"
}"#;

struct Fixture {
    mock: Rc<MockTransport>,
    cache: Rc<MemoryCache>,
    service: SessionService,
}

fn fixture() -> Fixture {
    fixture_with_config(ApiConfig::with_base_url("http://api.test"))
}

fn fixture_with_demo_login() -> Fixture {
    let mut config = ApiConfig::with_base_url("http://api.test");
    config.allow_demo_login = true;
    fixture_with_config(config)
}

fn fixture_with_config(config: ApiConfig) -> Fixture {
    let mock = Rc::new(MockTransport::new());
    let cache = Rc::new(MemoryCache::new());
    let client = Rc::new(ApiClient::new(config, mock.clone()));
    let service = SessionService::new(client, Box::new(cache.clone()));
    Fixture { mock, cache, service }
}

fn cached_user() -> crate::auth::User {
    serde_json::from_str(USER_JSON).unwrap()
}

// =============================================================================
// google login
// =============================================================================

#[tokio::test]
async fn google_login_success_authenticates() {
    let f = fixture();
    f.mock.push_ok(&format!(r#"{{"user": {USER_JSON}}}"#));

    assert!(f.service.login_with_google("tok").await);
    let store = f.service.store();
    assert!(store.is_authenticated());
    assert_eq!(store.phase(), SessionPhase::Authenticated);
    assert!(!store.is_loading());
    assert_eq!(store.user().unwrap().email, "ada@example.com");
}

#[tokio::test]
async fn google_login_success_caches_the_user() {
    let f = fixture();
    f.mock.push_ok(&format!(r#"{{"user": {USER_JSON}}}"#));

    f.service.login_with_google("tok").await;
    assert_eq!(f.cache.load().unwrap().email, "ada@example.com");
}

#[tokio::test]
async fn google_login_rejection_returns_to_anonymous() {
    let f = fixture();
    f.mock
        .push_response(401, "Unauthorized", r#"{"detail": "invalid id token"}"#);

    assert!(!f.service.login_with_google("bad").await);
    let store = f.service.store();
    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn google_login_network_failure_leaves_no_partial_state() {
    let f = fixture();
    f.mock.push_network_error("connection refused");

    assert!(!f.service.login_with_google("tok").await);
    assert!(f.service.store().user().is_none());
    assert!(f.cache.load().is_none());
}

// =============================================================================
// demo login
// =============================================================================

#[tokio::test]
async fn demo_login_valid_pair_authenticates_as_team() {
    let f = fixture_with_demo_login();
    assert!(f.service.login_with_password("demo@example.com", "demo123"));
    let user = f.service.store().user().unwrap();
    assert_eq!(user.role, Role::Team);
    assert!(f.service.store().is_authenticated());
}

#[tokio::test]
async fn demo_login_invalid_password_sets_no_user() {
    let f = fixture_with_demo_login();
    assert!(!f.service.login_with_password("demo@example.com", "nope"));
    assert!(!f.service.store().is_authenticated());
    assert!(f.service.store().user().is_none());
}

#[tokio::test]
async fn demo_login_disabled_by_default() {
    let f = fixture();
    assert!(!f.service.login_with_password("demo@example.com", "demo123"));
    assert!(!f.service.store().is_authenticated());
}

#[tokio::test]
async fn demo_login_never_touches_the_network() {
    let f = fixture_with_demo_login();
    f.service.login_with_password("demo@example.com", "demo123");
    assert!(f.mock.requests().is_empty());
}

// =============================================================================
// logout — unconditional teardown
// =============================================================================

#[tokio::test]
async fn logout_clears_state_when_server_call_succeeds() {
    let f = fixture();
    f.mock.push_ok(&format!(r#"{{"user": {USER_JSON}}}"#));
    f.service.login_with_google("tok").await;

    f.mock.push_response(200, "OK", "");
    f.service.logout().await;

    let store = f.service.store();
    assert!(store.user().is_none());
    assert!(!store.is_authenticated());
    assert!(f.cache.load().is_none());
}

#[tokio::test]
async fn logout_clears_state_even_when_server_call_fails() {
    let f = fixture();
    f.mock.push_ok(&format!(r#"{{"user": {USER_JSON}}}"#));
    f.service.login_with_google("tok").await;

    f.mock.push_network_error("connection refused");
    f.service.logout().await;

    let store = f.service.store();
    assert!(store.user().is_none());
    assert!(!store.is_authenticated());
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert!(f.cache.load().is_none());
}

// =============================================================================
// reconciliation
// =============================================================================

#[tokio::test]
async fn reconcile_success_installs_authoritative_record() {
    let f = fixture();
    f.mock.push_ok(USER_JSON);

    assert!(f.service.reconcile().await);
    assert_eq!(f.service.store().phase(), SessionPhase::Authenticated);
    assert_eq!(f.service.store().user().unwrap().display_name, "Ada");
}

#[tokio::test]
async fn reconcile_failure_clears_previously_authenticated_state() {
    let f = fixture();
    f.mock.push_ok(&format!(r#"{{"user": {USER_JSON}}}"#));
    f.service.login_with_google("tok").await;

    f.mock.push_response(401, "Unauthorized", "{}");
    assert!(!f.service.reconcile().await);
    assert!(f.service.store().user().is_none());
    assert!(!f.service.store().is_authenticated());
}

#[tokio::test]
async fn reconcile_network_failure_clears_the_session() {
    let f = fixture();
    f.mock.push_network_error("dns failure");
    assert!(!f.service.reconcile().await);
    assert_eq!(f.service.store().phase(), SessionPhase::Anonymous);
}

#[tokio::test]
async fn reconcile_skipped_while_mutation_in_flight() {
    let f = fixture();
    assert!(f.service.store().try_begin_mutation());

    // The latch is held, so no request goes out and state is untouched.
    assert!(!f.service.reconcile().await);
    assert!(f.mock.requests().is_empty());
}

// =============================================================================
// rehydration
// =============================================================================

#[tokio::test]
async fn rehydrate_confirms_cached_user_with_the_server() {
    let f = fixture();
    f.cache.store(&cached_user());
    f.mock.push_ok(USER_JSON);

    assert!(f.service.rehydrate().await);
    assert_eq!(f.service.store().phase(), SessionPhase::Authenticated);
}

#[tokio::test]
async fn rehydrate_with_expired_cookie_clears_cached_claim() {
    let f = fixture();
    f.cache.store(&cached_user());
    f.mock.push_response(401, "Unauthorized", r#"{"detail": "session expired"}"#);

    assert!(!f.service.rehydrate().await);
    let store = f.service.store();
    assert!(store.user().is_none());
    assert!(!store.is_authenticated());
    assert!(f.cache.load().is_none());
}

#[tokio::test]
async fn rehydrate_with_empty_cache_still_probes_the_server() {
    let f = fixture();
    f.mock.push_response(401, "Unauthorized", "{}");

    assert!(!f.service.rehydrate().await);
    assert_eq!(f.mock.requests().len(), 1);
}

// =============================================================================
// refresh
// =============================================================================

#[tokio::test]
async fn refresh_success_keeps_session_alive() {
    let f = fixture();
    f.mock.push_ok(&format!(r#"{{"user": {USER_JSON}}}"#));
    assert!(f.service.refresh().await);
    assert!(f.service.store().is_authenticated());
}

#[tokio::test]
async fn refresh_failure_tears_the_session_down() {
    let f = fixture();
    f.mock.push_ok(&format!(r#"{{"user": {USER_JSON}}}"#));
    f.service.login_with_google("tok").await;

    f.mock.push_response(401, "Unauthorized", "{}");
    assert!(!f.service.refresh().await);
    assert!(f.service.store().user().is_none());
}

// =============================================================================
// invariant across operation sequences
// =============================================================================

#[tokio::test]
async fn authenticated_flag_never_disagrees_with_user_presence() {
    let f = fixture_with_demo_login();

    let check = |store: &super::SessionStore| {
        assert_eq!(store.is_authenticated(), store.user().is_some());
    };

    check(f.service.store());
    f.mock.push_ok(&format!(r#"{{"user": {USER_JSON}}}"#));
    f.service.login_with_google("tok").await;
    check(f.service.store());
    f.mock.push_response(401, "Unauthorized", "{}");
    f.service.reconcile().await;
    check(f.service.store());
    f.service.login_with_password("demo@example.com", "demo123");
    check(f.service.store());
    f.mock.push_network_error("offline");
    f.service.logout().await;
    check(f.service.store());
}
