use uuid::Uuid;

use super::*;
use crate::auth::Role;

fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        email: "ada@example.com".to_owned(),
        display_name: "Ada".to_owned(),
        role: Role::Owner,
        avatar_url: None,
        created_at: "2024-03-01T10:00:00Z".to_owned(),
        updated_at: "2024-03-01T10:00:00Z".to_owned(),
    }
}

// =============================================================================
// MemoryCache
// =============================================================================

#[test]
fn empty_cache_loads_nothing() {
    let cache = MemoryCache::new();
    assert!(cache.load().is_none());
}

#[test]
fn store_then_load_round_trips() {
    let cache = MemoryCache::new();
    let user = sample_user();
    cache.store(&user);
    assert_eq!(cache.load(), Some(user));
}

#[test]
fn clear_drops_the_record() {
    let cache = MemoryCache::new();
    cache.store(&sample_user());
    cache.clear();
    assert!(cache.load().is_none());
}

#[test]
fn store_overwrites_previous_record() {
    let cache = MemoryCache::new();
    cache.store(&sample_user());
    let mut other = sample_user();
    other.email = "second@example.com".to_owned();
    cache.store(&other);
    assert_eq!(cache.load().unwrap().email, "second@example.com");
}

#[test]
fn rc_handle_shares_the_same_cache() {
    let cache = std::rc::Rc::new(MemoryCache::new());
    let shared = cache.clone();
    let handle: &dyn SessionCache = &shared;
    handle.store(&sample_user());
    assert!(cache.load().is_some());
}
