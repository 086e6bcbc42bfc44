use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_get_set_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);

    store.set("k", "v1").expect("set");
    assert_eq!(store.get("k").as_deref(), Some("v1"));

    store.set("k", "v2").expect("overwrite");
    assert_eq!(store.get("k").as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);

    store.remove("k").expect("remove");
    assert_eq!(store.get("k"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_remove_missing_key_is_ok() {
    let store = MemoryStore::new();
    assert_eq!(store.remove("missing"), Ok(()));
}

#[test]
fn memory_store_quota_rejects_oversized_write() {
    let store = MemoryStore::with_quota(10);
    store.set("a", "1234").expect("fits");
    let err = store.set("b", "123456789").expect_err("over quota");
    assert!(matches!(err, StoreError::QuotaExceeded { ref key, limit: 10, .. } if key == "b"));
    assert_eq!(store.get("b"), None);
    assert_eq!(store.get("a").as_deref(), Some("1234"));
}

#[test]
fn memory_store_quota_counts_replaced_value_once() {
    let store = MemoryStore::with_quota(6);
    store.set("k", "12345").expect("fits");
    store.set("k", "abcde").expect("replacement fits");
    assert_eq!(store.get("k").as_deref(), Some("abcde"));
}

#[test]
fn memory_store_keys_are_sorted() {
    let store = MemoryStore::new();
    store.set("b", "").expect("set");
    store.set("a", "").expect("set");
    assert_eq!(store.keys(), vec!["a".to_owned(), "b".to_owned()]);
}

// =============================================================
// Namespaced
// =============================================================

#[test]
fn namespaced_prefixes_keys() {
    let store = Namespaced::new(MemoryStore::new(), "keepsake");
    store.set("unlock-flag", "true").expect("set");
    assert_eq!(store.inner().keys(), vec!["keepsake:unlock-flag".to_owned()]);
    assert_eq!(store.get("unlock-flag").as_deref(), Some("true"));
    assert_eq!(store.inner().get("unlock-flag"), None);
}

#[test]
fn namespaced_remove_only_touches_own_key() {
    let shared = Rc::new(MemoryStore::new());
    shared.set("unlock-flag", "foreign").expect("set");
    let store = Namespaced::new(Rc::clone(&shared), "keepsake");
    store.set("unlock-flag", "true").expect("set");
    store.remove("unlock-flag").expect("remove");
    assert_eq!(shared.get("unlock-flag").as_deref(), Some("foreign"));
    assert_eq!(shared.get("keepsake:unlock-flag"), None);
}

#[test]
fn rc_store_delegates() {
    let store = Rc::new(MemoryStore::new());
    let alias: Rc<dyn KeyedStore> = store.clone();
    alias.set("k", "v").expect("set");
    assert_eq!(store.get("k").as_deref(), Some("v"));
}
