use grievance_store::Store;

fn store() -> Store {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
}

#[test]
fn resolve_or_create_is_idempotent() {
    let store = store();

    let first = store
        .customers()
        .resolve_or_create("Alice", "a@x.com")
        .expect("create");
    let second = store
        .customers()
        .resolve_or_create("Alice", "a@x.com")
        .expect("resolve");

    assert_eq!(first.id, second.id);
    assert_eq!(store.customers().count().expect("count"), 1);
}

#[test]
fn resolve_or_create_ignores_name_case() {
    let store = store();

    let first = store
        .customers()
        .resolve_or_create("Alice", "a@x.com")
        .expect("create");
    let upper = store
        .customers()
        .resolve_or_create("ALICE", "a@x.com")
        .expect("resolve upper");

    assert_eq!(first.id, upper.id);
    assert_eq!(upper.name, "Alice");
    assert_eq!(store.customers().count().expect("count"), 1);
}

#[test]
fn contact_is_matched_exactly() {
    let store = store();

    let lower = store
        .customers()
        .resolve_or_create("Alice", "a@x.com")
        .expect("create");
    let other = store
        .customers()
        .resolve_or_create("Alice", "A@X.COM")
        .expect("create other");

    assert_ne!(lower.id, other.id);
    assert_eq!(store.customers().count().expect("count"), 2);
}

#[test]
fn find_and_get_return_existing_rows() {
    let store = store();
    let created = store
        .customers()
        .resolve_or_create("Grace Hopper", "grace@navy.mil")
        .expect("create");

    let found = store
        .customers()
        .find("grace hopper", "grace@navy.mil")
        .expect("find")
        .expect("customer");
    assert_eq!(found, created);

    let fetched = store
        .customers()
        .get(created.id)
        .expect("get")
        .expect("customer");
    assert_eq!(fetched.contact, "grace@navy.mil");

    assert!(store
        .customers()
        .find("Grace Hopper", "other@navy.mil")
        .expect("find missing")
        .is_none());
}

#[test]
fn resolve_or_create_joins_an_open_transaction() {
    let store = store();
    {
        let tx = store.begin().expect("begin");
        store
            .customers()
            .resolve_or_create("Ada", "ada@x.com")
            .expect("create in tx");
        drop(tx);
    }

    assert_eq!(store.customers().count().expect("count"), 0);
}
