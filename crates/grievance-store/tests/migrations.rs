use grievance_store::migrate::latest_version;
use grievance_store::Store;

#[test]
fn migrations_apply_once() {
    let store = Store::open_in_memory().expect("open in memory");
    assert_eq!(store.schema_version().expect("version before"), 0);

    store.migrate().expect("migrate");
    store.migrate().expect("migrate again");

    let version: i64 = store
        .connection()
        .query_row("SELECT version FROM grievance_schema LIMIT 1;", [], |row| {
            row.get(0)
        })
        .expect("schema version");
    assert_eq!(version, latest_version());
    assert_eq!(store.schema_version().expect("version"), latest_version());
}

#[test]
fn migrations_create_all_tables() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    for table in ["customers", "complaints", "interactions", "daily_metrics"] {
        let count: i64 = store
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
                [table],
                |row| row.get(0),
            )
            .expect("lookup table");
        assert_eq!(count, 1, "missing table {table}");
    }
}

#[test]
fn migrations_reject_newer_database() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
        .connection()
        .execute("UPDATE grievance_schema SET version = 99;", [])
        .expect("bump version");

    let err = store.migrate().unwrap_err();
    assert!(err.to_string().contains("newer than available migrations"));
}

#[test]
fn migrations_upgrade_linked_interactions_in_place() {
    let store = Store::open_in_memory().expect("open in memory");
    let conn = store.connection();
    conn.execute_batch(include_str!("../migrations/001_init.sql"))
        .expect("initial schema");
    conn.execute_batch(
        "CREATE TABLE grievance_schema (version INTEGER NOT NULL);
         INSERT INTO grievance_schema (version) VALUES (1);
         INSERT INTO customers (name, name_key, contact) VALUES ('Bob', 'bob', 'bob@x.com');
         INSERT INTO interactions (customer_id, message, sender, sentiment, timestamp)
           VALUES (1, 'kept', 'user', 'neutral', 100);",
    )
    .expect("version 1 data");
    assert!(conn
        .execute(
            "INSERT INTO interactions (customer_id, message, sentiment, timestamp)
             VALUES (42, 'dangling', 'neutral', 200);",
            [],
        )
        .is_err());

    store.migrate().expect("upgrade");
    assert_eq!(store.schema_version().expect("version"), latest_version());

    conn.execute(
        "INSERT INTO interactions (customer_id, message, sentiment, timestamp)
         VALUES (42, 'dangling', 'neutral', 200);",
        [],
    )
    .expect("unknown customer accepted");
    let messages: Vec<String> = conn
        .prepare("SELECT message FROM interactions ORDER BY id;")
        .expect("prepare")
        .query_map([], |row| row.get(0))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows");
    assert_eq!(messages, vec!["kept", "dangling"]);
}
