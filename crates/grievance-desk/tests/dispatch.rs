use grievance_core::time::local_date_key;
use grievance_desk::{Desk, DeskConfig, Operation};
use grievance_store::Store;
use serde_json::{json, Value};

fn desk() -> Desk {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    Desk::new(store, DeskConfig::default())
}

fn call(desk: &Desk, request: Value) -> Value {
    let op: Operation = serde_json::from_value(request).expect("parse operation");
    desk.respond(op).expect("respond")
}

#[test]
fn legacy_names_are_accepted() {
    let desk = desk();
    let booked = call(
        &desk,
        json!({
            "op": "book_complaint",
            "customer_name": "Bob",
            "contact": "bob@x.com",
            "category": "Billing",
            "description": "This is absolutely terrible and broken"
        }),
    );
    assert_eq!(booked["status"], "Open");
    assert_eq!(booked["sentiment"], "negative");
    let id = booked["complaint_id"].as_i64().expect("id");

    let status = call(&desk, json!({"op": "check_status", "complaint_id": id}));
    assert_eq!(status["customer"], "Bob");
    assert_eq!(status["status"], "Open");

    let escalated = call(
        &desk,
        json!({"op": "escalate_complaint", "complaint_id": id, "reason": "no reply"}),
    );
    assert_eq!(escalated["status"], "Escalated");
    assert_eq!(escalated["reason"], "no reply");

    let resolved = call(&desk, json!({"op": "resolve_complaint", "complaint_id": id}));
    assert_eq!(
        resolved["message"],
        format!("Complaint {id} has been marked as resolved.")
    );

    let history = call(
        &desk,
        json!({"op": "get_customer_history", "customer_name": "BOB"}),
    );
    assert_eq!(history["history"].as_array().expect("history").len(), 1);

    let by_sentiment = call(
        &desk,
        json!({"op": "get_complaints_by_sentiment", "sentiment": "negative"}),
    );
    assert_eq!(by_sentiment[0]["id"], id);

    let label = call(&desk, json!({"op": "analyze_sentiment", "text": "wonderful"}));
    assert_eq!(label, json!("positive"));
}

#[test]
fn domain_failures_come_back_as_error_objects() {
    let desk = desk();
    assert_eq!(
        call(&desk, json!({"op": "get_status", "complaint_id": 999})),
        json!({"error": "Complaint 999 not found"})
    );
    assert_eq!(
        call(
            &desk,
            json!({"op": "escalate", "complaint_id": 999, "reason": "x"})
        ),
        json!({"error": "Complaint 999 not found"})
    );
    assert_eq!(
        call(&desk, json!({"op": "get_by_sentiment", "sentiment": "angry"})),
        json!({"error": "No complaints found with sentiment 'angry'"})
    );
    assert_eq!(
        call(&desk, json!({"op": "daily_metrics", "date": "15/01/2030"})),
        json!({"error": "invalid date: 15/01/2030"})
    );
    assert!(call(&desk, json!({"op": "list_interactions"}))["error"].is_string());
}

#[test]
fn log_interaction_returns_null_and_is_listed() {
    let desk = desk();
    let booked = call(
        &desk,
        json!({
            "op": "register",
            "customer_name": "Ada",
            "contact": "ada@x.com",
            "category": "Support",
            "description": "Login fails"
        }),
    );
    let complaint_id = booked["complaint_id"].as_i64().expect("id");
    let status = call(&desk, json!({"op": "get_status", "complaint_id": complaint_id}));
    assert_eq!(status["contact"], "ada@x.com");

    let customer = desk
        .store()
        .customers()
        .find("Ada", "ada@x.com")
        .expect("find")
        .expect("customer");

    let logged = call(
        &desk,
        json!({
            "op": "log_interaction",
            "customer_id": customer.id,
            "complaint_id": complaint_id,
            "message": "Still broken"
        }),
    );
    assert_eq!(logged, Value::Null);

    let listed = call(
        &desk,
        json!({"op": "list_interactions", "complaint_id": complaint_id}),
    );
    assert_eq!(listed[0]["sender"], "user");
    assert_eq!(listed[0]["sentiment"], "negative");
}

#[test]
fn daily_metrics_defaults_to_today() {
    let desk = desk();
    let today = local_date_key(grievance_core::time::now_utc());
    let empty = call(&desk, json!({"op": "daily_metrics", "date": "2001-02-03"}));
    assert_eq!(
        empty,
        json!({
            "date": "2001-02-03",
            "total_complaints": 0,
            "resolved_complaints": 0,
            "escalations": 0
        })
    );

    call(
        &desk,
        json!({
            "op": "register",
            "customer_name": "Ada",
            "contact": "ada@x.com",
            "category": "Support",
            "description": "Login fails"
        }),
    );
    let current = call(&desk, json!({"op": "daily_metrics"}));
    assert_eq!(current["date"], today);
    assert_eq!(current["total_complaints"], 1);
}

#[test]
fn unknown_operations_fail_to_parse() {
    let parsed = serde_json::from_value::<Operation>(json!({"op": "delete_everything"}));
    assert!(parsed.is_err());
}
