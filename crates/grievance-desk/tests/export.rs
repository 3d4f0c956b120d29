use grievance_core::time::format_timestamp_datetime;
use grievance_desk::{Desk, DeskConfig, DeskErrorKind};
use grievance_store::Store;
use std::fs;
use tempfile::TempDir;

const NOW: i64 = 1_900_000_000;

fn desk(temp: &TempDir) -> Desk {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    Desk::new(
        store,
        DeskConfig {
            reports_dir: temp.path().join("reports"),
            ..DeskConfig::default()
        },
    )
}

#[test]
fn export_without_complaints_writes_nothing() {
    let temp = TempDir::new().expect("tempdir");
    let desk = desk(&temp);

    let err = desk.export_report("NoSuchCustomer").unwrap_err();
    assert_eq!(err.kind(), DeskErrorKind::NotFound);
    assert_eq!(err.to_string(), "No complaints found for NoSuchCustomer");
    assert!(!temp.path().join("reports").exists());
}

#[test]
fn export_writes_csv_in_storage_order() {
    let temp = TempDir::new().expect("tempdir");
    let desk = desk(&temp);

    let first = desk
        .register_at(NOW, "Mary Ann", "mary@x.com", "Billing", "Charged twice, no refund")
        .expect("first");
    let second = desk
        .register_at(NOW + 5, "mary ann", "mary@work.com", "Delivery", "Parcel \"lost\"")
        .expect("second");
    desk.resolve_at(NOW + 10, first.complaint_id)
        .expect("resolve");

    let export = desk.export_report("Mary Ann").expect("export");
    let expected_path = temp.path().join("reports").join("mary_ann_report.csv");
    assert_eq!(export.csv_file, expected_path.display().to_string());
    assert_eq!(
        export.message,
        format!("Report exported successfully to {}", expected_path.display())
    );
    assert_eq!(export.customer, "Mary Ann");
    assert_eq!(export.exported_complaints.len(), 2);

    let contents = fs::read_to_string(&expected_path).expect("read report");
    let lines: Vec<&str> = contents.split("\r\n").collect();
    assert_eq!(
        lines[0],
        "Complaint ID,Category,Description,Status,Created At,Sentiment"
    );
    assert_eq!(
        lines[1],
        format!(
            "{},Billing,\"Charged twice, no refund\",Resolved,{},{}",
            first.complaint_id,
            format_timestamp_datetime(NOW),
            first.sentiment
        )
    );
    assert_eq!(
        lines[2],
        format!(
            "{},Delivery,\"Parcel \"\"lost\"\"\",Open,{},{}",
            second.complaint_id,
            format_timestamp_datetime(NOW + 5),
            second.sentiment
        )
    );
    assert_eq!(lines.len(), 4);
}

#[test]
fn export_keeps_reports_inside_the_reports_dir() {
    let temp = TempDir::new().expect("tempdir");
    let desk = desk(&temp);
    let reports_dir = temp.path().join("reports");

    for name in ["AC/DC", "../x"] {
        desk.register_at(NOW, name, "fan@x.com", "Billing", "Charged twice")
            .expect("register");
        let export = desk.export_report(name).expect("export");
        let path = std::path::PathBuf::from(&export.csv_file);
        assert_eq!(path.parent(), Some(reports_dir.as_path()), "{name}");
        assert!(path.is_file(), "{name}");
    }
    assert!(reports_dir.join("ac_dc_report.csv").is_file());
    assert!(reports_dir.join("___x_report.csv").is_file());
    assert!(!temp.path().join("x_report.csv").exists());
}
