use crate::dto::ComplaintSummaryDto;

pub const REPORT_HEADER: [&str; 6] = [
    "Complaint ID",
    "Category",
    "Description",
    "Status",
    "Created At",
    "Sentiment",
];

/// File name for a customer's report: the name lowercased with spaces
/// replaced by underscores, suffixed with `_report.csv`.
///
/// Any other character outside letters, digits, `_` and `-` also becomes an
/// underscore, so the result is always one plain file name component.
pub fn report_file_name(customer_name: &str) -> String {
    let slug: String = customer_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{slug}_report.csv")
}

/// Renders complaints as CSV in the given order, header first.
pub fn render_csv(complaints: &[ComplaintSummaryDto]) -> String {
    let mut out = String::new();
    push_record(&mut out, REPORT_HEADER.iter().copied());

    for complaint in complaints {
        let id = complaint.id.to_string();
        push_record(
            &mut out,
            [
                id.as_str(),
                complaint.category.as_str(),
                complaint.description.as_str(),
                complaint.status.as_str(),
                complaint.created_at.as_str(),
                complaint.sentiment.as_str(),
            ],
        );
    }

    out
}

fn push_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&escape_csv_field(field));
    }
    out.push_str("\r\n");
}

fn escape_csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
