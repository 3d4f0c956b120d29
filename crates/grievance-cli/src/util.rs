use crate::error::invalid_input;
use anyhow::Result;
use grievance_core::domain::{ComplaintId, CustomerId};
use std::io::{self, Read};
use std::str::FromStr;

pub fn parse_complaint_id(raw: &str) -> Result<ComplaintId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("complaint id cannot be empty"));
    }
    ComplaintId::from_str(trimmed).map_err(|_| invalid_input("invalid complaint id"))
}

pub fn parse_customer_id(raw: &str) -> Result<CustomerId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("customer id cannot be empty"));
    }
    CustomerId::from_str(trimmed).map_err(|_| invalid_input("invalid customer id"))
}

/// Uses `value` unchanged when given, otherwise reads all of stdin and drops
/// the single line terminator a pipe or heredoc appends.
pub fn arg_or_stdin(value: Option<String>) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(strip_line_terminator(buffer))
        }
    }
}

fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::{
        arg_or_stdin, parse_complaint_id, parse_customer_id, single_line, strip_line_terminator,
    };
    use grievance_core::domain::{ComplaintId, CustomerId};

    #[test]
    fn ids_parse_from_trimmed_integers() {
        assert_eq!(parse_complaint_id(" 7 ").expect("id"), ComplaintId(7));
        assert_eq!(parse_customer_id("3").expect("id"), CustomerId(3));
        assert!(parse_complaint_id("").is_err());
        assert!(parse_customer_id("abc").is_err());
    }

    #[test]
    fn explicit_text_is_passed_through_unchanged() {
        assert_eq!(arg_or_stdin(Some("   ".to_string())).expect("text"), "   ");
        assert_eq!(
            arg_or_stdin(Some("  hello there \n".to_string())).expect("text"),
            "  hello there \n"
        );
    }

    #[test]
    fn stdin_loses_only_one_line_terminator() {
        assert_eq!(strip_line_terminator("hello\r\n".to_string()), "hello");
        assert_eq!(strip_line_terminator("hello \n\n".to_string()), "hello \n");
        assert_eq!(strip_line_terminator("  ".to_string()), "  ");
    }

    #[test]
    fn single_line_collapses_whitespace() {
        assert_eq!(single_line("a\n  b\tc"), "a b c");
    }
}
