use chrono::NaiveDateTime;

use super::constants::{DUE_DATE_FORMAT, DUE_DATE_LEN};

/// Parse a due date in the fixed sortable format.
///
/// chrono accepts unpadded numeric fields, so the length is checked as well to only
/// admit the exact `yyyy-MM-ddTHH:mm:ss` shape.
pub fn parse_due_date(input: &str) -> Option<NaiveDateTime> {
    if input.len() != DUE_DATE_LEN {
        return None;
    }
    NaiveDateTime::parse_from_str(input, DUE_DATE_FORMAT).ok()
}

/// Render a due date in the fixed sortable format.
pub fn format_due_date(value: &NaiveDateTime) -> String {
    value.format(DUE_DATE_FORMAT).to_string()
}
