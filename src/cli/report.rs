use crate::model::attendance::ReportRow;
use crate::store::ReportScope;

pub fn header(scope: ReportScope) -> String {
    match scope {
        ReportScope::User(user_id) => format!("--- Attendance Report for User ID {user_id} ---"),
        ReportScope::All => "--- Full Attendance Report ---".to_string(),
    }
}

/// `Alice: 2024-03-01 at 09:00:00`
pub fn line(row: &ReportRow) -> String {
    format!(
        "{}: {} at {}",
        row.name,
        row.clock_in.format("%Y-%m-%d"),
        row.clock_in.format("%H:%M:%S")
    )
}

/// Full report text: blank line, header, one line per row, total.
pub fn render(scope: ReportScope, rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&header(scope));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out.push_str(&format!("Total records: {}", rows.len()));
    out
}
