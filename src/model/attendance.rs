use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    pub id: u64,
    pub user_id: u64,
    pub clock_in: NaiveDateTime,
}

/// One row of `users LEFT JOIN attendance` for a month.
/// `clock_in` is NULL for users without a check-in in that month.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MonthRow {
    pub user_id: u64,
    pub name: String,
    pub clock_in: Option<NaiveDateTime>,
}

/// One line of the text report.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ReportRow {
    pub name: String,
    pub clock_in: NaiveDateTime,
}
