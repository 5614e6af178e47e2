use chrono::NaiveDateTime;
use futures_util::TryStreamExt;
use sqlx::MySqlPool;

use crate::calendar::SelectedMonth;
use crate::error::StoreError;
use crate::model::attendance::{AttendanceRecord, MonthRow, ReportRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    All,
    User(u64),
}

/// Records a check-in at `clock_in` and commits.
///
/// `user_id` is not looked up first; an unknown id fails on the foreign key.
pub async fn insert_check_in(
    pool: &MySqlPool,
    user_id: u64,
    clock_in: NaiveDateTime,
) -> Result<AttendanceRecord, StoreError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("INSERT INTO attendance (user_id, clock_in) VALUES (?, ?)")
        .bind(user_id)
        .bind(clock_in)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(AttendanceRecord {
        id: result.last_insert_id(),
        user_id,
        clock_in,
    })
}

/// Every user joined with their check-ins inside `month`. Users without a
/// check-in that month come back once with `clock_in = NULL`.
pub async fn month_rows(pool: &MySqlPool, month: &SelectedMonth) -> Result<Vec<MonthRow>, StoreError> {
    let (start, end) = month.range();
    let mut conn = pool.acquire().await?;

    let rows = sqlx::query_as::<_, MonthRow>(
        r#"
        SELECT u.id AS user_id, u.name, a.clock_in
        FROM users u
        LEFT JOIN attendance a
            ON u.id = a.user_id
            AND a.clock_in >= ? AND a.clock_in < ?
        ORDER BY u.name, u.id, a.clock_in
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

/// Report rows, newest first; the full report is grouped by name first.
pub async fn report_rows(pool: &MySqlPool, scope: ReportScope) -> Result<Vec<ReportRow>, StoreError> {
    let mut conn = pool.acquire().await?;

    let rows: Vec<ReportRow> = match scope {
        ReportScope::User(user_id) => {
            sqlx::query_as::<_, ReportRow>(
                r#"
                SELECT u.name, a.clock_in
                FROM attendance a
                JOIN users u ON a.user_id = u.id
                WHERE u.id = ?
                ORDER BY a.clock_in DESC
                "#,
            )
            .bind(user_id)
            .fetch(&mut *conn)
            .try_collect()
            .await?
        }
        ReportScope::All => {
            sqlx::query_as::<_, ReportRow>(
                r#"
                SELECT u.name, a.clock_in
                FROM attendance a
                JOIN users u ON a.user_id = u.id
                ORDER BY u.name, a.clock_in DESC
                "#,
            )
            .fetch(&mut *conn)
            .try_collect()
            .await?
        }
    };

    Ok(rows)
}
