use chrono::{Local, NaiveDateTime, Timelike};
use sqlx::MySqlPool;
use tracing::{error, info};

use crate::cli::report;
use crate::config::Config;
use crate::db;
use crate::error::StoreError;
use crate::store::{self, ReportScope};

/// Runs management operations against one CLI-scoped pool.
///
/// Every operation prints a `✓`/`✗` line and returns whether it succeeded;
/// store errors stop there.
pub struct AttendanceManager {
    pool: MySqlPool,
}

impl AttendanceManager {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        Ok(Self::new(db::connect(config).await?))
    }

    /// Duplicate names are accepted; each call creates a new user.
    pub async fn add_user(&self, name: &str) -> bool {
        match store::insert_user(&self.pool, name).await {
            Ok(user) => {
                info!(user_id = user.id, name = %user.name, "User added");
                println!("✓ User '{}' added successfully! (ID {})", user.name, user.id);
                true
            }
            Err(e) => {
                error!(error = %e, name, "Failed to add user");
                println!("✗ Error adding user: {e}");
                false
            }
        }
    }

    pub async fn check_attendance(&self, user_id: u64) -> bool {
        let clock_in = now();

        match store::insert_check_in(&self.pool, user_id, clock_in).await {
            Ok(record) => {
                info!(record_id = record.id, user_id, "Check-in recorded");
                println!(
                    "✓ Attendance recorded for user ID {} at {}",
                    record.user_id,
                    record.clock_in.format("%Y-%m-%d %H:%M:%S")
                );
                true
            }
            Err(e) => {
                error!(error = %e, user_id, "Failed to record attendance");
                println!("✗ Error recording attendance: {e}");
                false
            }
        }
    }

    /// Placeholder for the attendance terminal's LCD; nothing to talk to yet.
    pub fn clear_lcd() -> bool {
        println!("✓ LCD display cleared");
        true
    }

    pub async fn print_report(&self, user_id: Option<u64>) -> bool {
        let scope = user_id.map_or(ReportScope::All, ReportScope::User);

        match store::report_rows(&self.pool, scope).await {
            Ok(rows) => {
                println!("{}", report::render(scope, &rows));
                true
            }
            Err(e) => {
                error!(error = %e, ?scope, "Failed to generate report");
                println!("✗ Error generating report: {e}");
                false
            }
        }
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Local wall-clock time at whole-second precision, matching a DATETIME column.
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
