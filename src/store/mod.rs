//! Every SQL statement the web view and the CLI run.
//!
//! Each function acquires its own pooled connection (or transaction) and
//! hands it back on drop, whichever way the function exits.

pub mod attendance;
pub mod users;

pub use attendance::{ReportScope, insert_check_in, month_rows, report_rows};
pub use users::{insert_user, list_users};
