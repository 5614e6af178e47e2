//! Month selection and attendance aggregation behind the calendar page.

pub mod aggregate;
pub mod month;

pub use aggregate::{MonthAttendance, UserMonth, aggregate_month};
pub use month::{SelectedMonth, days_in_month};
