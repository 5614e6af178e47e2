//! Attendance check-ins stored in MySQL, shown as a monthly calendar page
//! (`attendance-web`) and managed from the command line (`attendance_manager`).

pub mod api;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod view;
