//! Management command line: add users, record check-ins, clear the display,
//! print reports.
//!
//! Bad or incomplete invocations print the usage text and exit normally.

pub mod manager;
pub mod report;

use std::ffi::OsString;

use clap::{CommandFactory, Parser, Subcommand};

use crate::config::Config;
use manager::AttendanceManager;

const EXAMPLES: &str = r#"Examples:
  attendance_manager add_user "John Doe"     # Add new user
  attendance_manager check_attendance 5      # Record attendance for user ID 5
  attendance_manager clear_lcd               # Clear LCD display
  attendance_manager report                  # Show report for all users
  attendance_manager report 5                # Show report for user ID 5"#;

#[derive(Parser, Debug)]
#[command(name = "attendance_manager")]
#[command(about = "Attendance System Manager", long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new user
    #[command(name = "add_user")]
    AddUser {
        /// Display name
        name: String,
    },
    /// Record a check-in for a user at the current time
    #[command(name = "check_attendance")]
    CheckAttendance {
        /// User ID
        user_id: u64,
    },
    /// Clear the LCD display
    #[command(name = "clear_lcd")]
    ClearLcd,
    /// Print the attendance report for everyone or one user
    Report {
        /// Restrict the report to this user ID
        user_id: Option<u64>,
    },
}

/// What one invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Command),
    Help,
}

/// Any parse failure, `--help` included, becomes `Invocation::Help`.
pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(Cli {
            command: Some(command),
        }) => Invocation::Run(command),
        _ => Invocation::Help,
    }
}

pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

pub async fn run(invocation: Invocation) {
    let command = match invocation {
        Invocation::Run(command) => command,
        Invocation::Help => {
            println!("{}", usage());
            return;
        }
    };

    // no database behind the display stub
    if command == Command::ClearLcd {
        AttendanceManager::clear_lcd();
        return;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("✗ Configuration error: {e:#}");
            return;
        }
    };

    let manager = match AttendanceManager::connect(&config).await {
        Ok(manager) => {
            println!("Database connected successfully");
            manager
        }
        Err(e) => {
            tracing::error!(error = %e, "Database connection failed");
            println!("✗ Database connection failed: {e}");
            return;
        }
    };

    match command {
        Command::AddUser { name } => {
            manager.add_user(&name).await;
        }
        Command::CheckAttendance { user_id } => {
            manager.check_attendance(user_id).await;
        }
        Command::Report { user_id } => {
            manager.print_report(user_id).await;
        }
        Command::ClearLcd => {
            AttendanceManager::clear_lcd();
        }
    }

    manager.close().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Invocation {
        parse_args(std::iter::once("attendance_manager").chain(args.iter().copied()))
    }

    #[test]
    fn test_add_user() {
        assert_eq!(
            parse(&["add_user", "John Doe"]),
            Invocation::Run(Command::AddUser {
                name: "John Doe".to_string()
            })
        );
    }

    #[test]
    fn test_check_attendance() {
        assert_eq!(
            parse(&["check_attendance", "5"]),
            Invocation::Run(Command::CheckAttendance { user_id: 5 })
        );
    }

    #[test]
    fn test_clear_lcd() {
        assert_eq!(parse(&["clear_lcd"]), Invocation::Run(Command::ClearLcd));
    }

    #[test]
    fn test_report_with_and_without_user() {
        assert_eq!(
            parse(&["report"]),
            Invocation::Run(Command::Report { user_id: None })
        );
        assert_eq!(
            parse(&["report", "5"]),
            Invocation::Run(Command::Report { user_id: Some(5) })
        );
    }

    #[test]
    fn test_bad_invocations_fall_back_to_help() {
        assert_eq!(parse(&[]), Invocation::Help);
        assert_eq!(parse(&["add_user"]), Invocation::Help);
        assert_eq!(parse(&["check_attendance"]), Invocation::Help);
        assert_eq!(parse(&["check_attendance", "abc"]), Invocation::Help);
        assert_eq!(parse(&["report", "x"]), Invocation::Help);
        assert_eq!(parse(&["frobnicate"]), Invocation::Help);
        assert_eq!(parse(&["--help"]), Invocation::Help);
    }

    #[test]
    fn test_unquoted_multi_word_name_prints_help() {
        assert_eq!(parse(&["add_user", "John", "Doe"]), Invocation::Help);
    }

    #[test]
    fn test_usage_lists_commands() {
        let text = usage();
        for name in ["add_user", "check_attendance", "clear_lcd", "report"] {
            assert!(text.contains(name), "usage is missing {name}");
        }
        assert!(text.contains("Examples:"));
    }
}
