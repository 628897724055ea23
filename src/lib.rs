//! # a3s-cron-parser
//!
//! Cron expression field expansion and validation for the A3S ecosystem.
//!
//! Parses a standard 5-field cron expression followed by a command and
//! expands each field into the explicit, ascending set of values it matches.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_parser::parse_schedule;
//!
//! let schedule = parse_schedule("0-29/10,30-59/15 * * * * /usr/bin/find")?;
//! assert_eq!(schedule.minute, vec![0, 10, 20, 30, 45]);
//! assert_eq!(schedule.hour.len(), 24);
//!
//! println!("{schedule}");
//! # Ok::<(), a3s_cron_parser::CronParseError>(())
//! ```
//!
//! ## Architecture
//!
//! - **FieldSpec** — name and bounds of each schedule field
//! - **FieldToken** — a raw field token decoded and validated against a field
//! - **ParsedSchedule** — the expanded fields plus the command

pub mod error;
pub mod field;
pub mod schedule;
pub mod token;

pub use error::{CronParseError, Result};
pub use field::FieldSpec;
pub use schedule::{parse_schedule, ParsedSchedule};
pub use token::{expand_field, validate_field, FieldToken, StepBase};
