//! Cron expression parser
//!
//! Binds the first five whitespace-separated tokens of an expression to the
//! schedule fields and treats everything after them as the command.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::{CronParseError, Result};
use crate::field::FieldSpec;
use crate::token::FieldToken;

/// Column width used when rendering field names
const NAME_WIDTH: usize = 14;

/// A fully expanded cron expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSchedule {
    /// Matching minutes (0-59)
    pub minute: Vec<u32>,
    /// Matching hours (0-23)
    pub hour: Vec<u32>,
    /// Matching days of month (1-31)
    #[serde(rename = "day of month")]
    pub day_of_month: Vec<u32>,
    /// Matching months (1-12)
    pub month: Vec<u32>,
    /// Matching days of week (0-6, 0=Sunday)
    #[serde(rename = "day of week")]
    pub day_of_week: Vec<u32>,
    /// Command text, tokens rejoined with single spaces
    #[serde(serialize_with = "serialize_command")]
    pub command: String,
}

impl ParsedSchedule {
    /// Look up an expanded field by its display name
    pub fn get(&self, name: &str) -> Option<&[u32]> {
        FieldSpec::SCHEDULE
            .iter()
            .zip(self.fields())
            .find(|(spec, _)| spec.name == name)
            .map(|(_, values)| values)
    }

    /// Expanded fields in expression order
    pub fn fields(&self) -> [&[u32]; 5] {
        [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
    }
}

impl FromStr for ParsedSchedule {
    type Err = CronParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_schedule(s)
    }
}

impl fmt::Display for ParsedSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (spec, values) in FieldSpec::SCHEDULE.iter().zip(self.fields()) {
            let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            writeln!(
                f,
                "{:<width$}{}",
                spec.name,
                values.join(" "),
                width = NAME_WIDTH
            )?;
        }
        write!(f, "{:<width$}{}", "command", self.command, width = NAME_WIDTH)
    }
}

fn serialize_command<S>(command: &str, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    [command].serialize(serializer)
}

/// Parse a cron expression with a trailing command
///
/// Fields are validated in order (minute, hour, day of month, month, day of
/// week) and the first invalid one is reported. Nothing is expanded until all
/// five fields are valid.
///
/// # Examples
///
/// ```
/// use a3s_cron_parser::parse_schedule;
///
/// let schedule = parse_schedule("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
/// assert_eq!(schedule.minute, vec![0, 15, 30, 45]);
/// assert_eq!(schedule.day_of_week, vec![1, 2, 3, 4, 5]);
/// assert_eq!(schedule.command, "/usr/bin/find");
/// ```
pub fn parse_schedule(expression: &str) -> Result<ParsedSchedule> {
    let parts: Vec<&str> = expression.split_whitespace().collect();

    if parts.len() <= FieldSpec::SCHEDULE.len() {
        debug!(tokens = parts.len(), "Cron expression has no command");
        return Err(CronParseError::MissingCommand);
    }

    let minute = decode(parts[0], &FieldSpec::MINUTE)?;
    let hour = decode(parts[1], &FieldSpec::HOUR)?;
    let day_of_month = decode(parts[2], &FieldSpec::DAY_OF_MONTH)?;
    let month = decode(parts[3], &FieldSpec::MONTH)?;
    let day_of_week = decode(parts[4], &FieldSpec::DAY_OF_WEEK)?;

    let schedule = ParsedSchedule {
        minute: minute.expand(&FieldSpec::MINUTE),
        hour: hour.expand(&FieldSpec::HOUR),
        day_of_month: day_of_month.expand(&FieldSpec::DAY_OF_MONTH),
        month: month.expand(&FieldSpec::MONTH),
        day_of_week: day_of_week.expand(&FieldSpec::DAY_OF_WEEK),
        command: parts[FieldSpec::SCHEDULE.len()..].join(" "),
    };

    debug!(expression, command = %schedule.command, "Parsed cron expression");
    Ok(schedule)
}

fn decode(raw: &str, spec: &FieldSpec) -> Result<FieldToken> {
    trace!(field = spec.name, token = raw, "Validating field");
    FieldToken::parse(raw, spec).map_err(|e| {
        debug!(field = spec.name, token = raw, error = %e, "Invalid cron field");
        e
    })
}
