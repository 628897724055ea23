//! Cron expression parsing integration tests
//!
//! End-to-end tests through the public API: happy-path expansions for every
//! field syntax, per-field validation failures, and output rendering.

use a3s_cron_parser::{parse_schedule, CronParseError, FieldSpec, ParsedSchedule};

fn all(spec: &FieldSpec) -> Vec<u32> {
    (spec.min..=spec.max).collect()
}

fn assert_invalid(expression: &str, field: &str) {
    let err = parse_schedule(expression).unwrap_err();
    assert!(
        err.to_string().contains(&format!("Invalid {field} field")),
        "{expression}: unexpected error {err}"
    );
    assert_eq!(err.field(), Some(field));
}

// ─── Happy Path ──────────────────────────────────────────────────

#[test]
fn test_every_fifteen_minutes() {
    let schedule = parse_schedule("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
    assert_eq!(
        schedule,
        ParsedSchedule {
            minute: vec![0, 15, 30, 45],
            hour: vec![0],
            day_of_month: vec![1, 15],
            month: all(&FieldSpec::MONTH),
            day_of_week: vec![1, 2, 3, 4, 5],
            command: "/usr/bin/find".to_string(),
        }
    );
}

#[test]
fn test_single_values() {
    let schedule = parse_schedule("0 12 1 1 0 /usr/bin/find").unwrap();
    assert_eq!(schedule.minute, vec![0]);
    assert_eq!(schedule.hour, vec![12]);
    assert_eq!(schedule.day_of_month, vec![1]);
    assert_eq!(schedule.month, vec![1]);
    assert_eq!(schedule.day_of_week, vec![0]);
}

#[test]
fn test_ranges() {
    let schedule = parse_schedule("0 0 1-5 1 0 /usr/bin/find").unwrap();
    assert_eq!(schedule.day_of_month, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_steps_with_wildcards() {
    let schedule = parse_schedule("*/20 * * * * /usr/bin/find").unwrap();
    assert_eq!(schedule.minute, vec![0, 20, 40]);
    assert_eq!(schedule.hour, all(&FieldSpec::HOUR));
    assert_eq!(schedule.day_of_month, all(&FieldSpec::DAY_OF_MONTH));
    assert_eq!(schedule.month, all(&FieldSpec::MONTH));
    assert_eq!(schedule.day_of_week, all(&FieldSpec::DAY_OF_WEEK));
}

#[test]
fn test_step_mixed_with_values() {
    let schedule = parse_schedule("*/5,3,17 * * * * /usr/bin/find").unwrap();
    assert_eq!(
        schedule.minute,
        vec![0, 3, 5, 10, 15, 17, 20, 25, 30, 35, 40, 45, 50, 55]
    );
}

#[test]
fn test_working_hours_and_late_evening() {
    let schedule = parse_schedule("0 9-17,22 * * 1-5 /usr/bin/find").unwrap();
    assert_eq!(schedule.hour, vec![9, 10, 11, 12, 13, 14, 15, 16, 17, 22]);
    assert_eq!(schedule.day_of_week, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_every_minute_on_the_tenth() {
    let schedule = parse_schedule("* * 10 * 1,2 /usr/bin/find").unwrap();
    assert_eq!(schedule.minute, all(&FieldSpec::MINUTE));
    assert_eq!(schedule.day_of_month, vec![10]);
    assert_eq!(schedule.day_of_week, vec![1, 2]);
}

#[test]
fn test_ranged_steps_in_list() {
    let schedule = parse_schedule("0-29/10,30-59/15 * * * * /usr/bin/find").unwrap();
    assert_eq!(schedule.minute, vec![0, 10, 20, 30, 45]);
}

#[test]
fn test_command_with_arguments() {
    let schedule = parse_schedule("0 0 * * 0 tar -czf /backup/home.tgz /home").unwrap();
    assert_eq!(schedule.command, "tar -czf /backup/home.tgz /home");
}

#[test]
fn test_values_stay_in_bounds() {
    let expressions = [
        "*/7 */5 */3 */2 */4 cmd",
        "5/13 1-23/4 10-31/10 2,4-6,*/6 0-6/3 cmd",
        "0,59,30-31 23,0 31,1 12,1 6,0 cmd",
    ];
    for expression in expressions {
        let schedule = parse_schedule(expression).unwrap();
        for (spec, values) in FieldSpec::SCHEDULE.iter().zip(schedule.fields()) {
            assert!(!values.is_empty());
            assert!(values.iter().all(|v| spec.contains(*v)));
            assert!(values.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────

#[test]
fn test_invalid_minute() {
    assert_invalid("60 0 1 1 0 /usr/bin/find", "minute");
}

#[test]
fn test_invalid_hour() {
    assert_invalid("0 24 1 1 0 /usr/bin/find", "hour");
}

#[test]
fn test_invalid_day_of_month() {
    assert_invalid("0 0 0 1 0 /usr/bin/find", "day of month");
}

#[test]
fn test_invalid_month() {
    assert_invalid("0 0 1 13 0 /usr/bin/find", "month");
}

#[test]
fn test_invalid_day_of_week() {
    assert_invalid("0 0 1 1 7 /usr/bin/find", "day of week");
}

#[test]
fn test_minute_boundaries() {
    assert!(parse_schedule("0 0 1 1 0 /usr/bin/find").is_ok());
    assert!(parse_schedule("59 0 1 1 0 /usr/bin/find").is_ok());
}

#[test]
fn test_missing_command() {
    let err = parse_schedule("*/15 0 1,15 * 1-5").unwrap_err();
    assert_eq!(err, CronParseError::MissingCommand);
    assert_eq!(err.to_string(), "Missing command");
}

#[test]
fn test_malformed_tokens() {
    assert_invalid("*/0 * * * * cmd", "minute");
    assert_invalid("* 5-2 * * * cmd", "hour");
    assert_invalid("* * 1-x * * cmd", "day of month");
    assert_invalid("* * * 0/2 * cmd", "month");
    assert_invalid("* * * * 1,,2 cmd", "day of week");
}

#[test]
fn test_ranged_step_outside_field_bounds() {
    let err = parse_schedule("70-80/5 * * * * cmd").unwrap_err();
    assert_eq!(err.to_string(), "Invalid minute field range: 70-80");
}

// ─── Output ──────────────────────────────────────────────────────

#[test]
fn test_table_output() {
    let schedule = parse_schedule("0 9-17,22 * * 1-5 /usr/bin/find").unwrap();
    let table = schedule.to_string();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "minute        0");
    assert_eq!(lines[1], "hour          9 10 11 12 13 14 15 16 17 22");
    assert_eq!(lines[4], "day of week   1 2 3 4 5");
    assert_eq!(lines[5], "command       /usr/bin/find");
}

#[test]
fn test_json_output() {
    let schedule = parse_schedule("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["minute"], serde_json::json!([0, 15, 30, 45]));
    assert_eq!(json["day of month"], serde_json::json!([1, 15]));
    assert_eq!(json["command"], serde_json::json!(["/usr/bin/find"]));
}
