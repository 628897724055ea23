//! Field token decoding and expansion
//!
//! A raw field token is decoded once into a [`FieldToken`]. Decoding is the
//! validation step: any token that decodes successfully is guaranteed to
//! expand into values within the field's bounds.
//!
//! Special characters:
//! - `*` - any value
//! - `,` - value list separator (e.g., `1,3,5`)
//! - `-` - range (e.g., `1-5`)
//! - `/` - step (e.g., `*/5`, `10/15` or `0-30/5`)

use crate::error::{CronParseError, Result};
use crate::field::FieldSpec;

/// Starting point of a step clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBase {
    /// `*/step`, iterates from the field minimum to the field maximum
    Wildcard,
    /// `n/step`, iterates from `n` to the field maximum
    Value(u32),
    /// `a-b/step`, iterates from `a` to `b`
    Range(u32, u32),
}

/// A decoded field token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldToken {
    /// `*`
    Wildcard,
    /// `n`
    Single(u32),
    /// `a-b`
    Range(u32, u32),
    /// `base/step`
    Step { base: StepBase, step: u32 },
    /// `x,y,z`; elements are never lists themselves
    List(Vec<FieldToken>),
}

impl FieldToken {
    /// Decode and validate a raw token against a field
    ///
    /// A lone `*` is always valid. Otherwise every comma-separated part is
    /// checked, and the first invalid part aborts decoding.
    pub fn parse(raw: &str, spec: &FieldSpec) -> Result<Self> {
        if raw == "*" {
            return Ok(FieldToken::Wildcard);
        }

        let mut parts = raw
            .split(',')
            .map(|part| parse_part(part, spec))
            .collect::<Result<Vec<_>>>()?;

        if parts.len() == 1 {
            Ok(parts.remove(0))
        } else {
            Ok(FieldToken::List(parts))
        }
    }

    /// Expand into the ascending, duplicate-free values the token denotes
    pub fn expand(&self, spec: &FieldSpec) -> Vec<u32> {
        match self {
            FieldToken::Wildcard => (spec.min..=spec.max).collect(),
            FieldToken::Single(value) => vec![*value],
            FieldToken::Range(start, end) => (*start..=*end).collect(),
            FieldToken::Step { base, step } => {
                // A range base caps iteration at its own end, not the field max.
                let (start, ceiling) = match *base {
                    StepBase::Wildcard => (spec.min, spec.max),
                    StepBase::Value(value) => (value, spec.max),
                    StepBase::Range(start, end) => (start, end),
                };
                (start..=ceiling).step_by(*step as usize).collect()
            }
            FieldToken::List(items) => {
                let mut values: Vec<u32> = items.iter().flat_map(|t| t.expand(spec)).collect();
                values.sort_unstable();
                values.dedup();
                values
            }
        }
    }
}

/// Validate a raw token without keeping the decoded form
pub fn validate_field(raw: &str, spec: &FieldSpec) -> Result<()> {
    FieldToken::parse(raw, spec).map(|_| ())
}

/// Validate a raw token and expand it into its values
///
/// # Examples
///
/// ```
/// use a3s_cron_parser::{expand_field, FieldSpec};
///
/// let minutes = expand_field("0-29/10,30-59/15", &FieldSpec::MINUTE).unwrap();
/// assert_eq!(minutes, vec![0, 10, 20, 30, 45]);
/// ```
pub fn expand_field(raw: &str, spec: &FieldSpec) -> Result<Vec<u32>> {
    Ok(FieldToken::parse(raw, spec)?.expand(spec))
}

/// Decode one comma-separated part of a token
fn parse_part(part: &str, spec: &FieldSpec) -> Result<FieldToken> {
    if let Some((base, step)) = part.split_once('/') {
        let base = if let Some((start, end)) = base.split_once('-') {
            let (start, end) = parse_range(start, end, spec)?;
            StepBase::Range(start, end)
        } else if base == "*" {
            StepBase::Wildcard
        } else {
            let value = parse_in_bounds(base, spec).ok_or_else(|| {
                CronParseError::InvalidStepBase {
                    field: spec.name,
                    base: base.to_string(),
                }
            })?;
            StepBase::Value(value)
        };

        let step = match step.parse::<u32>() {
            Ok(step) if step > 0 => step,
            _ => {
                return Err(CronParseError::InvalidStep {
                    field: spec.name,
                    step: step.to_string(),
                })
            }
        };

        return Ok(FieldToken::Step { base, step });
    }

    if let Some((start, end)) = part.split_once('-') {
        let (start, end) = parse_range(start, end, spec)?;
        return Ok(FieldToken::Range(start, end));
    }

    parse_in_bounds(part, spec)
        .map(FieldToken::Single)
        .ok_or_else(|| CronParseError::InvalidValue {
            field: spec.name,
            value: part.to_string(),
        })
}

/// Parse `start-end`, requiring both endpoints in bounds and `start <= end`
fn parse_range(start: &str, end: &str, spec: &FieldSpec) -> Result<(u32, u32)> {
    match (parse_in_bounds(start, spec), parse_in_bounds(end, spec)) {
        (Some(s), Some(e)) if s <= e => Ok((s, e)),
        _ => Err(CronParseError::InvalidRange {
            field: spec.name,
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}

fn parse_in_bounds(literal: &str, spec: &FieldSpec) -> Option<u32> {
    literal.parse::<u32>().ok().filter(|v| spec.contains(*v))
}
