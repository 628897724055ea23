//! Schedule field definitions
//!
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-6, 0=Sunday)
//! │ │ │ │ │
//! * * * * * command
//! ```

/// Name and inclusive bounds of one schedule field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Display name, used in error messages and output
    pub name: &'static str,
    /// Smallest allowed value
    pub min: u32,
    /// Largest allowed value
    pub max: u32,
}

impl FieldSpec {
    pub const MINUTE: FieldSpec = FieldSpec::new("minute", 0, 59);
    pub const HOUR: FieldSpec = FieldSpec::new("hour", 0, 23);
    pub const DAY_OF_MONTH: FieldSpec = FieldSpec::new("day of month", 1, 31);
    pub const MONTH: FieldSpec = FieldSpec::new("month", 1, 12);
    pub const DAY_OF_WEEK: FieldSpec = FieldSpec::new("day of week", 0, 6);

    /// The five schedule fields in expression order
    pub const SCHEDULE: [FieldSpec; 5] = [
        Self::MINUTE,
        Self::HOUR,
        Self::DAY_OF_MONTH,
        Self::MONTH,
        Self::DAY_OF_WEEK,
    ];

    /// Create a field specification
    pub const fn new(name: &'static str, min: u32, max: u32) -> Self {
        Self { name, min, max }
    }

    /// Check if a value lies within the field's bounds
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}
