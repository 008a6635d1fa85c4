use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How often a routine's completion resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }

    /// Heading used when routines are listed by frequency.
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }

    /// Whether `today` opens a new period for this frequency.
    pub fn starts_period_on(&self, today: NaiveDate, policy: &ResetPolicy) -> bool {
        match self {
            Frequency::Daily => true,
            Frequency::Weekly => today.weekday() == policy.week_start,
            Frequency::Monthly => today.day() == 1,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(ValidationError::InvalidValue {
                field: "frequency".into(),
                message: format!("expected daily, weekly or monthly, got '{other}'"),
            }),
        }
    }
}

/// Calendar parameters of the periodic reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetPolicy {
    /// Day on which weekly routines reset.
    pub week_start: Weekday,
}

impl Default for ResetPolicy {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
        }
    }
}
