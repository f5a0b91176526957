//! Canonical earthquake and search-criteria types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A normalized catalog event.
///
/// Only `id` is guaranteed; the catalog leaves the other fields null for some
/// events and those are kept rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Earthquake {
    pub id: String,
    pub place: Option<String>,
    pub magnitude: Option<f64>,
    pub significance: Option<i64>,
    /// Epoch milliseconds.
    pub occurred_at: Option<i64>,
}

impl Earthquake {
    /// Event time as a UTC timestamp, if the catalog supplied one.
    pub fn occurred_at_utc(&self) -> Option<DateTime<Utc>> {
        self.occurred_at.and_then(DateTime::from_timestamp_millis)
    }
}

/// Sort order accepted by the catalog's `orderby` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OrderBy {
    Time,
    TimeAsc,
    Magnitude,
    MagnitudeAsc,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Time => "time",
            OrderBy::TimeAsc => "time-asc",
            OrderBy::Magnitude => "magnitude",
            OrderBy::MagnitudeAsc => "magnitude-asc",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(OrderBy::Time),
            "time-asc" => Ok(OrderBy::TimeAsc),
            "magnitude" => Ok(OrderBy::Magnitude),
            "magnitude-asc" => Ok(OrderBy::MagnitudeAsc),
            other => Err(format!("unknown orderby: {other}")),
        }
    }
}

/// Filter that produced (or will produce) a result set.
///
/// `Default` is the empty criteria: every field unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchCriteria {
    pub start_year: Option<u16>,
    pub end_year: Option<u16>,
    pub min_magnitude: Option<f64>,
    pub order_by: Option<OrderBy>,
}

impl SearchCriteria {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.start_year.is_none() && self.end_year.is_none() && self.min_magnitude.is_none() && self.order_by.is_none()
    }
}
