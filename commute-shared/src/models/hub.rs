use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::map_link::Coordinates;

/// A named transport interchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hub {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stops: Vec<Stop>,
}

/// A named point on a route served from a hub.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stop {
    pub id: Uuid,
    pub hub_id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Fare in minor currency units.
    #[serde(default)]
    pub cost: Option<i64>,
}

impl Stop {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Insert payload for a stop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewStop {
    pub hub_id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub cost: Option<i64>,
}

impl NewStop {
    #[must_use]
    pub fn new(hub_id: Uuid, name: impl Into<String>, at: Coordinates, cost: Option<i64>) -> Self {
        Self {
            hub_id,
            name: name.into(),
            latitude: at.latitude,
            longitude: at.longitude,
            cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
    #[error("cost must be a number such as 2.50")]
    NotANumber,
    #[error("cost cannot be negative")]
    Negative,
    #[error("cost has at most two decimal places")]
    TooPrecise,
    #[error("cost is too large")]
    Overflow,
}

/// Parses a fare such as `"12.5"` into minor units (`1250`).
///
/// An empty input means the stop is free to board and yields `Ok(None)`.
pub fn parse_cost(input: &str) -> Result<Option<i64>, CostError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.starts_with('-') {
        return Err(CostError::Negative);
    }

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(CostError::NotANumber);
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CostError::NotANumber);
    }
    if fraction.len() > 2 {
        return Err(CostError::TooPrecise);
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| CostError::Overflow)?
    };
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| CostError::NotANumber)? * 10,
        _ => fraction.parse().map_err(|_| CostError::NotANumber)?,
    };

    whole
        .checked_mul(100)
        .and_then(|value| value.checked_add(cents))
        .map(Some)
        .ok_or(CostError::Overflow)
}

/// Formats minor units as a decimal amount.
#[must_use]
pub fn format_cost(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
