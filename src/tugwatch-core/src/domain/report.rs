use std::{cmp::Ordering, fmt::Display, str::FromStr};

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use strum::{AsRefStr, EnumString};

use crate::{Error, error::error::FormatSnafu};

// `%#z` also accepts the `Z` designator for UTC
pub static TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%#z";
pub static MOORED_STATUS: &str = "moored";

/// An observation instant together with the exact string it was reported as.
///
/// Bucketing and index keys use the string verbatim, comparisons use the
/// parsed instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp {
    raw: String,
    instant: DateTime<FixedOffset>,
}

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VesselType {
    Tug,
    Vessel,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionReport {
    pub vessel_name: String,
    pub vessel_type: VesselType,
    pub time: Timestamp,
    pub status: String,
    pub speed: f64,
    pub location: Location,
}

impl Timestamp {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// Absolute time between the two instants, regardless of offsets.
    pub fn abs_diff(&self, other: &Timestamp) -> Duration {
        (self.instant - other.instant).abs()
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let instant = DateTime::parse_from_str(s, TIMESTAMP_FORMAT).context(FormatSnafu {
            value: s.to_string(),
        })?;

        Ok(Self {
            raw: s.to_string(),
            instant,
        })
    }
}

impl TryFrom<String> for Timestamp {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.raw
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

// Chronological, with the string as tie breaker so that differently spelled
// offsets of the same instant stay distinct keys.
impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant
            .cmp(&other.instant)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl VesselType {
    /// Source data only distinguishes tugs, anything else is a vessel.
    pub fn from_source(value: &str) -> Self {
        if value == VesselType::Tug.as_ref() {
            VesselType::Tug
        } else {
            VesselType::Vessel
        }
    }
}

impl Location {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

impl PositionReport {
    pub fn is_tug(&self) -> bool {
        self.vessel_type == VesselType::Tug
    }

    pub fn is_moored(&self) -> bool {
        self.status == MOORED_STATUS
    }

    pub fn distance_km(&self, other: &PositionReport) -> f64 {
        self.location.distance_km(&other.location)
    }
}
