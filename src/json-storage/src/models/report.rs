use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tugwatch_core::{Location, PositionReport, Timestamp, VesselType};

use crate::error::{Error, error::InvalidTimestampSnafu, error::MissingFieldSnafu};

/// A report as it appears in the source document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceReport {
    pub vessel: Option<SourceVessel>,
    pub navigation: Option<SourceNavigation>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceVessel {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub vessel_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceNavigation {
    pub time: Option<String>,
    pub status: Option<String>,
    pub speed: Option<f64>,
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceLocation {
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

impl SourceReport {
    /// `index` is the position of the report in the source document, used for error
    /// reporting.
    pub fn into_report(self, index: usize) -> Result<PositionReport, Error> {
        let missing = |field: &'static str| MissingFieldSnafu { index, field }.build();

        let vessel = self.vessel.ok_or_else(|| missing("vessel"))?;
        let navigation = self.navigation.ok_or_else(|| missing("navigation"))?;
        let location = navigation
            .location
            .ok_or_else(|| missing("navigation.location"))?;

        let time = navigation.time.ok_or_else(|| missing("navigation.time"))?;

        Ok(PositionReport {
            vessel_name: vessel.name.ok_or_else(|| missing("vessel.name"))?,
            vessel_type: VesselType::from_source(
                &vessel.vessel_type.ok_or_else(|| missing("vessel.type"))?,
            ),
            time: time
                .parse::<Timestamp>()
                .context(InvalidTimestampSnafu { index })?,
            status: navigation
                .status
                .ok_or_else(|| missing("navigation.status"))?,
            speed: navigation.speed.ok_or_else(|| missing("navigation.speed"))?,
            location: Location {
                lat: location.lat.ok_or_else(|| missing("navigation.location.lat"))?,
                long: location
                    .long
                    .ok_or_else(|| missing("navigation.location.long"))?,
            },
        })
    }
}

impl From<&PositionReport> for SourceReport {
    fn from(value: &PositionReport) -> Self {
        Self {
            vessel: Some(SourceVessel {
                name: Some(value.vessel_name.clone()),
                vessel_type: Some(value.vessel_type.to_string()),
            }),
            navigation: Some(SourceNavigation {
                time: Some(value.time.to_string()),
                status: Some(value.status.clone()),
                speed: Some(value.speed),
                location: Some(SourceLocation {
                    lat: Some(value.location.lat),
                    long: Some(value.location.long),
                }),
            }),
        }
    }
}
