use crate::*;

pub static DEFAULT_REPORT_TIME: &str = "2021-04-08T00:00:00+00:00";
pub static DEFAULT_STATUS: &str = "under way";

/// Builds position reports with sensible defaults: under way at (0, 0) with a
/// speed of 5 knots.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    vessel_name: String,
    vessel_type: VesselType,
    time: String,
    status: String,
    speed: f64,
    location: Location,
}

impl ReportBuilder {
    pub fn tug(name: &str) -> Self {
        Self::new(name, VesselType::Tug)
    }

    pub fn vessel(name: &str) -> Self {
        Self::new(name, VesselType::Vessel)
    }

    fn new(name: &str, vessel_type: VesselType) -> Self {
        Self {
            vessel_name: name.to_string(),
            vessel_type,
            time: DEFAULT_REPORT_TIME.to_string(),
            status: DEFAULT_STATUS.to_string(),
            speed: 5.0,
            location: Location::new(0.0, 0.0),
        }
    }

    pub fn at(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn location(mut self, lat: f64, long: f64) -> Self {
        self.location = Location::new(lat, long);
        self
    }

    pub fn build(self) -> PositionReport {
        PositionReport {
            vessel_name: self.vessel_name,
            vessel_type: self.vessel_type,
            time: self.time.parse().unwrap(),
            status: self.status,
            speed: self.speed,
            location: self.location,
        }
    }
}
