use std::{collections::HashMap, sync::Arc};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{CoreResult, PositionReport, PositionStore, Timestamp};

pub static TUGGING_TIME_WINDOW: Duration = Duration::hours(1);
pub static MIN_TUGGING_SPEED: f64 = 0.1;
pub static MAX_TUGGING_DISTANCE_KM: f64 = 0.3;
/// Tugs below this speed are not considered active at all.
pub static MIN_ACTIVE_TUG_SPEED: f64 = 0.0;

/// Thresholds deciding whether a tug is towing a vessel. Shared by live
/// queries and the snapshot index build.
#[derive(Debug, Clone, PartialEq)]
pub struct TuggingRules {
    pub time_window: Duration,
    pub min_speed: f64,
    pub max_distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTug {
    pub tug_name: String,
    pub attached_vessel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachedTug {
    pub distance_km: f64,
    pub tug: PositionReport,
}

/// A vessel being tugged and every tug attached to it at an instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuggedVessel {
    pub state: PositionReport,
    pub tugs: Vec<AttachedTug>,
}

#[derive(Debug, Clone)]
pub struct TuggingEngine {
    store: Arc<PositionStore>,
    rules: TuggingRules,
}

impl Default for TuggingRules {
    fn default() -> Self {
        Self {
            time_window: TUGGING_TIME_WINDOW,
            min_speed: MIN_TUGGING_SPEED,
            max_distance_km: MAX_TUGGING_DISTANCE_KM,
        }
    }
}

impl TuggingRules {
    pub fn is_within_time_window(&self, tug: &PositionReport, vessel: &PositionReport) -> bool {
        tug.time.abs_diff(&vessel.time) < self.time_window
    }

    pub fn is_moving(&self, speed: f64) -> bool {
        speed > self.min_speed
    }

    pub fn is_within_distance(&self, distance_km: f64) -> bool {
        distance_km <= self.max_distance_km
    }

    /// Returns the distance between the two in kilometers if `tug` is towing `vessel`.
    pub fn is_tugging(&self, tug: &PositionReport, vessel: &PositionReport) -> Option<f64> {
        if !self.is_within_time_window(tug, vessel)
            || !self.is_moving(tug.speed)
            || !self.is_moving(vessel.speed)
        {
            return None;
        }

        let distance = tug.distance_km(vessel);
        self.is_within_distance(distance).then_some(distance)
    }
}

impl TuggingEngine {
    pub fn new(store: Arc<PositionStore>) -> Self {
        Self {
            store,
            rules: TuggingRules::default(),
        }
    }

    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    pub fn is_tugging(&self, tug: &PositionReport, vessel: &PositionReport) -> Option<f64> {
        self.rules.is_tugging(tug, vessel)
    }

    pub fn active_tugs_at(&self, time: &str) -> CoreResult<Vec<ActiveTug>> {
        let time: Timestamp = time.parse()?;
        Ok(self.active_tugs_at_time(&time))
    }

    /// Every (tug, vessel) pair where the tug is towing the vessel, tugs in the outer
    /// loop. A vessel towed by several tugs appears once per tug.
    ///
    /// Tugs only count as active while moving, vessels count regardless of speed and
    /// status.
    pub fn active_tugs_at_time(&self, time: &Timestamp) -> Vec<ActiveTug> {
        let tugs = self
            .store
            .latest_matching(time, |r| r.is_tug() && r.speed > MIN_ACTIVE_TUG_SPEED);

        if tugs.is_empty() {
            return vec![];
        }

        let vessels = self.store.latest_matching(time, |r| !r.is_tug());

        let mut active = Vec::new();
        for tug in &tugs {
            for vessel in &vessels {
                if self.is_tugging(tug, vessel).is_some() {
                    active.push(ActiveTug {
                        tug_name: tug.vessel_name.clone(),
                        attached_vessel: vessel.vessel_name.clone(),
                    });
                }
            }
        }

        active
    }

    /// Tugged vessels at `time` grouped per vessel, based on the last known positions.
    pub fn tugged_vessels_at(&self, time: &Timestamp) -> Vec<TuggedVessel> {
        let snapshot = self.store.last_known_positions_at(time);

        let mut groups: Vec<TuggedVessel> = Vec::new();
        let mut group_index: HashMap<&str, usize> = HashMap::new();

        for tug in &snapshot.tugs {
            for vessel in &snapshot.vessels {
                let Some(distance_km) = self.is_tugging(tug, vessel) else {
                    continue;
                };

                let idx = *group_index
                    .entry(vessel.vessel_name.as_str())
                    .or_insert_with(|| {
                        groups.push(TuggedVessel {
                            state: vessel.clone(),
                            tugs: Vec::new(),
                        });
                        groups.len() - 1
                    });

                groups[idx].tugs.push(AttachedTug {
                    distance_km,
                    tug: tug.clone(),
                });
            }
        }

        groups
    }
}
