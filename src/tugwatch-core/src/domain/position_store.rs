use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{CoreResult, PositionReport, Timestamp, VesselType, error::error::MissingDataSnafu};

/// Immutable set of position reports indexed per vessel.
#[derive(Debug)]
pub struct PositionStore {
    reports: Vec<PositionReport>,
    // In order of each vessel's first report
    streams: Vec<VesselStream>,
    timestamps: Vec<Timestamp>,
    tug_timestamps: Vec<Timestamp>,
}

#[derive(Debug)]
struct VesselStream {
    // Indices into `reports`, sorted by observation instant then input order
    reports: Vec<usize>,
}

/// Each vessel's last known report as of an instant, split by vessel type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tugs: Vec<PositionReport>,
    pub vessels: Vec<PositionReport>,
}

impl PositionStore {
    pub fn new(reports: Vec<PositionReport>) -> CoreResult<Self> {
        if reports.is_empty() {
            return MissingDataSnafu {
                reason: "the report set is empty",
            }
            .fail();
        }

        let mut streams: Vec<VesselStream> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for (i, r) in reports.iter().enumerate() {
            let idx = *by_name.entry(r.vessel_name.clone()).or_insert_with(|| {
                streams.push(VesselStream {
                    reports: Vec::new(),
                });
                streams.len() - 1
            });
            streams[idx].reports.push(i);
        }

        for s in &mut streams {
            s.reports.sort_by_key(|i| (reports[*i].time.instant(), *i));
        }

        let timestamps = reports
            .iter()
            .map(|r| r.time.clone())
            .sorted()
            .dedup()
            .collect();

        let tug_timestamps = reports
            .iter()
            .filter(|r| r.is_tug())
            .map(|r| r.time.clone())
            .sorted()
            .dedup()
            .collect();

        Ok(Self {
            reports,
            streams,
            timestamps,
            tug_timestamps,
        })
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn num_vessels(&self) -> usize {
        self.streams.len()
    }

    /// All distinct report timestamps in chronological order.
    pub fn timestamps(&self) -> &[Timestamp] {
        &self.timestamps
    }

    /// Distinct timestamps at which at least one tug reported.
    pub fn tug_timestamps(&self) -> &[Timestamp] {
        &self.tug_timestamps
    }

    /// Reports whose timestamp string is exactly `time`, in input order.
    pub fn reports_at(&self, time: &str) -> Vec<&PositionReport> {
        self.reports
            .iter()
            .filter(|r| r.time.as_str() == time)
            .collect()
    }

    pub fn last_known_positions(&self, time: &str) -> CoreResult<Snapshot> {
        let time: Timestamp = time.parse()?;
        Ok(self.last_known_positions_at(&time))
    }

    /// Latest non-moored report at or before `time` for every vessel.
    pub fn last_known_positions_at(&self, time: &Timestamp) -> Snapshot {
        let mut snapshot = Snapshot::default();

        for r in self.latest_matching(time, |r| !r.is_moored()) {
            match r.vessel_type {
                VesselType::Tug => snapshot.tugs.push(r.clone()),
                VesselType::Vessel => snapshot.vessels.push(r.clone()),
            }
        }

        snapshot
    }

    /// For every vessel, the report with the latest instant at or before `time` among the
    /// reports satisfying `predicate`. Equal instants keep the report seen first in the
    /// input. Vessels are returned in the input order of their first matching report.
    pub(crate) fn latest_matching<F>(&self, time: &Timestamp, predicate: F) -> Vec<&PositionReport>
    where
        F: Fn(&PositionReport) -> bool,
    {
        let instant = time.instant();
        let mut found = Vec::with_capacity(self.streams.len());

        for stream in &self.streams {
            let end = stream
                .reports
                .partition_point(|i| self.reports[*i].time.instant() <= instant);

            let mut first: Option<usize> = None;
            let mut latest: Option<usize> = None;

            for i in &stream.reports[..end] {
                let report = &self.reports[*i];
                if !predicate(report) {
                    continue;
                }

                first = Some(first.map_or(*i, |f| f.min(*i)));
                match latest {
                    Some(l) if self.reports[l].time.instant() >= report.time.instant() => {}
                    _ => latest = Some(*i),
                }
            }

            if let (Some(first), Some(latest)) = (first, latest) {
                found.push((first, latest));
            }
        }

        found.sort_unstable_by_key(|(first, _)| *first);
        found.into_iter().map(|(_, l)| &self.reports[l]).collect()
    }
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.tugs.is_empty() && self.vessels.is_empty()
    }

    /// All reports, tugs first.
    pub fn iter(&self) -> impl Iterator<Item = &PositionReport> {
        self.tugs.iter().chain(self.vessels.iter())
    }

    pub fn into_reports(self) -> Vec<PositionReport> {
        let mut reports = self.tugs;
        reports.extend(self.vessels);
        reports
    }
}
