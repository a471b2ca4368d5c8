use std::{collections::BTreeMap, ops::Bound};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CoreResult, Timestamp, TuggedVessel, TuggingEngine, error::error::EmptyIndexSnafu,
};

/// Queries further away than this from every indexed timestamp get an empty result.
pub static INDEX_TOLERANCE: Duration = Duration::minutes(15);

/// Precomputed tugging groups keyed by the timestamps at which tugs reported.
///
/// Timestamps without any tugging activity are never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotIndex {
    entries: BTreeMap<Timestamp, Vec<TuggedVessel>>,
}

impl SnapshotIndex {
    /// Computes the tugging groups for every tug timestamp of the engine's store.
    pub fn build(engine: &TuggingEngine) -> Self {
        let mut index = Self::default();
        for time in engine.store().tug_timestamps() {
            index.insert(time.clone(), engine.tugged_vessels_at(time));
        }
        index
    }

    pub fn insert(&mut self, time: Timestamp, groups: Vec<TuggedVessel>) {
        if groups.is_empty() {
            return;
        }
        self.entries.insert(time, groups);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn timestamps(&self) -> impl Iterator<Item = &Timestamp> {
        self.entries.keys()
    }

    pub fn get(&self, time: &Timestamp) -> Option<&[TuggedVessel]> {
        self.entries.get(time).map(|v| v.as_slice())
    }

    /// The indexed timestamp closest to `time` and its distance from it. On a tie the
    /// earlier timestamp wins.
    pub fn nearest(&self, time: &Timestamp) -> CoreResult<(&Timestamp, Duration)> {
        let before = self.entries.range::<Timestamp, _>(..=time).next_back();
        let after = self
            .entries
            .range::<Timestamp, _>((Bound::Excluded(time), Bound::Unbounded))
            .next();

        match (before, after) {
            (None, None) => EmptyIndexSnafu.fail(),
            (Some((b, _)), None) => Ok((b, b.abs_diff(time))),
            (None, Some((a, _))) => Ok((a, a.abs_diff(time))),
            (Some((b, _)), Some((a, _))) => {
                let before_diff = b.abs_diff(time);
                let after_diff = a.abs_diff(time);
                if after_diff < before_diff {
                    Ok((a, after_diff))
                } else {
                    Ok((b, before_diff))
                }
            }
        }
    }

    pub fn active_tugs_at(&self, time: &str) -> CoreResult<&[TuggedVessel]> {
        let time: Timestamp = time.parse()?;
        self.active_tugs_at_time(&time)
    }

    /// Groups of the closest indexed timestamp, or nothing if it is outside
    /// [`INDEX_TOLERANCE`].
    pub fn active_tugs_at_time(&self, time: &Timestamp) -> CoreResult<&[TuggedVessel]> {
        let (closest, diff) = self.nearest(time)?;

        if diff < INDEX_TOLERANCE {
            Ok(self.entries.get(closest).map(|v| v.as_slice()).unwrap_or_default())
        } else {
            debug!(
                "closest indexed timestamp '{closest}' is {}s from '{time}'",
                diff.num_seconds()
            );
            Ok(&[])
        }
    }
}

impl Extend<(Timestamp, Vec<TuggedVessel>)> for SnapshotIndex {
    fn extend<T: IntoIterator<Item = (Timestamp, Vec<TuggedVessel>)>>(&mut self, iter: T) {
        for (time, groups) in iter {
            self.insert(time, groups);
        }
    }
}

impl FromIterator<(Timestamp, Vec<TuggedVessel>)> for SnapshotIndex {
    fn from_iter<T: IntoIterator<Item = (Timestamp, Vec<TuggedVessel>)>>(iter: T) -> Self {
        let mut index = Self::default();
        index.extend(iter);
        index
    }
}
