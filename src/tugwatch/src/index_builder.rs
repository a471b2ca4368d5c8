use snafu::ResultExt;
use tokio::task::JoinSet;
use tracing::{info, instrument};
use tugwatch_core::{SnapshotIndex, Timestamp, TuggedVessel, TuggingEngine};

use crate::{Result, error::error::JoinSnafu};

/// Builds the snapshot index by spreading the tug timestamps over a pool of workers.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    num_workers: u32,
}

impl IndexBuilder {
    pub fn new(num_workers: u32) -> Self {
        Self {
            num_workers: num_workers.max(1),
        }
    }

    #[instrument(skip_all)]
    pub async fn build(&self, engine: &TuggingEngine) -> Result<SnapshotIndex> {
        let timestamps = engine.store().tug_timestamps();

        info!(
            "building snapshot index for {} tug timestamps with {} workers",
            timestamps.len(),
            self.num_workers
        );

        let (sender, receiver) = async_channel::unbounded();
        let mut set = JoinSet::new();

        for _ in 0..self.num_workers {
            set.spawn(timestamp_task(receiver.clone(), engine.clone()));
        }

        for t in timestamps {
            // Only errors on all receivers being dropped which cannot happen while we hold
            // one ourselves
            let _ = sender.send(t.clone()).await;
        }

        // Workers drain the remaining timestamps and exit once the channel is empty
        drop(sender);
        drop(receiver);

        let mut index = SnapshotIndex::default();
        while let Some(res) = set.join_next().await {
            index.extend(res.context(JoinSnafu)?);
        }

        info!("snapshot index contains {} timestamps", index.len());

        Ok(index)
    }
}

async fn timestamp_task(
    receiver: async_channel::Receiver<Timestamp>,
    engine: TuggingEngine,
) -> Vec<(Timestamp, Vec<TuggedVessel>)> {
    let mut output = Vec::new();
    while let Ok(time) = receiver.recv().await {
        let groups = engine.tugged_vessels_at(&time);
        if !groups.is_empty() {
            output.push((time, groups));
        }
    }
    output
}
