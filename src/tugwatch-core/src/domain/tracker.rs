use std::sync::Arc;

use crate::{
    ActiveTug, CoreResult, PositionReport, Snapshot, SnapshotIndex, Timestamp,
    TuggedVessel, TuggingEngine,
};

/// Read-only query surface over a loaded report set and snapshot index.
///
/// Cloning is cheap and every query is safe to run concurrently.
#[derive(Debug, Clone)]
pub struct TugTracker {
    engine: TuggingEngine,
    index: Arc<SnapshotIndex>,
}

impl TugTracker {
    pub fn with_engine(engine: TuggingEngine, index: Arc<SnapshotIndex>) -> Self {
        Self { engine, index }
    }

    pub fn timestamps(&self) -> &[Timestamp] {
        self.engine.store().timestamps()
    }

    pub fn reports_at(&self, time: &str) -> Vec<&PositionReport> {
        self.engine.store().reports_at(time)
    }

    pub fn last_known_positions(&self, time: &str) -> CoreResult<Snapshot> {
        self.engine.store().last_known_positions(time)
    }

    pub fn active_tugs_at(&self, time: &str) -> CoreResult<Vec<ActiveTug>> {
        self.engine.active_tugs_at(time)
    }

    pub fn active_tugs_from_index(&self, time: &str) -> CoreResult<&[TuggedVessel]> {
        self.index.active_tugs_at(time)
    }
}
