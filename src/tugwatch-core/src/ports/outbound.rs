use async_trait::async_trait;

use crate::{CoreResult, PositionReport, SnapshotIndex};

#[async_trait]
pub trait ReportOutbound: Send + Sync {
    /// The full report set in source order.
    async fn reports(&self) -> CoreResult<Vec<PositionReport>>;
}

#[async_trait]
pub trait SnapshotIndexOutbound: Send + Sync {
    /// The persisted index, `None` if it has never been built.
    async fn snapshot_index(&self) -> CoreResult<Option<SnapshotIndex>>;
}
