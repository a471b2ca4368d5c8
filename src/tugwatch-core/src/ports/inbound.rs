use async_trait::async_trait;

use crate::{CoreResult, SnapshotIndex};

#[async_trait]
pub trait SnapshotIndexInbound: Send + Sync {
    async fn persist_index(&self, index: &SnapshotIndex) -> CoreResult<()>;
}
