use std::path::{Path, PathBuf};

use async_trait::async_trait;
use snafu::ResultExt;
use tracing::{info, instrument};
use tugwatch_core::{
    CoreResult, PositionReport, ReportOutbound, SnapshotIndex, SnapshotIndexInbound,
    SnapshotIndexOutbound,
};

use crate::{
    SourceReport,
    error::{
        Result,
        error::{IoSnafu, JsonSnafu},
    },
};

/// Reads the source report document and stores the snapshot index as json files.
#[derive(Debug, Clone)]
pub struct JsonAdapter {
    reports_path: PathBuf,
    index_path: PathBuf,
}

impl JsonAdapter {
    pub fn new(reports_path: impl Into<PathBuf>, index_path: impl Into<PathBuf>) -> Self {
        Self {
            reports_path: reports_path.into(),
            index_path: index_path.into(),
        }
    }

    pub fn reports_path(&self) -> &Path {
        &self.reports_path
    }

    pub async fn index_exists(&self) -> Result<bool> {
        tokio::fs::try_exists(&self.index_path)
            .await
            .context(IoSnafu {
                path: self.index_path.clone(),
            })
    }

    #[instrument(skip(self), fields(path = %self.reports_path.display()))]
    async fn read_reports(&self) -> Result<Vec<PositionReport>> {
        let bytes = tokio::fs::read(&self.reports_path).await.context(IoSnafu {
            path: self.reports_path.clone(),
        })?;

        let raw: Vec<SourceReport> = serde_json::from_slice(&bytes).context(JsonSnafu {
            path: self.reports_path.clone(),
        })?;

        let reports = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.into_report(i))
            .collect::<Result<Vec<_>>>()?;

        info!("loaded {} reports", reports.len());

        Ok(reports)
    }

    #[instrument(skip(self), fields(path = %self.index_path.display()))]
    async fn read_index(&self) -> Result<Option<SnapshotIndex>> {
        let bytes = match tokio::fs::read(&self.index_path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).context(IoSnafu {
                    path: self.index_path.clone(),
                });
            }
        };

        let index: SnapshotIndex = serde_json::from_slice(&bytes).context(JsonSnafu {
            path: self.index_path.clone(),
        })?;

        info!("loaded snapshot index with {} timestamps", index.len());

        Ok(Some(index))
    }

    #[instrument(skip_all, fields(path = %self.index_path.display()))]
    async fn write_index(&self, index: &SnapshotIndex) -> Result<()> {
        let bytes = serde_json::to_vec(index).context(JsonSnafu {
            path: self.index_path.clone(),
        })?;

        // Readers never observe a partially written index
        let tmp = self.index_path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes)
            .await
            .context(IoSnafu { path: tmp.clone() })?;
        tokio::fs::rename(&tmp, &self.index_path)
            .await
            .context(IoSnafu {
                path: self.index_path.clone(),
            })?;

        info!("persisted snapshot index with {} timestamps", index.len());

        Ok(())
    }
}

#[async_trait]
impl ReportOutbound for JsonAdapter {
    async fn reports(&self) -> CoreResult<Vec<PositionReport>> {
        Ok(self.read_reports().await?)
    }
}

#[async_trait]
impl SnapshotIndexOutbound for JsonAdapter {
    async fn snapshot_index(&self) -> CoreResult<Option<SnapshotIndex>> {
        Ok(self.read_index().await?)
    }
}

#[async_trait]
impl SnapshotIndexInbound for JsonAdapter {
    async fn persist_index(&self, index: &SnapshotIndex) -> CoreResult<()> {
        Ok(self.write_index(index).await?)
    }
}

/// Methods intended for testing purposes.
#[cfg(feature = "test")]
impl JsonAdapter {
    pub async fn write_reports(&self, reports: &[PositionReport]) {
        let raw: Vec<SourceReport> = reports.iter().map(SourceReport::from).collect();
        tokio::fs::write(&self.reports_path, serde_json::to_vec(&raw).unwrap())
            .await
            .unwrap();
    }
}
