use std::sync::Arc;

use json_storage::JsonAdapter;
use tracing::{info, instrument, warn};
use tugwatch_core::{
    PositionStore, ReportOutbound, SnapshotIndex, SnapshotIndexInbound, SnapshotIndexOutbound,
    TugTracker, TuggingEngine,
};

use crate::{Environment, IndexBuilder, Result, Settings};

pub trait Storage: ReportOutbound + SnapshotIndexOutbound + SnapshotIndexInbound {}

impl<T> Storage for T where T: ReportOutbound + SnapshotIndexOutbound + SnapshotIndexInbound {}

pub struct App {
    storage: Arc<dyn Storage>,
    engine: TuggingEngine,
    builder: IndexBuilder,
    environment: Environment,
}

impl App {
    /// Loads the report set, failing if it cannot be read or is empty.
    pub async fn build(settings: &Settings) -> Result<Self> {
        let adapter = JsonAdapter::new(&settings.reports_path, &settings.index_path);
        Self::with_storage(Arc::new(adapter), settings).await
    }

    #[instrument(skip_all)]
    pub async fn with_storage(storage: Arc<dyn Storage>, settings: &Settings) -> Result<Self> {
        let store = PositionStore::new(storage.reports().await?)?;

        info!(
            "loaded {} reports from {} vessels",
            store.len(),
            store.num_vessels()
        );

        Ok(Self {
            storage,
            engine: TuggingEngine::new(Arc::new(store)),
            builder: IndexBuilder::new(settings.num_index_workers),
            environment: settings.environment,
        })
    }

    /// Builds the snapshot index from the loaded reports and persists it.
    pub async fn rebuild_index(&self) -> Result<SnapshotIndex> {
        let index = self.builder.build(&self.engine).await?;
        self.storage.persist_index(&index).await?;
        Ok(index)
    }

    /// Query surface over the loaded reports and the persisted snapshot index.
    ///
    /// Locally a missing index is built on the spot, elsewhere indexed queries fail
    /// until `build` has been run.
    pub async fn tracker(&self) -> Result<TugTracker> {
        let index = match self.storage.snapshot_index().await? {
            Some(index) => index,
            None => match self.environment {
                Environment::Local => {
                    info!("no snapshot index found, building it");
                    self.rebuild_index().await?
                }
                Environment::Development | Environment::Test | Environment::Production => {
                    warn!("no snapshot index found, indexed queries will fail until it is built");
                    SnapshotIndex::default()
                }
            },
        };

        Ok(TugTracker::with_engine(self.engine.clone(), Arc::new(index)))
    }
}
