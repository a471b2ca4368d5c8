use json_storage::JsonAdapter;
use tempfile::TempDir;
use tugwatch::{App, Environment, LogLevel, Settings};
use tugwatch_core::PositionReport;

pub struct TestHelper {
    pub settings: Settings,
    pub adapter: JsonAdapter,
    _dir: TempDir,
}

impl TestHelper {
    pub async fn new(reports: &[PositionReport]) -> Self {
        Self::with_environment(reports, Environment::Test).await
    }

    pub async fn with_environment(reports: &[PositionReport], environment: Environment) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            log_level: LogLevel::Debug,
            environment,
            reports_path: dir.path().join("tugs.json"),
            index_path: dir.path().join("active-tugs.json"),
            num_index_workers: 2,
        };

        let adapter = JsonAdapter::new(&settings.reports_path, &settings.index_path);
        adapter.write_reports(reports).await;

        Self {
            settings,
            adapter,
            _dir: dir,
        }
    }

    pub async fn app(&self) -> App {
        App::build(&self.settings).await.unwrap()
    }
}
