use json_storage::JsonAdapter;
use tempfile::TempDir;

pub struct TestHelper {
    pub adapter: JsonAdapter,
    // Removed on drop
    _dir: TempDir,
}

impl TestHelper {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonAdapter::new(
            dir.path().join("tugs.json"),
            dir.path().join("active-tugs.json"),
        );
        Self { adapter, _dir: dir }
    }
}
