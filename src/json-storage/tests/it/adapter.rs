use std::sync::Arc;

use crate::helper::TestHelper;
use tugwatch_core::{
    Error, PositionStore, ReportOutbound, SnapshotIndex, SnapshotIndexInbound,
    SnapshotIndexOutbound, TuggingEngine, test_helper::ReportBuilder,
};

#[tokio::test]
async fn test_reports_are_read_in_source_order() {
    let helper = TestHelper::new();
    let reports = vec![
        ReportBuilder::tug("T1").at("2021-04-08T00:10:00+00:00").build(),
        ReportBuilder::vessel("V1")
            .at("2021-04-08T00:05:00+00:00")
            .status("moored")
            .speed(0.0)
            .location(59.9, 10.7)
            .build(),
    ];
    helper.adapter.write_reports(&reports).await;

    assert_eq!(helper.adapter.reports().await.unwrap(), reports);
}

#[tokio::test]
async fn test_missing_reports_file_is_storage_error() {
    let helper = TestHelper::new();
    assert!(matches!(
        helper.adapter.reports().await,
        Err(Error::Storage { .. })
    ));
}

#[tokio::test]
async fn test_missing_field_is_missing_data() {
    let helper = TestHelper::new();
    tokio::fs::write(
        helper.adapter.reports_path(),
        r#"[{"vessel": {"name": "T1", "type": "tug"}}]"#,
    )
    .await
    .unwrap();

    assert!(matches!(
        helper.adapter.reports().await,
        Err(Error::MissingData { .. })
    ));
}

#[tokio::test]
async fn test_index_is_none_before_first_build() {
    let helper = TestHelper::new();
    assert!(!helper.adapter.index_exists().await.unwrap());
    assert!(helper.adapter.snapshot_index().await.unwrap().is_none());
}

#[tokio::test]
async fn test_persisted_index_round_trips() {
    let helper = TestHelper::new();
    let store = PositionStore::new(vec![
        ReportBuilder::tug("T1")
            .at("2021-04-08T00:10:00+00:00")
            .location(63.4305, 10.3951)
            .build(),
        ReportBuilder::tug("T2")
            .at("2021-04-08T00:11:00+00:00")
            .location(63.4306, 10.3952)
            .build(),
        ReportBuilder::vessel("V1")
            .at("2021-04-08T00:09:00+00:00")
            .speed(3.3)
            .location(63.4307, 10.3953)
            .build(),
    ])
    .unwrap();
    let index = SnapshotIndex::build(&TuggingEngine::new(Arc::new(store)));
    assert_eq!(index.len(), 2);

    helper.adapter.persist_index(&index).await.unwrap();
    assert!(helper.adapter.index_exists().await.unwrap());

    let loaded = helper.adapter.snapshot_index().await.unwrap().unwrap();
    assert_eq!(loaded, index);
}
