use std::sync::Arc;

use crate::helper::TestHelper;
use tugwatch::{Environment, cli::Command, cli::execute};
use tugwatch_core::{
    Error, PositionReport, PositionStore, SnapshotIndex, SnapshotIndexOutbound, TuggingEngine,
    test_helper::ReportBuilder,
};

fn harbour_reports() -> Vec<PositionReport> {
    vec![
        ReportBuilder::vessel("NORDIC")
            .at("2021-04-08T00:00:00+00:00")
            .speed(2.5)
            .location(59.9000, 10.7000)
            .build(),
        ReportBuilder::tug("BUKSER")
            .at("2021-04-08T00:02:00+00:00")
            .speed(4.0)
            .location(59.9001, 10.7010)
            .build(),
        ReportBuilder::tug("BJORN")
            .at("2021-04-08T00:03:00+00:00")
            .speed(3.5)
            .location(59.8999, 10.6990)
            .build(),
        ReportBuilder::vessel("NORDIC")
            .at("2021-04-08T00:30:00+00:00")
            .speed(1.5)
            .location(59.9100, 10.7200)
            .build(),
        ReportBuilder::tug("BUKSER")
            .at("2021-04-08T00:31:00+00:00")
            .speed(4.0)
            .location(59.9101, 10.7205)
            .build(),
        ReportBuilder::tug("BJORN")
            .at("2021-04-08T01:30:00+00:00")
            .speed(0.0)
            .status("moored")
            .location(59.9000, 10.7000)
            .build(),
        ReportBuilder::tug("BUKSER")
            .at("2021-04-08T05:00:00+00:00")
            .speed(6.0)
            .location(60.0, 11.0)
            .build(),
    ]
}

#[tokio::test]
async fn test_persisted_index_answers_like_fresh_index() {
    let reports = harbour_reports();
    let helper = TestHelper::new(&reports).await;
    let app = helper.app().await;

    let output = execute(&app, Command::Build).await.unwrap();
    assert_eq!(output["timestamps"], 4);

    let fresh = SnapshotIndex::build(&TuggingEngine::new(Arc::new(
        PositionStore::new(reports).unwrap(),
    )));
    let loaded = helper.adapter.snapshot_index().await.unwrap().unwrap();
    assert_eq!(loaded, fresh);

    let tracker = helper.app().await.tracker().await.unwrap();
    for time in fresh.timestamps() {
        assert_eq!(
            tracker.active_tugs_from_index(time.as_str()).unwrap(),
            fresh.active_tugs_at(time.as_str()).unwrap()
        );
    }
}

#[tokio::test]
async fn test_index_groups_tugs_per_vessel() {
    let helper = TestHelper::new(&harbour_reports()).await;
    let app = helper.app().await;
    app.rebuild_index().await.unwrap();

    let tracker = app.tracker().await.unwrap();
    let groups = tracker
        .active_tugs_from_index("2021-04-08T00:05:00+00:00")
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].state.vessel_name, "NORDIC");
    let tugs: Vec<_> = groups[0]
        .tugs
        .iter()
        .map(|t| t.tug.vessel_name.as_str())
        .collect();
    assert_eq!(tugs, vec!["BUKSER", "BJORN"]);
}

#[tokio::test]
async fn test_index_query_outside_tolerance_is_empty() {
    let helper = TestHelper::new(&harbour_reports()).await;
    let app = helper.app().await;
    app.rebuild_index().await.unwrap();

    let tracker = app.tracker().await.unwrap();
    assert!(
        tracker
            .active_tugs_from_index("2021-04-08T00:46:00+00:00")
            .unwrap()
            .is_empty()
    );
    assert!(
        !tracker
            .active_tugs_from_index("2021-04-08T00:45:59+00:00")
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_index_query_before_build_is_empty_index_error() {
    let helper = TestHelper::new(&harbour_reports()).await;
    let app = helper.app().await;

    let err = execute(
        &app,
        Command::IndexedTugs {
            time: "2021-04-08T00:05:00+00:00".into(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err.core(), Some(Error::EmptyIndex { .. })));
}

#[tokio::test]
async fn test_local_environment_builds_missing_index() {
    let helper = TestHelper::with_environment(&harbour_reports(), Environment::Local).await;
    let app = helper.app().await;

    let output = execute(
        &app,
        Command::IndexedTugs {
            time: "2021-04-08T00:05:00+00:00".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(output.as_array().unwrap().len(), 1);
    assert!(helper.adapter.index_exists().await.unwrap());
}
