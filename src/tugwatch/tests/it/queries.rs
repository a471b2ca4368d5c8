use crate::helper::TestHelper;
use serde_json::json;
use tugwatch::{App, cli::Command, cli::execute};
use tugwatch_core::{Error, test_helper::ReportBuilder};

static T: &str = "2021-04-08T00:19:00+00:00";

#[tokio::test]
async fn test_tug_towing_vessel_is_reported() {
    let helper = TestHelper::new(&[
        ReportBuilder::tug("T1")
            .at(T)
            .speed(5.0)
            .location(0.0, 0.0)
            .build(),
        ReportBuilder::vessel("V1")
            .at(T)
            .speed(2.0)
            .location(0.0, 0.0025)
            .build(),
    ])
    .await;
    let app = helper.app().await;

    let output = execute(&app, Command::ActiveTugs { time: T.into() })
        .await
        .unwrap();

    assert_eq!(
        output,
        json!([{ "tug_name": "T1", "attached_vessel": "V1" }])
    );
}

#[tokio::test]
async fn test_stationary_vessel_is_not_towed() {
    let helper = TestHelper::new(&[
        ReportBuilder::tug("T1").at(T).speed(5.0).build(),
        ReportBuilder::vessel("V1")
            .at(T)
            .speed(0.0)
            .location(0.0, 0.0025)
            .build(),
    ])
    .await;
    let app = helper.app().await;

    let output = execute(&app, Command::ActiveTugs { time: T.into() })
        .await
        .unwrap();

    assert_eq!(output, json!([]));
}

#[tokio::test]
async fn test_moored_vessel_is_excluded_from_positions() {
    let helper = TestHelper::new(&[
        ReportBuilder::tug("T1").at(T).build(),
        ReportBuilder::vessel("V1").at(T).status("moored").build(),
    ])
    .await;
    let app = helper.app().await;

    let snapshot = app
        .tracker()
        .await
        .unwrap()
        .last_known_positions(T)
        .unwrap();

    assert_eq!(snapshot.tugs.len(), 1);
    assert!(snapshot.vessels.is_empty());
}

#[tokio::test]
async fn test_malformed_time_is_an_error_not_an_empty_result() {
    let helper = TestHelper::new(&[ReportBuilder::tug("T1").at(T).build()]).await;
    let app = helper.app().await;

    let err = execute(
        &app,
        Command::Positions {
            time: "2021-04-08 00:19".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(err.core().unwrap().is_format());

    let output = execute(
        &app,
        Command::Positions {
            time: "2021-04-07T00:00:00+00:00".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(output, json!({ "tugs": [], "vessels": [] }));
}

#[tokio::test]
async fn test_timestamps_are_listed_in_order() {
    let helper = TestHelper::new(&[
        ReportBuilder::tug("T1").at("2021-04-08T00:20:00+00:00").build(),
        ReportBuilder::vessel("V1").at("2021-04-08T00:10:00+00:00").build(),
        ReportBuilder::vessel("V2").at("2021-04-08T00:20:00+00:00").build(),
    ])
    .await;
    let app = helper.app().await;

    let output = execute(&app, Command::Timestamps).await.unwrap();
    assert_eq!(
        output,
        json!(["2021-04-08T00:10:00+00:00", "2021-04-08T00:20:00+00:00"])
    );

    let output = execute(
        &app,
        Command::ReportsAt {
            time: "2021-04-08T00:20:00+00:00".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(output.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_report_set_fails_at_startup() {
    let helper = TestHelper::new(&[]).await;

    let err = App::build(&helper.settings).await.err().unwrap();
    assert!(matches!(err.core(), Some(Error::MissingData { .. })));
}
