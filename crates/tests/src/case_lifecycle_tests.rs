use client::lifecycle::{load_case, CaseLoader, CaseView};
use pretty_assertions::assert_eq;
use shared_types::{CASE_LOAD_ERROR_MESSAGE, CASE_NOT_FOUND_MESSAGE};

use crate::common::{
    spawn_mock_api, unreachable_client, FOUND_ID, MALFORMED_ID, NULL_ID, SERVER_ERROR_ID,
    SLOW_DELAY, SLOW_ID,
};

#[tokio::test]
async fn loader_reaches_loaded_for_existing_case() {
    let api = spawn_mock_api().await;
    let mut loader = CaseLoader::new();
    assert!(loader.view().is_loading());

    let ticket = loader.begin(FOUND_ID);
    let outcome = load_case(&api.client, &ticket).await;
    assert!(loader.settle(&ticket, outcome));

    match loader.view() {
        CaseView::Loaded(case) => assert_eq!(case.id, FOUND_ID),
        other => panic!("expected loaded case, got {:?}", other),
    }
    assert_eq!(loader.view().status_message(), None);
}

#[tokio::test]
async fn loader_reaches_not_found_for_null_body() {
    let api = spawn_mock_api().await;
    let mut loader = CaseLoader::new();

    let ticket = loader.begin(NULL_ID);
    let outcome = load_case(&api.client, &ticket).await;
    loader.settle(&ticket, outcome);

    assert_eq!(loader.view(), &CaseView::NotFound);
    assert_eq!(loader.view().status_message(), Some(CASE_NOT_FOUND_MESSAGE));
}

#[tokio::test]
async fn every_failure_shows_the_same_error_message() {
    let api = spawn_mock_api().await;

    for id in [SERVER_ERROR_ID, MALFORMED_ID, "no-existe"] {
        let mut loader = CaseLoader::new();
        let ticket = loader.begin(id);
        let outcome = load_case(&api.client, &ticket).await;
        loader.settle(&ticket, outcome);
        assert_eq!(loader.view(), &CaseView::Error, "case id {}", id);
        assert_eq!(loader.view().status_message(), Some(CASE_LOAD_ERROR_MESSAGE));
    }
}

#[tokio::test]
async fn network_failure_shows_error() {
    let client = unreachable_client();
    let mut loader = CaseLoader::new();

    let ticket = loader.begin(FOUND_ID);
    let outcome = load_case(&client, &ticket).await;
    loader.settle(&ticket, outcome);

    assert_eq!(loader.view(), &CaseView::Error);
}

#[tokio::test]
async fn one_request_per_identifier() {
    let api = spawn_mock_api().await;
    let mut loader = CaseLoader::new();

    let ticket = loader.begin(FOUND_ID);
    let outcome = load_case(&api.client, &ticket).await;
    loader.settle(&ticket, outcome);

    assert_eq!(api.requests.ids(), vec![FOUND_ID.to_string()]);
}

#[tokio::test]
async fn slow_response_for_previous_id_is_discarded() {
    let api = spawn_mock_api().await;
    let mut loader = CaseLoader::new();

    let slow_ticket = loader.begin(SLOW_ID);
    let slow_client = api.client.clone();
    let slow = tokio::spawn(async move {
        let outcome = load_case(&slow_client, &slow_ticket).await;
        (slow_ticket, outcome)
    });

    // The identifier changes while the slow request is in flight.
    let fast_ticket = loader.begin(FOUND_ID);
    assert!(loader.view().is_loading());
    let fast_outcome = load_case(&api.client, &fast_ticket).await;
    assert!(loader.settle(&fast_ticket, fast_outcome));

    let (slow_ticket, slow_outcome) = tokio::time::timeout(SLOW_DELAY * 10, slow)
        .await
        .unwrap()
        .unwrap();
    assert!(slow_outcome.is_ok());
    assert!(!loader.settle(&slow_ticket, slow_outcome));

    match loader.view() {
        CaseView::Loaded(case) => assert_eq!(case.id, FOUND_ID),
        other => panic!("stale response overwrote the view: {:?}", other),
    }
}

#[tokio::test]
async fn cancelled_load_leaves_view_untouched() {
    let api = spawn_mock_api().await;
    let mut loader = CaseLoader::new();

    let ticket = loader.begin(FOUND_ID);
    loader.cancel();
    let outcome = load_case(&api.client, &ticket).await;

    assert!(!loader.settle(&ticket, outcome));
    assert!(loader.view().is_loading());
}
