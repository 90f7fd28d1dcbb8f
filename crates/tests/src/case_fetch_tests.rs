use client::api::CaseDataClient;
use pretty_assertions::assert_eq;
use shared_types::{ClientErrorKind, UNASSIGNED_REPRESENTATIVE};

use crate::common::{
    spawn_mock_api, unreachable_client, EMPTY_BODY_ID, EMPTY_OBJECT_ID, FOUND_ID, MALFORMED_ID,
    NULL_ID, SERVER_ERROR_ID, SPARSE_ID,
};

#[tokio::test]
async fn fetch_found_case_maps_wire_keys() {
    let api = spawn_mock_api().await;

    let case = api.client.fetch_case(FOUND_ID).await.unwrap().unwrap();
    assert_eq!(case.id, FOUND_ID);
    assert_eq!(case.title, "Reclamo laboral contra Transportes del Sur");
    assert_eq!(case.status, "En trámite");
    assert_eq!(case.representative_display(), "Ana Pérez");
    assert_eq!(case.representative_phone.as_deref(), Some("5491122334455"));
    assert_eq!(
        case.scheduling_url.as_deref(),
        Some("https://calendly.com/ana-perez")
    );
}

#[tokio::test]
async fn fetch_keeps_timeline_and_document_order() {
    let api = spawn_mock_api().await;

    let case = api.client.fetch_case(FOUND_ID).await.unwrap().unwrap();
    let events: Vec<&str> = case.timeline.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(events, vec!["1", "2"]);
    assert_eq!(case.timeline[1].description, "Primera audiencia");
    assert_eq!(case.documents.len(), 1);
    assert_eq!(case.documents[0].id, "7");
    assert_eq!(case.documents[0].filename, "demanda.pdf");
}

#[tokio::test]
async fn fetch_sparse_case_uses_fallbacks() {
    let api = spawn_mock_api().await;

    let case = api.client.fetch_case(SPARSE_ID).await.unwrap().unwrap();
    assert_eq!(case.representative_display(), UNASSIGNED_REPRESENTATIVE);
    assert!(case.timeline.is_empty());
    assert!(case.documents.is_empty());
    assert_eq!(case.scheduling_url, None);
}

#[tokio::test]
async fn fetch_null_body_is_not_found() {
    let api = spawn_mock_api().await;
    assert_eq!(api.client.fetch_case(NULL_ID).await.unwrap(), None);
}

#[tokio::test]
async fn fetch_empty_body_is_not_found() {
    let api = spawn_mock_api().await;
    assert_eq!(api.client.fetch_case(EMPTY_BODY_ID).await.unwrap(), None);
}

#[tokio::test]
async fn fetch_empty_object_is_not_found() {
    let api = spawn_mock_api().await;
    assert_eq!(api.client.fetch_case(EMPTY_OBJECT_ID).await.unwrap(), None);
}

#[tokio::test]
async fn fetch_unknown_id_is_status_error() {
    let api = spawn_mock_api().await;

    let err = api.client.fetch_case("no-existe").await.unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::Status);
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn fetch_server_error_is_status_error() {
    let api = spawn_mock_api().await;

    let err = api.client.fetch_case(SERVER_ERROR_ID).await.unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::Status);
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(
        err.user_message(),
        "No se pudo cargar la información del caso."
    );
}

#[tokio::test]
async fn fetch_malformed_body_is_error() {
    let api = spawn_mock_api().await;

    let err = api.client.fetch_case(MALFORMED_ID).await.unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::MalformedBody);
}

#[tokio::test]
async fn fetch_unreachable_host_is_network_error() {
    let client = unreachable_client();

    let err = client.fetch_case(FOUND_ID).await.unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::Network);
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn fetch_encodes_id_as_one_path_segment() {
    let api = spawn_mock_api().await;

    let err = api.client.fetch_case("a/b c").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(api.requests.ids(), vec!["a/b c".to_string()]);
}

#[tokio::test]
async fn mock_api_serves_portal_wire_format() {
    let api = spawn_mock_api().await;

    let raw: serde_json::Value = reqwest::get(format!("{}/api/casos/{}", api.base_url, FOUND_ID))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(raw["caso_id"], FOUND_ID);
    assert!(raw["documentos"].is_array());
}
