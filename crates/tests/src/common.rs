use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use client::api::HttpCaseClient;
use serde_json::{json, Value};
use shared_types::ApiConfig;

/// Ids served by the mock case API. Anything else gets a 404.
pub const FOUND_ID: &str = "C-2024-001";
pub const SPARSE_ID: &str = "C-2024-002";
pub const NULL_ID: &str = "nulo";
pub const EMPTY_BODY_ID: &str = "vacio";
pub const EMPTY_OBJECT_ID: &str = "objeto-vacio";
pub const SERVER_ERROR_ID: &str = "falla";
pub const MALFORMED_ID: &str = "roto";
pub const SLOW_ID: &str = "lento";

/// How long the slow fixture waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_millis(300);

/// Every case id the mock server was asked for, in arrival order.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

impl RequestLog {
    pub fn ids(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, id: &str) {
        self.0.lock().unwrap().push(id.to_string());
    }
}

/// A running mock API plus a client pointed at it.
pub struct MockApi {
    pub base_url: String,
    pub client: HttpCaseClient,
    pub requests: RequestLog,
}

/// Full record as the portal API returns it, with numeric ids and a
/// numeric phone the way some backends emit them.
pub fn found_case_json() -> Value {
    json!({
        "caso_id": FOUND_ID,
        "caso_titulo": "Reclamo laboral contra Transportes del Sur",
        "caso_estado": "En trámite",
        "nombre_abogado": "Ana Pérez",
        "abogado_telefono": 5491122334455i64,
        "abogado_calendly_url": "https://calendly.com/ana-perez",
        "timeline": [
            {
                "evento_id": 1,
                "fecha_evento": "2024-03-01T10:00:00",
                "evento_descripcion": "Apertura del expediente"
            },
            {
                "evento_id": 2,
                "fecha_evento": "2024-03-05T12:30:00",
                "evento_descripcion": "Primera audiencia"
            }
        ],
        "documentos": [
            {
                "doc_id": 7,
                "nombre_archivo": "demanda.pdf",
                "url_almacenamiento": "https://files.example.com/demanda.pdf"
            }
        ]
    })
}

/// Record with only the id, title and status present.
pub fn sparse_case_json() -> Value {
    json!({
        "caso_id": SPARSE_ID,
        "caso_titulo": "Sucesión familiar",
        "caso_estado": "Abierto",
        "nombre_abogado": null,
        "timeline": null
    })
}

async fn case_handler(State(log): State<RequestLog>, Path(caso_id): Path<String>) -> Response {
    log.record(&caso_id);
    match caso_id.as_str() {
        FOUND_ID => axum::Json(found_case_json()).into_response(),
        SPARSE_ID => axum::Json(sparse_case_json()).into_response(),
        NULL_ID => axum::Json(Value::Null).into_response(),
        EMPTY_BODY_ID => StatusCode::OK.into_response(),
        EMPTY_OBJECT_ID => axum::Json(json!({})).into_response(),
        SERVER_ERROR_ID => {
            (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response()
        }
        MALFORMED_ID => (StatusCode::OK, "<html>not json</html>").into_response(),
        SLOW_ID => {
            tokio::time::sleep(SLOW_DELAY).await;
            axum::Json(json!({
                "caso_id": SLOW_ID,
                "caso_titulo": "Respuesta tardía",
                "caso_estado": "Cerrado"
            }))
            .into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Bind the mock API on an ephemeral local port and serve it in the
/// background for the rest of the test.
pub async fn spawn_mock_api() -> MockApi {
    let requests = RequestLog::default();
    let router = Router::new()
        .route("/api/casos/{caso_id}", get(case_handler))
        .with_state(requests.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("Mock API has no local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock API stopped");
    });

    let base_url = format!("http://{}", addr);
    let client = HttpCaseClient::new(&ApiConfig {
        base_url: base_url.clone(),
    });

    MockApi {
        base_url,
        client,
        requests,
    }
}

/// A client pointed at a port nothing listens on.
pub fn unreachable_client() -> HttpCaseClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to reserve a port");
    let addr = listener.local_addr().expect("Reserved port has no address");
    drop(listener);
    HttpCaseClient::new(&ApiConfig {
        base_url: format!("http://{}", addr),
    })
}
