use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{display_string, id_string, null_as_default, opt_id_string};

/// Text shown when a case has no assigned representative.
pub const UNASSIGNED_REPRESENTATIVE: &str = "No asignado";

/// Message template sent through the messaging deep link.
const CONTACT_MESSAGE_PREFIX: &str = "Hola, te escribo sobre el caso";

// ---------------------------------------------------------------------------
// Case
// ---------------------------------------------------------------------------

/// A legal matter as returned by `GET /api/casos/{id}`.
///
/// Optional fields degrade to fallback text or inert links when rendered,
/// so a sparse payload never fails the view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Case {
    #[serde(rename = "caso_id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "caso_titulo", default, deserialize_with = "display_string")]
    pub title: String,
    #[serde(rename = "caso_estado", default, deserialize_with = "display_string")]
    pub status: String,
    #[serde(rename = "nombre_abogado", default, deserialize_with = "opt_id_string")]
    pub representative_name: Option<String>,
    #[serde(rename = "abogado_telefono", default, deserialize_with = "opt_id_string")]
    pub representative_phone: Option<String>,
    #[serde(rename = "abogado_calendly_url", default)]
    pub scheduling_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timeline: Vec<CaseEvent>,
    #[serde(rename = "documentos", default, deserialize_with = "null_as_default")]
    pub documents: Vec<CaseDocument>,
}

impl Case {
    /// Representative name, or [`UNASSIGNED_REPRESENTATIVE`] when absent or blank.
    pub fn representative_display(&self) -> &str {
        match self.representative_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNASSIGNED_REPRESENTATIVE,
        }
    }

    /// Text prefilled in the messaging deep link.
    pub fn contact_message(&self) -> String {
        format!("{} {}", CONTACT_MESSAGE_PREFIX, self.id)
    }

    /// Messaging deep link: `{base}/{phone}?text={encoded message}`.
    ///
    /// The phone number is not validated; an absent number leaves the
    /// path segment empty and the link simply goes nowhere useful.
    pub fn messaging_link(&self, messaging_base_url: &str) -> String {
        let phone = self.representative_phone.as_deref().unwrap_or_default();
        format!(
            "{}/{}?text={}",
            messaging_base_url.trim_end_matches('/'),
            phone,
            urlencoding::encode(&self.contact_message())
        )
    }
}

// ---------------------------------------------------------------------------
// Timeline & documents
// ---------------------------------------------------------------------------

/// One timestamped entry in a case's history.
///
/// Every field is lenient: a missing id or a non-string value degrades the
/// row instead of rejecting the whole case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CaseEvent {
    #[serde(rename = "evento_id", default, deserialize_with = "display_string")]
    pub id: String,
    /// Timestamp exactly as supplied by the endpoint; formatted at render time.
    #[serde(rename = "fecha_evento", default, deserialize_with = "display_string")]
    pub occurred_at: String,
    #[serde(rename = "evento_descripcion", default, deserialize_with = "display_string")]
    pub description: String,
}

/// A parsed event timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTimestamp {
    /// Carried an offset (or was epoch milliseconds): a fixed instant.
    Instant(DateTime<Utc>),
    /// No offset: a wall-clock time in the viewer's own zone.
    Wall(NaiveDateTime),
}

impl EventTimestamp {
    /// Resolve into `tz`. Instants are converted; wall times keep their
    /// clock reading. A wall time skipped by a DST jump is read as UTC.
    pub fn in_zone<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        match self {
            EventTimestamp::Instant(at) => at.with_timezone(tz),
            EventTimestamp::Wall(naive) => tz
                .from_local_datetime(naive)
                .earliest()
                .unwrap_or_else(|| tz.from_utc_datetime(naive)),
        }
    }
}

impl CaseEvent {
    /// Parse the supplied timestamp.
    ///
    /// Accepts RFC 3339, epoch milliseconds, naive
    /// `YYYY-MM-DD[ T]HH:MM[:SS]` and bare dates (midnight).
    pub fn timestamp(&self) -> Option<EventTimestamp> {
        let raw = self.occurred_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(EventTimestamp::Instant(dt.with_timezone(&Utc)));
        }
        if let Ok(millis) = raw.parse::<i64>() {
            return DateTime::from_timestamp_millis(millis).map(EventTimestamp::Instant);
        }
        const NAIVE_FORMATS: &[&str] = &[
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ];
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .map(EventTimestamp::Wall)
    }
}

/// A file attached to a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CaseDocument {
    #[serde(rename = "doc_id", default, deserialize_with = "display_string")]
    pub id: String,
    #[serde(rename = "nombre_archivo", default, deserialize_with = "display_string")]
    pub filename: String,
    #[serde(rename = "url_almacenamiento", default, deserialize_with = "display_string")]
    pub storage_url: String,
}
