//! Loading lifecycle of the case-detail view.
//!
//! Every fetch is issued against a [`FetchTicket`]. A result is applied
//! only while its ticket is still the current one, so a slow response for
//! an old identifier can never overwrite the view for a newer one.

use shared_types::{
    Case, ClientError, CASE_LOADING_MESSAGE, CASE_LOAD_ERROR_MESSAGE, CASE_NOT_FOUND_MESSAGE,
};

use crate::api::CaseDataClient;

/// What the case-detail view shows. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CaseView {
    #[default]
    Loading,
    Error,
    NotFound,
    Loaded(Case),
}

impl CaseView {
    /// Map a settled fetch onto the view.
    pub fn from_outcome(outcome: Result<Option<Case>, ClientError>) -> Self {
        match outcome {
            Ok(Some(case)) => CaseView::Loaded(case),
            Ok(None) => CaseView::NotFound,
            Err(_) => CaseView::Error,
        }
    }

    /// The single status line for non-loaded states.
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            CaseView::Loading => Some(CASE_LOADING_MESSAGE),
            CaseView::Error => Some(CASE_LOAD_ERROR_MESSAGE),
            CaseView::NotFound => Some(CASE_NOT_FOUND_MESSAGE),
            CaseView::Loaded(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CaseView::Loading)
    }
}

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    case_id: String,
}

impl FetchTicket {
    pub fn case_id(&self) -> &str {
        &self.case_id
    }
}

/// View state plus the generation counter that guards it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseLoader {
    generation: u64,
    view: CaseView,
}

impl CaseLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &CaseView {
        &self.view
    }

    /// Start loading `case_id`. Any earlier ticket becomes stale.
    pub fn begin(&mut self, case_id: impl Into<String>) -> FetchTicket {
        self.generation += 1;
        self.view = CaseView::Loading;
        FetchTicket {
            generation: self.generation,
            case_id: case_id.into(),
        }
    }

    /// Whether `ticket` is the one the view is waiting on.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a settled fetch. Returns `false` and leaves the view alone
    /// when the ticket is stale.
    pub fn settle(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Option<Case>, ClientError>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(case_id = %ticket.case_id, "dropping stale case response");
            return false;
        }
        self.view = CaseView::from_outcome(outcome);
        true
    }

    /// Invalidate the outstanding ticket without touching the view.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}

/// Run the fetch for `ticket`. Failures are logged with their cause here;
/// the view only ever sees the fixed message.
pub async fn load_case<C: CaseDataClient>(
    client: &C,
    ticket: &FetchTicket,
) -> Result<Option<Case>, ClientError> {
    let outcome = client.fetch_case(ticket.case_id()).await;
    if let Err(err) = &outcome {
        tracing::error!(case_id = %ticket.case_id(), error = %err, "failed to fetch case detail");
    }
    outcome
}
