use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::is_truthy;

/// Storage key holding the signed-in account record (JSON object).
pub const ACCOUNT_KEY: &str = "account";

/// Storage key holding the persisted signed-out flag (JSON boolean).
pub const SIGN_OUT_KEY: &str = "sign-out";

/// Advisory authentication state read from persisted browser storage.
///
/// Nothing here is validated server side; it only decides which menu
/// entries are shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub signed_out: bool,
    pub account: Option<Value>,
}

/// Why a stored value was ignored while building a [`SessionState`].
#[derive(Debug, Clone, PartialEq)]
pub struct IgnoredEntry {
    pub key: &'static str,
    pub reason: String,
}

impl SessionState {
    /// Build the state from the raw stored strings.
    ///
    /// Values that are not valid JSON are treated as absent and reported
    /// back so the caller can log them.
    pub fn from_raw(account: Option<&str>, sign_out: Option<&str>) -> (Self, Vec<IgnoredEntry>) {
        let mut ignored = Vec::new();

        let account = account.and_then(|raw| match serde_json::from_str::<Value>(raw) {
            Ok(Value::Null) => None,
            Ok(value) => Some(value),
            Err(e) => {
                ignored.push(IgnoredEntry {
                    key: ACCOUNT_KEY,
                    reason: e.to_string(),
                });
                None
            }
        });

        let signed_out = sign_out
            .map(|raw| match serde_json::from_str::<Value>(raw) {
                Ok(v) => is_truthy(&v),
                Err(e) => {
                    ignored.push(IgnoredEntry {
                        key: SIGN_OUT_KEY,
                        reason: e.to_string(),
                    });
                    false
                }
            })
            .unwrap_or(false);

        (Self { signed_out, account }, ignored)
    }

    /// An account record with at least one own key is present.
    ///
    /// Keys are counted the way `Object.keys` does: object fields, array
    /// elements and string characters. Numbers and booleans have none.
    pub fn has_account(&self) -> bool {
        match &self.account {
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::String(s)) => !s.is_empty(),
            _ => false,
        }
    }
}

/// Which set of session links the navigation menu shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    /// "Cuenta" and "Cerrar sesión".
    Authenticated,
    /// "Login".
    Anonymous,
}

impl AuthView {
    /// Authenticated iff an account is present and neither the persisted
    /// nor the in-memory signed-out flag is set.
    pub fn resolve(session: &SessionState, context_signed_out: bool) -> Self {
        let signed_out = session.signed_out || context_signed_out;
        if session.has_account() && !signed_out {
            AuthView::Authenticated
        } else {
            AuthView::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthView::Authenticated)
    }
}
