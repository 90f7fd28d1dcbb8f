use shared_types::ClientError;

/// Convert a reqwest::Error into a ClientError.
pub fn reqwest_to_client_error(err: reqwest::Error) -> ClientError {
    if let Some(status) = err.status() {
        return ClientError::status(status.as_u16(), err.to_string());
    }
    if err.is_decode() {
        return ClientError::malformed(err.to_string());
    }
    if err.is_builder() {
        return ClientError::invalid_config(err.to_string());
    }
    ClientError::network(err.to_string())
}

/// Extension trait providing `.into_client_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_client_error(self) -> ClientError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_client_error(self) -> ClientError {
        reqwest_to_client_error(self)
    }
}

/// Convert a body decoding failure into a ClientError.
pub fn json_to_client_error(err: serde_json::Error) -> ClientError {
    ClientError::malformed(err.to_string())
}
