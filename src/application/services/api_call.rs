use crate::application::ports::{
    HttpTransport, TransportError, TransportRequest, TransportResponse,
};

/// Failure of a single request/response provider call.
#[derive(Debug, thiserror::Error)]
pub enum ApiCallError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiCallError {
    pub fn http_status(&self) -> u16 {
        match self {
            ApiCallError::InvalidInput(_) => 400,
            ApiCallError::Upstream { status, .. } => *status,
            ApiCallError::Transport(_) | ApiCallError::MalformedResponse(_) => 500,
        }
    }
}

/// Sends a request; non-2xx becomes [`ApiCallError::Upstream`] carrying the response body.
pub(crate) async fn send_checked(
    transport: &dyn HttpTransport,
    request: TransportRequest,
) -> Result<TransportResponse, ApiCallError> {
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(ApiCallError::Upstream {
            status: response.status,
            message: response.text(),
        });
    }
    Ok(response)
}

pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(
    response: &TransportResponse,
) -> Result<T, ApiCallError> {
    response
        .json()
        .map_err(|e| ApiCallError::MalformedResponse(e.to_string()))
}
