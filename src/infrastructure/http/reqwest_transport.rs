use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart;
use reqwest::{Client, Method};

use crate::application::ports::{
    Credential, FormPart, HttpMethod, HttpTransport, RequestBody, TransportError,
    TransportRequest, TransportResponse,
};
use crate::infrastructure::observability::redact_url;

pub const API_KEY_HEADER: &str = "api-subscription-key";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// [`HttpTransport`] over a shared `reqwest` connection pool.
///
/// Credentialed requests get the subscription key header; credentialed JSON and empty-body
/// requests also get `Content-Type: application/json`. Pre-authorized requests get neither.
pub struct ReqwestTransport {
    client: Client,
    api_key: String,
}

impl ReqwestTransport {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::InvalidRequest(format!("http client: {}", e)))?;
        Self::with_client(client, api_key)
    }

    pub fn with_client(client: Client, api_key: &str) -> Result<Self, TransportError> {
        if api_key.trim().is_empty() {
            return Err(TransportError::InvalidRequest(
                "api_key must not be empty".to_string(),
            ));
        }
        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
        };
        let mut builder = self.client.request(method, &request.url);

        if request.credential == Credential::ApiKey {
            builder = builder.header(API_KEY_HEADER, &self.api_key);
            if matches!(request.body, RequestBody::Empty | RequestBody::Json(_)) {
                builder = builder.header(CONTENT_TYPE, "application/json");
            }
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => match request.method {
                HttpMethod::Get => builder,
                HttpMethod::Post | HttpMethod::Put => builder.body(Bytes::new()),
            },
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Binary { data, content_type } => {
                builder.header(CONTENT_TYPE, content_type).body(data)
            }
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts)?),
        };

        tracing::debug!(
            method = %request.method,
            url = %redact_url(&request.url),
            "Sending request"
        );

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::BodyReadFailed(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "Received response");

        Ok(TransportResponse::new(status, body))
    }
}

fn build_form(parts: Vec<FormPart>) -> Result<multipart::Form, TransportError> {
    let mut form = multipart::Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                mime_type,
                data,
            } => {
                let file_part = multipart::Part::bytes(data.to_vec())
                    .file_name(file_name)
                    .mime_str(&mime_type)
                    .map_err(|e| TransportError::InvalidRequest(format!("mime: {}", e)))?;
                form.part(name, file_part)
            }
        };
    }
    Ok(form)
}
