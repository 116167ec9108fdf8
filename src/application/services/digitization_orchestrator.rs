use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::application::ports::{HttpTransport, TransportRequest, TransportResponse};
use crate::domain::{
    ASSET_DELIMITER, DigitizationJob, DigitizationJobId, DigitizationJobState, DigitizedDocument,
    DownloadAsset, LanguageHint, OutputFormat, UploadTarget, UploadedBinary, merge_assets,
};

use super::digitization_error::{DigitizationError, DigitizationFailure, StepFailure};
use super::poll_policy::PollPolicy;

pub const JOB_PATH: &str = "/doc-digitization/job/v1";
pub const BLOB_TYPE_HEADER: &str = "x-ms-blob-type";
pub const BLOCK_BLOB: &str = "BlockBlob";

const UNKNOWN_STATE: &str = "Unknown";

/// Drives one document through the provider's digitization job pipeline.
///
/// Steps run strictly in order and each remote call happens at most once, except the status
/// poll. Nothing is retried: upload URLs are single-use and starting a job is a side effect.
pub struct DigitizationOrchestrator {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    poll_policy: PollPolicy,
}

impl DigitizationOrchestrator {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str, poll_policy: PollPolicy) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_policy,
        }
    }

    pub fn poll_policy(&self) -> &PollPolicy {
        &self.poll_policy
    }

    #[tracing::instrument(
        skip(self, payload, language, output_format),
        fields(
            file_name = %payload.file_name(),
            bytes = payload.len(),
            language = %language,
            output_format = %output_format
        )
    )]
    pub async fn digitize(
        &self,
        payload: UploadedBinary,
        language: LanguageHint,
        output_format: OutputFormat,
    ) -> Result<DigitizedDocument, DigitizationFailure> {
        if payload.is_empty() {
            return Err(DigitizationFailure::before_job(DigitizationError::Validation(
                "No document input provided. Upload a PDF/image or pass file_data_base64."
                    .to_string(),
            )));
        }

        let job_id = self
            .create_job(&language, &output_format)
            .await
            .map_err(DigitizationFailure::before_job)?;
        tracing::info!(job_id = %job_id, "Digitization job created");

        let mut job = DigitizationJob::new(job_id, language, output_format);

        match self.run_pipeline(&mut job, &payload).await {
            Ok(content) => {
                tracing::info!(
                    job_id = %job.id(),
                    chars = content.chars().count(),
                    assets = job.download_assets().len(),
                    "Digitization completed"
                );
                Ok(DigitizedDocument {
                    job_id: job.id().clone(),
                    job_state: job.remote_state_label().to_string(),
                    output_format: job.output_format().clone(),
                    content,
                })
            }
            Err(error) => {
                tracing::warn!(
                    job_id = %job.id(),
                    state = %job.state(),
                    language = %job.language(),
                    elapsed_ms = (job.updated_at() - job.created_at()).num_milliseconds(),
                    kind = %error.kind(),
                    error = %error,
                    "Digitization failed"
                );
                Err(DigitizationFailure::for_job(&job, error))
            }
        }
    }

    async fn run_pipeline(
        &self,
        job: &mut DigitizationJob,
        payload: &UploadedBinary,
    ) -> Result<String, DigitizationError> {
        let targets = self
            .request_upload_targets(job.id(), payload.file_name())
            .await?;
        job.assign_upload_targets(targets)?;

        let target = job.claim_upload_target()?;
        self.upload(&target, payload).await?;
        job.mark_uploaded()?;

        self.start(job.id()).await?;
        job.mark_started()?;

        self.wait_for_completion(job).await?;

        let assets = self.request_download_assets(job.id()).await?;
        job.attach_download_assets(assets)?;

        self.download_and_merge(job.download_assets()).await
    }

    async fn create_job(
        &self,
        language: &LanguageHint,
        output_format: &OutputFormat,
    ) -> Result<DigitizationJobId, DigitizationError> {
        let mut job_parameters = Map::new();
        job_parameters.insert("output_format".into(), json!(output_format.as_str()));
        if let Some(code) = language.code() {
            job_parameters.insert("language".into(), json!(code));
        }

        let request = TransportRequest::post(self.url(JOB_PATH))
            .json(json!({ "job_parameters": job_parameters }));
        let response = self
            .send(request)
            .await
            .map_err(DigitizationError::JobCreation)?;

        let parsed: CreateJobResponse = parse(&response)?;
        parsed
            .job_id
            .as_deref()
            .and_then(DigitizationJobId::parse)
            .ok_or_else(|| {
                DigitizationError::Protocol("Digitization job_id missing in response.".to_string())
            })
    }

    async fn request_upload_targets(
        &self,
        job_id: &DigitizationJobId,
        file_name: &str,
    ) -> Result<Vec<UploadTarget>, DigitizationError> {
        let request = TransportRequest::post(self.url(&format!("{}/upload-files", JOB_PATH)))
            .json(json!({ "job_id": job_id.as_str(), "files": [file_name] }));
        let response = self
            .send(request)
            .await
            .map_err(DigitizationError::UploadTarget)?;

        let parsed: UploadFilesResponse = parse(&response)?;
        let targets: Vec<UploadTarget> = url_entries(parsed.upload_urls, "upload_urls")?
            .into_iter()
            .map(|(file_name, url)| UploadTarget { file_name, url })
            .collect();

        if targets.is_empty() {
            return Err(DigitizationError::Protocol(
                "No upload_urls present in digitization response.".to_string(),
            ));
        }
        tracing::debug!(job_id = %job_id, targets = targets.len(), "Upload targets assigned");
        Ok(targets)
    }

    async fn upload(
        &self,
        target: &UploadTarget,
        payload: &UploadedBinary,
    ) -> Result<(), DigitizationError> {
        let request = TransportRequest::put(&target.url)
            .header(BLOB_TYPE_HEADER, BLOCK_BLOB)
            .binary(payload.bytes().clone(), payload.content_type())
            .pre_authorized();
        self.send(request)
            .await
            .map_err(DigitizationError::Upload)?;

        tracing::debug!(
            file_name = %target.file_name,
            bytes = payload.len(),
            content_type = %payload.content_type(),
            "Document uploaded"
        );
        Ok(())
    }

    async fn start(&self, job_id: &DigitizationJobId) -> Result<(), DigitizationError> {
        let request = TransportRequest::post(self.job_url(job_id, "start"));
        self.send(request)
            .await
            .map_err(DigitizationError::Start)?;
        tracing::debug!(job_id = %job_id, "Digitization job started");
        Ok(())
    }

    /// Polls until the job is terminal, then turns non-completion into an error.
    async fn wait_for_completion(
        &self,
        job: &mut DigitizationJob,
    ) -> Result<(), DigitizationError> {
        match self.poll_policy.deadline {
            Some(deadline) => {
                match tokio::time::timeout(deadline, self.poll_until_terminal(job)).await {
                    Ok(polled) => polled?,
                    Err(_) => tracing::warn!(
                        job_id = %job.id(),
                        deadline_secs = deadline.as_secs_f64(),
                        "Poll deadline reached"
                    ),
                }
            }
            None => self.poll_until_terminal(job).await?,
        }

        let (state, message) = match job.last_status() {
            Some(status) => (
                status.job_state.clone(),
                status.error_message.clone().unwrap_or_default(),
            ),
            None => (UNKNOWN_STATE.to_string(), String::new()),
        };

        match job.state() {
            DigitizationJobState::Completed => Ok(()),
            DigitizationJobState::Failed => Err(DigitizationError::JobFailed { state, message }),
            _ => {
                job.mark_timed_out()?;
                Err(DigitizationError::TimedOut { state, message })
            }
        }
    }

    async fn poll_until_terminal(
        &self,
        job: &mut DigitizationJob,
    ) -> Result<(), DigitizationError> {
        for attempt in 1..=self.poll_policy.max_attempts {
            tokio::time::sleep(self.poll_policy.interval).await;

            let request = TransportRequest::get(self.job_url(job.id(), "status"));
            let response = self.send(request).await.map_err(DigitizationError::Poll)?;
            let status: JobStatusResponse = parse(&response)?;

            let remote_state = status.job_state.as_deref().unwrap_or(UNKNOWN_STATE);
            let state = job.record_status(remote_state, status.error_message)?;
            tracing::debug!(
                job_id = %job.id(),
                attempt,
                remote_state,
                state = %state,
                "Polled digitization status"
            );

            if state.is_terminal() {
                return Ok(());
            }
        }
        Ok(())
    }

    async fn request_download_assets(
        &self,
        job_id: &DigitizationJobId,
    ) -> Result<Vec<DownloadAsset>, DigitizationError> {
        let request = TransportRequest::post(self.job_url(job_id, "download-files"));
        let response = self
            .send(request)
            .await
            .map_err(DigitizationError::DownloadList)?;

        let parsed: DownloadFilesResponse = parse(&response)?;
        let assets: Vec<DownloadAsset> = url_entries(parsed.download_urls, "download_urls")?
            .into_iter()
            .map(|(key, url)| DownloadAsset { key, url })
            .collect();

        if assets.is_empty() {
            return Err(DigitizationError::Protocol(
                "No download URLs returned by digitization API.".to_string(),
            ));
        }
        Ok(assets)
    }

    async fn download_and_merge(
        &self,
        assets: &[DownloadAsset],
    ) -> Result<String, DigitizationError> {
        let mut bodies = Vec::with_capacity(assets.len());
        for asset in assets {
            let request = TransportRequest::get(&asset.url).pre_authorized();
            let response = self
                .send(request)
                .await
                .map_err(DigitizationError::DownloadAsset)?;

            let body = response.text();
            if body.contains(ASSET_DELIMITER) {
                tracing::warn!(
                    asset = %asset.key,
                    "Asset content contains the asset delimiter; merged boundaries are ambiguous"
                );
            }
            tracing::debug!(asset = %asset.key, chars = body.chars().count(), "Asset downloaded");
            bodies.push(body);
        }
        Ok(merge_assets(&bodies))
    }

    /// Sends a request and keeps only 2xx responses.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, StepFailure> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| StepFailure::from_transport(&e))?;

        if !response.is_success() {
            return Err(StepFailure::from_response(&response));
        }
        Ok(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn job_url(&self, job_id: &DigitizationJobId, action: &str) -> String {
        self.url(&format!("{}/{}/{}", JOB_PATH, job_id, action))
    }
}

fn parse<T: DeserializeOwned>(response: &TransportResponse) -> Result<T, DigitizationError> {
    response.json().map_err(|e| {
        DigitizationError::Protocol(format!("Malformed digitization response: {}", e))
    })
}

/// Flattens a provider URL mapping, keeping the order the provider sent.
fn url_entries(
    entries: Map<String, Value>,
    field: &str,
) -> Result<Vec<(String, String)>, DigitizationError> {
    entries
        .into_iter()
        .map(|(name, value)| {
            let url = serde_json::from_value::<RemoteUrl>(value)
                .map(RemoteUrl::into_url)
                .map_err(|e| {
                    DigitizationError::Protocol(format!("Malformed {} entry '{}': {}", field, name, e))
                })?;
            Ok((name, url))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct CreateJobResponse {
    #[serde(default)]
    pub job_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadFilesResponse {
    #[serde(default)]
    pub upload_urls: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct JobStatusResponse {
    #[serde(default)]
    pub job_state: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadFilesResponse {
    #[serde(default)]
    pub download_urls: Map<String, Value>,
}

/// Providers send either the bare URL or an object carrying it as `file_url`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RemoteUrl {
    Plain(String),
    Detailed { file_url: String },
}

impl RemoteUrl {
    pub fn into_url(self) -> String {
        match self {
            RemoteUrl::Plain(url) | RemoteUrl::Detailed { file_url: url } => url,
        }
    }
}
