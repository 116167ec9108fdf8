mod digitization_job;
mod digitized_document;
mod job_id;
mod job_state;
mod language_hint;
mod output_format;
mod uploaded_binary;

pub use digitization_job::{
    DigitizationJob, DownloadAsset, JobTransitionError, RemoteStatus, UploadTarget,
};
pub use digitized_document::{ASSET_DELIMITER, DigitizedDocument, merge_assets};
pub use job_id::DigitizationJobId;
pub use job_state::DigitizationJobState;
pub use language_hint::{AUTO_LANGUAGE, LanguageHint};
pub use output_format::OutputFormat;
pub use uploaded_binary::{OCTET_STREAM, UploadedBinary, file_name_for_mime};
