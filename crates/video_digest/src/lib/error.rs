/// Request level failures of the summarization pipeline.
///
/// Metadata and existing-transcript lookups never produce one of these from
/// [`crate::VideoSummarizer::summarize`]: they are recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid YouTube reference: {0}")]
    InvalidReference(String),
    #[error("Audio processing failed: {0}")]
    AudioAcquisitionFailed(String),
    #[error("Audio transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("Audio transcription produced an empty transcript")]
    EmptyTranscript,
    #[error("Summarization failed: {0}")]
    SummarizationFailed(String),
    #[error("Error fetching video info: {0}")]
    MetadataUnavailable(String),
}

impl Error {
    /// Whether the failure is the caller's fault rather than an upstream one
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidReference(_))
    }
}
