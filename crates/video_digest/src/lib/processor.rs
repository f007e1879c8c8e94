use std::path::PathBuf;

use tokio::time::timeout;
use uuid::Uuid;

use crate::{
    error::Error,
    parser::parse_video_reference,
    scratch::{AudioArtifact, ScratchDir},
    types::{SummarizationResult, TranscriptOrigin, VideoId, VideoMetadata, VideoReference},
    yt::{AudioHandler, MetadataSource, TranscriptSource},
    AudioInput, Summarizer, Transcriber,
};

pub mod builder;

use builder::{ChunkingConfig, StageTimeouts};

/// Turns a video reference into a summary, preferring an existing transcript
/// and falling back to downloading and transcribing the audio.
///
/// Metadata is looked up alongside and never fails a request; only invalid
/// references and failures on the audio path or in the summarizer do, and
/// those are returned without waiting for the metadata lookup.
#[derive(Debug)]
pub struct VideoSummarizer<T, M, A, X, S>
where
    T: TranscriptSource + Send + Sync + 'static,
    M: MetadataSource + Send + Sync + 'static,
    A: AudioHandler + Send + Sync + 'static,
    X: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub(crate) scratch_dir: PathBuf,
    pub(crate) transcript_source: T,
    pub(crate) metadata_source: M,
    pub(crate) audio_handler: A,
    pub(crate) transcriber: X,
    pub(crate) summarizer: S,
    pub(crate) timeouts: StageTimeouts,
    pub(crate) chunking_config: Option<ChunkingConfig>,
}

impl<T, M, A, X, S> VideoSummarizer<T, M, A, X, S>
where
    T: TranscriptSource + Send + Sync + 'static,
    M: MetadataSource + Send + Sync + 'static,
    A: AudioHandler + Send + Sync + 'static,
    X: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    #[tracing::instrument(
        skip(self),
        fields(request_id = %Uuid::new_v4(), video_id = tracing::field::Empty)
    )]
    pub async fn summarize(&self, reference: &str) -> Result<SummarizationResult, Error> {
        let reference = parse_video_reference(reference)
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected video reference"))?;
        tracing::Span::current().record("video_id", reference.video_id().as_str());

        // a pipeline failure drops the pending metadata lookup
        let (metadata, (origin, summary)) = tokio::try_join!(
            async { Ok::<_, Error>(self.resolve_metadata(&reference).await) },
            self.transcript_and_summary(&reference),
        )?;

        let source_kind = origin.source_kind();
        tracing::info!(?source_kind, "Video summarized");

        Ok(SummarizationResult {
            video_id: reference.video_id().clone(),
            metadata,
            summary,
            source_kind,
        })
    }

    /// Strict metadata lookup: unlike the summarization path, failures are
    /// reported to the caller.
    #[tracing::instrument(skip(self))]
    pub async fn video_info(&self, video_id: &str) -> Result<(VideoId, VideoMetadata), Error> {
        let reference = parse_video_reference(video_id)?;

        let details = timeout(
            self.timeouts.metadata,
            self.metadata_source.fetch_metadata(&reference),
        )
        .await
        .map_err(|_| {
            Error::MetadataUnavailable(format!("timed out after {:?}", self.timeouts.metadata))
        })?
        .map_err(|e| Error::MetadataUnavailable(format!("{e:#}")))?;

        let video_id = reference.video_id().clone();
        let metadata = VideoMetadata::from_details(&video_id, details);
        Ok((video_id, metadata))
    }

    /// Best-effort metadata: any failure or timeout yields placeholders
    #[tracing::instrument(skip_all)]
    async fn resolve_metadata(&self, reference: &VideoReference) -> VideoMetadata {
        let video_id = reference.video_id();

        match timeout(
            self.timeouts.metadata,
            self.metadata_source.fetch_metadata(reference),
        )
        .await
        {
            Ok(Ok(details)) => VideoMetadata::from_details(video_id, details),
            Ok(Err(e)) => {
                tracing::warn!(error = %format!("{e:#}"), "Metadata unavailable, using placeholders");
                VideoMetadata::placeholder(video_id)
            }
            Err(_) => {
                tracing::warn!(
                    timeout = ?self.timeouts.metadata,
                    "Metadata lookup timed out, using placeholders"
                );
                VideoMetadata::placeholder(video_id)
            }
        }
    }

    async fn transcript_and_summary(
        &self,
        reference: &VideoReference,
    ) -> Result<(TranscriptOrigin, String), Error> {
        let origin = match self.fetch_existing_transcript(reference.video_id()).await {
            Some(text) => TranscriptOrigin::Direct(text),
            None => TranscriptOrigin::ViaAudio(self.transcribe_via_audio(reference).await?),
        };

        let summary = self.summarize_text(origin.text()).await?;
        Ok((origin, summary))
    }

    /// Returns `None` whenever the existing transcript cannot be used,
    /// including when it is blank.
    #[tracing::instrument(skip(self))]
    async fn fetch_existing_transcript(&self, video_id: &VideoId) -> Option<String> {
        let scratch = ScratchDir::create(&self.scratch_dir, &format!("{video_id}-captions"))
            .inspect_err(|e| tracing::warn!(error = ?e, "Failed to create caption directory"))
            .ok()?;

        match timeout(
            self.timeouts.transcript,
            self.transcript_source
                .fetch_transcript(video_id, scratch.path()),
        )
        .await
        {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                tracing::info!(chars = text.len(), "Using existing transcript");
                Some(text)
            }
            Ok(Ok(_)) => {
                tracing::info!("Existing transcript is empty, falling back to audio");
                None
            }
            Ok(Err(e)) => {
                tracing::info!(error = %format!("{e:#}"), "Transcript unavailable, falling back to audio");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout = ?self.timeouts.transcript,
                    "Transcript lookup timed out, falling back to audio"
                );
                None
            }
        }
    }

    /// Downloads audio into a fresh scratch directory owned by the artifact
    #[tracing::instrument(skip_all)]
    async fn download_audio(&self, reference: &VideoReference) -> Result<AudioArtifact, Error> {
        let scratch = ScratchDir::create(&self.scratch_dir, reference.video_id().as_str())
            .map_err(|e| {
                Error::AudioAcquisitionFailed(format!("Failed to create scratch directory: {e}"))
            })?;

        let file = timeout(
            self.timeouts.download,
            self.audio_handler.download(reference, scratch.path()),
        )
        .await
        .map_err(|_| {
            Error::AudioAcquisitionFailed(format!("timed out after {:?}", self.timeouts.download))
        })?
        .map_err(|e| Error::AudioAcquisitionFailed(format!("{e:#}")))
        .inspect_err(|e| tracing::error!(error = %e, "Audio download failed"))?;

        Ok(AudioArtifact::new(file, scratch))
    }

    #[tracing::instrument(skip_all)]
    async fn transcribe_via_audio(&self, reference: &VideoReference) -> Result<String, Error> {
        let artifact = self.download_audio(reference).await?;

        let audio_input = match self.chunking_config {
            Some(ChunkingConfig {
                chunk_duration_seconds,
            }) => AudioInput::Chunked {
                chunk_duration_seconds,
                chunks_dir_path: artifact.workdir().join("chunks"),
                file_path: artifact.file().to_path_buf(),
            },
            None => AudioInput::File(artifact.file().to_path_buf()),
        };

        let response = timeout(
            self.timeouts.transcription,
            self.transcriber.transcribe(audio_input),
        )
        .await
        .map_err(|_| {
            Error::TranscriptionFailed(format!(
                "timed out after {:?}",
                self.timeouts.transcription
            ))
        })?
        .map_err(|e| Error::TranscriptionFailed(e.to_string()))
        .inspect_err(|e| tracing::error!(error = %e, "Transcription failed"))?;

        // audio is no longer needed once we hold the text
        drop(artifact);

        let text = response.text.trim();
        if text.is_empty() {
            tracing::error!("Transcriber returned an empty transcript");
            return Err(Error::EmptyTranscript);
        }

        Ok(text.to_string())
    }

    #[tracing::instrument(skip_all, fields(chars = text.len()))]
    async fn summarize_text(&self, text: &str) -> Result<String, Error> {
        let response = timeout(self.timeouts.summarization, self.summarizer.summarize(text))
            .await
            .map_err(|_| {
                Error::SummarizationFailed(format!(
                    "timed out after {:?}",
                    self.timeouts.summarization
                ))
            })?
            .map_err(|e| Error::SummarizationFailed(e.to_string()))
            .inspect_err(|e| tracing::error!(error = %e, "Summarization failed"))?;

        Ok(response.summary)
    }
}
