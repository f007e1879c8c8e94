use std::{path::PathBuf, time::Duration};

use crate::{
    yt::{AudioHandler, MetadataSource, TranscriptSource},
    Summarizer, Transcriber, VideoSummarizer,
};

#[derive(Debug, Clone, Copy)]
pub struct ChunkingConfig {
    pub chunk_duration_seconds: u16,
}

/// Upper bound for each pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTimeouts {
    pub metadata: Duration,
    pub transcript: Duration,
    pub download: Duration,
    pub transcription: Duration,
    pub summarization: Duration,
}

impl Default for StageTimeouts {
    fn default() -> Self {
        Self {
            metadata: Duration::from_secs(10),
            transcript: Duration::from_secs(60),
            download: Duration::from_secs(15 * 60),
            transcription: Duration::from_secs(30 * 60),
            summarization: Duration::from_secs(5 * 60),
        }
    }
}

pub struct VideoSummarizerBuilder<T = (), M = (), A = (), X = (), S = ()> {
    scratch_dir: PathBuf,
    transcript_source: T,
    metadata_source: M,
    audio_handler: A,
    transcriber: X,
    summarizer: S,
    timeouts: StageTimeouts,
    chunking_config: Option<ChunkingConfig>,
}

impl VideoSummarizerBuilder {
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            scratch_dir: scratch_dir.into(),
            transcript_source: (),
            metadata_source: (),
            audio_handler: (),
            transcriber: (),
            summarizer: (),
            timeouts: StageTimeouts::default(),
            chunking_config: None,
        }
    }
}

impl<T, M, A, X, S> VideoSummarizerBuilder<T, M, A, X, S> {
    pub fn transcript_source<T2: TranscriptSource + Send + Sync + 'static>(
        self,
        transcript_source: T2,
    ) -> VideoSummarizerBuilder<T2, M, A, X, S> {
        VideoSummarizerBuilder {
            scratch_dir: self.scratch_dir,
            transcript_source,
            metadata_source: self.metadata_source,
            audio_handler: self.audio_handler,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            timeouts: self.timeouts,
            chunking_config: self.chunking_config,
        }
    }

    pub fn metadata_source<M2: MetadataSource + Send + Sync + 'static>(
        self,
        metadata_source: M2,
    ) -> VideoSummarizerBuilder<T, M2, A, X, S> {
        VideoSummarizerBuilder {
            scratch_dir: self.scratch_dir,
            transcript_source: self.transcript_source,
            metadata_source,
            audio_handler: self.audio_handler,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            timeouts: self.timeouts,
            chunking_config: self.chunking_config,
        }
    }

    pub fn audio_handler<A2: AudioHandler + Send + Sync + 'static>(
        self,
        audio_handler: A2,
    ) -> VideoSummarizerBuilder<T, M, A2, X, S> {
        VideoSummarizerBuilder {
            scratch_dir: self.scratch_dir,
            transcript_source: self.transcript_source,
            metadata_source: self.metadata_source,
            audio_handler,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            timeouts: self.timeouts,
            chunking_config: self.chunking_config,
        }
    }

    pub fn transcriber<X2: Transcriber + Send + Sync + 'static>(
        self,
        transcriber: X2,
    ) -> VideoSummarizerBuilder<T, M, A, X2, S> {
        VideoSummarizerBuilder {
            scratch_dir: self.scratch_dir,
            transcript_source: self.transcript_source,
            metadata_source: self.metadata_source,
            audio_handler: self.audio_handler,
            transcriber,
            summarizer: self.summarizer,
            timeouts: self.timeouts,
            chunking_config: self.chunking_config,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> VideoSummarizerBuilder<T, M, A, X, S2> {
        VideoSummarizerBuilder {
            scratch_dir: self.scratch_dir,
            transcript_source: self.transcript_source,
            metadata_source: self.metadata_source,
            audio_handler: self.audio_handler,
            transcriber: self.transcriber,
            summarizer,
            timeouts: self.timeouts,
            chunking_config: self.chunking_config,
        }
    }

    pub fn timeouts(mut self, timeouts: StageTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn with_chunking(mut self, chunk_duration_seconds: u16) -> Self {
        self.chunking_config = Some(ChunkingConfig {
            chunk_duration_seconds,
        });
        self
    }
}

impl<T, M, A, X, S> VideoSummarizerBuilder<T, M, A, X, S>
where
    T: TranscriptSource + Send + Sync + 'static,
    M: MetadataSource + Send + Sync + 'static,
    A: AudioHandler + Send + Sync + 'static,
    X: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> VideoSummarizer<T, M, A, X, S> {
        VideoSummarizer {
            scratch_dir: self.scratch_dir,
            transcript_source: self.transcript_source,
            metadata_source: self.metadata_source,
            audio_handler: self.audio_handler,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            timeouts: self.timeouts,
            chunking_config: self.chunking_config,
        }
    }
}
