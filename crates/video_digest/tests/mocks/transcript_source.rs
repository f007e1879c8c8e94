use std::{
    path::Path,
    sync::{Arc, Mutex},
    time::Duration,
};
use video_digest::{types::VideoId, yt::TranscriptSource};

#[derive(Clone)]
pub struct MockTranscriptSource {
    pub transcript: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub delay: Option<Duration>,
}

impl MockTranscriptSource {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: Some(transcript.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    pub fn slow(transcript: &str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(transcript)
        }
    }

    pub fn unavailable() -> Self {
        Self {
            transcript: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }
}

impl TranscriptSource for MockTranscriptSource {
    async fn fetch_transcript(&self, video_id: &VideoId, workdir: &Path) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(video_id.to_string());
        std::fs::write(workdir.join(format!("{video_id}.en.vtt")), "WEBVTT\n")?;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.transcript
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Transcripts are disabled for this video"))
    }
}
