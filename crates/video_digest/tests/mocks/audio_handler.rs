use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};
use video_digest::{types::VideoReference, yt::AudioHandler};

/// Records calls and writes a fake audio file into the scratch directory
#[derive(Clone)]
pub struct MockAudioHandler {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub dirs: Arc<Mutex<Vec<PathBuf>>>,
    pub fail_with: Option<String>,
    pub returned_path: Option<PathBuf>,
    pub delay: Option<Duration>,
}

impl Default for MockAudioHandler {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            dirs: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            returned_path: None,
            delay: None,
        }
    }
}

impl MockAudioHandler {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    /// Reports `path` as the downloaded file instead of the one it writes
    pub fn returning(path: &str) -> Self {
        Self {
            returned_path: Some(PathBuf::from(path)),
            ..Default::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }
}

impl AudioHandler for MockAudioHandler {
    async fn download(
        &self,
        reference: &VideoReference,
        audio_dl_path: &Path,
    ) -> anyhow::Result<PathBuf> {
        self.calls.lock().unwrap().push(reference.original().to_string());
        self.dirs.lock().unwrap().push(audio_dl_path.to_path_buf());

        // partial download left behind on failure too
        let file = audio_dl_path.join(format!("{}.mp3", reference.video_id()));
        std::fs::write(&file, b"ID3 partial audio")?;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.returned_path.clone().unwrap_or(file))
    }
}
