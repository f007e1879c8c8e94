use std::{
    ops::Deref,
    path::{Path, PathBuf},
};

use ytdlp_bindings::YtDlp;

use crate::{types::VideoReference, yt::AudioHandler};

/// yt-dlp backed implementation of every `yt` collaborator
#[derive(Debug, Clone)]
pub struct YtDlpWrapper {
    yt_dlp: YtDlp,
    pub(crate) caption_langs: Vec<String>,
}

impl YtDlpWrapper {
    const AUDIO_FORMAT: &'static str = "mp3";

    pub fn new(yt_dlp: YtDlp) -> Self {
        Self {
            yt_dlp,
            caption_langs: vec!["en".into(), "en-US".into(), "en-GB".into()],
        }
    }

    pub fn with_caption_langs(mut self, langs: Vec<String>) -> Self {
        if !langs.is_empty() {
            self.caption_langs = langs;
        }
        self
    }
}

impl Deref for YtDlpWrapper {
    type Target = YtDlp;

    fn deref(&self) -> &Self::Target {
        &self.yt_dlp
    }
}

impl AudioHandler for YtDlpWrapper {
    async fn download(
        &self,
        reference: &VideoReference,
        audio_dl_path: &Path,
    ) -> anyhow::Result<PathBuf> {
        let url = reference.playable_url();

        let base_name = reference.video_id().as_str();
        let audio_output_template = audio_dl_path.join(format!("{base_name}.%(ext)s"));
        let audio_path = audio_dl_path.join(format!("{base_name}.{}", Self::AUDIO_FORMAT));

        if let Err(e) = self
            .download_audio(&url, Self::AUDIO_FORMAT, &audio_output_template)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to download audio"))
        {
            anyhow::bail!("Failed to download audio: {e}");
        }

        if !audio_path.exists() {
            anyhow::bail!(
                "yt-dlp did not produce expected file: {}",
                audio_path.display()
            );
        }

        tracing::debug!(path = %audio_path.display(), "Audio downloaded");
        Ok(audio_path)
    }
}
