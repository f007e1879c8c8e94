use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    parser::vtt_to_text,
    types::VideoId,
    yt::{audio_handler::YtDlpWrapper, TranscriptSource},
};

impl YtDlpWrapper {
    /// Picks the caption file of the most preferred language, falling back to
    /// whatever VTT file yt-dlp wrote.
    fn pick_caption_file(&self, files: &[PathBuf]) -> Option<PathBuf> {
        self.caption_langs
            .iter()
            .find_map(|lang| {
                let suffix = format!(".{lang}.vtt");
                files
                    .iter()
                    .find(|f| {
                        f.file_name()
                            .and_then(|n| n.to_str())
                            .is_some_and(|n| n.ends_with(&suffix))
                    })
                    .cloned()
            })
            .or_else(|| files.first().cloned())
    }
}

impl TranscriptSource for YtDlpWrapper {
    async fn fetch_transcript(&self, video_id: &VideoId, workdir: &Path) -> anyhow::Result<String> {
        let output_template = workdir.join(video_id.as_str());

        self.download_subtitles(&video_id.watch_url(), &self.caption_langs, &output_template)
            .await
            .context("yt-dlp caption download failed")?;

        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(workdir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("vtt") {
                files.push(path);
            }
        }
        files.sort();

        let caption_file = self
            .pick_caption_file(&files)
            .context("No captions available for video")?;
        tracing::debug!(path = %caption_file.display(), "Using caption file");

        let vtt = tokio::fs::read_to_string(&caption_file).await?;
        Ok(vtt_to_text(&vtt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytdlp_bindings::YtDlp;

    #[test]
    fn test_pick_caption_file_prefers_language_order() {
        let wrapper = YtDlpWrapper::new(YtDlp::new())
            .with_caption_langs(vec!["en".into(), "en-US".into()]);
        let files = vec![
            PathBuf::from("/tmp/x/abc.de.vtt"),
            PathBuf::from("/tmp/x/abc.en-US.vtt"),
            PathBuf::from("/tmp/x/abc.en.vtt"),
        ];

        assert_eq!(
            wrapper.pick_caption_file(&files),
            Some(PathBuf::from("/tmp/x/abc.en.vtt"))
        );
    }

    #[test]
    fn test_pick_caption_file_falls_back_to_first() {
        let wrapper = YtDlpWrapper::new(YtDlp::new());
        let files = vec![PathBuf::from("/tmp/x/abc.fr.vtt")];

        assert_eq!(
            wrapper.pick_caption_file(&files),
            Some(PathBuf::from("/tmp/x/abc.fr.vtt"))
        );
        assert_eq!(wrapper.pick_caption_file(&[]), None);
    }

    #[test]
    fn test_empty_langs_keep_defaults() {
        let wrapper = YtDlpWrapper::new(YtDlp::new()).with_caption_langs(vec![]);
        assert_eq!(wrapper.caption_langs, vec!["en", "en-US", "en-GB"]);
    }
}
