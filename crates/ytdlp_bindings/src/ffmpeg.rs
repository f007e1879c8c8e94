use std::{ffi::OsString, future::Future, path::Path};

use crate::{process, Error, YtDlp};

/// Audio post-processing backed by `ffmpeg`
pub trait AudioProcessor {
    /// Splits `input` into `chunk_duration_seconds` long pieces named after
    /// `output_pattern` (an ffmpeg segment pattern such as `chunk_%03d.mp3`).
    fn split_audio_to_chunks(
        &self,
        input: &Path,
        chunk_duration_seconds: u16,
        output_pattern: &Path,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

fn segment_args(input: &Path, chunk_duration_seconds: u16, output_pattern: &Path) -> Vec<OsString> {
    vec![
        "-hide_banner".into(),
        "-loglevel".into(),
        "error".into(),
        "-y".into(),
        "-i".into(),
        input.into(),
        "-f".into(),
        "segment".into(),
        "-segment_time".into(),
        chunk_duration_seconds.to_string().into(),
        "-c".into(),
        "copy".into(),
        output_pattern.into(),
    ]
}

impl AudioProcessor for YtDlp {
    #[tracing::instrument(skip(self))]
    async fn split_audio_to_chunks(
        &self,
        input: &Path,
        chunk_duration_seconds: u16,
        output_pattern: &Path,
    ) -> Result<(), Error> {
        process::run(
            &self.ffmpeg,
            &segment_args(input, chunk_duration_seconds, output_pattern),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_args() {
        let args = segment_args(Path::new("in.mp3"), 600, Path::new("out_%03d.mp3"))
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>();

        assert!(args.windows(2).any(|w| w == ["-segment_time", "600"]));
        assert!(args.windows(2).any(|w| w == ["-i", "in.mp3"]));
        assert_eq!(args.last().map(String::as_str), Some("out_%03d.mp3"));
    }
}
