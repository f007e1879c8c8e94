use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{process, Error, VideoInfo};

/// Handle to the `yt-dlp` binary (and the `ffmpeg` binary it post-processes with)
#[derive(Debug, Clone)]
pub struct YtDlp {
    pub(crate) binary: PathBuf,
    pub(crate) ffmpeg: PathBuf,
    cookies_path: Option<PathBuf>,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("yt-dlp"),
            ffmpeg: PathBuf::from("ffmpeg"),
            cookies_path: None,
        }
    }
}

impl YtDlp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle that passes `--cookies` to every invocation.
    ///
    /// Fails if the cookies file does not exist.
    pub fn new_with_cookies(cookies_path: Option<PathBuf>) -> Result<Self, Error> {
        if let Some(path) = &cookies_path {
            if !path.exists() {
                return Err(Error::MissingCookies(path.clone()));
            }
        }

        Ok(Self {
            cookies_path,
            ..Self::default()
        })
    }

    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_ffmpeg(mut self, ffmpeg: impl Into<PathBuf>) -> Self {
        self.ffmpeg = ffmpeg.into();
        self
    }

    fn base_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--no-warnings".into(), "--no-playlist".into()];
        if let Some(cookies) = &self.cookies_path {
            args.push("--cookies".into());
            args.push(cookies.into());
        }
        args
    }

    fn audio_args(&self, url: &str, format: &str, output_template: &Path) -> Vec<OsString> {
        let mut args = self.base_args();
        args.extend(
            [
                "--quiet",
                "--format",
                "bestaudio/best",
                "--extract-audio",
                "--audio-format",
                format,
                "--audio-quality",
                "192K",
                "--ffmpeg-location",
            ]
            .map(OsString::from),
        );
        args.push(self.ffmpeg.clone().into_os_string());
        args.push("--output".into());
        args.push(output_template.into());
        args.push(url.into());
        args
    }

    fn subtitle_args(&self, url: &str, langs: &[String], output_template: &Path) -> Vec<OsString> {
        let langs = langs.join(",");
        let mut args = self.base_args();
        args.extend(
            [
                "--quiet",
                "--skip-download",
                "--write-subs",
                "--write-auto-subs",
                "--sub-langs",
                langs.as_str(),
                "--sub-format",
                "vtt",
                "--output",
            ]
            .map(OsString::from),
        );
        args.push(output_template.into());
        args.push(url.into());
        args
    }

    fn info_args(&self, url: &str) -> Vec<OsString> {
        let mut args = self.base_args();
        args.extend(["--skip-download", "--dump-json", url].map(OsString::from));
        args
    }

    /// Downloads the best audio stream of `url` and converts it to `format`.
    ///
    /// `output_template` is a yt-dlp output template, e.g. `/tmp/x/%(id)s.%(ext)s`.
    #[tracing::instrument(skip(self))]
    pub async fn download_audio(
        &self,
        url: &str,
        format: &str,
        output_template: &Path,
    ) -> Result<(), Error> {
        process::run(&self.binary, &self.audio_args(url, format, output_template)).await?;
        Ok(())
    }

    /// Writes uploaded and auto-generated VTT subtitles for `langs` next to
    /// `output_template`. A video without captions is not an error: yt-dlp
    /// simply writes nothing.
    #[tracing::instrument(skip(self))]
    pub async fn download_subtitles(
        &self,
        url: &str,
        langs: &[String],
        output_template: &Path,
    ) -> Result<(), Error> {
        process::run(&self.binary, &self.subtitle_args(url, langs, output_template)).await?;
        Ok(())
    }

    /// Fetches the metadata document of `url` without downloading media
    #[tracing::instrument(skip(self))]
    pub async fn video_info(&self, url: &str) -> Result<VideoInfo, Error> {
        let stdout = process::run(&self.binary, &self.info_args(url)).await?;
        Ok(serde_json::from_slice(&stdout)?)
    }
}
