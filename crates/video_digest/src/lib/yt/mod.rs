pub mod audio_handler;
pub mod captions;
pub mod metadata;

use std::{
    future::Future,
    path::{Path, PathBuf},
};

use crate::types::{VideoDetails, VideoId, VideoReference};

/// Downloads the audio track of a video
pub trait AudioHandler {
    /// Downloads audio for `reference` into `audio_dl_path` and returns the
    /// path of the produced file. Partial output is left in `audio_dl_path`,
    /// whose lifetime is owned by the caller.
    fn download(
        &self,
        reference: &VideoReference,
        audio_dl_path: &Path,
    ) -> impl Future<Output = anyhow::Result<PathBuf>> + Send;
}

/// Looks up an existing (uploaded or auto-generated) transcript
pub trait TranscriptSource {
    /// Returns the transcript text of `video_id`.
    ///
    /// Any error means "no transcript": callers fall back to audio
    /// transcription and never surface it.
    fn fetch_transcript(
        &self,
        video_id: &VideoId,
        workdir: &Path,
    ) -> impl Future<Output = anyhow::Result<String>> + Send;
}

/// Looks up display metadata of a video
pub trait MetadataSource {
    fn fetch_metadata(
        &self,
        reference: &VideoReference,
    ) -> impl Future<Output = anyhow::Result<VideoDetails>> + Send;
}
