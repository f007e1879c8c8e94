use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "YouTube Video";
pub const DEFAULT_DURATION: &str = "Unknown";
pub const DEFAULT_CHANNEL: &str = "Unknown Channel";

/// Canonical YouTube video identifier, e.g. `dQw4w9WgXcQ`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(pub(crate) String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    pub fn default_thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller supplied reference together with the identifier it resolved to.
///
/// Built through [`crate::parser::parse_video_reference`]; holding one means
/// resolution already succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    pub(crate) original: String,
    pub(crate) video_id: VideoId,
    pub(crate) is_url: bool,
}

impl VideoReference {
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    /// URL handed to downloaders: the caller's URL when one was given,
    /// otherwise the canonical watch URL.
    pub fn playable_url(&self) -> String {
        if self.is_url {
            self.original.clone()
        } else {
            self.video_id.watch_url()
        }
    }
}

/// Raw metadata as reported by a metadata source. Missing keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDetails {
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_label: Option<String>,
    pub channel: Option<String>,
    pub view_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoMetadata {
    pub title: String,
    pub thumbnail_url: String,
    pub duration_label: String,
    pub channel: String,
    pub view_count: u64,
}

impl VideoMetadata {
    /// Placeholder metadata used when the lookup fails
    pub fn placeholder(video_id: &VideoId) -> Self {
        Self::from_details(video_id, VideoDetails::default())
    }

    /// Fills every missing or blank field with its placeholder value
    pub fn from_details(video_id: &VideoId, details: VideoDetails) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            title: present(details.title).unwrap_or_else(|| DEFAULT_TITLE.into()),
            thumbnail_url: present(details.thumbnail_url)
                .unwrap_or_else(|| video_id.default_thumbnail_url()),
            duration_label: present(details.duration_label)
                .unwrap_or_else(|| DEFAULT_DURATION.into()),
            channel: present(details.channel).unwrap_or_else(|| DEFAULT_CHANNEL.into()),
            view_count: details.view_count.unwrap_or_default(),
        }
    }
}

/// Which acquisition path produced the summarized transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Transcript,
    Audio,
}

/// Transcript text tagged with the path it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptOrigin {
    Direct(String),
    ViaAudio(String),
}

impl TranscriptOrigin {
    pub fn text(&self) -> &str {
        match self {
            TranscriptOrigin::Direct(text) | TranscriptOrigin::ViaAudio(text) => text,
        }
    }

    pub fn source_kind(&self) -> SourceKind {
        match self {
            TranscriptOrigin::Direct(_) => SourceKind::Transcript,
            TranscriptOrigin::ViaAudio(_) => SourceKind::Audio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationResult {
    pub video_id: VideoId,
    pub metadata: VideoMetadata,
    pub summary: String,
    pub source_kind: SourceKind,
}

impl SummarizationResult {
    pub fn duration_label(&self) -> &str {
        &self.metadata.duration_label
    }
}
