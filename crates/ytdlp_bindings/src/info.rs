use serde::Deserialize;

/// Subset of the `yt-dlp --dump-json` document.
///
/// Every field is optional: extractors omit keys freely depending on the
/// site, the video state and the client that served the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    pub duration_string: Option<String>,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    pub view_count: Option<u64>,
}

impl VideoInfo {
    /// Channel name, preferring `channel` over the older `uploader` key
    pub fn channel_name(&self) -> Option<&str> {
        self.channel.as_deref().or(self.uploader.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_document() {
        let json = r#"{
            "id": "dQw4w9WgXcQ",
            "title": "Lecture 1",
            "duration": 212.0,
            "duration_string": "3:32",
            "uploader": "Some Uploader",
            "formats": [{"format_id": "251"}]
        }"#;

        let info: VideoInfo = serde_json::from_str(json).expect("valid info json");
        assert_eq!(info.title.as_deref(), Some("Lecture 1"));
        assert_eq!(info.duration_string.as_deref(), Some("3:32"));
        assert!(info.thumbnail.is_none());
        assert!(info.view_count.is_none());
        assert_eq!(info.channel_name(), Some("Some Uploader"));
    }

    #[test]
    fn test_channel_preferred_over_uploader() {
        let info = VideoInfo {
            uploader: Some("uploader".into()),
            channel: Some("channel".into()),
            ..Default::default()
        };
        assert_eq!(info.channel_name(), Some("channel"));
    }
}
