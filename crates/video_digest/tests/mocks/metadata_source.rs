use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use video_digest::{
    types::{VideoDetails, VideoReference},
    yt::MetadataSource,
};

#[derive(Clone)]
pub struct MockMetadataSource {
    pub details: VideoDetails,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
    pub delay: Option<Duration>,
}

impl Default for MockMetadataSource {
    fn default() -> Self {
        Self::new(VideoDetails {
            title: Some("Intro to Calculus".into()),
            thumbnail_url: Some("https://i.ytimg.com/vi/abc123/hq720.jpg".into()),
            duration_label: Some("12:34".into()),
            channel: Some("Math Channel".into()),
            view_count: Some(1_024),
        })
    }
}

impl MockMetadataSource {
    pub fn new(details: VideoDetails) -> Self {
        Self {
            details,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            delay: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
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

impl MetadataSource for MockMetadataSource {
    async fn fetch_metadata(&self, reference: &VideoReference) -> anyhow::Result<VideoDetails> {
        self.calls.lock().unwrap().push(reference.original().to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.details.clone())
    }
}
