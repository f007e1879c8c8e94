use crate::{
    types::{VideoDetails, VideoReference},
    yt::{audio_handler::YtDlpWrapper, MetadataSource},
};

impl MetadataSource for YtDlpWrapper {
    async fn fetch_metadata(&self, reference: &VideoReference) -> anyhow::Result<VideoDetails> {
        let info = self.video_info(&reference.playable_url()).await?;

        Ok(VideoDetails {
            channel: info.channel_name().map(str::to_string),
            title: info.title,
            thumbnail_url: info.thumbnail,
            duration_label: info.duration_string,
            view_count: info.view_count,
        })
    }
}
