//! HTTP boundary of the summarizer.
//!
//! `POST /api/summarize-youtube`, `GET /api/video-info/{video_id}` and
//! `GET /health`. Invalid references map to `400`, every other failure to
//! `500`, both with a `{"detail": ...}` body.

use std::{future::Future, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    types::{SourceKind, SummarizationResult, VideoId, VideoMetadata},
    yt::{AudioHandler, MetadataSource, TranscriptSource},
    Error, Summarizer, Transcriber, VideoSummarizer,
};

/// What the routes need from the pipeline
pub trait SummaryService: Send + Sync + 'static {
    fn summarize(
        &self,
        reference: &str,
    ) -> impl Future<Output = Result<SummarizationResult, Error>> + Send;

    fn video_info(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<(VideoId, VideoMetadata), Error>> + Send;
}

impl<T, M, A, X, S> SummaryService for VideoSummarizer<T, M, A, X, S>
where
    T: TranscriptSource + Send + Sync + 'static,
    M: MetadataSource + Send + Sync + 'static,
    A: AudioHandler + Send + Sync + 'static,
    X: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    async fn summarize(&self, reference: &str) -> Result<SummarizationResult, Error> {
        VideoSummarizer::summarize(self, reference).await
    }

    async fn video_info(&self, video_id: &str) -> Result<(VideoId, VideoMetadata), Error> {
        VideoSummarizer::video_info(self, video_id).await
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct VideoSummaryResponse {
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
    pub summary: String,
    pub source: SourceKind,
    pub duration: String,
}

impl From<SummarizationResult> for VideoSummaryResponse {
    fn from(result: SummarizationResult) -> Self {
        Self {
            video_id: result.video_id.to_string(),
            title: result.metadata.title,
            thumbnail: result.metadata.thumbnail_url,
            summary: result.summary,
            source: result.source_kind,
            duration: result.metadata.duration_label,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct VideoInfoResponse {
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
    pub duration: String,
    pub channel: String,
    pub view_count: u64,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let status = if error.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        Self {
            status,
            detail: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.detail });
        (self.status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub fn router<S: SummaryService>(service: Arc<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/api/summarize-youtube", post(summarize_youtube::<S>))
        .route("/api/video-info/{video_id}", get(video_info::<S>))
        .route("/health", get(health))
        .layer(cors)
        .with_state(service)
}

pub async fn summarize_youtube<S: SummaryService>(
    State(service): State<Arc<S>>,
    Json(request): Json<VideoRequest>,
) -> ApiResult<Json<VideoSummaryResponse>> {
    let result = service.summarize(&request.url).await?;
    Ok(Json(result.into()))
}

pub async fn video_info<S: SummaryService>(
    State(service): State<Arc<S>>,
    Path(video_id): Path<String>,
) -> ApiResult<Json<VideoInfoResponse>> {
    let (video_id, metadata) = service.video_info(&video_id).await?;

    Ok(Json(VideoInfoResponse {
        video_id: video_id.to_string(),
        title: metadata.title,
        thumbnail: metadata.thumbnail_url,
        duration: metadata.duration_label,
        channel: metadata.channel,
        view_count: metadata.view_count,
    }))
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let invalid = ApiError::from(Error::InvalidReference("nope".into()));
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.detail, "Invalid YouTube reference: nope");

        for error in [
            Error::AudioAcquisitionFailed("403".into()),
            Error::TranscriptionFailed("timeout".into()),
            Error::EmptyTranscript,
            Error::SummarizationFailed("rate limit".into()),
            Error::MetadataUnavailable("private video".into()),
        ] {
            assert_eq!(
                ApiError::from(error).status,
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_summary_response_shape() {
        let response = VideoSummaryResponse {
            video_id: "abc123".into(),
            title: "YouTube Video".into(),
            thumbnail: "https://img.youtube.com/vi/abc123/maxresdefault.jpg".into(),
            summary: "Short".into(),
            source: SourceKind::Transcript,
            duration: "Unknown".into(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["source"], "transcript");
        assert_eq!(json["video_id"], "abc123");
        assert_eq!(json["duration"], "Unknown");
    }
}
