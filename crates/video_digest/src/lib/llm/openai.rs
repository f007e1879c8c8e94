use std::path::{Path, PathBuf};

use reqwest::Client;
use serde::Deserialize;
use ytdlp_bindings::AudioProcessor;

use crate::{
    llm::condense::{condense_transcript, truncate_to_token_limit},
    AudioInput, Summarizer, SummaryResponse, TranscribeResponse, Transcriber,
};

#[derive(Debug, Clone)]
pub struct OpenAIClient<F: AudioProcessor> {
    client: Client,
    api_key: String,
    ffmpeg: F,
    base_url: String,
    max_upload_bytes: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),
    #[error("Audio file is missing or empty: {0}")]
    EmptyAudio(PathBuf),
}

impl<F: AudioProcessor> OpenAIClient<F> {
    const SYSTEM_PROMPT: &'static str = include_str!("./prompts/system_0.txt");

    /// Whisper rejects uploads above 25 MB
    pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

    pub fn new(api_key: impl Into<String>, ffmpeg: F) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
            ffmpeg,
            max_upload_bytes: Self::MAX_UPLOAD_BYTES,
        }
    }

    /// Files up to `bytes` are uploaded whole even when chunking is requested
    pub fn with_max_upload_bytes(mut self, bytes: u64) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn send_transcribe_request(
        &self,
        file: impl Into<PathBuf>,
        model_name: impl Into<String>,
        prompt: Option<String>,
    ) -> Result<TranscribeResponse, OpenAIError> {
        let audio_path = file.into();
        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3")
            .to_string();

        let bytes = tokio::fs::read(&audio_path).await?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("audio/mpeg")?;

        let mut form = reqwest::multipart::Form::new()
            .text("model", model_name.into())
            .text("response_format", "verbose_json")
            .text("timestamp_granularities[]", "segment")
            .part("file", part);

        if let Some(prompt) = prompt {
            form = form.text("prompt", prompt);
        }

        let resp = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        let response = resp.json::<TranscribeResponse>().await?;

        Ok(response)
    }

    pub async fn send_completion_request(
        &self,
        model_name: impl Into<String>,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": model_name.into(),
            "messages": [
                {
                    "role": "system",
                    "content": Self::SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

/// Returns the size of the audio file, rejecting missing and empty files
async fn ensure_audio_present(path: &Path) -> Result<u64, OpenAIError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(meta.len()),
        _ => Err(OpenAIError::EmptyAudio(path.to_path_buf())),
    }
}

impl<F: AudioProcessor + Send + Sync> Transcriber for OpenAIClient<F> {
    const TRANSCRIBER_MODEL: &'static str = "whisper-1";
    type Error = OpenAIError;

    async fn transcribe(&self, input: AudioInput) -> Result<TranscribeResponse, Self::Error> {
        let size = ensure_audio_present(input.file_path()).await?;

        let (file_path, chunks_dir_path, chunk_duration_seconds) = match input {
            AudioInput::Chunked {
                file_path,
                chunks_dir_path,
                chunk_duration_seconds,
            } if size > self.max_upload_bytes => (file_path, chunks_dir_path, chunk_duration_seconds),
            AudioInput::File(file_path) | AudioInput::Chunked { file_path, .. } => {
                return self
                    .send_transcribe_request(file_path, Self::TRANSCRIBER_MODEL, None)
                    .await
                    .inspect_err(|e| tracing::error!(error = %e, "Failed to transcribe audio"));
            }
        };

        std::fs::create_dir_all(&chunks_dir_path)?;
        let base_name = file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| OpenAIError::Ffmpeg("Invalid file path".into()))?;

        tracing::info!(size, "Splitting audio to chunks");
        self.ffmpeg
            .split_audio_to_chunks(
                &file_path,
                chunk_duration_seconds,
                &chunks_dir_path.join(format!("{base_name}_%03d.mp3")),
            )
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to split audio to chunks"))
            .map_err(|e| OpenAIError::Ffmpeg(e.to_string()))?;

        // collect and sort chunk files
        let mut chunks: Vec<PathBuf> = std::fs::read_dir(&chunks_dir_path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .collect();
        chunks.sort();

        let mut all_segments = Vec::new();
        let mut all_text = String::new();
        let mut time_offset = 0.0_f64;
        let mut duration = 0.0_f64;
        let mut previous_text = None;

        for chunk in &chunks {
            let response = self
                .send_transcribe_request(chunk, Self::TRANSCRIBER_MODEL, previous_text)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to transcribe audio"))?;

            duration += response.duration;

            if let Some(segments) = response.segments {
                for mut seg in segments {
                    seg.start += time_offset;
                    seg.end += time_offset;
                    all_segments.push(seg);
                }
            }

            all_text.push_str(&response.text);
            all_text.push(' ');
            previous_text = Some(response.text);
            time_offset += chunk_duration_seconds as f64;
        }

        Ok(TranscribeResponse {
            duration,
            text: all_text.trim().to_string(),
            segments: Some(all_segments),
        })
    }
}

impl<F: AudioProcessor + Send + Sync> Summarizer for OpenAIClient<F> {
    const SUMMARIZER_MODEL: &'static str = "gpt-4o-mini";
    type Error = OpenAIError;

    async fn summarize(&self, content: &str) -> Result<SummaryResponse, Self::Error> {
        let condensed = condense_transcript(content);
        let prompt = truncate_to_token_limit(&condensed, Self::CONTEXT_WINDOW_LIMIT);

        let response = self
            .send_completion_request(Self::SUMMARIZER_MODEL, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| OpenAIError::Api {
                status: 0,
                message: "No content in response".into(),
            })?
            .to_string();

        Ok(SummaryResponse { summary })
    }
}
