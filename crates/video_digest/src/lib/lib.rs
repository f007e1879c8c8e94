mod error;
mod llm;
pub mod parser;
mod processor;
pub mod scratch;
pub mod server;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::openai;
pub use llm::{
    condense,
    summarizer::{Summarizer, SummaryResponse},
    transcriber::{AudioInput, TranscribeResponse, Transcriber},
};
pub use processor::{
    builder::{StageTimeouts, VideoSummarizerBuilder},
    VideoSummarizer,
};
