#![allow(dead_code)]

pub mod audio_handler;
pub mod metadata_source;
pub mod summarizer;
pub mod transcriber;
pub mod transcript_source;
