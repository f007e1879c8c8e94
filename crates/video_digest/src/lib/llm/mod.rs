pub mod condense;
pub mod openai;
pub mod summarizer;
pub mod transcriber;
