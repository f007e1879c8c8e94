use std::{
    fmt::{Debug, Display},
    future::Future,
};

use serde::Deserialize;

pub trait Summarizer {
    const CONTEXT_WINDOW_LIMIT: usize = 128_000 - 18_000;
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug + Display;

    /// Condenses `content`, which callers guarantee is not blank
    fn summarize(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
