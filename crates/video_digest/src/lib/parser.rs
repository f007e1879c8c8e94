//! # Yt Parser
//!
//! Resolution of caller supplied video references into canonical video
//! identifiers, and conversion of WebVTT caption files into plain transcript
//! text.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::{
    error::Error,
    types::{VideoId, VideoReference},
};

static YT_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:(?:www|m|music)\.)?(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#]*&)?v=|shorts/|embed/|live/|v/)|youtu\.be/)([0-9A-Za-z_-]+)(?:[?&#/].*)?$",
    )
    .unwrap()
});

static BARE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap());

static VTT_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Resolves `input` to exactly one video identifier.
///
/// Accepts watch, short, embed, live and `youtu.be` URLs (with or without
/// scheme) as well as a bare 11 character identifier.
///
/// # Returns
/// * `Ok(VideoReference)` holding both the original input and its identifier.
/// * `Err(Error::InvalidReference)` for anything else, including empty input.
pub fn parse_video_reference(input: &str) -> Result<VideoReference, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidReference("empty reference".into()));
    }

    if BARE_ID_RE.is_match(trimmed) {
        return Ok(VideoReference {
            original: trimmed.to_string(),
            video_id: VideoId(trimmed.to_string()),
            is_url: false,
        });
    }

    let video_id = YT_URL_RE
        .captures(trimmed)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::InvalidReference(trimmed.to_string()))?;

    Ok(VideoReference {
        original: trimmed.to_string(),
        video_id: VideoId(video_id),
        is_url: true,
    })
}

/// Converts a WebVTT document into running transcript text.
///
/// Drops the header block, cue identifiers, timing lines, `NOTE`/`STYLE`
/// blocks and inline markup. A cue identifier is only recognised as the
/// first line of a block directly followed by a timing line, so payload
/// lines such as `42` are kept. Auto-generated captions repeat the previous
/// line at the start of every cue; consecutive duplicates are collapsed.
pub fn vtt_to_text(vtt: &str) -> String {
    let mut in_skipped_block = false;
    let mut at_block_start = true;
    let mut lines = Vec::new();
    let mut raw_lines = vtt.lines().map(str::trim).peekable();

    while let Some(l) = raw_lines.next() {
        if l.is_empty() {
            in_skipped_block = false;
            at_block_start = true;
            continue;
        }
        let block_start = std::mem::replace(&mut at_block_start, false);
        if in_skipped_block {
            continue;
        }
        if l.starts_with("WEBVTT")
            || l.starts_with("Kind:")
            || l.starts_with("Language:")
            || l.starts_with("NOTE")
            || l.starts_with("STYLE")
            || l.starts_with("REGION")
        {
            in_skipped_block = !l.starts_with("Kind:") && !l.starts_with("Language:");
            continue;
        }
        if l.contains("-->") {
            continue;
        }
        // cue identifier
        if block_start && raw_lines.peek().is_some_and(|next| next.contains("-->")) {
            continue;
        }

        let cleaned = VTT_TAG_RE
            .replace_all(l, "")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&gt;", ">")
            .replace("&lt;", "<")
            .split_whitespace()
            .join(" ");
        if !cleaned.is_empty() {
            lines.push(cleaned);
        }
    }

    lines.into_iter().dedup().join(" ")
}
