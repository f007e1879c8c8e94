//! # ytdlp_bindings
//!
//! Thin async bindings over the `yt-dlp` and `ffmpeg` command line tools.
//!
//! Every child process is spawned with `kill_on_drop`, so dropping a pending
//! call (timeout, cancelled request) terminates the underlying tool instead of
//! leaving it running in the background.

mod error;
mod ffmpeg;
mod info;
mod process;
mod ytdlp;

pub use error::Error;
pub use ffmpeg::AudioProcessor;
pub use info::VideoInfo;
pub use ytdlp::YtDlp;
