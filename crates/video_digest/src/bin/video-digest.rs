use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use video_digest::{
    openai::OpenAIClient,
    server::router,
    tracing::init_tracing_subscriber,
    yt::audio_handler::YtDlpWrapper,
    StageTimeouts, VideoSummarizerBuilder,
};
use ytdlp_bindings::YtDlp;

#[derive(Parser)]
#[command(name = "video-digest", about = "YouTube video summarization service")]
struct Cli {
    /// Address the HTTP server binds to
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    listen_addr: SocketAddr,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// OpenAI compatible API base URL
    #[arg(long, env = "OPENAI_BASE_URL")]
    openai_base_url: Option<String>,

    /// yt-dlp executable
    #[arg(long, env = "YTDLP_BIN", default_value = "yt-dlp")]
    ytdlp_bin: PathBuf,

    /// ffmpeg executable, used by yt-dlp and for audio chunking
    #[arg(long, env = "FFMPEG_BIN", default_value = "ffmpeg")]
    ffmpeg_bin: PathBuf,

    /// Path to yt-dlp cookies file
    #[arg(long, env = "YTDLP_COOKIES_PATH")]
    cookies_path: Option<PathBuf>,

    /// Scratch directory for transient caption and audio files
    #[arg(long, env = "SCRATCH_DIR", default_value = "/var/tmp/video-digest")]
    scratch_dir: PathBuf,

    /// Preferred caption languages, most preferred first
    #[arg(
        long,
        env = "CAPTION_LANGS",
        value_delimiter = ',',
        default_value = "en,en-US,en-GB"
    )]
    caption_langs: Vec<String>,

    /// Audio chunk duration in seconds
    #[arg(long, env = "AUDIO_CHUNK_SECONDS", default_value = "900")]
    chunk_duration: u16,

    /// Metadata lookup timeout in seconds
    #[arg(long, default_value = "10")]
    metadata_timeout: u64,

    /// Existing transcript lookup timeout in seconds
    #[arg(long, default_value = "60")]
    transcript_timeout: u64,

    /// Audio download timeout in seconds
    #[arg(long, default_value = "900")]
    download_timeout: u64,

    /// Audio transcription timeout in seconds
    #[arg(long, default_value = "1800")]
    transcription_timeout: u64,

    /// Summarization timeout in seconds
    #[arg(long, default_value = "300")]
    summarization_timeout: u64,
}

impl Cli {
    fn timeouts(&self) -> StageTimeouts {
        StageTimeouts {
            metadata: Duration::from_secs(self.metadata_timeout),
            transcript: Duration::from_secs(self.transcript_timeout),
            download: Duration::from_secs(self.download_timeout),
            transcription: Duration::from_secs(self.transcription_timeout),
            summarization: Duration::from_secs(self.summarization_timeout),
        }
    }
}

fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "Failed to install Ctrl+C handler");
            return;
        }
        tracing::info!("Shutdown signal received");
        trigger.cancel();
    });

    token
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    std::fs::create_dir_all(&cli.scratch_dir)
        .with_context(|| format!("Failed to create {}", cli.scratch_dir.display()))?;

    let yt_dlp = YtDlp::new_with_cookies(cli.cookies_path.clone())?
        .with_binary(&cli.ytdlp_bin)
        .with_ffmpeg(&cli.ffmpeg_bin);

    //XXX: handles both transcription and summarization; hence will need to be cloned
    let mut openai_client = OpenAIClient::new(&cli.openai_key, yt_dlp.clone());
    if let Some(base_url) = &cli.openai_base_url {
        openai_client = openai_client.with_base_url(base_url);
    }
    let yt = YtDlpWrapper::new(yt_dlp).with_caption_langs(cli.caption_langs.clone());

    let summarizer = VideoSummarizerBuilder::new(&cli.scratch_dir)
        .transcript_source(yt.clone())
        .metadata_source(yt.clone())
        .audio_handler(yt)
        .transcriber(openai_client.clone())
        .summarizer(openai_client)
        .timeouts(cli.timeouts())
        .with_chunking(cli.chunk_duration)
        .build();

    let app = router(Arc::new(summarizer));

    let listener = tokio::net::TcpListener::bind(cli.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cli.listen_addr))?;
    tracing::info!(addr = %cli.listen_addr, "Listening");

    let token = shutdown_token();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await
        .context("HTTP server error")?;

    Ok(())
}
