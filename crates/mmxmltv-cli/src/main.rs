//! mmxmltv - TV schedule page to XMLTV converter.

/// Application configuration.
mod config;
/// Guide generation pipeline.
mod guide;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::AppConfig;
use crate::guide::EmptyScheduleError;

/// Exit code when the page yielded no programmes.
const EXIT_EMPTY_SCHEDULE: u8 = 2;

/// CLI argument parser. Every option can also be set through its
/// environment variable.
#[derive(Parser, Debug)]
#[command(about, version)]
pub struct Cli {
    /// Schedule page to scrape.
    #[arg(long, env = "SOURCE_URL", default_value = mmxmltv_api::multimedios::DEFAULT_SOURCE_URL)]
    source_url: String,

    /// Where to write the XMLTV file.
    #[arg(long, env = "OUTPUT_FILE", default_value = "/output/multimedios_mty.xml")]
    output_file: PathBuf,

    /// XMLTV channel id.
    #[arg(long, env = "CHANNEL_ID", default_value = "multimedios.canal6.monterrey")]
    channel_id: String,

    /// Channel display name.
    #[arg(long, env = "CHANNEL_NAME", default_value = "Canal 6 Multimedios Monterrey")]
    channel_name: String,

    /// Language of programme titles.
    #[arg(long, env = "CHANNEL_LANG", default_value = "es")]
    channel_lang: String,

    /// IANA time zone of the schedule page.
    #[arg(long, env = "TIMEZONE", default_value = "America/Monterrey")]
    timezone: String,

    /// HTTP User-Agent.
    #[arg(
        long,
        env = "USER_AGENT",
        default_value = "Mozilla/5.0 (compatible; multimedios-xmltv/1.0; +https://github.com/)"
    )]
    user_agent: String,

    /// HTTP request timeout in seconds.
    #[arg(long, env = "TIMEOUT_SECONDS", default_value_t = 30)]
    timeout_seconds: u64,

    /// Reference date (YYYY-MM-DD) for resolving section dates (default: today in the time zone).
    #[arg(long, env = "SCHEDULE_TODAY")]
    today: Option<String>,
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the guide cannot be built.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;

    match guide::run(&config).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is::<EmptyScheduleError>() => {
            tracing::error!("{err}");
            Ok(ExitCode::from(EXIT_EMPTY_SCHEDULE))
        }
        Err(err) => Err(err),
    }
}
