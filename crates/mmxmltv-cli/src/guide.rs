//! Guide generation: fetch, parse, write.

use anyhow::{Context, Result};
use tracing::instrument;

use mmxmltv_api::multimedios::{LocalScheduleSource, PageClient};
use mmxmltv_schedule::{Programme, ScheduleConfig, parse_schedule};
use mmxmltv_xmltv::write_xmltv_file;

use crate::config::AppConfig;

/// No programme could be parsed from the schedule page.
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyScheduleError;

impl std::fmt::Display for EmptyScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no programmes parsed; the page layout may have changed")
    }
}

impl std::error::Error for EmptyScheduleError {}

/// Fetches the schedule page and parses it into programmes.
///
/// # Errors
///
/// Returns an error if the page cannot be fetched, or
/// [`EmptyScheduleError`] if nothing could be parsed.
#[instrument(skip_all)]
pub async fn build_programmes(
    source: &(impl LocalScheduleSource + Sync),
    config: &ScheduleConfig,
) -> Result<Vec<Programme>> {
    let html = source
        .fetch_page()
        .await
        .context("failed to fetch schedule page")?;
    tracing::debug!(body_len = html.len(), today = %config.today, tz = %config.tz, "parsing schedule page");

    let programmes = parse_schedule(&html, config);
    if programmes.is_empty() {
        return Err(EmptyScheduleError.into());
    }
    Ok(programmes)
}

/// Runs a full scrape and writes the XMLTV file.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the page cannot be
/// fetched or parsed, or the output cannot be written.
pub async fn run(config: &AppConfig) -> Result<()> {
    let client = PageClient::builder()
        .url(config.source_url.clone())
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()
        .context("failed to build page client")?;

    tracing::info!("Fetching: {}", config.source_url);
    let programmes = build_programmes(&client, &config.schedule_config()).await?;

    write_xmltv_file(&config.output_file, &config.channel, &programmes)?;
    log_summary(&programmes, config);
    Ok(())
}

/// Logs what was written.
fn log_summary(programmes: &[Programme], config: &AppConfig) {
    tracing::info!(
        "Wrote {} programmes to {}",
        programmes.len(),
        config.output_file.display()
    );
    if let (Some(first), Some(last)) = (programmes.first(), programmes.last()) {
        tracing::info!(
            "Range: {} -> {}",
            first.start.to_rfc3339(),
            last.stop.to_rfc3339()
        );
    }
    tracing::info!("Channel id: {}", config.channel.id);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use anyhow::{Result, bail};
    use chrono::NaiveDate;
    use chrono_tz::America::Monterrey;

    use super::*;

    /// Mock source returning a fixed page or failing.
    struct MockSource {
        page: Option<&'static str>,
    }

    impl LocalScheduleSource for MockSource {
        async fn fetch_page(&self) -> Result<String> {
            match self.page {
                Some(page) => Ok(String::from(page)),
                None => bail!("connection refused"),
            }
        }
    }

    fn schedule_config() -> ScheduleConfig {
        ScheduleConfig::new(Monterrey, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap())
    }

    #[tokio::test]
    async fn test_build_programmes_from_fixture() {
        // Arrange
        let source = MockSource {
            page: Some(include_str!("../../../fixtures/multimedios/programacion.html")),
        };

        // Act
        let programmes = build_programmes(&source, &schedule_config()).await.unwrap();

        // Assert
        assert_eq!(programmes.len(), 7);
        assert!(programmes.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[tokio::test]
    async fn test_build_programmes_empty_page() {
        // Arrange
        let source = MockSource {
            page: Some("<html><body><p>Sitio en mantenimiento</p></body></html>"),
        };

        // Act
        let err = build_programmes(&source, &schedule_config()).await.unwrap_err();

        // Assert
        assert_eq!(err.downcast_ref::<EmptyScheduleError>(), Some(&EmptyScheduleError));
        assert!(err.to_string().contains("page layout may have changed"));
    }

    #[tokio::test]
    async fn test_build_programmes_fetch_error() {
        // Arrange
        let source = MockSource { page: None };

        // Act
        let err = build_programmes(&source, &schedule_config()).await.unwrap_err();

        // Assert
        assert!(err.downcast_ref::<EmptyScheduleError>().is_none());
        let message = format!("{err:#}");
        assert!(message.contains("failed to fetch schedule page"));
        assert!(message.contains("connection refused"));
    }
}
