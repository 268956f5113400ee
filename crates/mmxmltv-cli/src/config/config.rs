//! `AppConfig` struct and validation.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use chrono_tz::Tz;
use mmxmltv_schedule::ScheduleConfig;
use mmxmltv_xmltv::ChannelInfo;
use url::Url;

use crate::Cli;

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Schedule page URL.
    pub source_url: Url,
    /// XMLTV output path.
    pub output_file: PathBuf,
    /// Channel written to the guide.
    pub channel: ChannelInfo,
    /// IANA zone of the schedule page.
    pub tz: Tz,
    /// HTTP User-Agent.
    pub user_agent: String,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Reference date override (`None` = today in `tz`).
    pub today: Option<NaiveDate>,
}

impl AppConfig {
    /// Validates parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL, time zone or `--today` date is invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source_url = Url::parse(&cli.source_url)
            .with_context(|| format!("invalid source URL: {}", cli.source_url))?;
        let tz: Tz = cli
            .timezone
            .parse()
            .map_err(|_| anyhow!("unknown time zone: {}", cli.timezone))?;
        let today = cli
            .today
            .as_deref()
            .map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .with_context(|| format!("invalid --today date (expected YYYY-MM-DD): {s}"))
            })
            .transpose()?;

        Ok(Self {
            source_url,
            output_file: cli.output_file.clone(),
            channel: ChannelInfo {
                id: cli.channel_id.clone(),
                display_name: cli.channel_name.clone(),
                lang: cli.channel_lang.clone(),
            },
            tz,
            user_agent: cli.user_agent.clone(),
            timeout: Duration::from_secs(cli.timeout_seconds),
            today,
        })
    }

    /// Builds the parse context for this run.
    #[must_use]
    pub fn schedule_config(&self) -> ScheduleConfig {
        self.today.map_or_else(
            || ScheduleConfig::now(self.tz),
            |today| ScheduleConfig::new(self.tz, today),
        )
    }
}
