//! `TimelineParser` - line classification state machine.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use regex::Regex;

use super::config::ScheduleConfig;
use super::resolver::resolve_section_date;
use super::weekday::lookup_weekday;

/// Section header, e.g. "Programación de Jueves 1".
#[allow(clippy::expect_used)]
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:programaci[oó]n\s+de|schedule[\s-]+for)[\s-]+(\p{L}+)\s+(\d{1,2})")
        .expect("failed to compile section regex")
});

/// Anything shaped like "HH:MM".
#[allow(clippy::expect_used)]
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{2}):(\d{2})\s*$").expect("failed to compile time regex")
});

/// Provisional programme: a start time and a title, no stop yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Absolute start time.
    pub start: DateTime<Tz>,
    /// Programme title.
    pub title: String,
}

/// Classification of a single page line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Day section header. `weekday` is `None` when the name is not in the vocabulary.
    SectionHeader {
        /// Resolved weekday.
        weekday: Option<Weekday>,
        /// Day of month as written.
        day: u32,
    },
    /// Valid start time inside a resolved section.
    TimeMarker(NaiveTime),
    /// Time-shaped line where a title was expected.
    StrayTime,
    /// Title for the pending start time.
    Title(&'a str),
    /// Line outside any usable context.
    Ignored,
}

/// Splits an "HH:MM"-shaped line into hour and minute, unvalidated.
fn time_shape(line: &str) -> Option<(u32, u32)> {
    let caps = TIME_RE.captures(line)?;
    let hour = caps.get(1)?.as_str().parse().ok()?;
    let minute = caps.get(2)?.as_str().parse().ok()?;
    Some((hour, minute))
}

/// Single-pass parser over schedule page lines.
///
/// Holds the date of the active section and a start time waiting for its
/// title. Feed lines in document order, then call [`Self::finish`].
#[derive(Debug)]
pub struct TimelineParser<'c> {
    config: &'c ScheduleConfig,
    current_date: Option<NaiveDate>,
    pending_start: Option<NaiveTime>,
    entries: Vec<ScheduleEntry>,
}

impl<'c> TimelineParser<'c> {
    /// Creates a parser with no active section.
    #[must_use]
    pub const fn new(config: &'c ScheduleConfig) -> Self {
        Self {
            config,
            current_date: None,
            pending_start: None,
            entries: Vec::new(),
        }
    }

    /// Classifies a line against the current state.
    ///
    /// Precedence: section header, time marker, title, ignored.
    #[must_use]
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(caps) = SECTION_RE.captures(line) {
            let weekday = caps.get(1).and_then(|m| lookup_weekday(m.as_str()));
            let day = caps
                .get(2)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or_default();
            return LineKind::SectionHeader { weekday, day };
        }

        if self.current_date.is_none() {
            return LineKind::Ignored;
        }

        let shape = time_shape(line);
        if let Some(time) = shape.and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0)) {
            return LineKind::TimeMarker(time);
        }

        if self.pending_start.is_none() {
            return LineKind::Ignored;
        }
        if shape.is_some() {
            return LineKind::StrayTime;
        }
        LineKind::Title(line)
    }

    /// Consumes one line and updates the state.
    pub fn feed(&mut self, line: &str) {
        match self.classify(line) {
            LineKind::SectionHeader { weekday, day } => {
                self.current_date =
                    weekday.map(|wd| resolve_section_date(wd, day, self.config.today));
                self.pending_start = None;
                match self.current_date {
                    Some(date) => tracing::debug!(%line, %date, "section started"),
                    None => tracing::warn!(%line, "unknown weekday in section header, skipping section"),
                }
            }
            LineKind::TimeMarker(time) => {
                if let Some(stale) = self.pending_start.replace(time) {
                    tracing::trace!(%stale, %time, "start time without title discarded");
                }
            }
            LineKind::StrayTime => {
                tracing::trace!(%line, "time-like line where a title was expected");
            }
            LineKind::Title(title) => self.push_entry(title),
            LineKind::Ignored => {}
        }
    }

    /// Emits an entry for the pending start time.
    fn push_entry(&mut self, title: &str) {
        let (Some(date), Some(time)) = (self.current_date, self.pending_start.take()) else {
            return;
        };
        match self.config.localize(date.and_time(time)) {
            Some(start) => self.entries.push(ScheduleEntry {
                start,
                title: String::from(title),
            }),
            None => tracing::warn!(%date, %time, %title, "start time not representable in zone, skipped"),
        }
    }

    /// Returns the entries in order of appearance.
    #[must_use]
    pub fn finish(self) -> Vec<ScheduleEntry> {
        self.entries
    }
}

/// Runs a [`TimelineParser`] over `lines`.
#[must_use]
pub fn parse_lines<S: AsRef<str>>(lines: &[S], config: &ScheduleConfig) -> Vec<ScheduleEntry> {
    let mut parser = TimelineParser::new(config);
    for line in lines {
        parser.feed(line.as_ref());
    }
    let entries = parser.finish();
    tracing::debug!(entries = entries.len(), "schedule lines parsed");
    entries
}
