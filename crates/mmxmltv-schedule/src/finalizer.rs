//! Timeline finalization.

use std::collections::HashSet;

use chrono::{DateTime, NaiveTime};
use chrono_tz::Tz;
use tracing::instrument;

use super::config::localize_in;
use super::parser::ScheduleEntry;

/// Finalized programme with a known stop time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Programme {
    /// Absolute start time.
    pub start: DateTime<Tz>,
    /// Absolute stop time, always after `start`.
    pub stop: DateTime<Tz>,
    /// Programme title, never empty.
    pub title: String,
}

impl From<Programme> for ScheduleEntry {
    fn from(programme: Programme) -> Self {
        Self {
            start: programme.start,
            title: programme.title,
        }
    }
}

/// Midnight at the start of the day after `start`, in the same zone.
fn next_midnight(start: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let next_day = start.date_naive().succ_opt()?;
    localize_in(start.timezone(), next_day.and_time(NaiveTime::MIN))
}

/// Turns provisional entries into a chronological programme list.
///
/// Each stop is the next entry's start; the last entry ends at midnight of
/// the following day. Entries with an empty title or a non-positive
/// duration are dropped, then exact `(start, stop, title)` repeats.
#[must_use]
#[instrument(skip_all, fields(entries = entries.len()))]
pub fn finalize(mut entries: Vec<ScheduleEntry>) -> Vec<Programme> {
    entries.sort_by_key(|entry| entry.start);

    let Some(last_start) = entries.last().map(|entry| entry.start) else {
        return Vec::new();
    };
    let last_stop = next_midnight(&last_start);
    if last_stop.is_none() {
        tracing::warn!(%last_start, "midnight after last programme not representable, dropping it");
    }

    let stops: Vec<Option<DateTime<Tz>>> = entries
        .iter()
        .skip(1)
        .map(|entry| Some(entry.start))
        .chain(std::iter::once(last_stop))
        .collect();

    let mut seen: HashSet<(DateTime<Tz>, DateTime<Tz>, String)> = HashSet::new();
    let programmes: Vec<Programme> = entries
        .into_iter()
        .zip(stops)
        .filter_map(|(entry, stop)| {
            let stop = stop?;
            (!entry.title.is_empty() && stop > entry.start).then(|| Programme {
                start: entry.start,
                stop,
                title: entry.title,
            })
        })
        .filter(|p| seen.insert((p.start, p.stop, p.title.clone())))
        .collect();

    tracing::debug!(programmes = programmes.len(), "timeline finalized");
    programmes
}
