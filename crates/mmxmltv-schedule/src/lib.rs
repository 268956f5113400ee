//! Schedule parsing core for mmxmltv.
//!
//! Turns the visible text of a weekly schedule page into a chronological,
//! gap-free list of programmes with absolute zoned timestamps.

/// Immutable parse configuration (time zone, reference date).
pub mod config;
/// Timeline finalization (stop times, filtering, deduplication).
pub mod finalizer;
/// HTML to text line extraction.
pub mod lines;
/// Line classification state machine.
pub mod parser;
/// Section date inference.
pub mod resolver;
/// Weekday name vocabulary.
pub mod weekday;

pub use config::ScheduleConfig;
pub use finalizer::{Programme, finalize};
pub use lines::extract_lines;
pub use parser::{LineKind, ScheduleEntry, TimelineParser, parse_lines};
pub use resolver::resolve_section_date;
pub use weekday::lookup_weekday;

/// Parses a schedule page into finalized programmes.
///
/// An empty result means no section on the page could be parsed.
#[must_use]
pub fn parse_schedule(html: &str, config: &ScheduleConfig) -> Vec<Programme> {
    let lines = extract_lines(html);
    tracing::debug!(lines = lines.len(), "page text extracted");
    finalize(parse_lines(&lines, config))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use chrono::{NaiveDate, Timelike};
    use chrono_tz::America::Monterrey;

    use super::*;

    #[test]
    fn test_parse_schedule_fixture() {
        // Arrange
        let html = include_str!("../../../fixtures/multimedios/programacion.html");
        let config = ScheduleConfig::new(Monterrey, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());

        // Act
        let programmes = parse_schedule(html, &config);

        // Assert
        assert_eq!(programmes.len(), 7);
        assert_eq!(programmes[0].title, "Las Noticias por Adela");
        assert_eq!(
            programmes[0].start.date_naive(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert!(programmes.iter().all(|p| p.title != "Ver más"));
        assert!(programmes.iter().all(|p| !p.title.contains("dataLayer")));

        // Last programme of Thursday ends where Friday starts.
        let friday_first = programmes
            .iter()
            .position(|p| p.start.date_naive() == NaiveDate::from_ymd_opt(2024, 2, 2).unwrap())
            .unwrap();
        assert_eq!(programmes[friday_first - 1].stop, programmes[friday_first].start);

        let last = programmes.last().unwrap();
        assert_eq!(last.title, "Cine de Medianoche");
        assert_eq!(
            last.stop.date_naive(),
            NaiveDate::from_ymd_opt(2024, 2, 3).unwrap()
        );
        assert_eq!(last.stop.hour(), 0);
    }

    #[test]
    fn test_parse_schedule_without_sections_is_empty() {
        // Arrange
        let html = "<html><body><p>08:00</p><p>Noticias</p></body></html>";
        let config = ScheduleConfig::new(Monterrey, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());

        // Act
        let programmes = parse_schedule(html, &config);

        // Assert
        assert!(programmes.is_empty());
    }
}
