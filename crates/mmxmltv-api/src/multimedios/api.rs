//! `ScheduleSource` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

/// Source of schedule page HTML.
///
/// Abstracts the page download for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[trait_variant::make(ScheduleSource: Send)]
pub trait LocalScheduleSource {
    /// Fetches the schedule page body.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be retrieved.
    async fn fetch_page(&self) -> Result<String>;
}
