//! Multimedios programming page client module.
//!
//! Downloads the weekly schedule page with a custom User-Agent, a request
//! timeout and retries.

mod api;
mod client;

pub use api::{LocalScheduleSource, ScheduleSource};
pub use client::{DEFAULT_SOURCE_URL, PageClient, PageClientBuilder};
