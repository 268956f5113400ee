//! Schedule page client library for mmxmltv.
//!
//! Fetches the station's published programming page.

/// Multimedios programming page client.
pub mod multimedios;
