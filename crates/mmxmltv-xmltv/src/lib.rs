//! XMLTV output for mmxmltv.
//!
//! Serializes finalized programmes for a single channel into an XMLTV
//! document readable by media-center and DVR software.

mod document;
mod writer;

pub use document::{ChannelInfo, GENERATOR_NAME, xmltv_timestamp};
pub use writer::{to_xmltv_string, write_xmltv_file};
