//! XMLTV serialization and file output.

use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::se::Serializer;
use serde::Serialize;
use tracing::instrument;

use mmxmltv_schedule::Programme;

use super::document::{ChannelInfo, Tv};

/// XML declaration written before the root element.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Renders programmes as an indented XMLTV document.
///
/// # Errors
///
/// Returns an error if XML serialization fails.
pub fn to_xmltv_string(channel: &ChannelInfo, programmes: &[Programme]) -> Result<String> {
    let tv = Tv::new(channel, programmes);

    let mut buffer = String::from(XML_DECLARATION);
    buffer.push('\n');
    let mut serializer = Serializer::new(&mut buffer);
    serializer.indent(' ', 2);
    tv.serialize(serializer)
        .context("failed to serialize XMLTV document")?;
    buffer.push('\n');
    Ok(buffer)
}

/// Writes an XMLTV document to `path`, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if serialization, directory creation or file write fails.
#[instrument(skip_all, fields(path = %path.display(), programmes = programmes.len()))]
pub fn write_xmltv_file(path: &Path, channel: &ChannelInfo, programmes: &[Programme]) -> Result<()> {
    let xml = to_xmltv_string(channel, programmes)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, xml).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("XMLTV file written");
    Ok(())
}
