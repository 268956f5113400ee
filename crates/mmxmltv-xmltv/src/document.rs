//! XMLTV element types.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use mmxmltv_schedule::Programme;

/// Value of the `generator-info-name` attribute.
pub const GENERATOR_NAME: &str = "mmxmltv";

/// Channel the programmes belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    /// XMLTV channel id, e.g. `multimedios.canal6.monterrey`.
    pub id: String,
    /// Human readable channel name.
    pub display_name: String,
    /// Language code of programme titles.
    pub lang: String,
}

/// Formats a timestamp as XMLTV expects: `YYYYMMDDHHMMSS +HHMM`.
#[must_use]
pub fn xmltv_timestamp(dt: &DateTime<Tz>) -> String {
    dt.format("%Y%m%d%H%M%S %z").to_string()
}

/// `<tv>` root element.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "tv")]
pub(crate) struct Tv {
    #[serde(rename = "@generator-info-name")]
    pub generator_info_name: String,
    pub channel: Channel,
    #[serde(rename = "programme", default)]
    pub programmes: Vec<XmltvProgramme>,
}

/// `<channel>` element.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct Channel {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "display-name")]
    pub display_name: String,
}

/// `<programme>` element.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct XmltvProgramme {
    #[serde(rename = "@start")]
    pub start: String,
    #[serde(rename = "@stop")]
    pub stop: String,
    #[serde(rename = "@channel")]
    pub channel: String,
    pub title: Title,
}

/// `<title lang="..">` element.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct Title {
    #[serde(rename = "@lang")]
    pub lang: String,
    #[serde(rename = "$text")]
    pub value: String,
}

impl Tv {
    /// Builds the document tree.
    pub(crate) fn new(channel: &ChannelInfo, programmes: &[Programme]) -> Self {
        Self {
            generator_info_name: String::from(GENERATOR_NAME),
            channel: Channel {
                id: channel.id.clone(),
                display_name: channel.display_name.clone(),
            },
            programmes: programmes
                .iter()
                .map(|p| XmltvProgramme {
                    start: xmltv_timestamp(&p.start),
                    stop: xmltv_timestamp(&p.stop),
                    channel: channel.id.clone(),
                    title: Title {
                        lang: channel.lang.clone(),
                        value: p.title.clone(),
                    },
                })
                .collect(),
        }
    }
}
