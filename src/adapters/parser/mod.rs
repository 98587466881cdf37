//! Feed parsers.
//!
//! Two strategies produce the same `RawFeedItem`s from well-formed feeds:
//! [`XmlFeedParser`] walks quick-xml events, [`PatternFeedParser`] extracts
//! fields with regular expressions. Field decoding (CDATA, entities, trimming,
//! category default) is shared here so both agree on the text they emit.

mod pattern;
mod xml;

pub use pattern::PatternFeedParser;
pub use xml::XmlFeedParser;

use crate::domain::model::RawFeedItem;
use crate::domain::ports::FeedParser;
use crate::utils::error::FeedError;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const DEFAULT_CATEGORY: &str = "技术";

/// Root elements that mark a document as a feed even when it has no items.
pub(crate) const FEED_ROOTS: &[&str] = &["rss", "channel", "rdf:RDF"];

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|amp|lt|gt|quot|apos);").expect("entity regex")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    #[default]
    Xml,
    Pattern,
}

impl FromStr for ParserKind {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xml" | "dom" => Ok(ParserKind::Xml),
            "pattern" | "regex" | "text" => Ok(ParserKind::Pattern),
            other => Err(FeedError::InvalidConfigValueError {
                field: "parser".to_string(),
                value: other.to_string(),
                reason: "Supported parsers: xml, pattern".to_string(),
            }),
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserKind::Xml => write!(f, "xml"),
            ParserKind::Pattern => write!(f, "pattern"),
        }
    }
}

pub fn build_parser(kind: ParserKind) -> Box<dyn FeedParser> {
    match kind {
        ParserKind::Xml => Box::new(XmlFeedParser::new()),
        ParserKind::Pattern => Box::new(PatternFeedParser::new()),
    }
}

/// Item child elements the pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Title,
    Link,
    Description,
    PublishDate,
    Category,
    Tag,
}

impl FieldKind {
    pub(crate) const ALL: [FieldKind; 6] = [
        FieldKind::Title,
        FieldKind::Link,
        FieldKind::Description,
        FieldKind::PublishDate,
        FieldKind::Category,
        FieldKind::Tag,
    ];

    pub(crate) fn element_name(self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::Link => "link",
            FieldKind::Description => "description",
            FieldKind::PublishDate => "pubDate",
            FieldKind::Category => "category",
            FieldKind::Tag => "tag",
        }
    }

    pub(crate) fn from_element_name(name: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.element_name().as_bytes() == name)
    }
}

/// Collects decoded field values for one `<item>` block.
#[derive(Debug, Default)]
pub(crate) struct ItemFields {
    item: RawFeedItem,
}

impl ItemFields {
    /// Single-valued fields keep their first non-empty value; tags accumulate.
    pub(crate) fn set(&mut self, kind: FieldKind, value: String) {
        let slot = match kind {
            FieldKind::Title => &mut self.item.title,
            FieldKind::Link => &mut self.item.link,
            FieldKind::Description => &mut self.item.description,
            FieldKind::PublishDate => &mut self.item.publish_date,
            FieldKind::Category => &mut self.item.category,
            FieldKind::Tag => {
                if !value.is_empty() {
                    self.item.tags.push(value);
                }
                return;
            }
        };
        if slot.is_empty() {
            *slot = value;
        }
    }

    pub(crate) fn finish(mut self) -> RawFeedItem {
        if self.item.category.is_empty() {
            self.item.category = DEFAULT_CATEGORY.to_string();
        }
        self.item
    }
}

/// Decodes the five predefined XML entities and numeric character references.
/// Unknown entities such as `&nbsp;` are left as written.
pub(crate) fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => {
                    let code = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                        u32::from_str_radix(hex, 16).ok()
                    } else {
                        entity[1..].parse::<u32>().ok()
                    };
                    code.and_then(char::from_u32)
                }
            };
            decoded
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
