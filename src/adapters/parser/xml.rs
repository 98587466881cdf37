use super::{decode_entities, FieldKind, ItemFields, FEED_ROOTS};
use crate::domain::model::RawFeedItem;
use crate::domain::ports::FeedParser;
use crate::utils::error::{FeedError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Event-driven parser over the full XML structure.
///
/// Only direct children of `<item>` are read as fields; markup nested inside a
/// field contributes its text. Any reader error, or an element left open at
/// end of input, fails the whole parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlFeedParser;

impl XmlFeedParser {
    pub fn new() -> Self {
        Self
    }
}

struct OpenItem {
    depth: usize,
    fields: ItemFields,
}

struct OpenField {
    kind: FieldKind,
    depth: usize,
    text: String,
}

impl FeedParser for XmlFeedParser {
    fn parse(&self, markup: &str) -> Result<Vec<RawFeedItem>> {
        if markup.trim().is_empty() {
            return Err(FeedError::parse("feed body is empty"));
        }

        let mut reader = Reader::from_str(markup);
        reader.config_mut().check_end_names = true;

        let mut items = Vec::new();
        let mut depth = 0usize;
        let mut saw_feed_root = false;
        let mut open_item: Option<OpenItem> = None;
        let mut open_field: Option<OpenField> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    let name = e.name();
                    let name = name.as_ref();

                    if FEED_ROOTS.iter().any(|root| root.as_bytes() == name) {
                        saw_feed_root = true;
                    }

                    if name == b"item" && open_item.is_none() {
                        open_item = Some(OpenItem {
                            depth,
                            fields: ItemFields::default(),
                        });
                    } else if let Some(item) = &open_item {
                        if open_field.is_none() && depth == item.depth + 1 {
                            open_field = FieldKind::from_element_name(name).map(|kind| OpenField {
                                kind,
                                depth,
                                text: String::new(),
                            });
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    let name = e.name();
                    let name = name.as_ref();
                    if FEED_ROOTS.iter().any(|root| root.as_bytes() == name) {
                        saw_feed_root = true;
                    }
                    // <item/> 仍算一個項目，組裝時會被略過
                    if name == b"item" && open_item.is_none() {
                        items.push(ItemFields::default().finish());
                    }
                }
                Ok(Event::End(_)) => {
                    if open_field.as_ref().is_some_and(|f| f.depth == depth) {
                        if let (Some(field), Some(item)) = (open_field.take(), open_item.as_mut()) {
                            item.fields.set(field.kind, field.text.trim().to_string());
                        }
                    }
                    if open_item.as_ref().is_some_and(|i| i.depth == depth) {
                        if let Some(item) = open_item.take() {
                            items.push(item.fields.finish());
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Text(e)) => {
                    if let Some(field) = open_field.as_mut() {
                        let raw = e.into_inner();
                        field.text.push_str(&decode_entities(&String::from_utf8_lossy(&raw)));
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(field) = open_field.as_mut() {
                        let raw = e.into_inner();
                        field.text.push_str(&String::from_utf8_lossy(&raw));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(FeedError::parse(format!(
                        "malformed XML near byte {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                }
                _ => {}
            }
        }

        if depth != 0 {
            return Err(FeedError::parse(format!(
                "unexpected end of input with {} unclosed element(s)",
                depth
            )));
        }
        if !saw_feed_root && items.is_empty() {
            return Err(FeedError::parse("no feed or item elements found"));
        }

        tracing::debug!("XML parser extracted {} item(s)", items.len());
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "xml"
    }
}
