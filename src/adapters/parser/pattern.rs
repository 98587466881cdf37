use super::{decode_entities, FieldKind, ItemFields, FEED_ROOTS};
use crate::domain::model::RawFeedItem;
use crate::domain::ports::FeedParser;
use crate::utils::error::{FeedError, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static ITEM_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<item(?:\s[^>]*)?>(.*?)</item\s*>").expect("item regex"));
static ITEM_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<item(?:\s[^>]*)?/?>").expect("item open regex"));
static ITEM_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</item\s*>").expect("item close regex"));
static CDATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("cdata regex"));
/// Stand-in for a masked CDATA section; NUL never appears in XML text.
static CDATA_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x00(\d+)\x00").expect("cdata slot regex"));
/// Start, end or empty-element tag. Comments and declarations do not match.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/)?([A-Za-z_][\w:.\-]*)[^>]*?(/)?>").expect("tag regex")
});
static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup regex"));
static FEED_ROOT: LazyLock<Regex> = LazyLock::new(|| {
    let roots = FEED_ROOTS.join("|");
    Regex::new(&format!(r"<(?:{})[\s>/]", roots)).expect("feed root regex")
});

/// Text-pattern parser that needs no well-formed document around the items.
///
/// CDATA sections are masked out before any matching, so markup-like text
/// inside them never opens items or ends fields, and they come back verbatim.
/// Only direct children of `<item>` are read; outside CDATA, markup is
/// stripped and entities decoded. An `<item>` opener without a matching
/// closer fails the parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternFeedParser;

impl PatternFeedParser {
    pub fn new() -> Self {
        Self
    }
}

impl FeedParser for PatternFeedParser {
    fn parse(&self, markup: &str) -> Result<Vec<RawFeedItem>> {
        if markup.trim().is_empty() {
            return Err(FeedError::parse("feed body is empty"));
        }

        let (masked, sections) = mask_cdata(markup);

        let opened = ITEM_OPEN
            .find_iter(&masked)
            .filter(|m| !m.as_str().ends_with("/>"))
            .count();
        let closed = ITEM_CLOSE.find_iter(&masked).count();
        if opened != closed {
            return Err(FeedError::parse(format!(
                "unbalanced item blocks: {} opened, {} closed",
                opened, closed
            )));
        }

        let mut items = Vec::new();
        for block in ITEM_OPEN.find_iter(&masked) {
            if block.as_str().ends_with("/>") {
                items.push(ItemFields::default().finish());
                continue;
            }
            let Some(caps) = ITEM_BLOCK.captures_at(&masked, block.start()) else {
                continue;
            };
            // captures_at 可能跳到後面的區塊
            if caps.get(0).map(|m| m.start()) != Some(block.start()) {
                continue;
            }
            let body = caps.get(1).map_or("", |m| m.as_str());
            items.push(extract_item(body, &sections));
        }

        if items.is_empty() && !FEED_ROOT.is_match(&masked) {
            return Err(FeedError::parse("no feed or item elements found"));
        }

        tracing::debug!("Pattern parser extracted {} item(s)", items.len());
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

/// Replaces every CDATA section with a numbered slot and returns the contents.
fn mask_cdata(markup: &str) -> (String, Vec<String>) {
    let mut sections = Vec::new();
    let masked = CDATA
        .replace_all(markup, |caps: &Captures| {
            sections.push(caps[1].to_string());
            format!("\u{0}{}\u{0}", sections.len() - 1)
        })
        .into_owned();
    (masked, sections)
}

/// 只讀取 `<item>` 的直接子元素
fn extract_item(body: &str, sections: &[String]) -> RawFeedItem {
    let mut fields = ItemFields::default();
    let mut depth = 0usize;
    let mut open: Option<(FieldKind, usize)> = None;

    for caps in TAG.captures_iter(body) {
        let (Some(tag), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let kind = || FieldKind::from_element_name(name.as_str().as_bytes());

        if caps.get(1).is_some() {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                if let Some((kind, start)) = open.take() {
                    fields.set(kind, decode_field(&body[start..tag.start()], sections));
                }
            }
        } else if caps.get(3).is_some() {
            if depth == 0 {
                if let Some(kind) = kind() {
                    fields.set(kind, String::new());
                }
            }
        } else {
            if depth == 0 {
                open = kind().map(|kind| (kind, tag.end()));
            }
            depth += 1;
        }
    }

    fields.finish()
}

/// CDATA content verbatim; everything else loses markup and has entities decoded.
fn decode_field(raw: &str, sections: &[String]) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;

    for caps in CDATA_SLOT.captures_iter(raw) {
        let Some(slot) = caps.get(0) else {
            continue;
        };
        out.push_str(&plain_text(&raw[last..slot.start()]));
        if let Some(section) = caps[1].parse::<usize>().ok().and_then(|i| sections.get(i)) {
            out.push_str(section);
        }
        last = slot.end();
    }
    out.push_str(&plain_text(&raw[last..]));

    out.trim().to_string()
}

fn plain_text(segment: &str) -> String {
    decode_entities(&MARKUP.replace_all(segment, ""))
}
