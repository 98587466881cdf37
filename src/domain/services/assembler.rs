use crate::domain::model::{NormalizedArticle, RawFeedItem};
use crate::domain::services::{format_date, normalize_tags, resolve_style};

/// Carousel capacity; later feed items are ignored.
pub const MAX_ARTICLES: usize = 12;

/// Builds the article list in feed order.
///
/// Items without a title or link are skipped and do not consume an id.
pub fn assemble_articles(items: Vec<RawFeedItem>) -> Vec<NormalizedArticle> {
    let mut articles = Vec::with_capacity(MAX_ARTICLES.min(items.len()));

    for item in items {
        if articles.len() >= MAX_ARTICLES {
            break;
        }
        if !item.is_valid() {
            tracing::debug!("Skipping feed item without title or link: {:?}", item.title);
            continue;
        }

        let tags = normalize_tags(&item.tags);
        let style_key = resolve_style(&tags);

        articles.push(NormalizedArticle {
            id: articles.len() as u32 + 1,
            title: item.title.trim().to_string(),
            category: item.category,
            description: item.description,
            date: format_date(&item.publish_date),
            link: item.link.trim().to_string(),
            style_key,
            tags,
        });
    }

    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::DEFAULT_STYLE_KEY;

    fn item(title: &str, link: &str) -> RawFeedItem {
        RawFeedItem {
            title: title.to_string(),
            link: link.to_string(),
            description: format!("About {}", title),
            publish_date: "2025-04-18".to_string(),
            category: "技术".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_assigns_contiguous_ids_in_feed_order() {
        let items = vec![item("A", "http://x/a"), item("B", "http://x/b"), item("C", "http://x/c")];

        let articles = assemble_articles(items);

        let ids: Vec<u32> = articles.iter().map(|a| a.id).collect();
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_invalid_items_do_not_consume_ids() {
        let items = vec![
            item("", "http://x/missing-title"),
            item("A", "http://x/a"),
            item("No link", "   "),
            item("B", "http://x/b"),
        ];

        let articles = assemble_articles(items);

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, 1);
        assert_eq!(articles[0].title, "A");
        assert_eq!(articles[1].id, 2);
        assert_eq!(articles[1].title, "B");
    }

    #[test]
    fn test_caps_at_max_articles() {
        let items: Vec<RawFeedItem> = (1..=15)
            .map(|i| item(&format!("Post {}", i), &format!("http://x/{}", i)))
            .collect();

        let articles = assemble_articles(items);

        assert_eq!(articles.len(), MAX_ARTICLES);
        assert_eq!(articles.last().unwrap().id, 12);
        assert_eq!(articles.last().unwrap().title, "Post 12");
    }

    #[test]
    fn test_normalizes_tags_style_and_date() {
        let mut raw = item("Post A", "http://x/a");
        raw.tags = vec!["VitePress, 网站".to_string(), "网站".to_string()];

        let article = assemble_articles(vec![raw]).remove(0);

        assert_eq!(article.tags, vec!["VitePress", "网站"]);
        assert_eq!(article.style_key, "weiz-icon-vitepress");
        assert_eq!(article.date, "2025年04月18日");
    }

    #[test]
    fn test_untagged_item_gets_default_style() {
        let article = assemble_articles(vec![item("A", "http://x/a")]).remove(0);
        assert_eq!(article.style_key, DEFAULT_STYLE_KEY);
    }

    #[test]
    fn test_empty_input() {
        assert!(assemble_articles(vec![]).is_empty());
    }
}
