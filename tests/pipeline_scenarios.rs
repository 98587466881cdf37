use httpmock::prelude::*;
use std::io::Write;
use weiz_feed::adapters::{ParserKind, StaticFallback};
use weiz_feed::core::FallbackProvider;
use weiz_feed::domain::model::PipelineState;
use weiz_feed::{build_engine, ArticleSource, NormalizedArticle, TomlConfig};

fn config_for(url: String, parser: ParserKind) -> TomlConfig {
    let mut config = TomlConfig::default();
    config.feed.url = url;
    config.feed.parser = parser;
    config
}

async fn serve_feed<'a>(server: &'a MockServer, status: u16, body: &str) -> httpmock::Mock<'a> {
    let body = body.to_string();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/feed.xml");
            then.status(status)
                .header("Content-Type", "application/xml")
                .body(body);
        })
        .await
}

fn fallback_articles() -> Vec<NormalizedArticle> {
    StaticFallback::builtin().articles()
}

#[tokio::test]
async fn test_scenario_a_single_item() {
    let feed = "<rss><channel><item><title>Post A</title><link>http://x/a</link>\
                <description>Desc</description><pubDate>2025-04-18</pubDate>\
                <category>资源</category><tag>VitePress, 网站</tag></item></channel></rss>";

    for parser in [ParserKind::Xml, ParserKind::Pattern] {
        let server = MockServer::start_async().await;
        let feed_mock = serve_feed(&server, 200, feed).await;

        let engine = build_engine(&config_for(server.url("/feed.xml"), parser)).unwrap();
        let report = engine.run_report().await;

        feed_mock.assert_async().await;
        assert_eq!(report.source, ArticleSource::Live);
        assert_eq!(
            report.articles,
            vec![NormalizedArticle {
                id: 1,
                title: "Post A".to_string(),
                category: "资源".to_string(),
                description: "Desc".to_string(),
                date: "2025年04月18日".to_string(),
                link: "http://x/a".to_string(),
                style_key: "weiz-icon-vitepress".to_string(),
                tags: vec!["VitePress".to_string(), "网站".to_string()],
            }],
            "parser: {}",
            parser
        );
    }
}

#[tokio::test]
async fn test_scenario_b_empty_body_uses_fallback() {
    for parser in [ParserKind::Xml, ParserKind::Pattern] {
        let server = MockServer::start_async().await;
        let feed_mock = serve_feed(&server, 200, "").await;

        let engine = build_engine(&config_for(server.url("/feed.xml"), parser)).unwrap();
        let report = engine.run_report().await;

        feed_mock.assert_async().await;
        assert_eq!(report.source, ArticleSource::Fallback);
        assert_eq!(report.failed_at, Some(PipelineState::Parsing));
        assert_eq!(report.articles, fallback_articles());
    }
}

#[tokio::test]
async fn test_scenario_c_upstream_503_uses_fallback_after_one_attempt() {
    let server = MockServer::start_async().await;
    let feed_mock = serve_feed(&server, 503, "Service Unavailable").await;

    let engine = build_engine(&config_for(server.url("/feed.xml"), ParserKind::Xml)).unwrap();
    let articles = engine.run().await;

    feed_mock.assert_hits_async(1).await;
    assert_eq!(articles, fallback_articles());
}

#[tokio::test]
async fn test_scenario_d_caps_at_twelve() {
    let items: String = (1..=15)
        .map(|i| format!("<item><title>Post {i}</title><link>http://x/{i}</link><tag>T{i}</tag></item>"))
        .collect();
    let feed = format!("<rss><channel>{}</channel></rss>", items);

    for parser in [ParserKind::Xml, ParserKind::Pattern] {
        let server = MockServer::start_async().await;
        serve_feed(&server, 200, &feed).await;

        let engine = build_engine(&config_for(server.url("/feed.xml"), parser)).unwrap();
        let articles = engine.run().await;

        assert_eq!(articles.len(), 12);
        for (index, article) in articles.iter().enumerate() {
            let n = index + 1;
            assert_eq!(article.id as usize, n);
            assert_eq!(article.title, format!("Post {}", n));
            assert_eq!(article.style_key, format!("weiz-icon-t{}", n));
        }
    }
}

#[tokio::test]
async fn test_feed_with_only_invalid_items_uses_fallback() {
    let feed = "<rss><channel><item><title>No link</title></item><item><link>http://x/no-title</link></item></channel></rss>";
    let server = MockServer::start_async().await;
    serve_feed(&server, 200, feed).await;

    let engine = build_engine(&config_for(server.url("/feed.xml"), ParserKind::Pattern)).unwrap();
    let report = engine.run_report().await;

    assert_eq!(report.failed_at, Some(PipelineState::Assembling));
    assert_eq!(report.articles, fallback_articles());
}

#[tokio::test]
async fn test_malformed_feed_uses_fallback_rather_than_partial_list() {
    let feed = "<rss><channel><item><title>Good</title><link>http://x/good</link></item><item><title>Broken</link></item>";
    let server = MockServer::start_async().await;
    serve_feed(&server, 200, feed).await;

    let engine = build_engine(&config_for(server.url("/feed.xml"), ParserKind::Xml)).unwrap();
    let report = engine.run_report().await;

    assert!(report.is_fallback());
    assert_eq!(report.articles, fallback_articles());
}

#[tokio::test]
async fn test_unreachable_host_uses_fallback() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = config_for(format!("http://127.0.0.1:{}/feed.xml", port), ParserKind::Xml);
    let report = build_engine(&config).unwrap().run_report().await;

    assert_eq!(report.failed_at, Some(PipelineState::Fetching));
    assert_eq!(report.articles, fallback_articles());
}

#[tokio::test]
async fn test_configured_fallback_file_is_returned_verbatim() {
    let custom = vec![NormalizedArticle {
        id: 42,
        title: "Offline".to_string(),
        category: "公告".to_string(),
        description: "Feed is down".to_string(),
        date: "2025年06月01日".to_string(),
        link: "https://note.weizwz.com".to_string(),
        style_key: "weiz-icon-notice".to_string(),
        tags: vec![],
    }];
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{}", serde_json::to_string(&custom).unwrap()).unwrap();

    let server = MockServer::start_async().await;
    serve_feed(&server, 500, "").await;

    let mut config = config_for(server.url("/feed.xml"), ParserKind::Xml);
    config.fallback.path = Some(file.path().to_string_lossy().into_owned());
    let articles = build_engine(&config).unwrap().run().await;

    assert_eq!(articles, custom);
}
