use crate::domain::model::NormalizedArticle;
use crate::domain::ports::FallbackProvider;
use crate::utils::error::{FeedError, Result};
use std::path::Path;

/// Articles served verbatim when the live feed cannot be used.
#[derive(Debug, Clone)]
pub struct StaticFallback {
    articles: Vec<NormalizedArticle>,
}

impl StaticFallback {
    /// The articles the homepage shipped with before the feed existed.
    pub fn builtin() -> Self {
        Self {
            articles: builtin_articles(),
        }
    }

    pub fn from_articles(articles: Vec<NormalizedArticle>) -> Result<Self> {
        if articles.is_empty() {
            return Err(FeedError::ConfigError {
                message: "fallback article list cannot be empty".to_string(),
            });
        }
        Ok(Self { articles })
    }

    /// Loads a JSON array of articles (same shape as the `/api/articles` output).
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let articles: Vec<NormalizedArticle> = serde_json::from_str(&content)?;
        tracing::info!(
            "Loaded {} fallback article(s) from {}",
            articles.len(),
            path.as_ref().display()
        );
        Self::from_articles(articles)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl Default for StaticFallback {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FallbackProvider for StaticFallback {
    fn articles(&self) -> Vec<NormalizedArticle> {
        self.articles.clone()
    }
}

fn article(
    id: u32,
    title: &str,
    category: &str,
    description: &str,
    date: &str,
    link: &str,
    tags: &[&str],
) -> NormalizedArticle {
    let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    NormalizedArticle {
        id,
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        link: link.to_string(),
        style_key: crate::domain::services::resolve_style(&tags),
        tags,
    }
}

fn builtin_articles() -> Vec<NormalizedArticle> {
    vec![
        article(
            1,
            "PS证件照",
            "图像处理",
            "本文介绍了一种使用Photoshop快速替换证件照背景的方法，且替换效果自然无杂色和毛边",
            "2025年06月19日",
            "https://note.weizwz.com/editor/ps/photo-change-bg",
            &["Photoshop", "证件照"],
        ),
        article(
            2,
            "VitePress评论",
            "建站资源",
            "本文介绍了在VitePress中集成Twikoo的方法，包括安装Twikoo插件、封装Twikoo组件、利用布局插槽插入评论模块以及自定义样式等步骤",
            "2025年05月15日",
            "https://note.weizwz.com/vitepress/extend/vitepress-twikoo",
            &["VitePress", "Twikoo"],
        ),
        article(
            3,
            "MacOS优化",
            "系统优化",
            "本文介绍了 MacOS Sequoia 系统的基础优化设置，包括修改截屏保存位置、修复启动图标错乱等",
            "2025年04月26日",
            "https://note.weizwz.com/macos/setting/base-init",
            &["MacOS"],
        ),
        article(
            4,
            "图标资源",
            "资源分享",
            "本文整理了多款常用图标资源，包括 Font Awesome、Iconfont、Iconify Design、Material Icons、CSS*GG、Remix Icon 等",
            "2025年04月18日",
            "https://note.weizwz.com/resource/image/icon-all",
            &["Icon", "资源"],
        ),
        article(
            5,
            "VitePress建站",
            "建站资源",
            "本文汇总了使用 VitePress 搭建博客的资源与配置方法",
            "2025年04月18日",
            "https://note.weizwz.com/vitepress/all/resource-all",
            &["VitePress", "网站"],
        ),
        article(
            6,
            "VSCode AI编程",
            "开发工具",
            "本文介绍了如何在 VSCode 中接入 DeepSeek V3，包括插件安装、API Key 注册与配置、常用功能操作等步骤",
            "2025年01月03日",
            "https://note.weizwz.com/editor/vscode/vscode-deepseek",
            &["VSCode", "DeepSeek"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_list_is_well_formed() {
        let articles = StaticFallback::builtin().articles();

        assert!(!articles.is_empty());
        for (index, article) in articles.iter().enumerate() {
            assert_eq!(article.id as usize, index + 1);
            assert!(!article.style_key.is_empty());
            assert!(article.date.ends_with('日'));
        }
        assert_eq!(articles[1].style_key, "weiz-icon-vitepress");
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(StaticFallback::from_articles(vec![]).is_err());
    }

    #[test]
    fn test_loads_json_file_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 7, "title": "Pinned", "category": "置顶", "description": "d",
                "date": "whenever", "link": "https://note.weizwz.com/p", "styleName": "custom"}}]"#
        )
        .unwrap();

        let fallback = StaticFallback::from_json_file(file.path()).unwrap();
        let articles = fallback.articles();

        assert_eq!(fallback.len(), 1);
        assert_eq!(articles[0].id, 7);
        assert_eq!(articles[0].date, "whenever");
        assert_eq!(articles[0].style_key, "custom");
    }

    #[test]
    fn test_malformed_json_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = StaticFallback::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, FeedError::SerializationError(_)));
    }
}
