use crate::adapters::http::DEFAULT_FEED_URL;
use crate::adapters::parser::ParserKind;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const FEED_URL_ENV: &str = "RSS_FEED_URL";
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub feed: FeedSection,
    pub fallback: FallbackSection,
    pub server: ServerSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    pub url: String,
    pub parser: ParserKind,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            parser: ParserKind::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackSection {
    /// JSON file with the articles to serve when the feed is unavailable.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub verbose: bool,
    pub json: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FeedError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FeedError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RSS_FEED_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Environment values win over the file, the way the hosted variant reads `RSS_FEED_URL`.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(FEED_URL_ENV).ok(),
            std::env::var(BIND_ADDR_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, feed_url: Option<String>, bind: Option<String>) {
        if let Some(url) = feed_url.filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Feed URL overridden by {}", FEED_URL_ENV);
            self.feed.url = url;
        }
        if let Some(bind) = bind.filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Bind address overridden by {}", BIND_ADDR_ENV);
            self.server.bind = bind;
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("feed.url", &self.feed.url)?;

        if let Some(path) = &self.fallback.path {
            validation::validate_file_extension("fallback.path", path, &["json"])?;
        }

        validation::validate_socket_addr("server.bind", &self.server.bind)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn feed_url(&self) -> &str {
        &self.feed.url
    }

    fn parser_kind(&self) -> ParserKind {
        self.feed.parser
    }

    fn fallback_path(&self) -> Option<&str> {
        self.fallback.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()?;
        tracing::debug!("✅ TOML configuration validation passed");
        Ok(())
    }
}
