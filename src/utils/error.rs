use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Transport error while fetching feed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Feed request failed with HTTP status {status}")]
    FetchError { status: u16 },

    #[error("Feed parse error: {message}")]
    ParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FeedError {
    pub fn parse(message: impl Into<String>) -> Self {
        FeedError::ParseError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FeedError::TransportError(_) => ErrorCategory::Network,
            FeedError::FetchError { .. } => ErrorCategory::Upstream,
            FeedError::ParseError { .. } | FeedError::SerializationError(_) => ErrorCategory::Data,
            FeedError::ConfigError { .. }
            | FeedError::InvalidConfigValueError { .. }
            | FeedError::MissingConfigError { .. }
            | FeedError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            FeedError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 這三類錯誤都會被 fallback 吸收
            ErrorCategory::Network | ErrorCategory::Upstream | ErrorCategory::Data => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 觸發靜態文章列表的錯誤
    pub fn triggers_fallback(&self) -> bool {
        matches!(
            self,
            FeedError::TransportError(_) | FeedError::FetchError { .. } | FeedError::ParseError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FeedError::TransportError(_) => "Check network connectivity and that the feed host resolves",
            FeedError::FetchError { status } if *status >= 500 => {
                "The feed host is failing; static articles are served until it recovers"
            }
            FeedError::FetchError { .. } => "Verify the feed URL points at an existing RSS document",
            FeedError::ParseError { .. } => "Make sure the feed URL returns RSS/XML with <item> entries",
            FeedError::IoError(_) => "Check file paths and permissions",
            FeedError::SerializationError(_) => "Check that the JSON file matches the article format",
            FeedError::ConfigError { .. }
            | FeedError::InvalidConfigValueError { .. }
            | FeedError::MissingConfigError { .. }
            | FeedError::ConfigValidationError { .. } => {
                "Review the configuration file and command line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FeedError::TransportError(_) => "無法連線到 RSS 來源".to_string(),
            FeedError::FetchError { status } => format!("RSS 來源回應錯誤狀態 {}", status),
            FeedError::ParseError { .. } => "RSS 內容無法解析".to_string(),
            FeedError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            FeedError::SerializationError(e) => format!("JSON 格式錯誤: {}", e),
            FeedError::ConfigError { message } => format!("配置錯誤: {}", message),
            FeedError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置項 {} 無效: {}", field, reason)
            }
            FeedError::MissingConfigError { field } => format!("缺少配置項: {}", field),
            FeedError::ConfigValidationError { field, message } => {
                format!("配置項 {} 驗證失敗: {}", field, message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
