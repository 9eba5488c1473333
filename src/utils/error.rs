use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Malformed response for {key}: {reason}")]
    MalformedResponse { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Response,
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

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // 警告，但成功
            ErrorSeverity::Medium => 2,   // 網路錯誤
            ErrorSeverity::High => 1,     // 回應或配置錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl ReportError {
    pub fn malformed(key: impl ToString, reason: impl ToString) -> Self {
        ReportError::MalformedResponse {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// 網路層失敗 (連線錯誤或非 2xx 狀態碼)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ReportError::Transport(_) | ReportError::HttpStatus { .. }
        )
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::Transport(_) | ReportError::HttpStatus { .. } => ErrorCategory::Transport,
            ReportError::MalformedResponse { .. } | ReportError::Serialization(_) => {
                ErrorCategory::Response
            }
            ReportError::ConfigError { .. }
            | ReportError::InvalidConfigValue { .. }
            | ReportError::MissingConfig { .. } => ErrorCategory::Configuration,
            ReportError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Response => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::Transport(_) => "Check that the reporting API is reachable",
            ReportError::HttpStatus { .. } => {
                "Check the report type and period exist on the reporting API"
            }
            ReportError::MalformedResponse { .. } | ReportError::Serialization(_) => {
                "The reporting API returned an unexpected payload; check the server version"
            }
            ReportError::ConfigError { .. }
            | ReportError::InvalidConfigValue { .. }
            | ReportError::MissingConfig { .. } => "Fix the configuration and try again",
            ReportError::Io(_) => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::Transport(_) | ReportError::HttpStatus { .. } => {
                format!("Could not reach the reporting API: {}", self)
            }
            ReportError::MalformedResponse { key, .. } => {
                format!("Report '{}' returned data that could not be rendered", key)
            }
            ReportError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            ReportError::MissingConfig { field } => format!("Missing setting '{}'", field),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
