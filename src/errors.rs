use std::fmt;

#[derive(Debug, Clone)]
pub enum UrlkeepError {
    InvalidInput(String),
    NotFound(String),
    CodeCollision(String),
    NamespaceExhausted(String),
    StorageFailure(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    Config(String),
}

impl UrlkeepError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            UrlkeepError::InvalidInput(_) => "E001",
            UrlkeepError::NotFound(_) => "E002",
            UrlkeepError::CodeCollision(_) => "E003",
            UrlkeepError::NamespaceExhausted(_) => "E004",
            UrlkeepError::StorageFailure(_) => "E005",
            UrlkeepError::DatabaseConfig(_) => "E006",
            UrlkeepError::DatabaseConnection(_) => "E007",
            UrlkeepError::Config(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            UrlkeepError::InvalidInput(_) => "Invalid Input",
            UrlkeepError::NotFound(_) => "Resource Not Found",
            UrlkeepError::CodeCollision(_) => "Short Code Collision",
            UrlkeepError::NamespaceExhausted(_) => "Short Code Namespace Exhausted",
            UrlkeepError::StorageFailure(_) => "Storage Failure",
            UrlkeepError::DatabaseConfig(_) => "Database Configuration Error",
            UrlkeepError::DatabaseConnection(_) => "Database Connection Error",
            UrlkeepError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            UrlkeepError::InvalidInput(msg)
            | UrlkeepError::NotFound(msg)
            | UrlkeepError::CodeCollision(msg)
            | UrlkeepError::NamespaceExhausted(msg)
            | UrlkeepError::StorageFailure(msg)
            | UrlkeepError::DatabaseConfig(msg)
            | UrlkeepError::DatabaseConnection(msg)
            | UrlkeepError::Config(msg) => msg,
        }
    }

    /// 映射到 HTTP 状态码
    #[cfg(feature = "server")]
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            UrlkeepError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            UrlkeepError::NotFound(_) => StatusCode::NOT_FOUND,
            UrlkeepError::NamespaceExhausted(_) => StatusCode::SERVICE_UNAVAILABLE,
            UrlkeepError::CodeCollision(_)
            | UrlkeepError::StorageFailure(_)
            | UrlkeepError::DatabaseConfig(_)
            | UrlkeepError::DatabaseConnection(_)
            | UrlkeepError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于启动失败提示）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for UrlkeepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for UrlkeepError {}

// 便捷的构造函数
impl UrlkeepError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        UrlkeepError::InvalidInput(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        UrlkeepError::NotFound(msg.into())
    }

    pub fn code_collision<T: Into<String>>(msg: T) -> Self {
        UrlkeepError::CodeCollision(msg.into())
    }

    pub fn namespace_exhausted<T: Into<String>>(msg: T) -> Self {
        UrlkeepError::NamespaceExhausted(msg.into())
    }

    pub fn storage_failure<T: Into<String>>(msg: T) -> Self {
        UrlkeepError::StorageFailure(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        UrlkeepError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        UrlkeepError::DatabaseConnection(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        UrlkeepError::Config(msg.into())
    }
}

impl From<sea_orm::DbErr> for UrlkeepError {
    fn from(err: sea_orm::DbErr) -> Self {
        UrlkeepError::StorageFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UrlkeepError>;
