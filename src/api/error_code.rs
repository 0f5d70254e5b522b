//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::UrlkeepError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字，按千位分域：
/// - 1000-1099: 通用错误
/// - 3000-3099: 短链接错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用错误 1000-1099
    BadRequest = 1000,
    InternalServerError = 1005,

    // 短链接错误 3000-3099
    LinkNotFound = 3000,
    LinkInvalidUrl = 3002,
    LinkDatabaseError = 3005,
    LinkEmptyCode = 3006,
    LinkNamespaceExhausted = 3007,
}

impl From<&UrlkeepError> for ErrorCode {
    fn from(err: &UrlkeepError) -> Self {
        match err {
            UrlkeepError::InvalidInput(_) => ErrorCode::LinkInvalidUrl,
            UrlkeepError::NotFound(_) => ErrorCode::LinkNotFound,
            UrlkeepError::NamespaceExhausted(_) => ErrorCode::LinkNamespaceExhausted,
            UrlkeepError::StorageFailure(_) => ErrorCode::LinkDatabaseError,
            UrlkeepError::CodeCollision(_)
            | UrlkeepError::DatabaseConfig(_)
            | UrlkeepError::DatabaseConnection(_)
            | UrlkeepError::Config(_) => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::LinkNotFound).unwrap(), "3000");
        assert_eq!(serde_json::to_string(&ErrorCode::BadRequest).unwrap(), "1000");
    }

    #[test]
    fn test_from_store_errors() {
        assert_eq!(
            ErrorCode::from(&UrlkeepError::invalid_input("empty")),
            ErrorCode::LinkInvalidUrl
        );
        assert_eq!(
            ErrorCode::from(&UrlkeepError::storage_failure("io")),
            ErrorCode::LinkDatabaseError
        );
        assert_eq!(
            ErrorCode::from(&UrlkeepError::namespace_exhausted("full")),
            ErrorCode::LinkNamespaceExhausted
        );
    }
}
