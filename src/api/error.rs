// ==========================================
// 매장 인사이트 - API 계층 오류 타입
// ==========================================
// 책임: Repository 오류를 사용자 친화적 메시지로 변환
// 원칙: 모든 오류 메시지는 원인을 명시한다
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API 계층 오류 타입
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    #[error("리소스를 찾을 수 없습니다: {0}")]
    NotFound(String),

    #[error("내부 오류: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={})", entity, id))
            }
            RepositoryError::ValidationError(message) => ApiError::InvalidInput(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;
