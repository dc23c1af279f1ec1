// ==========================================
// 매장 인사이트 - 저장 계층 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// ==========================================

use thiserror::Error;

/// 저장 계층 오류 타입
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 데이터베이스 오류 =====
    #[error("레코드를 찾을 수 없습니다: {entity} (id={id})")]
    NotFound { entity: String, id: String },

    #[error("데이터베이스 연결 실패: {0}")]
    DatabaseConnectionError(String),

    #[error("데이터베이스 락 획득 실패: {0}")]
    LockError(String),

    #[error("데이터베이스 쿼리 실패: {0}")]
    DatabaseQueryError(String),

    #[error("유일 제약 조건 위반: {0}")]
    UniqueConstraintViolation(String),

    // ===== 데이터 품질 오류 =====
    #[error("데이터 검증 실패: {0}")]
    ValidationError(String),

    // ===== 공통 오류 =====
    #[error("내부 오류: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// From<rusqlite::Error> 구현
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result 타입 별칭
pub type RepositoryResult<T> = Result<T, RepositoryError>;
