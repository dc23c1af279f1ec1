// ==========================================
// 매장 인사이트 - 데이터 저장 계층
// ==========================================
// 원칙: Repository 는 업무 로직을 담지 않는다
// 제약: 모든 쿼리는 파라미터 바인딩 사용 (SQL 주입 방지)
// ==========================================

pub mod error;
pub mod product_repo;
pub mod sales_record_repo;

// 핵심 저장소 재노출
pub use error::{RepositoryError, RepositoryResult};
pub use product_repo::ProductRepository;
pub use sales_record_repo::SalesRecordRepository;
