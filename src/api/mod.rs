// ==========================================
// 매장 인사이트 - API 계층
// ==========================================
// 책임: 입력 검증 + Repository/Engine 조합의 업무 인터페이스
// 호스트 UI 는 이 계층만 호출한다
// ==========================================

pub mod error;
pub mod recommendation_api;
pub mod sales_api;

// 재노출
pub use error::{ApiError, ApiResult};
pub use recommendation_api::RecommendationApi;
pub use sales_api::SalesApi;
