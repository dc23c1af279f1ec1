// ==========================================
// 매장 인사이트 - 엔진 계층
// ==========================================
// 책임: 판매 분석/추천 업무 규칙 구현 (SQL 없음)
// 원칙: 무상태, 순수 함수, 동기 실행
// 원칙: 모든 추천은 근거(reason)를 출력한다
// ==========================================

pub mod aggregation;
pub mod confidence;
pub mod recommendation;

// 핵심 엔진 재노출
pub use aggregation::SalesAggregator;
pub use confidence::confidence_score;
pub use recommendation::RecommendationEngine;
