// ==========================================
// 매장 인사이트 - 도메인 계층
// ==========================================
// 원칙: 도메인 엔티티는 저장/표현 세부사항을 모른다
// ==========================================

pub mod product;
pub mod recommendation;
pub mod sales;
pub mod types;

// 핵심 엔티티 재노출
pub use product::Product;
pub use recommendation::{Recommendation, RecommendationBundle};
pub use sales::{
    CategorySalesSummary, MonthlySummary, ProductSalesSummary, SaleRecord, TimeSlotSummary,
};
pub use types::{RecommendationKind, Season, TimeSlot};
