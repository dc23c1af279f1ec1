// ==========================================
// 매장 인사이트 - 추천 도메인 엔티티
// ==========================================
// 추천은 저장되지 않는 계산 결과이며 호출마다 새로 생성된다
// ==========================================

use crate::domain::product::Product;
use crate::domain::sales::TimeSlotSummary;
use crate::domain::types::{RecommendationKind, TimeSlot};
use serde::{Deserialize, Serialize};

/// 개별 상품 추천
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub product: Product,
    /// 예상 판매 수량
    pub expected_sales: i64,
    /// 판매 확률 [0,1]
    pub probability: f64,
    /// 추천 근거 (i18n 문자열)
    pub reason: String,
    pub kind: RecommendationKind,
    /// 시간대 추천일 때만 존재
    pub time_slot: Option<TimeSlot>,
}

/// 월별 종합 추천 묶음
///
/// recommendations 는 최대 8개:
/// 인기 상승 ≤2 + 시간대 ≤2 + 재고 ≤2 + 고마진 ≤2 + 계절 ≤1 을
/// 순서대로 이어 붙인 뒤 8개로 자른다
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub month_label: String,
    /// 종합 전략 문구
    pub strategy: String,
    pub recommendations: Vec<Recommendation>,
    pub time_slot_summaries: Vec<TimeSlotSummary>,
    /// 핵심 인사이트 (최대 3개)
    pub key_insights: Vec<String>,
    /// 실행 항목
    pub action_items: Vec<String>,
    /// 데이터 양 기반 신뢰도 [0,1]
    pub confidence_score: f64,
}
