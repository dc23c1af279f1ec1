// ==========================================
// 매장 인사이트 - 추천 API
// ==========================================
// 책임: 월별 추천 묶음/시간대 요약의 검증된 진입점
// 구조: API 계층 → Repository / Engine
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::recommendation::RecommendationBundle;
use crate::domain::sales::TimeSlotSummary;
use crate::engine::{RecommendationEngine, SalesAggregator};
use crate::repository::{ProductRepository, SalesRecordRepository};
use std::sync::Arc;

/// 추천 API
pub struct RecommendationApi {
    record_repo: Arc<SalesRecordRepository>,
    product_repo: Arc<ProductRepository>,
    aggregator: SalesAggregator,
    engine: RecommendationEngine,
}

impl RecommendationApi {
    /// 새 RecommendationApi 인스턴스를 생성한다
    pub fn new(
        record_repo: Arc<SalesRecordRepository>,
        product_repo: Arc<ProductRepository>,
    ) -> Self {
        Self {
            record_repo,
            product_repo,
            aggregator: SalesAggregator::new(),
            engine: RecommendationEngine::new(),
        }
    }

    /// 월별 종합 추천 묶음을 생성한다
    ///
    /// # 파라미터
    /// - month_key: "yyyy-MM"
    pub fn monthly_recommendation(&self, month_key: &str) -> ApiResult<RecommendationBundle> {
        let month_label = month_label_from_key(month_key)?;
        let records = self.record_repo.list_by_month(month_key)?;
        let products = self.product_repo.list_all()?;

        tracing::debug!(
            month = %month_key,
            records = records.len(),
            products = products.len(),
            "월별 추천 생성"
        );
        Ok(self
            .engine
            .build_monthly_recommendation(&records, &products, &month_label))
    }

    /// 특정 월의 시간대별 요약
    pub fn time_slot_summaries(&self, month_key: &str) -> ApiResult<Vec<TimeSlotSummary>> {
        // 레이블은 쓰지 않지만 월 키 형식 검증은 동일하게 적용한다
        month_label_from_key(month_key)?;
        let records = self.record_repo.list_by_month(month_key)?;
        Ok(self.aggregator.aggregate_time_slots(&records))
    }

    /// 현재 시각 기준 시간대 요약 (전체 기록 대상)
    ///
    /// Other 시간대이거나 해당 시간대 기록이 없으면 None
    pub fn current_slot_summary(&self, hour: u32) -> ApiResult<Option<TimeSlotSummary>> {
        if hour > 23 {
            return Err(ApiError::InvalidInput(format!(
                "시각은 0~23 이어야 합니다: {}",
                hour
            )));
        }
        let records = self.record_repo.list_all()?;
        Ok(self.aggregator.current_slot_summary(&records, hour))
    }
}

/// 월 키("yyyy-MM") → 월 레이블("yyyy년 MM월")
fn month_label_from_key(month_key: &str) -> ApiResult<String> {
    let invalid = || ApiError::InvalidInput(format!("잘못된 월 키 형식: {}", month_key));

    let (year, month) = month_key.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok(format!("{}년 {:02}월", year, month))
}
