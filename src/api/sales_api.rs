// ==========================================
// 매장 인사이트 - 판매 기록 API
// ==========================================
// 책임: 판매 기록 등록/조회와 월별 집계의 검증된 진입점
// 구조: API 계층 → Repository / Engine
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::sales::{MonthlySummary, SaleRecord};
use crate::engine::SalesAggregator;
use crate::importer::{ImportReport, SalesCsvImporter};
use crate::repository::SalesRecordRepository;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// 판매 기록 API
pub struct SalesApi {
    record_repo: Arc<SalesRecordRepository>,
    aggregator: SalesAggregator,
}

impl SalesApi {
    /// 새 SalesApi 인스턴스를 생성한다
    pub fn new(record_repo: Arc<SalesRecordRepository>) -> Self {
        Self {
            record_repo,
            aggregator: SalesAggregator::new(),
        }
    }

    // ==========================================
    // 기록 등록
    // ==========================================

    /// 판매 1건을 등록한다
    ///
    /// # 파라미터
    /// - sold_at: 매장 현지 시각 — total_amount 와 hour_of_day 를
    ///   이 시점 기준으로 캡처한다
    ///
    /// # 검증
    /// - 상품명/카테고리 비어 있지 않음, 수량 > 0, 단가 ≥ 0
    pub fn record_sale(
        &self,
        product_name: &str,
        product_category: &str,
        quantity: i64,
        unit_price: f64,
        sold_at: NaiveDateTime,
    ) -> ApiResult<SaleRecord> {
        if product_name.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "상품명은 비어 있을 수 없습니다".to_string(),
            ));
        }
        if product_category.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "카테고리는 비어 있을 수 없습니다".to_string(),
            ));
        }
        if quantity <= 0 {
            return Err(ApiError::InvalidInput(format!(
                "수량은 1 이상이어야 합니다: {}",
                quantity
            )));
        }
        if unit_price < 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "단가는 음수일 수 없습니다: {}",
                unit_price
            )));
        }

        let record = SaleRecord::new(
            product_name.trim().to_string(),
            product_category.trim().to_string(),
            quantity,
            unit_price,
            sold_at,
        );
        self.record_repo.insert(&record)?;

        tracing::info!(
            product = %record.product_name,
            quantity = record.quantity,
            total_amount = record.total_amount,
            "판매 기록 등록"
        );
        Ok(record)
    }

    /// POS 내보내기 CSV 를 일괄 등록한다
    pub fn import_csv(&self, path: &str) -> ApiResult<ImportReport> {
        let importer = SalesCsvImporter::new(self.record_repo.clone());
        Ok(importer.import_file(path)?)
    }

    // ==========================================
    // 조회 / 집계
    // ==========================================

    /// 전체 판매 기록 (판매 시각 순)
    pub fn list_records(&self) -> ApiResult<Vec<SaleRecord>> {
        Ok(self.record_repo.list_all()?)
    }

    /// 월별 판매 요약 (최신 월 먼저)
    pub fn monthly_summaries(&self) -> ApiResult<Vec<MonthlySummary>> {
        let records = self.record_repo.list_all()?;
        Ok(self.aggregator.aggregate_monthly(&records))
    }

    /// 전체 기록 건수
    pub fn record_count(&self) -> ApiResult<usize> {
        Ok(self.record_repo.count()?)
    }
}
