// ==========================================
// 매장 인사이트 - 판매 도메인 엔티티
// ==========================================
// 원칙: 판매 기록은 생성 후 불변 (append-only)
// total_amount 는 생성 시점에 고정되며 이후 재계산하지 않는다
// ==========================================

use crate::domain::types::TimeSlot;
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// 판매 기록 (Sale Record)
// ==========================================

/// 개별 판매 이벤트
///
/// - `total_amount`: 생성 시점의 수량 × 단가. 저장 후 재계산하지 않는다
/// - `hour_of_day`: 판매 발생 시각(매장 현지 시각), 생성 시점에 캡처
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: Uuid,
    pub product_name: String,
    pub product_category: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_amount: f64,
    pub sold_at: NaiveDateTime,
    pub hour_of_day: u32,
}

impl SaleRecord {
    /// 새 판매 기록을 생성한다
    ///
    /// total_amount 와 hour_of_day 를 이 시점에 캡처한다
    pub fn new(
        product_name: String,
        product_category: String,
        quantity: i64,
        unit_price: f64,
        sold_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_name,
            product_category,
            quantity,
            unit_price,
            total_amount: quantity as f64 * unit_price,
            hour_of_day: sold_at.hour(),
            sold_at,
        }
    }

    /// 월 키 ("yyyy-MM")
    pub fn month_key(&self) -> String {
        self.sold_at.format("%Y-%m").to_string()
    }

    /// 월 표시 레이블 ("yyyy년 MM월")
    pub fn month_label(&self) -> String {
        format!("{}년 {:02}월", self.sold_at.year(), self.sold_at.month())
    }

    /// 판매 발생 시간대
    pub fn time_slot(&self) -> TimeSlot {
        TimeSlot::from_hour(self.hour_of_day)
    }
}

// ==========================================
// 집계 요약 타입
// ==========================================
// 요약은 저장되지 않는 계산 결과 뷰이다 (엔진 호출마다 새로 생성)

/// 상품별 판매 요약 (월 또는 시간대 범위)
///
/// category / unit_price 는 해당 상품의 첫 번째 기록에서 가져온다
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSalesSummary {
    pub product_name: String,
    pub category: String,
    pub quantity: i64,
    pub total_amount: f64,
    pub unit_price: f64,
}

/// 카테고리별 판매 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySalesSummary {
    pub category: String,
    pub quantity: i64,
    pub total_amount: f64,
    /// 카테고리 내 고유 상품 수
    pub product_count: usize,
}

/// 시간대별 판매 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotSummary {
    pub time_slot: TimeSlot,
    pub total_sales: f64,
    pub total_quantity: i64,
    /// 시간대 인기 상품 상위 3개 (매출액 내림차순)
    pub top_products: Vec<ProductSalesSummary>,
    /// 평균 주문 금액 (수량 0이면 0)
    pub average_order_value: f64,
    /// 전체 매출(Other 포함) 대비 비율(%)
    pub sales_percentage: f64,
}

/// 월별 판매 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month_key: String,
    pub month_label: String,
    pub total_sales: f64,
    pub total_quantity: i64,
    /// 매출액 내림차순
    pub product_sales: Vec<ProductSalesSummary>,
    /// 매출액 내림차순
    pub category_sales: Vec<CategorySalesSummary>,
}
