// ==========================================
// 매장 인사이트 - 판매 집계 엔진
// ==========================================
// 책임: 판매 기록을 시간대별/월별로 집계
// 원칙: 무상태 엔진, 모든 메서드는 순수 함수
// 원칙: 0으로 나누기는 0으로 단락 (정책이지 누락이 아님)
// ==========================================
// 그룹핑은 BTreeMap 을 사용해 반복 순서를 사전순으로 고정한다
// ==========================================

use crate::domain::sales::{
    CategorySalesSummary, MonthlySummary, ProductSalesSummary, SaleRecord, TimeSlotSummary,
};
use crate::domain::types::TimeSlot;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// 시간대별 인기 상품 상위 개수
pub const TOP_PRODUCT_COUNT: usize = 3;

// ==========================================
// SalesAggregator - 판매 집계 엔진
// ==========================================
pub struct SalesAggregator;

impl SalesAggregator {
    /// 새 집계 엔진을 생성한다
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 시간대별 집계
    // ==========================================

    /// 판매 기록을 시간대별로 집계한다
    ///
    /// # 규칙
    /// - Other 시간대는 결과에서 제외한다
    /// - sales_percentage 의 분모는 Other 포함 전체 매출이다
    /// - 기록이 없는 시간대는 생략한다 (0으로 채우지 않음)
    /// - 결과는 total_sales 내림차순, 동점은 시간대 선언 순서
    pub fn aggregate_time_slots(&self, records: &[SaleRecord]) -> Vec<TimeSlotSummary> {
        let grand_total: f64 = records.iter().map(|r| r.total_amount).sum();

        let mut grouped: BTreeMap<TimeSlot, Vec<&SaleRecord>> = BTreeMap::new();
        for record in records {
            grouped.entry(record.time_slot()).or_default().push(record);
        }

        let mut summaries: Vec<TimeSlotSummary> = TimeSlot::all_active()
            .iter()
            .filter_map(|slot| {
                let slot_records = grouped.get(slot)?;

                let total_sales: f64 = slot_records.iter().map(|r| r.total_amount).sum();
                let total_quantity: i64 = slot_records.iter().map(|r| r.quantity).sum();

                let average_order_value = if total_quantity > 0 {
                    total_sales / total_quantity as f64
                } else {
                    0.0
                };
                let sales_percentage = if grand_total > 0.0 {
                    total_sales / grand_total * 100.0
                } else {
                    0.0
                };

                let mut top_products = summarize_products(slot_records);
                top_products.truncate(TOP_PRODUCT_COUNT);

                Some(TimeSlotSummary {
                    time_slot: *slot,
                    total_sales,
                    total_quantity,
                    top_products,
                    average_order_value,
                    sales_percentage,
                })
            })
            .collect();

        // 안정 정렬이므로 동점은 시간대 선언 순서를 유지한다
        summaries.sort_by(|a, b| {
            b.total_sales
                .partial_cmp(&a.total_sales)
                .unwrap_or(Ordering::Equal)
        });
        summaries
    }

    // ==========================================
    // 월별 집계
    // ==========================================

    /// 판매 기록을 월별로 집계한다
    ///
    /// # 규칙
    /// - 월 레이블은 해당 월에서 처음 만나는 기록의 레이블을 쓴다
    /// - 상품/카테고리 요약은 매출액 내림차순 (동점은 이름 사전순)
    /// - 결과는 월 키 내림차순 (최신 월 먼저)
    pub fn aggregate_monthly(&self, records: &[SaleRecord]) -> Vec<MonthlySummary> {
        let mut grouped: BTreeMap<String, Vec<&SaleRecord>> = BTreeMap::new();
        for record in records {
            grouped.entry(record.month_key()).or_default().push(record);
        }

        // "yyyy-MM" 키는 사전순 = 시간순이므로 역순 순회가 최신 월 먼저다
        grouped
            .into_iter()
            .rev()
            .map(|(month_key, month_records)| {
                let month_label = month_records
                    .first()
                    .map(|r| r.month_label())
                    .unwrap_or_default();
                let total_sales: f64 = month_records.iter().map(|r| r.total_amount).sum();
                let total_quantity: i64 = month_records.iter().map(|r| r.quantity).sum();

                MonthlySummary {
                    month_key,
                    month_label,
                    total_sales,
                    total_quantity,
                    product_sales: summarize_products(&month_records),
                    category_sales: summarize_categories(&month_records),
                }
            })
            .collect()
    }

    // ==========================================
    // 현재 시간대 조회
    // ==========================================

    /// 호출자가 제공한 현재 시각의 시간대 요약을 반환한다
    ///
    /// Other 시간대이거나 해당 시간대에 기록이 없으면 None
    pub fn current_slot_summary(
        &self,
        records: &[SaleRecord],
        hour: u32,
    ) -> Option<TimeSlotSummary> {
        let slot = TimeSlot::from_hour(hour);
        if slot == TimeSlot::Other {
            return None;
        }
        self.aggregate_time_slots(records)
            .into_iter()
            .find(|summary| summary.time_slot == slot)
    }
}

impl Default for SalesAggregator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 그룹핑 보조 함수
// ==========================================

/// 상품명으로 그룹핑해 상품별 요약을 만든다
///
/// category / unit_price 는 입력 순서상 처음 만난 기록에서 가져온다
fn summarize_products(records: &[&SaleRecord]) -> Vec<ProductSalesSummary> {
    let mut grouped: BTreeMap<&str, ProductSalesSummary> = BTreeMap::new();
    for record in records {
        let entry = grouped
            .entry(record.product_name.as_str())
            .or_insert_with(|| ProductSalesSummary {
                product_name: record.product_name.clone(),
                category: record.product_category.clone(),
                quantity: 0,
                total_amount: 0.0,
                unit_price: record.unit_price,
            });
        entry.quantity += record.quantity;
        entry.total_amount += record.total_amount;
    }

    let mut summaries: Vec<ProductSalesSummary> = grouped.into_values().collect();
    summaries.sort_by(|a, b| {
        b.total_amount
            .partial_cmp(&a.total_amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    summaries
}

/// 카테고리로 그룹핑해 카테고리별 요약을 만든다
fn summarize_categories(records: &[&SaleRecord]) -> Vec<CategorySalesSummary> {
    let mut grouped: BTreeMap<&str, (i64, f64, BTreeSet<&str>)> = BTreeMap::new();
    for record in records {
        let entry = grouped
            .entry(record.product_category.as_str())
            .or_insert((0, 0.0, BTreeSet::new()));
        entry.0 += record.quantity;
        entry.1 += record.total_amount;
        entry.2.insert(record.product_name.as_str());
    }

    let mut summaries: Vec<CategorySalesSummary> = grouped
        .into_iter()
        .map(|(category, (quantity, total_amount, products))| CategorySalesSummary {
            category: category.to_string(),
            quantity,
            total_amount,
            product_count: products.len(),
        })
        .collect();
    summaries.sort_by(|a, b| {
        b.total_amount
            .partial_cmp(&a.total_amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    summaries
}
