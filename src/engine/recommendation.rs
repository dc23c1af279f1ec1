// ==========================================
// 매장 인사이트 - 추천 엔진
// ==========================================
// 책임: 집계 결과 + 상품 카탈로그 → 휴리스틱 추천 생성
// 원칙: 무상태 엔진, 모든 메서드는 순수 함수 (입력이 같으면 출력도 같다)
// 원칙: 카탈로그에 없는 상품은 오류 없이 조용히 건너뛴다
// ==========================================
// 5개 규칙 생성기: 인기 상승(≤2) + 시간대(≤2) + 재고(≤2)
//                 + 고마진(≤2) + 계절(≤1) → 최대 8개로 절단
// ==========================================

use crate::domain::product::Product;
use crate::domain::recommendation::{Recommendation, RecommendationBundle};
use crate::domain::sales::{SaleRecord, TimeSlotSummary};
use crate::domain::types::{RecommendationKind, Season};
use crate::engine::aggregation::SalesAggregator;
use crate::engine::confidence::confidence_score;
use crate::i18n::{t, t_with_args};
use std::collections::BTreeMap;

// ==========================================
// 규칙 임계값
// ==========================================

/// 인기 상승 판정 기준: 일평균 판매 수량 (초과 조건)
pub const TRENDING_DAILY_AVG_THRESHOLD: f64 = 2.0;
/// 일평균 산출 구간 (일)
pub const TRENDING_WINDOW_DAYS: f64 = 30.0;
/// 주간 예상 판매 환산 계수
const TRENDING_WEEKLY_FACTOR: f64 = 7.0;
/// 인기 상승 확률 = min(일평균 / 5, 0.95)
const TRENDING_PROBABILITY_DIVISOR: f64 = 5.0;
const TRENDING_PROBABILITY_CAP: f64 = 0.95;
/// 시간대 추천 목표: 수량 30% 증가
const TIME_SLOT_UPLIFT: f64 = 0.3;
/// 재고 부족 기준 (0 < stock < 10)
pub const LOW_STOCK_BOUND: i64 = 10;
const INVENTORY_PROBABILITY: f64 = 0.8;
/// 고마진 기준 단가 (원, 초과 조건)
pub const HIGH_MARGIN_PRICE: f64 = 7000.0;
const MARGIN_EXPECTED_SALES: i64 = 15;
const MARGIN_PROBABILITY: f64 = 0.6;
const SEASONAL_EXPECTED_SALES: i64 = 20;
const SEASONAL_PROBABILITY: f64 = 0.75;

/// 생성기별 상한
const TRENDING_CAP: usize = 2;
const TIME_SLOT_CAP: usize = 2;
const INVENTORY_CAP: usize = 2;
const MARGIN_CAP: usize = 2;
const SEASONAL_CAP: usize = 1;
/// 묶음 전체 상한
pub const BUNDLE_CAP: usize = 8;

/// 집중 전략 판정 기준: 1위 시간대 매출 비율(%)
const CONCENTRATE_THRESHOLD_PCT: f64 = 40.0;
/// 월 레이블 해석 실패 시 기본 월 (오류가 아닌 정의된 폴백)
const FALLBACK_MONTH: u32 = 6;

// ==========================================
// RecommendationEngine - 추천 엔진
// ==========================================
pub struct RecommendationEngine {
    aggregator: SalesAggregator,
}

impl RecommendationEngine {
    /// 새 추천 엔진을 생성한다
    pub fn new() -> Self {
        Self {
            aggregator: SalesAggregator::new(),
        }
    }

    // ==========================================
    // 핵심 메서드
    // ==========================================

    /// 상품 추천 목록을 생성한다 (최대 8개)
    ///
    /// # 파라미터
    /// - `records`: 대상 월의 판매 기록
    /// - `products`: 상품 카탈로그 스냅샷
    /// - `month_label`: 대상 월 레이블 ("yyyy년 MM월")
    pub fn generate_recommendations(
        &self,
        records: &[SaleRecord],
        products: &[Product],
        month_label: &str,
    ) -> Vec<Recommendation> {
        let slot_summaries = self.aggregator.aggregate_time_slots(records);
        self.compose_recommendations(records, products, &slot_summaries, month_label)
    }

    /// 월별 종합 추천 묶음을 생성한다
    pub fn build_monthly_recommendation(
        &self,
        records: &[SaleRecord],
        products: &[Product],
        month_label: &str,
    ) -> RecommendationBundle {
        let time_slot_summaries = self.aggregator.aggregate_time_slots(records);
        let recommendations =
            self.compose_recommendations(records, products, &time_slot_summaries, month_label);

        let strategy = self.build_strategy(&time_slot_summaries);
        let key_insights = self.build_key_insights(&time_slot_summaries, records);
        let action_items = self.build_action_items(&recommendations, &time_slot_summaries);

        RecommendationBundle {
            month_label: month_label.to_string(),
            strategy,
            recommendations,
            time_slot_summaries,
            key_insights,
            action_items,
            confidence_score: confidence_score(records.len()),
        }
    }

    /// 5개 생성기 결과를 순서대로 이어 붙인 뒤 8개로 자른다
    fn compose_recommendations(
        &self,
        records: &[SaleRecord],
        products: &[Product],
        slot_summaries: &[TimeSlotSummary],
        month_label: &str,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        recommendations.extend(self.trending_recommendations(records, products));
        recommendations.extend(self.time_slot_recommendations(slot_summaries, products));
        recommendations.extend(self.inventory_recommendations(products));
        recommendations.extend(self.margin_recommendations(products));
        recommendations.extend(self.seasonal_recommendations(products, month_label));
        recommendations.truncate(BUNDLE_CAP);
        recommendations
    }

    // ==========================================
    // 규칙 생성기
    // ==========================================

    /// 인기 상승 추천 (≤2)
    ///
    /// 상품명 그룹을 사전순으로 순회하며 카탈로그에 있는 상품만 대상.
    /// 일평균 수량이 기준을 초과하면 추천한다
    fn trending_recommendations(
        &self,
        records: &[SaleRecord],
        products: &[Product],
    ) -> Vec<Recommendation> {
        let mut quantity_by_product: BTreeMap<&str, i64> = BTreeMap::new();
        for record in records {
            *quantity_by_product
                .entry(record.product_name.as_str())
                .or_insert(0) += record.quantity;
        }

        let mut recommendations = Vec::new();
        for (product_name, total_quantity) in quantity_by_product {
            if recommendations.len() >= TRENDING_CAP {
                break;
            }
            let product = match products.iter().find(|p| p.name == product_name) {
                Some(product) => product,
                None => continue, // 카탈로그에 없으면 건너뛴다
            };

            let daily_average = total_quantity as f64 / TRENDING_WINDOW_DAYS;
            if daily_average > TRENDING_DAILY_AVG_THRESHOLD {
                recommendations.push(Recommendation {
                    product: product.clone(),
                    expected_sales: (daily_average * TRENDING_WEEKLY_FACTOR).round() as i64,
                    probability: (daily_average / TRENDING_PROBABILITY_DIVISOR)
                        .min(TRENDING_PROBABILITY_CAP),
                    reason: t("recommendation.reason.trending"),
                    kind: RecommendationKind::Trending,
                    time_slot: None,
                });
            }
        }
        recommendations
    }

    /// 시간대 추천 (≤2)
    ///
    /// 매출 상위 2개 시간대의 1위 인기 상품이 카탈로그에 있으면 추천한다
    fn time_slot_recommendations(
        &self,
        slot_summaries: &[TimeSlotSummary],
        products: &[Product],
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        for summary in slot_summaries.iter().take(TIME_SLOT_CAP) {
            let top_product = match summary.top_products.first() {
                Some(top_product) => top_product,
                None => continue,
            };
            let product = match products.iter().find(|p| p.name == top_product.product_name) {
                Some(product) => product,
                None => continue,
            };

            let slot_name = summary.time_slot.display_name();
            recommendations.push(Recommendation {
                product: product.clone(),
                expected_sales: (summary.total_quantity as f64 * TIME_SLOT_UPLIFT).round() as i64,
                probability: summary.sales_percentage / 100.0,
                reason: t_with_args("recommendation.reason.time_slot", &[("slot", &slot_name)]),
                kind: RecommendationKind::TimeSlot,
                time_slot: Some(summary.time_slot),
            });
        }
        recommendations
    }

    /// 재고 보충 추천 (≤2): 0 < stock < 10 인 상품, 카탈로그 순서상 앞의 2개
    fn inventory_recommendations(&self, products: &[Product]) -> Vec<Recommendation> {
        products
            .iter()
            .filter(|p| p.stock > 0 && p.stock < LOW_STOCK_BOUND)
            .take(INVENTORY_CAP)
            .map(|product| Recommendation {
                product: product.clone(),
                expected_sales: LOW_STOCK_BOUND - product.stock,
                probability: INVENTORY_PROBABILITY,
                reason: t("recommendation.reason.inventory"),
                kind: RecommendationKind::Inventory,
                time_slot: None,
            })
            .collect()
    }

    /// 고마진 추천 (≤2): 단가 7000원 초과 상품, 카탈로그 순서상 앞의 2개
    fn margin_recommendations(&self, products: &[Product]) -> Vec<Recommendation> {
        products
            .iter()
            .filter(|p| p.price > HIGH_MARGIN_PRICE)
            .take(MARGIN_CAP)
            .map(|product| Recommendation {
                product: product.clone(),
                expected_sales: MARGIN_EXPECTED_SALES,
                probability: MARGIN_PROBABILITY,
                reason: t("recommendation.reason.margin"),
                kind: RecommendationKind::Margin,
                time_slot: None,
            })
            .collect()
    }

    /// 계절 추천 (≤1): 월 레이블의 계절 키워드와 상품명이 부분 일치하는 첫 상품
    fn seasonal_recommendations(
        &self,
        products: &[Product],
        month_label: &str,
    ) -> Vec<Recommendation> {
        let season = Season::from_month(extract_month(month_label));
        products
            .iter()
            .filter(|p| {
                season
                    .product_keywords()
                    .iter()
                    .any(|keyword| p.name.contains(keyword))
            })
            .take(SEASONAL_CAP)
            .map(|product| Recommendation {
                product: product.clone(),
                expected_sales: SEASONAL_EXPECTED_SALES,
                probability: SEASONAL_PROBABILITY,
                reason: t("recommendation.reason.seasonal"),
                kind: RecommendationKind::Seasonal,
                time_slot: None,
            })
            .collect()
    }

    // ==========================================
    // 전략 / 인사이트 / 실행 항목
    // ==========================================

    /// 종합 전략 문구
    ///
    /// 시간대 요약이 없으면 데이터 부족 안내,
    /// 1위 시간대 비율이 40% 초과면 집중 전략, 아니면 분산 전략
    fn build_strategy(&self, slot_summaries: &[TimeSlotSummary]) -> String {
        let top = match slot_summaries.first() {
            Some(top) => top,
            None => return t("strategy.insufficient_data"),
        };

        if top.sales_percentage > CONCENTRATE_THRESHOLD_PCT {
            let slot_name = top.time_slot.display_name();
            let percent = (top.sales_percentage as i64).to_string();
            t_with_args(
                "strategy.concentrate",
                &[("slot", &slot_name), ("percent", &percent)],
            )
        } else {
            t("strategy.distribute")
        }
    }

    /// 핵심 인사이트 (최대 3개)
    ///
    /// 1) 가장 활발한 시간대 2) 평균 주문 금액 3) 최다 판매 카테고리.
    /// 입력이 비어 해당 항목을 만들 수 없으면 생략한다
    fn build_key_insights(
        &self,
        slot_summaries: &[TimeSlotSummary],
        records: &[SaleRecord],
    ) -> Vec<String> {
        let mut insights = Vec::new();

        if let Some(top) = slot_summaries.first() {
            let slot_name = top.time_slot.display_name();
            let percent = (top.sales_percentage as i64).to_string();
            insights.push(t_with_args(
                "insight.busiest_slot",
                &[("slot", &slot_name), ("percent", &percent)],
            ));
        }

        if !records.is_empty() {
            let total_sales: f64 = records.iter().map(|r| r.total_amount).sum();
            let average_order = total_sales / records.len() as f64;
            let amount = format_thousands(average_order as i64);
            insights.push(t_with_args("insight.average_order", &[("amount", &amount)]));
        }

        if let Some(category) = most_frequent_category(records) {
            insights.push(t_with_args("insight.top_category", &[("category", category)]));
        }

        insights
    }

    /// 실행 항목
    fn build_action_items(
        &self,
        recommendations: &[Recommendation],
        slot_summaries: &[TimeSlotSummary],
    ) -> Vec<String> {
        let mut actions = Vec::new();

        let low_stock_count = recommendations
            .iter()
            .filter(|r| r.kind == RecommendationKind::Inventory)
            .count();
        if low_stock_count > 0 {
            let count = low_stock_count.to_string();
            actions.push(t_with_args("action.restock", &[("count", &count)]));
        }

        if let Some(top) = slot_summaries.first() {
            let slot_name = top.time_slot.display_name();
            actions.push(t_with_args("action.service_quality", &[("slot", &slot_name)]));
        }

        if recommendations
            .iter()
            .any(|r| r.kind == RecommendationKind::Trending)
        {
            actions.push(t("action.promotion"));
        }

        actions
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 보조 함수
// ==========================================

/// 월 레이블("yyyy년 MM월")에서 월 숫자를 추출한다
///
/// 해석 실패 시 6을 반환한다 — 정의된 폴백이지 오류가 아니다
fn extract_month(month_label: &str) -> u32 {
    month_label
        .split_once("년 ")
        .and_then(|(_, rest)| rest.trim_end_matches('월').trim().parse::<u32>().ok())
        .unwrap_or(FALLBACK_MONTH)
}

/// 최다 판매 카테고리 (기록 건수 기준)
///
/// 동점이면 사전순으로 앞서는 카테고리를 고른다 (결정적 타이브레이크)
fn most_frequent_category(records: &[SaleRecord]) -> Option<&str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.product_category.as_str()).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (category, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((category, count)),
        }
    }
    best.map(|(category, _)| category)
}

/// 천 단위 구분 쉼표 포맷
fn format_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str, category: &str, quantity: i64, price: f64, hour: u32) -> SaleRecord {
        let sold_at = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        SaleRecord::new(
            name.to_string(),
            category.to_string(),
            quantity,
            price,
            sold_at,
        )
    }

    #[test]
    fn test_extract_month() {
        assert_eq!(extract_month("2024년 6월"), 6);
        assert_eq!(extract_month("2024년 06월"), 6);
        assert_eq!(extract_month("2024년 12월"), 12);
        // 해석 실패 → 폴백 6
        assert_eq!(extract_month("June 2024"), 6);
        assert_eq!(extract_month(""), 6);
        assert_eq!(extract_month("2024년 abc월"), 6);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(4500), "4,500");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-4500), "-4,500");
    }

    #[test]
    fn test_most_frequent_category() {
        let records = vec![
            record("아메리카노", "커피", 1, 4500.0, 9),
            record("카페라떼", "커피", 1, 5500.0, 9),
            record("치즈케이크", "디저트", 1, 8500.0, 9),
        ];
        assert_eq!(most_frequent_category(&records), Some("커피"));
    }

    #[test]
    fn test_most_frequent_category_tie_is_lexical() {
        let records = vec![
            record("아메리카노", "커피", 1, 4500.0, 9),
            record("치즈케이크", "디저트", 1, 8500.0, 9),
        ];
        // 동점이면 사전순으로 앞서는 카테고리
        assert_eq!(most_frequent_category(&records), Some("디저트"));
    }

    #[test]
    fn test_most_frequent_category_empty() {
        assert_eq!(most_frequent_category(&[]), None);
    }
}
