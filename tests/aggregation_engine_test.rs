// ==========================================
// SalesAggregator 단위 테스트
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use store_insight::domain::sales::SaleRecord;
use store_insight::domain::types::TimeSlot;
use store_insight::engine::SalesAggregator;

// ==========================================
// 테스트 보조 함수
// ==========================================

fn sold_at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn record(name: &str, category: &str, quantity: i64, price: f64, h: u32) -> SaleRecord {
    SaleRecord::new(
        name.to_string(),
        category.to_string(),
        quantity,
        price,
        sold_at(2024, 6, 15, h),
    )
}

fn record_on(
    name: &str,
    category: &str,
    quantity: i64,
    price: f64,
    y: i32,
    m: u32,
    d: u32,
    h: u32,
) -> SaleRecord {
    SaleRecord::new(
        name.to_string(),
        category.to_string(),
        quantity,
        price,
        sold_at(y, m, d, h),
    )
}

// ==========================================
// 시간대별 집계
// ==========================================

#[test]
fn test_single_morning_record_scenario() {
    let aggregator = SalesAggregator::new();
    let records = vec![record("아메리카노", "커피", 3, 4500.0, 9)];

    let summaries = aggregator.aggregate_time_slots(&records);
    assert_eq!(summaries.len(), 1);

    let morning = &summaries[0];
    assert_eq!(morning.time_slot, TimeSlot::Morning);
    assert_eq!(morning.total_sales, 13500.0);
    assert_eq!(morning.total_quantity, 3);
    assert_eq!(morning.average_order_value, 4500.0);
    assert_eq!(morning.sales_percentage, 100.0);
    assert_eq!(morning.top_products.len(), 1);
    assert_eq!(morning.top_products[0].product_name, "아메리카노");
}

#[test]
fn test_empty_records_returns_empty() {
    let aggregator = SalesAggregator::new();
    assert!(aggregator.aggregate_time_slots(&[]).is_empty());
    assert!(aggregator.aggregate_monthly(&[]).is_empty());
}

#[test]
fn test_other_slot_excluded_but_in_denominator() {
    let aggregator = SalesAggregator::new();
    let records = vec![
        record("아메리카노", "커피", 1, 100.0, 9),  // 모닝
        record("아메리카노", "커피", 1, 100.0, 22), // 기타 (제외)
    ];

    let summaries = aggregator.aggregate_time_slots(&records);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].time_slot, TimeSlot::Morning);
    // 분모는 기타 포함 전체 매출
    assert_eq!(summaries[0].sales_percentage, 50.0);

    // 시간대 매출 합 ≤ 전체 매출, 기타 기록이 있으므로 strict
    let slot_total: f64 = summaries.iter().map(|s| s.total_sales).sum();
    let grand_total: f64 = records.iter().map(|r| r.total_amount).sum();
    assert!(slot_total < grand_total);
}

#[test]
fn test_slot_sales_sum_equals_total_without_other() {
    let aggregator = SalesAggregator::new();
    let records = vec![
        record("아메리카노", "커피", 2, 4500.0, 9),
        record("카페라떼", "커피", 1, 5500.0, 12),
        record("치즈케이크", "디저트", 1, 8500.0, 18),
    ];

    let summaries = aggregator.aggregate_time_slots(&records);
    let slot_total: f64 = summaries.iter().map(|s| s.total_sales).sum();
    let grand_total: f64 = records.iter().map(|r| r.total_amount).sum();
    assert!((slot_total - grand_total).abs() < 1e-9);
}

#[test]
fn test_sorted_desc_by_total_sales() {
    let aggregator = SalesAggregator::new();
    let records = vec![
        record("아메리카노", "커피", 1, 1000.0, 9),  // 모닝 1000
        record("카페라떼", "커피", 1, 3000.0, 12),   // 런치 3000
        record("치즈케이크", "디저트", 1, 2000.0, 15), // 애프터눈 2000
    ];

    let summaries = aggregator.aggregate_time_slots(&records);
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0].time_slot, TimeSlot::Lunch);
    assert_eq!(summaries[1].time_slot, TimeSlot::Afternoon);
    assert_eq!(summaries[2].time_slot, TimeSlot::Morning);
    for pair in summaries.windows(2) {
        assert!(pair[0].total_sales >= pair[1].total_sales);
    }
}

#[test]
fn test_tie_broken_by_slot_declaration_order() {
    let aggregator = SalesAggregator::new();
    let records = vec![
        record("치즈케이크", "디저트", 1, 2000.0, 15), // 애프터눈
        record("아메리카노", "커피", 1, 2000.0, 9),    // 모닝 (동점)
    ];

    let summaries = aggregator.aggregate_time_slots(&records);
    assert_eq!(summaries[0].time_slot, TimeSlot::Morning);
    assert_eq!(summaries[1].time_slot, TimeSlot::Afternoon);
}

#[test]
fn test_top_products_limited_to_three_desc() {
    let aggregator = SalesAggregator::new();
    let records = vec![
        record("아메리카노", "커피", 1, 1000.0, 9),
        record("카페라떼", "커피", 1, 4000.0, 9),
        record("카푸치노", "커피", 1, 3000.0, 9),
        record("치즈케이크", "디저트", 1, 2000.0, 9),
    ];

    let summaries = aggregator.aggregate_time_slots(&records);
    let top = &summaries[0].top_products;
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].product_name, "카페라떼");
    assert_eq!(top[1].product_name, "카푸치노");
    assert_eq!(top[2].product_name, "치즈케이크");
}

#[test]
fn test_unit_price_from_first_record() {
    let aggregator = SalesAggregator::new();
    // 같은 상품이 다른 단가로 두 번 기록 — 처음 만난 단가를 쓴다
    let records = vec![
        record_on("아메리카노", "커피", 1, 4500.0, 2024, 6, 1, 9),
        record_on("아메리카노", "커피", 1, 5000.0, 2024, 6, 2, 9),
    ];

    let summaries = aggregator.aggregate_time_slots(&records);
    let top = &summaries[0].top_products[0];
    assert_eq!(top.unit_price, 4500.0);
    assert_eq!(top.quantity, 2);
    assert_eq!(top.total_amount, 9500.0);
}

#[test]
fn test_zero_quantity_average_order_value_is_zero() {
    let aggregator = SalesAggregator::new();
    // 수량 0 → 금액 0, 평균 주문 금액은 0으로 단락
    let records = vec![record("텀블러", "굿즈", 0, 15000.0, 9)];

    let summaries = aggregator.aggregate_time_slots(&records);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].average_order_value, 0.0);
    assert_eq!(summaries[0].sales_percentage, 0.0);
}

// ==========================================
// 월별 집계
// ==========================================

#[test]
fn test_monthly_groups_and_sorts_desc_by_month() {
    let aggregator = SalesAggregator::new();
    let records = vec![
        record_on("아메리카노", "커피", 2, 4500.0, 2024, 5, 10, 9),
        record_on("카페라떼", "커피", 1, 5500.0, 2024, 6, 1, 12),
        record_on("아메리카노", "커피", 1, 4500.0, 2024, 6, 2, 9),
    ];

    let summaries = aggregator.aggregate_monthly(&records);
    assert_eq!(summaries.len(), 2);
    // 최신 월 먼저
    assert_eq!(summaries[0].month_key, "2024-06");
    assert_eq!(summaries[0].month_label, "2024년 06월");
    assert_eq!(summaries[1].month_key, "2024-05");

    let june = &summaries[0];
    assert_eq!(june.total_sales, 10000.0);
    assert_eq!(june.total_quantity, 2);
    // 매출액 내림차순
    assert_eq!(june.product_sales[0].product_name, "카페라떼");
    assert_eq!(june.product_sales[1].product_name, "아메리카노");
}

#[test]
fn test_monthly_category_distinct_product_count() {
    let aggregator = SalesAggregator::new();
    let records = vec![
        record("아메리카노", "커피", 1, 4500.0, 9),
        record("아메리카노", "커피", 2, 4500.0, 12),
        record("카페라떼", "커피", 1, 5500.0, 9),
        record("치즈케이크", "디저트", 1, 8500.0, 15),
    ];

    let summaries = aggregator.aggregate_monthly(&records);
    assert_eq!(summaries.len(), 1);

    let categories = &summaries[0].category_sales;
    assert_eq!(categories[0].category, "커피");
    assert_eq!(categories[0].product_count, 2);
    assert_eq!(categories[0].quantity, 4);
    assert_eq!(categories[1].category, "디저트");
    assert_eq!(categories[1].product_count, 1);
}

// ==========================================
// 현재 시간대 조회
// ==========================================

#[test]
fn test_current_slot_summary() {
    let aggregator = SalesAggregator::new();
    let records = vec![record("아메리카노", "커피", 3, 4500.0, 9)];

    // 모닝 시각 → 모닝 요약
    let morning = aggregator.current_slot_summary(&records, 8);
    assert_eq!(morning.unwrap().time_slot, TimeSlot::Morning);

    // 기타 시각 → None
    assert!(aggregator.current_slot_summary(&records, 23).is_none());

    // 기록 없는 시간대 → None
    assert!(aggregator.current_slot_summary(&records, 12).is_none());
}
