// ==========================================
// 샘플 데이터 생성기
// ==========================================
// 용도: 최근 6개월치 결정적(재현 가능) 샘플 판매 기록과
//       상품 카탈로그를 로컬 데이터베이스에 적재한다
// 사용: generate_sample_data [db_path]
// ==========================================

use chrono::{Datelike, Local, Months, NaiveDate};
use std::sync::{Arc, Mutex};

use store_insight::app::get_default_db_path;
use store_insight::db;
use store_insight::domain::product::Product;
use store_insight::domain::sales::SaleRecord;
use store_insight::repository::{ProductRepository, SalesRecordRepository};

// 샘플 카탈로그: (상품명, 카테고리, 단가, 재고)
const SAMPLE_PRODUCTS: &[(&str, &str, f64, i64)] = &[
    ("아메리카노", "커피", 4500.0, 50),
    ("카페라떼", "커피", 5500.0, 40),
    ("카푸치노", "커피", 6000.0, 30),
    ("치즈케이크", "디저트", 8500.0, 20),
    ("크로와상", "디저트", 4500.0, 8),
    ("클럽샌드위치", "브런치", 12000.0, 15),
    ("레몬에이드", "음료", 5000.0, 25),
    ("텀블러", "굿즈", 15000.0, 5),
];

// 판매가 발생하는 시각 (모닝/런치/애프터눈/이브닝 + 기타)
const SAMPLE_HOURS: &[u32] = &[9, 12, 15, 18, 20];

fn main() -> anyhow::Result<()> {
    store_insight::logging::init();

    let db_path = std::env::args().nth(1).unwrap_or_else(get_default_db_path);
    tracing::info!("샘플 데이터 생성: {}", db_path);

    let conn = db::open_connection(&db_path)?;
    db::init_schema(&conn)?;
    let conn = Arc::new(Mutex::new(conn));

    let record_repo = SalesRecordRepository::from_connection(conn.clone());
    let product_repo = ProductRepository::from_connection(conn);

    // 1. 상품 카탈로그
    let products: Vec<Product> = SAMPLE_PRODUCTS
        .iter()
        .map(|(name, category, price, stock)| {
            Product::new(name.to_string(), *price, category.to_string(), *stock)
        })
        .collect();
    let seeded = product_repo.upsert_batch(&products)?;
    tracing::info!(seeded, "상품 카탈로그 적재 완료");

    // 2. 최근 6개월 판매 기록 (내용은 날짜 외 결정적)
    let anchor = Local::now().date_naive();
    let mut total = 0usize;

    for month_offset in 0..6u32 {
        let month_start = anchor
            .with_day(1)
            .and_then(|d| d.checked_sub_months(Months::new(month_offset)))
            .unwrap_or(anchor);

        let mut records = Vec::new();
        for day in (1..=28u32).step_by(2) {
            let date = NaiveDate::from_ymd_opt(month_start.year(), month_start.month(), day)
                .unwrap_or(month_start);
            for (slot_index, hour) in SAMPLE_HOURS.iter().enumerate() {
                let product_index =
                    (day as usize + slot_index * 3 + month_offset as usize) % SAMPLE_PRODUCTS.len();
                let (name, category, price, _) = SAMPLE_PRODUCTS[product_index];
                let quantity = 1 + (day % 3) as i64;

                let sold_at = date.and_hms_opt(*hour, 30, 0).unwrap_or_else(|| {
                    date.and_hms_opt(12, 0, 0).unwrap()
                });
                records.push(SaleRecord::new(
                    name.to_string(),
                    category.to_string(),
                    quantity,
                    price,
                    sold_at,
                ));
            }
        }

        total += record_repo.insert_batch(&records)?;
    }

    tracing::info!(total, "판매 기록 적재 완료");
    Ok(())
}
