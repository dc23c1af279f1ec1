// ==========================================
// 매장 인사이트 - 판매 기록 CSV 가져오기
// ==========================================
// 책임: POS 내보내기 CSV → SaleRecord 일괄 등록
// 원칙: 잘못된 행은 건너뛰고 행 번호와 함께 오류로 수집한다
//       (파일 전체를 실패시키지 않는다)
// ==========================================
// 헤더: product_name,product_category,quantity,unit_price,
//       total_amount,sold_at,hour_of_day
// total_amount / hour_of_day 는 비워 둘 수 있다 (생성 시점 값으로 대체)
// ==========================================

use crate::domain::sales::SaleRecord;
use crate::repository::{RepositoryError, RepositoryResult, SalesRecordRepository};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 허용하는 sold_at 포맷
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// CSV 원시 행
#[derive(Debug, Deserialize)]
struct CsvSaleRow {
    product_name: String,
    product_category: String,
    quantity: i64,
    unit_price: f64,
    #[serde(default)]
    total_amount: Option<f64>,
    sold_at: String,
    #[serde(default)]
    hour_of_day: Option<u32>,
}

/// 가져오기 결과 보고서
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    /// 등록된 건수
    pub imported: usize,
    /// 건너뛴 행 수
    pub skipped: usize,
    /// 행 번호가 붙은 오류 메시지
    pub errors: Vec<String>,
}

/// 판매 기록 CSV 가져오기
pub struct SalesCsvImporter {
    repo: Arc<SalesRecordRepository>,
}

impl SalesCsvImporter {
    pub fn new(repo: Arc<SalesRecordRepository>) -> Self {
        Self { repo }
    }

    /// CSV 파일을 읽어 판매 기록으로 등록한다
    ///
    /// # 반환
    /// - Ok(ImportReport): 등록/건너뜀 건수와 행별 오류
    /// - Err: 파일을 열 수 없거나 일괄 등록이 실패한 경우
    pub fn import_file(&self, path: &str) -> RepositoryResult<ImportReport> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            RepositoryError::ValidationError(format!("CSV 파일을 열 수 없습니다: {}", e))
        })?;

        let mut records = Vec::new();
        let mut errors = Vec::new();

        for (index, row) in reader.deserialize::<CsvSaleRow>().enumerate() {
            // 헤더가 1행이므로 데이터는 2행부터
            let line = index + 2;
            match row {
                Ok(row) => match row_to_record(row) {
                    Ok(record) => records.push(record),
                    Err(message) => errors.push(format!("{}행: {}", line, message)),
                },
                Err(e) => errors.push(format!("{}행: {}", line, e)),
            }
        }

        let imported = self.repo.insert_batch(&records)?;
        tracing::info!(
            imported,
            skipped = errors.len(),
            "판매 기록 CSV 가져오기 완료"
        );

        Ok(ImportReport {
            imported,
            skipped: errors.len(),
            errors,
        })
    }
}

/// 원시 행을 검증해 SaleRecord 로 변환한다
fn row_to_record(row: CsvSaleRow) -> Result<SaleRecord, String> {
    if row.product_name.trim().is_empty() {
        return Err("상품명이 비어 있습니다".to_string());
    }
    if row.product_category.trim().is_empty() {
        return Err("카테고리가 비어 있습니다".to_string());
    }
    if row.quantity <= 0 {
        return Err(format!("수량이 잘못되었습니다: {}", row.quantity));
    }
    if row.unit_price < 0.0 {
        return Err(format!("단가가 잘못되었습니다: {}", row.unit_price));
    }

    let sold_at = parse_datetime(&row.sold_at)
        .ok_or_else(|| format!("판매 시각을 해석할 수 없습니다: {}", row.sold_at))?;

    let mut record = SaleRecord::new(
        row.product_name.trim().to_string(),
        row.product_category.trim().to_string(),
        row.quantity,
        row.unit_price,
        sold_at,
    );

    // CSV 가 기록 당시의 값을 들고 있으면 그 값을 신뢰한다
    if let Some(total_amount) = row.total_amount {
        if total_amount < 0.0 {
            return Err(format!("합계 금액이 잘못되었습니다: {}", total_amount));
        }
        record.total_amount = total_amount;
    }
    if let Some(hour_of_day) = row.hour_of_day {
        if hour_of_day > 23 {
            return Err(format!("시각이 잘못되었습니다: {}", hour_of_day));
        }
        record.hour_of_day = hour_of_day;
    }

    Ok(record)
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
}
