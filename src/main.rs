// ==========================================
// 매장 인사이트 - 메인 진입점
// ==========================================
// 로컬 데이터베이스의 판매 기록을 분석해
// 월별 요약과 최신 월의 추천 묶음을 출력한다
// ==========================================

use store_insight::app::{get_default_db_path, AppState};
use store_insight::{i18n, logging};

fn main() -> anyhow::Result<()> {
    logging::init();
    i18n::set_locale("ko");

    tracing::info!("==================================================");
    tracing::info!("{} - 판매 분석/추천 엔진", store_insight::APP_NAME);
    tracing::info!("시스템 버전: {}", store_insight::VERSION);
    tracing::info!("==================================================");

    let db_path = get_default_db_path();
    tracing::info!("데이터베이스: {}", db_path);

    let state = AppState::new(db_path)?;

    let summaries = state.sales_api.monthly_summaries()?;
    if summaries.is_empty() {
        tracing::warn!("판매 기록이 없습니다. generate_sample_data 로 샘플 데이터를 생성할 수 있습니다");
        return Ok(());
    }

    for summary in &summaries {
        tracing::info!(
            month = %summary.month_label,
            total_sales = summary.total_sales,
            total_quantity = summary.total_quantity,
            products = summary.product_sales.len(),
            "월별 매출 요약"
        );
    }

    // 최신 월의 추천 묶음
    let latest = &summaries[0];
    let bundle = state
        .recommendation_api
        .monthly_recommendation(&latest.month_key)?;

    tracing::info!("[{}] 전략: {}", bundle.month_label, bundle.strategy);
    for insight in &bundle.key_insights {
        tracing::info!("인사이트: {}", insight);
    }
    for action in &bundle.action_items {
        tracing::info!("실행 항목: {}", action);
    }
    tracing::info!("신뢰도 점수: {:.2}", bundle.confidence_score);

    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}
