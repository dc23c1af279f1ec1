// ==========================================
// 국제화 (i18n) 모듈
// ==========================================
// rust-i18n 라이브러리 사용
// 한국어(기본)와 영어 지원
// ==========================================
// 참고: rust_i18n::i18n! 매크로는 lib.rs 에서 초기화된다
// ==========================================

/// 현재 언어를 반환한다
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 언어를 설정한다
///
/// # 파라미터
/// - locale: 언어 코드 ("ko" 또는 "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 메시지를 번역한다 (파라미터 없음)
///
/// # 예시
/// ```no_run
/// use store_insight::i18n::t;
/// let msg = t("strategy.distribute");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 메시지를 번역한다 (파라미터 포함)
///
/// # 예시
/// ```no_run
/// use store_insight::i18n::t_with_args;
/// let msg = t_with_args("action.restock", &[("count", "2")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
