use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ANALYSIS: &str = "main_menu.analysis";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const ANALYSIS_HEADING: &str = "analysis.heading";
    pub const ANALYSIS_NOTE: &str = "analysis.note";
    pub const ANALYSIS_CALCULATING: &str = "analysis.calculating";

    pub const SECTION_OPERATING: &str = "section.operating";
    pub const SECTION_OWNED: &str = "section.owned";
    pub const SECTION_CAP: &str = "section.cap";
    pub const SECTION_RENTAL: &str = "section.rental";

    pub const PROMPT_DAILY_REVENUE: &str = "prompt.daily_revenue";
    pub const PROMPT_DAYS_PER_WEEK: &str = "prompt.days_per_week";
    pub const PROMPT_DAILY_KM: &str = "prompt.daily_km";
    pub const PROMPT_CAR_VALUE: &str = "prompt.car_value";
    pub const PROMPT_OPPORTUNITY_RATE: &str = "prompt.opportunity_rate";
    pub const PROMPT_DEPRECIATION_PCT: &str = "prompt.depreciation_pct";
    pub const PROMPT_INSURANCE_TAX: &str = "prompt.insurance_tax";
    pub const PROMPT_MAINTENANCE: &str = "prompt.maintenance";
    pub const PROMPT_KM_PER_LITER_OWNED: &str = "prompt.km_per_liter_owned";
    pub const CAP_NOTE: &str = "cap.note";
    pub const PROMPT_KM_CAP: &str = "prompt.km_cap";
    pub const PROMPT_WEEKLY_RENTAL: &str = "prompt.weekly_rental";
    pub const PROMPT_KM_PER_LITER_RENTED: &str = "prompt.km_per_liter_rented";
    pub const PROMPT_FUEL_PRICE: &str = "prompt.fuel_price";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_OWNED_LABEL: &str = "summary.owned_label";
    pub const SUMMARY_REVENUE_LABEL: &str = "summary.revenue_label";
    pub const SUMMARY_OPPORTUNITY_LABEL: &str = "summary.opportunity_label";
    pub const SUMMARY_RENTED_LABEL: &str = "summary.rented_label";

    pub const WARN_BOTH_UNPROFITABLE: &str = "warn.both_unprofitable";
    pub const WARN_REVIEW_ASSUMPTIONS: &str = "warn.review_assumptions";

    pub const PLAN_HEADING: &str = "plan.heading";
    pub const PLAN_OWNED_MONTHS: &str = "plan.owned_months";
    pub const PLAN_RENTED_MONTHS: &str = "plan.rented_months";
    pub const PLAN_MONTHS_SUFFIX: &str = "plan.months_suffix";
    pub const PLAN_ANNUAL_PROFIT: &str = "plan.annual_profit";

    pub const VERDICT_OWNED_DOMINANT: &str = "verdict.owned_dominant";
    pub const VERDICT_RENTAL_DOMINANT: &str = "verdict.rental_dominant";
    pub const VERDICT_MIXED: &str = "verdict.mixed";
    pub const CAP_NOT_REACHED: &str = "cap.not_reached";
    pub const CAP_NOT_SET: &str = "cap.not_set";
    pub const MIXED_USE_OWNED_UNTIL: &str = "mixed.use_owned_until";
    pub const MIXED_PROJECTED: &str = "mixed.projected";
    pub const MIXED_THEN_SWITCH: &str = "mixed.then_switch";
    pub const MIXED_NO_CAP: &str = "mixed.no_cap";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_CURRENCY: &str = "settings.current_currency";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_NOTE_RESTART: &str = "settings.note_restart";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "pt" => Some("pt-br".into()),
        "pt-br" => Some("pt-br".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("pt") => Some("pt-br".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "pt" => Some("pt-br".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pt)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "pt-br" | "pt" => parse_toml_to_map(include_str!("../locales/pt-br.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Hybrid Fleet Optimizer ===",
        MAIN_MENU_ANALYSIS => "1) 수익성 분석 및 최적화",
        MAIN_MENU_SETTINGS => "2) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ANALYSIS_HEADING => "\n-- 수익성 분석 --",
        ANALYSIS_NOTE => "비용, 감가상각, 주행 한도를 고려해 12개월 배분을 Simplex로 최적화합니다.",
        ANALYSIS_CALCULATING => "\n최적 조합을 계산하는 중...",
        SECTION_OPERATING => "\n운행 프로필:",
        SECTION_OWNED => "\n보유 차량 정보:",
        SECTION_CAP => "\n연간 주행 한도:",
        SECTION_RENTAL => "\n렌트/연료 정보:",
        PROMPT_DAILY_REVENUE => "일평균 매출: ",
        PROMPT_DAYS_PER_WEEK => "주당 근무일: ",
        PROMPT_DAILY_KM => "일평균 주행거리 [km]: ",
        PROMPT_CAR_VALUE => "차량 시장 가치: ",
        PROMPT_OPPORTUNITY_RATE => "연간 기회비용률 [%] (차량 대금을 투자했을 때 기대 수익률, 예: 10.5): ",
        PROMPT_DEPRECIATION_PCT => "연간 감가상각률 [%] (예: 15): ",
        PROMPT_INSURANCE_TAX => "연간 보험+세금 합계: ",
        PROMPT_MAINTENANCE => "월 정비비 (타이어/오일/수리): ",
        PROMPT_KM_PER_LITER_OWNED => "보유 차량 연비 [km/L]: ",
        CAP_NOTE => "차량 가치 보전을 위한 연간 km 한도를 입력하세요 (0 = 한도 없음).",
        PROMPT_KM_CAP => "보유 차량 연간 KM 한도 [예: 60000 | 0 = 없음]: ",
        PROMPT_WEEKLY_RENTAL => "주간 렌트 요금: ",
        PROMPT_KM_PER_LITER_RENTED => "렌트 차량 연비 [km/L]: ",
        PROMPT_FUEL_PRICE => "연료 단가 [통화/L]: ",
        SUMMARY_HEADING => "\n월간 추정 손익:",
        SUMMARY_OWNED_LABEL => "보유 차량:",
        SUMMARY_REVENUE_LABEL => "매출",
        SUMMARY_OPPORTUNITY_LABEL => "기회비용",
        SUMMARY_RENTED_LABEL => "렌트 차량:",
        WARN_BOTH_UNPROFITABLE => "\n경고: 두 전략 모두 월간 손실이 발생합니다.",
        WARN_REVIEW_ASSUMPTIONS => "진행 전에 매출/비용 가정을 다시 검토하세요.",
        PLAN_HEADING => "\n추천 계획 (Simplex):",
        PLAN_OWNED_MONTHS => "보유 차량:",
        PLAN_RENTED_MONTHS => "렌트 차량:",
        PLAN_MONTHS_SUFFIX => "개월",
        PLAN_ANNUAL_PROFIT => "연간 손익 추정:",
        VERDICT_OWNED_DOMINANT => "보유 전략이 우세합니다.",
        VERDICT_RENTAL_DOMINANT => "렌트 전략이 우세합니다. 보유 차량의 고정비가 수익을 초과합니다.",
        VERDICT_MIXED => "혼합 전략을 추천합니다.",
        CAP_NOT_REACHED => "연간 주행 한도에는 도달하지 않습니다.",
        CAP_NOT_SET => "연간 주행 한도는 설정되지 않았습니다.",
        MIXED_USE_OWNED_UNTIL => "보유 차량 주행 한도:",
        MIXED_PROJECTED => "예상",
        MIXED_THEN_SWITCH => "이후에는 렌트로 전환하세요.",
        MIXED_NO_CAP => "한도가 없으므로 배분은 상대 비용만으로 결정됩니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어 코드:",
        SETTINGS_CURRENT_CURRENCY => "현재 통화 기호:",
        SETTINGS_PROMPT_LANGUAGE => "새 언어 코드 (ko/en/pt-br, 엔터=유지): ",
        SETTINGS_PROMPT_CURRENCY => "새 통화 기호 (엔터=유지): ",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_NOTE_RESTART => "언어 변경은 다음 실행부터 적용됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Hybrid Fleet Optimizer ===",
        MAIN_MENU_ANALYSIS => "1) Profitability analysis & optimization",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ANALYSIS_HEADING => "\n-- Profitability Analysis --",
        ANALYSIS_NOTE => "Simplex allocation of 12 months considering costs, depreciation and a mileage cap.",
        ANALYSIS_CALCULATING => "\nComputing the best combination...",
        SECTION_OPERATING => "\nOperating profile:",
        SECTION_OWNED => "\nOwned car:",
        SECTION_CAP => "\nAnnual mileage cap:",
        SECTION_RENTAL => "\nRental & fuel:",
        PROMPT_DAILY_REVENUE => "Average daily revenue: ",
        PROMPT_DAYS_PER_WEEK => "Working days per week: ",
        PROMPT_DAILY_KM => "Average km per day: ",
        PROMPT_CAR_VALUE => "Car market value: ",
        PROMPT_OPPORTUNITY_RATE => "Annual opportunity-cost rate [%] (return if the money stayed invested, e.g. 10.5): ",
        PROMPT_DEPRECIATION_PCT => "Estimated annual depreciation [%] (e.g. 15): ",
        PROMPT_INSURANCE_TAX => "Total annual insurance + taxes: ",
        PROMPT_MAINTENANCE => "Monthly maintenance (tires/oil/repairs): ",
        PROMPT_KM_PER_LITER_OWNED => "Owned car fuel economy [km/L]: ",
        CAP_NOTE => "Enter an annual km cap to preserve resale value (0 = no cap).",
        PROMPT_KM_CAP => "Annual km cap for the owned car [e.g. 60000 | 0 = none]: ",
        PROMPT_WEEKLY_RENTAL => "Weekly rental fee: ",
        PROMPT_KM_PER_LITER_RENTED => "Rented car fuel economy [km/L]: ",
        PROMPT_FUEL_PRICE => "Fuel price [per liter]: ",
        SUMMARY_HEADING => "\nEstimated monthly profit:",
        SUMMARY_OWNED_LABEL => "Owned car:",
        SUMMARY_REVENUE_LABEL => "revenue",
        SUMMARY_OPPORTUNITY_LABEL => "opportunity cost",
        SUMMARY_RENTED_LABEL => "Rented car:",
        WARN_BOTH_UNPROFITABLE => "\nWarning: both strategies run at a monthly loss.",
        WARN_REVIEW_ASSUMPTIONS => "Review revenue and cost assumptions before proceeding.",
        PLAN_HEADING => "\nSuggested plan (Simplex):",
        PLAN_OWNED_MONTHS => "Owned car:",
        PLAN_RENTED_MONTHS => "Rented car:",
        PLAN_MONTHS_SUFFIX => " months",
        PLAN_ANNUAL_PROFIT => "Estimated annual profit:",
        VERDICT_OWNED_DOMINANT => "The owned strategy dominates.",
        VERDICT_RENTAL_DOMINANT => "Rental dominates. Fixed costs of the owned car exceed its profit.",
        VERDICT_MIXED => "A mixed strategy is recommended.",
        CAP_NOT_REACHED => "The annual mileage cap is not reached.",
        CAP_NOT_SET => "No annual mileage cap was given.",
        MIXED_USE_OWNED_UNTIL => "Use the owned car up to",
        MIXED_PROJECTED => "projected",
        MIXED_THEN_SWITCH => "Then switch to the rental.",
        MIXED_NO_CAP => "Without a cap, the split is driven purely by relative costs.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language code:",
        SETTINGS_CURRENT_CURRENCY => "Current currency symbol:",
        SETTINGS_PROMPT_LANGUAGE => "New language code (ko/en/pt-br, enter=keep): ",
        SETTINGS_PROMPT_CURRENCY => "New currency symbol (enter=keep): ",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_NOTE_RESTART => "Language changes take effect on the next run.",
        _ => return None,
    })
}
