use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::finance::{self, OperatingProfile};
use crate::i18n::{keys, Translator};
use crate::optimizer::{self, PlanOutcome, StrategyPlan, Verdict};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Analysis,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ANALYSIS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Analysis),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 수익성 분석 메뉴를 처리한다: 프로필 수집 → 월간 손익 → 12개월 배분 최적화.
pub fn handle_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ANALYSIS_HEADING));
    println!("{}", tr.t(keys::ANALYSIS_NOTE));

    let profile = collect_profile(tr)?;
    profile.validate().map_err(AppError::Model)?;

    println!("{}", tr.t(keys::ANALYSIS_CALCULATING));
    let owned = finance::owned_monthly(&profile).map_err(AppError::Model)?;
    let rented = finance::rented_monthly(&profile).map_err(AppError::Model)?;

    let sym = cfg.currency_symbol.as_str();
    println!("{}", tr.t(keys::SUMMARY_HEADING));
    println!(
        "{} {} ({} {}, {} {})",
        tr.t(keys::SUMMARY_OWNED_LABEL),
        format_currency(sym, owned.profit),
        tr.t(keys::SUMMARY_REVENUE_LABEL),
        format_currency(sym, profile.monthly_revenue()),
        tr.t(keys::SUMMARY_OPPORTUNITY_LABEL),
        format_currency(sym, owned.opportunity_cost),
    );
    println!(
        "{} {}",
        tr.t(keys::SUMMARY_RENTED_LABEL),
        format_currency(sym, rented.profit),
    );

    match optimizer::plan(&profile)? {
        PlanOutcome::BothUnprofitable => {
            println!("{}", tr.t(keys::WARN_BOTH_UNPROFITABLE));
            println!("{}", tr.t(keys::WARN_REVIEW_ASSUMPTIONS));
        }
        PlanOutcome::Recommended(plan) => print_plan(tr, cfg, &profile, &plan),
    }
    Ok(())
}

/// 프로필 입력을 원본 순서대로 수집한다: 운행 → 보유 차량 → 주행 한도 → 렌트/연료.
fn collect_profile(tr: &Translator) -> Result<OperatingProfile, AppError> {
    println!("{}", tr.t(keys::SECTION_OPERATING));
    let daily_revenue = read_f64(tr, keys::PROMPT_DAILY_REVENUE)?;
    let days_per_week = read_f64(tr, keys::PROMPT_DAYS_PER_WEEK)?;
    let daily_km = read_f64(tr, keys::PROMPT_DAILY_KM)?;

    println!("{}", tr.t(keys::SECTION_OWNED));
    let car_value = read_f64(tr, keys::PROMPT_CAR_VALUE)?;
    let opportunity_cost_pct_annual = read_f64(tr, keys::PROMPT_OPPORTUNITY_RATE)?;
    let annual_depreciation_pct = read_f64(tr, keys::PROMPT_DEPRECIATION_PCT)?;
    let annual_insurance_tax = read_f64(tr, keys::PROMPT_INSURANCE_TAX)?;
    let monthly_maintenance = read_f64(tr, keys::PROMPT_MAINTENANCE)?;
    let km_per_liter_owned = read_f64(tr, keys::PROMPT_KM_PER_LITER_OWNED)?;

    println!("{}", tr.t(keys::SECTION_CAP));
    println!("{}", tr.t(keys::CAP_NOTE));
    let annual_km_cap_owned = read_f64(tr, keys::PROMPT_KM_CAP)?;

    println!("{}", tr.t(keys::SECTION_RENTAL));
    let weekly_rental_fee = read_f64(tr, keys::PROMPT_WEEKLY_RENTAL)?;
    let km_per_liter_rented = read_f64(tr, keys::PROMPT_KM_PER_LITER_RENTED)?;
    let fuel_price_per_liter = read_f64(tr, keys::PROMPT_FUEL_PRICE)?;

    Ok(OperatingProfile {
        daily_revenue,
        days_per_week,
        daily_km,
        car_value,
        annual_depreciation_pct,
        annual_insurance_tax,
        monthly_maintenance,
        km_per_liter_owned,
        opportunity_cost_pct_annual,
        annual_km_cap_owned,
        weekly_rental_fee,
        km_per_liter_rented,
        fuel_price_per_liter,
    })
}

/// 최적화 결과를 서사 분기에 맞춰 출력한다.
fn print_plan(tr: &Translator, cfg: &Config, profile: &OperatingProfile, plan: &StrategyPlan) {
    println!("{}", tr.t(keys::PLAN_HEADING));
    println!(
        "{} {:.1}{}",
        tr.t(keys::PLAN_OWNED_MONTHS),
        plan.months_owned,
        tr.t(keys::PLAN_MONTHS_SUFFIX),
    );
    println!(
        "{} {:.1}{}",
        tr.t(keys::PLAN_RENTED_MONTHS),
        plan.months_rented,
        tr.t(keys::PLAN_MONTHS_SUFFIX),
    );
    println!(
        "{} {}",
        tr.t(keys::PLAN_ANNUAL_PROFIT),
        format_currency(&cfg.currency_symbol, plan.annual_profit),
    );

    match plan.verdict {
        Verdict::OwnedDominant => {
            println!("{}", tr.t(keys::VERDICT_OWNED_DOMINANT));
            if profile.has_km_cap() {
                println!("{}", tr.t(keys::CAP_NOT_REACHED));
            } else {
                println!("{}", tr.t(keys::CAP_NOT_SET));
            }
        }
        Verdict::RentalDominant => {
            println!("{}", tr.t(keys::VERDICT_RENTAL_DOMINANT));
        }
        Verdict::Mixed => {
            println!("{}", tr.t(keys::VERDICT_MIXED));
            if profile.has_km_cap() {
                println!(
                    "{} {:.0} km ({} {:.0} km). {}",
                    tr.t(keys::MIXED_USE_OWNED_UNTIL),
                    profile.annual_km_cap_owned,
                    tr.t(keys::MIXED_PROJECTED),
                    plan.projected_owned_km,
                    tr.t(keys::MIXED_THEN_SWITCH),
                );
            } else {
                println!("{}", tr.t(keys::MIXED_NO_CAP));
            }
        }
    }
}

/// 설정 메뉴를 처리한다. 빈 입력은 기존 값을 유지한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_CURRENCY),
        cfg.currency_symbol
    );

    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    if !lang.trim().is_empty() {
        cfg.language = lang.trim().to_string();
    }
    let symbol = read_line(tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
    if !symbol.trim().is_empty() {
        cfg.currency_symbol = symbol.trim().to_string();
    }

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    println!("{}", tr.t(keys::SETTINGS_NOTE_RESTART));
    Ok(())
}

/// 소수점 입력을 해석한다. 쉼표/마침표 둘 다 소수 구분자로 허용한다.
pub fn parse_decimal(input: &str) -> Option<f64> {
    input.trim().replace(',', ".").parse::<f64>().ok()
}

/// 통화 값을 두 자리 소수와 기호로 표시한다 (표시용, 계산과 무관).
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{symbol} {value:.2}")
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 숫자가 들어올 때까지 같은 항목을 다시 묻는다.
fn read_f64(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match parse_decimal(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
