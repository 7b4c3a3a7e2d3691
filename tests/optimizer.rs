use hybrid_fleet_optimizer::finance::OperatingProfile;
use hybrid_fleet_optimizer::optimizer::{self, PlanOutcome, StrategyPlan, Verdict};

fn profitable_profile(annual_km_cap_owned: f64) -> OperatingProfile {
    OperatingProfile {
        daily_revenue: 250.0,
        days_per_week: 6.0,
        daily_km: 72.0,
        car_value: 60000.0,
        annual_depreciation_pct: 15.0,
        annual_insurance_tax: 3000.0,
        monthly_maintenance: 400.0,
        km_per_liter_owned: 12.0,
        opportunity_cost_pct_annual: 10.0,
        annual_km_cap_owned,
        weekly_rental_fee: 600.0,
        km_per_liter_rented: 10.0,
        fuel_price_per_liter: 5.8,
    }
}

fn recommended(outcome: PlanOutcome) -> StrategyPlan {
    match outcome {
        PlanOutcome::Recommended(plan) => plan,
        PlanOutcome::BothUnprofitable => panic!("expected a recommendation"),
    }
}

#[test]
fn both_unprofitable_skips_the_solver() {
    let mut p = profitable_profile(0.0);
    p.daily_revenue = 0.0;
    let outcome = optimizer::plan(&p).expect("plan");
    assert!(matches!(outcome, PlanOutcome::BothUnprofitable));
}

#[test]
fn cap_controls_constraint_count() {
    let p = profitable_profile(0.0);
    assert_eq!(optimizer::build_problem(&p, 1.0, 1.0).constraints.len(), 1);
    let p = profitable_profile(60000.0);
    assert_eq!(optimizer::build_problem(&p, 1.0, 1.0).constraints.len(), 2);
}

#[test]
fn without_cap_the_better_strategy_takes_all_twelve_months() {
    let p = profitable_profile(0.0);
    let plan = recommended(optimizer::plan(&p).expect("plan"));
    assert!((plan.months_owned - 12.0).abs() < 1e-9, "x1={}", plan.months_owned);
    assert!(plan.months_rented.abs() < 1e-9);
    assert_eq!(plan.verdict, Verdict::OwnedDominant);
    // 12 × monthly profit of the owned strategy
    assert!(
        (plan.annual_profit - 12.0 * 3690.896).abs() < 1e-3,
        "annual={}",
        plan.annual_profit
    );
}

#[test]
fn rental_dominates_when_owned_fixed_costs_are_too_high() {
    let mut p = profitable_profile(0.0);
    p.car_value = 1_000_000.0;
    let plan = recommended(optimizer::plan(&p).expect("plan"));
    assert!((plan.months_rented - 12.0).abs() < 1e-9, "x2={}", plan.months_rented);
    assert_eq!(plan.verdict, Verdict::RentalDominant);
}

#[test]
fn non_binding_cap_matches_the_uncapped_solution() {
    // monthly_km * 12 = 22446.72 < 30000
    let p = profitable_profile(30000.0);
    let plan = recommended(optimizer::plan(&p).expect("plan"));
    assert!((plan.months_owned - 12.0).abs() < 1e-9);
    assert_eq!(plan.verdict, Verdict::OwnedDominant);
}

#[test]
fn binding_cap_yields_the_predicted_split() {
    let p = profitable_profile(10000.0);
    let plan = recommended(optimizer::plan(&p).expect("plan"));
    let expected_x1 = 10000.0 / p.monthly_km();
    assert!(
        (plan.months_owned - expected_x1).abs() < 1e-9,
        "x1={} expected={}",
        plan.months_owned,
        expected_x1
    );
    assert!((plan.months_rented - (12.0 - expected_x1)).abs() < 1e-9);
    assert_eq!(plan.verdict, Verdict::Mixed);
    assert!((plan.projected_owned_km - 10000.0).abs() < 1e-6);
    let expected_profit = expected_x1 * 3690.896 + (12.0 - expected_x1) * 2812.0752;
    assert!(
        (plan.annual_profit - expected_profit).abs() < 1e-3,
        "annual={} expected={}",
        plan.annual_profit,
        expected_profit
    );
}

#[test]
fn dominance_band_treats_near_twelve_as_owned_dominant() {
    // cap pinning x1 just above the 11.9-month band → still "owned dominates"
    let p0 = profitable_profile(0.0);
    let p = profitable_profile(11.95 * p0.monthly_km());
    let plan = recommended(optimizer::plan(&p).expect("plan"));
    assert!((plan.months_owned - 11.95).abs() < 1e-6);
    assert_eq!(plan.verdict, Verdict::OwnedDominant);

    // and just below the band → a genuine mix
    let p = profitable_profile(11.5 * p0.monthly_km());
    let plan = recommended(optimizer::plan(&p).expect("plan"));
    assert!((plan.months_owned - 11.5).abs() < 1e-6);
    assert_eq!(plan.verdict, Verdict::Mixed);
}
