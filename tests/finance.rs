use hybrid_fleet_optimizer::finance::{self, OperatingProfile};

fn sample_profile() -> OperatingProfile {
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
        annual_km_cap_owned: 0.0,
        weekly_rental_fee: 600.0,
        km_per_liter_rented: 10.0,
        fuel_price_per_liter: 5.8,
    }
}

#[test]
fn monthly_km_and_revenue_formulas() {
    let p = sample_profile();
    assert!((p.monthly_km() - 72.0 * 6.0 * 4.33).abs() < 1e-9);
    assert!((p.monthly_km() - 1870.56).abs() < 1e-6);
    assert!((p.monthly_revenue() - 6495.0).abs() < 1e-6);
}

#[test]
fn profit_plus_cost_equals_revenue() {
    let p = sample_profile();
    let owned = finance::owned_monthly(&p).expect("owned breakdown");
    let rented = finance::rented_monthly(&p).expect("rented breakdown");
    assert!((owned.profit + owned.total_cost - p.monthly_revenue()).abs() < 1e-9);
    assert!((rented.profit + rented.total_cost - p.monthly_revenue()).abs() < 1e-9);
}

#[test]
fn owned_breakdown_matches_worked_example() {
    let p = sample_profile();
    let owned = finance::owned_monthly(&p).expect("owned breakdown");
    assert!(
        (owned.fuel_cost - 904.104).abs() < 1e-6,
        "fuel={}",
        owned.fuel_cost
    );
    assert!((owned.insurance_tax - 250.0).abs() < 1e-9);
    assert!((owned.depreciation - 750.0).abs() < 1e-9);
    assert!((owned.opportunity_cost - 500.0).abs() < 1e-9);
    assert!((owned.maintenance - 400.0).abs() < 1e-9);
    assert!(
        (owned.total_cost - 2804.104).abs() < 1e-6,
        "total={}",
        owned.total_cost
    );
    assert!(
        (owned.profit - 3690.896).abs() < 1e-6,
        "profit={}",
        owned.profit
    );
}

#[test]
fn rented_breakdown_matches_worked_example() {
    let p = sample_profile();
    let rented = finance::rented_monthly(&p).expect("rented breakdown");
    assert!(
        (rented.fuel_cost - 1084.9248).abs() < 1e-6,
        "fuel={}",
        rented.fuel_cost
    );
    assert!((rented.rental_fee - 2598.0).abs() < 1e-6);
    assert!(
        (rented.profit - 2812.0752).abs() < 1e-6,
        "profit={}",
        rented.profit
    );
}

#[test]
fn non_positive_fuel_economy_is_rejected() {
    let mut p = sample_profile();
    p.km_per_liter_owned = 0.0;
    assert!(p.validate().is_err());
    assert!(finance::owned_monthly(&p).is_err());

    let mut p = sample_profile();
    p.km_per_liter_rented = -1.0;
    assert!(p.validate().is_err());
    assert!(finance::rented_monthly(&p).is_err());

    let p = sample_profile();
    assert!(p.validate().is_ok());
}
