use super::profile::{OperatingProfile, ProfileError, WEEKS_PER_MONTH};

/// 보유 전략의 월간 손익 분해.
#[derive(Debug, Clone)]
pub struct OwnedMonthly {
    /// 연료비
    pub fuel_cost: f64,
    /// 정비비
    pub maintenance: f64,
    /// 보험+세금 월할
    pub insurance_tax: f64,
    /// 감가상각 월할
    pub depreciation: f64,
    /// 기회비용 월할
    pub opportunity_cost: f64,
    /// 월 총비용
    pub total_cost: f64,
    /// 월 손익 (매출 - 총비용)
    pub profit: f64,
}

/// 렌트 전략의 월간 손익 분해.
#[derive(Debug, Clone)]
pub struct RentedMonthly {
    /// 연료비
    pub fuel_cost: f64,
    /// 렌트 요금 월할
    pub rental_fee: f64,
    /// 월 총비용
    pub total_cost: f64,
    /// 월 손익 (매출 - 총비용)
    pub profit: f64,
}

/// 보유 전략의 월간 비용/손익을 계산한다.
pub fn owned_monthly(profile: &OperatingProfile) -> Result<OwnedMonthly, ProfileError> {
    if profile.km_per_liter_owned <= 0.0 {
        return Err(ProfileError::NonPositiveFuelEconomy("보유 차량"));
    }
    let fuel_cost =
        (profile.monthly_km() / profile.km_per_liter_owned) * profile.fuel_price_per_liter;
    let insurance_tax = profile.annual_insurance_tax / 12.0;
    let depreciation = profile.car_value * (profile.annual_depreciation_pct / 100.0) / 12.0;
    let opportunity_cost =
        profile.car_value * (profile.opportunity_cost_pct_annual / 100.0) / 12.0;
    let total_cost = fuel_cost
        + profile.monthly_maintenance
        + insurance_tax
        + depreciation
        + opportunity_cost;
    Ok(OwnedMonthly {
        fuel_cost,
        maintenance: profile.monthly_maintenance,
        insurance_tax,
        depreciation,
        opportunity_cost,
        total_cost,
        profit: profile.monthly_revenue() - total_cost,
    })
}

/// 렌트 전략의 월간 비용/손익을 계산한다.
pub fn rented_monthly(profile: &OperatingProfile) -> Result<RentedMonthly, ProfileError> {
    if profile.km_per_liter_rented <= 0.0 {
        return Err(ProfileError::NonPositiveFuelEconomy("렌트 차량"));
    }
    let fuel_cost =
        (profile.monthly_km() / profile.km_per_liter_rented) * profile.fuel_price_per_liter;
    let rental_fee = profile.weekly_rental_fee * WEEKS_PER_MONTH;
    let total_cost = fuel_cost + rental_fee;
    Ok(RentedMonthly {
        fuel_cost,
        rental_fee,
        total_cost,
        profit: profile.monthly_revenue() - total_cost,
    })
}
