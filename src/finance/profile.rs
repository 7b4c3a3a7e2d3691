/// 월 환산 계수. 1년 52주를 12개월로 나눈 값(52/12 ≈ 4.33)을 관례대로 상수화.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// 운행 프로필. 입력 수집이 끝난 뒤 한 번 만들어지고 이후 읽기 전용으로 쓰인다.
#[derive(Debug, Clone)]
pub struct OperatingProfile {
    /// 일평균 매출
    pub daily_revenue: f64,
    /// 주당 근무일
    pub days_per_week: f64,
    /// 일평균 주행거리 [km]
    pub daily_km: f64,

    /// 보유 차량 시장 가치
    pub car_value: f64,
    /// 연간 감가상각률 [%]
    pub annual_depreciation_pct: f64,
    /// 연간 보험+세금 합계
    pub annual_insurance_tax: f64,
    /// 월 정비비
    pub monthly_maintenance: f64,
    /// 보유 차량 연비 [km/L]
    pub km_per_liter_owned: f64,
    /// 연간 기회비용률 [%] (차량 대금을 투자했을 때의 기대 수익률)
    pub opportunity_cost_pct_annual: f64,
    /// 보유 차량 연간 주행 한도 [km]. 0이면 한도 없음.
    pub annual_km_cap_owned: f64,

    /// 주간 렌트 요금
    pub weekly_rental_fee: f64,
    /// 렌트 차량 연비 [km/L]
    pub km_per_liter_rented: f64,

    /// 연료 단가 [통화/L]
    pub fuel_price_per_liter: f64,
}

/// 프로필 검증 오류.
#[derive(Debug)]
pub enum ProfileError {
    /// 연비가 0 이하라서 연료비를 계산할 수 없음
    NonPositiveFuelEconomy(&'static str),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::NonPositiveFuelEconomy(which) => {
                write!(f, "연비는 0보다 커야 합니다: {which}")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

impl OperatingProfile {
    /// 월간 주행거리 [km].
    pub fn monthly_km(&self) -> f64 {
        self.daily_km * self.days_per_week * WEEKS_PER_MONTH
    }

    /// 월간 매출.
    pub fn monthly_revenue(&self) -> f64 {
        self.daily_revenue * self.days_per_week * WEEKS_PER_MONTH
    }

    /// 연간 주행 한도가 설정되어 있는지.
    pub fn has_km_cap(&self) -> bool {
        self.annual_km_cap_owned > 0.0
    }

    /// 연비 입력을 검증한다. 0 이하의 연비는 비용식의 분모이므로 즉시 거부한다.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.km_per_liter_owned <= 0.0 {
            return Err(ProfileError::NonPositiveFuelEconomy("보유 차량"));
        }
        if self.km_per_liter_rented <= 0.0 {
            return Err(ProfileError::NonPositiveFuelEconomy("렌트 차량"));
        }
        Ok(())
    }
}
