//! 프로필로부터 LP를 구성하고, 12개월을 두 전략에 배분하는 최적 계획을 구한다.

use crate::finance::{self, OperatingProfile, ProfileError};
use crate::simplex::{self, Constraint, SimplexError, SimplexProblem};

/// 계획 수립 대상 기간 [개월].
pub const PLANNING_HORIZON_MONTHS: f64 = 12.0;
/// Simplex 반복 한도. 변수 2개/제약 최대 2개 문제에는 충분히 크다.
pub const MAX_SIMPLEX_ITERATIONS: usize = 100;
/// 한 전략이 사실상 전체 기간을 차지했다고 보는 판정 기준 [개월].
/// 솔버의 부동소수점 오차를 흡수하기 위해 12보다 약간 작게 둔다.
pub const DOMINANCE_THRESHOLD_MONTHS: f64 = 11.9;

/// 해의 서사적 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 보유 전략이 전 기간을 차지
    OwnedDominant,
    /// 렌트 전략이 전 기간을 차지
    RentalDominant,
    /// 두 전략의 혼합이 최적
    Mixed,
}

/// 최적화된 12개월 배분 계획.
#[derive(Debug, Clone)]
pub struct StrategyPlan {
    /// 보유 차량 운행 개월 수 (x1*)
    pub months_owned: f64,
    /// 렌트 차량 운행 개월 수 (x2*)
    pub months_rented: f64,
    /// 연간 손익 추정치 (목적함수 값)
    pub annual_profit: f64,
    /// 보유 차량 예상 연간 주행거리 (x1* × 월간 km)
    pub projected_owned_km: f64,
    pub verdict: Verdict,
}

/// 최적화 시도의 결과.
#[derive(Debug, Clone)]
pub enum PlanOutcome {
    /// 두 전략 모두 월 손익이 음수라 솔버를 호출하지 않음
    BothUnprofitable,
    /// 솔버가 구한 배분 계획
    Recommended(StrategyPlan),
}

/// 계획 수립 중 발생 가능한 오류.
#[derive(Debug)]
pub enum PlanError {
    /// 프로필 검증 실패
    Profile(ProfileError),
    /// 솔버 실패 (재시도하지 않음)
    Solver(SimplexError),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::Profile(e) => write!(f, "프로필 오류: {e}"),
            PlanError::Solver(e) => write!(f, "최적화 오류: {e}"),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<ProfileError> for PlanError {
    fn from(value: ProfileError) -> Self {
        PlanError::Profile(value)
    }
}

impl From<SimplexError> for PlanError {
    fn from(value: SimplexError) -> Self {
        PlanError::Solver(value)
    }
}

/// 월 손익 계수로 LP를 구성한다. 변수는 (보유 개월, 렌트 개월).
/// 달력 제약은 항상 포함하고, 주행 한도 제약은 한도가 설정된 경우에만 추가한다.
pub fn build_problem(
    profile: &OperatingProfile,
    owned_profit: f64,
    rented_profit: f64,
) -> SimplexProblem {
    let mut constraints = vec![Constraint {
        coefficients: vec![1.0, 1.0],
        rhs: PLANNING_HORIZON_MONTHS,
    }];
    if profile.has_km_cap() {
        constraints.push(Constraint {
            coefficients: vec![profile.monthly_km(), 0.0],
            rhs: profile.annual_km_cap_owned,
        });
    }
    SimplexProblem {
        objective: vec![owned_profit, rented_profit],
        constraints,
    }
}

/// 프로필을 평가해 배분 계획을 구한다. 두 전략 모두 손실이면 솔버를 건너뛴다.
pub fn plan(profile: &OperatingProfile) -> Result<PlanOutcome, PlanError> {
    let owned = finance::owned_monthly(profile)?;
    let rented = finance::rented_monthly(profile)?;

    if owned.profit < 0.0 && rented.profit < 0.0 {
        return Ok(PlanOutcome::BothUnprofitable);
    }

    let problem = build_problem(profile, owned.profit, rented.profit);
    let solution = simplex::maximize(&problem, MAX_SIMPLEX_ITERATIONS)?;

    let months_owned = solution.point[0];
    let months_rented = solution.point[1];
    let verdict = if months_owned > DOMINANCE_THRESHOLD_MONTHS {
        Verdict::OwnedDominant
    } else if months_rented > DOMINANCE_THRESHOLD_MONTHS {
        Verdict::RentalDominant
    } else {
        Verdict::Mixed
    };

    Ok(PlanOutcome::Recommended(StrategyPlan {
        months_owned,
        months_rented,
        annual_profit: solution.objective_value,
        projected_owned_km: months_owned * profile.monthly_km(),
        verdict,
    }))
}
