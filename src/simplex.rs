//! 범용 Simplex 모듈. `max c'x, Ax ≤ b, x ≥ 0` 형태의 소규모 LP를
//! 밀집 테이블로와 Bland 규칙(순환 방지)으로 푼다.

const EPS: f64 = 1e-9;
const FEAS_TOL: f64 = 1e-7;

/// 부등식 제약 한 줄: `coefficients · x ≤ rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub rhs: f64,
}

/// 비음수 변수에 대한 최대화 문제.
#[derive(Debug, Clone)]
pub struct SimplexProblem {
    /// 목적함수 계수
    pub objective: Vec<f64>,
    /// `≤` 제약 목록
    pub constraints: Vec<Constraint>,
}

/// 최적해와 목적함수 값.
#[derive(Debug, Clone)]
pub struct SimplexSolution {
    pub point: Vec<f64>,
    pub objective_value: f64,
}

/// 솔버 실패 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplexError {
    /// 제약을 만족하는 해가 없음
    Infeasible,
    /// 목적함수가 위로 발산
    Unbounded,
    /// 반복 한도 초과
    IterationLimit,
    /// 문제 정의 자체가 잘못됨 (차원 불일치 등)
    InvalidProblem(&'static str),
}

impl std::fmt::Display for SimplexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimplexError::Infeasible => write!(f, "실행 가능한 해가 없습니다."),
            SimplexError::Unbounded => write!(f, "목적함수가 발산합니다(unbounded)."),
            SimplexError::IterationLimit => write!(f, "반복 한도를 초과했습니다."),
            SimplexError::InvalidProblem(msg) => write!(f, "잘못된 문제 정의: {msg}"),
        }
    }
}

impl std::error::Error for SimplexError {}

/// 테이블로 상태. 목적행은 `z - c·x = 0` 형태로 유지하며 피벗 시 함께 갱신한다.
struct Tableau {
    rows: Vec<Vec<f64>>,
    obj: Vec<f64>,
    basis: Vec<usize>,
    width: usize,
    /// 인공변수 열의 시작 인덱스. 이 이상의 열은 2단계에서 진입 금지.
    art_start: usize,
}

impl Tableau {
    fn pivot(&mut self, pivot_row: usize, pivot_col: usize) {
        let p = self.rows[pivot_row][pivot_col];
        for v in self.rows[pivot_row].iter_mut() {
            *v /= p;
        }
        let pivot_vals = self.rows[pivot_row].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == pivot_row {
                continue;
            }
            let factor = row[pivot_col];
            if factor.abs() > EPS {
                for (v, &pv) in row.iter_mut().zip(&pivot_vals) {
                    *v -= factor * pv;
                }
            }
        }
        let factor = self.obj[pivot_col];
        if factor.abs() > EPS {
            for (v, &pv) in self.obj.iter_mut().zip(&pivot_vals) {
                *v -= factor * pv;
            }
        }
        self.basis[pivot_row] = pivot_col;
    }

    /// 기저 열의 목적행 계수를 0으로 만든다.
    fn canonicalize(&mut self) {
        for (r, row) in self.rows.iter().enumerate() {
            let factor = self.obj[self.basis[r]];
            if factor.abs() > EPS {
                for (v, &rv) in self.obj.iter_mut().zip(row) {
                    *v -= factor * rv;
                }
            }
        }
    }

    /// Bland 규칙으로 개선 피벗을 반복한다. `allow_artificial`이 거짓이면
    /// 인공변수 열은 진입 후보에서 제외한다.
    fn optimize(
        &mut self,
        allow_artificial: bool,
        iterations: &mut usize,
        max_iterations: usize,
    ) -> Result<(), SimplexError> {
        loop {
            let limit = if allow_artificial {
                self.width - 1
            } else {
                self.art_start
            };
            let entering = (0..limit).find(|&j| self.obj[j] < -EPS);
            let entering = match entering {
                Some(j) => j,
                None => return Ok(()),
            };

            let mut leaving: Option<usize> = None;
            let mut best_ratio = f64::INFINITY;
            for (r, row) in self.rows.iter().enumerate() {
                if row[entering] > EPS {
                    let ratio = row[self.width - 1] / row[entering];
                    let better = ratio < best_ratio - EPS
                        || (ratio < best_ratio + EPS
                            && leaving.is_some_and(|l| self.basis[r] < self.basis[l]));
                    if better {
                        best_ratio = ratio;
                        leaving = Some(r);
                    }
                }
            }
            let leaving = leaving.ok_or(SimplexError::Unbounded)?;

            *iterations += 1;
            if *iterations > max_iterations {
                return Err(SimplexError::IterationLimit);
            }
            self.pivot(leaving, entering);
        }
    }
}

/// 문제를 최대화한다. 음수 우변이 있으면 2단계법(인공변수)으로 초기 기저를 찾는다.
pub fn maximize(
    problem: &SimplexProblem,
    max_iterations: usize,
) -> Result<SimplexSolution, SimplexError> {
    let n = problem.objective.len();
    if n == 0 {
        return Err(SimplexError::InvalidProblem("목적함수가 비어 있습니다."));
    }
    for c in &problem.constraints {
        if c.coefficients.len() != n {
            return Err(SimplexError::InvalidProblem(
                "제약 계수 개수가 변수 개수와 다릅니다.",
            ));
        }
    }

    let m = problem.constraints.len();
    // 제약이 없으면 원점이 유일한 꼭짓점: 양의 계수가 하나라도 있으면 발산.
    if m == 0 {
        if problem.objective.iter().any(|&c| c > EPS) {
            return Err(SimplexError::Unbounded);
        }
        return Ok(SimplexSolution {
            point: vec![0.0; n],
            objective_value: 0.0,
        });
    }

    let n_art = problem.constraints.iter().filter(|c| c.rhs < 0.0).count();
    let art_start = n + m;
    let width = n + m + n_art + 1;

    let mut rows = Vec::with_capacity(m);
    let mut basis = Vec::with_capacity(m);
    let mut next_art = art_start;
    for (i, c) in problem.constraints.iter().enumerate() {
        let mut row = vec![0.0; width];
        // 음수 우변은 행을 뒤집고 인공변수로 초기 기저를 만든다.
        let flip = if c.rhs < 0.0 { -1.0 } else { 1.0 };
        for (j, &a) in c.coefficients.iter().enumerate() {
            row[j] = flip * a;
        }
        row[n + i] = flip;
        row[width - 1] = flip * c.rhs;
        if flip < 0.0 {
            row[next_art] = 1.0;
            basis.push(next_art);
            next_art += 1;
        } else {
            basis.push(n + i);
        }
        rows.push(row);
    }

    let mut tableau = Tableau {
        rows,
        obj: vec![0.0; width],
        basis,
        width,
        art_start,
    };
    let mut iterations = 0usize;

    if n_art > 0 {
        // 1단계: 인공변수 합의 최소화 (최대화 관점에선 -합).
        for col in art_start..width - 1 {
            tableau.obj[col] = 1.0;
        }
        tableau.canonicalize();
        tableau.optimize(true, &mut iterations, max_iterations)?;
        if tableau.obj[width - 1] < -FEAS_TOL {
            return Err(SimplexError::Infeasible);
        }
        // 기저에 남은 인공변수는 실제 변수로 교체한다. 전부 0인 행은 중복 제약.
        for r in 0..tableau.rows.len() {
            if tableau.basis[r] >= art_start {
                let col = (0..art_start).find(|&j| tableau.rows[r][j].abs() > EPS);
                if let Some(col) = col {
                    tableau.pivot(r, col);
                }
            }
        }
    }

    // 2단계: 원래 목적함수로 교체 후 최적화.
    tableau.obj = vec![0.0; width];
    for (j, &c) in problem.objective.iter().enumerate() {
        tableau.obj[j] = -c;
    }
    tableau.canonicalize();
    tableau.optimize(false, &mut iterations, max_iterations)?;

    let mut point = vec![0.0; n];
    for (r, &b) in tableau.basis.iter().enumerate() {
        if b < n {
            point[b] = tableau.rows[r][width - 1];
        }
    }
    Ok(SimplexSolution {
        point,
        objective_value: tableau.obj[width - 1],
    })
}
