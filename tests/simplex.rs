use hybrid_fleet_optimizer::simplex::{maximize, Constraint, SimplexError, SimplexProblem};

fn problem(objective: Vec<f64>, constraints: Vec<(Vec<f64>, f64)>) -> SimplexProblem {
    SimplexProblem {
        objective,
        constraints: constraints
            .into_iter()
            .map(|(coefficients, rhs)| Constraint { coefficients, rhs })
            .collect(),
    }
}

#[test]
fn bounded_optimum_at_single_axis_vertex() {
    // max 3x+2y, x+y<=4, x+3y<=6 → (4,0), value 12
    let p = problem(vec![3.0, 2.0], vec![(vec![1.0, 1.0], 4.0), (vec![1.0, 3.0], 6.0)]);
    let sol = maximize(&p, 100).expect("solution");
    assert!((sol.point[0] - 4.0).abs() < 1e-9, "x={}", sol.point[0]);
    assert!(sol.point[1].abs() < 1e-9, "y={}", sol.point[1]);
    assert!((sol.objective_value - 12.0).abs() < 1e-9);
}

#[test]
fn bounded_optimum_at_interior_vertex() {
    // max 2x+3y, x+y<=4, x+3y<=6 → (3,1), value 9
    let p = problem(vec![2.0, 3.0], vec![(vec![1.0, 1.0], 4.0), (vec![1.0, 3.0], 6.0)]);
    let sol = maximize(&p, 100).expect("solution");
    assert!((sol.point[0] - 3.0).abs() < 1e-9, "x={}", sol.point[0]);
    assert!((sol.point[1] - 1.0).abs() < 1e-9, "y={}", sol.point[1]);
    assert!((sol.objective_value - 9.0).abs() < 1e-9);
}

#[test]
fn unbounded_direction_is_detected() {
    let p = problem(vec![1.0, 1.0], vec![(vec![1.0, -1.0], 1.0)]);
    assert_eq!(maximize(&p, 100).unwrap_err(), SimplexError::Unbounded);
}

#[test]
fn no_constraints_edge_cases() {
    let p = problem(vec![1.0], vec![]);
    assert_eq!(maximize(&p, 100).unwrap_err(), SimplexError::Unbounded);

    let p = problem(vec![-1.0, 0.0], vec![]);
    let sol = maximize(&p, 100).expect("origin");
    assert_eq!(sol.point, vec![0.0, 0.0]);
    assert_eq!(sol.objective_value, 0.0);
}

#[test]
fn infeasible_system_is_detected() {
    // x+y <= -1 has no non-negative solution
    let p = problem(vec![1.0, 1.0], vec![(vec![1.0, 1.0], -1.0)]);
    assert_eq!(maximize(&p, 100).unwrap_err(), SimplexError::Infeasible);
}

#[test]
fn negative_rhs_feasible_via_two_phase() {
    // x >= 2 (written -x <= -2), x <= 5, minimize x → x*=2
    let p = problem(vec![-1.0], vec![(vec![-1.0], -2.0), (vec![1.0], 5.0)]);
    let sol = maximize(&p, 100).expect("solution");
    assert!((sol.point[0] - 2.0).abs() < 1e-9, "x={}", sol.point[0]);
    assert!((sol.objective_value + 2.0).abs() < 1e-9);
}

#[test]
fn iteration_budget_is_enforced() {
    let p = problem(vec![1.0], vec![(vec![1.0], 1.0)]);
    assert_eq!(maximize(&p, 0).unwrap_err(), SimplexError::IterationLimit);
    assert!(maximize(&p, 100).is_ok());
}

#[test]
fn dimension_mismatch_is_rejected() {
    let p = problem(vec![1.0, 1.0], vec![(vec![1.0], 4.0)]);
    assert!(matches!(
        maximize(&p, 100),
        Err(SimplexError::InvalidProblem(_))
    ));
}
