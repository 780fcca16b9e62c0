use crate::{bisection, fixed_point, newton_raphson, Step};

#[test]
fn history_serializes_with_method_tags() {
    let sol = bisection("x**2 - 2", 0.0, 2.0, 1e-6, 50).unwrap();
    let json = serde_json::to_value(&sol).unwrap();
    assert_eq!(json["converged"], serde_json::json!(true));
    assert_eq!(json["iterations"].as_u64().unwrap() as usize, sol.iterations);
    let row = &json["history"][0];
    assert_eq!(row["method"], serde_json::json!("bisection"));
    assert_eq!(row["k"], serde_json::json!(1));
    assert!(row["a"].is_number());
    assert!(row["fc"].is_number());

    let sol = fixed_point("cos(x)", 1.0, 1e-8, 100).unwrap();
    let json = serde_json::to_value(&sol).unwrap();
    assert_eq!(json["history"][0]["method"], serde_json::json!("fixed_point"));
    assert!(json["history"][0]["gx"].is_number());
}

#[test]
fn step_display_names_method_fields() {
    let sol = newton_raphson("x**3 - 2*x - 5", 2.0, 1e-6, 50).unwrap();
    let line = format!("{}", sol.history[0]);
    assert!(line.contains("f'(x)="));
    assert!(line.contains("x_new="));

    let sol = bisection("x**2 - 2", 0.0, 2.0, 1e-6, 50).unwrap();
    let line = format!("{}", sol.history[0]);
    assert!(line.contains("a=0"));
    assert!(line.contains("f(c)="));
}

#[test]
fn stopping_metric_is_exposed_per_row() {
    let sol = bisection("x**2 - 2", 0.0, 2.0, 1e-6, 50).unwrap();
    let last = sol.history.last().unwrap();
    assert!(last.err() < 1e-6);
    assert!(matches!(last, Step::Bisection { .. }));
}
