use approx::assert_relative_eq;
use profit_margin::{calculate_profit_margin, MarginError};
use proptest::prelude::*;

fn positive_revenue() -> impl Strategy<Value = f64> {
    1e-6f64..1e12
}

proptest! {
    #[test]
    fn margin_is_a_percentage_matching_the_formula(revenue in positive_revenue(), share in 0.0f64..=1.0) {
        let cost = revenue * share;
        let margin = calculate_profit_margin(revenue, cost).unwrap();

        prop_assert!((0.0..=100.0).contains(&margin));
        assert_relative_eq!(margin, ((revenue - cost) / revenue) * 100.0, max_relative = 1e-12);
    }

    #[test]
    fn break_even_is_zero(revenue in positive_revenue()) {
        prop_assert_eq!(calculate_profit_margin(revenue, revenue), Ok(0.0));
    }

    #[test]
    fn zero_cost_is_one_hundred(revenue in positive_revenue()) {
        prop_assert_eq!(calculate_profit_margin(revenue, 0.0), Ok(100.0));
    }

    #[test]
    fn non_positive_revenue_is_rejected(revenue in -1e12f64..=0.0, cost in -1e12f64..1e12) {
        prop_assert_eq!(calculate_profit_margin(revenue, cost), Err(MarginError::InvalidRevenue));
    }

    #[test]
    fn negative_cost_is_rejected(revenue in positive_revenue(), cost in 1e-9f64..1e12) {
        prop_assert_eq!(calculate_profit_margin(revenue, -cost), Err(MarginError::InvalidCost));
    }

    #[test]
    fn cost_above_revenue_is_rejected(revenue in positive_revenue(), excess in 1.0f64..1e6) {
        let cost = revenue * (1.0 + excess);
        prop_assert_eq!(
            calculate_profit_margin(revenue, cost),
            Err(MarginError::CostExceedsRevenue)
        );
    }
}

#[test]
fn test_concrete_cases() {
    let cases = [
        (1000.0, 600.0, 40.0),
        (1000.0, 100.0, 90.0),
        (1000.0, 950.0, 5.0),
        (1000.0, 1000.0, 0.0),
        (1000.0, 0.0, 100.0),
        (100.0, 70.0, 30.0),
    ];

    for (revenue, cost, expected) in cases {
        assert_eq!(calculate_profit_margin(revenue, cost), Ok(expected), "({revenue}, {cost})");
    }
}

#[test]
fn test_error_messages_reach_callers() {
    let err = calculate_profit_margin(0.0, 100.0).unwrap_err();
    assert!(err.to_string().contains("Revenue must be positive"));

    let err = calculate_profit_margin(1000.0, -500.0).unwrap_err();
    assert!(err.to_string().contains("Cost cannot be negative"));

    let err = calculate_profit_margin(1000.0, 1500.0).unwrap_err();
    assert!(err.to_string().contains("Cost cannot exceed revenue"));
}
