/// Unit tests for risk scoring
/// Tests the seeded-record scores, tier boundaries, clamping, and the
/// alert threshold predicate
use credit_risk_api::models::Customer;
use credit_risk_api::risk::{compute_risk, exceeds_alert_threshold};

fn customer(
    credit_score: i32,
    history: Vec<u8>,
    outstanding_loans: f64,
    monthly_income: f64,
) -> Customer {
    Customer {
        customer_id: "CUST9999".to_string(),
        name: "Test Customer".to_string(),
        monthly_income,
        monthly_expenses: 0.0,
        credit_score,
        outstanding_loans,
        loan_repayment_history: history,
        account_balance: 0.0,
        status: "Review".to_string(),
    }
}

#[cfg(test)]
mod seeded_record_tests {
    use super::*;

    #[test]
    fn test_alice_johnson_scores_25() {
        // 710 -> +10, two missed -> +10, 15000/74400 ~ 0.202 -> +5
        let c = customer(710, vec![1, 0, 1, 1, 1, 1, 0, 1], 15000.0, 6200.0);
        assert_eq!(compute_risk(&c), 25);
    }

    #[test]
    fn test_bob_smith_scores_65() {
        // 640 -> +30, four missed -> +20, 20000/57600 ~ 0.347 -> +15
        let c = customer(640, vec![1, 1, 1, 0, 0, 1, 0, 0], 20000.0, 4800.0);
        assert_eq!(compute_risk(&c), 65);
    }
}

#[cfg(test)]
mod credit_tier_tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        // Empty history and negligible ratio isolate the credit tier term
        assert_eq!(compute_risk(&customer(649, vec![], 0.0, 10_000.0)), 35); // 30 + 5
        assert_eq!(compute_risk(&customer(650, vec![], 0.0, 10_000.0)), 25); // 20 + 5
        assert_eq!(compute_risk(&customer(699, vec![], 0.0, 10_000.0)), 25); // 20 + 5
        assert_eq!(compute_risk(&customer(700, vec![], 0.0, 10_000.0)), 15); // 10 + 5
    }

    #[test]
    fn test_scores_outside_conventional_range() {
        assert_eq!(compute_risk(&customer(0, vec![], 0.0, 10_000.0)), 35);
        assert_eq!(compute_risk(&customer(850, vec![], 0.0, 10_000.0)), 15);
    }
}

#[cfg(test)]
mod ratio_tier_tests {
    use super::*;

    #[test]
    fn test_ratio_boundaries_are_exclusive() {
        // Monthly income 1000 gives an annual income of 12000
        assert_eq!(compute_risk(&customer(710, vec![], 6_000.0, 1_000.0)), 25); // 0.5 exactly -> +15
        assert_eq!(compute_risk(&customer(710, vec![], 6_000.01, 1_000.0)), 35); // > 0.5 -> +25
        assert_eq!(compute_risk(&customer(710, vec![], 3_600.0, 1_000.0)), 15); // 0.3 exactly -> +5
        assert_eq!(compute_risk(&customer(710, vec![], 3_600.01, 1_000.0)), 25); // > 0.3 -> +15
    }

    #[test]
    fn test_zero_income_selects_highest_tier() {
        assert_eq!(compute_risk(&customer(710, vec![], 5_000.0, 0.0)), 35); // 10 + 25
    }

    #[test]
    fn test_zero_income_and_zero_loans_still_highest_tier() {
        // 0/0 would be NaN without the guard
        assert_eq!(compute_risk(&customer(710, vec![], 0.0, 0.0)), 35);
    }

    #[test]
    fn test_negative_loans_fall_through_to_lowest_tier() {
        // Negative amounts are not validated; the formula applies as-is
        assert_eq!(compute_risk(&customer(710, vec![], -5_000.0, 1_000.0)), 15);
    }
}

#[cfg(test)]
mod missed_payment_tests {
    use super::*;

    #[test]
    fn test_empty_history_adds_nothing() {
        let with_history = customer(710, vec![1, 1, 1], 0.0, 10_000.0);
        let without = customer(710, vec![], 0.0, 10_000.0);
        assert_eq!(compute_risk(&with_history), compute_risk(&without));
    }

    #[test]
    fn test_each_missed_payment_adds_five() {
        assert_eq!(compute_risk(&customer(710, vec![0], 0.0, 10_000.0)), 20);
        assert_eq!(compute_risk(&customer(710, vec![0, 0], 0.0, 10_000.0)), 25);
        assert_eq!(compute_risk(&customer(710, vec![0, 1, 0], 0.0, 10_000.0)), 25);
    }

    #[test]
    fn test_score_clamps_at_100() {
        // 30 + 20*5 + 25 = 155 raw
        let c = customer(300, vec![0; 20], 100_000.0, 100.0);
        assert_eq!(compute_risk(&c), 100);
    }

    #[test]
    fn test_raw_sum_of_exactly_100_is_preserved() {
        // 30 + 9*5 + 25 = 100
        let c = customer(300, vec![0; 9], 100_000.0, 100.0);
        assert_eq!(compute_risk(&c), 100);
    }
}

#[cfg(test)]
mod alert_threshold_tests {
    use super::*;

    #[test]
    fn test_boundary_is_strictly_greater_than() {
        assert!(!exceeds_alert_threshold(Some(70.0), 70));
        assert!(exceeds_alert_threshold(Some(70.5), 70));
        assert!(exceeds_alert_threshold(Some(71.0), 70));
    }

    #[test]
    fn test_absent_score_never_triggers() {
        assert!(!exceeds_alert_threshold(None, 70));
        assert!(!exceeds_alert_threshold(None, 0));
    }

    #[test]
    fn test_threshold_is_configurable() {
        assert!(!exceeds_alert_threshold(Some(75.0), 80));
        assert!(exceeds_alert_threshold(Some(81.0), 80));
    }
}
