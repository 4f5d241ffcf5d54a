use crate::models::Customer;

/// Computes a customer's risk score as an integer in [0, 100].
///
/// Additive point system, each term independent:
/// - credit score tier: `<650` adds 30, `[650, 700)` adds 20, `>=700` adds 10
/// - missed payments: 5 points per zero in the repayment history, uncapped
/// - debt-to-annual-income ratio: `>0.5` adds 25, `(0.3, 0.5]` adds 15,
///   otherwise 5
///
/// The sum is clamped to 100. Pure and total: any record that satisfies the
/// field types produces a score, including zero or negative amounts.
pub fn compute_risk(customer: &Customer) -> u32 {
    let mut score: u32 = 0;

    // Lower credit score => higher risk
    score += if customer.credit_score < 650 {
        30
    } else if customer.credit_score < 700 {
        20
    } else {
        10
    };

    // Missed payments in repayment history
    let missed = customer
        .loan_repayment_history
        .iter()
        .filter(|&&p| p == 0)
        .count() as u32;
    score += missed * 5;

    // Loan to annual income ratio. Zero income must land in the highest
    // tier: 0/0 is NaN and NaN fails every `>` comparison, so the guard
    // maps it to infinity instead of relying on IEEE division.
    let annual_income = customer.monthly_income * 12.0;
    let ratio = if annual_income == 0.0 {
        f64::INFINITY
    } else {
        customer.outstanding_loans / annual_income
    };
    score += if ratio > 0.5 {
        25
    } else if ratio > 0.3 {
        15
    } else {
        5
    };

    score.min(100)
}

/// Whether a caller-supplied risk score crosses the alert threshold.
///
/// The boundary is strictly greater-than: a score equal to the threshold
/// does not trigger. An absent score never triggers.
pub fn exceeds_alert_threshold(risk_score: Option<f64>, threshold: u32) -> bool {
    risk_score.is_some_and(|score| score > f64::from(threshold))
}
