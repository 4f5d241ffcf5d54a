use serde::{Deserialize, Serialize};

// ============ Store Models ============

/// A customer credit record held in the in-memory store.
///
/// Field names serialize in camelCase to match the wire format consumed by
/// the dashboard frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier, assigned at seed time and never changed.
    pub customer_id: String,
    /// Display name.
    pub name: String,
    /// Gross monthly income in currency units.
    pub monthly_income: f64,
    /// Monthly expenses in currency units.
    pub monthly_expenses: f64,
    /// Bureau credit score, conventionally in [300, 850].
    pub credit_score: i32,
    /// Outstanding loan balance in currency units.
    pub outstanding_loans: f64,
    /// Chronological repayment flags: 1 = paid, 0 = missed.
    pub loan_repayment_history: Vec<u8>,
    /// Current account balance in currency units.
    pub account_balance: f64,
    /// Review status. Free-form; arbitrary values round-trip unchanged.
    pub status: String,
}

// ============ API Request/Response Models ============

/// A customer record augmented with its computed risk score, as returned by
/// the list endpoint. The score is derived per request and never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWithRisk {
    #[serde(flatten)]
    pub customer: Customer,
    pub risk_score: u32,
}

/// Request payload for updating a customer's review status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// New status value. Content is not validated.
    pub status: String,
}

/// Response payload for a successful status update.
#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    /// Result message.
    pub msg: String,
    /// The updated customer record.
    pub customer: Customer,
}

/// Request payload for the high-risk alert endpoint.
///
/// Both fields are optional: an absent `riskScore` simply never exceeds the
/// alert threshold, and the request is still acknowledged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRequest {
    /// Identifier of the customer the alert refers to.
    pub customer_id: Option<String>,
    /// Caller-supplied risk score. Trusted verbatim, not recomputed.
    pub risk_score: Option<f64>,
}
