use crate::models::Customer;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory customer collection, owned by the application state and shared
/// across request handlers.
///
/// The collection lives for the process lifetime: it is seeded once at
/// startup and records are never created or deleted through the API. Reads
/// take a shared lock and clone a snapshot; status updates take an exclusive
/// lock for the in-place mutation. Guards are never held across I/O.
#[derive(Clone)]
pub struct CustomerStore {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl CustomerStore {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers: Arc::new(RwLock::new(customers)),
        }
    }

    /// Builds a store seeded with the fixed demo records.
    pub fn with_seed_data() -> Self {
        Self::new(seed_customers())
    }

    /// Returns the full collection in insertion order.
    pub async fn list(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }

    /// Overwrites the status of the customer with the given id and returns
    /// the updated record, or `None` if no record matches.
    pub async fn update_status(&self, customer_id: &str, status: String) -> Option<Customer> {
        let mut customers = self.customers.write().await;
        let customer = customers.iter_mut().find(|c| c.customer_id == customer_id)?;
        customer.status = status;
        Some(customer.clone())
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

/// Fixed records the store is seeded with at process start.
fn seed_customers() -> Vec<Customer> {
    vec![
        Customer {
            customer_id: "CUST1001".to_string(),
            name: "Alice Johnson".to_string(),
            monthly_income: 6200.0,
            monthly_expenses: 3500.0,
            credit_score: 710,
            outstanding_loans: 15000.0,
            loan_repayment_history: vec![1, 0, 1, 1, 1, 1, 0, 1],
            account_balance: 12500.0,
            status: "Review".to_string(),
        },
        Customer {
            customer_id: "CUST1002".to_string(),
            name: "Bob Smith".to_string(),
            monthly_income: 4800.0,
            monthly_expenses: 2800.0,
            credit_score: 640,
            outstanding_loans: 20000.0,
            loan_repayment_history: vec![1, 1, 1, 0, 0, 1, 0, 0],
            account_balance: 7300.0,
            status: "Approved".to_string(),
        },
    ]
}
