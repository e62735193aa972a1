use serde::{Deserialize, Serialize};

pub mod registry;

// Customer is a registered member of the media library who can borrow and reserve media.
// Equality is by value so that two handles to the same member compare equal.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    pub fn new(customer_id: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// Read-only view on the customer base consulted by the ledger.
pub trait CustomerRegistry: Sync + Send {
    fn contains_customer(&self, customer: &Customer) -> bool;
    fn find_customer_by_id(&self, customer_id: &str) -> Option<Customer>;
}
