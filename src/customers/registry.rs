use std::collections::HashMap;
use crate::core::library::{LibraryError, LibraryResult};
use crate::customers::{Customer, CustomerRegistry};

// InMemoryCustomerRegistry keeps the customer base keyed by customer id
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerRegistry {
    customers: HashMap<String, Customer>,
}

impl InMemoryCustomerRegistry {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers: customers.into_iter().map(|c| (c.customer_id.to_string(), c)).collect(),
        }
    }

    pub fn add_customer(&mut self, customer: Customer) -> LibraryResult<()> {
        if self.customers.contains_key(customer.customer_id.as_str()) {
            return Err(LibraryError::validation(format!("customer {} already registered",
                                                        customer.customer_id).as_str(), Some("409".to_string())));
        }
        self.customers.insert(customer.customer_id.to_string(), customer);
        Ok(())
    }
}

impl CustomerRegistry for InMemoryCustomerRegistry {
    fn contains_customer(&self, customer: &Customer) -> bool {
        self.customers.get(customer.customer_id.as_str()) == Some(customer)
    }

    fn find_customer_by_id(&self, customer_id: &str) -> Option<Customer> {
        self.customers.get(customer_id).cloned()
    }
}
